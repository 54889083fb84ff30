#[cfg(test)]
mod tests {
    use crate::airspace::AirspaceBuilder;
    use crate::commands::PlaneCommand;
    use crate::config::{Difficulty, PlaneType};
    use crate::enums::PlaneState;
    use crate::error::{AirspaceError, ConfigError};
    use crate::events::EndReason;
    use crate::types::{Direction, Position};

    fn sample_type() -> PlaneType {
        PlaneType {
            name: "Jet".into(),
            mark: 'j',
            weight: 1,
            moves_per_tick: 1,
            ticks_pending: 10,
            ticks_rolling: 5,
            ticks_per_move: 1,
            immediate_turn: false,
            can_hover: false,
            can_enter_no_fly: false,
            entry_min_height: 2,
            entry_max_height: 5,
            exit_height: 5,
            initial_fuel: 600,
            entry_exit_routes: true,
            airport_loop: false,
            airport_entry: true,
            airport_exit: true,
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_direction_rotation_wraps() {
        assert_eq!(Direction::North.right(1), Direction::NorthEast);
        assert_eq!(Direction::North.left(1), Direction::NorthWest);
        assert_eq!(Direction::NorthWest.right(1), Direction::North);
        assert_eq!(Direction::East.right(-10), Direction::North);
        assert_eq!(Direction::South.left(12), Direction::North);
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_eq!(d.right(8), d);
        }
        assert_eq!(Direction::SouthWest.reverse(), Direction::NorthEast);
    }

    #[test]
    fn test_direction_parse_and_display() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
        assert!("NNE".parse::<Direction>().is_err());
        assert_eq!(
            serde_json::to_string(&Direction::SouthEast).unwrap(),
            "\"SE\""
        );
    }

    #[test]
    fn test_position_move_has_no_diagonal_scaling() {
        let p = Position::new(5, 5);
        assert_eq!(p.moved(Direction::East, 1), Position::new(6, 5));
        assert_eq!(p.moved(Direction::North, 2), Position::new(5, 3));
        assert_eq!(p.moved(Direction::SouthWest, 3), Position::new(2, 8));
        assert_eq!(p.moved(Direction::NorthEast, 0), p);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = Position::new(0, 0);
        assert_eq!(a.distance(Position::new(3, 1)), 3);
        assert_eq!(a.distance(Position::new(-2, 2)), 2);
        assert_eq!(Position::new(4, 7).distance(a), 7);
        assert_eq!(a.distance(a), 0);
    }

    // ---- Airspace ----

    #[test]
    fn test_airspace_queries() {
        let airspace = AirspaceBuilder::new(10, 8)
            .entry('0', Position::new(0, 3))
            .airport('%', Position::new(5, 5), Direction::North)
            .navaid(Position::new(4, 4))
            .no_fly(Position::new(7, 2))
            .route('0', '%', Direction::East, 2)
            .build()
            .unwrap();

        assert!(airspace.contains(Position::new(9, 7)));
        assert!(!airspace.contains(Position::new(10, 7)));
        assert!(!airspace.contains(Position::new(-1, 0)));
        assert_eq!(airspace.navaid_at(Position::new(4, 4)), Some(Position::new(4, 4)));
        assert_eq!(airspace.navaid_at(Position::new(4, 5)), None);
        assert_eq!(
            airspace.entry_point_at(Position::new(5, 5)).map(|ep| ep.sign),
            Some('%')
        );
        assert!(airspace.entry_point('%').unwrap().is_airport);
        assert!(airspace.is_no_fly(Position::new(7, 2)));
        assert_eq!(airspace.routes().len(), 1);
        assert_eq!((airspace.width(), airspace.height()), (10, 8));
        assert_eq!(airspace.navaids(), &[Position::new(4, 4)]);
        assert_eq!(airspace.no_fly().len(), 1);
        assert!(airspace.no_fly().contains(&Position::new(7, 2)));
        let signs: Vec<char> = airspace.entry_points().map(|ep| ep.sign).collect();
        assert_eq!(signs, vec!['%', '0']);
    }

    #[test]
    fn test_airspace_rejects_bad_input() {
        assert_eq!(
            AirspaceBuilder::new(0, 5).build().unwrap_err(),
            AirspaceError::EmptyBounds {
                width: 0,
                height: 5
            }
        );
        assert!(matches!(
            AirspaceBuilder::new(5, 5)
                .navaid(Position::new(5, 0))
                .build()
                .unwrap_err(),
            AirspaceError::OutOfBounds { what: "navaid", .. }
        ));
        assert_eq!(
            AirspaceBuilder::new(5, 5)
                .entry('1', Position::new(0, 0))
                .entry('1', Position::new(4, 4))
                .build()
                .unwrap_err(),
            AirspaceError::DuplicateSign('1')
        );
        assert_eq!(
            AirspaceBuilder::new(5, 5)
                .entry('1', Position::new(0, 0))
                .route('1', '2', Direction::East, 1)
                .build()
                .unwrap_err(),
            AirspaceError::UnknownEntryPoint {
                entry: '1',
                exit: '2',
                missing: '2'
            }
        );
        assert_eq!(
            AirspaceBuilder::new(5, 5)
                .entry('1', Position::new(0, 0))
                .route('1', '1', Direction::East, 0)
                .build()
                .unwrap_err(),
            AirspaceError::ZeroRouteWeights
        );
    }

    // ---- Configuration ----

    #[test]
    fn test_plane_type_validation() {
        assert!(sample_type().validate().is_ok());

        let mut t = sample_type();
        t.ticks_per_move = 0;
        assert!(t.validate().is_err());

        let mut t = sample_type();
        t.entry_min_height = 4;
        t.entry_max_height = 3;
        assert!(t.validate().is_err());

        let mut t = sample_type();
        t.exit_height = 6;
        assert!(matches!(
            t.validate(),
            Err(ConfigError::InvalidPlaneType { .. })
        ));
    }

    #[test]
    fn test_difficulty_callsign_capacity() {
        let ok = Difficulty {
            name: "Easy".into(),
            duration: 3600,
            num_planes: 26,
        };
        assert!(ok.validate().is_ok());

        let too_many = Difficulty {
            num_planes: 27,
            ..ok
        };
        assert!(matches!(
            too_many.validate(),
            Err(ConfigError::TooManyPlanes { requested: 27, .. })
        ));
    }

    #[test]
    fn test_plane_type_deserializes_from_json() {
        let json = serde_json::to_string(&sample_type()).unwrap();
        let back: PlaneType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_type());
    }

    // ---- Lifecycle predicates ----

    #[test]
    fn test_state_predicates() {
        use PlaneState::*;
        for s in [Pending, Incoming, Waiting, Rolling, Flying, Approach, Landed, Departed] {
            assert_eq!(s.is_done(), matches!(s, Landed | Departed));
            assert_eq!(
                s.is_active(),
                matches!(s, Incoming | Waiting | Rolling | Flying | Approach)
            );
            assert_eq!(s.is_airborne(), matches!(s, Flying | Approach));
            assert_eq!(s.accepts_commands(), matches!(s, Waiting | Rolling | Flying));
        }
        assert!(!Incoming.is_consuming_fuel());
        assert!(Waiting.is_consuming_fuel());
    }

    // ---- Commands & end reasons ----

    #[test]
    fn test_plane_command_tagged_json() {
        let json = serde_json::to_string(&PlaneCommand::Turn { delta: -2 }).unwrap();
        assert_eq!(json, r#"{"type":"Turn","delta":-2}"#);
        let back: PlaneCommand = serde_json::from_str(r#"{"type":"Hold"}"#).unwrap();
        assert_eq!(back, PlaneCommand::Hold);
    }

    #[test]
    fn test_end_reason_planes_and_message() {
        let collision = EndReason::MidAirCollision {
            first: 'A',
            second: 'Q',
        };
        assert_eq!(collision.planes(), vec!['A', 'Q']);
        assert_eq!(collision.to_string(), "Mid-air collision: A and Q");

        let fuel = EndReason::FuelExhausted { plane: 'C' };
        assert_eq!(fuel.planes(), vec!['C']);
        assert!(fuel.to_string().starts_with("Fuel exhausted"));
    }
}
