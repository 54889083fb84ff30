//! Built-in configuration: difficulty levels, the plane catalogue and
//! the default game rules.

use approach_core::config::{Difficulty, GameRules, PlaneType};
use approach_core::constants::{MINUTES, SECONDS};

/// Planes per scenario at every built-in difficulty.
const PLANES_PER_SCENARIO: usize = 26;

/// The six built-in difficulties, easiest first.
pub fn difficulties() -> Vec<Difficulty> {
    [
        ("Beginner", 80),
        ("Easy", 60),
        ("Average", 40),
        ("Hard", 30),
        ("Expert", 20),
        ("Impossible", 16),
    ]
    .into_iter()
    .map(|(name, minutes)| Difficulty {
        name: name.to_string(),
        duration: minutes * MINUTES,
        num_planes: PLANES_PER_SCENARIO,
    })
    .collect()
}

/// Look up a built-in difficulty by name, ignoring case.
pub fn difficulty(name: &str) -> Option<Difficulty> {
    difficulties()
        .into_iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

pub fn default_rules() -> GameRules {
    GameRules {
        last_plane_start: 5 * MINUTES,
    }
}

/// Jet, propeller plane and helicopter.
pub fn default_plane_types() -> Vec<PlaneType> {
    vec![
        // Fast and high; needs a long runway, never loops.
        PlaneType {
            name: "Jet".into(),
            mark: 'j',
            weight: 4,
            moves_per_tick: 1,
            ticks_pending: 20 * SECONDS,
            ticks_rolling: 10 * SECONDS,
            ticks_per_move: 4,
            immediate_turn: false,
            can_hover: false,
            can_enter_no_fly: false,
            entry_min_height: 3,
            entry_max_height: 5,
            exit_height: 5,
            initial_fuel: 30 * MINUTES,
            entry_exit_routes: true,
            airport_loop: false,
            airport_entry: true,
            airport_exit: true,
        },
        PlaneType {
            name: "Prop".into(),
            mark: 'p',
            weight: 3,
            moves_per_tick: 1,
            ticks_pending: 30 * SECONDS,
            ticks_rolling: 6 * SECONDS,
            ticks_per_move: 8,
            immediate_turn: false,
            can_hover: false,
            can_enter_no_fly: false,
            entry_min_height: 2,
            entry_max_height: 4,
            exit_height: 4,
            initial_fuel: 40 * MINUTES,
            entry_exit_routes: true,
            airport_loop: true,
            airport_entry: true,
            airport_exit: true,
        },
        // Airport traffic only; hovers and turns on the spot.
        PlaneType {
            name: "Helicopter".into(),
            mark: 'h',
            weight: 1,
            moves_per_tick: 1,
            ticks_pending: 30 * SECONDS,
            ticks_rolling: 2 * SECONDS,
            ticks_per_move: 10,
            immediate_turn: true,
            can_hover: true,
            can_enter_no_fly: false,
            entry_min_height: 1,
            entry_max_height: 2,
            exit_height: 2,
            initial_fuel: 20 * MINUTES,
            entry_exit_routes: false,
            airport_loop: true,
            airport_entry: true,
            airport_exit: true,
        },
    ]
}
