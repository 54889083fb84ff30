//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Plane lifecycle phase.
///
/// `Pending → {Incoming | Waiting} → Rolling → Flying ⇄ Approach → {Landed | Departed}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneState {
    /// Scheduled but not yet announced.
    #[default]
    Pending,
    /// Announced at an open-airspace entry, about to fly in.
    Incoming,
    /// On the ground at an airport, awaiting take-off clearance.
    Waiting,
    /// Take-off roll.
    Rolling,
    Flying,
    /// Descending toward a runway.
    Approach,
    Landed,
    /// Left the airspace at its exit point.
    Departed,
}

impl PlaneState {
    /// Landed or departed. No further processing.
    pub fn is_done(self) -> bool {
        matches!(self, PlaneState::Landed | PlaneState::Departed)
    }

    pub fn is_visible(self) -> bool {
        matches!(self, PlaneState::Incoming | PlaneState::Waiting)
    }

    /// Neither pending nor done.
    pub fn is_active(self) -> bool {
        !matches!(self, PlaneState::Pending) && !self.is_done()
    }

    pub fn is_airborne(self) -> bool {
        matches!(self, PlaneState::Flying | PlaneState::Approach)
    }

    pub fn is_consuming_fuel(self) -> bool {
        matches!(
            self,
            PlaneState::Waiting | PlaneState::Rolling | PlaneState::Flying | PlaneState::Approach
        )
    }

    /// Operator commands are only accepted in these states.
    pub fn accepts_commands(self) -> bool {
        matches!(
            self,
            PlaneState::Waiting | PlaneState::Rolling | PlaneState::Flying
        )
    }
}
