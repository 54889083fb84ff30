//! Plane types, difficulty levels and game rules.
//!
//! Plain data, deserializable from any serde format. Built-in values live
//! in `approach_sim::scenario`.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CALLSIGNS, MAX_HEIGHT};
use crate::error::ConfigError;
use crate::types::Ticks;

/// Behaviour profile shared by every plane of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneType {
    pub name: String,
    /// Display mark appended to the callsign.
    pub mark: char,
    /// Relative sampling weight in the flight-plan generator.
    pub weight: u32,

    /// Internal advance steps per scenario tick.
    pub moves_per_tick: u32,
    /// Ticks a plane is announced before it enters.
    pub ticks_pending: Ticks,
    /// Ticks of take-off roll after clearance.
    pub ticks_rolling: Ticks,
    /// Internal steps between two position updates while airborne.
    pub ticks_per_move: Ticks,

    /// Turns apply at once instead of one eighth-turn per move.
    pub immediate_turn: bool,
    pub can_hover: bool,
    pub can_enter_no_fly: bool,

    pub entry_min_height: u8,
    pub entry_max_height: u8,
    /// Height required to leave the airspace at the exit point.
    pub exit_height: u8,
    /// Fuel in fuel-consuming internal steps.
    pub initial_fuel: Ticks,

    /// May fly between two open-airspace entry points.
    pub entry_exit_routes: bool,
    /// May take off from and land at the same airport.
    pub airport_loop: bool,
    pub airport_entry: bool,
    pub airport_exit: bool,
}

impl PlaneType {
    /// Check the invariants the flight state machine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |reason: &str| {
            Err(ConfigError::InvalidPlaneType {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };

        if self.moves_per_tick == 0 {
            return fail("moves_per_tick must be at least 1");
        }
        if self.ticks_per_move == 0 {
            return fail("ticks_per_move must be at least 1");
        }
        if self.entry_min_height > self.entry_max_height {
            return fail("entry_min_height exceeds entry_max_height");
        }
        if self.entry_max_height > MAX_HEIGHT || self.exit_height > MAX_HEIGHT {
            return fail("heights must not exceed the ceiling");
        }
        if self.initial_fuel == 0 {
            return fail("initial_fuel must be positive");
        }
        Ok(())
    }
}

/// Scenario length and traffic volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub name: String,
    /// Scenario length in ticks. The scenario clock counts down from here.
    pub duration: Ticks,
    pub num_planes: usize,
}

impl Difficulty {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_planes > MAX_CALLSIGNS {
            return Err(ConfigError::TooManyPlanes {
                name: self.name.clone(),
                requested: self.num_planes,
                max: MAX_CALLSIGNS,
            });
        }
        Ok(())
    }
}

/// Rules shared by all difficulties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Lowest remaining-clock value at which a plane may still be scheduled,
    /// leaving the last plane enough time to cross the airspace.
    pub last_plane_start: Ticks,
}
