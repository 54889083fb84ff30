//! Simulation engine: drives a scenario one tick at a time.
//!
//! `SimulationEngine` owns the roster, borrows the immutable airspace,
//! dispatches operator commands and detects the first terminal failure.
//! Completely headless and deterministic for a given seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use approach_core::airspace::Airspace;
use approach_core::commands::{AddressedCommand, PlaneCommand};
use approach_core::config::{Difficulty, GameRules, PlaneType};
use approach_core::events::EndReason;
use approach_core::state::RosterSnapshot;
use approach_core::types::{Callsign, Ticks};
use approach_flight::Plane;

use crate::flight_plan::{self, GenerationError};
use crate::scenario;
use crate::systems;

/// Configuration for starting a new scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// RNG seed for determinism. Same seed = same roster.
    pub seed: u64,
    pub difficulty: Difficulty,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: scenario::difficulties().swap_remove(0),
        }
    }
}

/// Result of advancing one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Ended(EndReason),
}

/// The scenario engine. Owns all planes for their whole lifetime.
pub struct SimulationEngine<'a> {
    airspace: &'a Airspace,
    planes: Vec<Plane<'a>>,
    /// Remaining scenario time; counts down to zero.
    clock: Ticks,
    ticks_elapsed: Ticks,
    ended: Option<EndReason>,
}

impl<'a> SimulationEngine<'a> {
    /// Start a scenario from an existing roster. `duration` seeds the clock.
    pub fn new(airspace: &'a Airspace, planes: Vec<Plane<'a>>, duration: Ticks) -> Self {
        Self {
            airspace,
            planes,
            clock: duration,
            ticks_elapsed: 0,
            ended: None,
        }
    }

    /// Generate a roster for `config` and start the scenario.
    pub fn from_config(
        airspace: &'a Airspace,
        plane_types: &'a [PlaneType],
        rules: &GameRules,
        config: &ScenarioConfig,
    ) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let planes =
            flight_plan::generate(airspace, plane_types, rules, &config.difficulty, &mut rng)?;
        Ok(Self::new(airspace, planes, config.difficulty.duration))
    }

    /// Advance every plane one tick, then scan for collisions.
    ///
    /// After the first end reason the scenario is frozen and every further
    /// call returns the same reason.
    pub fn advance(&mut self) -> TickOutcome {
        if let Some(reason) = self.ended {
            return TickOutcome::Ended(reason);
        }
        let was_complete = self.is_complete();

        let result = systems::movement::run(&mut self.planes, self.airspace, self.clock)
            .and_then(|()| systems::collision::run(&self.planes));

        self.clock = self.clock.saturating_sub(1);
        self.ticks_elapsed += 1;

        match result {
            Ok(()) => {
                if !was_complete && self.is_complete() {
                    info!(ticks = self.ticks_elapsed, "all planes landed or departed");
                }
                TickOutcome::Continue
            }
            Err(reason) => {
                info!(ticks = self.ticks_elapsed, planes = ?reason.planes(), %reason, "scenario ended");
                self.ended = Some(reason);
                TickOutcome::Ended(reason)
            }
        }
    }

    /// Send `command` to the plane with `callsign`. Rejected if the plane
    /// is unknown, the scenario has ended, or the plane refuses it.
    pub fn command(&mut self, callsign: Callsign, command: PlaneCommand) -> bool {
        if self.ended.is_some() {
            return false;
        }
        self.planes
            .iter_mut()
            .find(|p| p.callsign == callsign)
            .is_some_and(|plane| plane.execute(command))
    }

    pub fn apply(&mut self, addressed: AddressedCommand) -> bool {
        self.command(addressed.callsign, addressed.command)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        systems::snapshot::build_snapshot(&self.planes, self.clock, self.ticks_elapsed, self.ended)
    }

    /// Every plane has landed or departed.
    pub fn is_complete(&self) -> bool {
        self.planes.iter().all(Plane::is_done)
    }

    pub fn planes(&self) -> &[Plane<'a>] {
        &self.planes
    }

    pub fn plane(&self, callsign: Callsign) -> Option<&Plane<'a>> {
        self.planes.iter().find(|p| p.callsign == callsign)
    }

    pub fn airspace(&self) -> &'a Airspace {
        self.airspace
    }

    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn ticks_elapsed(&self) -> Ticks {
        self.ticks_elapsed
    }

    pub fn ended(&self) -> Option<EndReason> {
        self.ended
    }
}
