//! Flight-plan generator: populates a scenario with a valid,
//! non-conflicting roster of planes.
//!
//! Plane types and routes are drawn by weight and rejected until the
//! combination is permitted and does not spawn on top of an earlier plane.
//! Each slot gets a bounded number of attempts; running out means the
//! airspace/difficulty/plane-type data cannot produce a roster at all.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use approach_core::airspace::{Airspace, EntryPoint, Route};
use approach_core::config::{Difficulty, GameRules, PlaneType};
use approach_core::constants::{MAX_CALLSIGNS, PLAN_RETRY_BUDGET, REUSE_ENTRYPOINT_TIME};
use approach_core::error::ConfigError;
use approach_core::types::Ticks;
use approach_flight::Plane;

/// Scenario setup failures. None of these start a game.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("airspace has no routes")]
    NoRoutes,

    #[error("start window [{last_plane_start}, {duration}) is empty")]
    EmptyStartWindow {
        last_plane_start: Ticks,
        duration: Ticks,
    },

    #[error("cannot sample by weight: {0}")]
    Weights(#[from] WeightedError),

    #[error("cannot find a valid flight plan for slot {slot} after {attempts} attempts ({placed} planes placed)")]
    Infeasible {
        slot: usize,
        attempts: u32,
        placed: usize,
    },
}

/// Generate the scenario roster, ordered by descending start, with
/// distinct callsigns.
pub fn generate<'a>(
    airspace: &'a Airspace,
    plane_types: &'a [PlaneType],
    rules: &GameRules,
    difficulty: &Difficulty,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Plane<'a>>, GenerationError> {
    difficulty.validate()?;
    if plane_types.is_empty() {
        return Err(ConfigError::NoPlaneTypes.into());
    }
    for plane_type in plane_types {
        plane_type.validate()?;
    }
    let routes = airspace.routes();
    if routes.is_empty() {
        return Err(GenerationError::NoRoutes);
    }
    if rules.last_plane_start >= difficulty.duration {
        return Err(GenerationError::EmptyStartWindow {
            last_plane_start: rules.last_plane_start,
            duration: difficulty.duration,
        });
    }

    let type_weights = WeightedIndex::new(plane_types.iter().map(|t| t.weight))?;
    let route_weights = WeightedIndex::new(routes.iter().map(|r| r.weight))?;

    let mut planes: Vec<Plane<'a>> = Vec::with_capacity(difficulty.num_planes);

    for slot in 0..difficulty.num_planes {
        let mut attempts = 0;
        let plane = loop {
            if attempts == PLAN_RETRY_BUDGET {
                warn!(slot, placed = planes.len(), "flight-plan retry budget exhausted");
                return Err(GenerationError::Infeasible {
                    slot,
                    attempts,
                    placed: planes.len(),
                });
            }
            attempts += 1;

            let plane_type = &plane_types[type_weights.sample(rng)];
            let route = &routes[route_weights.sample(rng)];
            if let Some(plane) =
                propose(airspace, plane_type, route, rules, difficulty, &planes, rng)
            {
                break plane;
            }
        };
        planes.push(plane);
    }

    planes.sort_by(|a, b| b.start.cmp(&a.start));

    // Earliest planes get callsigns first.
    let mut callsigns: Vec<char> = ('A'..='Z')
        .take(difficulty.num_planes.min(MAX_CALLSIGNS))
        .collect();
    callsigns.shuffle(rng);
    for (plane, callsign) in planes.iter_mut().zip(callsigns) {
        plane.callsign = callsign;
    }

    debug!(
        planes = planes.len(),
        difficulty = %difficulty.name,
        "flight plans generated"
    );
    Ok(planes)
}

/// Draw start and height for one candidate, or `None` if it must be retried.
fn propose<'a>(
    airspace: &'a Airspace,
    plane_type: &'a PlaneType,
    route: &Route,
    rules: &GameRules,
    difficulty: &Difficulty,
    planes: &[Plane<'a>],
    rng: &mut ChaCha8Rng,
) -> Option<Plane<'a>> {
    let entry = airspace.entry_point(route.entry)?;
    let exit = airspace.entry_point(route.exit)?;

    if !permits(plane_type, entry, exit) {
        trace!(plane_type = %plane_type.name, entry = %entry.sign, exit = %exit.sign, "route not permitted");
        return None;
    }

    let start = rng.gen_range(rules.last_plane_start..difficulty.duration);
    let height = rng.gen_range(plane_type.entry_min_height..=plane_type.entry_max_height);
    let height = if entry.is_airport { 0 } else { height };

    let conflict = planes.iter().any(|other| {
        other.entry.sign == entry.sign
            && !entry.is_airport
            && other.initial_height == height
            && other.start.abs_diff(start) < REUSE_ENTRYPOINT_TIME
    });
    if conflict {
        trace!(entry = %entry.sign, height, start, "entry point reused too soon");
        return None;
    }

    Some(Plane::new(
        plane_type,
        entry,
        exit,
        route.direction,
        start,
        height,
    ))
}

/// Whether `plane_type` may fly from `entry` to `exit`.
pub fn permits(plane_type: &PlaneType, entry: &EntryPoint, exit: &EntryPoint) -> bool {
    if !plane_type.entry_exit_routes && !entry.is_airport && !exit.is_airport {
        return false;
    }
    if !plane_type.airport_loop && entry.is_airport && entry.sign == exit.sign {
        return false;
    }
    if !plane_type.airport_entry && entry.is_airport {
        return false;
    }
    if !plane_type.airport_exit && exit.is_airport {
        return false;
    }
    true
}
