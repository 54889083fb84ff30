//! Simulation constants and tuning parameters.

use crate::types::Ticks;

/// Ticks per game second.
pub const SECONDS: Ticks = 1;

/// Ticks per game minute.
pub const MINUTES: Ticks = 60 * SECONDS;

// --- Flight envelope ---

/// Highest altitude band a plane may occupy.
pub const MAX_HEIGHT: u8 = 5;

/// Largest turn (in eighth-turns) accepted by a single command.
pub const MAX_TURN: i32 = 4;

// --- Separation ---

/// Planes at a matching height closer than this (Chebyshev cells) collide.
pub const SAFE_DISTANCE: i32 = 3;

/// Remaining fuel below this is reported as low.
pub const FUEL_INDICATOR: Ticks = 10 * MINUTES;

// --- Flight-plan generation ---

/// Two planes from the same open-airspace entry at the same height must
/// start at least this far apart.
pub const REUSE_ENTRYPOINT_TIME: Ticks = 3 * MINUTES;

/// Attempts per roster slot before the generator gives up.
pub const PLAN_RETRY_BUDGET: u32 = 100;

/// Callsigns are the letters A-Z.
pub const MAX_CALLSIGNS: usize = 26;
