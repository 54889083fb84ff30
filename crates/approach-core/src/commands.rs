//! Operator commands addressed to a single plane.
//!
//! Commands are synchronous: they take effect before the next tick and
//! report acceptance as a plain `bool`.

use serde::{Deserialize, Serialize};

use crate::types::Callsign;

/// All possible operator instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaneCommand {
    /// Turn by `delta` eighth-turns (positive = clockwise), -4..=4.
    Turn { delta: i32 },
    /// Climb or descend to `height`, 0..=5. Zero starts an approach.
    SetHeight { height: i32 },
    /// Enter a holding pattern at the next navaid.
    Hold,
    /// Freeze or release horizontal movement (hover-capable types only).
    ToggleHover,
    /// Align with the runway of the entry point `sign` at the next navaid.
    ClearToApproach { sign: char },
}

/// A command together with the plane it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressedCommand {
    pub callsign: Callsign,
    pub command: PlaneCommand,
}
