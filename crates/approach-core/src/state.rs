//! Roster snapshot: the read-only view of all planes handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::PlaneState;
use crate::events::EndReason;
use crate::types::{Callsign, Direction, Position, Ticks};

/// Complete scenario state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Remaining scenario time; counts down.
    pub clock: Ticks,
    pub ticks_elapsed: Ticks,
    pub planes: Vec<PlaneView>,
    pub ended: Option<EndReason>,
    /// Every plane has landed or departed.
    pub complete: bool,
}

/// One plane as the operator sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneView {
    pub callsign: Callsign,
    pub mark: char,
    pub entry: char,
    pub exit: char,
    pub state: PlaneState,
    pub start: Ticks,

    pub position: Position,
    pub direction: Direction,
    pub height: u8,
    pub want_height: u8,
    /// Heading the plane is turning toward, if a gradual turn is pending.
    pub turning_to: Option<Direction>,

    pub hovering: bool,
    pub holding: bool,
    pub hold_at_navaid: bool,
    pub cleared_to: Option<char>,

    pub visible: bool,
    pub active: bool,
    pub airborne: bool,
    pub done: bool,
    pub fuel_low: bool,
}
