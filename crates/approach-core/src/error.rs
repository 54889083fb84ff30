//! Construction-time errors for airspace and configuration data.
//!
//! These are raised before a scenario starts. In-play failures are
//! [`EndReason`](crate::events::EndReason)s instead.

use thiserror::Error;

use crate::types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AirspaceError {
    #[error("airspace must have positive dimensions, got {width}x{height}")]
    EmptyBounds { width: i32, height: i32 },

    #[error("{what} at {position} lies outside the {width}x{height} airspace")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        width: i32,
        height: i32,
    },

    #[error("duplicate entry point sign '{0}'")]
    DuplicateSign(char),

    #[error("route {entry}-{exit} references unknown entry point '{missing}'")]
    UnknownEntryPoint {
        entry: char,
        exit: char,
        missing: char,
    },

    #[error("all route weights are zero")]
    ZeroRouteWeights,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("plane type '{name}': {reason}")]
    InvalidPlaneType { name: String, reason: String },

    #[error("difficulty '{name}' requests {requested} planes, at most {max} callsigns exist")]
    TooManyPlanes {
        name: String,
        requested: usize,
        max: usize,
    },

    #[error("no plane types configured")]
    NoPlaneTypes,
}
