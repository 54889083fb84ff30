//! Terminal scenario outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Callsign;

/// The cause that stops a scenario, naming the plane(s) responsible.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EndReason {
    #[error("Fuel exhausted: {plane}")]
    FuelExhausted { plane: Callsign },

    #[error("Boundary Error: {plane}")]
    BoundaryError { plane: Callsign },

    #[error("Entering NoFly Area: {plane}")]
    NoFlyViolation { plane: Callsign },

    #[error("Mid-air collision: {first} and {second}")]
    MidAirCollision { first: Callsign, second: Callsign },
}

impl EndReason {
    /// Callsigns of every plane involved.
    pub fn planes(&self) -> Vec<Callsign> {
        match *self {
            EndReason::FuelExhausted { plane }
            | EndReason::BoundaryError { plane }
            | EndReason::NoFlyViolation { plane } => vec![plane],
            EndReason::MidAirCollision { first, second } => vec![first, second],
        }
    }
}
