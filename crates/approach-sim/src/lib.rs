//! Scenario engine for Approach.
//!
//! Generates the flight-plan roster, advances all planes one tick at a
//! time, scans for loss of separation and produces roster snapshots for
//! the presentation layer.

pub mod engine;
pub mod flight_plan;
pub mod scenario;
pub mod systems;

pub use engine::{ScenarioConfig, SimulationEngine, TickOutcome};
