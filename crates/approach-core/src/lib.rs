//! Core types and definitions for the Approach air-traffic simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid geometry, the static airspace, configuration data, commands,
//! roster snapshots, end reasons, and constants.
//! It contains no simulation logic.

pub mod airspace;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
