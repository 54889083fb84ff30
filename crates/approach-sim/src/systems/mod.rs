//! Per-tick scenario systems.
//!
//! Systems are free functions over the roster. They hold no state of
//! their own.

pub mod collision;
pub mod movement;
pub mod snapshot;
