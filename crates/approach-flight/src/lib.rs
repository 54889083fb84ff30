//! Flight state machine for Approach.
//!
//! Implements the plane lifecycle, the per-tick advance algorithm, the
//! operator command rules and the separation predicate. Operates on plain
//! data plus a borrowed airspace; owns no scenario state.

pub mod plane;
pub mod separation;

pub use plane::Plane;
