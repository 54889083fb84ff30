//! Snapshot system: builds the read-only roster view.

use approach_core::events::EndReason;
use approach_core::state::RosterSnapshot;
use approach_core::types::Ticks;
use approach_flight::Plane;

pub fn build_snapshot(
    planes: &[Plane<'_>],
    clock: Ticks,
    ticks_elapsed: Ticks,
    ended: Option<EndReason>,
) -> RosterSnapshot {
    RosterSnapshot {
        clock,
        ticks_elapsed,
        planes: planes.iter().map(Plane::view).collect(),
        ended,
        complete: planes.iter().all(Plane::is_done),
    }
}
