//! Flight advance system: runs every unfinished plane through one tick.

use approach_core::airspace::Airspace;
use approach_core::events::EndReason;
use approach_core::types::Ticks;
use approach_flight::Plane;

/// Advance planes in roster order. The first failure stops the pass;
/// planes after it are not advanced this tick.
pub fn run(planes: &mut [Plane<'_>], airspace: &Airspace, clock: Ticks) -> Result<(), EndReason> {
    for plane in planes.iter_mut().filter(|p| !p.is_done()) {
        plane.tick(airspace, clock)?;
    }
    Ok(())
}
