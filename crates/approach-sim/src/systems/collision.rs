//! Collision detection system: pairwise separation scan over active planes.

use approach_core::events::EndReason;
use approach_flight::separation::collides;
use approach_flight::Plane;

/// Check every unordered pair of active planes once.
/// Reports the first colliding pair in roster order.
pub fn run(planes: &[Plane<'_>]) -> Result<(), EndReason> {
    for (i, a) in planes.iter().enumerate() {
        if !a.is_active() {
            continue;
        }
        for b in planes[i + 1..].iter().filter(|b| b.is_active()) {
            if collides(a, b) {
                return Err(EndReason::MidAirCollision {
                    first: a.callsign,
                    second: b.callsign,
                });
            }
        }
    }
    Ok(())
}
