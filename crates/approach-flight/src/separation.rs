//! Pairwise separation rule.

use approach_core::constants::SAFE_DISTANCE;

use crate::plane::Plane;

/// Whether two planes are unsafely close.
///
/// Heights match when both planes share a height, or when they swapped
/// heights during the last step. Symmetric in its arguments.
pub fn collides(a: &Plane<'_>, b: &Plane<'_>) -> bool {
    let same_height = a.height == b.height;
    let crossed = a.height == b.last_height && a.last_height == b.height;

    if !same_height && !crossed {
        return false;
    }
    a.position.distance(b.position) < SAFE_DISTANCE
}
