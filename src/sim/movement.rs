//! Movement resolution by bisection
//!
//! A requested step is granted whole when the destination pose is free.
//! Otherwise the step is halved repeatedly, advancing the anchor on every
//! free half, until the remaining gap to the nearest known-colliding pose is
//! below `planck_space`. This approximates the furthest safe travel without
//! computing a time of impact, and costs at most
//! `log2(|translation| / planck_space)` predicate calls after the first.

use crate::geom::{DirectedPoint, Vector};

/// Move `current` by `translation` and turn it toward `direction`, never
/// settling on a pose for which `collides` returns true.
///
/// Returns `current` unchanged when no safe advance exists above the
/// `planck_space` resolution, and also when `planck_space` is not positive
/// or `translation` is not finite, since no bisection can converge then.
/// Never fails.
pub fn resolve_movement<F>(
    current: DirectedPoint,
    translation: Vector,
    direction: Vector,
    collides: F,
    planck_space: f64,
) -> DirectedPoint
where
    F: Fn(&DirectedPoint) -> bool,
{
    if !(planck_space > 0.0) || !(translation.dx.is_finite() && translation.dy.is_finite()) {
        log::warn!("resolve_movement: unusable step {translation:?} at resolution {planck_space}");
        return current;
    }
    if translation.is_strictly_bounded(planck_space) && direction.approx_eq(current.direction) {
        return current;
    }

    let candidate = DirectedPoint::new(current.point + translation, direction);
    if !collides(&candidate) {
        return candidate;
    }

    let settled = bisect(current, translation, direction, false, &collides, planck_space);

    // Out of translation; commit the turn in place if it fits
    if !settled.direction.approx_eq(direction) {
        let turned = DirectedPoint::new(settled.point, direction);
        if !collides(&turned) {
            return turned;
        }
    }
    settled
}

/// Halve `remaining` until it drops below `planck_space`
///
/// Invariant: `anchor` is free and `anchor.point + remaining` is known to
/// collide. Until the first free half is found the anchor keeps its own
/// facing; after that, candidates take `target_direction`.
fn bisect<F>(
    mut anchor: DirectedPoint,
    mut remaining: Vector,
    target_direction: Vector,
    mut has_ever_succeeded: bool,
    collides: &F,
    planck_space: f64,
) -> DirectedPoint
where
    F: Fn(&DirectedPoint) -> bool,
{
    while !remaining.is_strictly_bounded(planck_space) {
        let half = remaining * 0.5;
        let direction = if has_ever_succeeded {
            target_direction
        } else {
            anchor.direction
        };
        let candidate = DirectedPoint::new(anchor.point + half, direction);

        if collides(&candidate) {
            log::trace!("bisect: blocked at {:?}", candidate.point);
        } else {
            anchor = candidate;
            has_ever_succeeded = true;
        }
        remaining = half;
    }
    anchor
}
