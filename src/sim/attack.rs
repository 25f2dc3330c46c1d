//! Attack resolution
//!
//! The actor sweeps a circle centered on its front-left corner whose radius
//! is the length of its front edge. Any target with a boundary edge reaching
//! into that circle is defeated.

use crate::geom::{Circle, GeometryError, Polygon4};

use super::state::Body;

/// Result of one attack pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackOutcome {
    /// Targets left standing, in their original order
    pub survivors: Vec<Body>,
    /// Targets removed by this pass
    pub defeated: Vec<Body>,
}

/// The hit-box swept by an actor occupying `actor`
pub fn attack_circle(actor: &Polygon4) -> Circle {
    let reach = actor.b() - actor.a();
    Circle::new(actor.a(), reach.magnitude())
}

/// True if any edge of `target` reaches into `circle`
pub fn is_hit(circle: &Circle, target: &Polygon4) -> bool {
    target.edges().any(|edge| circle.intersects_line_segment(&edge))
}

/// Split `targets` into survivors and those defeated by `actor`'s attack
///
/// Fails only if a target carries a zero facing vector.
pub fn resolve_attack(actor: &Polygon4, targets: &[Body]) -> Result<AttackOutcome, GeometryError> {
    let circle = attack_circle(actor);
    let mut outcome = AttackOutcome::default();

    for target in targets {
        if is_hit(&circle, &target.polygon()?) {
            outcome.defeated.push(*target);
        } else {
            outcome.survivors.push(*target);
        }
    }

    if !outcome.defeated.is_empty() {
        log::debug!(
            "attack at {:?} (r={:.2}) defeated {} of {} targets",
            circle.center,
            circle.radius,
            outcome.defeated.len(),
            targets.len()
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, Rectangle, Size, Vector};

    fn actor() -> Polygon4 {
        // Facing east: a = (1, 1), b = (1, -1), reach 2
        let rect = Rectangle::square(Point::ORIGIN, 2.0);
        Polygon4::from_rotated_rectangle(&rect, Vector::new(1.0, 0.0)).unwrap()
    }

    #[test]
    fn test_attack_circle_from_front_edge() {
        let circle = attack_circle(&actor());
        assert!(circle.center.approx_eq(Point::new(1.0, 1.0)));
        assert!((circle.radius - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_inside_circle_is_removed() {
        let target = Body::new(Point::new(1.5, 1.0), Size::square(0.5), Vector::new(1.0, 1.0));
        let outcome = resolve_attack(&actor(), &[target]).unwrap();
        assert!(outcome.survivors.is_empty());
        assert_eq!(outcome.defeated, vec![target]);
    }

    #[test]
    fn test_target_beyond_reach_survives() {
        let size = Size::square(1.0);
        let circle = attack_circle(&actor());
        // Place the target just past radius + half-diagonal from the circle center
        let offset = circle.radius + size.half_diagonal() + 0.01;
        let center = circle.center + Vector::new(offset, 0.0);
        let target = Body::new(center, size, Vector::new(0.3, -1.0));

        let outcome = resolve_attack(&actor(), &[target]).unwrap();
        assert_eq!(outcome.survivors, vec![target]);
        assert!(outcome.defeated.is_empty());
    }

    #[test]
    fn test_edge_grazing_target_is_removed() {
        // Only the near edge of a large target reaches the circle
        let target = Body::new(Point::new(7.5, 1.0), Size::square(10.0), Vector::new(1.0, 0.0));
        let outcome = resolve_attack(&actor(), &[target]).unwrap();
        assert_eq!(outcome.defeated.len(), 1);
    }

    #[test]
    fn test_survivor_order_is_preserved() {
        let far = |x: f64| Body::new(Point::new(x, 50.0), Size::square(1.0), Vector::new(1.0, 0.0));
        let near = Body::new(Point::new(1.0, 1.0), Size::square(1.0), Vector::new(1.0, 0.0));
        let targets = [far(10.0), near, far(20.0), far(30.0)];
        let outcome = resolve_attack(&actor(), &targets).unwrap();
        assert_eq!(outcome.survivors, vec![far(10.0), far(20.0), far(30.0)]);
        assert_eq!(outcome.defeated, vec![near]);
    }

    #[test]
    fn test_degenerate_target_facing_is_error() {
        let target = Body::new(Point::new(1.0, 1.0), Size::square(1.0), Vector::ZERO);
        assert!(resolve_attack(&actor(), &[target]).is_err());
    }
}
