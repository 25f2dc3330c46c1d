//! Seeded arena generation
//!
//! A walled rectangle with a few random interior walls and scattered
//! targets. The same seed always yields the same world.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::geom::{GeometryError, LineSegment, Point, Polygon4, Rectangle, Vector};
use crate::settings::SimSettings;

use super::state::{Body, World};

/// Side of the square kept free of walls and targets around the spawn point
const SPAWN_CLEARANCE: f64 = 80.0;
/// Distance interior walls and targets keep from the boundary
const WALL_MARGIN: f64 = 20.0;
const WALL_MIN_LENGTH: f64 = 40.0;
const WALL_MAX_LENGTH: f64 = 140.0;
/// Placement attempts allowed per requested item
const ATTEMPTS_PER_ITEM: usize = 50;

fn random_point(rng: &mut Pcg32, margin: f64) -> Point {
    Point::new(
        rng.random_range(margin..ARENA_WIDTH - margin),
        rng.random_range(margin..ARENA_HEIGHT - margin),
    )
}

fn within_margin(p: Point, margin: f64) -> bool {
    (margin..=ARENA_WIDTH - margin).contains(&p.x) && (margin..=ARENA_HEIGHT - margin).contains(&p.y)
}

/// The four walls around the arena
pub fn boundary_walls() -> Result<Vec<LineSegment>, GeometryError> {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(ARENA_WIDTH, 0.0),
        Point::new(ARENA_WIDTH, ARENA_HEIGHT),
        Point::new(0.0, ARENA_HEIGHT),
    ];
    (0..4)
        .map(|i| LineSegment::new(corners[i], corners[(i + 1) % 4]))
        .collect()
}

/// Build a fresh world for `seed` with up to `target_count` targets
pub fn generate(
    seed: u64,
    settings: &SimSettings,
    target_count: usize,
) -> Result<World, GeometryError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let east = Vector::new(1.0, 0.0);

    let spawn = Point::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    let player = Body::new(spawn, settings.player_size, east);
    let clearance = Polygon4::from_rotated_rectangle(&Rectangle::square(spawn, SPAWN_CLEARANCE), east)?;

    let mut obstacles = boundary_walls()?;
    let boundary_count = obstacles.len();
    for _ in 0..INTERIOR_WALLS * ATTEMPTS_PER_ITEM {
        if obstacles.len() == boundary_count + INTERIOR_WALLS {
            break;
        }
        let start = random_point(&mut rng, WALL_MARGIN);
        let length = rng.random_range(WALL_MIN_LENGTH..WALL_MAX_LENGTH);
        let end = start + Vector::from_polar(length, rng.random_range(0.0..TAU));
        if !within_margin(end, WALL_MARGIN) {
            continue;
        }
        let wall = LineSegment::new(start, end)?;
        if clearance.intersects_line_segment(&wall) || clearance.contains_point(start) {
            continue;
        }
        obstacles.push(wall);
    }

    let mut targets: Vec<Body> = Vec::with_capacity(target_count);
    let mut placed: Vec<Polygon4> = Vec::with_capacity(target_count);
    for _ in 0..target_count * ATTEMPTS_PER_ITEM {
        if targets.len() == target_count {
            break;
        }
        let center = random_point(&mut rng, WALL_MARGIN + settings.target_size.half_diagonal());
        let facing = Vector::from_polar(1.0, rng.random_range(0.0..TAU));
        let target = Body::new(center, settings.target_size, facing);
        let polygon = target.polygon()?;

        let blocked = obstacles.iter().any(|w| polygon.intersects_line_segment(w))
            || clearance.intersects_polygon(&polygon)
            || placed.iter().any(|p| p.intersects_polygon(&polygon));
        if !blocked {
            targets.push(target);
            placed.push(polygon);
        }
    }

    if targets.len() < target_count {
        log::warn!(
            "Arena seed {}: placed only {} of {} targets",
            seed,
            targets.len(),
            target_count
        );
    }
    log::info!(
        "Arena seed {}: {} walls, {} targets",
        seed,
        obstacles.len(),
        targets.len()
    );

    Ok(World::new(player, obstacles, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::obstacle_collision;

    #[test]
    fn test_same_seed_same_world() {
        let settings = SimSettings::default();
        let a = generate(42, &settings, 8).unwrap();
        let b = generate(42, &settings, 8).unwrap();
        assert_eq!(a, b);

        let c = generate(43, &settings, 8).unwrap();
        assert_ne!(a.targets, c.targets);
    }

    #[test]
    fn test_places_requested_targets() {
        let world = generate(7, &SimSettings::default(), 6).unwrap();
        assert_eq!(world.targets.len(), 6);
        assert_eq!(world.obstacles.len(), 4 + INTERIOR_WALLS);
    }

    #[test]
    fn test_targets_clear_of_walls_and_each_other() {
        let world = generate(1234, &SimSettings::default(), 10).unwrap();
        let polygons: Vec<_> = world.targets.iter().map(|t| t.polygon().unwrap()).collect();
        for (i, polygon) in polygons.iter().enumerate() {
            assert!(!world.obstacles.iter().any(|w| polygon.intersects_line_segment(w)));
            for other in &polygons[i + 1..] {
                assert!(!polygon.intersects_polygon(other));
            }
        }
    }

    #[test]
    fn test_player_spawns_free() {
        for seed in 0..20 {
            let world = generate(seed, &SimSettings::default(), 5).unwrap();
            let collides = obstacle_collision(&world.obstacles, world.player.rect.size);
            assert!(!collides(&world.player.pose()), "seed {seed}");
        }
    }

    #[test]
    fn test_boundary_encloses_arena() {
        let walls = boundary_walls().unwrap();
        assert_eq!(walls.len(), 4);
        let perimeter: f64 = walls.iter().map(|w| w.length()).sum();
        assert!((perimeter - 2.0 * (ARENA_WIDTH + ARENA_HEIGHT)).abs() < 1e-9);
    }
}
