//! Per-frame simulation tick
//!
//! Splits a frame's elapsed time into Planck sub-steps. Each sub-step moves
//! the player through the movement resolver, then lets an open attack window
//! prune targets.

use crate::geom::{DirectedPoint, GeometryError, LineSegment, Point, Polygon4, Rectangle, Size, Vector};
use crate::settings::{SettingsError, SimSettings};
use thiserror::Error;

use super::attack::resolve_attack;
use super::movement::resolve_movement;
use super::state::World;

/// Reasons a tick cannot produce a new world
#[derive(Debug, Error)]
pub enum TickError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Settings the sub-step loop or the resolver cannot converge with
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Input held for the duration of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Desired movement direction (any length; zero means stand still)
    pub direction: Vector,
    /// Point the player turns to face
    pub pointer: Option<Point>,
    /// Attack trigger edge
    pub attack: bool,
}

/// Collision predicate for an actor of `size` against static walls
///
/// A pose whose polygon cannot be built counts as colliding.
pub fn obstacle_collision(
    obstacles: &[LineSegment],
    size: Size,
) -> impl Fn(&DirectedPoint) -> bool + '_ {
    move |pose: &DirectedPoint| {
        let rect = Rectangle::new(pose.point, size);
        match Polygon4::from_rotated_rectangle(&rect, pose.direction) {
            Ok(polygon) => obstacles
                .iter()
                .any(|wall| polygon.intersects_line_segment(wall)),
            Err(_) => true,
        }
    }
}

/// Derive the next world from `world` after `elapsed_ms` of `input`
///
/// Fails when `settings` do not validate (a non-positive Planck time or
/// space would never finish sub-stepping or bisecting), or when the player
/// or a target carries a zero facing vector.
pub fn tick(
    world: &World,
    input: &TickInput,
    elapsed_ms: f64,
    settings: &SimSettings,
) -> Result<World, TickError> {
    settings.validate()?;

    let elapsed_ms = if elapsed_ms > settings.max_frame_ms {
        log::debug!(
            "frame of {:.1}ms clamped to {:.1}ms",
            elapsed_ms,
            settings.max_frame_ms
        );
        settings.max_frame_ms
    } else if elapsed_ms > 0.0 {
        elapsed_ms
    } else {
        0.0
    };

    let heading = if input.direction == Vector::ZERO {
        Vector::ZERO
    } else {
        input.direction.normalize()?
    };

    let mut next = world.clone();
    if input.attack && !next.is_attacking() {
        next.attack_remaining_ms = settings.attack_duration_ms;
        log::debug!("attack window opened for {}ms", settings.attack_duration_ms);
    }

    let mut remaining = elapsed_ms;
    while remaining > 0.0 {
        let dt = remaining.min(settings.planck_time_ms);
        next = substep(next, heading, input.pointer, dt, settings)?;
        remaining -= dt;
    }

    next.elapsed_ms += elapsed_ms;
    Ok(next)
}

/// One Planck sub-step of `dt` milliseconds
fn substep(
    world: World,
    heading: Vector,
    pointer: Option<Point>,
    dt: f64,
    settings: &SimSettings,
) -> Result<World, GeometryError> {
    let player = world.player;

    // Keep the previous facing when the pointer gives no direction
    let facing = pointer
        .map(|p| p - player.center())
        .filter(|v| *v != Vector::ZERO)
        .unwrap_or(player.facing);
    let translation = heading * (settings.player_speed * dt);

    let pose = {
        let collides = obstacle_collision(&world.obstacles, player.rect.size);
        resolve_movement(
            player.pose(),
            translation,
            facing,
            collides,
            settings.planck_space,
        )
    };
    let player = player.with_pose(pose);

    if !world.is_attacking() {
        return Ok(World { player, ..world });
    }

    let outcome = resolve_attack(&player.polygon()?, &world.targets)?;
    Ok(World {
        player,
        targets: outcome.survivors,
        attack_remaining_ms: (world.attack_remaining_ms - dt).max(0.0),
        defeated: world.defeated + outcome.defeated.len() as u32,
        ..world
    })
}
