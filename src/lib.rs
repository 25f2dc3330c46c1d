//! Slide Kernel - 2D geometry and sliding collision resolution
//!
//! Core modules:
//! - `geom`: Vector/point algebra, segments, oriented rectangles, circles
//! - `sim`: Movement and attack resolution, Planck-stepped world tick
//! - `app`: Action reducer and frame driver for a host loop
//! - `settings`: Runtime-tunable parameters

pub mod app;
pub mod geom;
pub mod settings;
pub mod sim;

pub use geom::GeometryError;
pub use settings::{SettingsError, SimSettings};
pub use sim::TickError;

/// Kernel constants
pub mod consts {
    use crate::geom::Size;

    /// Tolerance for approximate equality, parallel and orthogonal tests
    pub const EPSILON: f64 = 1e-5;

    /// Longest physics sub-step (ms)
    pub const PLANCK_TIME_MS: f64 = 4.0;
    /// Movement resolver precision floor (distance units)
    pub const PLANCK_SPACE: f64 = 0.1;
    /// Frames longer than this are simulated as this long (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Player speed (distance units per ms)
    pub const PLAYER_SPEED: f64 = 0.15;
    /// Width across the facing doubles as the attack reach
    pub const PLAYER_SIZE: Size = Size::new(24.0, 12.0);
    pub const TARGET_SIZE: Size = Size::square(16.0);
    pub const ATTACK_DURATION_MS: f64 = 150.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 500.0;
    pub const ARENA_HEIGHT: f64 = 500.0;
    pub const INTERIOR_WALLS: usize = 4;
}
