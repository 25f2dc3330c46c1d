//! Simulation
//!
//! Movement and attack resolution plus the tick that drives them. Every
//! function here derives a new world from its inputs; nothing is updated in
//! place and there is no global state.

pub mod arena;
pub mod attack;
pub mod movement;
pub mod state;
pub mod tick;

pub use attack::{AttackOutcome, attack_circle, is_hit, resolve_attack};
pub use movement::resolve_movement;
pub use state::{Body, World};
pub use tick::{TickError, TickInput, obstacle_collision, tick};
