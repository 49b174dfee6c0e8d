//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Seeded RNG only
//! - Stable iteration order (obstacles sorted by x)
//! - No rendering or platform dependencies

pub mod collision;
pub mod generate;
pub mod physics;
pub mod state;
pub mod tick;
pub mod window;

pub use collision::{KeyPoint, balloon_key_points, crown_circles, hit_detection, obstacle_hull};
pub use generate::{next_decoration, next_obstacle};
pub use physics::integrate;
pub use state::{
    Balloon, Decoration, EndReason, InputEvent, Obstacle, RunSummary, Session, SessionPhase,
    TreeColor,
};
pub use tick::{TickOutcome, tick};
pub use window::{Positioned, Window};
