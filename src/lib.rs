//! Balloon Drift - A hot-air balloon side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, procedural forest, collisions, session)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Values shown on the heads-up display
//! - `config`: Viewport and seed configuration

pub mod config;
pub mod hud;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError, Viewport};
pub use hud::Hud;

/// Game configuration constants
///
/// All velocities and accelerations are per simulation tick, not per second.
pub mod consts {
    /// Fixed simulation timestep (one tick of the 60 Hz frame loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield the scene is laid out around (centered in the viewport)
    pub const MAIN_AREA_WIDTH: f32 = 800.0;
    pub const MAIN_AREA_HEIGHT: f32 = 400.0;

    /// Balloon defaults
    pub const BALLOON_START_VERTICAL_VELOCITY: f32 = 5.0;
    pub const BALLOON_HORIZONTAL_VELOCITY: f32 = 5.0;
    pub const FUEL_MAX: f32 = 100.0;

    /// Vertical velocity change per tick while heating (lift)
    pub const HEATING_ACCEL: f32 = 0.4;
    /// Vertical velocity change per tick while cooling (gravity)
    pub const COOLING_ACCEL: f32 = 0.2;
    /// Fastest rise (negative y is up)
    pub const MIN_VERTICAL_VELOCITY: f32 = -7.0;
    /// Fastest descent
    pub const MAX_VERTICAL_VELOCITY: f32 = 5.0;
    /// Fuel burned per tick of heating, per unit of altitude
    pub const FUEL_COST_PER_ALTITUDE: f32 = 0.0001;

    /// Obstacle trees
    pub const FIRST_OBSTACLE_X: f32 = 400.0;
    pub const OBSTACLE_GAP_MIN: u32 = 100;
    pub const OBSTACLE_GAP_MAX: u32 = 1000;
    pub const OBSTACLE_HEIGHT_MIN: f32 = 100.0;
    pub const OBSTACLE_HEIGHT_MAX: f32 = 180.0;
    pub const CROWN_RADIUS_MIN: f32 = 32.0;
    pub const CROWN_RADIUS_MAX: f32 = 48.0;
    /// How far behind the left edge a tree may scroll before it is recycled
    pub const OBSTACLE_RECYCLE_MARGIN: f32 = 100.0;
    /// Viewport pixels per initial obstacle
    pub const OBSTACLE_FILL_SPACING: f32 = 50.0;

    /// Background trees on the front hill
    pub const DECORATION_GAP_MIN: u32 = 30;
    pub const DECORATION_GAP_MAX: u32 = 150;
    pub const DECORATION_RECYCLE_MARGIN: f32 = 40.0;
    pub const DECORATION_FILL_SPACING: f32 = 30.0;
    /// Scroll-speed multiplier of the hill the background trees stand on
    pub const BACKGROUND_PARALLAX: f32 = 0.2;

    /// World units per metre of score
    pub const PIXELS_PER_METRE: f32 = 50.0;
}

/// Sine of an angle where a full period spans 540 units instead of 2π.
///
/// Used for the hill silhouettes; the stretched period keeps the slopes gentle.
#[inline]
pub fn sinus(degree: f32) -> f32 {
    (degree / 270.0 * std::f32::consts::PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinus_period() {
        assert!(sinus(0.0).abs() < 1e-6);
        assert!((sinus(135.0) - 1.0).abs() < 1e-6);
        assert!(sinus(270.0).abs() < 1e-5);
        assert!((sinus(540.0) - sinus(0.0)).abs() < 1e-5);
    }
}
