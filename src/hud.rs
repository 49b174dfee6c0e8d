//! Heads-up display values
//!
//! Derived from the session each frame; the renderer draws the fuel meter
//! and the platform layer writes the text parts into the DOM.

use crate::consts::{FUEL_MAX, PIXELS_PER_METRE};
use crate::renderer::vertex::colors;
use crate::sim::{Session, SessionPhase};

/// Distance flown, in whole metres
pub fn distance_metres(x: f32) -> u32 {
    (x / PIXELS_PER_METRE).floor().max(0.0) as u32
}

/// Snapshot of everything the HUD shows
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub distance_m: u32,
    /// Fuel meter fill, 0-1
    pub fuel_fraction: f32,
    pub fuel_outline: [f32; 4],
    pub fuel_fill: [f32; 4],
    pub show_introduction: bool,
    pub show_restart: bool,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        let fuel = session.balloon.fuel;
        Self {
            distance_m: distance_metres(session.balloon.x),
            fuel_fraction: (fuel / FUEL_MAX).clamp(0.0, 1.0),
            fuel_outline: if fuel <= 50.0 {
                colors::FUEL_WARNING
            } else {
                colors::FUEL_OUTLINE
            },
            fuel_fill: if fuel <= 30.0 {
                colors::FUEL_FILL_LOW
            } else {
                colors::FUEL_FILL
            },
            show_introduction: session.phase == SessionPhase::Idle,
            show_restart: session.phase == SessionPhase::Ended,
        }
    }

    /// Score label, e.g. "12 m"
    pub fn distance_label(&self) -> String {
        format!("{} m", self.distance_m)
    }
}
