//! Session state and core simulation types
//!
//! Everything the frame loop reads or mutates lives in [`Session`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generate::{next_decoration, next_obstacle};
use super::window::{Positioned, Window};
use crate::config::Viewport;
use crate::consts::*;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first heat input, introduction shown
    Idle,
    /// Frame loop active
    Running,
    /// Terminal until restarted
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Balloon cart touched a tree crown
    Collision,
    /// Fuel ran out and the balloon is on the ground
    OutOfFuel,
}

/// Logical input events delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Burner on (pointer/touch pressed)
    HeatStart,
    /// Burner off (pointer/touch released)
    HeatEnd,
    /// Full reset back to the introduction
    Restart,
}

/// The player's balloon
///
/// World coordinates: y grows downward and the ground is y = 0, so the
/// balloon is airborne while y < 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub x: f32,
    pub y: f32,
    pub vertical_velocity: f32,
    pub horizontal_velocity: f32,
    /// Percentage of fuel left
    pub fuel: f32,
}

impl Default for Balloon {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vertical_velocity: BALLOON_START_VERTICAL_VELOCITY,
            horizontal_velocity: BALLOON_HORIZONTAL_VELOCITY,
            fuel: FUEL_MAX,
        }
    }
}

impl Balloon {
    /// Height above ground (never negative)
    #[inline]
    pub fn altitude(&self) -> f32 {
        -self.y
    }

    #[inline]
    pub fn is_landed(&self) -> bool {
        self.y >= 0.0
    }

    #[inline]
    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel <= 0.0
    }
}

/// Tree colors, shared by obstacles and background trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeColor {
    Olive,
    Moss,
    Lime,
}

impl TreeColor {
    pub const PALETTE: [TreeColor; 3] = [TreeColor::Olive, TreeColor::Moss, TreeColor::Lime];

    /// 0xRRGGBB value
    pub fn hex(&self) -> u32 {
        match self {
            TreeColor::Olive => 0x6D8821,
            TreeColor::Moss => 0x8FAC34,
            TreeColor::Lime => 0x98B333,
        }
    }
}

/// An obstacle tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Trunk x in world space
    pub x: f32,
    /// Trunk height
    pub height: f32,
    /// Crown circle radii. The first five form the collision hull, the
    /// last two only fill out the drawn crown.
    pub radii: [f32; 7],
    pub color: TreeColor,
}

impl Positioned for Obstacle {
    fn x(&self) -> f32 {
        self.x
    }
}

/// A background tree on the front hill (cosmetic only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub x: f32,
    pub color: TreeColor,
}

impl Positioned for Decoration {
    fn x(&self) -> f32 {
        self.x
    }
}

/// End-of-run stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub distance_m: u32,
    pub fuel_left: f32,
    pub end_reason: Option<EndReason>,
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the session RNG started from
    pub seed: u64,
    pub phase: SessionPhase,
    pub balloon: Balloon,
    /// Burner state, sampled once per tick
    pub heating: bool,
    /// Trees the balloon can collide with, sorted by x
    pub obstacles: Window<Obstacle>,
    /// Trees on the background hill
    pub decorations: Window<Decoration>,
    pub viewport: Viewport,
    /// Ticks simulated since the last reset
    pub ticks: u64,
    pub end_reason: Option<EndReason>,
    rng: Pcg32,
}

impl Session {
    /// Create an idle session with freshly generated windows
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = fill_obstacles(&viewport, &mut rng);
        let decorations = fill_decorations(&viewport, &mut rng);

        Self {
            seed,
            phase: SessionPhase::Idle,
            balloon: Balloon::default(),
            heating: false,
            obstacles,
            decorations,
            viewport,
            ticks: 0,
            end_reason: None,
            rng,
        }
    }

    /// Back to idle with new procedural sequences.
    ///
    /// The RNG stream continues, so every restart gets a different forest.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.balloon = Balloon::default();
        self.heating = false;
        self.ticks = 0;
        self.end_reason = None;
        self.obstacles = fill_obstacles(&self.viewport, &mut self.rng);
        self.decorations = fill_decorations(&self.viewport, &mut self.rng);
    }

    /// Apply an input event.
    ///
    /// Returns the new phase if the event caused a transition.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SessionPhase> {
        match (self.phase, event) {
            (_, InputEvent::Restart) => {
                let from = self.phase;
                self.reset();
                log::info!("Session restarted from {:?}", from);
                Some(SessionPhase::Idle)
            }
            (SessionPhase::Idle, InputEvent::HeatStart) => {
                self.heating = true;
                self.phase = SessionPhase::Running;
                log::info!("Session running (seed {})", self.seed);
                Some(SessionPhase::Running)
            }
            (SessionPhase::Ended, _) => None,
            (_, InputEvent::HeatStart) => {
                self.heating = true;
                None
            }
            (_, InputEvent::HeatEnd) => {
                self.heating = false;
                None
            }
        }
    }

    /// Enter the terminal phase. Freezes the balloon where it is.
    pub fn end(&mut self, reason: EndReason) {
        self.phase = SessionPhase::Ended;
        self.heating = false;
        self.end_reason = Some(reason);
        log::info!(
            "Session ended: {:?} after {} ticks at {} m",
            reason,
            self.ticks,
            crate::hud::distance_metres(self.balloon.x)
        );
    }

    /// Use a new viewport for windowing and layout from the next tick on.
    ///
    /// A wider viewport tops both windows up from their tails so they still
    /// cover the screen. A narrower one keeps the extra elements.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let rng = &mut self.rng;

        let obstacles = self
            .obstacles
            .extend_to(fill_count(viewport.width, OBSTACLE_FILL_SPACING), |tail| {
                next_obstacle(tail, &mut *rng)
            });
        let decorations = self
            .decorations
            .extend_to(fill_count(viewport.width, DECORATION_FILL_SPACING), |tail| {
                next_decoration(tail, &mut *rng)
            });
        if obstacles + decorations > 0 {
            log::debug!(
                "Viewport widened to {}: added {} trees and {} background trees",
                viewport.width,
                obstacles,
                decorations
            );
        }
    }

    /// Recycle at most one obstacle and one background tree
    pub fn recycle_windows(&mut self) {
        let padding = self.viewport.horizontal_padding();
        let rng = &mut self.rng;

        let obstacle_edge = self.balloon.x - padding;
        if self
            .obstacles
            .recycle(obstacle_edge, OBSTACLE_RECYCLE_MARGIN, |tail| {
                next_obstacle(tail, &mut *rng)
            })
        {
            log::trace!("Recycled obstacle, head now at {:?}", self.obstacles.min_x());
        }

        let decoration_edge = self.balloon.x * BACKGROUND_PARALLAX - padding;
        self.decorations
            .recycle(decoration_edge, DECORATION_RECYCLE_MARGIN, |tail| {
                next_decoration(tail, &mut *rng)
            });
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.ticks,
            distance_m: crate::hud::distance_metres(self.balloon.x),
            fuel_left: self.balloon.fuel.max(0.0),
            end_reason: self.end_reason,
        }
    }
}

/// Number of elements needed to cover `width` at the given spacing
fn fill_count(width: f32, spacing: f32) -> usize {
    // Matches counting i = 1.. while i < width / spacing
    ((width / spacing).ceil() as usize).saturating_sub(1).max(1)
}

fn fill_obstacles(viewport: &Viewport, rng: &mut Pcg32) -> Window<Obstacle> {
    let count = fill_count(viewport.width, OBSTACLE_FILL_SPACING);
    Window::filled(count, |tail| next_obstacle(tail, &mut *rng))
}

fn fill_decorations(viewport: &Viewport, rng: &mut Pcg32) -> Window<Decoration> {
    let count = fill_count(viewport.width, DECORATION_FILL_SPACING);
    Window::filled(count, |tail| next_decoration(tail, &mut *rng))
}
