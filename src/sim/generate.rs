//! Procedural forest generation
//!
//! Each new element is placed a random gap after the current tail.

use rand::Rng;

use super::state::{Decoration, Obstacle, TreeColor};
use crate::consts::*;

/// Generate the obstacle that follows `previous`
pub fn next_obstacle<R: Rng + ?Sized>(previous: Option<&Obstacle>, rng: &mut R) -> Obstacle {
    let x = match previous {
        Some(tail) => tail.x + random_gap(rng, OBSTACLE_GAP_MIN, OBSTACLE_GAP_MAX),
        None => FIRST_OBSTACLE_X,
    };

    let height = rng.random_range(OBSTACLE_HEIGHT_MIN..OBSTACLE_HEIGHT_MAX);
    let radii = std::array::from_fn(|_| rng.random_range(CROWN_RADIUS_MIN..CROWN_RADIUS_MAX));

    Obstacle {
        x,
        height,
        radii,
        color: random_color(rng),
    }
}

/// Generate the background tree that follows `previous`
pub fn next_decoration<R: Rng + ?Sized>(previous: Option<&Decoration>, rng: &mut R) -> Decoration {
    let furthest_x = previous.map_or(0.0, |tail| tail.x);
    Decoration {
        x: furthest_x + random_gap(rng, DECORATION_GAP_MIN, DECORATION_GAP_MAX),
        color: random_color(rng),
    }
}

/// Whole-unit gap in [min, max)
fn random_gap<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> f32 {
    (min + rng.random_range(0..max - min)) as f32
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> TreeColor {
    TreeColor::PALETTE[rng.random_range(0..TreeColor::PALETTE.len())]
}
