//! Scene assembly
//!
//! Builds the full frame as one triangle list in screen pixels, back to
//! front. Reads the session only.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::config::Viewport;
use crate::consts::BACKGROUND_PARALLAX;
use crate::hud::Hud;
use crate::sim::{Balloon, Decoration, Obstacle, Session, crown_circles};
use crate::sinus;

/// A sine-wave hill silhouette
#[derive(Debug, Clone, Copy)]
pub struct HillLayer {
    pub base_height: f32,
    /// Scroll speed relative to the balloon
    pub speed: f32,
    pub amplitude: f32,
    pub stretch: f32,
    pub color: [f32; 4],
}

impl HillLayer {
    /// World y of the silhouette at screen column `x`
    pub fn y_at(&self, x: f32, scroll: f32) -> f32 {
        sinus((scroll * self.speed + x) * self.stretch) * self.amplitude - self.base_height
    }
}

/// The hill in front of the background trees
pub const FRONT_HILL: HillLayer = HillLayer {
    base_height: 18.0,
    speed: 1.0,
    amplitude: 10.0,
    stretch: 0.2,
    color: colors::HILL,
};

/// Amplitude of the line the background trees stand on
const BACKGROUND_TREE_AMPLITUDE: f32 = 10.0;
/// Horizontal resolution of hill silhouettes, in pixels
const HILL_STEP: f32 = 4.0;
const CIRCLE_SEGMENTS: u32 = 20;
/// Off-screen slack before skipping a tree
const CULL_MARGIN: f32 = 100.0;

/// Maps world coordinates to screen pixels
#[derive(Debug, Clone, Copy)]
struct Camera {
    viewport: Viewport,
    padding: f32,
    ground: f32,
    scroll: f32,
}

impl Camera {
    fn new(viewport: Viewport, balloon: &Balloon) -> Self {
        Self {
            viewport,
            padding: viewport.horizontal_padding(),
            ground: viewport.ground_line(),
            scroll: balloon.x,
        }
    }

    fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(self.padding + world.x - self.scroll, self.ground + world.y)
    }

    fn is_visible(&self, screen_x: f32) -> bool {
        screen_x > -CULL_MARGIN && screen_x < self.viewport.width + CULL_MARGIN
    }
}

/// Build every vertex of the current frame
pub fn build_scene(session: &Session) -> Vec<Vertex> {
    let camera = Camera::new(session.viewport, &session.balloon);
    let mut vertices = Vec::with_capacity(8192);

    sky(&mut vertices, &camera);
    hill(&mut vertices, &camera, &FRONT_HILL);
    for tree in &session.decorations {
        background_tree(&mut vertices, &camera, tree);
    }
    for tree in &session.obstacles {
        obstacle_tree(&mut vertices, &camera, tree);
    }
    balloon(&mut vertices, &camera, &session.balloon);
    fuel_meter(&mut vertices, &camera, &Hud::from_session(session));

    vertices
}

fn sky(out: &mut Vec<Vertex>, camera: &Camera) {
    let Viewport { width, height } = camera.viewport;
    out.extend(shapes::gradient_rect(
        0.0,
        0.0,
        width,
        height,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));
}

fn hill(out: &mut Vec<Vertex>, camera: &Camera, layer: &HillLayer) {
    let width = camera.viewport.width;
    let columns = (width / HILL_STEP).ceil() as u32;
    let silhouette: Vec<Vec2> = (0..=columns)
        .map(|i| {
            let x = (i as f32 * HILL_STEP).min(width);
            Vec2::new(x, camera.ground + layer.y_at(x, camera.scroll))
        })
        .collect();
    out.extend(shapes::area_under(&silhouette, camera.viewport.height, layer.color));
}

fn background_tree(out: &mut Vec<Vertex>, camera: &Camera, tree: &Decoration) {
    const TRUNK_HEIGHT: f32 = 10.0;
    const TRUNK_WIDTH: f32 = 2.0;
    const CROWN_HEIGHT: f32 = 25.0;
    const CROWN_WIDTH: f32 = 10.0;

    let x = camera.padding + tree.x - camera.scroll * BACKGROUND_PARALLAX;
    if !camera.is_visible(x) {
        return;
    }
    let y = camera.ground + sinus(tree.x) * BACKGROUND_TREE_AMPLITUDE;

    out.extend(shapes::rect(
        x - TRUNK_WIDTH / 2.0,
        y,
        TRUNK_WIDTH,
        -TRUNK_HEIGHT,
        colors::BACKGROUND_TRUNK,
    ));
    out.extend(shapes::triangle(
        Vec2::new(x - CROWN_WIDTH / 2.0, y - TRUNK_HEIGHT),
        Vec2::new(x, y - TRUNK_HEIGHT - CROWN_HEIGHT),
        Vec2::new(x + CROWN_WIDTH / 2.0, y - TRUNK_HEIGHT),
        colors::rgb(tree.color.hex()),
    ));
}

fn obstacle_tree(out: &mut Vec<Vertex>, camera: &Camera, tree: &Obstacle) {
    let base = camera.to_screen(Vec2::new(tree.x, 0.0));
    if !camera.is_visible(base.x) {
        return;
    }

    out.extend(shapes::rect(base.x - 2.0, base.y, 4.0, -tree.height, colors::TRUNK));

    let color = colors::rgb(tree.color.hex());
    for circle in crown_circles(tree) {
        out.extend(shapes::circle(
            camera.to_screen(circle.center),
            circle.radius,
            color,
            CIRCLE_SEGMENTS,
        ));
    }
}

/// Envelope outline in balloon-local coordinates
fn envelope_outline() -> Vec<Vec2> {
    let mut outline = vec![Vec2::new(-30.0, -60.0)];
    outline.extend(shapes::quadratic_curve(
        Vec2::new(-30.0, -60.0),
        Vec2::new(-80.0, -120.0),
        Vec2::new(-80.0, -150.0),
        12,
    ));
    // Upper half circle, left to right over the top
    outline.extend(shapes::arc_points(Vec2::new(0.0, -150.0), 80.0, PI, 2.0 * PI, 32).into_iter().skip(1));
    outline.extend(shapes::quadratic_curve(
        Vec2::new(80.0, -150.0),
        Vec2::new(80.0, -60.0),
        Vec2::new(40.0, -60.0),
        12,
    ));
    outline
}

fn balloon(out: &mut Vec<Vertex>, camera: &Camera, balloon: &Balloon) {
    let origin = camera.to_screen(Vec2::new(balloon.x, balloon.y));
    let local_rect = |out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]| {
        out.extend(shapes::rect(origin.x + x, origin.y + y, w, h, color));
    };

    let outline: Vec<Vec2> = envelope_outline().into_iter().map(|p| origin + p).collect();
    out.extend(shapes::fan(&outline, colors::ENVELOPE));

    local_rect(out, -30.0, -60.0, 70.0, 30.0, colors::CART);
    // Ropes
    local_rect(out, -20.0, 0.0, 10.0, -30.0, colors::ENVELOPE);
    local_rect(out, 20.0, 0.0, 10.0, -30.0, colors::ENVELOPE);
    local_rect(out, 50.0, -140.0, 10.0, -10.0, colors::EYE);
    local_rect(out, 62.0, -100.0, 15.0, -4.0, colors::MOUTH);
    local_rect(out, 20.0, 0.0, 20.0, -10.0, colors::FEET);
    local_rect(out, -20.0, 0.0, 20.0, -10.0, colors::FEET);
}

fn fuel_meter(out: &mut Vec<Vertex>, camera: &Camera, hud: &Hud) {
    const WIDTH: f32 = 300.0;
    const HEIGHT: f32 = 50.0;
    const TOP: f32 = 30.0;
    const RIGHT_MARGIN: f32 = 30.0;

    let left = camera.viewport.width - RIGHT_MARGIN - WIDTH;
    out.extend(shapes::rect(left, TOP, WIDTH * hud.fuel_fraction, HEIGHT, hud.fuel_fill));
    out.extend(shapes::stroke_rect(left, TOP, WIDTH, HEIGHT, 2.0, hud.fuel_outline));
}
