//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned rectangle with canvas `fillRect` semantics (negative sizes extend left/up)
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(x, y, w, h, color, color)
}

/// Rectangle with a vertical color gradient from the top edge to the bottom edge
pub fn gradient_rect(x: f32, y: f32, w: f32, h: f32, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let (x0, x1) = (x.min(x + w), x.max(x + w));
    let (y0, y1) = (y.min(y + h), y.max(y + h));

    vec![
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Rectangle outline drawn inside the given bounds
pub fn stroke_rect(x: f32, y: f32, w: f32, h: f32, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(x, y, w, thickness, color));
    vertices.extend(rect(x, y + h - thickness, w, thickness, color));
    vertices.extend(rect(x, y + thickness, thickness, h - 2.0 * thickness, color));
    vertices.extend(rect(x + w - thickness, y + thickness, thickness, h - 2.0 * thickness, color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Fill a closed outline by fanning from its centroid.
///
/// Only correct for outlines that are star-shaped around their centroid.
pub fn fan(outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if outline.len() < 3 {
        return Vec::new();
    }

    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, &a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        vertices.extend(triangle(centroid, a, b, color));
    }
    vertices
}

/// Sample a quadratic Bezier curve, excluding the start point
pub fn quadratic_curve(start: Vec2, control: Vec2, end: Vec2, steps: u32) -> Vec<Vec2> {
    (1..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let u = 1.0 - t;
            start * (u * u) + control * (2.0 * u * t) + end * (t * t)
        })
        .collect()
}

/// Sample a circular arc from `start_angle` to `end_angle`, both endpoints included
pub fn arc_points(center: Vec2, radius: f32, start_angle: f32, end_angle: f32, steps: u32) -> Vec<Vec2> {
    (0..=steps)
        .map(|i| {
            let theta = start_angle + (end_angle - start_angle) * (i as f32 / steps as f32);
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Fill the area between a silhouette and a horizontal baseline below it
pub fn area_under(silhouette: &[Vec2], baseline: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(silhouette.len().saturating_sub(1) * 6);
    for pair in silhouette.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(a.x, baseline, color));

        vertices.push(Vertex::new(a.x, baseline, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(b.x, baseline, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_negative_height_extends_up() {
        let vertices = rect(10.0, 0.0, 4.0, -30.0, WHITE);
        assert_eq!(vertices.len(), 6);
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| (-30.0..=0.0).contains(&y)));
    }

    #[test]
    fn test_gradient_rect_colors() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let vertices = gradient_rect(0.0, 0.0, 10.0, 10.0, top, bottom);
        for v in &vertices {
            let expected = if v.position[1] == 0.0 { top } else { bottom };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_quadratic_curve_endpoints() {
        let points = quadratic_curve(Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0), 8);
        assert_eq!(points.len(), 8);
        assert_eq!(*points.last().unwrap(), Vec2::new(10.0, 0.0));
        // Midpoint of a symmetric curve is halfway to the control point
        assert!((points[3].y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_arc_points_upper_half() {
        let points = arc_points(Vec2::ZERO, 2.0, PI, 2.0 * PI, 4);
        assert_eq!(points.len(), 5);
        assert!((points[0] - Vec2::new(-2.0, 0.0)).length() < 1e-5);
        assert!((points[2] - Vec2::new(0.0, -2.0)).length() < 1e-5);
        assert!((points[4] - Vec2::new(2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_fan_needs_three_points() {
        assert!(fan(&[Vec2::ZERO, Vec2::X], WHITE).is_empty());
        let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        assert_eq!(fan(&square, WHITE).len(), 12);
    }

    #[test]
    fn test_stroke_rect_is_four_bars() {
        assert_eq!(stroke_rect(0.0, 0.0, 300.0, 50.0, 2.0, WHITE).len(), 24);
    }

    #[test]
    fn test_area_under_quads() {
        let silhouette = [Vec2::new(0.0, 5.0), Vec2::new(4.0, 3.0), Vec2::new(8.0, 5.0)];
        let vertices = area_under(&silhouette, 20.0, WHITE);
        assert_eq!(vertices.len(), 12);
    }
}
