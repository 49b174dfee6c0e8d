//! Collision detection between the balloon cart and tree crowns
//!
//! Both shapes are approximated: the cart by three key points on its
//! bounding box, each tree crown by a cluster of circles. A hit is any cart
//! point strictly inside any hull circle.

use glam::Vec2;

use super::state::{Balloon, Obstacle};

/// Horizontal reach of the cart key points from the balloon x
const CART_HALF_SPAN: f32 = 30.0;
/// Horizontal reach of the crown hull centers from the trunk x
const HULL_HALF_SPAN: f32 = 30.0;

/// A circle of a tree crown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoint {
    pub center: Vec2,
    pub radius: f32,
}

impl KeyPoint {
    /// Strict containment: a point exactly on the rim is not a hit
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) < self.radius
    }
}

/// Cart key points: bottom-left, bottom-right, top-right
pub fn balloon_key_points(balloon: &Balloon) -> [Vec2; 3] {
    let (x, y) = (balloon.x, balloon.y);
    [
        Vec2::new(x - 30.0, y),
        Vec2::new(x + 30.0, y),
        Vec2::new(x + 10.0, y - 20.0),
    ]
}

/// All seven crown circles, in draw order: base-left, left, top-left, top,
/// top-right, right, base-right
pub fn crown_circles(obstacle: &Obstacle) -> [KeyPoint; 7] {
    let (x, h) = (obstacle.x, obstacle.height);
    let centers = [
        Vec2::new(x - 20.0, -h - 5.0),
        Vec2::new(x - 30.0, -h - 25.0),
        Vec2::new(x - 20.0, -h - 35.0),
        Vec2::new(x, -h - 45.0),
        Vec2::new(x + 20.0, -h - 35.0),
        Vec2::new(x + 30.0, -h - 25.0),
        Vec2::new(x + 20.0, -h - 5.0),
    ];
    std::array::from_fn(|i| KeyPoint {
        center: centers[i],
        radius: obstacle.radii[i],
    })
}

/// The five circles that take part in collision
pub fn obstacle_hull(obstacle: &Obstacle) -> [KeyPoint; 5] {
    let circles = crown_circles(obstacle);
    [circles[0], circles[1], circles[2], circles[3], circles[4]]
}

/// True if no hull circle of `obstacle` can reach any cart key point
fn out_of_reach(balloon: &Balloon, obstacle: &Obstacle) -> bool {
    let max_radius = obstacle.radii[..5].iter().copied().fold(0.0, f32::max);
    (obstacle.x - balloon.x).abs() > CART_HALF_SPAN + HULL_HALF_SPAN + max_radius
}

/// Check the cart against a single tree
pub fn balloon_hits_obstacle(balloon: &Balloon, obstacle: &Obstacle) -> bool {
    if out_of_reach(balloon, obstacle) {
        return false;
    }

    let cart = balloon_key_points(balloon);
    obstacle_hull(obstacle)
        .iter()
        .any(|circle| cart.iter().any(|&point| circle.contains(point)))
}

/// Check the cart against every tree in the window, stopping at the first hit
pub fn hit_detection<'a>(
    balloon: &Balloon,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
) -> bool {
    obstacles
        .into_iter()
        .any(|obstacle| balloon_hits_obstacle(balloon, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::TreeColor;

    /// Tree with a single meaningful circle on top (index 3)
    fn tree_with_top_radius(x: f32, height: f32, radius: f32) -> Obstacle {
        Obstacle {
            x,
            height,
            radii: [1.0, 1.0, 1.0, radius, 1.0, 40.0, 40.0],
            color: TreeColor::Olive,
        }
    }

    /// Balloon whose bottom-left key point sits `distance` straight above `point`
    fn balloon_above(point: Vec2, distance: f32) -> Balloon {
        Balloon {
            x: point.x + 30.0,
            y: point.y - distance,
            ..Balloon::default()
        }
    }

    #[test]
    fn test_hit_just_inside_radius() {
        let tree = tree_with_top_radius(600.0, 120.0, 40.0);
        let top = crown_circles(&tree)[3].center;
        let balloon = balloon_above(top, 40.0 - 0.01);
        assert!(balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_miss_just_outside_radius() {
        let tree = tree_with_top_radius(600.0, 120.0, 40.0);
        let top = crown_circles(&tree)[3].center;
        let balloon = balloon_above(top, 40.0 + 0.01);
        assert!(!balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_rim_is_not_a_hit() {
        let circle = KeyPoint {
            center: Vec2::new(0.0, 0.0),
            radius: 5.0,
        };
        assert!(!circle.contains(Vec2::new(3.0, 4.0)));
        assert!(circle.contains(Vec2::new(3.0, 3.9)));
    }

    #[test]
    fn test_cosmetic_circles_do_not_collide() {
        // Balloon sitting right on the "right" crown circle, which is draw-only
        let tree = tree_with_top_radius(600.0, 120.0, 1.0);
        let right = crown_circles(&tree)[5].center;
        let balloon = Balloon {
            x: right.x + 30.0,
            y: right.y,
            ..Balloon::default()
        };
        assert!(!balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_balloon_on_ground_clears_tree() {
        let tree = Obstacle {
            x: 400.0,
            height: 100.0,
            radii: [48.0; 7],
            color: TreeColor::Moss,
        };
        // Lowest hull circle bottom is at -100 - 5 + 48 = -57, cart top at -20
        let balloon = Balloon {
            x: 400.0,
            ..Balloon::default()
        };
        assert!(!balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_flying_into_crown_hits() {
        let tree = Obstacle {
            x: 400.0,
            height: 100.0,
            radii: [40.0; 7],
            color: TreeColor::Lime,
        };
        let balloon = Balloon {
            x: 400.0,
            y: -130.0,
            ..Balloon::default()
        };
        assert!(balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_far_tree_skipped() {
        let tree = Obstacle {
            x: 2000.0,
            height: 100.0,
            radii: [48.0; 7],
            color: TreeColor::Lime,
        };
        let balloon = Balloon {
            x: 0.0,
            y: -130.0,
            ..Balloon::default()
        };
        assert!(out_of_reach(&balloon, &tree));
        assert!(!balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_reach_reject_never_hides_a_hit() {
        // Tree just at the edge of reach: left circle center at x - 30
        let tree = Obstacle {
            x: 200.0,
            height: 100.0,
            radii: [1.0, 48.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            color: TreeColor::Olive,
        };
        let left = crown_circles(&tree)[1].center;
        // Bottom-right cart point 47.9 to the left of the left circle
        let balloon = Balloon {
            x: left.x - 47.9 - 30.0,
            y: left.y,
            ..Balloon::default()
        };
        assert!(!out_of_reach(&balloon, &tree));
        assert!(balloon_hits_obstacle(&balloon, &tree));
    }

    #[test]
    fn test_hit_detection_over_window() {
        let trees = vec![
            tree_with_top_radius(400.0, 120.0, 40.0),
            tree_with_top_radius(900.0, 150.0, 40.0),
        ];
        let top = crown_circles(&trees[1])[3].center;
        let hit = balloon_above(top, 20.0);
        assert!(hit_detection(&hit, &trees));

        let miss = Balloon::default();
        assert!(!hit_detection(&miss, &trees));
        assert!(!hit_detection(&hit, std::iter::empty()));
    }
}
