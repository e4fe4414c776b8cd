//! Minimum-area enclosing rectangle over integer point sets.
//!
//! Defects are elongated at arbitrary angles, so an axis-aligned box is not
//! good enough: the classifier needs the true oriented extent. The rectangle
//! is found by building the convex hull (exact integer arithmetic) and then
//! minimizing the projected bounding box over every hull edge direction — the
//! minimum-area rectangle always has one side flush with a hull edge.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An arbitrarily rotated rectangle in image space.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RotatedRect {
    pub center: Point2<f32>,
    /// Extent along the rotated x axis.
    pub width: f32,
    /// Extent along the rotated y axis.
    pub height: f32,
    /// Rotation of the width axis, radians.
    pub angle: f32,
}

impl RotatedRect {
    /// Corner points in order (suitable as a closed contour for overlays).
    pub fn corners(&self) -> [Point2<f32>; 4] {
        let u = Vector2::new(self.angle.cos(), self.angle.sin()) * (self.width * 0.5);
        let v = Vector2::new(-self.angle.sin(), self.angle.cos()) * (self.height * 0.5);
        let c = self.center;
        [c - u - v, c + u - v, c + u + v, c - u + v]
    }

    /// The longer of the two sides.
    pub fn larger_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// The shorter of the two sides.
    pub fn smaller_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

fn cross(o: Point, a: Point, b: Point) -> i64 {
    let oa = (i64::from(a.x - o.x), i64::from(a.y - o.y));
    let ob = (i64::from(b.x - o.x), i64::from(b.y - o.y));
    oa.0 * ob.1 - oa.1 * ob.0
}

/// Convex hull of an integer point set (Andrew monotone chain).
///
/// Returns the hull in counter-clockwise order without interior collinear
/// vertices. Degenerate inputs are allowed: a single point yields a one-point
/// hull, a collinear set yields its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_unstable();
    pts.dedup();

    if pts.len() <= 2 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len() + 1);

    // Lower hull.
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper hull.
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop(); // last point repeats the first
    hull
}

/// Minimum-area rectangle enclosing `points`, at any rotation.
///
/// Returns `None` only for an empty input. Single-point and collinear sets
/// produce rectangles with zero width and/or height rather than an error.
pub fn min_area_rect(points: &[Point]) -> Option<RotatedRect> {
    let hull = convex_hull(points);

    match hull.len() {
        0 => None,
        1 => Some(RotatedRect {
            center: Point2::new(hull[0].x as f32, hull[0].y as f32),
            width: 0.0,
            height: 0.0,
            angle: 0.0,
        }),
        2 => {
            let a = Point2::new(f64::from(hull[0].x), f64::from(hull[0].y));
            let b = Point2::new(f64::from(hull[1].x), f64::from(hull[1].y));
            let e = b - a;
            let mid = nalgebra::center(&a, &b);
            Some(RotatedRect {
                center: Point2::new(mid.x as f32, mid.y as f32),
                width: e.norm() as f32,
                height: 0.0,
                angle: e.y.atan2(e.x) as f32,
            })
        }
        n => {
            let h: Vec<Point2<f64>> = hull
                .iter()
                .map(|p| Point2::new(f64::from(p.x), f64::from(p.y)))
                .collect();

            let mut best: Option<RotatedRect> = None;
            let mut best_area = f64::INFINITY;

            for i in 0..n {
                let a = h[i];
                let e = h[(i + 1) % n] - a;
                let u = e.normalize();
                let v = Vector2::new(-u.y, u.x);

                let mut umin = f64::INFINITY;
                let mut umax = f64::NEG_INFINITY;
                let mut vmin = f64::INFINITY;
                let mut vmax = f64::NEG_INFINITY;
                for p in &h {
                    let d = p - a;
                    let pu = d.dot(&u);
                    let pv = d.dot(&v);
                    umin = umin.min(pu);
                    umax = umax.max(pu);
                    vmin = vmin.min(pv);
                    vmax = vmax.max(pv);
                }

                let area = (umax - umin) * (vmax - vmin);
                if area < best_area {
                    best_area = area;
                    let c = a + u * (0.5 * (umin + umax)) + v * (0.5 * (vmin + vmax));
                    best = Some(RotatedRect {
                        center: Point2::new(c.x as f32, c.y as f32),
                        width: (umax - umin) as f32,
                        height: (vmax - vmin) as f32,
                        angle: u.y.atan2(u.x) as f32,
                    });
                }
            }

            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_input_has_no_rect() {
        assert!(min_area_rect(&[]).is_none());
    }

    #[test]
    fn single_point_degenerates_to_zero_size() {
        let r = min_area_rect(&pts(&[(7, -3)])).unwrap();
        assert_relative_eq!(r.center.x, 7.0);
        assert_relative_eq!(r.center.y, -3.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn collinear_points_degenerate_to_a_segment() {
        // Diagonal run, including duplicates and interior points.
        let r = min_area_rect(&pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (2, 2)])).unwrap();
        assert_relative_eq!(r.width, (32.0f32).sqrt(), epsilon = 1e-5);
        assert_relative_eq!(r.height, 0.0, epsilon = 1e-5);
        assert_relative_eq!(r.center.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(r.center.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn axis_aligned_block_recovers_its_extent() {
        let mut coords = Vec::new();
        for y in 0..=2 {
            for x in 0..=4 {
                coords.push((x, y));
            }
        }
        let r = min_area_rect(&pts(&coords)).unwrap();
        let (lo, hi) = (r.smaller_side(), r.larger_side());
        assert_relative_eq!(hi, 4.0, epsilon = 1e-5);
        assert_relative_eq!(lo, 2.0, epsilon = 1e-5);
        assert_relative_eq!(r.center.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(r.center.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn rotated_segment_beats_axis_aligned_box() {
        // A thin 45-degree streak: the oriented rect should hug the diagonal,
        // not span the axis-aligned bounding square.
        let mut coords = Vec::new();
        for i in 0..30 {
            coords.push((i, i));
            coords.push((i + 1, i));
        }
        let r = min_area_rect(&pts(&coords)).unwrap();
        assert!(r.larger_side() > 30.0);
        assert!(r.smaller_side() < 1.5);
    }

    #[test]
    fn hull_of_a_square_keeps_only_corners() {
        let mut coords = Vec::new();
        for y in 0..=3 {
            for x in 0..=3 {
                coords.push((x, y));
            }
        }
        let hull = convex_hull(&pts(&coords));
        assert_eq!(hull.len(), 4);
        for c in [(0, 0), (3, 0), (3, 3), (0, 3)] {
            assert!(hull.contains(&Point::new(c.0, c.1)));
        }
    }

    #[test]
    fn corners_are_centered_on_the_rect() {
        let r = RotatedRect {
            center: Point2::new(5.0, 2.0),
            width: 4.0,
            height: 2.0,
            angle: std::f32::consts::FRAC_PI_4,
        };
        let cs = r.corners();
        let mean_x: f32 = cs.iter().map(|c| c.x).sum::<f32>() / 4.0;
        let mean_y: f32 = cs.iter().map(|c| c.y).sum::<f32>() / 4.0;
        assert_relative_eq!(mean_x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(mean_y, 2.0, epsilon = 1e-5);
    }
}
