use serde::{Deserialize, Serialize};

/// A point on the lesson's 2D drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle of the segment from `p1` to `p2`, in degrees in `(-180, 180]`.
///
/// Two identical points yield 0 (`atan2(0, 0)`).
#[must_use]
pub fn angle_of(p1: Point, p2: Point) -> f64 {
    let dy = p2.y - p1.y;
    let dx = p2.x - p1.x;
    dy.atan2(dx).to_degrees()
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    dx.hypot(dy)
}

/// Whether two segment angles describe parallel line orientations.
///
/// Orientation is direction-agnostic: a segment and its reverse are the same
/// line. Both angles are normalized modulo 180 into `[0, 180)` and compared;
/// the wrap-around near 0/180 counts as parallel too.
#[must_use]
pub fn is_parallel_within_tolerance(angle1: f64, angle2: f64, tolerance_deg: f64) -> bool {
    let a1 = normalize_orientation(angle1);
    let a2 = normalize_orientation(angle2);

    let diff = (a1 - a2).abs();
    diff <= tolerance_deg || (diff - 180.0).abs() <= tolerance_deg
}

fn normalize_orientation(angle: f64) -> f64 {
    let mut a = angle % 180.0;
    if a < 0.0 {
        a += 180.0;
    }
    a
}
