//! Golden-angle spiral sample points
//!
//! Each index advances by a constant fraction of a full turn,
//! δ = (3 − √5) / 2 ≈ 0.381966, which is 1 minus the reciprocal of the golden
//! ratio. Because δ is irrational (and badly approximable), successive angles
//! never line up into periodic clusters, so any prefix of the sequence is
//! spread near-uniformly around the circle.
//!
//! The angle is reduced as a fraction of a turn and only then scaled by 2π,
//! so it always lands in `[0, 2π)`.

use std::f64::consts::TAU;

use glam::DVec2;

/// A 2D sample position.
pub type Point = DVec2;

/// Fraction of a full turn between consecutive spiral samples.
#[inline]
pub fn turn_fraction() -> f64 {
    (3.0 - 5.0f64.sqrt()) * 0.5
}

/// Angle in radians of the `i`-th spiral sample, in `[0, 2π)`.
#[inline]
pub fn spiral_angle(i: usize) -> f64 {
    (i as f64 * turn_fraction()).fract() * TAU
}

/// `n` points on the unit circle at successive golden-angle increments.
///
/// The first point is always `(1, 0)`. `n == 0` yields an empty table.
pub fn spiral_points(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::from_angle(spiral_angle(i))).collect()
}

/// `n` points filling the unit disk (Vogel spiral).
///
/// Uses the same angles as [`spiral_points`] with radius `sqrt((i + 0.5) / n)`,
/// so each sample covers an equal share of the disk area.
pub fn spiral_disk_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let radius = ((i as f64 + 0.5) / n as f64).sqrt();
            Point::from_angle(spiral_angle(i)) * radius
        })
        .collect()
}
