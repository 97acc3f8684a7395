//! Discrete Gaussian kernel weights

use std::ops::RangeInclusive;

use crate::error::TableError;

/// Tap offsets of a kernel with the given radius, in ascending order.
pub fn gaussian_offsets(radius: u32) -> RangeInclusive<i64> {
    let r = i64::from(radius);
    -r..=r
}

/// Normalized 1D Gaussian kernel of `2 * radius + 1` taps.
///
/// Weight at offset `x` is `exp(-x² / (2σ²))`, divided by the sum over all
/// taps so the kernel sums to 1. Weights are ordered by ascending offset
/// (see [`gaussian_offsets`]) and are exactly symmetric about the centre.
///
/// Fails if `sigma` is not a finite positive number.
///
/// Taps far from the centre relative to `sigma` underflow to exactly `0.0`
/// (e.g. sigma 0.01 with radius 5), so only the centre tap is guaranteed
/// positive. For a vanishing sigma the kernel degenerates to a unit impulse.
pub fn gaussian_weights(sigma: f64, radius: u32) -> Result<Vec<f64>, TableError> {
    validate_sigma(sigma)?;

    let mut weights: Vec<f64> = gaussian_offsets(radius)
        .map(|x| {
            // Scale before squaring so sigma² never underflows to zero
            let t = x as f64 / sigma;
            (-0.5 * t * t).exp()
        })
        .collect();

    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }

    Ok(weights)
}

fn validate_sigma(sigma: f64) -> Result<(), TableError> {
    if !sigma.is_finite() {
        return Err(TableError::invalid(
            "sigma",
            format!("must be finite, got {sigma}"),
        ));
    }
    if sigma <= 0.0 {
        return Err(TableError::invalid(
            "sigma",
            format!("must be positive, got {sigma}"),
        ));
    }
    Ok(())
}
