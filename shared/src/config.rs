//! Generator parameters and their built-in defaults

use crate::format::LiteralStyle;

/// Parameters for the spiral point table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralConfig {
    /// Number of points to emit
    pub count: usize,
    /// Vector literal syntax
    pub style: LiteralStyle,
    /// Fixed decimals, or `None` for shortest round-trip output
    pub precision: Option<usize>,
}

impl SpiralConfig {
    pub const DEFAULT_COUNT: usize = 64;
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            style: LiteralStyle::Hlsl,
            precision: None,
        }
    }
}

/// Parameters for the Gaussian weight table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianConfig {
    /// Standard deviation in taps
    pub sigma: f64,
    /// Taps on each side of the centre
    pub radius: u32,
    /// Fixed decimals, or `None` for shortest round-trip output
    pub precision: Option<usize>,
}

impl GaussianConfig {
    pub const DEFAULT_SIGMA: f64 = 2.0;
    pub const DEFAULT_RADIUS: u32 = 5;

    /// Number of taps in the kernel.
    pub fn tap_count(&self) -> usize {
        2 * self.radius as usize + 1
    }
}

impl Default for GaussianConfig {
    fn default() -> Self {
        Self {
            sigma: Self::DEFAULT_SIGMA,
            radius: Self::DEFAULT_RADIUS,
            precision: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spiral = SpiralConfig::default();
        assert_eq!(spiral.count, 64);
        assert_eq!(spiral.style, LiteralStyle::Hlsl);
        assert_eq!(spiral.precision, None);

        let gaussian = GaussianConfig::default();
        assert_eq!(gaussian.sigma, 2.0);
        assert_eq!(gaussian.radius, 5);
        assert_eq!(gaussian.tap_count(), 11);
    }
}
