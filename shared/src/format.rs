//! Source literal rendering
//!
//! Tables are printed one entry per line, entries separated by `",\n"` with
//! no trailing separator, so the output drops straight into an array
//! initializer.

use crate::spiral::Point;

/// Entry separator for rendered tables.
pub const SEPARATOR: &str = ",\n";

/// Target language syntax for two-component vector literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiteralStyle {
    /// `float2(x, y)`
    #[default]
    Hlsl,
    /// `vec2(x, y)`
    Glsl,
    /// `vec2f(x, y)`
    Wgsl,
    /// `[x, y]`
    Rust,
}

impl LiteralStyle {
    /// Render a single pair of already formatted components.
    fn pair(self, x: &str, y: &str) -> String {
        match self {
            Self::Hlsl => format!("float2({x}, {y})"),
            Self::Glsl => format!("vec2({x}, {y})"),
            Self::Wgsl => format!("vec2f({x}, {y})"),
            Self::Rust => format!("[{x}, {y}]"),
        }
    }
}

/// Format a float as a decimal literal.
///
/// With no precision, the shortest representation that round-trips is used;
/// it always carries a decimal point or exponent (`1.0`, never `1`), so the
/// literal stays floating-point in every target language.
pub fn float_literal(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => format!("{value:?}"),
    }
}

/// Render points as vector constructor literals.
pub fn format_points(points: &[Point], style: LiteralStyle, precision: Option<usize>) -> String {
    points
        .iter()
        .map(|p| {
            style.pair(
                &float_literal(p.x, precision),
                &float_literal(p.y, precision),
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render scalar weights as decimal literals.
pub fn format_weights(weights: &[f64], precision: Option<usize>) -> String {
    weights
        .iter()
        .map(|w| float_literal(*w, precision))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literal_shortest() {
        assert_eq!(float_literal(1.0, None), "1.0");
        assert_eq!(float_literal(0.0, None), "0.0");
        assert_eq!(float_literal(-0.25, None), "-0.25");
    }

    #[test]
    fn test_float_literal_fixed() {
        assert_eq!(float_literal(1.0, Some(3)), "1.000");
        assert_eq!(float_literal(0.123456, Some(4)), "0.1235");
    }

    #[test]
    fn test_styles() {
        let points = [Point::new(0.5, -0.25)];
        assert_eq!(
            format_points(&points, LiteralStyle::Hlsl, None),
            "float2(0.5, -0.25)"
        );
        assert_eq!(
            format_points(&points, LiteralStyle::Glsl, None),
            "vec2(0.5, -0.25)"
        );
        assert_eq!(
            format_points(&points, LiteralStyle::Wgsl, None),
            "vec2f(0.5, -0.25)"
        );
        assert_eq!(
            format_points(&points, LiteralStyle::Rust, None),
            "[0.5, -0.25]"
        );
    }

    #[test]
    fn test_points_joined_without_trailing_separator() {
        let points = [Point::new(0.5, 0.3), Point::new(-0.2, 0.9)];
        assert_eq!(
            format_points(&points, LiteralStyle::default(), None),
            "float2(0.5, 0.3),\nfloat2(-0.2, 0.9)"
        );
    }

    #[test]
    fn test_weights() {
        assert_eq!(format_weights(&[0.25, 0.5, 0.25], None), "0.25,\n0.5,\n0.25");
        assert_eq!(format_weights(&[1.0], Some(2)), "1.00");
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_points(&[], LiteralStyle::Hlsl, None), "");
        assert_eq!(format_weights(&[], None), "");
    }
}
