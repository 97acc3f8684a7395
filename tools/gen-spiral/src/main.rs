//! Print golden-angle spiral sample points as HLSL literals
//!
//! Emits 64 `float2(cos φ, sin φ)` entries, one per line, ready to paste into
//! a `static const float2 samples[64] = { ... };` initializer.

use shader_tables_shared::{SpiralConfig, format_points, spiral_points};

fn main() {
    // Logs go to stderr so stdout holds only the table
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = SpiralConfig::default();
    tracing::debug!(?config, "Spiral parameters");

    println!("{}", render_table(&config));

    tracing::info!("Generated {} spiral points", config.count);
}

fn render_table(config: &SpiralConfig) -> String {
    let points = spiral_points(config.count);
    format_points(&points, config.style, config.precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shader_tables_shared::LiteralStyle;

    #[test]
    fn default_table_has_one_line_per_point() {
        let table = render_table(&SpiralConfig::default());
        assert_eq!(table.lines().count(), 64);
        assert!(table.starts_with("float2(1.0, 0.0),\n"));
        assert!(!table.ends_with(",\n"));
    }

    #[test]
    fn table_honors_style_and_precision() {
        let config = SpiralConfig {
            count: 2,
            style: LiteralStyle::Wgsl,
            precision: Some(4),
        };
        let table = render_table(&config);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "vec2f(1.0000, 0.0000),");
        // Second sample sits one golden angle (~137.5 degrees) around the circle
        assert_eq!(lines[1], "vec2f(-0.7374, 0.6755)");
    }

    #[test]
    fn zero_count_renders_nothing() {
        let config = SpiralConfig {
            count: 0,
            ..Default::default()
        };
        assert_eq!(render_table(&config), "");
    }
}
