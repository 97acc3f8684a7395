//! Print normalized Gaussian kernel weights as decimal literals
//!
//! Emits the 11 taps of a sigma 2.0, radius 5 kernel in ascending offset
//! order, one weight per line.

use anyhow::{Context, Result};
use shader_tables_shared::{GaussianConfig, format_weights, gaussian_weights};

fn main() -> Result<()> {
    // Logs go to stderr so stdout holds only the table
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GaussianConfig::default();
    tracing::debug!(?config, "Gaussian parameters");

    let table = render_table(&config)?;
    println!("{table}");

    tracing::info!(
        "Generated {} Gaussian weights (sigma {}, radius {})",
        config.tap_count(),
        config.sigma,
        config.radius
    );

    Ok(())
}

fn render_table(config: &GaussianConfig) -> Result<String> {
    let weights = gaussian_weights(config.sigma, config.radius)
        .context("Invalid Gaussian kernel parameters")?;

    Ok(format_weights(&weights, config.precision))
}
