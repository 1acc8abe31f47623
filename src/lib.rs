//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiColor, ColorError, colorize},
    config::{Config, ConfigBuilder},
    constants::{COARSE_BINS, DEFAULT_BINS},
    error::{ConfigError, PlotError},
    sampler::{LcgParams, SampleStream, Transform},
    transform::{inverse_exponential, inverse_logistic},
};

pub use crate::render::{BarPlot, Histogram, Renderer};

/// Convenience function: histogram an in-memory sample set with automatic
/// value-range scaling and render it once.
pub fn plot_histogram(
    samples: &[f64],
    title: &str,
    color: &str,
    bins: usize,
) -> Result<(), PlotError> {
    use crate::core::bounds::{count_label_width, graph_dims, terminal_geometry, value_bounds};
    use crate::core::constants::BRAILLE_HORIZONTAL_RESOLUTION;

    if samples.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if bins == 0 {
        return Err(ConfigError::ZeroBins.into());
    }

    let (lo, hi) = value_bounds(samples);
    let term = terminal_geometry();
    let (x_chars, y_chars) = graph_dims(term, bins, count_label_width(samples.len()));
    let bins = bins.min(x_chars * BRAILLE_HORIZONTAL_RESOLUTION);

    let hist = Histogram::from_samples(samples, bins, (lo, hi));
    let cfg = Config::builder(x_chars, y_chars)
        .title(title)
        .color(AnsiColor::parse(color)?)
        .max_count(hist.max_count())
        .x_range(lo, hi)
        .build()?;

    let plot = BarPlot::from_histogram(&hist, cfg.y_chars);
    Renderer::full().render(&cfg, &plot)
}
