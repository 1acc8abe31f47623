//! Aggregates the sampling and configuration layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod sampler;
pub mod transform;

// re-export frequently-used items for convenience
pub use color::{AnsiColor, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, COARSE_BINS, DEFAULT_BINS, LABEL_GUTTER,
    MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
};
pub use error::{ConfigError, PlotError};
pub use sampler::{LcgParams, SampleStream, Transform};
pub use transform::{inverse_exponential, inverse_logistic};
