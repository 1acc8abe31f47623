//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::color::ColorError;

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidRange { low: f64, high: f64 },
    ZeroBins,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::InvalidRange { low, high } => {
                write!(f, "x range low {low} must be finite and < high {high}")
            }
            ConfigError::ZeroBins => f.write_str("histogram needs at least one bin"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Io(io::Error),
    Color(ColorError),
    Config(ConfigError),
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    EmptyData,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(e) => write!(f, "{e}"),
            PlotError::Color(e) => write!(f, "{e}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::GraphTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}"
            ),
            PlotError::EmptyData => f.write_str("sample set is empty"),
        }
    }
}
impl Error for PlotError {}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ColorError> for PlotError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
