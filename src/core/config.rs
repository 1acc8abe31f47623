//! Run-time configuration object + fluent builder.

use crate::core::{color::AnsiColor, error::ConfigError};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    /// Height of the tallest bar, printed as the top y-axis label.
    pub max_count: usize,
    pub x_chars: usize,
    pub y_chars: usize,
    pub color: AnsiColor,
    /// Value range covered by the histogram, labelled under the plot.
    pub x_range: (f64, f64),
}

impl Config {
    #[inline]
    pub fn builder(x_chars: usize, y_chars: usize) -> ConfigBuilder {
        ConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    max_count: Option<usize>,
    x_range: Option<(f64, f64)>,
    color: Option<AnsiColor>,
}

impl ConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            max_count: None,
            x_range: None,
            color: None,
        }
    }

    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    pub fn subtitle_opt(mut self, s: &Option<String>) -> Self {
        if let Some(t) = s {
            self.subtitle = Some(t.clone());
        }
        self
    }
    #[inline]
    pub fn max_count(mut self, n: usize) -> Self {
        self.max_count = Some(n);
        self
    }
    #[inline]
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }
    #[inline]
    pub fn color(mut self, c: AnsiColor) -> Self {
        self.color = Some(c);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let max_count = self
            .max_count
            .ok_or(ConfigError::MissingField("max_count"))?;
        let (low, high) = self.x_range.ok_or(ConfigError::MissingField("x_range"))?;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(Config {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            max_count,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            color: self.color.unwrap_or(AnsiColor::DEFAULT),
            x_range: (low, high),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_max_count_and_range() {
        let err = Config::builder(40, 10).x_range(0.0, 1.0).build();
        assert!(matches!(err, Err(ConfigError::MissingField("max_count"))));

        let err = Config::builder(40, 10).max_count(5).build();
        assert!(matches!(err, Err(ConfigError::MissingField("x_range"))));
    }

    #[test]
    fn build_rejects_bad_ranges() {
        for (lo, hi) in [(1.0, 1.0), (2.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            let err = Config::builder(40, 10).max_count(5).x_range(lo, hi).build();
            assert!(matches!(err, Err(ConfigError::InvalidRange { .. })));
        }
    }

    #[test]
    fn build_fills_defaults() {
        let cfg = Config::builder(40, 10)
            .max_count(7)
            .x_range(0.0, 1.0)
            .build()
            .unwrap();
        assert_eq!(cfg.title, "");
        assert_eq!(cfg.subtitle, None);
        assert_eq!(cfg.color, AnsiColor::DEFAULT);
    }
}
