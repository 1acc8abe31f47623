//! Geometry helpers: sample ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION as HR, LABEL_GUTTER, MIN_GRAPH_HEIGHT,
    MIN_GRAPH_WIDTH,
};

/// Inclusive value bounds of a sample set, without padding.
///
/// * Non-finite samples are ignored.
/// * If nothing finite remains the fallback is `(0.0, 1.0)`, the natural
///   range of untransformed samples.
/// * If all finite samples are identical we expand by ±0.5 so the
///   histogram still has non-zero width.
#[must_use]
pub fn value_bounds(samples: &[f64]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for &v in samples {
        if !v.is_finite() {
            continue;
        }
        low = low.min(v);
        high = high.max(v);
    }

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }

    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }

    (low, high)
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions + bin count to the graph char grid.
/// Leaves space for borders + labels; two bins share one braille cell.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), bins: usize, label_width: usize) -> (usize, usize) {
    let x_chars = std::cmp::min(
        bins.div_ceil(HR),
        (w.0 as usize).saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width),
    )
    .max(MIN_GRAPH_WIDTH);
    let y_chars = std::cmp::max(MIN_GRAPH_HEIGHT, usize::from(h.0).saturating_sub(5));
    (x_chars, y_chars)
}

/// How wide will the y-axis count labels be?  The top label is the max
/// count, the bottom one is `0`.
#[inline]
#[must_use]
pub fn count_label_width(max_count: usize) -> usize {
    let mut n = max_count;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_a_normal_series() {
        assert_eq!(value_bounds(&[0.25, 0.75, 0.5]), (0.25, 0.75));
    }

    #[test]
    fn bounds_skip_non_finite_samples() {
        let (lo, hi) = value_bounds(&[f64::NAN, 1.0, f64::INFINITY, 3.0]);
        assert_eq!((lo, hi), (1.0, 3.0));
    }

    #[test]
    fn bounds_fall_back_to_unit_interval() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
        assert_eq!(value_bounds(&[f64::NAN]), (0.0, 1.0));
    }

    #[test]
    fn flat_series_gets_breathing_room() {
        assert_eq!(value_bounds(&[2.0, 2.0]), (1.5, 2.5));
    }

    #[test]
    fn label_width_counts_digits() {
        assert_eq!(count_label_width(0), 1);
        assert_eq!(count_label_width(9), 1);
        assert_eq!(count_label_width(10), 2);
        assert_eq!(count_label_width(12_345), 5);
    }

    #[test]
    fn graph_dims_cap_at_bin_width() {
        // 50 bins need 25 cells; an 80-wide terminal has room to spare
        let (x, y) = graph_dims((Width(80), Height(30)), 50, 3);
        assert_eq!(x, 25);
        assert_eq!(y, 25);
    }

    #[test]
    fn graph_dims_respect_minimums() {
        let (x, y) = graph_dims((Width(5), Height(5)), 50, 3);
        assert_eq!(x, MIN_GRAPH_WIDTH);
        assert_eq!(y, MIN_GRAPH_HEIGHT);
    }
}
