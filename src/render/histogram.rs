//! Equal-width histogram binning of sample values.
//!
//! Counts first, pixels second: [`Histogram::from_samples`] buckets the
//! raw floats, [`Histogram::to_heights`] scales the counts to braille
//! pixel columns for the encoder.

use crate::core::constants::BRAILLE_VERTICAL_RESOLUTION;

pub struct Histogram {
    counts: Vec<usize>,
    lo: f64,
    hi: f64,
}

impl Histogram {
    /// Bucket `samples` into `bins` equal-width bins over `[lo, hi]`.
    ///
    /// Non-finite samples and samples outside the range are skipped; a
    /// sample of exactly `hi` lands in the last bin.
    #[must_use]
    pub fn from_samples(samples: &[f64], bins: usize, (lo, hi): (f64, f64)) -> Self {
        let mut hist = Self {
            counts: vec![0; bins],
            lo,
            hi,
        };
        let span = hi - lo;
        if bins == 0 || !(span > 0.0) {
            return hist;
        }
        for &v in samples {
            if !v.is_finite() || v < lo || v > hi {
                continue;
            }
            let mut idx = ((v - lo) / span * bins as f64) as usize;
            if idx >= bins {
                idx = bins - 1;
            }
            hist.counts[idx] += 1;
        }
        hist
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    #[inline]
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Scale counts to pixel heights for a plot `y_chars` cells tall.
    ///
    /// The tallest bar spans the full height; any nonzero count keeps at
    /// least one pixel so sparse bins stay visible.
    #[must_use]
    pub fn to_heights(&self, y_chars: usize) -> Vec<usize> {
        let vert_px = y_chars * BRAILLE_VERTICAL_RESOLUTION;
        let max = self.max_count();
        self.counts
            .iter()
            .map(|&c| {
                if c == 0 || max == 0 || vert_px == 0 {
                    0
                } else {
                    let scaled = (c as f64 / max as f64 * vert_px as f64).round() as usize;
                    scaled.clamp(1, vert_px)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_preserve_totals() {
        let samples = [0.05, 0.15, 0.15, 0.95];
        let hist = Histogram::from_samples(&samples, 10, (0.0, 1.0));
        assert_eq!(hist.counts().iter().sum::<usize>(), 4);
        assert_eq!(hist.counts()[0], 1);
        assert_eq!(hist.counts()[1], 2);
        assert_eq!(hist.counts()[9], 1);
    }

    #[test]
    fn upper_bound_lands_in_the_last_bin() {
        let hist = Histogram::from_samples(&[1.0], 10, (0.0, 1.0));
        assert_eq!(hist.counts()[9], 1);
    }

    #[test]
    fn out_of_range_and_non_finite_are_skipped() {
        let samples = [-0.1, 1.1, f64::NAN, f64::INFINITY, 0.5];
        let hist = Histogram::from_samples(&samples, 4, (0.0, 1.0));
        assert_eq!(hist.counts().iter().sum::<usize>(), 1);
        assert_eq!(hist.max_count(), 1);
    }

    #[test]
    fn degenerate_range_counts_nothing() {
        let hist = Histogram::from_samples(&[0.5, 0.5], 4, (0.5, 0.5));
        assert_eq!(hist.counts().iter().sum::<usize>(), 0);
    }

    #[test]
    fn zero_bins_is_an_empty_histogram() {
        let hist = Histogram::from_samples(&[0.5], 0, (0.0, 1.0));
        assert_eq!(hist.bins(), 0);
        assert_eq!(hist.max_count(), 0);
        assert!(hist.to_heights(10).is_empty());
    }

    #[test]
    fn heights_scale_to_full_plot() {
        let samples = [0.1, 0.1, 0.1, 0.1, 0.6];
        let hist = Histogram::from_samples(&samples, 2, (0.0, 1.0));
        let heights = hist.to_heights(10); // 40 px tall
        assert_eq!(heights[0], 40);
        assert_eq!(heights[1], 10);
    }

    #[test]
    fn sparse_bins_keep_one_pixel() {
        let mut samples = vec![0.9; 1000];
        samples.push(0.1);
        let hist = Histogram::from_samples(&samples, 2, (0.0, 1.0));
        let heights = hist.to_heights(10);
        assert_eq!(heights[0], 1, "a lone sample must stay visible");
        assert_eq!(heights[1], 40);
    }
}
