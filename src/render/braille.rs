//! Histogram bars to UTF-8 braille cells, written straight into the frame
//! buffer with zero intermediate buffers.
//!
//! Each half-column carries one bar anchored at the baseline, so the
//! intersection of a bar with a 4-pixel braille cell is always one of
//! five canonical fills: empty, bottom-1, bottom-2, bottom-3 or full.
//! We pre-compute the dot mask for each fill on both the left and right
//! half-columns and index into those tables at run-time.  Every braille
//! scalar U+2800..U+28FF encodes to the fixed byte pattern
//! `E2  A0+((mask>>6)&3)  80|(mask&0x3F)`, so the three UTF-8 bytes are
//! written directly without `char::encode_utf8`.

use crate::core::constants::BRAILLE_VERTICAL_RESOLUTION;
use crate::render::histogram::Histogram;

/// Bar heights in pixels, filled from the baseline up, one per half-column.
pub struct BarPlot {
    pub heights: Vec<usize>,
}

impl BarPlot {
    /// Pixel heights for a histogram rendered `y_chars` cells tall.
    #[must_use]
    pub fn from_histogram(hist: &Histogram, y_chars: usize) -> Self {
        Self {
            heights: hist.to_heights(y_chars),
        }
    }
}

/// Bottom-fill masks for the left half-column: dots 7, 3, 2, 1 switch on
/// from the baseline up (⡀ ⡄ ⡆ ⡇).
const LEFT_FILL: [u8; 5] = [0x00, 0x40, 0x44, 0x46, 0x47];
/// Bottom-fill masks for the right half-column: dots 8, 6, 5, 4 (⢀ ⢠ ⢰ ⢸).
const RIGHT_FILL: [u8; 5] = [0x00, 0x80, 0xA0, 0xB0, 0xB8];

/// Encode `plot` straight into `buf`, which is the full frame buffer.
///
/// * `offset` -- byte index of the first braille cell (row 0, col 0)
/// * `row_stride` -- bytes between successive graph rows in `buf`
pub fn encode_bars_into_frame(
    buf: &mut [u8],
    offset: usize,
    row_stride: usize,
    plot: &BarPlot,
    x_chars: usize,
    y_chars: usize,
) {
    debug_assert!(
        buf.len() >= offset + row_stride * y_chars,
        "frame buffer too small"
    );

    let vert_px = y_chars * BRAILLE_VERTICAL_RESOLUTION;

    for row in 0..y_chars {
        // pixels below the bottom edge of this cell row
        let below = vert_px - (row + 1) * BRAILLE_VERTICAL_RESOLUTION;
        let row_base = offset + row * row_stride;

        for col in 0..x_chars {
            let fill = |half: usize| -> usize {
                plot.heights.get(half).map_or(0, |&h| {
                    h.saturating_sub(below).min(BRAILLE_VERTICAL_RESOLUTION)
                })
            };

            // Combine masks and write three UTF-8 bytes directly.
            // https://en.wikipedia.org/wiki/Braille_Patterns
            let mask = LEFT_FILL[fill(col * 2)] | RIGHT_FILL[fill(col * 2 + 1)];
            let cell = row_base + col * 3;
            buf[cell] = 0xE2;
            buf[cell + 1] = 0xA0 | ((mask >> 6) & 0x03);
            buf[cell + 2] = 0x80 | (mask & 0x3F);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_string(plot: &BarPlot, x_chars: usize, y_chars: usize) -> String {
        let mut buf = vec![0u8; x_chars * 3 * y_chars];
        encode_bars_into_frame(&mut buf, 0, x_chars * 3, plot, x_chars, y_chars);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_cell_is_solid_braille() {
        let plot = BarPlot {
            heights: vec![4, 4],
        };
        assert_eq!(encode_to_string(&plot, 1, 1), "⣿");
    }

    #[test]
    fn empty_cell_is_blank_braille() {
        let plot = BarPlot { heights: vec![] };
        assert_eq!(encode_to_string(&plot, 1, 1), "\u{2800}");
    }

    #[test]
    fn partial_fills_anchor_at_the_baseline() {
        let plot = BarPlot {
            heights: vec![2, 0],
        };
        assert_eq!(encode_to_string(&plot, 1, 1), "⡄");

        let plot = BarPlot {
            heights: vec![0, 3],
        };
        assert_eq!(encode_to_string(&plot, 1, 1), "⢰");
    }

    #[test]
    fn tall_bar_spans_cell_rows() {
        // 2 rows = 8 px; a 6 px bar fills the bottom cell and half the top
        let plot = BarPlot {
            heights: vec![6, 6],
        };
        assert_eq!(encode_to_string(&plot, 1, 2), "⣤⣿");
    }
}
