//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted bars
pub const LABEL_GUTTER: usize = 1;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 10 characters wide
pub const MIN_GRAPH_WIDTH: usize = 10;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Default histogram resolution.
pub const DEFAULT_BINS: usize = 50;
/// Coarse histogram resolution, used by the `--coarse` flag.
pub const COARSE_BINS: usize = 20;

/// X-range labels are printed with two decimal places.
///
/// 0.3333 becomes 0.33
pub const X_LABEL_PRECISION: usize = 2;
