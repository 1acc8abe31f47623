pub mod braille;
pub mod frame;
pub mod histogram;

pub use braille::BarPlot;
pub use frame::Renderer;
pub use histogram::Histogram;
