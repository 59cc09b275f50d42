pub mod cell;
pub mod display;
pub mod processor;
pub mod ramp;

pub use cell::{Pixel, PixelMatrix, RgbColor};
pub use display::{DisplayManager, DisplayMode};
pub use processor::FrameProcessor;
pub use ramp::RampKind;
