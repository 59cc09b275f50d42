pub mod converter;
pub mod dimensions;

pub use converter::{convert_batch, convert_file, convert_image, ConvertOptions};
pub use dimensions::TargetSize;
