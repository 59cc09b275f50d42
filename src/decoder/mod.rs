pub mod resampler;
pub mod source;

pub use resampler::resize;
pub use source::open;
