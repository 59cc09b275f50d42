//! charphoto: turn raster images into glyph art for the terminal.
//!
//! The pipeline is decode → resize → map → render:
//!
//! ```no_run
//! use charphoto::core::{convert_file, ConvertOptions, TargetSize};
//! use charphoto::renderer::{DisplayMode, RampKind};
//!
//! let options = ConvertOptions {
//!     target: TargetSize::Width(100),
//!     ramp: RampKind::Medium.chars().to_vec(),
//!     mode: DisplayMode::Rgb,
//!     ..ConvertOptions::default()
//! };
//! let art = convert_file("photo.jpg", &options)?;
//! println!("{}", art);
//! # Ok::<(), charphoto::ConvertError>(())
//! ```

pub mod core;
pub mod decoder;
pub mod error;
pub mod renderer;
pub mod shared;
pub mod utils;

pub use error::ConvertError;
