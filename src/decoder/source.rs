use image::{ImageReader, Rgb, RgbImage, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::ConvertError;

/// Open and decode the raster image at `path` into 8-bit RGB.
///
/// The file handle lives only for the duration of this call.
pub fn open(path: impl AsRef<Path>) -> Result<RgbImage, ConvertError> {
    let path = path.as_ref();
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(io_err)?;

    let decoded = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    crate::utils::logger::debug(&format!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    ));

    if !decoded.color().has_alpha() {
        return Ok(decoded.to_rgb8());
    }
    Ok(premultiply(&decoded.to_rgba8()))
}

/// Flatten RGBA onto black: each channel becomes `c * a / 255`.
fn premultiply(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let scale = |c: u8| (c as u16 * a as u16 / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}
