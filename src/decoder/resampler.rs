use fast_image_resize as fr;
use fr::images::Image;
use image::RgbImage;

use crate::error::ConvertError;
use crate::shared::constants::MAX_OUTPUT_PIXELS;

/// Resize `image` to exactly `width` x `height` with a Lanczos3 convolution.
///
/// A zero target dimension yields an empty 0x0 image instead of an error.
pub fn resize(image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, ConvertError> {
    if width == 0 || height == 0 {
        return Ok(RgbImage::new(0, 0));
    }

    let cells = (width as u64).checked_mul(height as u64);
    if cells.map_or(true, |n| n > MAX_OUTPUT_PIXELS) {
        return Err(ConvertError::InvalidArgument(format!(
            "output grid {}x{} exceeds {} cells",
            width, height, MAX_OUTPUT_PIXELS
        )));
    }

    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ConvertError::InvalidArgument(format!(
            "cannot resize an empty {}x{} image to {}x{}",
            src_w, src_h, width, height
        )));
    }

    if (src_w, src_h) == (width, height) {
        return Ok(image.clone());
    }

    let src_image = Image::from_vec_u8(src_w, src_h, image.as_raw().clone(), fr::PixelType::U8x3)
        .map_err(|e| ConvertError::InvalidArgument(format!("source buffer rejected: {}", e)))?;

    let mut dst_image = Image::new(width, height, fr::PixelType::U8x3);

    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ConvertError::InvalidArgument(format!("resize failed: {}", e)))?;

    RgbImage::from_raw(width, height, dst_image.buffer().to_vec()).ok_or_else(|| {
        ConvertError::InvalidArgument(format!(
            "resized buffer does not hold {}x{} RGB pixels",
            width, height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checker(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let src = checker(64, 48);
        for (w, h) in [(1, 1), (10, 5), (80, 24), (128, 96), (3, 200)] {
            let out = resize(&src, w, h).unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn test_zero_target_is_empty() {
        let src = checker(16, 16);
        assert_eq!(resize(&src, 0, 10).unwrap().dimensions(), (0, 0));
        assert_eq!(resize(&src, 10, 0).unwrap().dimensions(), (0, 0));
        assert_eq!(resize(&src, 0, 0).unwrap().dimensions(), (0, 0));
    }

    #[test]
    fn test_same_size_is_identity() {
        let mut src = RgbImage::new(2, 1);
        src.put_pixel(1, 0, Rgb([255, 255, 255]));
        assert_eq!(resize(&src, 2, 1).unwrap(), src);
    }

    #[test]
    fn test_uniform_colour_is_preserved() {
        let src = RgbImage::from_pixel(40, 30, Rgb([200, 100, 50]));
        let out = resize(&src, 7, 3).unwrap();
        for px in out.pixels() {
            for (got, want) in px.0.iter().zip([200u8, 100, 50]) {
                assert!((*got as i32 - want as i32).abs() <= 1, "{:?}", px);
            }
        }
    }

    #[test]
    fn test_oversized_target_rejected() {
        let src = checker(8, 8);
        for (w, h) in [(4_000_000_000, 4_000_000_000), (u32::MAX, 2), (1 << 14, 1 << 13)] {
            assert!(matches!(
                resize(&src, w, h),
                Err(ConvertError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_empty_source_rejected() {
        let src = RgbImage::new(0, 0);
        assert!(matches!(
            resize(&src, 4, 4),
            Err(ConvertError::InvalidArgument(_))
        ));
    }
}
