use image::RgbImage;

use super::cell::{Pixel, PixelMatrix, RgbColor};
use crate::error::ConvertError;
use crate::shared::constants::{CHANNEL_SCALE, LUMA_WEIGHT_SUM};

/// ITU-R BT.709 luminance in fixed point, scaled by [`LUMA_WEIGHT_SUM`].
///
/// Pure white is exactly `255 * LUMA_WEIGHT_SUM`.
#[inline]
pub fn luminance(color: RgbColor) -> u32 {
    2126 * color.0 as u32 + 7152 * color.1 as u32 + 722 * color.2 as u32
}

/// Ramp slot for a fixed-point luminance value.
///
/// `floor(L / 256 * len)`, clamped. Pure white always takes the last slot,
/// even on ramps longer than the channel range.
#[inline]
pub fn ramp_index(luminance: u32, ramp_len: usize) -> usize {
    let last = ramp_len.saturating_sub(1);
    if luminance >= 255 * LUMA_WEIGHT_SUM {
        return last;
    }
    let scale = CHANNEL_SCALE as u64 * LUMA_WEIGHT_SUM as u64;
    let idx = luminance as u64 * ramp_len as u64 / scale;
    (idx as usize).min(last)
}

/// Turns a resized image into a [`PixelMatrix`] using one ramp.
pub struct FrameProcessor<'a> {
    ramp: &'a [char],
}

impl<'a> FrameProcessor<'a> {
    pub fn new(ramp: &'a [char]) -> Result<Self, ConvertError> {
        if ramp.is_empty() {
            return Err(ConvertError::InvalidArgument(
                "character ramp must contain at least one character".to_string(),
            ));
        }
        Ok(Self { ramp })
    }

    #[inline]
    pub fn map_pixel(&self, color: RgbColor) -> Pixel {
        Pixel {
            char: self.ramp[ramp_index(luminance(color), self.ramp.len())],
            color,
        }
    }

    /// Walks the image top-to-bottom, left-to-right.
    pub fn process_frame(&self, image: &RgbImage) -> PixelMatrix {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return PixelMatrix::default();
        }

        let rows = (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| self.map_pixel(RgbColor::from(*image.get_pixel(x, y))))
                    .collect()
            })
            .collect();

        PixelMatrix::from_rows(rows)
    }
}

/// Build the pixel matrix for `image` with `ramp`.
pub fn build(image: &RgbImage, ramp: &[char]) -> Result<PixelMatrix, ConvertError> {
    Ok(FrameProcessor::new(ramp)?.process_frame(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ramp::{RAMP_BINARY, RAMP_DETAILED, RAMP_MEDIUM};
    use image::Rgb;

    fn gradient(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            let v = ((x * 31 + y * 17) % 256) as u8;
            Rgb([v, v.wrapping_mul(3), 255 - v])
        })
    }

    #[test]
    fn test_black_and_white_two_glyphs() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));

        let m = build(&img, RAMP_BINARY).unwrap();
        assert_eq!(m.row_count(), 1);
        assert_eq!(m.row_text(0).as_deref(), Some("@ "));
        assert_eq!(m.get(0, 0).unwrap().color, RgbColor::BLACK);
        assert_eq!(m.get(1, 0).unwrap().color, RgbColor::WHITE);
    }

    #[test]
    fn test_extremes_hit_ramp_ends() {
        for ramp in [RAMP_DETAILED, RAMP_MEDIUM, RAMP_BINARY] {
            let fp = FrameProcessor::new(ramp).unwrap();
            assert_eq!(fp.map_pixel(RgbColor::BLACK).char, ramp[0]);
            assert_eq!(fp.map_pixel(RgbColor::WHITE).char, ramp[ramp.len() - 1]);
        }
    }

    #[test]
    fn test_index_always_in_range() {
        for len in [1, 2, 8, 68, 255, 256, 257, 1000] {
            for l in [0, 5_000, 1_279_000, 2_549_999, 2_550_000, 2_559_999, 3_000_000] {
                assert!(ramp_index(l, len) < len);
            }
        }
    }

    #[test]
    fn test_white_takes_last_glyph_on_long_ramps() {
        for len in [255usize, 256, 257, 300] {
            let ramp: Vec<char> = (0..len as u32)
                .filter_map(|i| char::from_u32(0x100 + i))
                .collect();
            let fp = FrameProcessor::new(&ramp).unwrap();
            assert_eq!(fp.map_pixel(RgbColor::WHITE).char, ramp[len - 1]);
            assert_eq!(fp.map_pixel(RgbColor::BLACK).char, ramp[0]);
        }
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(RgbColor::BLACK), 0);
        assert_eq!(luminance(RgbColor::WHITE), 255 * LUMA_WEIGHT_SUM);
        // green dominates perceived brightness
        assert!(luminance(RgbColor(0, 255, 0)) > luminance(RgbColor(255, 0, 0)));
        assert!(luminance(RgbColor(255, 0, 0)) > luminance(RgbColor(0, 0, 255)));
    }

    #[test]
    fn test_mid_grey_on_medium_ramp() {
        // 130 / 256 * 8 = 4.06
        let fp = FrameProcessor::new(RAMP_MEDIUM).unwrap();
        assert_eq!(fp.map_pixel(RgbColor(130, 130, 130)).char, '*');
    }

    #[test]
    fn test_dimensions_match_image() {
        let img = gradient(13, 7);
        let m = build(&img, RAMP_DETAILED).unwrap();
        assert_eq!(m.row_count(), 7);
        assert!(m.rows().iter().all(|row| row.len() == 13));
    }

    #[test]
    fn test_build_is_deterministic() {
        let img = gradient(20, 9);
        let a = build(&img, RAMP_DETAILED).unwrap();
        let b = build(&img, RAMP_DETAILED).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_ramp_single_glyph() {
        let img = gradient(4, 4);
        let m = build(&img, &['x']).unwrap();
        assert!(m.rows().iter().flatten().all(|p| p.char == 'x'));
    }

    #[test]
    fn test_empty_ramp_rejected() {
        let img = gradient(2, 2);
        assert!(matches!(
            build(&img, &[]),
            Err(ConvertError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_sized_image_builds_empty_matrix() {
        assert!(build(&RgbImage::new(0, 0), RAMP_BINARY).unwrap().is_empty());
        assert!(build(&RgbImage::new(0, 5), RAMP_BINARY).unwrap().is_empty());
        assert!(build(&RgbImage::new(5, 0), RAMP_BINARY).unwrap().is_empty());
    }
}
