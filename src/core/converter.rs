use image::RgbImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::dimensions::TargetSize;
use crate::decoder;
use crate::error::ConvertError;
use crate::renderer::display::{self, DisplayMode};
use crate::renderer::processor::FrameProcessor;
use crate::renderer::ramp::RampKind;
use crate::shared::constants;
use crate::utils::logger;
use crate::utils::time_utils::Timer;

/// Everything one conversion needs besides the image itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub target: TargetSize,
    pub char_aspect: f64,
    pub ramp: Vec<char>,
    pub mode: DisplayMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            target: TargetSize::Fit {
                columns: constants::FALLBACK_COLUMNS as u32,
                rows: constants::FALLBACK_ROWS as u32,
            },
            char_aspect: constants::DEFAULT_CHAR_ASPECT_RATIO,
            ramp: RampKind::default().chars().to_vec(),
            mode: DisplayMode::default(),
        }
    }
}

/// Resize, map and render an already decoded image.
pub fn convert_image(image: &RgbImage, options: &ConvertOptions) -> Result<String, ConvertError> {
    let processor = FrameProcessor::new(&options.ramp)?;
    let mut timer = Timer::new();

    let (src_w, src_h) = image.dimensions();
    let (width, height) = options.target.resolve(src_w, src_h, options.char_aspect);
    let resized = decoder::resize(image, width, height)?;
    let resize_us = timer.lap_us();

    let matrix = processor.process_frame(&resized);
    let build_us = timer.lap_us();

    let text = display::render(&matrix, options.mode);
    let render_us = timer.lap_us();

    logger::debug(&format!(
        "CONVERT: {}x{} -> {}x{} ramp={} mode={:?} | Resize={}us | Build={}us | Render={}us",
        src_w,
        src_h,
        matrix.column_count(),
        matrix.row_count(),
        options.ramp.len(),
        options.mode,
        resize_us,
        build_us,
        render_us
    ));

    Ok(text)
}

/// Full pipeline: open, decode, resize, map, render.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<String, ConvertError> {
    let path = path.as_ref();
    // reject a bad ramp before touching the file
    FrameProcessor::new(&options.ramp)?;

    let timer = Timer::new();
    let image = decoder::open(path).map_err(|e| {
        logger::error(&format!("{} [{}]", e, e.kind()));
        e
    })?;
    let decode_us = timer.elapsed().as_micros();

    let text = convert_image(&image, options)?;
    logger::info(&format!(
        "converted {} (decode {}us, total {}us)",
        path.display(),
        decode_us,
        timer.elapsed().as_micros()
    ));
    Ok(text)
}

/// Convert independent files in parallel; results keep the input order.
pub fn convert_batch(
    paths: &[PathBuf],
    options: &ConvertOptions,
) -> Vec<(PathBuf, Result<String, ConvertError>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), convert_file(path, options)))
        .collect()
}
