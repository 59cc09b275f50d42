//! Output grid sizing that keeps the picture's proportions on a terminal.

/// How the caller asked for the output grid to be sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSize {
    /// Use exactly this many columns and rows, zero included.
    Exact { width: u32, height: u32 },
    /// Fixed column count, rows follow the image aspect ratio.
    Width(u32),
    /// Fixed row count, columns follow the image aspect ratio.
    Height(u32),
    /// Largest aspect-correct grid that fits inside the box.
    Fit { columns: u32, rows: u32 },
}

impl TargetSize {
    /// Pick a target from optional CLI dimensions, falling back to `bounds`.
    pub fn from_args(width: Option<u32>, height: Option<u32>, bounds: (u32, u32)) -> Self {
        match (width, height) {
            (Some(width), Some(height)) => TargetSize::Exact { width, height },
            (Some(width), None) => TargetSize::Width(width),
            (None, Some(height)) => TargetSize::Height(height),
            (None, None) => TargetSize::Fit {
                columns: bounds.0,
                rows: bounds.1,
            },
        }
    }

    /// Concrete `(columns, rows)` for a `src_w` x `src_h` image.
    pub fn resolve(&self, src_w: u32, src_h: u32, char_aspect: f64) -> (u32, u32) {
        match *self {
            TargetSize::Exact { width, height } => (width, height),
            TargetSize::Width(width) => {
                (width, height_for_width(src_w, src_h, width, char_aspect))
            }
            TargetSize::Height(height) => {
                (width_for_height(src_w, src_h, height, char_aspect), height)
            }
            TargetSize::Fit { columns, rows } => fit(src_w, src_h, columns, rows, char_aspect),
        }
    }
}

#[inline]
fn cell_aspect(src_w: u32, src_h: u32, char_aspect: f64) -> f64 {
    // columns / rows that displays as src_w / src_h
    (src_w as f64 / src_h as f64) * char_aspect
}

/// Rows needed to show the image `width` columns wide.
pub fn height_for_width(src_w: u32, src_h: u32, width: u32, char_aspect: f64) -> u32 {
    if src_w == 0 || src_h == 0 || width == 0 || char_aspect <= 0.0 {
        return 0;
    }
    let rows = (width as f64 / cell_aspect(src_w, src_h, char_aspect)).round();
    (rows.min(u32::MAX as f64) as u32).max(1)
}

/// Columns needed to show the image `height` rows tall.
pub fn width_for_height(src_w: u32, src_h: u32, height: u32, char_aspect: f64) -> u32 {
    if src_w == 0 || src_h == 0 || height == 0 || char_aspect <= 0.0 {
        return 0;
    }
    let cols = (height as f64 * cell_aspect(src_w, src_h, char_aspect)).round();
    (cols.min(u32::MAX as f64) as u32).max(1)
}

/// Largest aspect-correct grid inside `max_cols` x `max_rows`.
///
/// Tries the full width first and falls back to the full height.
pub fn fit(src_w: u32, src_h: u32, max_cols: u32, max_rows: u32, char_aspect: f64) -> (u32, u32) {
    if src_w == 0 || src_h == 0 || max_cols == 0 || max_rows == 0 || char_aspect <= 0.0 {
        return (0, 0);
    }

    let rows = height_for_width(src_w, src_h, max_cols, char_aspect);
    if rows <= max_rows {
        return (max_cols, rows);
    }

    let cols = width_for_height(src_w, src_h, max_rows, char_aspect).min(max_cols);
    (cols.max(1), max_rows)
}
