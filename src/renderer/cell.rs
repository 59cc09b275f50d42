/// Represents a 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor(255, 255, 255);
}

impl From<image::Rgb<u8>> for RgbColor {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        RgbColor(r, g, b)
    }
}

/// One output cell: the glyph picked by luminance and the colour it came from
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pixel {
    pub char: char,
    pub color: RgbColor,
}

/// Rectangular grid of [`Pixel`]s, row-major, top row first.
///
/// Only the processor creates these, which keeps every row the same length.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PixelMatrix {
    rows: Vec<Vec<Pixel>>,
}

impl PixelMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<Pixel>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// The glyphs of one row as a string.
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.rows
            .get(y)
            .map(|row| row.iter().map(|p| p.char).collect())
    }
}
