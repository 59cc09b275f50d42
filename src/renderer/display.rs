use crossterm::{style::Print, QueueableCommand};
use std::io::{BufWriter, Stdout, Write};

use super::cell::{PixelMatrix, RgbColor};

/// Foreground reset appended after every coloured glyph.
pub const RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Glyphs only
    Ascii,
    /// 24-bit TrueColor foreground per glyph
    #[default]
    Rgb,
    /// Nearest xterm 256-colour palette entry per glyph
    Ansi256,
}

// Zero-allocation integer writing
#[inline(always)]
fn write_u8_fast(buffer: &mut String, mut n: u8) {
    if n >= 100 {
        buffer.push((b'0' + n / 100) as char);
        n %= 100;
        buffer.push((b'0' + n / 10) as char);
        n %= 10;
    } else if n >= 10 {
        buffer.push((b'0' + n / 10) as char);
        n %= 10;
    }
    buffer.push((b'0' + n) as char);
}

/// Append `ESC[38;2;R;G;Bm` + glyph + `ESC[0m` to `buffer`.
pub fn decorate_with_color(buffer: &mut String, ch: char, color: RgbColor) {
    buffer.push_str("\x1b[38;2;");
    write_u8_fast(buffer, color.0);
    buffer.push(';');
    write_u8_fast(buffer, color.1);
    buffer.push(';');
    write_u8_fast(buffer, color.2);
    buffer.push('m');
    buffer.push(ch);
    buffer.push_str(RESET);
}

/// Append `ESC[38;5;Nm` + glyph + `ESC[0m` to `buffer`.
pub fn decorate_with_palette(buffer: &mut String, ch: char, color: RgbColor) {
    buffer.push_str("\x1b[38;5;");
    write_u8_fast(buffer, rgb_to_ansi256(color));
    buffer.push('m');
    buffer.push(ch);
    buffer.push_str(RESET);
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

#[inline]
fn cube_level(v: u8) -> usize {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => ((v as usize) - 35) / 40,
    }
}

#[inline]
fn distance_sq(a: RgbColor, b: RgbColor) -> u32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Nearest xterm 256-colour index (16..=255).
///
/// Candidates are the 6x6x6 cube and the 24-step grey ramp; on a tie the
/// cube wins.
pub fn rgb_to_ansi256(color: RgbColor) -> u8 {
    let (qr, qg, qb) = (cube_level(color.0), cube_level(color.1), cube_level(color.2));
    let cube = RgbColor(CUBE_LEVELS[qr], CUBE_LEVELS[qg], CUBE_LEVELS[qb]);
    let cube_idx = (16 + 36 * qr + 6 * qg + qb) as u8;
    if cube == color {
        return cube_idx;
    }

    let avg = (color.0 as u32 + color.1 as u32 + color.2 as u32) / 3;
    let grey_idx = if avg > 238 { 23 } else { avg.saturating_sub(3) / 10 };
    let g = (8 + 10 * grey_idx) as u8;
    let grey = RgbColor(g, g, g);

    if distance_sq(grey, color) < distance_sq(cube, color) {
        232 + grey_idx as u8
    } else {
        cube_idx
    }
}

fn render_with<F>(matrix: &PixelMatrix, per_glyph: usize, mut push: F) -> String
where
    F: FnMut(&mut String, char, RgbColor),
{
    let cells = matrix.row_count() * matrix.column_count();
    let mut out = String::with_capacity(cells * per_glyph + matrix.row_count());

    for (y, row) in matrix.rows().iter().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for pixel in row {
            push(&mut out, pixel.char, pixel.color);
        }
    }
    out
}

/// Glyphs only, rows joined by `\n`, no trailing newline.
pub fn render_plain(matrix: &PixelMatrix) -> String {
    render_with(matrix, 1, |out, ch, _| out.push(ch))
}

/// Every glyph wrapped in a TrueColor foreground sequence and a reset.
pub fn render_colorized(matrix: &PixelMatrix) -> String {
    // ESC[38;2;255;255;255m + glyph + ESC[0m
    render_with(matrix, 24, decorate_with_color)
}

/// Every glyph wrapped in a 256-colour foreground sequence and a reset.
pub fn render_ansi256(matrix: &PixelMatrix) -> String {
    render_with(matrix, 16, decorate_with_palette)
}

pub fn render(matrix: &PixelMatrix, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Ascii => render_plain(matrix),
        DisplayMode::Rgb => render_colorized(matrix),
        DisplayMode::Ansi256 => render_ansi256(matrix),
    }
}

/// Buffered stdout sink for finished conversions.
pub struct DisplayManager {
    stdout: BufWriter<Stdout>,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            stdout: BufWriter::with_capacity(1024 * 1024, std::io::stdout()),
        }
    }

    /// Print one document, optionally preceded by a `==> header <==` line.
    pub fn write_document(&mut self, header: Option<&str>, body: &str) -> std::io::Result<()> {
        if let Some(header) = header {
            self.stdout.queue(Print(format!("==> {} <==\n", header)))?;
        }
        self.stdout.queue(Print(body))?;
        self.stdout.queue(Print("\n"))?;
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisplayManager {
    fn drop(&mut self) {
        let _ = self.stdout.flush();
    }
}
