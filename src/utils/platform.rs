use serde::Serialize;
use std::env;

use crate::renderer::DisplayMode;
use crate::shared::constants;

/// What we could learn about the terminal we are printing to.
#[derive(Debug, Serialize)]
pub struct PlatformInfo {
    pub os_name: String,
    pub arch: String,
    pub terminal: String,
    pub colorterm: String,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub supports_truecolor: bool,
    pub preferred_mode: String,
    pub cpu_threads: usize,
}

impl PlatformInfo {
    pub fn detect() -> Self {
        let (width, height) = terminal_size_or_default();
        let supports_truecolor = detect_truecolor();

        Self {
            os_name: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            terminal: detect_terminal(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            terminal_width: width,
            terminal_height: height,
            supports_truecolor,
            preferred_mode: format!("{:?}", preferred_color_mode()).to_lowercase(),
            cpu_threads: rayon::current_num_threads(),
        }
    }
}

/// Terminal size in cells, or 80x24 when stdout is not a terminal.
pub fn terminal_size_or_default() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows),
        _ => (constants::FALLBACK_COLUMNS, constants::FALLBACK_ROWS),
    }
}

fn detect_terminal() -> String {
    if let Ok(term) = env::var("TERM_PROGRAM") {
        return term;
    }
    if let Ok(term) = env::var("TERM") {
        return term;
    }
    "Unknown".to_string()
}

fn colorterm_is_truecolor(value: &str) -> bool {
    value.contains("truecolor") || value.contains("24bit")
}

pub fn detect_truecolor() -> bool {
    env::var("COLORTERM")
        .map(|v| colorterm_is_truecolor(&v))
        .unwrap_or(false)
}

/// Colour mode `--mode auto` resolves to.
pub fn preferred_color_mode() -> DisplayMode {
    if detect_truecolor() {
        DisplayMode::Rgb
    } else {
        DisplayMode::Ansi256
    }
}
