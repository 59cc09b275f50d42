//! Character ramps, ordered from the densest-looking glyph to the lightest.
//!
//! The builder indexes into a ramp by luminance, so index 0 is what a black
//! pixel becomes and the last entry is what a white pixel becomes.

use crate::error::ConvertError;

/// Full detail ramp.
#[rustfmt::skip]
pub static RAMP_DETAILED: &[char] = &[
    '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h',
    'k', 'b', 'd', 'p', 'q', 'w', 'm', 'Z', 'O', '0', 'Q', 'L',
    'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x', 'r',
    'j', 'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}', '[',
    ']', '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l', 'I',
    ';', ':', ',', '"', '^', '\'', '.', ' ',
];

/// Medium detail ramp.
pub static RAMP_MEDIUM: &[char] = &['@', '&', 'W', '0', '*', '+', '.', ' '];

/// Two-level ramp: ink or paper.
pub static RAMP_BINARY: &[char] = &['@', ' '];

/// Built-in ramp selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RampKind {
    #[default]
    Detailed,
    Medium,
    Binary,
}

impl RampKind {
    pub fn chars(&self) -> &'static [char] {
        match self {
            RampKind::Detailed => RAMP_DETAILED,
            RampKind::Medium => RAMP_MEDIUM,
            RampKind::Binary => RAMP_BINARY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RampKind::Detailed => "detailed",
            RampKind::Medium => "medium",
            RampKind::Binary => "binary",
        }
    }
}

/// Parse a caller-supplied ramp, one glyph per Unicode scalar value.
pub fn parse_ramp(text: &str) -> Result<Vec<char>, ConvertError> {
    let ramp: Vec<char> = text.chars().collect();
    if ramp.is_empty() {
        return Err(ConvertError::InvalidArgument(
            "character ramp must contain at least one character".to_string(),
        ));
    }
    Ok(ramp)
}

/// Reverse a ramp for terminals with a light background.
pub fn invert(ramp: &[char]) -> Vec<char> {
    ramp.iter().rev().copied().collect()
}
