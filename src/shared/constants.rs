pub const APP_NAME: &str = "charphoto";

pub const ERROR_LOG_FILE: &str = "charphoto-error.log";
pub const DEBUG_LOG_FILE: &str = "charphoto-debug.log";
pub const LOG_ENV_VAR: &str = "CHARPHOTO_LOG";

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "pnm", "tga", "qoi",
];

/// Upper bound (exclusive) of the 8-bit channel range used for ramp indexing.
pub const CHANNEL_SCALE: u32 = 256;

/// BT.709 weights are kept as integers summing to this value.
pub const LUMA_WEIGHT_SUM: u32 = 10_000;

/// Largest output grid, in cells, the resampler will allocate.
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 26;

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;
