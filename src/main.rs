use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use charphoto::core::{convert_batch, ConvertOptions, TargetSize};
use charphoto::renderer::{ramp, DisplayManager, DisplayMode, RampKind};
use charphoto::shared::constants;
use charphoto::utils::{file_utils, logger, platform};

#[derive(Parser)]
#[command(author, version, about = "Render images as colored ASCII art", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Ascii,
    Rgb,
    Ansi256,
    /// TrueColor if COLORTERM says so, otherwise 256 colours
    Auto,
}

impl ModeArg {
    fn resolve(self) -> DisplayMode {
        match self {
            ModeArg::Ascii => DisplayMode::Ascii,
            ModeArg::Rgb => DisplayMode::Rgb,
            ModeArg::Ansi256 => DisplayMode::Ansi256,
            ModeArg::Auto => platform::preferred_color_mode(),
        }
    }
}

fn parse_aspect(s: &str) -> Result<f64, String> {
    let aspect: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(aspect > 0.0 && aspect.is_finite()) {
        return Err(format!("Aspect ratio must be positive, got {}", aspect));
    }
    Ok(aspect)
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images (or directories of images) to text
    Convert {
        /// Image files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output columns (height follows the aspect ratio if omitted)
        #[arg(short, long)]
        width: Option<u32>,
        /// Output rows (width follows the aspect ratio if omitted)
        #[arg(short = 'H', long)]
        height: Option<u32>,
        /// Built-in character ramp
        #[arg(short, long, value_enum, default_value_t = RampKind::Detailed)]
        ramp: RampKind,
        /// Custom ramp, darkest glyph first (overrides --ramp)
        #[arg(short, long)]
        chars: Option<String>,
        #[arg(short, long, value_enum, default_value_t = ModeArg::Rgb)]
        mode: ModeArg,
        /// Reverse the ramp for light terminal backgrounds
        #[arg(long, default_value_t = false)]
        invert: bool,
        /// Cell height divided by cell width
        #[arg(long, default_value_t = constants::DEFAULT_CHAR_ASPECT_RATIO, value_parser = parse_aspect)]
        aspect: f64,
        /// Write charphoto-*.log files into the current directory
        #[arg(long, default_value_t = false)]
        log: bool,
    },
    /// Print what we know about this terminal as JSON
    Detect,
    /// Query the terminal size as crossterm sees it
    TerminalSize,
}

#[allow(clippy::too_many_arguments)]
fn run_convert(
    inputs: &[PathBuf],
    width: Option<u32>,
    height: Option<u32>,
    ramp_kind: RampKind,
    chars: Option<&str>,
    mode: ModeArg,
    invert: bool,
    aspect: f64,
) -> Result<()> {
    let mut glyphs = match chars {
        Some(text) => ramp::parse_ramp(text).context("Invalid --chars")?,
        None => ramp_kind.chars().to_vec(),
    };
    if invert {
        glyphs = ramp::invert(&glyphs);
    }

    let (cols, rows) = platform::terminal_size_or_default();
    let options = ConvertOptions {
        target: TargetSize::from_args(width, height, (cols as u32, rows as u32)),
        char_aspect: aspect,
        ramp: glyphs,
        mode: mode.resolve(),
    };

    let paths = file_utils::collect_inputs(inputs)?;
    logger::info(&format!(
        "convert: {} input(s) target={:?} ramp={} mode={:?}",
        paths.len(),
        options.target,
        chars.map_or(ramp_kind.name(), |_| "custom"),
        options.mode
    ));

    let results = convert_batch(&paths, &options);
    let show_headers = results.len() > 1;
    let mut failures = 0usize;

    let mut display = DisplayManager::new();
    for (path, result) in &results {
        match result {
            Ok(text) => {
                let header = path.display().to_string();
                display.write_document(show_headers.then_some(header.as_str()), text)?;
            }
            Err(e) => {
                failures += 1;
                display.flush()?;
                eprintln!("error: {}", e);
            }
        }
    }
    display.flush()?;

    if failures > 0 {
        anyhow::bail!("{} of {} conversion(s) failed", failures, results.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert {
            inputs,
            width,
            height,
            ramp,
            chars,
            mode,
            invert,
            aspect,
            log,
        } => {
            if *log || logger::enabled_by_env() {
                let dir = std::env::current_dir().context("Failed to resolve working directory")?;
                logger::init(&dir);
            }
            run_convert(
                inputs,
                *width,
                *height,
                *ramp,
                chars.as_deref(),
                *mode,
                *invert,
                *aspect,
            )?;
        }
        Commands::Detect => {
            let info = platform::PlatformInfo::detect();
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::TerminalSize => {
            let (cols, rows) = crossterm::terminal::size()?;
            println!("{}x{}", cols, rows);
        }
    }

    Ok(())
}
