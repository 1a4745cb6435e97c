#![deny(unsafe_code)]
//! CLI binary for the hueforge color tools.
//!
//! Subcommands:
//! - `convert <color>` — show a color in every (or one) output format
//! - `palette <color>` — generate a harmony palette
//! - `shades <color>` / `tints <color>` — step toward black or white
//! - `contrast <a> <b>` — WCAG contrast ratio and AA/AAA verdicts
//! - `request [FILE]` — answer a JSON palette request from a file or stdin
//! - `list` — print harmonies, formats and named colors

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hueforge_core::parse::named_colors;
use hueforge_core::request::{MAX_COLOR_COUNT, MIN_COLOR_COUNT};
use hueforge_core::{
    handle, parse_color, shades, tints, ContrastReport, Harmony, OutputFormat, Palette,
    PaletteRequest, Rgb,
};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Largest accepted `-n` for shades and tints. Every step past the sixth is
/// already pure black or white.
const MAX_STEPS: usize = 12;

#[derive(Parser)]
#[command(name = "hueforge", about = "Color conversion, palettes and contrast checks")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color to other representations.
    Convert {
        /// Color as hex, rgb(r, g, b) or a name.
        color: String,

        /// Single output format (hex, rgb, hsl, hsv, cmyk); all when omitted.
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate a harmony palette from a base color.
    Palette {
        /// Base color.
        color: String,

        /// Harmony rule (complementary, analogous, triadic, tetradic,
        /// monochromatic, split-complementary).
        #[arg(short = 'H', long, default_value = "analogous")]
        harmony: String,

        /// Number of colors, 2 to 12. Fixed-shape harmonies may return fewer.
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Output format for each color.
        #[arg(short, long, default_value = "hex")]
        format: String,
    },
    /// Darker variations of a color.
    Shades {
        color: String,

        /// Number of shades, 1 to 12.
        #[arg(short, default_value_t = 5)]
        n: usize,

        #[arg(short, long, default_value = "hex")]
        format: String,
    },
    /// Lighter variations of a color.
    Tints {
        color: String,

        /// Number of tints, 1 to 12.
        #[arg(short, default_value_t = 5)]
        n: usize,

        #[arg(short, long, default_value = "hex")]
        format: String,
    },
    /// WCAG contrast between a foreground and a background color.
    Contrast {
        foreground: String,
        background: String,
    },
    /// Answer a JSON palette request read from FILE, or stdin when omitted or "-".
    Request { file: Option<PathBuf> },
    /// List harmonies, output formats and named colors.
    List,
}

fn parse_input_color(input: &str) -> Result<Rgb, CliError> {
    Ok(parse_color(input)?)
}

fn parse_count(count: usize) -> Result<usize, CliError> {
    if (MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(CliError::Input(format!(
            "--count must be between {MIN_COLOR_COUNT} and {MAX_COLOR_COUNT}, got {count}"
        )))
    }
}

fn parse_steps(n: usize) -> Result<usize, CliError> {
    if (1..=MAX_STEPS).contains(&n) {
        Ok(n)
    } else {
        Err(CliError::Input(format!("-n must be between 1 and {MAX_STEPS}, got {n}")))
    }
}

fn read_request(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("failed to read {}: {e}", path.display()))),
        _ => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

/// Prints a list of rendered colors as text lines or a JSON object.
fn print_colors(
    json: bool,
    label: &str,
    colors: &[Rgb],
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = format.render_all(colors);
    if json {
        let mut info = serde_json::Map::new();
        info.insert(label.to_string(), rendered.into());
        info.insert("format".to_string(), format.name().into());
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for line in rendered {
            println!("{line}");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color, format } => {
            let rgb = parse_input_color(&color)?;
            let formats = match format {
                Some(name) => vec![name.parse::<OutputFormat>()?],
                None => OutputFormat::ALL.to_vec(),
            };
            if cli.json {
                let info: serde_json::Map<String, serde_json::Value> = formats
                    .iter()
                    .map(|f| (f.name().to_string(), serde_json::Value::from(f.render(rgb))))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for f in formats {
                    println!("{:<5} {}", f.name(), f.render(rgb));
                }
            }
        }
        Command::Palette {
            color,
            harmony,
            count,
            format,
        } => {
            let base = parse_input_color(&color)?;
            let harmony = harmony.parse::<Harmony>()?;
            let count = parse_count(count)?;
            let format = format.parse::<OutputFormat>()?;
            if let Some(cap) = harmony.fixed_size().filter(|&cap| count > cap) {
                warn!("{harmony} palettes have {cap} colors; ignoring --count {count}");
            }
            let palette = Palette::generate(base, harmony, count);
            debug!(%harmony, requested = count, generated = palette.len(), "palette generated");
            print_colors(cli.json, "colors", palette.colors(), format)?;
        }
        Command::Shades { color, n, format } => {
            let base = parse_input_color(&color)?;
            let n = parse_steps(n)?;
            let format = format.parse::<OutputFormat>()?;
            print_colors(cli.json, "shades", &shades(base, n), format)?;
        }
        Command::Tints { color, n, format } => {
            let base = parse_input_color(&color)?;
            let n = parse_steps(n)?;
            let format = format.parse::<OutputFormat>()?;
            print_colors(cli.json, "tints", &tints(base, n), format)?;
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let report = ContrastReport::new(
                parse_input_color(&foreground)?,
                parse_input_color(&background)?,
            );
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} on {}: {:.2}:1 ({})",
                    report.foreground.to_hex(),
                    report.background.to_hex(),
                    report.ratio,
                    report.level()
                );
            }
        }
        Command::Request { file } => {
            let body = read_request(file.as_deref())?;
            let request = PaletteRequest::from_json(&body)?;
            let response = handle(&request)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::List => {
            let harmonies: Vec<&str> = Harmony::ALL.iter().map(|h| h.name()).collect();
            let formats: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
            let names: Vec<&str> = named_colors().iter().map(|(n, _)| *n).collect();
            if cli.json {
                let info = serde_json::json!({
                    "harmonies": harmonies,
                    "formats": formats,
                    "namedColors": names,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Harmonies:");
                for name in harmonies {
                    println!("  {name}");
                }
                println!("Formats:");
                println!("  {}", formats.join(", "));
                println!("Named colors:");
                println!("  {}", names.join(", "));
            }
        }
    }

    Ok(())
}

/// Filter directive used when `RUST_LOG` is unset or invalid.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
