//! Parsing loosely formatted color strings into [`Rgb`].
//!
//! Accepted forms, after trimming surrounding whitespace:
//! * `#rgb` / `#rrggbb` (the `#` is required, digits are case-insensitive)
//! * `rgb(r, g, b)` with decimal channels (function name case-insensitive)
//! * a small table of CSS named colors
//!
//! `rgb()` channels above 255 are clamped to 255 rather than rejected.

use crate::color::Rgb;
use crate::error::ColorError;
use std::str::FromStr;

/// Named colors understood by the parser, using their CSS values.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("white", Rgb::new(255, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
];

/// Returns the named-color table as `(name, color)` pairs.
pub fn named_colors() -> &'static [(&'static str, Rgb)] {
    NAMED_COLORS
}

/// Looks up a named color, ignoring ASCII case.
pub fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}

/// Parses a color string into an [`Rgb`] triple.
///
/// Returns `ColorError::InvalidColor` when no accepted form matches.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::InvalidColor("empty color string".into()));
    }

    if let Some(args) = strip_rgb_function(s) {
        return parse_rgb_args(args);
    }

    if let Some(rgb) = named_color(s) {
        return Ok(rgb);
    }

    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => Err(ColorError::InvalidColor(format!("unrecognized color '{s}'"))),
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Returns the argument list of `rgb(...)` if `s` has that shape.
fn strip_rgb_function(s: &str) -> Option<&str> {
    let prefix = s.get(..4)?;
    if !prefix.eq_ignore_ascii_case("rgb(") {
        return None;
    }
    s[4..].strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidColor(format!(
            "rgb() expects 3 channels, got {}",
            parts.len()
        )));
    }
    Ok(Rgb::new(
        parse_channel(parts[0], "red")?,
        parse_channel(parts[1], "green")?,
        parse_channel(parts[2], "blue")?,
    ))
}

/// Parses a decimal channel, saturating at 255.
fn parse_channel(digits: &str, name: &str) -> Result<u8, ColorError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorError::InvalidColor(format!(
            "invalid {name} channel '{digits}'"
        )));
    }
    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as u32));
    Ok(value.min(255) as u8)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidColor(format!("invalid hex digits in '#{hex}'"));
    let digits = hex
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    match digits.as_slice() {
        &[r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        &[r1, r0, g1, g0, b1, b0] => Ok(Rgb::new(
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
        )),
        _ => Err(ColorError::InvalidColor(format!(
            "expected 3 or 6 hex digits, got {}",
            digits.len()
        ))),
    }
}
