//! Color types and conversion functions.
//!
//! `Rgb` (8-bit channels) is the canonical representation; `Hsl`, `Hsv` and
//! `Cmyk` are derived from it by pure free functions. Derived types keep
//! full `f64` precision, with hue in degrees and every other component in
//! percent. Rounding only happens when a color is displayed or converted
//! back to `Rgb`.

use crate::parse::parse_color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// sRGB color with 8-bit channels.
///
/// Serializes as a lowercase hex string `"#rrggbb"` and deserializes from
/// anything the color parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue (degrees, [0, 360)), saturation and lightness (percent, [0, 100]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue (degrees, [0, 360)), saturation and value (percent, [0, 100]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan, magenta, yellow and key, each in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as `"#rrggbb"` (lowercase).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to [0, 1].
    fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Quantizes unit channels back to 8 bits, clamping out-of-range input.
    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }
}

fn unit_to_channel(v: f64) -> u8 {
    // NaN casts to 0.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            display_hue(self.h),
            display_percent(self.s),
            display_percent(self.l)
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            display_hue(self.h),
            display_percent(self.s),
            display_percent(self.v)
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            display_percent(self.c),
            display_percent(self.m),
            display_percent(self.y),
            display_percent(self.k)
        )
    }
}

/// Rounds a hue for display; 359.6 shows as 0, not 360.
fn display_hue(h: f64) -> i64 {
    (normalize_hue(h).round() as i64).rem_euclid(360)
}

fn display_percent(p: f64) -> i64 {
    clamp_percent(p).round() as i64
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

/// Normalizes a hue angle to [0, 360). Non-finite input maps to 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let n = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Clamps a percentage to [0, 100]. NaN maps to 0.
pub fn clamp_percent(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 100.0)
    }
}

/// Hue in sixths of a turn, [0, 6), for a chromatic color.
///
/// `max` must be one of the three channels and `delta` must be non-zero.
fn hue_sixths(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    }
}

/// Converts RGB to HSL.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (r, g, b) = c.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_sixths(r, g, b, max, d) / 6.0;

    Hsl {
        h: normalize_hue(h * 360.0),
        s: s * 100.0,
        l: l * 100.0,
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB. Hue wraps; saturation and lightness are clamped.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = normalize_hue(c.h) / 360.0;
    let s = clamp_percent(c.s) / 100.0;
    let l = clamp_percent(c.l) / 100.0;

    if s == 0.0 {
        return Rgb::from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Converts RGB to HSV.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let (r, g, b) = c.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else {
        hue_sixths(r, g, b, max, d) * 60.0
    };

    Hsv {
        h: normalize_hue(h),
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Converts HSV to RGB. Hue wraps; saturation and value are clamped.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = normalize_hue(c.h) / 60.0;
    let s = clamp_percent(c.s) / 100.0;
    let v = clamp_percent(c.v) / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::from_unit(r, g, b)
}

/// Converts RGB to CMYK.
///
/// Pure black has `k = 100` and zero ink on the other channels instead of
/// the `0 / 0` the formula would otherwise produce.
pub fn rgb_to_cmyk(c: Rgb) -> Cmyk {
    let (r, g, b) = c.to_unit();
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 100.0,
        };
    }

    let ink = |ch: f64| (1.0 - ch - k) / (1.0 - k) * 100.0;
    Cmyk {
        c: ink(r),
        m: ink(g),
        y: ink(b),
        k: k * 100.0,
    }
}

/// Converts CMYK back to RGB. Channels are clamped to [0, 100].
pub fn cmyk_to_rgb(c: Cmyk) -> Rgb {
    let k = clamp_percent(c.k) / 100.0;
    let channel = |ink: f64| (1.0 - clamp_percent(ink) / 100.0) * (1.0 - k);
    Rgb::from_unit(channel(c.c), channel(c.m), channel(c.y))
}
