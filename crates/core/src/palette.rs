//! Harmony palettes derived from a base color by rotating hue in HSL.
//!
//! The base is converted to HSL once; every derived color keeps its
//! saturation and lightness (except monochromatic, which steps lightness
//! instead). The first entry of every palette is the unmodified base color.

use crate::color::{hsl_to_rgb, normalize_hue, rgb_to_hsl, Hsl, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hue step between neighbouring analogous colors, in degrees.
const ANALOGOUS_STEP: f64 = 30.0;

/// Lightness step between monochromatic colors, in percent.
const MONOCHROMATIC_STEP: f64 = 15.0;

/// Monochromatic lightness is kept inside this band so colors never
/// collapse into pure black or white.
const MONOCHROMATIC_LIGHTNESS: (f64, f64) = (10.0, 90.0);

/// Color harmony rule used to derive a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Complementary,
    #[default]
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
    SplitComplementary,
}

impl Harmony {
    /// Every harmony, in display order.
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::Monochromatic,
        Harmony::SplitComplementary,
    ];

    /// The kebab-case name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
            Harmony::Monochromatic => "monochromatic",
            Harmony::SplitComplementary => "split-complementary",
        }
    }

    /// Fixed palette size for rules with a fixed shape, `None` when the
    /// size follows the requested count.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Harmony::Complementary => Some(2),
            Harmony::Triadic | Harmony::SplitComplementary => Some(3),
            Harmony::Tetradic => Some(4),
            Harmony::Analogous | Harmony::Monochromatic => None,
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    /// Parses a harmony name, ignoring case and accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Harmony::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

/// An ordered set of colors generated from a base color by a harmony rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    harmony: Harmony,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Generates up to `count` colors from `base` using `harmony`.
    ///
    /// The result holds `min(count, rule size)` colors: fixed-shape rules
    /// are truncated, never padded. `count` is expected to be validated by
    /// the caller; a count of zero yields an empty palette.
    pub fn generate(base: Rgb, harmony: Harmony, count: usize) -> Self {
        let hsl = rgb_to_hsl(base);
        let rotate = |degrees: f64| {
            hsl_to_rgb(Hsl {
                h: normalize_hue(hsl.h + degrees),
                ..hsl
            })
        };

        let derived: Vec<Rgb> = match harmony {
            Harmony::Complementary => vec![rotate(180.0)],
            Harmony::Analogous => (1..count)
                .map(|i| rotate(ANALOGOUS_STEP * i as f64))
                .collect(),
            Harmony::Triadic => vec![rotate(120.0), rotate(240.0)],
            Harmony::Tetradic => vec![rotate(90.0), rotate(180.0), rotate(270.0)],
            Harmony::Monochromatic => {
                let (lo, hi) = MONOCHROMATIC_LIGHTNESS;
                (1..count)
                    .map(|i| {
                        hsl_to_rgb(Hsl {
                            l: (hsl.l + MONOCHROMATIC_STEP * i as f64).clamp(lo, hi),
                            ..hsl
                        })
                    })
                    .collect()
            }
            Harmony::SplitComplementary => vec![rotate(150.0), rotate(210.0)],
        };

        let colors = std::iter::once(base).chain(derived).take(count).collect();
        Self { harmony, colors }
    }

    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns the number of colors in this palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if this palette has no colors (only for a zero count).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
