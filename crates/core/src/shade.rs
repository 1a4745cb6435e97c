//! Shades and tints: a base color stepped toward black or white.

use crate::color::Rgb;

/// Fraction of the remaining distance covered per step.
const STEP: f64 = 0.15;

/// Returns `n` progressively darker versions of `base`.
///
/// Shade `i` (1-indexed) scales each channel by `1 - 0.15 * i`. Past the
/// sixth step the factor bottoms out, so every further shade is black.
pub fn shades(base: Rgb, n: usize) -> Vec<Rgb> {
    (1..=n)
        .map(|i| map_channels(base, |c| c * (1.0 - STEP * i as f64)))
        .collect()
}

/// Returns `n` progressively lighter versions of `base`.
///
/// Tint `i` moves each channel `0.15 * i` of the way toward 255, saturating
/// at white.
pub fn tints(base: Rgb, n: usize) -> Vec<Rgb> {
    (1..=n)
        .map(|i| map_channels(base, |c| c + (255.0 - c) * STEP * i as f64))
        .collect()
}

/// Applies `f` to each channel, rounding half away from zero and clamping.
fn map_channels(color: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let channel = |c: u8| f(c as f64).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}
