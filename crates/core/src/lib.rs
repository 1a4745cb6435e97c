#![deny(unsafe_code)]
//! Core color math for hueforge.
//!
//! Provides the `Rgb` canonical color type with pure conversions to and from
//! HSL, HSV and CMYK, a forgiving color-string parser, harmony `Palette`
//! generation, shades/tints, WCAG contrast analysis, and the palette request
//! handler built on top of them. Nothing here holds state; every function
//! is safe to call from any thread.

pub mod color;
pub mod contrast;
pub mod error;
pub mod format;
pub mod palette;
pub mod parse;
pub mod request;
pub mod shade;

pub use color::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, Hsl, Hsv, Rgb,
};
pub use contrast::{contrast_ratio, relative_luminance, ContrastReport};
pub use error::ColorError;
pub use format::OutputFormat;
pub use palette::{Harmony, Palette};
pub use parse::parse_color;
pub use request::{handle, PaletteRequest, PaletteResponse, Scheme};
pub use shade::{shades, tints};
