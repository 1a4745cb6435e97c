//! Palette request handling: JSON request in, formatted palette out.
//!
//! A request names a base color, a harmony and an output format, and can ask
//! for shades, tints and a contrast check against a light or dark scheme
//! background. Validation failures name the offending JSON field.

use crate::color::Rgb;
use crate::contrast::ContrastReport;
use crate::error::ColorError;
use crate::format::OutputFormat;
use crate::palette::{Harmony, Palette};
use crate::parse::parse_color;
use crate::shade::{shades, tints};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest accepted `colorCount`.
pub const MIN_COLOR_COUNT: usize = 2;

/// Largest accepted `colorCount`.
pub const MAX_COLOR_COUNT: usize = 12;

/// `colorCount` used when the request omits it.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Number of shades or tints included when requested.
pub const VARIATION_COUNT: usize = 5;

/// Background scheme the palette will be shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    /// Background color used for contrast checks.
    pub fn background(self) -> Rgb {
        match self {
            Scheme::Light => Rgb::WHITE,
            Scheme::Dark => Rgb::BLACK,
        }
    }
}

fn default_color_count() -> usize {
    DEFAULT_COLOR_COUNT
}

/// Incoming palette request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    pub base_color: String,
    #[serde(default)]
    pub palette_type: Harmony,
    #[serde(default = "default_color_count")]
    pub color_count: usize,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub include_shades: bool,
    #[serde(default)]
    pub include_tints: bool,
    #[serde(default)]
    pub scheme: Option<Scheme>,
}

impl PaletteRequest {
    /// A request with defaults for everything but the base color.
    pub fn new(base_color: impl Into<String>) -> Self {
        Self {
            base_color: base_color.into(),
            palette_type: Harmony::default(),
            color_count: DEFAULT_COLOR_COUNT,
            format: OutputFormat::default(),
            include_shades: false,
            include_tints: false,
            scheme: None,
        }
    }

    /// Deserializes a request from JSON text.
    ///
    /// Unknown `paletteType`, `format` or `scheme` names are rejected here.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        serde_json::from_str(json).map_err(|e| ColorError::MalformedRequest(e.to_string()))
    }

    /// Checks field bounds and parses the base color.
    pub fn validate(&self) -> Result<Rgb, ColorError> {
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&self.color_count) {
            return Err(ColorError::InvalidRequest {
                field: "colorCount".into(),
                reason: format!(
                    "must be between {MIN_COLOR_COUNT} and {MAX_COLOR_COUNT}, got {}",
                    self.color_count
                ),
            });
        }
        parse_color(&self.base_color).map_err(|e| ColorError::InvalidRequest {
            field: "baseColor".into(),
            reason: e.to_string(),
        })
    }
}

/// Formatted palette returned for a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResponse {
    pub base_color: String,
    pub palette_type: Harmony,
    pub format: OutputFormat,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shades: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<Vec<ContrastReport>>,
}

/// Validates a request and builds the formatted palette.
pub fn handle(request: &PaletteRequest) -> Result<PaletteResponse, ColorError> {
    let base = request.validate()?;
    debug!(
        base = %base.to_hex(),
        harmony = %request.palette_type,
        count = request.color_count,
        format = %request.format,
        "palette request validated"
    );

    let palette = Palette::generate(base, request.palette_type, request.color_count);
    debug!(generated = palette.len(), "palette generated");

    let format = request.format;
    let contrast = request.scheme.map(|scheme| {
        palette
            .colors()
            .iter()
            .map(|&c| ContrastReport::new(c, scheme.background()))
            .collect()
    });

    Ok(PaletteResponse {
        base_color: format.render(base),
        palette_type: palette.harmony(),
        format,
        colors: format.render_all(palette.colors()),
        shades: request
            .include_shades
            .then(|| format.render_all(&shades(base, VARIATION_COUNT))),
        tints: request
            .include_tints
            .then(|| format.render_all(&tints(base, VARIATION_COUNT))),
        scheme: request.scheme,
        contrast,
    })
}
