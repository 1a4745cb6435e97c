//! Output formats for rendering a color as a string.

use crate::color::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// String representation requested for output colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Hex,
        OutputFormat::Rgb,
        OutputFormat::Hsl,
        OutputFormat::Hsv,
        OutputFormat::Cmyk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Rgb => "rgb",
            OutputFormat::Hsl => "hsl",
            OutputFormat::Hsv => "hsv",
            OutputFormat::Cmyk => "cmyk",
        }
    }

    /// Renders `color` in this format, e.g. `#3498db` or `hsl(204, 70%, 53%)`.
    pub fn render(self, color: Rgb) -> String {
        match self {
            OutputFormat::Hex => color.to_hex(),
            OutputFormat::Rgb => color.to_string(),
            OutputFormat::Hsl => rgb_to_hsl(color).to_string(),
            OutputFormat::Hsv => rgb_to_hsv(color).to_string(),
            OutputFormat::Cmyk => rgb_to_cmyk(color).to_string(),
        }
    }

    /// Renders every color of a slice.
    pub fn render_all(self, colors: &[Rgb]) -> Vec<String> {
        colors.iter().map(|&c| self.render(c)).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgb = Rgb::new(52, 152, 219);

    #[test]
    fn renders_each_format() {
        assert_eq!(OutputFormat::Hex.render(BLUE), "#3498db");
        assert_eq!(OutputFormat::Rgb.render(BLUE), "rgb(52, 152, 219)");
        assert_eq!(OutputFormat::Hsl.render(BLUE), "hsl(204, 70%, 53%)");
        assert_eq!(OutputFormat::Hsv.render(BLUE), "hsv(204, 76%, 86%)");
        assert_eq!(OutputFormat::Cmyk.render(BLUE), "cmyk(76%, 31%, 0%, 14%)");
    }

    #[test]
    fn render_all_keeps_order() {
        let out = OutputFormat::Hex.render_all(&[Rgb::BLACK, Rgb::WHITE]);
        assert_eq!(out, vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("HSL".parse::<OutputFormat>().unwrap(), OutputFormat::Hsl);
        assert_eq!(" cmyk ".parse::<OutputFormat>().unwrap(), OutputFormat::Cmyk);
        assert!(matches!(
            "lab".parse::<OutputFormat>(),
            Err(ColorError::UnknownFormat(_))
        ));
    }

    #[test]
    fn default_is_hex() {
        assert_eq!(OutputFormat::default(), OutputFormat::Hex);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Cmyk).unwrap(), "\"cmyk\"");
        let f: OutputFormat = serde_json::from_str("\"hsv\"").unwrap();
        assert_eq!(f, OutputFormat::Hsv);
        assert!(serde_json::from_str::<OutputFormat>("\"HSV\"").is_err());
    }
}
