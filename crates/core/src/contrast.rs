//! WCAG relative luminance and contrast ratios.
//!
//! Only the normal-text thresholds are checked (AA at 4.5, AAA at 7.0);
//! large-text cutoffs are not distinguished.

use crate::color::Rgb;
use serde::Serialize;

/// Minimum ratio for WCAG AA, normal text.
pub const AA_RATIO: f64 = 4.5;

/// Minimum ratio for WCAG AAA, normal text.
pub const AAA_RATIO: f64 = 7.0;

/// Linearizes one 8-bit sRGB channel.
fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1].
pub fn relative_luminance(c: Rgb) -> f64 {
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Contrast ratio between two colors, in [1, 21]. Order does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast between a foreground and background color with WCAG verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl ContrastReport {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            foreground,
            background,
            ratio,
            meets_aa: ratio >= AA_RATIO,
            meets_aaa: ratio >= AAA_RATIO,
        }
    }

    /// Short verdict label: `"AAA"`, `"AA"` or `"fail"`.
    pub fn level(&self) -> &'static str {
        if self.meets_aaa {
            "AAA"
        } else if self.meets_aa {
            "AA"
        } else {
            "fail"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_is_21() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn identical_colors_are_1() {
        for c in [Rgb::WHITE, Rgb::BLACK, Rgb::new(52, 152, 219)] {
            let ratio = contrast_ratio(c, c);
            assert!((ratio - 1.0).abs() < 1e-12, "{c:?}: {ratio}");
        }
    }

    #[test]
    fn ratio_is_order_independent() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::WHITE;
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    #[test]
    fn known_ratios() {
        let gray = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!((gray - 4.54).abs() < 0.01, "gray: {gray}");
        let red = contrast_ratio(Rgb::new(255, 0, 0), Rgb::WHITE);
        assert!((red - 4.0).abs() < 0.01, "red: {red}");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_segment_below_threshold() {
        // 10 / 255 = 0.0392 sits just under 0.03928
        let expected = 10.0 / 255.0 / 12.92;
        assert!((linearize(10) - expected).abs() < 1e-15);
    }

    #[test]
    fn report_flags_follow_thresholds() {
        let strong = ContrastReport::new(Rgb::BLACK, Rgb::WHITE);
        assert!(strong.meets_aa && strong.meets_aaa);
        assert_eq!(strong.level(), "AAA");

        let mid = ContrastReport::new(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!(mid.meets_aa && !mid.meets_aaa);
        assert_eq!(mid.level(), "AA");

        let weak = ContrastReport::new(Rgb::new(255, 0, 0), Rgb::WHITE);
        assert!(!weak.meets_aa && !weak.meets_aaa);
        assert_eq!(weak.level(), "fail");
    }

    #[test]
    fn report_serializes_camel_case_with_hex_colors() {
        let report = ContrastReport::new(Rgb::BLACK, Rgb::WHITE);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["foreground"], "#000000");
        assert_eq!(json["background"], "#ffffff");
        assert_eq!(json["meetsAa"], true);
        assert_eq!(json["meetsAaa"], true);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ratio_is_between_1_and_21(
                a in any::<(u8, u8, u8)>(),
                b in any::<(u8, u8, u8)>(),
            ) {
                let ratio = contrast_ratio(Rgb::new(a.0, a.1, a.2), Rgb::new(b.0, b.1, b.2));
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
            }
        }
    }
}
