use std::sync::OnceLock;

use regex::Regex;

pub type Rgb = (u8, u8, u8);

pub const NEUTRAL_PRIMARY: &str = "#666666";
pub const NEUTRAL_SECONDARY: &str = "#999999";
pub const NEUTRAL_ACCENT: &str = "#CCCCCC";
pub const NEUTRAL_BACKGROUND: &str = "#FFFFFF";

/// Parses `#RRGGBB` (or `#RRGGBBAA`, alpha ignored). The leading `#` is optional.
#[must_use]
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[must_use]
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.0, rgb.1, rgb.2)
}

/// BT.601 perceptual luma on the 0..=255 scale.
#[must_use]
pub fn luma(rgb: Rgb) -> f32 {
    let weighted = u32::from(rgb.0) * 299 + u32::from(rgb.1) * 587 + u32::from(rgb.2) * 114;
    weighted as f32 / 1000.0
}

#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f32 {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

fn srgb_to_linear(v: u8) -> f32 {
    let s = f32::from(v) / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// First `#RRGGBB` literal inside a CSS value such as a gradient.
#[must_use]
pub fn first_hex_in(css: &str) -> Option<String> {
    static HEX: OnceLock<Regex> = OnceLock::new();
    let re = HEX.get_or_init(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("static hex pattern"));
    re.find(css).map(|m| m.as_str().to_string())
}

/// Treats empty strings the same as missing values.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex("#FF8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("#1976d215"), Some((0x19, 0x76, 0xd2)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("linear-gradient(#fff, #000)"), None);
    }

    #[test]
    fn luma_uses_bt601_weights() {
        assert!((luma((255, 255, 255)) - 255.0).abs() < f32::EPSILON);
        assert!((luma((0, 0, 0))).abs() < f32::EPSILON);
        assert!((luma((255, 0, 0)) - 76.245).abs() < 0.001);
        assert!((luma((0, 255, 0)) - 149.685).abs() < 0.001);
    }

    #[test]
    fn contrast_ratio_spans_one_to_twenty_one() {
        let max = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((max - 21.0).abs() < 0.01);
        let same = contrast_ratio((120, 40, 200), (120, 40, 200));
        assert!((same - 1.0).abs() < 0.001);
    }

    #[test]
    fn finds_first_hex_in_gradient() {
        assert_eq!(
            first_hex_in("linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%)").as_deref(),
            Some("#f8f9fa")
        );
        assert_eq!(first_hex_in("none"), None);
    }

    #[test]
    fn hex_formatting_is_uppercase() {
        assert_eq!(to_hex((10, 171, 255)), "#0AABFF");
    }
}
