use serde::{Deserialize, Serialize};

use super::color::{Rgb, contrast_ratio, luma, parse_hex, relative_luminance};

pub const DEFAULT_DARK_TEXT: &str = "#333333";
pub const DEFAULT_LIGHT_TEXT: &str = "#FFFFFF";
/// Advertised WCAG AA target carried alongside every decision.
pub const DEFAULT_MIN_CONTRAST_RATIO: f32 = 4.5;

const LUMA_THRESHOLD: f32 = 128.0;
const WHITE: Rgb = (255, 255, 255);
/// Luminance of a mid gray where black and white text reach equal contrast.
const WCAG_LUMINANCE_PIVOT: f32 = 0.179;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Light,
    Dark,
}

/// How backgrounds are classified.
///
/// `Bt601` is a binary luma threshold and performs no ratio check; it is the
/// compatible default. `Wcag` uses sRGB relative luminance and picks the
/// configured text color with the higher contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Bt601,
    Wcag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastDecision {
    pub text_color: String,
    pub background_type: BackgroundType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastRequirement {
    pub text_color: String,
    pub min_contrast_ratio: f32,
    pub background_type: BackgroundType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResolver {
    pub dark_text: String,
    pub light_text: String,
    #[serde(default)]
    pub mode: ContrastMode,
}

impl Default for ContrastResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DARK_TEXT, DEFAULT_LIGHT_TEXT)
    }
}

impl ContrastResolver {
    pub fn new(dark_text: impl Into<String>, light_text: impl Into<String>) -> Self {
        Self {
            dark_text: dark_text.into(),
            light_text: light_text.into(),
            mode: ContrastMode::Bt601,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ContrastMode) -> Self {
        self.mode = mode;
        self
    }

    /// Picks the text color for `background`. Unparseable input is treated
    /// as a white background.
    #[must_use]
    pub fn resolve(&self, background: &str) -> ContrastDecision {
        let rgb = parse_hex(background).unwrap_or(WHITE);

        let background_type = match self.mode {
            ContrastMode::Bt601 => {
                if luma(rgb) > LUMA_THRESHOLD {
                    BackgroundType::Light
                } else {
                    BackgroundType::Dark
                }
            }
            ContrastMode::Wcag => self.wcag_background_type(rgb),
        };

        let text_color = match background_type {
            BackgroundType::Light => self.dark_text.clone(),
            BackgroundType::Dark => self.light_text.clone(),
        };

        ContrastDecision {
            text_color,
            background_type,
        }
    }

    #[must_use]
    pub fn requirement(&self, background: &str, min_contrast_ratio: f32) -> ContrastRequirement {
        let decision = self.resolve(background);
        ContrastRequirement {
            text_color: decision.text_color,
            min_contrast_ratio,
            background_type: decision.background_type,
        }
    }

    fn wcag_background_type(&self, background: Rgb) -> BackgroundType {
        match (parse_hex(&self.dark_text), parse_hex(&self.light_text)) {
            (Some(dark), Some(light)) => {
                if contrast_ratio(dark, background) >= contrast_ratio(light, background) {
                    BackgroundType::Light
                } else {
                    BackgroundType::Dark
                }
            }
            _ if relative_luminance(background) > WCAG_LUMINANCE_PIVOT => BackgroundType::Light,
            _ => BackgroundType::Dark,
        }
    }
}

/// Contrast ratio between two hex colors, when both parse.
#[must_use]
pub fn hex_contrast_ratio(foreground: &str, background: &str) -> Option<f32> {
    Some(contrast_ratio(parse_hex(foreground)?, parse_hex(background)?))
}
