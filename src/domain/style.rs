mod presets;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use presets::{
    PRESETS, PresetStyle, default_presets, presets_for_business, random_presets,
};

use super::color::{NEUTRAL_BACKGROUND, first_hex_in, non_empty};
use super::contrast::ContrastResolver;
use super::language::LanguageConfig;
use super::typography::{TextAlign, derive_typography};

pub const DEFAULT_ACCENT: &str = "#1976D2";
pub const DEFAULT_PRIMARY: &str = "#2196F3";
pub const DEFAULT_SECONDARY: &str = "#FF9800";
pub const DEFAULT_FONT_FAMILY: &str = "Roboto, sans-serif";
pub const DEFAULT_FONT_SIZE: f32 = 4.0;
pub const DEFAULT_BODY_FONT_SIZE: f32 = 1.7;
pub const NO_PATTERN: &str = "none";

/// Exactly one background treatment per style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    Solid(String),
    Gradient(String),
    Image(String),
}

impl Background {
    /// The color text is measured against. Images have none.
    #[must_use]
    pub fn representative_color(&self) -> Option<String> {
        match self {
            Self::Solid(color) => Some(color.clone()),
            Self::Gradient(css) => {
                Some(first_hex_in(css).unwrap_or_else(|| NEUTRAL_BACKGROUND.to_string()))
            }
            Self::Image(_) => None,
        }
    }

    /// CSS `background` value.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Solid(value) | Self::Gradient(value) => value.clone(),
            Self::Image(url) => format!("url({url})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSource {
    Ai,
    Default,
    Fallback,
}

impl StyleSource {
    fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("fallback") => Self::Fallback,
            Some("default") => Self::Default,
            _ => Self::Ai,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOption {
    pub background: Background,
    pub text_color: String,
    pub accent_color: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub font_size: f32,
    pub body_font_size: f32,
    pub letter_spacing: String,
    pub line_height: String,
    pub text_align: TextAlign,
    pub title_weight: u16,
    pub body_weight: u16,
    pub pattern: String,
    pub style_name: String,
    pub description: String,
    pub source: StyleSource,
}

/// A style candidate as returned by a generation service. Nothing here is
/// trusted; every field is optional and unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(
        rename = "backgroundCSS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(rename = "patternCSS", default, skip_serializing_if = "Option::is_none")]
    pub pattern_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color_dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub contrast_ratio: Option<f32>,
}

/// Accepts `3`, `3.5` or `"3.5"`; anything else becomes `None` rather than
/// failing the whole payload.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().map(|v| v as f32),
        Some(Value::String(s)) => s.trim().parse::<f32>().ok(),
        _ => None,
    })
}

impl RawOption {
    fn background(&self) -> Background {
        let css = non_empty(self.background_css.as_deref());

        if let Some(url) = non_empty(self.background_image.as_deref()).filter(|url| *url != "none")
        {
            Background::Image(url.to_string())
        } else if let Some(css) = css.filter(|css| css.contains("gradient(")) {
            Background::Gradient(css.to_string())
        } else if let Some(color) = css.or_else(|| non_empty(self.background_color.as_deref())) {
            Background::Solid(color.to_string())
        } else {
            Background::Solid(NEUTRAL_BACKGROUND.to_string())
        }
    }
}

/// Turns raw candidates into complete styles for one language.
#[derive(Debug, Clone, Default)]
pub struct StyleAssembler {
    contrast: ContrastResolver,
}

impl StyleAssembler {
    #[must_use]
    pub fn new(contrast: ContrastResolver) -> Self {
        Self { contrast }
    }

    /// An empty input yields the default presets; otherwise one style per
    /// raw entry, in order.
    ///
    /// Typography always comes from the resolved font family. Spacing,
    /// line height and alignment sent by the service are ignored.
    #[must_use]
    pub fn assemble(&self, raw: &[RawOption], language: &LanguageConfig) -> Vec<StyleOption> {
        if raw.is_empty() {
            return default_presets(language);
        }

        raw.iter()
            .enumerate()
            .map(|(idx, option)| self.assemble_one(idx + 1, option, language))
            .collect()
    }

    fn assemble_one(&self, n: usize, raw: &RawOption, language: &LanguageConfig) -> StyleOption {
        let background = raw.background();
        let text_color = match non_empty(raw.text_color.as_deref()) {
            Some(color) => color.to_string(),
            None => match background.representative_color() {
                Some(color) => self.contrast.resolve(&color).text_color,
                None => self.contrast.light_text.clone(),
            },
        };

        let text = |value: &Option<String>, fallback: &str| {
            non_empty(value.as_deref()).unwrap_or(fallback).to_string()
        };
        let size = |value: Option<f32>, fallback: f32| {
            value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
        };

        let font_family = text(&raw.font_family, DEFAULT_FONT_FAMILY);
        let typography = derive_typography(&font_family, language.base_align());
        let style_name = non_empty(raw.style_name.as_deref())
            .or_else(|| non_empty(raw.name.as_deref()))
            .map_or_else(|| format!("Style {n}"), str::to_string);
        let description = non_empty(raw.description.as_deref())
            .map_or_else(|| format!("AI Generated Style {n}"), str::to_string);

        StyleOption {
            background,
            text_color,
            accent_color: text(&raw.accent_color, DEFAULT_ACCENT),
            primary_color: text(&raw.primary_color, DEFAULT_PRIMARY),
            secondary_color: text(&raw.secondary_color, DEFAULT_SECONDARY),
            font_size: size(raw.font_size, DEFAULT_FONT_SIZE),
            body_font_size: size(raw.body_font_size, DEFAULT_BODY_FONT_SIZE),
            letter_spacing: typography.letter_spacing.to_string(),
            line_height: typography.line_height.to_string(),
            text_align: typography.text_align,
            title_weight: typography.title_weight,
            body_weight: typography.body_weight,
            pattern: text(&raw.pattern_css, NO_PATTERN),
            style_name,
            description,
            source: StyleSource::from_raw(non_empty(raw.source.as_deref())),
            font_family,
        }
    }
}

/// [`StyleAssembler::assemble`] with the default contrast settings.
#[must_use]
pub fn assemble(raw: &[RawOption], language: &LanguageConfig) -> Vec<StyleOption> {
    StyleAssembler::default().assemble(raw, language)
}

#[cfg(test)]
mod tests;
