use serde::{Deserialize, Serialize};

use super::color::non_empty;
use super::contrast::{ContrastRequirement, ContrastResolver, DEFAULT_MIN_CONTRAST_RATIO};
use super::language::{Language, detect_language};
use super::mood::{
    DEFAULT_AUDIENCE, DEFAULT_BUSINESS, DEFAULT_SCHEME, preset_palette, resolve_mood,
};
use super::palette::{ColorPalette, ColorSources, RawPalette, normalize};

pub const DEFAULT_STYLE_PREFERENCE: &str = "modern";
/// How many mood keywords make it into the generation prompt.
const PROMPT_MOOD_KEYWORDS: usize = 5;

const SYSTEM_PROMPT: &str = "You are an expert graphic designer creating professional flyer \
backgrounds. Generate CSS gradients and patterns that ensure text readability.";

/// Form answers plus whatever image analysis produced for one flyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerRequest {
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub style_preference: Option<String>,
    #[serde(default)]
    pub logo_colors: Option<RawPalette>,
    #[serde(default)]
    pub photo_colors: Option<RawPalette>,
    #[serde(default)]
    pub unified_colors: Option<ColorPalette>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub promotional_text: Option<String>,
}

impl FlyerRequest {
    /// A declared code wins; otherwise the language is read off the title,
    /// then the promotional text. `None` when there is nothing to go on.
    #[must_use]
    pub fn language_hint(&self) -> Option<Language> {
        if let Some(code) = non_empty(self.language.as_deref()) {
            return Some(Language::resolve(code));
        }
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.promotional_text.as_deref()))
            .map(detect_language)
    }
}

/// Everything the background generators need, derived once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundParameters {
    pub business_type: String,
    pub target_audience: String,
    pub color_scheme: String,
    pub style_preference: String,
    pub source_colors: ColorSources,
    pub mood_keywords: Vec<String>,
    pub color_palette: ColorPalette,
    pub background_style: String,
    pub contrast_requirement: ContrastRequirement,
    pub search_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiPrompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    contrast: ContrastResolver,
    min_contrast_ratio: f32,
}

impl Default for ParameterBuilder {
    fn default() -> Self {
        Self::new(ContrastResolver::default(), DEFAULT_MIN_CONTRAST_RATIO)
    }
}

impl ParameterBuilder {
    #[must_use]
    pub fn new(contrast: ContrastResolver, min_contrast_ratio: f32) -> Self {
        Self {
            contrast,
            min_contrast_ratio,
        }
    }

    #[must_use]
    pub fn build(&self, request: &FlyerRequest) -> BackgroundParameters {
        let field = |value: &Option<String>, fallback: &str| {
            non_empty(value.as_deref()).unwrap_or(fallback).to_string()
        };
        let business_type = field(&request.business_type, DEFAULT_BUSINESS);
        let target_audience = field(&request.target_audience, DEFAULT_AUDIENCE);
        let color_scheme = field(&request.color_scheme, DEFAULT_SCHEME);
        let style_preference = field(&request.style_preference, DEFAULT_STYLE_PREFERENCE);

        let source_colors = ColorSources {
            logo: normalize(request.logo_colors.as_ref()),
            photo: normalize(request.photo_colors.as_ref()),
            unified: request.unified_colors.clone(),
        };
        let color_palette = source_colors.unify(Some(&preset_palette(&color_scheme)));
        let mood = resolve_mood(&business_type, &target_audience, &color_scheme);
        let contrast_requirement = self
            .contrast
            .requirement(&color_palette.background, self.min_contrast_ratio);

        let mut search_tags: Vec<String> = Vec::with_capacity(3);
        for tag in [&business_type, &target_audience, &color_scheme] {
            if !search_tags.contains(tag) {
                search_tags.push(tag.clone());
            }
        }

        tracing::debug!(
            business = %business_type,
            audience = %target_audience,
            scheme = %color_scheme,
            background = %color_palette.background,
            "built background parameters"
        );

        BackgroundParameters {
            business_type,
            target_audience,
            color_scheme,
            style_preference,
            source_colors,
            mood_keywords: mood.keywords,
            color_palette,
            background_style: mood.background_style,
            contrast_requirement,
            search_tags,
        }
    }
}

impl BackgroundParameters {
    /// Builds with the default contrast settings.
    #[must_use]
    pub fn from_request(request: &FlyerRequest) -> Self {
        ParameterBuilder::default().build(request)
    }

    /// Renders the prompt pair sent to a text model that designs backgrounds.
    #[must_use]
    pub fn prompt(&self) -> AiPrompt {
        let mood = self
            .mood_keywords
            .iter()
            .take(PROMPT_MOOD_KEYWORDS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let palette = serde_json::to_string(&self.color_palette).unwrap_or_default();

        let user = format!(
            "Create 3 distinct background variations for a {business} business targeting {audience}.

Style: {style}
Mood: {mood}
Color Palette: {palette}

Requirements:
1. Ensure high contrast for text readability
2. Use provided color palette as inspiration
3. Create CSS gradients/patterns (no external images)
4. Include recommended text colors

Return JSON array with 3 options:
[
  {{
    \"name\": \"Style Name\",
    \"backgroundCSS\": \"linear-gradient(...)\",
    \"textColor\": \"#hexcode\",
    \"accentColor\": \"#hexcode\",
    \"description\": \"Brief description\"
  }}
]",
            business = self.business_type,
            audience = self.target_audience,
            style = self.background_style,
        );

        AiPrompt {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}
