use rand::{Rng, seq::SliceRandom};

use super::{
    Background, DEFAULT_PRIMARY, DEFAULT_SECONDARY, NO_PATTERN, StyleOption, StyleSource,
};
use crate::domain::language::LanguageConfig;
use crate::domain::typography::TextAlign;

/// One of the built-in looks offered when no generated options exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetStyle {
    pub name: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub font_family: &'static str,
    pub font_size: f32,
    pub body_font_size: f32,
    pub letter_spacing: &'static str,
    pub line_height: &'static str,
    pub centered: bool,
    pub title_weight: u16,
    pub body_weight: u16,
    pub description: &'static str,
}

const PROFESSIONAL_CLEAN: usize = 0;
const ELEGANT_SOPHISTICATED: usize = 1;
const BOLD_MODERN: usize = 2;
const WARM_NATURAL: usize = 3;
const TECH_MINIMAL: usize = 4;

pub const PRESETS: [PresetStyle; 5] = [
    PresetStyle {
        name: "Professional Clean",
        background: "#ffffff",
        text_color: "#333333",
        accent_color: "#1976d2",
        font_family: "Roboto, sans-serif",
        font_size: 2.8,
        body_font_size: 1.3,
        letter_spacing: "-0.02em",
        line_height: "1.1",
        centered: false,
        title_weight: 800,
        body_weight: 400,
        description: "Clean professional style with high readability",
    },
    PresetStyle {
        name: "Elegant Sophisticated",
        background: "linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%)",
        text_color: "#2c2c2c",
        accent_color: "#8b4513",
        font_family: "Georgia, serif",
        font_size: 2.6,
        body_font_size: 1.2,
        letter_spacing: "0.01em",
        line_height: "1.2",
        centered: true,
        title_weight: 700,
        body_weight: 400,
        description: "Elegant serif style with sophisticated appeal",
    },
    PresetStyle {
        name: "Bold Modern",
        background: "linear-gradient(135deg, #1976d2 0%, #1565c0 100%)",
        text_color: "#ffffff",
        accent_color: "#ff6b35",
        font_family: "Montserrat, sans-serif",
        font_size: 3.0,
        body_font_size: 1.4,
        letter_spacing: "-0.03em",
        line_height: "1.0",
        centered: false,
        title_weight: 900,
        body_weight: 600,
        description: "Bold energetic style with high impact",
    },
    PresetStyle {
        name: "Warm Natural",
        background: "linear-gradient(135deg, #fef7e7 0%, #f6e6a4 100%)",
        text_color: "#8b5a00",
        accent_color: "#d4af37",
        font_family: "Georgia, serif",
        font_size: 2.7,
        body_font_size: 1.25,
        letter_spacing: "0.01em",
        line_height: "1.3",
        centered: false,
        title_weight: 700,
        body_weight: 400,
        description: "Warm, organic feel perfect for food businesses",
    },
    PresetStyle {
        name: "Tech Minimal",
        background: "linear-gradient(135deg, #f5f5f5 0%, #e0e0e0 100%)",
        text_color: "#1a1a1a",
        accent_color: "#00d4aa",
        font_family: "Roboto, sans-serif",
        font_size: 2.8,
        body_font_size: 1.3,
        letter_spacing: "-0.02em",
        line_height: "1.1",
        centered: false,
        title_weight: 600,
        body_weight: 300,
        description: "Minimalist tech-inspired design",
    },
];

const BUSINESS_PRESETS: &[(&str, &[usize])] = &[
    ("restaurant", &[PROFESSIONAL_CLEAN, WARM_NATURAL]),
    ("cafe", &[ELEGANT_SOPHISTICATED, WARM_NATURAL]),
    ("tech", &[TECH_MINIMAL, PROFESSIONAL_CLEAN]),
    ("retail", &[BOLD_MODERN, PROFESSIONAL_CLEAN]),
    ("corporate", &[PROFESSIONAL_CLEAN, ELEGANT_SOPHISTICATED]),
    ("creative", &[BOLD_MODERN, ELEGANT_SOPHISTICATED]),
    ("healthcare", &[PROFESSIONAL_CLEAN, TECH_MINIMAL]),
    ("education", &[ELEGANT_SOPHISTICATED, PROFESSIONAL_CLEAN]),
];

const OTHER_BUSINESS_PRESETS: &[usize] = &[PROFESSIONAL_CLEAN, ELEGANT_SOPHISTICATED, BOLD_MODERN];

impl PresetStyle {
    #[must_use]
    pub fn to_option(&self, language: &LanguageConfig) -> StyleOption {
        let background = if self.background.contains("gradient(") {
            Background::Gradient(self.background.to_string())
        } else {
            Background::Solid(self.background.to_string())
        };
        let text_align = if self.centered {
            TextAlign::Center
        } else {
            language.base_align()
        };

        StyleOption {
            background,
            text_color: self.text_color.to_string(),
            accent_color: self.accent_color.to_string(),
            primary_color: DEFAULT_PRIMARY.to_string(),
            secondary_color: DEFAULT_SECONDARY.to_string(),
            font_family: self.font_family.to_string(),
            font_size: self.font_size,
            body_font_size: self.body_font_size,
            letter_spacing: self.letter_spacing.to_string(),
            line_height: self.line_height.to_string(),
            text_align,
            title_weight: self.title_weight,
            body_weight: self.body_weight,
            pattern: NO_PATTERN.to_string(),
            style_name: self.name.to_string(),
            description: self.description.to_string(),
            source: StyleSource::Default,
        }
    }
}

/// All five presets in their fixed order.
#[must_use]
pub fn default_presets(language: &LanguageConfig) -> Vec<StyleOption> {
    PRESETS
        .iter()
        .map(|preset| preset.to_option(language))
        .collect()
}

#[must_use]
pub fn presets_for_business(business_type: &str, language: &LanguageConfig) -> Vec<StyleOption> {
    let indices = BUSINESS_PRESETS
        .iter()
        .find(|(key, _)| *key == business_type)
        .map_or(OTHER_BUSINESS_PRESETS, |(_, indices)| *indices);

    indices
        .iter()
        .map(|idx| PRESETS[*idx].to_option(language))
        .collect()
}

/// A shuffled sample of at most `count` presets.
pub fn random_presets<R>(count: usize, language: &LanguageConfig, rng: &mut R) -> Vec<StyleOption>
where
    R: Rng + ?Sized,
{
    let mut pool: Vec<&PresetStyle> = PRESETS.iter().collect();
    pool.shuffle(rng);
    pool.into_iter()
        .take(count)
        .map(|preset| preset.to_option(language))
        .collect()
}
