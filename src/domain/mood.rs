use serde::Serialize;

use super::palette::ColorPalette;

pub const DEFAULT_BUSINESS: &str = "general";
pub const DEFAULT_AUDIENCE: &str = "general";
pub const DEFAULT_SCHEME: &str = "neutral";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeRule {
    pub mood: [&'static str; 3],
    pub style: &'static str,
    pub base_colors: [&'static str; 4],
}

pub(crate) const BUSINESS_MOODS: &[(&str, [&str; 5])] = &[
    ("cafe", ["cozy", "warm", "inviting", "casual", "artisanal"]),
    (
        "restaurant",
        ["appetizing", "elegant", "savory", "welcoming", "sophisticated"],
    ),
    (
        "retail",
        ["trendy", "vibrant", "accessible", "modern", "appealing"],
    ),
    (
        "office",
        ["professional", "clean", "corporate", "reliable", "efficient"],
    ),
    (
        "healthcare",
        ["calming", "trustworthy", "clean", "healing", "gentle"],
    ),
    (
        "education",
        ["inspiring", "bright", "encouraging", "youthful", "engaging"],
    ),
    (
        "entertainment",
        ["exciting", "dynamic", "fun", "energetic", "bold"],
    ),
    (
        "beauty",
        ["elegant", "luxurious", "soft", "radiant", "sophisticated"],
    ),
    (
        "fitness",
        ["energetic", "strong", "motivating", "dynamic", "powerful"],
    ),
    (
        DEFAULT_BUSINESS,
        ["balanced", "versatile", "appealing", "professional", "clean"],
    ),
];

pub(crate) const AUDIENCE_MOODS: &[(&str, [&str; 5])] = &[
    (
        "families",
        ["friendly", "safe", "welcoming", "comfortable", "inclusive"],
    ),
    (
        "young_adults",
        ["trendy", "modern", "energetic", "social", "vibrant"],
    ),
    (
        "professionals",
        ["sleek", "sophisticated", "efficient", "premium", "polished"],
    ),
    (
        "seniors",
        ["elegant", "comfortable", "trustworthy", "classic", "refined"],
    ),
    (
        "students",
        ["affordable", "youthful", "creative", "accessible", "inspiring"],
    ),
    (
        "children",
        ["playful", "colorful", "fun", "safe", "imaginative"],
    ),
    (
        "tourists",
        ["exciting", "memorable", "authentic", "welcoming", "distinctive"],
    ),
    (
        "locals",
        ["familiar", "community", "trusted", "accessible", "neighborly"],
    ),
    (
        DEFAULT_AUDIENCE,
        ["appealing", "inclusive", "accessible", "balanced", "welcoming"],
    ),
];

pub(crate) const SCHEME_RULES: &[(&str, SchemeRule)] = &[
    (
        "warm",
        SchemeRule {
            mood: ["cozy", "inviting", "energetic"],
            style: "warm gradients with earth tones",
            base_colors: ["#FF6B35", "#F7931E", "#FFD23F", "#EE4B2B"],
        },
    ),
    (
        "cool",
        SchemeRule {
            mood: ["calm", "professional", "modern"],
            style: "cool gradients with blue and teal tones",
            base_colors: ["#4A90E2", "#00BCD4", "#3F51B5", "#1976D2"],
        },
    ),
    (
        DEFAULT_SCHEME,
        SchemeRule {
            mood: ["balanced", "sophisticated", "timeless"],
            style: "neutral gradients with gray and beige tones",
            base_colors: ["#607D8B", "#9E9E9E", "#795548", "#5D4037"],
        },
    ),
    (
        "vibrant",
        SchemeRule {
            mood: ["bold", "exciting", "dynamic"],
            style: "vibrant gradients with bright colors",
            base_colors: ["#E91E63", "#9C27B0", "#FF5722", "#FF9800"],
        },
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodProfile {
    /// Business, then audience, then scheme keywords. Repeats are kept.
    pub keywords: Vec<String>,
    pub background_style: String,
}

fn lookup<'a, T>(table: &'a [(&str, T)], key: &str, default_key: &str) -> &'a T {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .or_else(|| table.iter().find(|(candidate, _)| *candidate == default_key))
        .map(|(_, value)| value)
        .unwrap_or(&table[0].1)
}

#[must_use]
pub fn business_keywords(business_type: &str) -> &'static [&'static str; 5] {
    lookup(BUSINESS_MOODS, business_type, DEFAULT_BUSINESS)
}

#[must_use]
pub fn audience_keywords(target_audience: &str) -> &'static [&'static str; 5] {
    lookup(AUDIENCE_MOODS, target_audience, DEFAULT_AUDIENCE)
}

#[must_use]
pub fn scheme_rule(color_scheme: &str) -> &'static SchemeRule {
    lookup(SCHEME_RULES, color_scheme, DEFAULT_SCHEME)
}

#[must_use]
pub fn resolve_mood(business_type: &str, target_audience: &str, color_scheme: &str) -> MoodProfile {
    let scheme = scheme_rule(color_scheme);
    let keywords = business_keywords(business_type)
        .iter()
        .chain(audience_keywords(target_audience))
        .chain(&scheme.mood)
        .map(|keyword| (*keyword).to_string())
        .collect();

    MoodProfile {
        keywords,
        background_style: scheme.style.to_string(),
    }
}

/// Palette implied by a color-scheme choice alone, used when no image
/// analysis is available.
#[must_use]
pub fn preset_palette(color_scheme: &str) -> ColorPalette {
    let [primary, secondary, accent, _] = scheme_rule(color_scheme).base_colors;
    ColorPalette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: "#FFFFFF".to_string(),
        dominant_colors: scheme_rule(color_scheme)
            .base_colors
            .iter()
            .map(|color| (*color).to_string())
            .collect(),
    }
}
