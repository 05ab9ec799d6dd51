use serde::{Deserialize, Serialize};

use super::color::{
    NEUTRAL_ACCENT, NEUTRAL_BACKGROUND, NEUTRAL_PRIMARY, NEUTRAL_SECONDARY, non_empty,
};

pub const MAX_DOMINANT_COLORS: usize = 4;

/// Canonical four-role palette plus the ordered dominant colors it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    #[serde(default)]
    pub dominant_colors: Vec<String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ColorPalette {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            primary: NEUTRAL_PRIMARY.to_string(),
            secondary: NEUTRAL_SECONDARY.to_string(),
            accent: NEUTRAL_ACCENT.to_string(),
            background: NEUTRAL_BACKGROUND.to_string(),
            dominant_colors: vec![
                NEUTRAL_PRIMARY.to_string(),
                NEUTRAL_SECONDARY.to_string(),
                NEUTRAL_ACCENT.to_string(),
            ],
        }
    }

    fn dominant(&self, idx: usize) -> Option<&str> {
        non_empty(self.dominant_colors.get(idx).map(String::as_str))
    }
}

/// Palette as reported by an image-analysis service; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPalette {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub dominant_colors: Option<Vec<String>>,
}

impl RawPalette {
    fn is_empty(&self) -> bool {
        [&self.primary, &self.secondary, &self.accent, &self.background]
            .iter()
            .all(|field| non_empty(field.as_deref()).is_none())
            && self.dominant_colors.as_ref().is_none_or(Vec::is_empty)
    }
}

impl From<&ColorPalette> for RawPalette {
    fn from(palette: &ColorPalette) -> Self {
        Self {
            primary: Some(palette.primary.clone()),
            secondary: Some(palette.secondary.clone()),
            accent: Some(palette.accent.clone()),
            background: Some(palette.background.clone()),
            dominant_colors: Some(palette.dominant_colors.clone()),
        }
    }
}

/// Coerces a raw analysis palette into a [`ColorPalette`].
///
/// Missing roles fall back to the neutral gray set. Hex strings are not
/// validated; a malformed value passes through untouched.
#[must_use]
pub fn normalize(raw: Option<&RawPalette>) -> Option<ColorPalette> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    let role = |value: &Option<String>, fallback: &str| {
        non_empty(value.as_deref()).unwrap_or(fallback).to_string()
    };

    let dominant_colors = match raw.dominant_colors.as_ref() {
        Some(colors) => colors.clone(),
        None => [&raw.primary, &raw.secondary, &raw.accent, &raw.background]
            .into_iter()
            .filter_map(|value| non_empty(value.as_deref()).map(str::to_string))
            .collect(),
    };

    Some(ColorPalette {
        primary: role(&raw.primary, NEUTRAL_PRIMARY),
        secondary: role(&raw.secondary, NEUTRAL_SECONDARY),
        accent: role(&raw.accent, NEUTRAL_ACCENT),
        background: role(&raw.background, NEUTRAL_BACKGROUND),
        dominant_colors,
    })
}

/// The color inputs available to one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSources {
    pub logo: Option<ColorPalette>,
    pub photo: Option<ColorPalette>,
    pub unified: Option<ColorPalette>,
}

impl ColorSources {
    /// Merges the sources by unification priority: pre-unified, then
    /// logo and photo together, then either alone, then `preset`.
    #[must_use]
    pub fn unify(&self, preset: Option<&ColorPalette>) -> ColorPalette {
        if let Some(unified) = &self.unified {
            return unified.clone();
        }
        unify(self.logo.as_ref(), self.photo.as_ref(), preset)
    }
}

#[must_use]
pub fn unify(
    logo: Option<&ColorPalette>,
    photo: Option<&ColorPalette>,
    preset: Option<&ColorPalette>,
) -> ColorPalette {
    match (logo, photo) {
        (Some(logo), Some(photo)) => unify_brand_and_scene(logo, photo),
        (Some(single), None) | (None, Some(single)) => unify_single(single),
        (None, None) => preset.cloned().unwrap_or_else(ColorPalette::neutral),
    }
}

/// Logo owns the brand roles (primary, accent); photo owns the
/// environmental ones (secondary, background).
fn unify_brand_and_scene(logo: &ColorPalette, photo: &ColorPalette) -> ColorPalette {
    let primary = first_of(&[logo.dominant(0), Some(logo.primary.as_str())], NEUTRAL_PRIMARY);
    let accent = first_of(&[logo.dominant(1), Some(logo.accent.as_str())], NEUTRAL_ACCENT);
    let secondary = first_of(&[photo.dominant(0), Some(photo.primary.as_str())], NEUTRAL_SECONDARY);
    let background = first_of(
        &[Some(photo.background.as_str()), photo.dominant(1)],
        NEUTRAL_BACKGROUND,
    );
    let dominant_colors = dedupe_colors([&primary, &secondary, &accent, &background]);

    ColorPalette {
        primary,
        secondary,
        accent,
        background,
        dominant_colors,
    }
}

fn unify_single(source: &ColorPalette) -> ColorPalette {
    ColorPalette {
        primary: first_of(&[source.dominant(0), Some(source.primary.as_str())], NEUTRAL_PRIMARY),
        secondary: first_of(
            &[source.dominant(1), Some(source.secondary.as_str())],
            NEUTRAL_SECONDARY,
        ),
        accent: first_of(&[source.dominant(2), Some(source.accent.as_str())], NEUTRAL_ACCENT),
        background: first_of(&[Some(source.background.as_str())], NEUTRAL_BACKGROUND),
        dominant_colors: dedupe_colors(source.dominant_colors.iter().take(MAX_DOMINANT_COLORS)),
    }
}

fn first_of(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .find_map(|candidate| non_empty(*candidate))
        .unwrap_or(fallback)
        .to_string()
}

/// Drops empty entries and repeats (first occurrence wins), keeping at most
/// [`MAX_DOMINANT_COLORS`].
pub fn dedupe_colors<I, S>(colors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::with_capacity(MAX_DOMINANT_COLORS);
    for color in colors {
        let color = color.as_ref();
        if color.trim().is_empty() || out.iter().any(|seen| seen == color) {
            continue;
        }
        out.push(color.to_string());
        if out.len() == MAX_DOMINANT_COLORS {
            break;
        }
    }
    out
}
