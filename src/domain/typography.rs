use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

impl TextAlign {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Secondary typography settings that follow from a font family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyBundle {
    pub letter_spacing: &'static str,
    pub line_height: &'static str,
    pub text_align: TextAlign,
    pub title_weight: u16,
    pub body_weight: u16,
}

/// Serif display faces are centered regardless of language; everything else
/// keeps the language's base alignment.
#[must_use]
pub fn derive_typography(font_family: &str, language_align: TextAlign) -> TypographyBundle {
    if font_family.contains("Georgia") || font_family.contains("Playfair") {
        TypographyBundle {
            letter_spacing: "0.01em",
            line_height: "1.2",
            text_align: TextAlign::Center,
            title_weight: 700,
            body_weight: 400,
        }
    } else if font_family.contains("Montserrat") {
        TypographyBundle {
            letter_spacing: "-0.03em",
            line_height: "1.0",
            text_align: language_align,
            title_weight: 900,
            body_weight: 600,
        }
    } else {
        TypographyBundle {
            letter_spacing: "-0.02em",
            line_height: "1.1",
            text_align: language_align,
            title_weight: 800,
            body_weight: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serif_faces_are_centered() {
        for font in ["Georgia, serif", "'Playfair Display', serif"] {
            let bundle = derive_typography(font, TextAlign::Right);
            assert_eq!(bundle.text_align, TextAlign::Center);
            assert_eq!(bundle.letter_spacing, "0.01em");
            assert_eq!(bundle.title_weight, 700);
        }
    }

    #[test]
    fn montserrat_is_heavy_and_tight() {
        let bundle = derive_typography("Montserrat, sans-serif", TextAlign::Left);
        assert_eq!(bundle.text_align, TextAlign::Left);
        assert_eq!(bundle.line_height, "1.0");
        assert_eq!((bundle.title_weight, bundle.body_weight), (900, 600));
    }

    #[test]
    fn georgia_wins_over_montserrat() {
        let bundle = derive_typography("Montserrat, Georgia", TextAlign::Left);
        assert_eq!(bundle.text_align, TextAlign::Center);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let bundle = derive_typography("georgia", TextAlign::Right);
        assert_eq!(bundle.text_align, TextAlign::Right);
        assert_eq!(bundle.title_weight, 800);
    }
}
