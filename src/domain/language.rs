use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::typography::TextAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
    Ru,
    Zh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::He, Self::En, Self::Ru, Self::Zh];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En => "en",
            Self::Ru => "ru",
            Self::Zh => "zh",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::He => "Hebrew",
            Self::En => "English",
            Self::Ru => "Russian",
            Self::Zh => "Chinese",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::He => Direction::Rtl,
            Self::En | Self::Ru | Self::Zh => Direction::Ltr,
        }
    }

    #[must_use]
    pub fn base_align(self) -> TextAlign {
        match self.direction() {
            Direction::Rtl => TextAlign::Right,
            Direction::Ltr => TextAlign::Left,
        }
    }

    /// Looks up a language code, falling back to Hebrew for anything unknown.
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported language code: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageContent {
    pub qr_instructions: &'static str,
    pub app_name: &'static str,
    pub app_description: &'static str,
    pub app_tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageLayout {
    pub direction: Direction,
    pub text_align: TextAlign,
    pub grid_columns: &'static str,
    pub phone_position: &'static str,
    pub logo_position: &'static str,
    pub qr_position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTypography {
    pub primary_font: &'static [&'static str],
    pub title_weight: u16,
    pub body_weight: u16,
    pub line_height: f32,
    pub letter_spacing: &'static str,
}

impl LanguageTypography {
    #[must_use]
    pub fn font_stack(&self) -> String {
        self.primary_font.join(", ")
    }
}

/// Where one flyer element sits and which way it faces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPlacement {
    pub position: &'static str,
    pub alignment: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementLayout {
    pub logo: ElementPlacement,
    pub phone: ElementPlacement,
    pub content_column: ElementPlacement,
    pub qr_code: ElementPlacement,
    pub flier_photo: ElementPlacement,
}

/// Everything language-dependent about a flyer, resolved once per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub language: Language,
    pub content: &'static LanguageContent,
    pub layout: &'static LanguageLayout,
    pub typography: &'static LanguageTypography,
    pub element_layout: &'static ElementLayout,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl LanguageConfig {
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        Self::for_language(Language::resolve(code))
    }

    #[must_use]
    pub fn for_language(language: Language) -> Self {
        let (content, layout, typography, element_layout) = match language {
            Language::He => (&HE_CONTENT, &RTL_LAYOUT, &HE_TYPOGRAPHY, &HE_ELEMENTS),
            Language::En => (&EN_CONTENT, &LTR_LAYOUT, &EN_TYPOGRAPHY, &EN_ELEMENTS),
            Language::Ru => (&RU_CONTENT, &LTR_LAYOUT, &RU_TYPOGRAPHY, &RU_ZH_ELEMENTS),
            Language::Zh => (&ZH_CONTENT, &LTR_LAYOUT, &ZH_TYPOGRAPHY, &RU_ZH_ELEMENTS),
        };
        Self {
            language,
            content,
            layout,
            typography,
            element_layout,
        }
    }

    #[must_use]
    pub fn base_align(&self) -> TextAlign {
        self.layout.text_align
    }
}

/// Guesses the language of `text` from its script. Hebrew takes priority
/// over CJK, which takes priority over Cyrillic. Empty text is Hebrew.
#[must_use]
pub fn detect_language(text: &str) -> Language {
    let contains = |lo: char, hi: char| text.chars().any(|c| (lo..=hi).contains(&c));

    if text.is_empty() || contains('\u{0590}', '\u{05FF}') {
        Language::He
    } else if contains('\u{4E00}', '\u{9FFF}') {
        Language::Zh
    } else if contains('\u{0400}', '\u{04FF}') {
        Language::Ru
    } else {
        Language::En
    }
}

const HE_CONTENT: LanguageContent = LanguageContent {
    qr_instructions: "סרוק את הקוד\nמלא את הטופס\nקבל את ההנחה",
    app_name: "MyBenefitz",
    app_description: "באפליקציה השכונתית",
    app_tagline: "תומכת בעסקים הקטנים השכונתיים",
};

const EN_CONTENT: LanguageContent = LanguageContent {
    qr_instructions: "Scan the QR code\nFill in the form\nGet the discount",
    app_name: "MyBenefitz",
    app_description: "In the neighborhood app",
    app_tagline: "Supporting local small businesses",
};

const RU_CONTENT: LanguageContent = LanguageContent {
    qr_instructions: "Отсканируйте QR код\nЗаполните форму\nПолучите скидку",
    app_name: "MyBenefitz",
    app_description: "В районном приложении",
    app_tagline: "Поддерживаем местный малый бизнес",
};

const ZH_CONTENT: LanguageContent = LanguageContent {
    qr_instructions: "扫描二维码\n填写表格\n获得折扣",
    app_name: "MyBenefitz",
    app_description: "在社区应用中",
    app_tagline: "支持当地小企业",
};

const RTL_LAYOUT: LanguageLayout = LanguageLayout {
    direction: Direction::Rtl,
    text_align: TextAlign::Right,
    grid_columns: "1.5fr 1fr",
    phone_position: "right",
    logo_position: "left",
    qr_position: "left",
};

const LTR_LAYOUT: LanguageLayout = LanguageLayout {
    direction: Direction::Ltr,
    text_align: TextAlign::Left,
    grid_columns: "1fr 1.5fr",
    phone_position: "left",
    logo_position: "right",
    qr_position: "right",
};

const HE_TYPOGRAPHY: LanguageTypography = LanguageTypography {
    primary_font: &["Segoe UI", "Tahoma", "Arial", "sans-serif"],
    title_weight: 700,
    body_weight: 400,
    line_height: 1.4,
    letter_spacing: "normal",
};

const EN_TYPOGRAPHY: LanguageTypography = LanguageTypography {
    primary_font: &["Roboto", "Helvetica", "Arial", "sans-serif"],
    title_weight: 800,
    body_weight: 400,
    line_height: 1.3,
    letter_spacing: "-0.02em",
};

const RU_TYPOGRAPHY: LanguageTypography = LanguageTypography {
    primary_font: &["Roboto", "DejaVu Sans", "Arial", "sans-serif"],
    title_weight: 700,
    body_weight: 400,
    line_height: 1.3,
    letter_spacing: "normal",
};

const ZH_TYPOGRAPHY: LanguageTypography = LanguageTypography {
    primary_font: &["Noto Sans CJK SC", "PingFang SC", "SimHei", "sans-serif"],
    title_weight: 600,
    body_weight: 400,
    line_height: 1.5,
    letter_spacing: "0.05em",
};

const HE_ELEMENTS: ElementLayout = ElementLayout {
    logo: ElementPlacement {
        position: "top:15px left:30px",
        alignment: "flex-start",
        transform: None,
    },
    phone: ElementPlacement {
        position: "grid-column:2 grid-row:1/span 3",
        alignment: "right",
        transform: Some("translateX(40px) translateY(-35px) rotate(-12deg) scale(1.8)"),
    },
    content_column: ElementPlacement {
        position: "grid-column:1 grid-row:1/span 3",
        alignment: "right",
        transform: None,
    },
    qr_code: ElementPlacement {
        position: "grid-column:1 grid-row:3",
        alignment: "flex-start",
        transform: None,
    },
    flier_photo: ElementPlacement {
        position: "left:50px bottom:8%",
        alignment: "left",
        transform: None,
    },
};

const EN_ELEMENTS: ElementLayout = ElementLayout {
    logo: ElementPlacement {
        position: "top:15px right:30px",
        alignment: "flex-end",
        transform: None,
    },
    phone: ElementPlacement {
        position: "grid-column:2 grid-row:1/span 3",
        alignment: "right",
        transform: Some("translateX(-25px) translateY(-20px) rotate(12deg) scale(1.7)"),
    },
    content_column: ElementPlacement {
        position: "grid-column:1 grid-row:1/span 3",
        alignment: "left",
        transform: None,
    },
    qr_code: ElementPlacement {
        position: "grid-column:2 grid-row:3",
        alignment: "flex-end",
        transform: None,
    },
    flier_photo: ElementPlacement {
        position: "left:50px bottom:5%",
        alignment: "left",
        transform: None,
    },
};

const RU_ZH_ELEMENTS: ElementLayout = ElementLayout {
    logo: ElementPlacement {
        position: "top:15px right:30px",
        alignment: "flex-end",
        transform: None,
    },
    phone: ElementPlacement {
        position: "grid-column:2 grid-row:1/span 3",
        alignment: "right",
        transform: Some("translateX(15px) rotate(12deg) scale(1.7)"),
    },
    content_column: ElementPlacement {
        position: "grid-column:1 grid-row:1/span 3",
        alignment: "left",
        transform: None,
    },
    qr_code: ElementPlacement {
        position: "grid-column:1 grid-row:3",
        alignment: "flex-start",
        transform: None,
    },
    flier_photo: ElementPlacement {
        position: "left:50px bottom:15%",
        alignment: "left",
        transform: None,
    },
};
