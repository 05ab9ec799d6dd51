#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    app::sourcing::GenerationOrder,
    domain::{contrast::ContrastMode, palette::RawPalette, params::FlyerRequest},
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ContrastArg {
    Bt601,
    Wcag,
}

impl From<ContrastArg> for ContrastMode {
    fn from(value: ContrastArg) -> Self {
        match value {
            ContrastArg::Bt601 => Self::Bt601,
            ContrastArg::Wcag => Self::Wcag,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "flyer-style",
    version,
    about = "Resolve flyer style options from form answers and image colors"
)]
pub struct Cli {
    /// Business type, e.g. cafe, restaurant, tech
    #[arg(long)]
    pub business_type: Option<String>,

    #[arg(long)]
    pub target_audience: Option<String>,

    /// warm, cool, vibrant or neutral; anything else is treated as neutral
    #[arg(long)]
    pub color_scheme: Option<String>,

    #[arg(long)]
    pub style_preference: Option<String>,

    /// Language code (he, en, ru, zh)
    #[arg(long)]
    pub language: Option<String>,

    /// Logo palette as JSON, e.g. '{"primary":"#111111"}'
    #[arg(long, value_parser = parse_palette)]
    pub logo_colors: Option<RawPalette>,

    /// Photo palette as JSON
    #[arg(long, value_parser = parse_palette)]
    pub photo_colors: Option<RawPalette>,

    /// Flyer form answers as a JSON file; validated before anything runs
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// Logo image (data URL or URL) to analyze before resolving styles
    #[arg(long)]
    pub logo_image: Option<String>,

    /// Photo image (data URL or URL) to analyze before resolving styles
    #[arg(long)]
    pub photo_image: Option<String>,

    /// Flyer title; with --promo-text enables promotional text generation
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub promo_text: Option<String>,

    /// Backend base URL (overrides settings and FLYER_STYLE_BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Try image backgrounds before CSS backgrounds
    #[arg(long)]
    pub image_first: bool,

    /// Skip every network stage and use fallback backgrounds
    #[arg(long)]
    pub offline: bool,

    /// Text contrast rule
    #[arg(long, value_enum)]
    pub contrast: Option<ContrastArg>,

    /// Print the default preset styles and exit
    #[arg(long)]
    pub defaults: bool,

    /// Print the preset styles suggested for a business type and exit
    #[arg(long, value_name = "BUSINESS")]
    pub presets_for: Option<String>,

    /// Ignore the settings file
    #[arg(long)]
    pub no_config: bool,

    /// Write the resolved settings back to the settings file
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.defaults && self.presets_for.is_some() {
            anyhow::bail!("--defaults and --presets-for cannot be combined");
        }
        if self.timeout == Some(0) {
            anyhow::bail!("--timeout must be at least 1 second");
        }
        if self.no_config && self.save_settings {
            anyhow::bail!("--save-settings needs the settings file; drop --no-config");
        }
        Ok(())
    }

    #[must_use]
    pub fn generation_order(&self) -> Option<GenerationOrder> {
        self.image_first.then_some(GenerationOrder::ImageFirst)
    }

    #[must_use]
    pub fn wants_texts(&self) -> bool {
        self.title.is_some() || self.promo_text.is_some()
    }

    /// Request fields given on the command line; empty strings count as absent.
    #[must_use]
    pub fn to_request(&self) -> FlyerRequest {
        FlyerRequest {
            business_type: self.business_type.clone(),
            target_audience: self.target_audience.clone(),
            color_scheme: self.color_scheme.clone(),
            style_preference: self.style_preference.clone(),
            logo_colors: self.logo_colors.clone(),
            photo_colors: self.photo_colors.clone(),
            unified_colors: None,
            language: self.language.clone(),
            title: self.title.clone(),
            promotional_text: self.promo_text.clone(),
        }
    }
}

fn parse_palette(value: &str) -> Result<RawPalette, String> {
    serde_json::from_str(value).map_err(|err| format!("invalid palette JSON: {err}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, ContrastArg};
    use crate::app::sourcing::GenerationOrder;

    #[test]
    fn parses_request_fields() {
        let cli = Cli::parse_from([
            "flyer-style",
            "--business-type",
            "cafe",
            "--color-scheme",
            "warm",
            "--language",
            "en",
        ]);
        let request = cli.to_request();
        assert_eq!(request.business_type.as_deref(), Some("cafe"));
        assert_eq!(request.color_scheme.as_deref(), Some("warm"));
        assert_eq!(request.language.as_deref(), Some("en"));
        assert!(request.target_audience.is_none());
    }

    #[test]
    fn parses_palette_json() {
        let cli = Cli::parse_from([
            "flyer-style",
            "--logo-colors",
            r##"{"primary":"#111111","dominantColors":["#111111","#EEEEEE"]}"##,
        ]);
        let logo = cli.logo_colors.expect("logo palette");
        assert_eq!(logo.primary.as_deref(), Some("#111111"));
        assert_eq!(logo.dominant_colors.map(|c| c.len()), Some(2));
    }

    #[test]
    fn rejects_malformed_palette_json() {
        let result = Cli::try_parse_from(["flyer-style", "--photo-colors", "{not json"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_contrast_enum_values() {
        let cli = Cli::parse_from(["flyer-style", "--contrast", "wcag"]);
        assert_eq!(cli.contrast, Some(ContrastArg::Wcag));
    }

    #[test]
    fn image_first_flag_sets_order() {
        let cli = Cli::parse_from(["flyer-style", "--image-first"]);
        assert_eq!(cli.generation_order(), Some(GenerationOrder::ImageFirst));
        assert_eq!(
            Cli::parse_from(["flyer-style"]).generation_order(),
            None
        );
    }

    #[test]
    fn validate_rejects_conflicting_flags() {
        let cli = Cli::parse_from(["flyer-style", "--defaults", "--presets-for", "cafe"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["flyer-style", "--timeout", "0"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["flyer-style", "--no-config", "--save-settings"]);
        assert!(cli.validate().is_err());

        assert!(Cli::parse_from(["flyer-style"]).validate().is_ok());
    }

    #[test]
    fn text_generation_needs_title_or_promo_text() {
        assert!(!Cli::parse_from(["flyer-style"]).wants_texts());
        assert!(Cli::parse_from(["flyer-style", "--title", "Grand opening"]).wants_texts());
    }
}
