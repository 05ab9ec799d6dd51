pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod resilience;

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use app::{
    pipeline::{StylePipeline, StylePipelineOutcome},
    settings::{load_engine_settings, save_engine_settings},
};
use cli::Cli;
use data::{
    text::{GeneratedTexts, TextClient, generate_all},
    vision::{CombinedAnalysis, ImageAnalyzer, VisionClient},
};
use domain::{
    color::non_empty,
    form::FlyerForm,
    language::LanguageConfig,
    params::FlyerRequest,
    style::{default_presets, presets_for_business},
};
use error::EngineError;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "flyer_style=info";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    #[serde(flatten)]
    pub outcome: StylePipelineOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<CombinedAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<GeneratedTexts>,
}

/// Logs go to stderr; stdout carries only the JSON result.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let (settings, settings_path) = load_engine_settings(&cli, !cli.no_config);
    if cli.save_settings
        && let Some(path) = &settings_path
    {
        save_engine_settings(path, &settings)?;
        tracing::info!(path = %path.display(), "settings saved");
    }

    let mut request = match &cli.form {
        Some(path) => request_from_form(path, &cli)?,
        None => cli.to_request(),
    };

    if cli.defaults || cli.presets_for.is_some() {
        let language = LanguageConfig::for_language(
            request.language_hint().unwrap_or(settings.default_language),
        );
        let presets = match &cli.presets_for {
            Some(business) => presets_for_business(business, &language),
            None => default_presets(&language),
        };
        return print_json(&presets);
    }

    let analysis = if cli.offline {
        None
    } else {
        VisionClient::with_timeout(settings.backend_url.clone(), settings.request_timeout())
            .analyze_pair(cli.logo_image.as_deref(), cli.photo_image.as_deref())
            .await
    };
    if let Some(analysis) = &analysis {
        apply_analysis(&mut request, analysis);
    }

    let pipeline = if cli.offline {
        StylePipeline::offline(&settings)
    } else {
        StylePipeline::from_settings(&settings)
    };
    let outcome = pipeline.run(&request).await;

    let texts = if cli.wants_texts() && !cli.offline {
        let client =
            TextClient::with_timeout(settings.backend_url.clone(), settings.request_timeout());
        Some(
            generate_all(
                &client,
                cli.title.as_deref().unwrap_or_default(),
                cli.promo_text.as_deref().unwrap_or_default(),
                outcome.language,
            )
            .await,
        )
    } else {
        None
    };

    print_json(&RunReport {
        outcome,
        analysis,
        texts,
    })
}

/// Reads and validates a form file; flags given on the command line win.
fn request_from_form(path: &Path, cli: &Cli) -> Result<FlyerRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading form file {} failed", path.display()))?;
    let form: FlyerForm = serde_json::from_str(&content).context("parsing form file failed")?;

    let errors = form.validate();
    if !errors.is_valid() {
        return Err(EngineError::Validation(errors).into());
    }

    let mut request = form.to_request(cli.language.as_deref());
    let overrides = cli.to_request();
    let overlay = |field: &mut Option<String>, value: Option<String>| {
        if non_empty(value.as_deref()).is_some() {
            *field = value;
        }
    };
    overlay(&mut request.business_type, overrides.business_type);
    overlay(&mut request.target_audience, overrides.target_audience);
    overlay(&mut request.color_scheme, overrides.color_scheme);
    overlay(&mut request.style_preference, overrides.style_preference);
    request.title = overrides.title;
    request.promotional_text = overrides.promotional_text;
    request.logo_colors = overrides.logo_colors;
    request.photo_colors = overrides.photo_colors;
    Ok(request)
}

/// Analysis colors become the pre-unified palette unless the caller already
/// gave palettes or every analysis failed; a detected business type fills a
/// missing one.
fn apply_analysis(request: &mut FlyerRequest, analysis: &CombinedAnalysis) {
    if request.logo_colors.is_none()
        && request.photo_colors.is_none()
        && !analysis.is_fallback_only()
    {
        request.unified_colors.clone_from(&analysis.colors);
    }
    if non_empty(request.business_type.as_deref()).is_none()
        && let Some(business) = non_empty(Some(analysis.business_type.as_str()))
    {
        request.business_type = Some(business.to_string());
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serializing output failed")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{payload}").context("writing output failed")
}
