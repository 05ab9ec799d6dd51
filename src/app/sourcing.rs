use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::background::BackgroundGenerator;
use crate::data::cache::{BackgroundCache, CacheKey, NullCache};
use crate::domain::cost::OPTIONS_PER_RUN;
use crate::domain::params::BackgroundParameters;
use crate::domain::style::RawOption;
use crate::error::EngineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationOrder {
    #[default]
    CssFirst,
    ImageFirst,
}

/// Which stage produced the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    Cache,
    Css,
    Image,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcingOutcome {
    pub options: Vec<RawOption>,
    pub method: GenerationMethod,
    /// Last failure seen on the way, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cache, then the two generation services in the configured order, then
/// a deterministic fallback.
#[derive(Clone)]
pub struct BackgroundSourcing {
    generator: Option<Arc<dyn BackgroundGenerator>>,
    cache: Arc<dyn BackgroundCache>,
    order: GenerationOrder,
}

impl BackgroundSourcing {
    pub fn new(generator: Arc<dyn BackgroundGenerator>, cache: Arc<dyn BackgroundCache>) -> Self {
        Self {
            generator: Some(generator),
            cache,
            order: GenerationOrder::default(),
        }
    }

    /// No remote generation; every run ends in the fallback stage.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            generator: None,
            cache: Arc::new(NullCache),
            order: GenerationOrder::default(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: GenerationOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn order(&self) -> GenerationOrder {
        self.order
    }

    /// Never fails and never returns an empty list.
    pub async fn source(&self, params: &BackgroundParameters) -> SourcingOutcome {
        let key = CacheKey::from(params);
        let mut last_error: Option<String> = None;

        match self.cache.lookup(&key).await {
            Ok(cached) if cached.len() >= OPTIONS_PER_RUN => {
                tracing::info!(business = %params.business_type, "background cache hit");
                return SourcingOutcome {
                    options: cached.into_iter().take(OPTIONS_PER_RUN).collect(),
                    method: GenerationMethod::Cache,
                    error: None,
                };
            }
            Ok(_) => tracing::debug!("background cache miss"),
            Err(err) => tracing::warn!(error = %err, "background cache lookup failed"),
        }

        if let Some(generator) = &self.generator {
            let stages = match self.order {
                GenerationOrder::CssFirst => [GenerationMethod::Css, GenerationMethod::Image],
                GenerationOrder::ImageFirst => [GenerationMethod::Image, GenerationMethod::Css],
            };

            for method in stages {
                match run_stage(generator.as_ref(), method, params).await {
                    Ok(mut options) => {
                        options.truncate(OPTIONS_PER_RUN);
                        tracing::info!(?method, count = options.len(), "backgrounds generated");
                        if let Err(err) = self.cache.store(&key, &options).await {
                            tracing::warn!(error = %err, "background cache store failed");
                        }
                        return SourcingOutcome {
                            options,
                            method,
                            error: last_error,
                        };
                    }
                    Err(err) => {
                        tracing::warn!(?method, error = %err, "background generation failed");
                        last_error = Some(err.to_string());
                    }
                }
            }
        }

        tracing::info!("using fallback backgrounds");
        SourcingOutcome {
            options: fallback_options(params),
            method: GenerationMethod::Fallback,
            error: last_error,
        }
    }
}

async fn run_stage(
    generator: &dyn BackgroundGenerator,
    method: GenerationMethod,
    params: &BackgroundParameters,
) -> EngineResult<Vec<RawOption>> {
    match method {
        GenerationMethod::Image => generator.generate_images(params).await,
        _ => generator.generate_css(params).await,
    }
}

/// Three safe candidates built only from the request's own palette.
#[must_use]
pub fn fallback_options(params: &BackgroundParameters) -> Vec<RawOption> {
    let palette = &params.color_palette;
    let text_color = &params.contrast_requirement.text_color;
    let option = |name: &str, css: String, pattern: Option<String>, accent: &str, about: &str| {
        RawOption {
            name: Some(name.to_string()),
            background_css: Some(css),
            pattern_css: pattern,
            text_color: Some(text_color.clone()),
            accent_color: Some(accent.to_string()),
            description: Some(about.to_string()),
            source: Some("fallback".to_string()),
            ..RawOption::default()
        }
    };

    vec![
        option(
            "Clean Gradient (Fallback)",
            format!(
                "linear-gradient(135deg, {}15, {}25)",
                palette.primary, palette.secondary
            ),
            None,
            &palette.accent,
            "Clean gradient background with subtle colors",
        ),
        option(
            "Solid with Pattern (Fallback)",
            palette.background.clone(),
            Some(format!(
                "radial-gradient(circle at 25% 25%, {}10 0%, transparent 50%)",
                palette.accent
            )),
            &palette.primary,
            "Solid background with subtle pattern overlay",
        ),
        option(
            "Minimal (Fallback)",
            palette.background.clone(),
            None,
            &palette.accent,
            "Simple, minimal background focusing on content",
        ),
    ]
}
