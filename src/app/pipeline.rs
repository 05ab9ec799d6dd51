use std::sync::Arc;

use serde::Serialize;

use crate::{
    app::{
        settings::EngineSettings,
        sourcing::{BackgroundSourcing, GenerationMethod},
    },
    data::{
        background::BackgroundClient,
        cache::{BackgroundCache, MemoryCache, NullCache},
    },
    domain::{
        cost::{CostEstimate, DEFAULT_CSS_PROVIDER, GenerationKind, estimate_cost},
        language::{Language, LanguageConfig},
        params::{BackgroundParameters, FlyerRequest, ParameterBuilder},
        style::{StyleAssembler, StyleOption},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePipelineOutcome {
    pub language: Language,
    pub method: GenerationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<CostEstimate>,
    pub parameters: BackgroundParameters,
    pub options: Vec<StyleOption>,
}

/// Request in, finished style options out: parameters, sourcing, assembly.
#[derive(Clone)]
pub struct StylePipeline {
    builder: ParameterBuilder,
    sourcing: BackgroundSourcing,
    assembler: StyleAssembler,
    default_language: Language,
}

impl StylePipeline {
    pub fn new(settings: &EngineSettings, sourcing: BackgroundSourcing) -> Self {
        let contrast = settings.contrast_resolver();
        Self {
            builder: ParameterBuilder::new(contrast.clone(), settings.min_contrast_ratio),
            sourcing: sourcing.with_order(settings.generation_order),
            assembler: StyleAssembler::new(contrast),
            default_language: settings.default_language,
        }
    }

    /// Talks to the configured backend. The cache stage always misses.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::with_cache(settings, Arc::new(NullCache))
    }

    /// Like [`StylePipeline::from_settings`], but repeated requests within a
    /// process are answered from an in-memory cache of `cache_capacity` entries.
    pub fn cached(settings: &EngineSettings) -> Self {
        Self::with_cache(settings, Arc::new(MemoryCache::new(settings.cache_capacity)))
    }

    fn with_cache(settings: &EngineSettings, cache: Arc<dyn BackgroundCache>) -> Self {
        let generator = BackgroundClient::with_timeout(
            settings.backend_url.clone(),
            settings.request_timeout(),
        );
        Self::new(settings, BackgroundSourcing::new(Arc::new(generator), cache))
    }

    pub fn offline(settings: &EngineSettings) -> Self {
        Self::new(settings, BackgroundSourcing::offline())
    }

    #[must_use]
    pub fn language_for(&self, request: &FlyerRequest) -> LanguageConfig {
        LanguageConfig::for_language(request.language_hint().unwrap_or(self.default_language))
    }

    pub async fn run(&self, request: &FlyerRequest) -> StylePipelineOutcome {
        let language = self.language_for(request);
        let parameters = self.builder.build(request);
        let sourced = self.sourcing.source(&parameters).await;
        let options = self.assembler.assemble(&sourced.options, &language);

        tracing::info!(
            method = ?sourced.method,
            options = options.len(),
            language = language.language.code(),
            "style options ready"
        );

        StylePipelineOutcome {
            language: language.language,
            method: sourced.method,
            error: sourced.error,
            estimated_cost: cost_of(sourced.method),
            parameters,
            options,
        }
    }
}

fn cost_of(method: GenerationMethod) -> Option<CostEstimate> {
    match method {
        GenerationMethod::Css => Some(estimate_cost(DEFAULT_CSS_PROVIDER, GenerationKind::Css)),
        GenerationMethod::Image => Some(estimate_cost(DEFAULT_CSS_PROVIDER, GenerationKind::Image)),
        GenerationMethod::Cache | GenerationMethod::Fallback => None,
    }
}
