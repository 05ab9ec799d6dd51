use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::http::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS, build_client, join_url, read_json};
use crate::domain::contrast::ContrastRequirement;
use crate::domain::palette::{ColorPalette, ColorSources};
use crate::domain::params::BackgroundParameters;
use crate::domain::style::RawOption;
use crate::error::{EngineError, EngineResult};

const CSS_PATH: &str = "/api/backgrounds/generate";
const IMAGE_PATH: &str = "/api/backgrounds/generate-images";
const CSS_SERVICE: &str = "css background service";
const IMAGE_SERVICE: &str = "image background service";

/// Remote generators of background candidates.
#[async_trait]
pub trait BackgroundGenerator: Send + Sync {
    async fn generate_css(&self, params: &BackgroundParameters) -> EngineResult<Vec<RawOption>>;

    async fn generate_images(&self, params: &BackgroundParameters)
    -> EngineResult<Vec<RawOption>>;
}

#[derive(Debug, Clone)]
pub struct BackgroundClient {
    client: Client,
    base_url: String,
}

impl Default for BackgroundClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into(),
        }
    }

    async fn request(
        &self,
        service: &str,
        path: &str,
        params: &BackgroundParameters,
    ) -> EngineResult<Vec<RawOption>> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(%url, "requesting backgrounds");

        let response = self
            .client
            .post(&url)
            .json(&GenerationRequest::from(params))
            .send()
            .await
            .map_err(|source| EngineError::network(service, source))?;

        let payload: Value = read_json(service, response).await?;
        parse_options(service, payload)
    }
}

#[async_trait]
impl BackgroundGenerator for BackgroundClient {
    async fn generate_css(&self, params: &BackgroundParameters) -> EngineResult<Vec<RawOption>> {
        self.request(CSS_SERVICE, CSS_PATH, params).await
    }

    async fn generate_images(
        &self,
        params: &BackgroundParameters,
    ) -> EngineResult<Vec<RawOption>> {
        self.request(IMAGE_SERVICE, IMAGE_PATH, params).await
    }
}

/// Only a non-empty JSON array counts as a usable answer.
fn parse_options(service: &str, payload: Value) -> EngineResult<Vec<RawOption>> {
    let Value::Array(entries) = payload else {
        return Err(EngineError::parse(service, "expected a JSON array"));
    };
    if entries.is_empty() {
        return Err(EngineError::empty(service));
    }
    serde_json::from_value(Value::Array(entries)).map_err(|err| EngineError::parse(service, err))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationRequest<'a> {
    business_type: &'a str,
    target_audience: &'a str,
    color_scheme: &'a str,
    style_preference: &'a str,
    azure_colors: &'a ColorSources,
    color_palette: &'a ColorPalette,
    mood_keywords: &'a [String],
    background_style: &'a str,
    contrast_requirements: &'a ContrastRequirement,
}

impl<'a> From<&'a BackgroundParameters> for GenerationRequest<'a> {
    fn from(params: &'a BackgroundParameters) -> Self {
        Self {
            business_type: &params.business_type,
            target_audience: &params.target_audience,
            color_scheme: &params.color_scheme,
            style_preference: &params.style_preference,
            azure_colors: &params.source_colors,
            color_palette: &params.color_palette,
            mood_keywords: &params.mood_keywords,
            background_style: &params.background_style,
            contrast_requirements: &params.contrast_requirement,
        }
    }
}
