use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

use super::http::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS, build_client, join_url, read_json};
use crate::domain::palette::{ColorPalette, RawPalette, normalize, unify};
use crate::error::{EngineError, EngineResult};

const ANALYZE_PATH: &str = "/api/vision/analyze";
const HEALTH_PATH: &str = "/api/vision/test";
const SERVICE: &str = "vision service";

pub const FALLBACK_SCENE_TYPE: &str = "general";
pub const FALLBACK_DESCRIPTION: &str = "Image analysis unavailable";
pub const FALLBACK_BUSINESS_TYPE: &str = "general business";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    pub scene_type: String,
    pub description: String,
    pub business_type: String,
    pub objects: Vec<String>,
    pub colors: ColorPalette,
}

impl VisionAnalysis {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            scene_type: FALLBACK_SCENE_TYPE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            business_type: FALLBACK_BUSINESS_TYPE.to_string(),
            objects: vec![FALLBACK_SCENE_TYPE.to_string()],
            colors: ColorPalette::neutral(),
        }
    }
}

/// Logo and photo analysis folded into one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAnalysis {
    pub logo: Option<VisionAnalysis>,
    pub photo: Option<VisionAnalysis>,
    pub colors: Option<ColorPalette>,
    pub business_type: String,
    pub scene_type: String,
    pub objects: Vec<String>,
    pub description: String,
}

impl CombinedAnalysis {
    /// True when every analyzed image came back as the stand-in result.
    #[must_use]
    pub fn is_fallback_only(&self) -> bool {
        let fallback = VisionAnalysis::fallback();
        [self.logo.as_ref(), self.photo.as_ref()]
            .into_iter()
            .flatten()
            .all(|analysis| *analysis == fallback)
    }

    fn combine(logo: Option<VisionAnalysis>, photo: Option<VisionAnalysis>) -> Self {
        let colors = (logo.is_some() || photo.is_some()).then(|| {
            unify(
                logo.as_ref().map(|a| &a.colors),
                photo.as_ref().map(|a| &a.colors),
                None,
            )
        });

        let business_type = [logo.as_ref(), photo.as_ref()]
            .into_iter()
            .flatten()
            .map(|a| a.business_type.as_str())
            .find(|b| !b.is_empty())
            .unwrap_or_default()
            .to_string();

        let description = [
            logo.as_ref().map(|a| ("Logo", a)),
            photo.as_ref().map(|a| ("Scene", a)),
        ]
        .into_iter()
        .flatten()
        .filter(|(_, a)| !a.description.is_empty())
        .map(|(label, a)| format!("{label}: {}", a.description))
        .collect::<Vec<_>>()
        .join(". ");

        Self {
            scene_type: photo
                .as_ref()
                .map(|a| a.scene_type.clone())
                .unwrap_or_default(),
            objects: photo.as_ref().map(|a| a.objects.clone()).unwrap_or_default(),
            colors,
            business_type,
            description,
            logo,
            photo,
        }
    }
}

#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn try_analyze(&self, image: &str) -> EngineResult<VisionAnalysis>;

    /// Never fails; any error yields [`VisionAnalysis::fallback`].
    async fn analyze(&self, image: &str) -> VisionAnalysis {
        match self.try_analyze(image).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(error = %err, "image analysis failed; using fallback");
                VisionAnalysis::fallback()
            }
        }
    }

    /// Analyzes whichever images are present, concurrently. `None` when
    /// neither is given.
    async fn analyze_pair(&self, logo: Option<&str>, photo: Option<&str>) -> Option<CombinedAnalysis> {
        if logo.is_none() && photo.is_none() {
            return None;
        }
        let (logo, photo) = futures::join!(
            async {
                match logo {
                    Some(image) => Some(self.analyze(image).await),
                    None => None,
                }
            },
            async {
                match photo {
                    Some(image) => Some(self.analyze(image).await),
                    None => None,
                }
            },
        );
        Some(CombinedAnalysis::combine(logo, photo))
    }
}

#[derive(Debug, Clone)]
pub struct VisionClient {
    client: Client,
    base_url: String,
}

impl Default for VisionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionClient {
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

    /// True when the analysis backend answers its health probe.
    pub async fn ping(&self) -> bool {
        let url = join_url(&self.base_url, HEALTH_PATH);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(error = %err, "vision health probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl ImageAnalyzer for VisionClient {
    /// `image` is a data URL (`data:image/...;base64,...`) or an image URL;
    /// either is forwarded as a plain-text body.
    async fn try_analyze(&self, image: &str) -> EngineResult<VisionAnalysis> {
        let response = self
            .client
            .post(join_url(&self.base_url, ANALYZE_PATH))
            .header(header::CONTENT_TYPE, "text/plain")
            .header(header::ACCEPT, "application/json")
            .body(image.to_string())
            .send()
            .await
            .map_err(|source| EngineError::network(SERVICE, source))?;

        let payload: Option<VisionPayload> = read_json(SERVICE, response).await?;
        let payload = payload.ok_or_else(|| EngineError::empty(SERVICE))?;
        Ok(payload.into_analysis())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionPayload {
    #[serde(default)]
    scene_type: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    business_type: Option<String>,
    #[serde(default)]
    objects: Option<Vec<String>>,
    #[serde(default)]
    colors: Option<RawPalette>,
}

impl VisionPayload {
    fn into_analysis(self) -> VisionAnalysis {
        let colors = normalize(self.colors.as_ref()).unwrap_or_else(|| {
            tracing::debug!("analysis returned no colors; using neutral palette");
            ColorPalette::neutral()
        });
        VisionAnalysis {
            scene_type: self.scene_type.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            business_type: self.business_type.unwrap_or_default(),
            objects: self.objects.unwrap_or_default(),
            colors,
        }
    }
}
