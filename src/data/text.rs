use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS, build_client, join_url, read_json};
use crate::domain::language::Language;
use crate::error::{EngineError, EngineResult};

pub const TEMPERATURE: f32 = 0.7;
const MAX_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextProvider {
    OpenAi,
    Claude,
    Groq,
    Gemini,
}

impl TextProvider {
    pub const ALL: [Self; 4] = [Self::OpenAi, Self::Claude, Self::Groq, Self::Gemini];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
            Self::Groq => "groq",
            Self::Gemini => "gemini",
        }
    }
}

/// One entry per provider; failures are carried as localized messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedTexts {
    pub openai: String,
    pub claude: String,
    pub groq: String,
    pub gemini: String,
}

impl GeneratedTexts {
    fn slot(&mut self, provider: TextProvider) -> &mut String {
        match provider {
            TextProvider::OpenAi => &mut self.openai,
            TextProvider::Claude => &mut self.claude,
            TextProvider::Groq => &mut self.groq,
            TextProvider::Gemini => &mut self.gemini,
        }
    }

    #[must_use]
    pub fn get(&self, provider: TextProvider) -> &str {
        match provider {
            TextProvider::OpenAi => &self.openai,
            TextProvider::Claude => &self.claude,
            TextProvider::Groq => &self.groq,
            TextProvider::Gemini => &self.gemini,
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, provider: TextProvider, prompt: &str) -> EngineResult<String>;
}

#[derive(Debug, Clone)]
pub struct TextClient {
    client: Client,
    base_url: String,
}

impl Default for TextClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClient {
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
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    generated_text: Option<String>,
}

#[async_trait]
impl TextGenerator for TextClient {
    async fn generate(&self, provider: TextProvider, prompt: &str) -> EngineResult<String> {
        let service = provider.slug();
        let url = join_url(&self.base_url, &format!("/api/v1/{service}/generate"));
        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                prompt,
                temperature: TEMPERATURE,
            })
            .send()
            .await
            .map_err(|source| EngineError::network(service, source))?;

        let payload: GenerateResponse = read_json(service, response).await?;
        payload
            .generated_text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| EngineError::empty(service))
    }
}

/// Asks every provider at once for two promotional lines about the flyer.
/// Each provider always gets an entry, even when its call fails.
pub async fn generate_all<G>(
    generator: &G,
    title: &str,
    promotional_text: &str,
    language: Language,
) -> GeneratedTexts
where
    G: TextGenerator + ?Sized,
{
    let hebrew = language == Language::He;
    let subject = if promotional_text.trim().is_empty() {
        title
    } else {
        promotional_text
    };
    let prompt = promotion_prompt(subject, hebrew);

    let tasks = TextProvider::ALL.map(|provider| {
        let prompt = prompt.as_str();
        async move {
            let text = match generator.generate(provider, prompt).await {
                Ok(text) => clean_generated_text(&text, hebrew),
                Err(err) => {
                    tracing::warn!(provider = provider.slug(), error = %err, "text generation failed");
                    localized_error(&err, provider.slug(), hebrew)
                }
            };
            (provider, text)
        }
    });

    let mut texts = GeneratedTexts::default();
    for (provider, text) in join_all(tasks).await {
        *texts.slot(provider) = text;
    }
    texts
}

fn promotion_prompt(subject: &str, hebrew: bool) -> String {
    if hebrew {
        format!("כתוב טקסט פרסומי ושיווקי קצר בשתי שורות עבור: {subject}")
    } else {
        format!("Write a short promotional text in two lines for: {subject}")
    }
}

#[must_use]
pub fn localized_error(err: &EngineError, service: &str, hebrew: bool) -> String {
    match (err.is_rate_limited(), hebrew) {
        (true, true) => format!("חריגה ממגבלת קריאות {service} - נסה שוב מאוחר יותר"),
        (true, false) => format!("{service} rate limit exceeded - try again later"),
        (false, true) => format!("שגיאה בקבלת תוצאות מ-{service}"),
        (false, false) => format!("Error getting results from {service}"),
    }
}

/// Normalizes model output to exactly two lines.
///
/// Leading punctuation is removed, and so is a first line that is only a
/// `Here is your text:` style lead-in. Text that already reads as an error
/// is returned as-is.
#[must_use]
pub fn clean_generated_text(text: &str, hebrew: bool) -> String {
    if text.contains("rate limit") || text.contains("שגיאה") || text.contains("Error") {
        return text.to_string();
    }

    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let prefix = PREFIX.get_or_init(|| {
        Regex::new(r"^\W*(?:[^:\n]*:[ \t]*\n)?").expect("static prefix pattern")
    });
    let stripped = prefix.replace(text, "");

    let mut lines: Vec<&str> = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_LINES)
        .collect();
    if lines.len() < MAX_LINES {
        lines.push(if hebrew {
            "בואו לגלות עוד!"
        } else {
            "Come discover more!"
        });
    }
    lines.join("\n")
}
