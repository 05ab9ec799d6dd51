use crate::domain::form::FormErrors;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{service} request failed: {source}")]
    Network {
        service: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status}: {message}")]
    Provider {
        service: String,
        status: u16,
        message: String,
    },

    #[error("{service} rate limit exceeded (429)")]
    RateLimited { service: String },

    #[error("failed to parse {service} response: {message}")]
    Parse { service: String, message: String },

    #[error("{service} returned no results")]
    EmptyResponse { service: String },

    #[error("invalid form: {0}")]
    Validation(FormErrors),

    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn network(service: &str, source: reqwest::Error) -> Self {
        Self::Network {
            service: service.to_string(),
            source,
        }
    }

    pub(crate) fn parse(service: &str, message: impl ToString) -> Self {
        Self::Parse {
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn empty(service: &str) -> Self {
        Self::EmptyResponse {
            service: service.to_string(),
        }
    }

    /// Rate limiting is recognized by variant, or by `429`/`rate limit`
    /// anywhere in the message of any other error.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        if matches!(self, Self::RateLimited { .. }) {
            return true;
        }
        let message = self.to_string().to_ascii_lowercase();
        message.contains("429") || message.contains("rate limit")
    }
}
