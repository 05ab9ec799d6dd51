use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest provider error body kept in an error message.
const MAX_ERROR_BODY: usize = 240;

pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Reads a JSON body, mapping non-success statuses onto the error taxonomy.
pub(crate) async fn read_json<T>(service: &str, response: Response) -> EngineResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| EngineError::network(service, source))?;

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(EngineError::RateLimited {
            service: service.to_string(),
        });
    }
    if !status.is_success() {
        let message: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
        return Err(EngineError::Provider {
            service: service.to_string(),
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|err| EngineError::parse(service, err))
}
