#![allow(dead_code)]

use flyer_style::{
    app::settings::EngineSettings,
    domain::params::{BackgroundParameters, FlyerRequest},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const CSS_PATH: &str = "/api/backgrounds/generate";
pub const IMAGE_PATH: &str = "/api/backgrounds/generate-images";
pub const VISION_PATH: &str = "/api/vision/analyze";

pub fn cafe_request(language: &str) -> FlyerRequest {
    FlyerRequest {
        business_type: Some("cafe".to_string()),
        target_audience: Some("families".to_string()),
        color_scheme: Some("warm".to_string()),
        language: Some(language.to_string()),
        ..FlyerRequest::default()
    }
}

pub fn cafe_parameters() -> BackgroundParameters {
    BackgroundParameters::from_request(&cafe_request("en"))
}

pub fn settings_for(server: &MockServer) -> EngineSettings {
    EngineSettings {
        backend_url: server.uri(),
        request_timeout_secs: 5,
        ..EngineSettings::default()
    }
}

/// `count` CSS candidates as a generation service would send them.
pub fn css_options(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "name": format!("Generated {i}"),
                    "backgroundCSS": "linear-gradient(135deg, #FF6B35, #F7931E)",
                    "textColor": "#FFFFFF",
                    "fontFamily": "Montserrat, sans-serif",
                    "fontSize": "3.5",
                })
            })
            .collect(),
    )
}

pub fn image_options(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "name": format!("Image {i}"),
                    "backgroundImage": format!("https://images.test/{i}.png"),
                    "backgroundColor": "#222222",
                })
            })
            .collect(),
    )
}

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn requests_to(server: &MockServer, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == route)
        .count()
}
