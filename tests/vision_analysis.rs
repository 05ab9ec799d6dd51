mod common;

use common::{VISION_PATH, mount_json};
use flyer_style::{
    data::vision::{
        FALLBACK_BUSINESS_TYPE, FALLBACK_DESCRIPTION, ImageAnalyzer, VisionAnalysis, VisionClient,
    },
    domain::palette::ColorPalette,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

#[tokio::test]
async fn analysis_is_posted_as_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .and(header("content-type", "text/plain"))
        .and(body_string_contains("data:image/png;base64,"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sceneType": "indoor",
            "description": "A bright cafe counter",
            "businessType": "cafe",
            "objects": ["cup", "counter"],
            "colors": {"primary": "#6F4E37", "background": "#FFF8E7"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = VisionClient::with_base_url(server.uri())
        .analyze("data:image/png;base64,iVBORw0KGgo=")
        .await;

    assert_eq!(analysis.business_type, "cafe");
    assert_eq!(analysis.colors.primary, "#6F4E37");
    assert_eq!(analysis.colors.background, "#FFF8E7");
    assert!(!analysis.colors.dominant_colors.is_empty());
}

#[tokio::test]
async fn missing_colors_become_neutral() {
    let server = MockServer::start().await;
    mount_json(&server, VISION_PATH, 200, json!({"sceneType": "outdoor"})).await;

    let analysis = VisionClient::with_base_url(server.uri())
        .analyze("https://img.test/a.png")
        .await;
    assert_eq!(analysis.scene_type, "outdoor");
    assert_eq!(analysis.colors, ColorPalette::neutral());
}

#[tokio::test]
async fn service_failure_yields_fallback_analysis() {
    let server = MockServer::start().await;
    mount_json(&server, VISION_PATH, 503, json!({"error": "down"})).await;

    let analysis = VisionClient::with_base_url(server.uri())
        .analyze("https://img.test/a.png")
        .await;
    assert_eq!(analysis, VisionAnalysis::fallback());
    assert_eq!(analysis.description, FALLBACK_DESCRIPTION);
    assert_eq!(analysis.business_type, FALLBACK_BUSINESS_TYPE);
    assert_eq!(analysis.objects, vec!["general".to_string()]);
}

#[tokio::test]
async fn logo_and_photo_are_combined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .and(body_string_contains("logo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": "Round brown logo",
            "businessType": "bakery",
            "colors": {"dominantColors": ["#111111", "#EEEEEE"]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .and(body_string_contains("photo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sceneType": "indoor",
            "description": "Shelves of bread",
            "objects": ["bread"],
            "colors": {"dominantColors": ["#222222"], "background": "#FAFAFA"}
        })))
        .mount(&server)
        .await;

    let combined = VisionClient::with_base_url(server.uri())
        .analyze_pair(Some("https://img.test/logo.png"), Some("https://img.test/photo.png"))
        .await
        .expect("two images were given");

    assert_eq!(combined.business_type, "bakery");
    assert_eq!(combined.scene_type, "indoor");
    assert_eq!(combined.objects, vec!["bread".to_string()]);
    assert_eq!(
        combined.description,
        "Logo: Round brown logo. Scene: Shelves of bread"
    );
    let colors = combined.colors.expect("colors");
    assert_eq!(colors.primary, "#111111");
    assert_eq!(colors.accent, "#EEEEEE");
    assert_eq!(colors.secondary, "#222222");
    assert_eq!(colors.background, "#FAFAFA");
}

#[tokio::test]
async fn no_images_means_no_analysis() {
    let client = VisionClient::with_base_url("http://127.0.0.1:9");
    assert!(client.analyze_pair(None, None).await.is_none());
}

#[tokio::test]
async fn ping_reports_backend_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vision/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert!(VisionClient::with_base_url(server.uri()).ping().await);
    assert!(!VisionClient::with_base_url("http://127.0.0.1:9").ping().await);
}
