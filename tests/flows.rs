mod common;

use common::{CSS_PATH, IMAGE_PATH, cafe_request, css_options, image_options, mount_json, settings_for};
use flyer_style::{
    app::{
        pipeline::StylePipeline,
        settings::EngineSettings,
        sourcing::{GenerationMethod, GenerationOrder},
    },
    domain::{
        contrast::ContrastMode,
        language::Language,
        style::{Background, StyleSource},
        typography::TextAlign,
    },
};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn generated_css_flows_through_to_styles() {
    let server = MockServer::start().await;
    mount_json(&server, CSS_PATH, 200, css_options(3)).await;

    let pipeline = StylePipeline::from_settings(&settings_for(&server));
    let outcome = pipeline.run(&cafe_request("he")).await;

    assert_eq!(outcome.method, GenerationMethod::Css);
    assert_eq!(outcome.language, Language::He);
    assert_eq!(outcome.options.len(), 3);
    assert!(outcome.estimated_cost.is_some());

    let first = &outcome.options[0];
    assert_eq!(first.style_name, "Generated 0");
    assert_eq!(first.source, StyleSource::Ai);
    assert!(matches!(first.background, Background::Gradient(_)));
    assert_eq!(first.text_color, "#FFFFFF");
    assert!((first.font_size - 3.5).abs() < f32::EPSILON);
    assert_eq!(first.text_align, TextAlign::Right);
    assert_eq!(first.letter_spacing, "-0.03em");
}

#[tokio::test]
async fn image_first_settings_prefer_image_backgrounds() {
    let server = MockServer::start().await;
    mount_json(&server, CSS_PATH, 200, css_options(3)).await;
    mount_json(&server, IMAGE_PATH, 200, image_options(3)).await;

    let settings = EngineSettings {
        generation_order: GenerationOrder::ImageFirst,
        ..settings_for(&server)
    };
    let outcome = StylePipeline::from_settings(&settings)
        .run(&cafe_request("en"))
        .await;

    assert_eq!(outcome.method, GenerationMethod::Image);
    let first = &outcome.options[0];
    assert_eq!(
        first.background,
        Background::Image("https://images.test/0.png".to_string())
    );
    // Images have no measurable color, so light text is used.
    assert_eq!(first.text_color, "#FFFFFF");
    assert_eq!(first.text_align, TextAlign::Left);
}

#[tokio::test]
async fn dead_backend_still_produces_styles() {
    let server = MockServer::start().await;
    mount_json(&server, CSS_PATH, 500, json!({"error": "boom"})).await;
    mount_json(&server, IMAGE_PATH, 500, json!({"error": "boom"})).await;

    let outcome = StylePipeline::from_settings(&settings_for(&server))
        .run(&cafe_request("ru"))
        .await;

    assert_eq!(outcome.method, GenerationMethod::Fallback);
    assert_eq!(outcome.language, Language::Ru);
    assert_eq!(outcome.options.len(), 3);
    assert!(outcome.error.is_some());
    assert!(
        outcome
            .options
            .iter()
            .all(|option| option.source == StyleSource::Fallback)
    );
}

#[tokio::test]
async fn default_pipeline_never_hits_the_cache() {
    let server = MockServer::start().await;
    mount_json(&server, CSS_PATH, 200, css_options(3)).await;

    let pipeline = StylePipeline::from_settings(&settings_for(&server));
    let first = pipeline.run(&cafe_request("en")).await;
    let second = pipeline.run(&cafe_request("en")).await;

    assert_eq!(first.method, GenerationMethod::Css);
    assert_eq!(second.method, GenerationMethod::Css);
    assert_eq!(common::requests_to(&server, CSS_PATH).await, 2);
}

#[tokio::test]
async fn repeated_requests_are_served_from_cache() {
    let server = MockServer::start().await;
    mount_json(&server, CSS_PATH, 200, css_options(3)).await;

    let pipeline = StylePipeline::cached(&settings_for(&server));
    let first = pipeline.run(&cafe_request("en")).await;
    let second = pipeline.run(&cafe_request("zh")).await;

    assert_eq!(first.method, GenerationMethod::Css);
    assert_eq!(second.method, GenerationMethod::Cache);
    assert_eq!(second.language, Language::Zh);
    assert!(second.estimated_cost.is_none());
    assert_eq!(common::requests_to(&server, CSS_PATH).await, 1);
}

#[tokio::test]
async fn wcag_mode_changes_dark_background_text() {
    let settings = EngineSettings {
        contrast_mode: ContrastMode::Wcag,
        ..EngineSettings::default()
    };
    let mut request = cafe_request("en");
    request.logo_colors = Some(flyer_style::domain::palette::RawPalette {
        background: Some("#101010".to_string()),
        ..Default::default()
    });

    let outcome = StylePipeline::offline(&settings).run(&request).await;
    assert_eq!(outcome.parameters.color_palette.background, "#101010");
    assert_eq!(outcome.parameters.contrast_requirement.text_color, "#FFFFFF");
    assert!(outcome.options.iter().all(|o| o.text_color == "#FFFFFF"));
}
