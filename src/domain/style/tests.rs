use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::domain::language::{Language, LanguageConfig};

fn hebrew() -> LanguageConfig {
    LanguageConfig::for_language(Language::He)
}

fn english() -> LanguageConfig {
    LanguageConfig::for_language(Language::En)
}

#[test]
fn empty_input_yields_five_presets_in_order() {
    let styles = assemble(&[], &hebrew());
    let names: Vec<&str> = styles.iter().map(|s| s.style_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Professional Clean",
            "Elegant Sophisticated",
            "Bold Modern",
            "Warm Natural",
            "Tech Minimal",
        ]
    );
    assert!(styles.iter().all(|s| s.pattern == "none"));
    assert!(styles.iter().all(|s| s.source == StyleSource::Default));
}

#[test]
fn presets_follow_language_alignment_except_elegant() {
    for (language, base) in [(hebrew(), TextAlign::Right), (english(), TextAlign::Left)] {
        for style in assemble(&[], &language) {
            let expected = if style.style_name == "Elegant Sophisticated" {
                TextAlign::Center
            } else {
                base
            };
            assert_eq!(style.text_align, expected, "{}", style.style_name);
        }
    }
}

#[test]
fn professional_clean_is_a_solid_white_preset() {
    let styles = default_presets(&english());
    assert_eq!(styles[0].background, Background::Solid("#ffffff".to_string()));
    assert!(matches!(styles[2].background, Background::Gradient(_)));
}

#[test]
fn empty_raw_entry_gets_every_default() {
    let styles = assemble(&[RawOption::default()], &hebrew());
    assert_eq!(styles.len(), 1);

    let style = &styles[0];
    assert_eq!(style.background, Background::Solid("#FFFFFF".to_string()));
    assert_eq!(style.text_color, "#333333");
    assert_eq!(style.accent_color, DEFAULT_ACCENT);
    assert_eq!(style.primary_color, DEFAULT_PRIMARY);
    assert_eq!(style.secondary_color, DEFAULT_SECONDARY);
    assert_eq!(style.font_family, DEFAULT_FONT_FAMILY);
    assert!((style.font_size - DEFAULT_FONT_SIZE).abs() < f32::EPSILON);
    assert!((style.body_font_size - DEFAULT_BODY_FONT_SIZE).abs() < f32::EPSILON);
    assert_eq!(style.pattern, "none");
    assert_eq!(style.style_name, "Style 1");
    assert_eq!(style.description, "AI Generated Style 1");
    assert_eq!(style.source, StyleSource::Ai);
    assert_eq!(style.text_align, TextAlign::Right);
}

#[test]
fn background_arms_are_chosen_by_priority() {
    let image = RawOption {
        background_image: Some("https://cdn.example/bg.png".to_string()),
        background_css: Some("linear-gradient(#000000, #111111)".to_string()),
        ..RawOption::default()
    };
    let none_image = RawOption {
        background_image: Some("none".to_string()),
        background_css: Some("linear-gradient(90deg, #101010, #202020)".to_string()),
        ..RawOption::default()
    };
    let solid_css = RawOption {
        background_css: Some("#123456".to_string()),
        background_color: Some("#654321".to_string()),
        ..RawOption::default()
    };
    let color_only = RawOption {
        background_color: Some("#654321".to_string()),
        ..RawOption::default()
    };

    let styles = assemble(&[image, none_image, solid_css, color_only], &english());
    assert!(matches!(&styles[0].background, Background::Image(url) if url.ends_with("bg.png")));
    assert!(matches!(&styles[1].background, Background::Gradient(css) if css.contains("#101010")));
    assert_eq!(styles[2].background, Background::Solid("#123456".to_string()));
    assert_eq!(styles[3].background, Background::Solid("#654321".to_string()));
}

#[test]
fn missing_text_color_is_resolved_from_background() {
    let dark_gradient = RawOption {
        background_css: Some("linear-gradient(135deg, #101010 0%, #F0F0F0 100%)".to_string()),
        ..RawOption::default()
    };
    let light_solid = RawOption {
        background_color: Some("#FAFAFA".to_string()),
        ..RawOption::default()
    };
    let image = RawOption {
        background_image: Some("https://cdn.example/bg.png".to_string()),
        ..RawOption::default()
    };

    let styles = assemble(&[dark_gradient, light_solid, image], &english());
    assert_eq!(styles[0].text_color, "#FFFFFF");
    assert_eq!(styles[1].text_color, "#333333");
    assert_eq!(styles[2].text_color, "#FFFFFF");
}

#[test]
fn supplied_text_color_is_kept() {
    let raw = RawOption {
        background_color: Some("#000000".to_string()),
        text_color: Some("#FFEE00".to_string()),
        ..RawOption::default()
    };
    assert_eq!(assemble(&[raw], &english())[0].text_color, "#FFEE00");
}

#[test]
fn typography_from_font_overrides_raw_fields() {
    let raw: RawOption = serde_json::from_value(serde_json::json!({
        "fontFamily": "Georgia, serif",
        "letterSpacing": "0.5em",
        "lineHeight": 3,
        "textAlign": "left",
    }))
    .expect("raw option");

    let style = &assemble(&[raw], &hebrew())[0];
    assert_eq!(style.letter_spacing, "0.01em");
    assert_eq!(style.line_height, "1.2");
    assert_eq!(style.text_align, TextAlign::Center);
}

#[test]
fn style_name_prefers_style_name_then_name_then_index() {
    let named = RawOption {
        name: Some("Sunset".to_string()),
        ..RawOption::default()
    };
    let both = RawOption {
        name: Some("Sunset".to_string()),
        style_name: Some("Golden Hour".to_string()),
        ..RawOption::default()
    };
    let styles = assemble(&[named, both, RawOption::default()], &english());
    assert_eq!(styles[0].style_name, "Sunset");
    assert_eq!(styles[1].style_name, "Golden Hour");
    assert_eq!(styles[2].style_name, "Style 3");
    assert_eq!(styles[2].description, "AI Generated Style 3");
}

#[test]
fn source_tag_maps_known_values() {
    let with_source = |source: &str| RawOption {
        source: Some(source.to_string()),
        ..RawOption::default()
    };
    let styles = assemble(
        &[with_source("fallback"), with_source("default"), with_source("gpt")],
        &english(),
    );
    assert_eq!(styles[0].source, StyleSource::Fallback);
    assert_eq!(styles[1].source, StyleSource::Default);
    assert_eq!(styles[2].source, StyleSource::Ai);
}

#[test]
fn raw_json_tolerates_odd_numbers_and_unknown_fields() {
    let raw: Vec<RawOption> = serde_json::from_str(
        r##"[
            {"backgroundCSS": "#222222", "fontSize": "3.2", "bodyFontSize": "big", "mood": "calm"},
            {"patternCSS": "radial-gradient(circle, #fff 0%, transparent 50%)", "fontSize": -1}
        ]"##,
    )
    .expect("raw options");

    let styles = assemble(&raw, &english());
    assert!((styles[0].font_size - 3.2).abs() < 1e-6);
    assert!((styles[0].body_font_size - DEFAULT_BODY_FONT_SIZE).abs() < f32::EPSILON);
    assert!((styles[1].font_size - DEFAULT_FONT_SIZE).abs() < f32::EPSILON);
    assert!(styles[1].pattern.starts_with("radial-gradient"));
}

#[test]
fn business_presets_use_the_lookup_table() {
    let names = |business: &str| -> Vec<String> {
        presets_for_business(business, &english())
            .into_iter()
            .map(|s| s.style_name)
            .collect()
    };
    assert_eq!(names("cafe"), vec!["Elegant Sophisticated", "Warm Natural"]);
    assert_eq!(names("tech"), vec!["Tech Minimal", "Professional Clean"]);
    assert_eq!(
        names("bakery"),
        vec!["Professional Clean", "Elegant Sophisticated", "Bold Modern"]
    );
}

#[test]
fn random_presets_are_distinct_and_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    let picked = random_presets(3, &english(), &mut rng);
    assert_eq!(picked.len(), 3);
    let mut names: Vec<&str> = picked.iter().map(|s| s.style_name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 3);

    assert_eq!(random_presets(10, &english(), &mut rng).len(), PRESETS.len());
}

#[test]
fn background_css_renders_images_as_urls() {
    assert_eq!(
        Background::Image("https://x/y.png".to_string()).css(),
        "url(https://x/y.png)"
    );
    assert_eq!(Background::Solid("#fff".to_string()).css(), "#fff");
}
