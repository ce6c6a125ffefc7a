use approx::assert_relative_eq;
use carousel_rs::api::{BreakpointConfig, CarouselConfig, CarouselEngine};
use carousel_rs::error::CarouselError;
use carousel_rs::render::NullRenderer;
use serde_json::json;

fn slides(count: usize) -> Vec<serde_json::Value> {
    (0..count).map(|i| json!({ "id": i })).collect()
}

#[test]
fn json_config_uses_defaults_for_missing_fields() {
    let config = CarouselConfig::from_json_str("{}").expect("empty object is valid");
    assert!(config.draggable);
    assert_eq!(config.animation_speed_ms, 500);
    assert_eq!(config.slides_per_page, 1);
    assert_eq!(config.offset, 0.0);
    assert_eq!(config.value, None);
    assert!(config.breakpoints.is_empty());
}

#[test]
fn json_config_parses_breakpoints_and_compacts_null_slides() {
    let config = CarouselConfig::from_json_str(
        r#"{
            "slides": [{"title": "one"}, null, {"title": "three"}],
            "offset": 8,
            "breakpoints": { "640": { "slides_per_page": 2, "draggable": false } }
        }"#,
    )
    .expect("valid config");
    assert_eq!(config.breakpoints[&640].slides_per_page, Some(2));

    let engine = CarouselEngine::new(NullRenderer::default(), config);
    assert_eq!(engine.slide_count(), 2);
    let indices: Vec<usize> = engine.slides().iter().map(|slide| slide.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(engine.slides().as_slice()[1].content, json!({ "title": "three" }));
}

#[test]
fn malformed_json_config_is_rejected() {
    let err = CarouselConfig::from_json_str("{\"draggable\": \"yes\"}")
        .expect_err("string is not a bool");
    assert!(matches!(err, CarouselError::InvalidConfiguration(_)));
}

#[test]
fn config_json_round_trips() {
    let config = CarouselConfig::new(slides(2))
        .with_offset(4.0)
        .with_class_name("gallery")
        .with_breakpoint(
            480,
            BreakpointConfig {
                item_width: Some(120.0),
                ..BreakpointConfig::default()
            },
        );
    let json = config.to_json_pretty().expect("serialize");
    let restored = CarouselConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn invalid_values_are_coerced_with_diagnostics() {
    let config = CarouselConfig::new(slides(3))
        .with_item_width(f64::NAN)
        .with_width(-10.0)
        .with_slides_per_page(0);
    let engine = CarouselEngine::new(NullRenderer::default(), config);

    let fields: Vec<&str> = engine
        .config_diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.field.as_str())
        .collect();
    assert_eq!(fields, vec!["item_width", "width", "slides_per_page"]);
    assert_eq!(engine.config().item_width, None);
    assert_eq!(engine.config().width, None);
    assert_eq!(engine.config().slides_per_page, 1);
    assert!(engine.base_config().item_width.is_some());
    assert_relative_eq!(engine.track_width(), 0.0);
}

#[test]
fn breakpoint_overrides_follow_measured_width() {
    let config = CarouselConfig::new(slides(6))
        .with_slides_per_page(3)
        .with_breakpoint(
            640,
            BreakpointConfig {
                slides_per_page: Some(2),
                ..BreakpointConfig::default()
            },
        );
    let mut engine = CarouselEngine::new(NullRenderer::default(), config);

    engine.on_width_change(600.0);
    assert_eq!(engine.config().slides_per_page, 2);
    assert_relative_eq!(engine.item_width(), 300.0);
    assert_relative_eq!(engine.track_width(), 3600.0);

    engine.on_width_change(1000.0);
    assert_eq!(engine.config().slides_per_page, 3);
    assert_relative_eq!(engine.item_width(), 1000.0 / 3.0, epsilon = 1e-9);
    assert_eq!(engine.base_config().slides_per_page, 3);
}

#[test]
fn breakpoint_can_disable_dragging() {
    let config = CarouselConfig::new(slides(3)).with_width(400.0).with_breakpoint(
        480,
        BreakpointConfig {
            draggable: Some(false),
            ..BreakpointConfig::default()
        },
    );
    let mut engine = CarouselEngine::new(NullRenderer::default(), config);
    assert!(!engine.config().draggable);
    assert!(
        !engine
            .track_class_names()
            .contains(&"Carousel__track--draggable".to_owned())
    );

    engine.begin_drag(0, 400.0);
    engine.update_drag(0.0);
    assert_eq!(engine.end_drag(), None);
}

#[test]
fn set_config_rebuilds_slides_and_animates_value_change() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(3)).with_width(300.0).with_value(0),
    );
    assert!(!engine.transition_enabled());

    engine.set_config(CarouselConfig::new(slides(5)).with_width(300.0).with_value(4));
    assert_eq!(engine.slide_count(), 5);
    assert_eq!(engine.active_index(), 4);
    assert!(engine.transition_enabled());
    assert_relative_eq!(engine.geometry().transform_px, -1200.0);
}

#[test]
fn set_config_without_value_change_keeps_transitions_off() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(3)).with_width(300.0).with_value(1),
    );
    engine.set_config(CarouselConfig::new(slides(3)).with_width(200.0).with_value(1));
    assert!(!engine.transition_enabled());
    assert_relative_eq!(engine.track_width(), 600.0);
}

#[test]
fn set_value_validates_range() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(3)).with_width(300.0),
    );
    let err = engine.set_value(7).expect_err("out of range");
    assert_eq!(
        err,
        CarouselError::InvalidSlideIndex {
            index: 7,
            slide_count: 3
        }
    );
    assert_eq!(engine.value(), None);

    engine.set_value(2).expect("in range");
    assert_eq!(engine.value(), Some(2));
}

#[test]
fn shrinking_slides_clamps_active_index() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(5)).with_width(100.0).with_value(4),
    );
    engine.set_slides(slides(2));
    assert_eq!(engine.active_index(), 1);
    engine.set_slides(Vec::new());
    assert_eq!(engine.active_index(), 0);
}
