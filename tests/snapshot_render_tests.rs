use carousel_rs::api::{
    CAROUSEL_SNAPSHOT_SCHEMA_VERSION, CarouselConfig, CarouselEngine, CarouselSnapshot,
    InvalidationTopic,
};
use carousel_rs::error::CarouselError;
use carousel_rs::extensions::{Plugin, StrategyContribution};
use carousel_rs::interaction::MovementPhase;
use carousel_rs::render::NullRenderer;
use serde_json::json;

fn slides(count: usize) -> Vec<serde_json::Value> {
    (0..count).map(|i| json!({ "id": i })).collect()
}

fn dragged_engine() -> CarouselEngine<NullRenderer> {
    let config = CarouselConfig::new(slides(4)).with_width(300.0).with_offset(6.0);
    let mut engine = CarouselEngine::new(NullRenderer::default(), config);
    engine.register_named_plugin("clickToChange").expect("builtin");
    engine.register_named_plugin("missing").expect("registration succeeds");
    engine.begin_drag(1, 200.0);
    engine.update_drag(150.0);
    engine
}

#[test]
fn snapshot_captures_session_and_plugins() {
    let snapshot = dragged_engine().snapshot();
    assert_eq!(snapshot.phase, MovementPhase::Dragging);
    assert_eq!(snapshot.movement.clicked_index, Some(1));
    assert_eq!(snapshot.slide_count, 4);
    assert_eq!(snapshot.observed_width_px, Some(300.0));
    assert_eq!(snapshot.plugin_ids, vec!["clickToChange", "missing"]);
    assert_eq!(snapshot.failed_plugin_ids, vec!["missing"]);
    assert_eq!(snapshot.track_style.transform, "translateX(-50px)");
}

#[test]
fn versioned_snapshot_json_round_trips() {
    let engine = dragged_engine();
    let json = engine.snapshot_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], json!(CAROUSEL_SNAPSHOT_SCHEMA_VERSION));

    let restored = CarouselSnapshot::from_json_str(&json).expect("parse versioned");
    assert_eq!(restored, engine.snapshot());
}

#[test]
fn snapshot_parser_accepts_bare_payload() {
    let snapshot = dragged_engine().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize");
    let restored = CarouselSnapshot::from_json_str(&bare).expect("parse bare");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_parser_rejects_unknown_schema() {
    let snapshot = dragged_engine().snapshot();
    let payload = json!({ "schema_version": 2, "snapshot": snapshot });
    let err = CarouselSnapshot::from_json_str(&payload.to_string())
        .expect_err("future schema");
    match err {
        CarouselError::InvalidData(message) => assert!(message.contains("schema version")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn snapshot_parser_reports_missing_payload_and_bad_json() {
    let missing = CarouselSnapshot::from_json_str(r#"{ "schema_version": 1 }"#)
        .expect_err("no snapshot field");
    assert!(matches!(missing, CarouselError::InvalidData(ref m) if m.contains("missing")));

    let garbage = CarouselSnapshot::from_json_str("not json").expect_err("invalid json");
    assert!(matches!(garbage, CarouselError::InvalidData(_)));

    let fractional = CarouselSnapshot::from_json_str(r#"{ "schema_version": 1.5, "snapshot": {} }"#)
        .expect_err("non-integer version");
    assert!(matches!(fractional, CarouselError::InvalidData(ref m) if m.contains("integer")));
}

#[test]
fn render_hands_complete_frame_to_renderer() {
    let config = CarouselConfig::new(slides(3))
        .with_width(300.0)
        .with_offset(10.0)
        .with_value(1)
        .with_class_name("gallery");
    let mut engine = CarouselEngine::new(NullRenderer::default(), config);
    engine
        .register_plugin(
            "theme",
            Plugin::descriptor(
                |_, _, _, _| {
                    Ok(StrategyContribution::default()
                        .with_class_name("Carousel--dark")
                        .with_item_class_name("CarouselItem--dark")
                        .with_custom_prop("aria-label", json!("Gallery")))
                },
                serde_json::Value::Null,
            ),
        )
        .expect("register theme");
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered(), 1);
    assert_eq!(renderer.last_item_count(), 3);
    assert_eq!(renderer.last_active_index(), Some(1));
    let frame = renderer.last_frame().expect("frame stored");
    assert_eq!(frame.container_class_names, vec!["Carousel", "gallery", "Carousel--dark"]);
    assert_eq!(
        frame.track_class_names,
        vec!["Carousel__track", "Carousel__track--draggable"]
    );
    assert_eq!(frame.custom_props.get("aria-label"), Some(&json!("Gallery")));
    assert_eq!(frame.track_style.transform, "translateX(-310px)");

    let active = frame.active_item().expect("active item");
    assert_eq!(active.index, 1);
    assert_eq!(
        active.class_names,
        vec!["CarouselItem", "CarouselItem--active", "CarouselItem--dark"]
    );
    assert_eq!(active.content, json!({ "id": 1 }));
    assert!(active.dragging_enabled);
}

#[test]
fn render_clears_pending_invalidation() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(2)).with_width(200.0),
    );
    assert!(engine.pending_invalidation().contains_topic(InvalidationTopic::Slides));
    engine.render().expect("render");
    assert!(engine.pending_invalidation().is_none());

    engine.begin_drag(0, 50.0);
    assert!(engine.pending_invalidation().contains_topic(InvalidationTopic::Movement));
    engine.set_value(1).expect("valid index");
    assert!(engine.pending_invalidation().contains_topic(InvalidationTopic::Value));
}

#[test]
fn transition_class_tracks_transition_state() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        CarouselConfig::new(slides(1)).with_width(200.0),
    );
    assert_eq!(engine.track_class_names(), vec!["Carousel__track"]);

    engine.set_value(0).expect("valid index");
    engine.render().expect("render");
    let frame = engine.renderer().last_frame().cloned().expect("frame stored");
    assert_eq!(
        frame.track_class_names,
        vec!["Carousel__track", "Carousel__track--transition"]
    );
}

#[test]
fn empty_carousel_renders_without_items() {
    let mut engine = CarouselEngine::new(NullRenderer::default(), CarouselConfig::default());
    engine.render().expect("render");
    let mut renderer = engine.into_renderer();
    assert_eq!(renderer.last_item_count(), 0);
    assert_eq!(renderer.last_active_index(), None);
    let frame = renderer.take_last_frame().expect("frame stored");
    assert!(renderer.last_frame().is_none());
    assert!(frame.active_item().is_none());
    assert_eq!(frame.track_style.width, "0px");
}
