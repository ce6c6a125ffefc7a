//! Drives a carousel through a swipe without any UI and prints each frame's
//! track style.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_rs::api::{CarouselConfig, CarouselEngine, InputEvent, QueuedInputSource, TouchPoint};
use carousel_rs::extensions::{Plugin, RenderFragment, StrategyContribution};
use carousel_rs::render::NullRenderer;
use carousel_rs::telemetry::init_tracing_with_fallback;
use serde_json::json;

fn main() -> carousel_rs::CarouselResult<()> {
    let _ = init_tracing_with_fallback("carousel_rs=debug");

    let slides = (1..=5).map(|n| json!({ "title": format!("Slide {n}") }));
    let config = CarouselConfig::new(slides).with_offset(16.0);
    let mut engine = CarouselEngine::new(NullRenderer::default(), config);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    engine.set_on_change(move |index| sink.borrow_mut().push(index));

    engine.register_named_plugin("clickToChange")?;
    engine.register_plugin(
        "dots",
        Plugin::descriptor(
            |_config, options, _container, _track| {
                Ok(StrategyContribution::default()
                    .with_after_fragment(RenderFragment::new("dots", options.clone())))
            },
            json!({ "style": "round" }),
        ),
    )?;

    let mut input: QueuedInputSource = [
        InputEvent::Resize { width_px: 360.0 },
        InputEvent::TouchStart {
            index: 0,
            changed_touches: vec![TouchPoint::new(1, 300.0)],
        },
        InputEvent::TouchMove {
            changed_touches: vec![TouchPoint::new(1, 180.0)],
        },
        InputEvent::TouchMove {
            changed_touches: vec![TouchPoint::new(1, 90.0)],
        },
        InputEvent::TouchEnd {
            changed_touches: vec![TouchPoint::new(1, 90.0)],
        },
    ]
    .into_iter()
    .collect();

    for outcome in engine.pump(&mut input) {
        engine.render()?;
        let style = engine.track_style();
        println!(
            "{outcome:?}: width={} transform={} transition={:?}",
            style.width, style.transform, style.transition_duration
        );
    }

    println!("change requests: {:?}", changes.borrow());
    println!("{}", engine.snapshot_json_pretty()?);
    Ok(())
}
