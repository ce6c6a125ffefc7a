mod config_resolver;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod event_bridge;
mod invalidation;
mod layout_coordinator;
mod movement_controller;
mod plugin_dispatch;
mod plugin_registry;
mod slides_controller;
mod snapshot_json;

pub use config_resolver::ConfigDiagnostic;
pub use engine::CarouselEngine;
pub use engine_config::{BreakpointConfig, CarouselConfig};
pub use engine_snapshot::CarouselSnapshot;
pub use event_bridge::{
    EventOutcome, InputEvent, InputSource, NormalizedInput, PointerEvent, QueuedInputSource,
    TouchPoint,
};
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use snapshot_json::CAROUSEL_SNAPSHOT_SCHEMA_VERSION;
