use tracing::debug;

use crate::core::{ElementRef, SlideCollection, TrackGeometry};
use crate::extensions::{StrategyContribution, StrategyRegistry};
use crate::interaction::MovementStateMachine;
use crate::render::Renderer;

use super::config_resolver::resolve_effective_config;
use super::{CarouselConfig, CarouselEngine, InvalidationTopics, engine_core::EngineCore};

impl<R: Renderer> CarouselEngine<R> {
    /// Creates an engine with the built-in strategy registry.
    ///
    /// Invalid configuration values are coerced, never rejected; inspect
    /// [`Self::config_diagnostics`] for what was changed.
    pub fn new(renderer: R, config: CarouselConfig) -> Self {
        Self::with_registry(renderer, config, StrategyRegistry::with_builtins())
    }

    /// Creates an engine resolving named plugins through `registry`.
    pub fn with_registry(renderer: R, config: CarouselConfig, registry: StrategyRegistry) -> Self {
        let (effective, config_diagnostics) = resolve_effective_config(&config, None);
        let slides = SlideCollection::from_contents(config.slides.iter().cloned());

        let mut engine = Self {
            renderer,
            core: EngineCore {
                base_config: config,
                config: effective,
                config_diagnostics,
                slides,
                movement: MovementStateMachine::default(),
                internal_index: 0,
                container: ElementRef::default(),
                geometry: TrackGeometry::default(),
                item_width_px: 0.0,
                plugins: Vec::new(),
                registry,
                contribution: StrategyContribution::default(),
                plugin_diagnostics: Vec::new(),
                plugins_fresh: false,
                on_change: None,
                pending: InvalidationTopics::all(),
            },
        };
        engine.resolve_plugins();
        engine.recompute_layout();
        debug!(
            slide_count = engine.core.slides.len(),
            diagnostics = engine.core.config_diagnostics.len(),
            "carousel engine initialized"
        );
        engine
    }
}
