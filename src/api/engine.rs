use tracing::{debug, trace};

use crate::error::CarouselResult;
use crate::render::Renderer;

use super::config_resolver::resolve_effective_config;
use super::{
    CarouselConfig, ConfigDiagnostic, InvalidationTopic, InvalidationTopics,
    engine_core::EngineCore,
};

/// Main orchestration facade consumed by host applications.
///
/// `CarouselEngine` owns the movement state machine, the slide collection,
/// registered plugins and the last computed track geometry. Every mutating
/// call recomputes geometry before returning, so reads always observe the
/// latest state.
pub struct CarouselEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> CarouselEngine<R> {
    /// Recomputes geometry and hands the frame to the renderer.
    ///
    /// Plugins resolve here unless a mutation since the previous render
    /// already resolved them, so each render pass sees one resolution.
    pub fn render(&mut self) -> CarouselResult<()> {
        if !self.core.plugins_fresh {
            self.resolve_plugins();
        }
        self.recompute_layout();
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        trace!(
            items = frame.items.len(),
            transform_px = frame.geometry.transform_px,
            "rendered carousel frame"
        );
        self.core.pending = InvalidationTopics::none();
        self.core.plugins_fresh = false;
        Ok(())
    }

    /// Configuration currently in effect (sanitized, breakpoint applied).
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.core.config
    }

    /// Configuration exactly as supplied by the host.
    #[must_use]
    pub fn base_config(&self) -> &CarouselConfig {
        &self.core.base_config
    }

    #[must_use]
    pub fn config_diagnostics(&self) -> &[ConfigDiagnostic] {
        &self.core.config_diagnostics
    }

    /// Replaces the host configuration.
    ///
    /// Slides are rebuilt only when their content changed; a changed `value`
    /// re-enables transitions like [`Self::set_value`].
    pub fn set_config(&mut self, config: CarouselConfig) {
        let slides_changed = config.slides != self.core.base_config.slides;
        let value_changed = config.value.is_some() && config.value != self.core.base_config.value;
        self.core.base_config = config;
        if slides_changed {
            self.rebuild_slides();
        }
        if value_changed {
            self.core.movement.set_transition_enabled(true);
            self.invalidate(InvalidationTopic::Value);
        }
        self.refresh_effective_config();
        self.invalidate(InvalidationTopic::Config);
        self.resolve_plugins();
        self.recompute_layout();
        debug!(slides_changed, value_changed, "carousel configuration replaced");
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.core.pending
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.core.pending = self.core.pending.with_topic(topic);
    }

    pub(super) fn refresh_effective_config(&mut self) {
        let (config, diagnostics) =
            resolve_effective_config(&self.core.base_config, self.core.container.width_px);
        self.core.config = config;
        self.core.config_diagnostics = diagnostics;
    }
}
