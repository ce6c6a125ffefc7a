use tracing::debug;

use crate::core::ElementRef;
use crate::extensions::{
    CustomProps, PluginDiagnostic, RenderFragment, StrategyContribution, resolve_plugins,
};
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer> CarouselEngine<R> {
    /// Merged output of the last resolution pass.
    #[must_use]
    pub fn contribution(&self) -> &StrategyContribution {
        &self.core.contribution
    }

    #[must_use]
    pub fn custom_props(&self) -> &CustomProps {
        &self.core.contribution.custom_props
    }

    #[must_use]
    pub fn before_fragments(&self) -> &[RenderFragment] {
        &self.core.contribution.before_fragments
    }

    #[must_use]
    pub fn after_fragments(&self) -> &[RenderFragment] {
        &self.core.contribution.after_fragments
    }

    /// Failures from the last resolution pass. Failed plugins contribute nothing.
    #[must_use]
    pub fn plugin_diagnostics(&self) -> &[PluginDiagnostic] {
        &self.core.plugin_diagnostics
    }

    /// Runs one resolution pass over every registered plugin.
    ///
    /// Each plugin, callables included, runs exactly once per pass.
    pub(super) fn resolve_plugins(&mut self) {
        let container = ElementRef {
            width_px: self.observed_width(),
        };
        let track = self.track_ref();
        let resolution = resolve_plugins(
            &mut self.core.plugins,
            &self.core.registry,
            &self.core.config,
            container,
            track,
        );
        if !resolution.diagnostics.is_empty() {
            debug!(
                failed = resolution.diagnostics.len(),
                total = self.core.plugins.len(),
                "plugin resolution pass finished with failures"
            );
        }
        self.core.contribution = resolution.contribution;
        self.core.plugin_diagnostics = resolution.diagnostics;
        self.core.plugins_fresh = true;
    }
}
