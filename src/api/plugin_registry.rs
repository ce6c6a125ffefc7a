use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{Plugin, PluginEntry, StrategyRegistry};
use crate::render::Renderer;

use super::{CarouselEngine, InvalidationTopic};

impl<R: Renderer> CarouselEngine<R> {
    /// Registers a plugin under a unique identifier.
    ///
    /// Plugins apply in registration order. The new plugin is resolved
    /// immediately so its strategies affect the next transition.
    pub fn register_plugin(&mut self, id: impl Into<String>, plugin: Plugin) -> CarouselResult<()> {
        let plugin_id = id.into();
        if plugin_id.is_empty() {
            return Err(CarouselError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(CarouselError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.core.plugins.push(PluginEntry {
            id: plugin_id,
            plugin,
        });
        self.after_plugins_changed();
        Ok(())
    }

    /// Registers a [`Plugin::Named`] reference using the name as id.
    pub fn register_named_plugin(&mut self, name: &str) -> CarouselResult<()> {
        self.register_plugin(name, Plugin::named(name))
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .core
            .plugins
            .iter()
            .position(|entry| entry.id == plugin_id)
        {
            self.core.plugins.remove(position);
            self.after_plugins_changed();
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugins.iter().any(|entry| entry.id == plugin_id)
    }

    #[must_use]
    pub fn strategy_registry(&self) -> &StrategyRegistry {
        &self.core.registry
    }

    /// Mutable access for hosts adding named strategies. Takes effect on the
    /// next resolution pass.
    pub fn strategy_registry_mut(&mut self) -> &mut StrategyRegistry {
        self.invalidate(InvalidationTopic::Plugins);
        self.core.plugins_fresh = false;
        &mut self.core.registry
    }

    fn after_plugins_changed(&mut self) {
        self.invalidate(InvalidationTopic::Plugins);
        self.resolve_plugins();
        self.recompute_layout();
    }
}
