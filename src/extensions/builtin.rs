//! Registry backing [`Plugin::Named`](super::Plugin::Named) references.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::api::CarouselConfig;
use crate::core::ElementRef;
use crate::error::{CarouselError, CarouselResult};

use super::{PluginOptions, PluginResolveFn, Strategy, StrategyContribution};

pub const INFINITE: &str = "infinite";
pub const CENTERED: &str = "centered";
pub const CLICK_TO_CHANGE: &str = "clickToChange";

/// Name → resolver lookup table. Named plugins resolve with `null` options.
#[derive(Clone)]
pub struct StrategyRegistry {
    resolvers: IndexMap<String, PluginResolveFn>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("names", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StrategyRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolvers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(INFINITE, infinite);
        registry.register(CENTERED, centered);
        registry.register(CLICK_TO_CHANGE, click_to_change);
        registry
    }

    /// Adds or replaces a named resolver.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        resolve: impl Fn(
            &CarouselConfig,
            &PluginOptions,
            ElementRef,
            ElementRef,
        ) -> CarouselResult<StrategyContribution>
        + 'static,
    ) {
        self.resolvers.insert(name.into(), Rc::new(resolve));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    pub fn resolve(
        &self,
        name: &str,
        config: &CarouselConfig,
        container: ElementRef,
        track: ElementRef,
    ) -> CarouselResult<StrategyContribution> {
        let resolve = self
            .resolvers
            .get(name)
            .ok_or_else(|| CarouselError::UnknownPlugin(name.to_owned()))?;
        resolve(config, &PluginOptions::Null, container, track)
    }
}

/// Wraps change requests around both ends instead of clamping.
fn infinite(
    _config: &CarouselConfig,
    _options: &PluginOptions,
    _container: ElementRef,
    _track: ElementRef,
) -> CarouselResult<StrategyContribution> {
    Ok(StrategyContribution::default()
        .with_class_name("Carousel--infinite")
        .with_strategy(Strategy::change_slide(|value, context| {
            match i64::try_from(context.slide_count) {
                Ok(count) if count > 0 => value.rem_euclid(count),
                _ => value,
            }
        })))
}

/// Shifts the track so the active item sits in the middle of the container.
fn centered(
    _config: &CarouselConfig,
    _options: &PluginOptions,
    _container: ElementRef,
    _track: ElementRef,
) -> CarouselResult<StrategyContribution> {
    Ok(StrategyContribution::default()
        .with_class_name("Carousel--centered")
        .with_strategy(Strategy::transform_offset(|value, context| {
            value + (context.container_width_px - context.item_width_px) / 2.0
        })))
}

/// A session that never left click distance settles on the clicked slide.
fn click_to_change(
    _config: &CarouselConfig,
    _options: &PluginOptions,
    _container: ElementRef,
    _track: ElementRef,
) -> CarouselResult<StrategyContribution> {
    Ok(StrategyContribution::default()
        .with_item_class_name("CarouselItem--clickable")
        .with_strategy(Strategy::change_slide(|value, context| {
            match context.clicked_index {
                Some(clicked) if context.is_click() => i64::try_from(clicked).unwrap_or(value),
                _ => value,
            }
        })))
}
