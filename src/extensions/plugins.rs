use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::api::CarouselConfig;
use crate::core::{CLICK_DRAG_THRESHOLD_PX, ElementRef, TrackMargins};
use crate::error::{CarouselError, CarouselResult};

use super::StrategyRegistry;

pub type PluginOptions = serde_json::Value;
pub type CustomProps = IndexMap<String, serde_json::Value>;
pub type ClassList = SmallVec<[String; 4]>;

/// Content rendered as a sibling of the track, before or after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFragment {
    pub key: String,
    pub content: serde_json::Value,
}

impl RenderFragment {
    #[must_use]
    pub fn new(key: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Rewrites the index a finished drag settles on.
    NearestSlide,
    /// Rewrites the index reported through `on_change`.
    ChangeSlide,
    /// Rewrites the track translation.
    TransformOffset,
    /// Rewrites the track margins.
    TrackMargins,
}

/// Read-only inputs handed to every strategy call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyContext {
    pub active_index: usize,
    pub slide_count: usize,
    pub item_width_px: f64,
    pub item_offset_px: f64,
    pub container_width_px: f64,
    pub drag_offset_px: f64,
    pub clicked_index: Option<usize>,
}

impl StrategyContext {
    /// `true` when the pointer session never left click distance.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.drag_offset_px.abs() <= CLICK_DRAG_THRESHOLD_PX
    }
}

pub type IndexStrategyFn = Rc<dyn Fn(i64, &StrategyContext) -> i64>;
pub type OffsetStrategyFn = Rc<dyn Fn(f64, &StrategyContext) -> f64>;
pub type MarginStrategyFn = Rc<dyn Fn(TrackMargins, &StrategyContext) -> TrackMargins>;

#[derive(Clone)]
pub enum Strategy {
    NearestSlide(IndexStrategyFn),
    ChangeSlide(IndexStrategyFn),
    TransformOffset(OffsetStrategyFn),
    TrackMargins(MarginStrategyFn),
}

impl Strategy {
    pub fn nearest_slide(f: impl Fn(i64, &StrategyContext) -> i64 + 'static) -> Self {
        Self::NearestSlide(Rc::new(f))
    }

    pub fn change_slide(f: impl Fn(i64, &StrategyContext) -> i64 + 'static) -> Self {
        Self::ChangeSlide(Rc::new(f))
    }

    pub fn transform_offset(f: impl Fn(f64, &StrategyContext) -> f64 + 'static) -> Self {
        Self::TransformOffset(Rc::new(f))
    }

    pub fn track_margins(
        f: impl Fn(TrackMargins, &StrategyContext) -> TrackMargins + 'static,
    ) -> Self {
        Self::TrackMargins(Rc::new(f))
    }

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::NearestSlide(_) => StrategyKind::NearestSlide,
            Self::ChangeSlide(_) => StrategyKind::ChangeSlide,
            Self::TransformOffset(_) => StrategyKind::TransformOffset,
            Self::TrackMargins(_) => StrategyKind::TrackMargins,
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Strategy").field(&self.kind()).finish()
    }
}

/// Merged (or partial, when returned by a single plugin) plugin output.
#[derive(Debug, Clone, Default)]
pub struct StrategyContribution {
    pub strategies: Vec<Strategy>,
    pub class_names: ClassList,
    pub item_class_names: ClassList,
    pub before_fragments: Vec<RenderFragment>,
    pub after_fragments: Vec<RenderFragment>,
    pub custom_props: CustomProps,
}

impl StrategyContribution {
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_names.push(class_name.into());
        self
    }

    #[must_use]
    pub fn with_item_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.item_class_names.push(class_name.into());
        self
    }

    #[must_use]
    pub fn with_before_fragment(mut self, fragment: RenderFragment) -> Self {
        self.before_fragments.push(fragment);
        self
    }

    #[must_use]
    pub fn with_after_fragment(mut self, fragment: RenderFragment) -> Self {
        self.after_fragments.push(fragment);
        self
    }

    #[must_use]
    pub fn with_custom_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom_props.insert(key.into(), value);
        self
    }

    /// Appends `other` after `self`; custom props from `other` win on key collision.
    pub fn merge(&mut self, other: StrategyContribution) {
        self.strategies.extend(other.strategies);
        self.class_names.extend(other.class_names);
        self.item_class_names.extend(other.item_class_names);
        self.before_fragments.extend(other.before_fragments);
        self.after_fragments.extend(other.after_fragments);
        for (key, value) in other.custom_props {
            self.custom_props.insert(key, value);
        }
    }

    pub fn strategies_of(&self, kind: StrategyKind) -> impl Iterator<Item = &Strategy> {
        self.strategies
            .iter()
            .filter(move |strategy| strategy.kind() == kind)
    }

    /// Runs index strategies of `kind` in contribution order.
    #[must_use]
    pub fn apply_index(&self, kind: StrategyKind, initial: i64, context: &StrategyContext) -> i64 {
        self.strategies.iter().fold(initial, |value, strategy| match (kind, strategy) {
            (StrategyKind::NearestSlide, Strategy::NearestSlide(f))
            | (StrategyKind::ChangeSlide, Strategy::ChangeSlide(f)) => f(value, context),
            _ => value,
        })
    }

    #[must_use]
    pub fn apply_transform_offset(&self, initial: f64, context: &StrategyContext) -> f64 {
        self.strategies
            .iter()
            .fold(initial, |value, strategy| match strategy {
                Strategy::TransformOffset(f) => f(value, context),
                _ => value,
            })
    }

    #[must_use]
    pub fn apply_track_margins(
        &self,
        initial: TrackMargins,
        context: &StrategyContext,
    ) -> TrackMargins {
        self.strategies
            .iter()
            .fold(initial, |value, strategy| match strategy {
                Strategy::TrackMargins(f) => f(value, context),
                _ => value,
            })
    }
}

pub type PluginCallable = Box<dyn FnMut() -> CarouselResult<()>>;

/// `resolve(configuration, options, container_ref, track_ref)`.
pub type PluginResolveFn = Rc<
    dyn Fn(
        &CarouselConfig,
        &PluginOptions,
        ElementRef,
        ElementRef,
    ) -> CarouselResult<StrategyContribution>,
>;

pub enum Plugin {
    /// Side-effecting initializer run on every resolution pass; contributes nothing.
    Callable(PluginCallable),
    Descriptor {
        resolve: PluginResolveFn,
        options: PluginOptions,
    },
    /// Reference into a [`StrategyRegistry`].
    Named(String),
}

impl Plugin {
    pub fn callable(f: impl FnMut() -> CarouselResult<()> + 'static) -> Self {
        Self::Callable(Box::new(f))
    }

    pub fn descriptor(
        resolve: impl Fn(
            &CarouselConfig,
            &PluginOptions,
            ElementRef,
            ElementRef,
        ) -> CarouselResult<StrategyContribution>
        + 'static,
        options: PluginOptions,
    ) -> Self {
        Self::Descriptor {
            resolve: Rc::new(resolve),
            options,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Plugin::Callable"),
            Self::Descriptor { options, .. } => f
                .debug_struct("Plugin::Descriptor")
                .field("options", options)
                .finish_non_exhaustive(),
            Self::Named(name) => f.debug_tuple("Plugin::Named").field(name).finish(),
        }
    }
}

/// Plugin registered on an engine under a unique id.
#[derive(Debug)]
pub struct PluginEntry {
    pub id: String,
    pub plugin: Plugin,
}

/// Non-fatal plugin failure surfaced to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDiagnostic {
    pub plugin_id: String,
    pub error: CarouselError,
}

#[derive(Debug, Default)]
pub struct PluginResolution {
    pub contribution: StrategyContribution,
    pub diagnostics: Vec<PluginDiagnostic>,
}

/// Resolves every plugin in order and merges their contributions.
///
/// A failing plugin is skipped and reported; the others still resolve.
pub fn resolve_plugins(
    entries: &mut [PluginEntry],
    registry: &StrategyRegistry,
    config: &CarouselConfig,
    container: ElementRef,
    track: ElementRef,
) -> PluginResolution {
    let mut resolution = PluginResolution::default();
    for entry in entries.iter_mut() {
        let outcome = match &mut entry.plugin {
            Plugin::Callable(run) => run().map(|()| StrategyContribution::default()),
            Plugin::Descriptor { resolve, options } => resolve(config, options, container, track),
            Plugin::Named(name) => registry.resolve(name, config, container, track),
        };
        match outcome {
            Ok(contribution) => {
                debug!(
                    plugin = %entry.id,
                    strategies = contribution.strategies.len(),
                    class_names = contribution.class_names.len(),
                    "plugin resolved"
                );
                resolution.contribution.merge(contribution);
            }
            Err(err) => {
                let error = match err {
                    err @ (CarouselError::PluginResolution { .. }
                    | CarouselError::UnknownPlugin(_)) => err,
                    other => CarouselError::PluginResolution {
                        plugin: entry.id.clone(),
                        reason: other.to_string(),
                    },
                };
                warn!(plugin = %entry.id, error = %error, "skipping plugin contribution");
                resolution.diagnostics.push(PluginDiagnostic {
                    plugin_id: entry.id.clone(),
                    error,
                });
            }
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> StrategyContext {
        StrategyContext {
            active_index: 1,
            slide_count: 4,
            item_width_px: 100.0,
            item_offset_px: 0.0,
            container_width_px: 100.0,
            drag_offset_px: 0.0,
            clicked_index: None,
        }
    }

    #[test]
    fn index_strategies_only_apply_their_own_kind() {
        let contribution = StrategyContribution::default()
            .with_strategy(Strategy::nearest_slide(|value, _| value + 1))
            .with_strategy(Strategy::change_slide(|value, _| value * 10))
            .with_strategy(Strategy::nearest_slide(|value, _| value + 2));

        let ctx = context();
        assert_eq!(contribution.apply_index(StrategyKind::NearestSlide, 0, &ctx), 3);
        assert_eq!(contribution.apply_index(StrategyKind::ChangeSlide, 2, &ctx), 20);
        assert_eq!(contribution.strategies_of(StrategyKind::NearestSlide).count(), 2);
    }

    #[test]
    fn merge_keeps_first_insertion_position_for_overridden_props() {
        let mut merged = StrategyContribution::default()
            .with_custom_prop("x", serde_json::json!(1))
            .with_custom_prop("y", serde_json::json!("a"));
        merged.merge(StrategyContribution::default().with_custom_prop("x", serde_json::json!(2)));

        let keys: Vec<&str> = merged.custom_props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(merged.custom_props["x"], serde_json::json!(2));
    }
}
