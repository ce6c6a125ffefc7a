use crate::core::{ElementRef, SlideCollection, TrackGeometry};
use crate::extensions::{PluginDiagnostic, PluginEntry, StrategyContribution, StrategyRegistry};
use crate::interaction::MovementStateMachine;

use super::{CarouselConfig, ConfigDiagnostic, InvalidationTopics};

pub(super) type ChangeCallback = Box<dyn FnMut(usize)>;

/// Per-carousel state container. Owned by exactly one engine.
pub(super) struct EngineCore {
    /// Configuration as supplied by the host.
    pub(super) base_config: CarouselConfig,
    /// Sanitized configuration with the matching breakpoint applied.
    pub(super) config: CarouselConfig,
    pub(super) config_diagnostics: Vec<ConfigDiagnostic>,
    pub(super) slides: SlideCollection,
    pub(super) movement: MovementStateMachine,
    /// Active index used while `config.value` is `None`.
    pub(super) internal_index: usize,
    pub(super) container: ElementRef,
    pub(super) geometry: TrackGeometry,
    pub(super) item_width_px: f64,
    pub(super) plugins: Vec<PluginEntry>,
    pub(super) registry: StrategyRegistry,
    pub(super) contribution: StrategyContribution,
    pub(super) plugin_diagnostics: Vec<PluginDiagnostic>,
    /// Set by a resolution pass, cleared by `render`. A render that follows a
    /// fresh pass reuses it instead of running callables again.
    pub(super) plugins_fresh: bool,
    pub(super) on_change: Option<ChangeCallback>,
    pub(super) pending: InvalidationTopics,
}
