//! Plugin composition.
//!
//! Plugins never touch engine internals: they contribute strategies, class
//! names, fragments and custom props that the engine merges per render pass.

pub mod builtin;
pub mod plugins;

pub use builtin::StrategyRegistry;
pub use plugins::{
    ClassList, CustomProps, IndexStrategyFn, MarginStrategyFn, OffsetStrategyFn, Plugin,
    PluginCallable, PluginDiagnostic, PluginEntry, PluginOptions, PluginResolution,
    PluginResolveFn, RenderFragment, Strategy, StrategyContext, StrategyContribution,
    StrategyKind, resolve_plugins,
};
