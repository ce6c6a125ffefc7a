use serde::{Deserialize, Serialize};

use crate::core::{SlideMovement, TrackGeometry, TrackStyle};
use crate::interaction::MovementPhase;
use crate::render::Renderer;

use super::{CarouselConfig, CarouselEngine};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub config: CarouselConfig,
    pub phase: MovementPhase,
    pub movement: SlideMovement,
    pub active_index: usize,
    pub slide_count: usize,
    pub observed_width_px: Option<f64>,
    pub item_width_px: f64,
    pub geometry: TrackGeometry,
    pub track_style: TrackStyle,
    pub plugin_ids: Vec<String>,
    pub failed_plugin_ids: Vec<String>,
}

impl<R: Renderer> CarouselEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            config: self.core.config.clone(),
            phase: self.movement_phase(),
            movement: self.movement(),
            active_index: self.active_index(),
            slide_count: self.slide_count(),
            observed_width_px: self.observed_width(),
            item_width_px: self.core.item_width_px,
            geometry: self.core.geometry,
            track_style: self.track_style(),
            plugin_ids: self
                .core
                .plugins
                .iter()
                .map(|entry| entry.id.clone())
                .collect(),
            failed_plugin_ids: self
                .core
                .plugin_diagnostics
                .iter()
                .map(|diagnostic| diagnostic.plugin_id.clone())
                .collect(),
        }
    }
}
