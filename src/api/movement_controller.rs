use tracing::{debug, trace, warn};

use crate::core::{
    CLICK_DRAG_THRESHOLD_PX, SlideMovement, clamp_slide_index, raw_nearest_slide_index,
};
use crate::extensions::StrategyKind;
use crate::interaction::MovementPhase;
use crate::render::Renderer;

use super::{CarouselEngine, InvalidationTopic};

impl<R: Renderer> CarouselEngine<R> {
    #[must_use]
    pub fn movement(&self) -> SlideMovement {
        self.core.movement.movement()
    }

    #[must_use]
    pub fn movement_phase(&self) -> MovementPhase {
        self.core.movement.phase()
    }

    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.core.movement.transition_enabled()
    }

    /// `true` while the active session moved past click distance.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.movement.is_dragging(CLICK_DRAG_THRESHOLD_PX)
    }

    /// Starts (or restarts) a drag session on item `index` at page coordinate `origin_x`.
    pub fn begin_drag(&mut self, index: usize, origin_x: f64) {
        if !origin_x.is_finite() {
            warn!(index, "ignoring drag start with non-finite coordinate");
            return;
        }
        self.core.movement.begin(index, origin_x);
        trace!(index, origin_x, "drag session started");
        self.invalidate(InvalidationTopic::Movement);
        self.recompute_layout();
    }

    /// Follows the pointer. Returns `false` when no session is active.
    ///
    /// The geometry produced for this step has transitions disabled so the
    /// track tracks the pointer without easing.
    pub fn update_drag(&mut self, current_x: f64) -> bool {
        if !current_x.is_finite() {
            warn!("ignoring drag update with non-finite coordinate");
            return false;
        }
        if !self.core.movement.update(current_x) {
            return false;
        }
        self.invalidate(InvalidationTopic::Movement);
        self.recompute_layout();
        self.core.movement.finish_update();
        trace!(
            drag_offset = self.core.movement.movement().drag_offset,
            "drag session updated"
        );
        true
    }

    /// Closes the active session.
    ///
    /// When dragging is enabled, resolves the settle index, notifies the
    /// change callback exactly once and returns the index. Returns `None` when
    /// idle, when dragging is disabled, or when there are no slides.
    pub fn end_drag(&mut self) -> Option<usize> {
        let draggable = self.core.config.draggable;
        let finished = self.core.movement.end(draggable)?;
        let requested = if finished.change_requested {
            self.resolve_settle_index(&finished.movement)
        } else {
            None
        };
        if let Some(index) = requested {
            self.notify_change(index);
        }
        self.invalidate(InvalidationTopic::Movement);
        self.recompute_layout();
        trace!(
            drag_offset = finished.movement.drag_offset,
            requested = ?requested,
            "drag session ended"
        );
        requested
    }

    /// Settle index for `movement`: explicit override or computed nearest
    /// slide, then nearest-slide and change-slide strategies, then clamping.
    pub(super) fn resolve_settle_index(&self, movement: &SlideMovement) -> Option<usize> {
        let active_index = self.active_index();
        let raw = self.core.config.nearest_slide_index.unwrap_or_else(|| {
            raw_nearest_slide_index(movement.drag_offset, self.core.item_width_px, active_index)
        });
        let context = self.strategy_context(movement);
        let contribution = &self.core.contribution;
        let raw = contribution.apply_index(StrategyKind::NearestSlide, raw, &context);
        let raw = contribution.apply_index(StrategyKind::ChangeSlide, raw, &context);
        let settled = clamp_slide_index(raw, self.core.slides.len());
        if settled.is_none() {
            debug!("no slides to settle on; skipping change request");
        }
        settled
    }

    fn notify_change(&mut self, index: usize) {
        if self.core.config.value.is_none() {
            self.core.internal_index = index;
            self.invalidate(InvalidationTopic::Value);
        }
        if let Some(on_change) = self.core.on_change.as_mut() {
            on_change(index);
        }
        debug!(index, "slide change requested");
    }
}
