use tracing::trace;

use crate::core::{
    CLICK_DRAG_THRESHOLD_PX, ElementRef, SlideMovement, TrackGeometry, TrackMargins, TrackStyle,
    default_transform_offset, effective_item_width, is_dragging, item_offset,
    resolve_track_style, track_width,
};
use crate::extensions::StrategyContext;
use crate::render::{CarouselFrame, CarouselItemView, Renderer};

use super::{CarouselEngine, InvalidationTopic};

const CONTAINER_CLASS: &str = "Carousel";
const TRACK_CLASS: &str = "Carousel__track";
const TRACK_TRANSITION_CLASS: &str = "Carousel__track--transition";
const TRACK_DRAGGABLE_CLASS: &str = "Carousel__track--draggable";
const ITEM_CLASS: &str = "CarouselItem";
const ITEM_ACTIVE_CLASS: &str = "CarouselItem--active";

impl<R: Renderer> CarouselEngine<R> {
    /// Container width in effect: host-supplied `width`, else the last measurement.
    #[must_use]
    pub fn observed_width(&self) -> Option<f64> {
        self.core.config.width.or(self.core.container.width_px)
    }

    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        self.core.geometry
    }

    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.core.geometry.track_width_px
    }

    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.core.item_width_px
    }

    #[must_use]
    pub fn track_style(&self) -> TrackStyle {
        resolve_track_style(&self.core.geometry, self.core.config.animation_speed_ms)
    }

    #[must_use]
    pub fn container_class_names(&self) -> Vec<String> {
        let mut class_names = vec![CONTAINER_CLASS.to_owned()];
        class_names.extend(self.core.config.class_name.iter().cloned());
        class_names.extend(self.core.contribution.class_names.iter().cloned());
        class_names
    }

    #[must_use]
    pub fn track_class_names(&self) -> Vec<String> {
        let mut class_names = vec![TRACK_CLASS.to_owned()];
        if self.core.geometry.transition_enabled {
            class_names.push(TRACK_TRANSITION_CLASS.to_owned());
        }
        if self.track_follows_pointer() {
            class_names.push(TRACK_DRAGGABLE_CLASS.to_owned());
        }
        class_names
    }

    #[must_use]
    pub fn item_views(&self) -> Vec<CarouselItemView> {
        let slide_count = self.core.slides.len();
        let active_index = self.active_index();
        let movement = self.core.movement.movement();
        let dragging = is_dragging(&movement, CLICK_DRAG_THRESHOLD_PX);

        self.core
            .slides
            .iter()
            .map(|slide| {
                let is_active = slide.index == active_index;
                let mut class_names = vec![ITEM_CLASS.to_owned()];
                if is_active {
                    class_names.push(ITEM_ACTIVE_CLASS.to_owned());
                }
                class_names.extend(self.core.contribution.item_class_names.iter().cloned());
                CarouselItemView {
                    index: slide.index,
                    width_px: self.core.item_width_px,
                    offset_px: item_offset(slide.index, slide_count, self.core.config.offset),
                    is_dragging: dragging,
                    is_active,
                    dragging_enabled: self.core.config.draggable,
                    class_names,
                    content: slide.content.clone(),
                }
            })
            .collect()
    }

    /// Only a draggable track with more than one slide moves under the pointer.
    fn track_follows_pointer(&self) -> bool {
        self.core.config.draggable && self.core.slides.len() > 1
    }

    pub(super) fn track_ref(&self) -> ElementRef {
        ElementRef {
            width_px: self
                .observed_width()
                .map(|width| track_width(width, self.core.slides.len())),
        }
    }

    pub(super) fn strategy_context(&self, movement: &SlideMovement) -> StrategyContext {
        StrategyContext {
            active_index: self.active_index(),
            slide_count: self.core.slides.len(),
            item_width_px: self.core.item_width_px,
            item_offset_px: self.core.config.offset,
            container_width_px: self.observed_width().unwrap_or(0.0),
            drag_offset_px: movement.drag_offset,
            clicked_index: movement.clicked_index,
        }
    }

    /// Recomputes track geometry from current state. Must run after every
    /// mutation that affects width, slide count, movement or configuration.
    pub(super) fn recompute_layout(&mut self) {
        let observed_width = match self.observed_width() {
            Some(width) => width,
            None => {
                trace!("container not measurable yet; laying out a zero-width track");
                0.0
            }
        };
        let slide_count = self.core.slides.len();
        self.core.item_width_px = effective_item_width(
            self.core.config.item_width,
            observed_width,
            self.core.config.slides_per_page,
        );

        let movement = self.core.movement.movement();
        let context = self.strategy_context(&movement);
        let drag_offset_px = if self.track_follows_pointer() {
            movement.drag_offset
        } else {
            0.0
        };
        let base_transform = self.core.config.transform_offset.unwrap_or_else(|| {
            default_transform_offset(
                context.active_index,
                context.item_width_px,
                context.item_offset_px,
                drag_offset_px,
            )
        });
        let contribution = &self.core.contribution;
        let transform_px = contribution.apply_transform_offset(base_transform, &context);
        let margins = contribution.apply_track_margins(TrackMargins::default(), &context);

        let geometry = TrackGeometry {
            track_width_px: track_width(observed_width, slide_count),
            transform_px,
            margin_left_px: margins.left_px,
            margin_right_px: margins.right_px,
            transition_enabled: self.core.movement.transition_enabled(),
        };
        if geometry != self.core.geometry {
            self.invalidate(InvalidationTopic::Layout);
            trace!(
                track_width_px = geometry.track_width_px,
                transform_px = geometry.transform_px,
                transition_enabled = geometry.transition_enabled,
                "track geometry recomputed"
            );
        }
        self.core.geometry = geometry;
    }

    pub(super) fn build_frame(&self) -> CarouselFrame {
        CarouselFrame {
            container_class_names: self.container_class_names(),
            track_class_names: self.track_class_names(),
            geometry: self.core.geometry,
            track_style: self.track_style(),
            custom_props: self.core.contribution.custom_props.clone(),
            before_fragments: self.core.contribution.before_fragments.clone(),
            after_fragments: self.core.contribution.after_fragments.clone(),
            items: self.item_views(),
        }
    }
}
