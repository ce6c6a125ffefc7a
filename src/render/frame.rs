use serde::{Deserialize, Serialize};

use crate::core::{SlideContent, TrackGeometry, TrackStyle};
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{CustomProps, RenderFragment};

/// Per-item view model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItemView {
    pub index: usize,
    pub width_px: f64,
    pub offset_px: f64,
    pub is_dragging: bool,
    pub is_active: bool,
    pub dragging_enabled: bool,
    pub class_names: Vec<String>,
    pub content: SlideContent,
}

/// Backend-agnostic output of one carousel render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub container_class_names: Vec<String>,
    pub track_class_names: Vec<String>,
    pub geometry: TrackGeometry,
    pub track_style: TrackStyle,
    pub custom_props: CustomProps,
    pub before_fragments: Vec<RenderFragment>,
    pub after_fragments: Vec<RenderFragment>,
    pub items: Vec<CarouselItemView>,
}

impl CarouselFrame {
    pub fn validate(&self) -> CarouselResult<()> {
        let geometry = self.geometry;
        for (name, value) in [
            ("track width", geometry.track_width_px),
            ("transform", geometry.transform_px),
            ("margin left", geometry.margin_left_px),
            ("margin right", geometry.margin_right_px),
        ] {
            if !value.is_finite() {
                return Err(CarouselError::InvalidData(format!(
                    "frame {name} must be finite"
                )));
            }
        }
        if geometry.track_width_px < 0.0 {
            return Err(CarouselError::InvalidData(
                "frame track width must be >= 0".to_owned(),
            ));
        }

        for (position, item) in self.items.iter().enumerate() {
            if item.index != position {
                return Err(CarouselError::InvalidData(format!(
                    "item at position {position} carries index {}",
                    item.index
                )));
            }
            if !item.width_px.is_finite() || !item.offset_px.is_finite() {
                return Err(CarouselError::InvalidData(format!(
                    "item {position} geometry must be finite"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&CarouselItemView> {
        self.items.iter().find(|item| item.is_active)
    }
}
