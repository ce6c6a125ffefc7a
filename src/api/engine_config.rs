use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::SlideContent;

fn default_true() -> bool {
    true
}

fn default_animation_speed_ms() -> u32 {
    500
}

fn default_slides_per_page() -> u32 {
    1
}

/// Partial override applied when the observed width falls under a breakpoint.
///
/// Only `Some` fields replace the base configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakpointConfig {
    #[serde(default)]
    pub item_width: Option<f64>,
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default)]
    pub slides_per_page: Option<u32>,
    #[serde(default)]
    pub draggable: Option<bool>,
    #[serde(default)]
    pub animation_speed_ms: Option<u32>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub transform_offset: Option<f64>,
}

/// Public carousel configuration.
///
/// This type is serializable so host applications can persist/load carousel
/// setup. Plugins and the change callback are registered on the engine instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Fixed item width in px. `None` splits the observed width by `slides_per_page`.
    #[serde(default)]
    pub item_width: Option<f64>,
    /// Host-supplied container width. Wins over measured resize notifications.
    #[serde(default)]
    pub width: Option<f64>,
    /// Externally controlled active index. `None` lets the engine own it.
    #[serde(default)]
    pub value: Option<usize>,
    #[serde(default)]
    pub slides: Vec<SlideContent>,
    /// Gap applied after every item except the last.
    #[serde(default)]
    pub offset: f64,
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default = "default_animation_speed_ms")]
    pub animation_speed_ms: u32,
    #[serde(default)]
    pub class_name: Option<String>,
    /// Explicit track translation. `None` derives it from the active index.
    #[serde(default)]
    pub transform_offset: Option<f64>,
    /// Explicit settle index for finished drags. Clamped before use.
    #[serde(default)]
    pub nearest_slide_index: Option<i64>,
    #[serde(default = "default_slides_per_page")]
    pub slides_per_page: u32,
    /// Keyed by max observed width in px.
    #[serde(default)]
    pub breakpoints: BTreeMap<u32, BreakpointConfig>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: None,
            width: None,
            value: None,
            slides: Vec::new(),
            offset: 0.0,
            draggable: default_true(),
            animation_speed_ms: default_animation_speed_ms(),
            class_name: None,
            transform_offset: None,
            nearest_slide_index: None,
            slides_per_page: default_slides_per_page(),
            breakpoints: BTreeMap::new(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new<I>(slides: I) -> Self
    where
        I: IntoIterator<Item = SlideContent>,
    {
        Self {
            slides: slides.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item_width(mut self, item_width: f64) -> Self {
        self.item_width = Some(item_width);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: usize) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    #[must_use]
    pub fn with_animation_speed_ms(mut self, animation_speed_ms: u32) -> Self {
        self.animation_speed_ms = animation_speed_ms;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_transform_offset(mut self, transform_offset: f64) -> Self {
        self.transform_offset = Some(transform_offset);
        self
    }

    #[must_use]
    pub fn with_nearest_slide_index(mut self, index: i64) -> Self {
        self.nearest_slide_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_slides_per_page(mut self, slides_per_page: u32) -> Self {
        self.slides_per_page = slides_per_page;
        self
    }

    #[must_use]
    pub fn with_breakpoint(mut self, max_width_px: u32, overrides: BreakpointConfig) -> Self {
        self.breakpoints.insert(max_width_px, overrides);
        self
    }
}
