use serde::{Deserialize, Serialize};

/// Opaque slide payload handed through to the renderer untouched.
pub type SlideContent = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub index: usize,
    pub content: SlideContent,
}

/// Ordered slide list. Indices are dense and follow display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideCollection {
    items: Vec<Slide>,
}

impl SlideCollection {
    /// Builds a collection from host content, dropping `null` payloads and
    /// re-indexing the remaining slides.
    #[must_use]
    pub fn from_contents<I>(contents: I) -> Self
    where
        I: IntoIterator<Item = SlideContent>,
    {
        let items = contents
            .into_iter()
            .filter(|content| !content.is_null())
            .enumerate()
            .map(|(index, content)| Slide { index, content })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Slide] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.items.iter()
    }

    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

/// Drag/click session values.
///
/// A session is active exactly while `clicked_index` is set. Page coordinates
/// are kept verbatim, so an origin of `0.0` is a valid session start.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideMovement {
    pub clicked_index: Option<usize>,
    pub drag_start: f64,
    pub drag_offset: f64,
    pub drag_end: f64,
}

impl SlideMovement {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.clicked_index.is_some()
    }
}

/// Last known measurement of a host element.
///
/// `width_px == None` means the element is not attached or not measurable yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRef {
    pub width_px: Option<f64>,
}

impl ElementRef {
    #[must_use]
    pub fn measured(width_px: f64) -> Self {
        Self {
            width_px: Some(width_px),
        }
    }

    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.width_px.is_some()
    }

    /// Width used for geometry; stale refs degrade to zero.
    #[must_use]
    pub fn width_or_zero(self) -> f64 {
        self.width_px.unwrap_or(0.0)
    }
}
