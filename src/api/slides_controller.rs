use tracing::debug;

use crate::core::{SlideCollection, SlideContent};
use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{CarouselEngine, InvalidationTopic};

impl<R: Renderer> CarouselEngine<R> {
    /// Replaces slide content. `null` payloads are dropped.
    pub fn set_slides<I>(&mut self, contents: I)
    where
        I: IntoIterator<Item = SlideContent>,
    {
        self.core.base_config.slides = contents.into_iter().collect();
        self.core.config.slides = self.core.base_config.slides.clone();
        self.rebuild_slides();
        self.recompute_layout();
    }

    #[must_use]
    pub fn slides(&self) -> &SlideCollection {
        &self.core.slides
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.core.slides.len()
    }

    /// Active index, clamped to the collection. `0` for empty collections.
    #[must_use]
    pub fn active_index(&self) -> usize {
        let index = self.core.config.value.unwrap_or(self.core.internal_index);
        match self.core.slides.last_index() {
            Some(last) => index.min(last),
            None => 0,
        }
    }

    /// Host-controlled value, if any.
    #[must_use]
    pub fn value(&self) -> Option<usize> {
        self.core.config.value
    }

    /// Moves the carousel to `index` and switches it to controlled mode.
    ///
    /// A changed value re-enables transitions so the track animates to it.
    pub fn set_value(&mut self, index: usize) -> CarouselResult<()> {
        let slide_count = self.core.slides.len();
        if slide_count > 0 && index >= slide_count {
            return Err(CarouselError::InvalidSlideIndex { index, slide_count });
        }
        if self.core.base_config.value == Some(index) {
            return Ok(());
        }
        self.core.base_config.value = Some(index);
        self.core.config.value = Some(index);
        self.core.movement.set_transition_enabled(true);
        self.invalidate(InvalidationTopic::Value);
        self.recompute_layout();
        debug!(index, "carousel value set");
        Ok(())
    }

    /// Installs the callback receiving slide change requests.
    pub fn set_on_change(&mut self, on_change: impl FnMut(usize) + 'static) {
        self.core.on_change = Some(Box::new(on_change));
    }

    pub fn clear_on_change(&mut self) {
        self.core.on_change = None;
    }

    pub(super) fn rebuild_slides(&mut self) {
        self.core.slides =
            SlideCollection::from_contents(self.core.base_config.slides.iter().cloned());
        if let Some(last) = self.core.slides.last_index() {
            self.core.internal_index = self.core.internal_index.min(last);
        } else {
            self.core.internal_index = 0;
        }
        self.invalidate(InvalidationTopic::Slides);
        debug!(slide_count = self.core.slides.len(), "slide collection rebuilt");
    }
}
