use crate::error::CarouselResult;
use crate::render::{CarouselFrame, Renderer};

/// Headless renderer that keeps the most recent frame for inspection.
///
/// Frames are validated first, so an invalid frame is never recorded.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames_rendered: usize,
    last_frame: Option<CarouselFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&CarouselFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_item_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.items.len())
    }

    /// Index of the item flagged active in the last frame.
    #[must_use]
    pub fn last_active_index(&self) -> Option<usize> {
        self.last_frame()
            .and_then(CarouselFrame::active_item)
            .map(|item| item.index)
    }

    pub fn take_last_frame(&mut self) -> Option<CarouselFrame> {
        self.last_frame.take()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
