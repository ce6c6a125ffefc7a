mod frame;
mod null_renderer;

pub use frame::{CarouselFrame, CarouselItemView};
pub use null_renderer::NullRenderer;

use crate::error::CarouselResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `CarouselFrame` so markup code stays
/// isolated from drag and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()>;
}
