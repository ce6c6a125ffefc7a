pub mod layout;
pub mod types;

pub use layout::{
    CLICK_DRAG_THRESHOLD_PX, TrackGeometry, TrackMargins, TrackStyle, clamp_slide_index,
    default_transform_offset, effective_item_width, is_dragging, item_offset,
    nearest_slide_index, raw_nearest_slide_index, resolve_track_style, round_half_up,
    track_width,
};
pub use types::{ElementRef, Slide, SlideCollection, SlideContent, SlideMovement};
