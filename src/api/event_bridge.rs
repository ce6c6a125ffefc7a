use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::ElementRef;
use crate::render::Renderer;

use super::{CarouselEngine, InvalidationTopic};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub identifier: i64,
    pub page_x: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(identifier: i64, page_x: f64) -> Self {
        Self {
            identifier,
            page_x,
        }
    }
}

/// Raw host input, as delivered by the embedding platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseDown { index: usize, page_x: f64 },
    MouseMove { page_x: f64 },
    MouseUp,
    TouchStart { index: usize, changed_touches: Vec<TouchPoint> },
    TouchMove { changed_touches: Vec<TouchPoint> },
    TouchEnd { changed_touches: Vec<TouchPoint> },
    Resize { width_px: f64 },
}

/// Mouse-shaped pointer event every input is reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { index: usize, page_x: f64 },
    Move { page_x: f64 },
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NormalizedInput {
    Pointer(PointerEvent),
    Resize { width_px: f64 },
}

impl InputEvent {
    /// Maps touch input onto the mouse shape using the first changed touch.
    ///
    /// Touch start/move without any changed touch carry no coordinate and
    /// normalize to `None`.
    #[must_use]
    pub fn normalize(&self) -> Option<NormalizedInput> {
        let first_x = |touches: &[TouchPoint]| touches.first().map(|touch| touch.page_x);
        let pointer = match self {
            Self::MouseDown { index, page_x } => PointerEvent::Down {
                index: *index,
                page_x: *page_x,
            },
            Self::MouseMove { page_x } => PointerEvent::Move { page_x: *page_x },
            Self::MouseUp | Self::TouchEnd { .. } => PointerEvent::Up,
            Self::TouchStart {
                index,
                changed_touches,
            } => PointerEvent::Down {
                index: *index,
                page_x: first_x(changed_touches.as_slice())?,
            },
            Self::TouchMove { changed_touches } => PointerEvent::Move {
                page_x: first_x(changed_touches.as_slice())?,
            },
            Self::Resize { width_px } => {
                return Some(NormalizedInput::Resize {
                    width_px: *width_px,
                });
            }
        };
        Some(NormalizedInput::Pointer(pointer))
    }
}

/// Effect of one delivered event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// Nothing changed (idle guard, malformed event, unchanged width).
    Ignored,
    SessionStarted,
    SessionMoved,
    /// Session closed without a change request.
    SessionEnded,
    SlideChangeRequested(usize),
    Resized,
}

/// Ordered producer of host input.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// FIFO input source for hosts that buffer platform events.
#[derive(Debug, Clone, Default)]
pub struct QueuedInputSource {
    events: VecDeque<InputEvent>,
}

impl QueuedInputSource {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<InputEvent> for QueuedInputSource {
    fn from_iter<T: IntoIterator<Item = InputEvent>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl InputSource for QueuedInputSource {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

impl<R: Renderer> CarouselEngine<R> {
    /// Applies one host event. Geometry is up to date when this returns.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventOutcome {
        let Some(normalized) = event.normalize() else {
            trace!(?event, "dropping input without coordinates");
            return EventOutcome::Ignored;
        };
        match normalized {
            NormalizedInput::Pointer(PointerEvent::Down { index, page_x }) => {
                if !page_x.is_finite() {
                    warn!(index, "ignoring pointer down with non-finite coordinate");
                    return EventOutcome::Ignored;
                }
                self.begin_drag(index, page_x);
                EventOutcome::SessionStarted
            }
            NormalizedInput::Pointer(PointerEvent::Move { page_x }) => {
                if self.update_drag(page_x) {
                    EventOutcome::SessionMoved
                } else {
                    EventOutcome::Ignored
                }
            }
            NormalizedInput::Pointer(PointerEvent::Up) => {
                if !self.core.movement.movement().is_active() {
                    return EventOutcome::Ignored;
                }
                match self.end_drag() {
                    Some(index) => EventOutcome::SlideChangeRequested(index),
                    None => EventOutcome::SessionEnded,
                }
            }
            NormalizedInput::Resize { width_px } => {
                if self.on_width_change(width_px) {
                    EventOutcome::Resized
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Drains `source` in delivery order.
    pub fn pump<S: InputSource>(&mut self, source: &mut S) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = source.next_event() {
            outcomes.push(self.handle_event(&event));
        }
        outcomes
    }

    /// Resize notification entry point. Returns `true` when the measured width changed.
    ///
    /// Negative or non-finite widths mark the container as not measurable.
    /// Plugins re-resolve against the new container and track refs.
    pub fn on_width_change(&mut self, width_px: f64) -> bool {
        let container = if width_px.is_finite() && width_px >= 0.0 {
            ElementRef::measured(width_px)
        } else {
            warn!(width_px, "container reported an unusable width; treating as unmeasured");
            ElementRef::default()
        };
        if container == self.core.container {
            return false;
        }
        self.core.container = container;
        self.refresh_effective_config();
        self.invalidate(InvalidationTopic::Layout);
        self.resolve_plugins();
        self.recompute_layout();
        debug!(
            width_px = ?container.width_px,
            track_width_px = self.core.geometry.track_width_px,
            "container width changed"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_events_normalize_to_mouse_shape() {
        let start = InputEvent::TouchStart {
            index: 3,
            changed_touches: vec![TouchPoint::new(7, 120.0), TouchPoint::new(8, 400.0)],
        };
        assert_eq!(
            start.normalize(),
            Some(NormalizedInput::Pointer(PointerEvent::Down {
                index: 3,
                page_x: 120.0
            }))
        );

        let end = InputEvent::TouchEnd {
            changed_touches: Vec::new(),
        };
        assert_eq!(end.normalize(), Some(NormalizedInput::Pointer(PointerEvent::Up)));

        let empty_move = InputEvent::TouchMove {
            changed_touches: Vec::new(),
        };
        assert_eq!(empty_move.normalize(), None);
    }

    #[test]
    fn queued_source_preserves_delivery_order() {
        let mut source: QueuedInputSource = [
            InputEvent::MouseDown {
                index: 0,
                page_x: 10.0,
            },
            InputEvent::MouseUp,
        ]
        .into_iter()
        .collect();
        assert_eq!(source.len(), 2);
        assert!(matches!(source.next_event(), Some(InputEvent::MouseDown { .. })));
        assert_eq!(source.next_event(), Some(InputEvent::MouseUp));
        assert!(source.is_empty());
    }
}
