//! Drag/click session state machine.
//!
//! The machine only tracks numbers; deciding which slide to settle on is left
//! to the layout helpers and the engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{SlideMovement, is_dragging};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPhase {
    Idle,
    Dragging,
}

/// Session values captured right before `end` resets the machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishedSession {
    pub movement: SlideMovement,
    /// `true` when the session is allowed to request a slide change.
    pub change_requested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStateMachine {
    movement: SlideMovement,
    transition_enabled: bool,
}

impl Default for MovementStateMachine {
    fn default() -> Self {
        Self {
            movement: SlideMovement::default(),
            transition_enabled: false,
        }
    }
}

impl MovementStateMachine {
    #[must_use]
    pub fn phase(&self) -> MovementPhase {
        if self.movement.is_active() {
            MovementPhase::Dragging
        } else {
            MovementPhase::Idle
        }
    }

    #[must_use]
    pub fn movement(&self) -> SlideMovement {
        self.movement
    }

    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
    }

    #[must_use]
    pub fn is_dragging(&self, threshold_px: f64) -> bool {
        is_dragging(&self.movement, threshold_px)
    }

    /// Starts a session, discarding any session that never received `end`.
    pub fn begin(&mut self, index: usize, origin_x: f64) {
        if self.movement.is_active() {
            trace!(
                previous_index = ?self.movement.clicked_index,
                "restarting abandoned drag session"
            );
        }
        self.movement = SlideMovement {
            clicked_index: Some(index),
            drag_start: origin_x,
            drag_offset: 0.0,
            drag_end: origin_x,
        };
    }

    /// Moves the active session and suspends transitions.
    ///
    /// Returns `false` (and changes nothing) while idle. Callers must invoke
    /// [`Self::finish_update`] once the geometry for this step is produced.
    pub fn update(&mut self, current_x: f64) -> bool {
        if !self.movement.is_active() {
            return false;
        }
        self.transition_enabled = false;
        self.movement.drag_offset = current_x - self.movement.drag_start;
        self.movement.drag_end = current_x;
        true
    }

    pub fn finish_update(&mut self) {
        self.transition_enabled = true;
    }

    /// Closes the active session. Returns `None` while idle.
    pub fn end(&mut self, draggable: bool) -> Option<FinishedSession> {
        if !self.movement.is_active() {
            return None;
        }
        let finished = FinishedSession {
            movement: self.movement,
            change_requested: draggable,
        };
        if draggable {
            self.transition_enabled = true;
        }
        self.movement = SlideMovement::default();
        Some(finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_zero_is_a_valid_session_start() {
        let mut machine = MovementStateMachine::default();
        machine.begin(0, 0.0);
        assert_eq!(machine.phase(), MovementPhase::Dragging);
        assert!(machine.update(-25.0));
        assert_eq!(machine.movement().drag_offset, -25.0);
    }

    #[test]
    fn update_suspends_transition_until_finished() {
        let mut machine = MovementStateMachine::default();
        machine.set_transition_enabled(true);
        machine.begin(1, 50.0);
        machine.update(60.0);
        assert!(!machine.transition_enabled());
        machine.finish_update();
        assert!(machine.transition_enabled());
    }

    #[test]
    fn end_without_drag_permission_keeps_transition_state() {
        let mut machine = MovementStateMachine::default();
        machine.begin(1, 50.0);
        let finished = machine.end(false).expect("active session");
        assert!(!finished.change_requested);
        assert!(!machine.transition_enabled());
        assert_eq!(machine.phase(), MovementPhase::Idle);
    }
}
