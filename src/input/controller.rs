use super::{PointerButton, PointerEvent};
use crate::raster::Point;
use crate::session::{Action, EditorSession};
use crate::tools::{self, Gesture, ToolAction};

/// Routes pointer events into the tool engine.
///
/// Cooperative and single-threaded: at most one gesture is live, and a
/// pointer-down while one is active is ignored. The controller owns no
/// resources beyond the gesture itself, so losing an end event can never
/// leave anything stuck.
#[derive(Debug, Default)]
pub struct GestureController {
    gesture: Option<Gesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn handle(&mut self, event: PointerEvent, session: &mut EditorSession) {
        match event {
            PointerEvent::Down { pos, button } => self.pointer_down(pos, button, session),
            PointerEvent::Move { pos, buttons_held } => {
                if buttons_held {
                    self.pointer_move(pos, session);
                } else {
                    // Buttons were released without an Up reaching us.
                    self.end_gesture(session);
                }
            }
            PointerEvent::Up { pos } => self.pointer_up(pos, session),
            PointerEvent::Leave => self.end_gesture(session),
        }
    }

    fn pointer_down(&mut self, pos: Point, button: PointerButton, session: &mut EditorSession) {
        if self.gesture.is_some() {
            log::debug!("ignoring pointer-down at ({}, {}): gesture already active", pos.x, pos.y);
            return;
        }
        if button != PointerButton::Primary {
            return;
        }

        let start = tools::begin(session.state().tool, pos, session.state());
        if let Some(action) = start.action {
            Self::apply(action, session);
        }
        self.gesture = start.gesture;
    }

    fn pointer_move(&mut self, pos: Point, session: &mut EditorSession) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        // Repeated samples at the same position are dropped.
        if pos == gesture.last() {
            return;
        }
        let action = gesture.pointer_move(pos, session.state());
        if let Some(action) = action {
            Self::apply(action, session);
        }
    }

    fn pointer_up(&mut self, pos: Point, session: &mut EditorSession) {
        let Some(mut gesture) = self.gesture.take() else {
            return;
        };
        // A final position change still counts as a move.
        if pos != gesture.last() {
            let action = gesture.pointer_move(pos, session.state());
            if let Some(action) = action {
                Self::apply(action, session);
            }
        }
        if let Some(action) = gesture.finish() {
            Self::apply(action, session);
        }
    }

    /// End the active gesture at its last known position.
    fn end_gesture(&mut self, session: &mut EditorSession) {
        if let Some(gesture) = self.gesture.take() {
            if let Some(action) = gesture.finish() {
                Self::apply(action, session);
            }
        }
    }

    fn apply(action: ToolAction, session: &mut EditorSession) {
        match action {
            ToolAction::Replace(raster) => session.dispatch(Action::Picture(raster)),
            ToolAction::SetColor(color) => session.dispatch(Action::Color(color)),
        }
    }
}
