mod fill;
mod line;
mod shapes;

pub use fill::flood_fill;
pub use line::trace_line;
pub use shapes::{disk, rectangle};

use serde::{Deserialize, Serialize};

use crate::raster::{Color, Point, Raster};
use crate::session::EditorState;

/// The closed set of drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Draw,
    Line,
    Rectangle,
    Circle,
    Fill,
    Pick,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Draw => "draw",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Fill => "fill",
            ToolKind::Pick => "pick",
        }
    }

    /// All tools, in the order a picker would list them.
    pub fn all() -> [ToolKind; 6] {
        [
            ToolKind::Draw,
            ToolKind::Line,
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Fill,
            ToolKind::Pick,
        ]
    }
}

/// What a tool asks the session to do. Always a wholesale replacement,
/// never a diff the consumer has to merge.
#[derive(Debug, Clone)]
pub enum ToolAction {
    /// Replace the visible picture.
    Replace(Raster),
    /// Change the active color (the Pick tool's signal).
    SetColor(Color),
}

/// Result of starting a tool at a position: an optional immediate action
/// plus, for tools that track the pointer, the live gesture.
#[derive(Debug)]
pub struct ToolStart {
    pub action: Option<ToolAction>,
    pub gesture: Option<Gesture>,
}

impl ToolStart {
    fn immediate(action: ToolAction) -> Self {
        Self {
            action: Some(action),
            gesture: None,
        }
    }

    fn none() -> Self {
        Self {
            action: None,
            gesture: None,
        }
    }
}

/// Start `tool` at `pos` against the current editor state.
///
/// Start positions outside the raster are ignored for the single-shot
/// tools (nothing to read there); the stroke tools simply emit edits the
/// raster will clip.
pub fn begin(tool: ToolKind, pos: Point, state: &EditorState) -> ToolStart {
    match tool {
        ToolKind::Draw => {
            let stroke = trace_line(pos, pos, state.color);
            ToolStart {
                action: Some(ToolAction::Replace(state.raster.draw(&stroke))),
                gesture: Some(Gesture::new(tool, pos, state)),
            }
        }
        // The line commits on gesture end only; until then there is
        // nothing to paint.
        ToolKind::Line => ToolStart {
            action: None,
            gesture: Some(Gesture::new(tool, pos, state)),
        },
        ToolKind::Rectangle => {
            let fill = rectangle(pos, pos, state.color);
            ToolStart {
                action: Some(ToolAction::Replace(state.raster.draw(&fill))),
                gesture: Some(Gesture::new(tool, pos, state)),
            }
        }
        ToolKind::Circle => {
            let fill = disk(pos, pos, &state.raster, state.color);
            ToolStart {
                action: Some(ToolAction::Replace(state.raster.draw(&fill))),
                gesture: Some(Gesture::new(tool, pos, state)),
            }
        }
        ToolKind::Fill => match flood_fill(pos, &state.raster, state.color) {
            Some(batch) => ToolStart::immediate(ToolAction::Replace(state.raster.draw(&batch))),
            None => ToolStart::none(),
        },
        ToolKind::Pick => match state.raster.pixel(pos.x, pos.y) {
            Ok(color) => ToolStart::immediate(ToolAction::SetColor(color)),
            Err(err) => {
                log::warn!("pick outside the raster: {err}");
                ToolStart::none()
            }
        },
    }
}

/// One live pointer gesture, created on pointer-down and consumed on
/// gesture end. Holds the state captured at pointer-down so the preview
/// tools always redraw against the pre-gesture picture instead of piling
/// previews on top of each other.
#[derive(Debug)]
pub struct Gesture {
    tool: ToolKind,
    anchor: Point,
    last: Point,
    base: EditorState,
}

impl Gesture {
    fn new(tool: ToolKind, pos: Point, state: &EditorState) -> Self {
        Self {
            tool,
            anchor: pos,
            last: pos,
            base: state.clone(),
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn last(&self) -> Point {
        self.last
    }

    /// Feed the next pointer position. `state` is the state as of this
    /// move; the freehand tool draws against it, the preview tools draw
    /// against the gesture's base.
    pub fn pointer_move(&mut self, pos: Point, state: &EditorState) -> Option<ToolAction> {
        let action = match self.tool {
            ToolKind::Draw => {
                let stroke = trace_line(self.last, pos, state.color);
                Some(ToolAction::Replace(state.raster.draw(&stroke)))
            }
            ToolKind::Line => None,
            ToolKind::Rectangle => {
                let fill = rectangle(self.anchor, pos, self.base.color);
                Some(ToolAction::Replace(self.base.raster.draw(&fill)))
            }
            ToolKind::Circle => {
                let fill = disk(self.anchor, pos, &self.base.raster, self.base.color);
                Some(ToolAction::Replace(self.base.raster.draw(&fill)))
            }
            // Single-shot tools never produce a gesture.
            ToolKind::Fill | ToolKind::Pick => None,
        };
        self.last = pos;
        action
    }

    /// End the gesture at its last known position. Only the line tool has
    /// work left to do here; everything else already painted on the way.
    pub fn finish(self) -> Option<ToolAction> {
        match self.tool {
            ToolKind::Line => {
                let segment = trace_line(self.anchor, self.last, self.base.color);
                Some(ToolAction::Replace(self.base.raster.draw(&segment)))
            }
            _ => None,
        }
    }
}
