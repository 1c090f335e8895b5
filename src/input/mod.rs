mod controller;

pub use controller::GestureController;

use crate::raster::Point;

/// Which pointer button an event refers to. Only the primary button starts
/// gestures; anything else is rejected at the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// A discrete pointer event in raster pixel coordinates. The embedder is
/// responsible for mapping its native mouse/touch events (and any canvas
/// scaling) onto these before feeding the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A button was pressed at `pos`.
    Down { pos: Point, button: PointerButton },
    /// The pointer moved. `buttons_held` is false when every button has
    /// been released, which ends any active gesture.
    Move { pos: Point, buttons_held: bool },
    /// The primary button was released.
    Up { pos: Point },
    /// The pointer left the surface with no buttons held.
    Leave,
}
