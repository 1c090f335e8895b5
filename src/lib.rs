#![warn(clippy::all, rust_2018_idioms)]

pub mod codec;
pub mod history;
pub mod input;
pub mod persistence;
pub mod raster;
pub mod session;
pub mod store;
pub mod tools;
pub mod util;

pub use codec::CodecError;
pub use history::History;
pub use input::{GestureController, PointerButton, PointerEvent};
pub use persistence::SessionSnapshot;
pub use raster::{Color, PixelEdit, Point, Raster, RasterError};
pub use session::{Action, EditorSession, EditorState};
pub use store::{ArtStore, MemoryStore, StoreBridge, StoreError, StoreEvent};
pub use tools::{Gesture, ToolAction, ToolKind};
