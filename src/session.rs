use crate::history::History;
use crate::raster::{Color, Raster};
use crate::tools::ToolKind;
use crate::util::time::{Clock, SystemClock};

/// Everything a tool needs to see: the visible picture, the active tool
/// and the active color. Plain data, replaced wholesale on every dispatch.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub raster: Raster,
    pub tool: ToolKind,
    pub color: Color,
}

impl Default for EditorState {
    fn default() -> Self {
        // The classic 60x30 canvas filled with paper gray.
        let raster = Raster::empty(60, 30, Color::rgb(0xf0, 0xf0, 0xf0))
            .expect("default canvas dimensions are positive");
        Self {
            raster,
            tool: ToolKind::Draw,
            color: Color::BLACK,
        }
    }
}

/// An action dispatched against the session. Mirrors the four things the
/// editor can do: replace the picture, change color, change tool, undo.
#[derive(Debug, Clone)]
pub enum Action {
    Picture(Raster),
    Color(Color),
    Tool(ToolKind),
    Undo,
}

/// Owns the single mutable cell of the editor: the current state plus its
/// undo history. All mutation funnels through [`EditorSession::dispatch`],
/// which replaces state rather than editing it in place, so consumers can
/// hold references to the previous state's raster safely.
pub struct EditorSession {
    state: EditorState,
    history: History,
    clock: Box<dyn Clock>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_state(EditorState::default())
    }

    pub fn with_state(state: EditorState) -> Self {
        Self {
            state,
            history: History::new(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_raster(raster: Raster) -> Self {
        Self::with_state(EditorState {
            raster,
            ..EditorState::default()
        })
    }

    /// Swap in a different time source. Tests use this to drive the
    /// history coalescing window deterministically.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn raster(&self) -> &Raster {
        &self.state.raster
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The single dispatch point. Picture replacements go through the
    /// history so rapid edits coalesce into one undo step; color and tool
    /// changes are plain field replacements.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Picture(raster) => {
                let now = self.clock.now_ms();
                self.history.record(&self.state.raster, now);
                self.state.raster = raster;
            }
            Action::Color(color) => self.state.color = color,
            Action::Tool(tool) => {
                log::debug!("tool changed to {}", tool.name());
                self.state.tool = tool;
            }
            Action::Undo => {
                if let Some(previous) = self.history.undo() {
                    self.state.raster = previous;
                }
            }
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
