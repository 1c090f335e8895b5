use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::raster::Color;
use crate::session::{EditorSession, EditorState};
use crate::tools::ToolKind;
use crate::util::time;

/// Errors that can occur during session snapshot operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read or write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode the picture: {0}")]
    Codec(#[from] CodecError),
}

/// A serializable snapshot of an editing session: active tool, active
/// color, and the picture as a codec byte string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tool: ToolKind,
    pub color: Color,
    /// Hex byte string produced by the codec pipeline.
    pub picture: String,
    /// Seconds since the UNIX epoch when the snapshot was taken.
    pub taken_at: u64,
    /// Crate version that wrote the snapshot.
    pub version: String,
}

impl SessionSnapshot {
    pub fn capture(session: &EditorSession) -> Result<Self, PersistenceError> {
        Ok(Self {
            tool: session.state().tool,
            color: session.state().color,
            picture: codec::encode(session.raster())?,
            taken_at: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    }

    /// Rebuild a fresh session (empty history) from this snapshot.
    pub fn restore(&self) -> Result<EditorSession, PersistenceError> {
        let raster = codec::decode(&self.picture)?;
        Ok(EditorSession::with_state(EditorState {
            raster,
            tool: self.tool,
            color: self.color,
        }))
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("saved session snapshot to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }
}
