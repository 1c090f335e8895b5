use futures::channel::oneshot;
use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::raster::Raster;
use crate::session::{Action, EditorSession};

/// Errors from the external store collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store collaborator is not available")]
    Unavailable,

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("stored payload could not be decoded: {0}")]
    Payload(#[from] CodecError),
}

/// The external persistent store: an opaque hex byte blob in, the same
/// blob back out. Both calls answer asynchronously on the returned channel
/// whenever they finish; the core never retries, times out or cancels.
pub trait ArtStore {
    fn write(&mut self, payload: String) -> oneshot::Receiver<Result<(), StoreError>>;
    fn read(&mut self) -> oneshot::Receiver<Result<String, StoreError>>;
}

enum Pending {
    Write(oneshot::Receiver<Result<(), StoreError>>),
    Read(oneshot::Receiver<Result<String, StoreError>>),
}

/// Outcome of a completed store request.
#[derive(Debug)]
pub enum StoreEvent {
    Saved,
    /// A load response arrived and replaced the session picture.
    Loaded,
    Failed(StoreError),
}

/// Bridges the editor to an [`ArtStore`], holding at most one outstanding
/// request. An absent collaborator surfaces [`StoreError::Unavailable`]
/// instead of crashing the session; a response that never arrives simply
/// leaves the session in its prior state.
pub struct StoreBridge {
    store: Option<Box<dyn ArtStore>>,
    in_flight: Option<Pending>,
}

impl StoreBridge {
    pub fn new(store: Box<dyn ArtStore>) -> Self {
        Self {
            store: Some(store),
            in_flight: None,
        }
    }

    /// A bridge with no collaborator behind it. Every request fails with
    /// [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            store: None,
            in_flight: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Encode the raster and fire a write. Refused while another request
    /// is outstanding.
    pub fn request_save(&mut self, raster: &Raster) -> Result<(), StoreError> {
        if self.in_flight.is_some() {
            log::debug!("save ignored: a store request is already outstanding");
            return Ok(());
        }
        let store = self.store.as_mut().ok_or(StoreError::Unavailable)?;
        let payload = codec::encode(raster)?;
        log::info!("writing {} hex characters to the store", payload.len());
        self.in_flight = Some(Pending::Write(store.write(payload)));
        Ok(())
    }

    /// Fire a read. Refused while another request is outstanding.
    pub fn request_load(&mut self) -> Result<(), StoreError> {
        if self.in_flight.is_some() {
            log::debug!("load ignored: a store request is already outstanding");
            return Ok(());
        }
        let store = self.store.as_mut().ok_or(StoreError::Unavailable)?;
        log::info!("requesting picture from the store");
        self.in_flight = Some(Pending::Read(store.read()));
        Ok(())
    }

    /// Poll the outstanding request. A load response replaces the session
    /// picture exactly once; failures are reported and leave the session
    /// untouched.
    pub fn poll(&mut self, session: &mut EditorSession) -> Option<StoreEvent> {
        let event = match self.in_flight.as_mut()? {
            Pending::Write(rx) => match rx.try_recv() {
                Ok(None) => return None,
                Ok(Some(Ok(()))) => StoreEvent::Saved,
                Ok(Some(Err(err))) => StoreEvent::Failed(err),
                Err(oneshot::Canceled) => StoreEvent::Failed(StoreError::Backend(
                    "store dropped the response channel".into(),
                )),
            },
            Pending::Read(rx) => match rx.try_recv() {
                Ok(None) => return None,
                Ok(Some(Ok(payload))) => match codec::decode(&payload) {
                    Ok(raster) => {
                        session.dispatch(Action::Picture(raster));
                        StoreEvent::Loaded
                    }
                    Err(err) => StoreEvent::Failed(StoreError::Payload(err)),
                },
                Ok(Some(Err(err))) => StoreEvent::Failed(err),
                Err(oneshot::Canceled) => StoreEvent::Failed(StoreError::Backend(
                    "store dropped the response channel".into(),
                )),
            },
        };

        self.in_flight = None;
        if let StoreEvent::Failed(err) = &event {
            log::error!("store request failed: {err}");
        }
        Some(event)
    }
}

/// In-process store that answers immediately. The reference collaborator
/// for tests and examples.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtStore for MemoryStore {
    fn write(&mut self, payload: String) -> oneshot::Receiver<Result<(), StoreError>> {
        let (tx, rx) = oneshot::channel();
        self.payload = Some(payload);
        let _ = tx.send(Ok(()));
        rx
    }

    fn read(&mut self) -> oneshot::Receiver<Result<String, StoreError>> {
        let (tx, rx) = oneshot::channel();
        let result = self
            .payload
            .clone()
            .ok_or_else(|| StoreError::Backend("store holds no picture".into()));
        let _ = tx.send(result);
        rx
    }
}
