use crate::raster::Raster;

/// Edits closer together than this share one undo checkpoint.
pub const COALESCE_WINDOW_MS: u64 = 1000;

/// Undo history for the visible picture.
///
/// Checkpoints are coalesced by wall-clock time, not by gesture: a rapid
/// drag stroke collapses into a single undo step, while a pause longer than
/// [`COALESCE_WINDOW_MS`] inside the same drag still splits it. That
/// imprecision is deliberate and covered by tests.
#[derive(Debug, Default)]
pub struct History {
    /// Prior pictures, most recent first. Never contains the current one.
    done: Vec<Raster>,
    /// When the last checkpoint was pushed. `None` forces the next edit to
    /// checkpoint, which is also the state after an undo: whatever follows
    /// an undo must never merge into the restored picture.
    done_at: Option<u64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit about to replace `current`. Pushes `current` as a new
    /// checkpoint when the coalescing window has elapsed; returns whether a
    /// checkpoint was pushed.
    pub fn record(&mut self, current: &Raster, now_ms: u64) -> bool {
        let elapsed = self
            .done_at
            .is_none_or(|at| now_ms.saturating_sub(at) >= COALESCE_WINDOW_MS);
        if elapsed {
            self.done.insert(0, current.clone());
            self.done_at = Some(now_ms);
        }
        elapsed
    }

    /// Pop the most recent checkpoint, if any. Clearing the checkpoint
    /// timestamp here is what keeps a later edit from silently merging
    /// into the restored picture.
    pub fn undo(&mut self) -> Option<Raster> {
        if self.done.is_empty() {
            return None;
        }
        self.done_at = None;
        Some(self.done.remove(0))
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}
