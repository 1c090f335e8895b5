use std::cell::Cell;
use std::rc::Rc;

/// Source of wall-clock time for the history coalescing window.
///
/// The editor only ever compares differences between readings, so the epoch
/// does not matter; what matters is that tests can drive the clock by hand.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real wall-clock time in milliseconds since the UNIX epoch.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// A hand-driven clock. Clones share the same reading, so a test can keep
/// one handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn advance(&self, delta_ms: u64) {
        self.0.set(self.0.get() + delta_ms);
    }

    pub fn set(&self, now_ms: u64) {
        self.0.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// Get a timestamp in seconds since the UNIX epoch.
pub fn timestamp_secs() -> u64 {
    SystemClock.now_ms() / 1000
}
