use std::{
    sync::{Arc, OnceLock},
    time::{Duration, Instant},
};

/// Elapsed time accessor handed out by a timing session.
///
/// While the session is running it reads the clock on every call, once the
/// session has stopped the value is frozen at the stop time.
#[derive(Debug, Clone)]
pub struct Elapsed {
    start: Instant,
    stop: Arc<OnceLock<Instant>>,
}

impl Elapsed {
    pub(crate) fn start() -> Self {
        Self {
            start: Instant::now(),
            stop: Arc::new(OnceLock::new()),
        }
    }

    /// Time since the session started, or its total duration once stopped.
    pub fn get(&self) -> Duration {
        match self.stop.get() {
            Some(stop) => stop.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.get().is_some()
    }

    // The first call wins, later calls return the same duration.
    pub(crate) fn stop(&self) -> Duration {
        self.stop
            .get_or_init(Instant::now)
            .duration_since(self.start)
    }
}
