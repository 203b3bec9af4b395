use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond time source.
///
/// Only differences between readings matter; the epoch is up to the clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock; readings are milliseconds since construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so a test (or a host with its own frame
/// timestamps) can keep a handle after giving one to a viewport.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
