use super::{Clock, SystemClock};

/// Weight of the newest sample in the smoothed frame duration.
const SMOOTHING: f64 = 0.1;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the previous tick; `0.0` on the first tick.
    pub elapsed_ms: f64,

    /// Clock reading taken at the tick.
    pub now_ms: f64,
}

/// Per-viewport frame timer.
///
/// Each `tick()` measures the time since the previous tick and folds it into
/// an exponentially smoothed frame duration:
/// `avg' = 0.1 * sample + 0.9 * avg`.
///
/// The first tick has nothing to measure against and produces no sample; the
/// second tick's interval seeds the average.
///
/// Elapsed time is clamped at zero, so a clock stepping backwards yields `0.0`.
pub struct FrameTimer {
    clock: Box<dyn Clock>,
    last_ms: Option<f64>,
    average_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            last_ms: None,
            average_ms: None,
        }
    }

    /// Advances the timer and returns the new snapshot.
    pub fn tick(&mut self) -> FrameTime {
        let now_ms = self.clock.now_ms();

        let elapsed_ms = match self.last_ms {
            Some(last) => {
                let sample = (now_ms - last).max(0.0);
                self.average_ms = Some(match self.average_ms {
                    Some(avg) => SMOOTHING * sample + (1.0 - SMOOTHING) * avg,
                    None => sample,
                });
                sample
            }
            None => 0.0,
        };

        self.last_ms = Some(now_ms);

        FrameTime { elapsed_ms, now_ms }
    }

    /// Smoothed frame duration in milliseconds, once two frames have run.
    #[inline]
    pub fn average_frame_duration(&self) -> Option<f64> {
        self.average_ms
    }

    /// Clock reading of the most recent tick.
    #[inline]
    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_ms
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(Box::new(SystemClock::new()))
    }
}

impl core::fmt::Debug for FrameTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameTimer")
            .field("last_ms", &self.last_ms)
            .field("average_ms", &self.average_ms)
            .finish_non_exhaustive()
    }
}
