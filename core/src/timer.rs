use std::time::{Duration, Instant};

/// Integer duration reported by the benchmarks, in whatever [`Resolution`]
/// the caller asked for.
pub type TimeValue = u64;

/// Granularity of a [`TimeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Micros,
    Millis,
}

impl Resolution {
    /// Short unit suffix used in table headers.
    pub fn unit(&self) -> &'static str {
        match self {
            Resolution::Micros => "us",
            Resolution::Millis => "ms",
        }
    }

    /// Whole units contained in `duration`, saturating at `u64::MAX`.
    pub fn count(&self, duration: Duration) -> TimeValue {
        let units = match self {
            Resolution::Micros => duration.as_micros(),
            Resolution::Millis => duration.as_millis(),
        };
        TimeValue::try_from(units).unwrap_or(TimeValue::MAX)
    }
}

/// Monotonic stopwatch. Starts running on construction.
#[derive(Debug, Clone, Copy)]
pub struct StopWatch {
    start: Instant,
}

impl StopWatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Resets the start instant to now and returns it.
    pub fn restart(&mut self) -> Instant {
        self.start = Instant::now();
        self.start
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_us(&self) -> TimeValue {
        Resolution::Micros.count(self.elapsed())
    }

    pub fn elapsed_ms(&self) -> TimeValue {
        Resolution::Millis.count(self.elapsed())
    }

    pub fn elapsed_in(&self, resolution: Resolution) -> TimeValue {
        resolution.count(self.elapsed())
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::start()
    }
}

/// Runs `op` under a fresh stopwatch and returns its output together with the
/// elapsed time.
pub fn measure<R>(resolution: Resolution, op: impl FnOnce() -> R) -> (R, TimeValue) {
    let watch = StopWatch::start();
    let output = op();
    (output, watch.elapsed_in(resolution))
}
