// Monotonic timing for sort runs

use std::time::{Duration, Instant};

struct Timer {
    start: Instant,
}

impl Timer {
    fn start() -> Self {
        Self { start: Instant::now() }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `f` once and return its result together with the wall-clock time it took
pub fn time_once<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let timer = Timer::start();
    let result = f();
    (result, timer.elapsed())
}
