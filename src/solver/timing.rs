//! Wall-clock instrumentation around pure computations.

use std::time::Instant;

/// Run `f` and return its output with the elapsed time in milliseconds.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64() * 1000.0)
}
