use std::hint::black_box;
use std::time::{Duration, Instant};

/// Times a single membership query with the monotonic clock.
///
/// `Instant` is monotonic by contract, so the measurement cannot be skewed
/// by wall-clock adjustments. The query result is routed through
/// [`black_box`] to keep the call from being optimized away, then compared
/// against the expected outcome; the elapsed time itself never affects
/// correctness.
pub fn time_membership(expected: bool, query: impl FnOnce() -> bool) -> (Duration, bool) {
    let start = Instant::now();
    let observed = black_box(query());
    let elapsed = start.elapsed();

    (elapsed, observed == expected)
}
