use accessbench_core::engine::Clock;
use mockall::mock;

mock! {
    pub Timer {}
    impl Clock for Timer {
        fn now_ms(&self) -> f64;
    }
}

/// Builds a clock whose consecutive start/end readings differ by `durations`.
///
/// Expects exactly two readings per duration, so a test fails if the engine
/// times a warmup pass or skips a measured one.
pub fn scripted_timer(durations: &[f64]) -> MockTimer {
    let mut readings = Vec::with_capacity(durations.len() * 2);
    let mut base = 1_000.0;
    for &d in durations {
        readings.push(base);
        readings.push(base + d);
        base += 100.0;
    }

    let expected_calls = readings.len();
    let mut next = readings.into_iter();
    let mut timer = MockTimer::new();
    let _ = timer
        .expect_now_ms()
        .times(expected_calls)
        .returning(move || next.next().unwrap_or(f64::NAN));
    timer
}
