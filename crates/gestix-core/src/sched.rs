//! Cooperative scheduling between emitted events.
//!
//! Every event in a multi-event gesture sequence is separated by one
//! suspension point so that each event lands on its own scheduler tick. A
//! consumer driving the runtime with a mocked clock observes the events as
//! distinct ticks and can assert their ordering precisely; a consumer on a
//! real clock pays no wall-clock delay, because the suspension resolves as
//! soon as the scheduler polls the task again.
//!
//! Correctness here depends on tick granularity, not elapsed time, so this
//! is a yield and deliberately not a timer.

/// Suspends the current task once, resuming on the next scheduler tick.
pub async fn next_tick() {
    tokio::task::yield_now().await;
}
