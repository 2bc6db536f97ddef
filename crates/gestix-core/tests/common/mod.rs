//! Shared test helpers for gestix-core integration tests.
//!
//! Provides pre-wired scroll views with a recording handler on every event
//! kind, plus a projection of recorded streams into the `(name, x, y)`
//! triples the sequence assertions compare against.

use std::sync::{Arc, Once};

use gestix_core::element::{Element, ElementKind};
use gestix_core::recorder::EventRecorder;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once so failing tests show the
/// dispatch log. Filtering follows `RUST_LOG`.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A scroll view with an [`EventRecorder`] subscribed to every event kind.
pub fn recorded_scroll_view() -> (Arc<Element>, EventRecorder) {
    init_tracing();
    let element = Element::new(ElementKind::ScrollView);
    let recorder = EventRecorder::new();
    recorder.record_all(&element);
    (element, recorder)
}

/// A plain (non-scrollable) view with a recorder, for rejection tests.
pub fn recorded_view() -> (Arc<Element>, EventRecorder) {
    init_tracing();
    let element = Element::new(ElementKind::View);
    let recorder = EventRecorder::new();
    recorder.record_all(&element);
    (element, recorder)
}

/// Projects the recorded stream into `(event name, x, y)` triples.
pub fn named_sequence(recorder: &EventRecorder) -> Vec<(&'static str, f64, f64)> {
    recorder
        .sequence()
        .into_iter()
        .map(|(kind, x, y)| (kind.name(), x, y))
        .collect()
}
