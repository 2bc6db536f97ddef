//! Event recorder test utility.
//!
//! Registers handlers that append every delivered event to a shared log, so
//! a test can run a gesture and then assert on the complete recorded
//! stream. Each record carries a unique id and a capture timestamp alongside
//! the event kind and payload, and serializes to JSON for snapshot-style
//! comparison.
//!
//! # Example
//!
//! ```
//! use gestix_core::element::{Element, ElementKind};
//! use gestix_core::event::EventKind;
//! use gestix_core::recorder::EventRecorder;
//!
//! let element = Element::new(ElementKind::ScrollView);
//! let recorder = EventRecorder::new();
//! element.set_handler(EventKind::Scroll, recorder.handler_for(EventKind::Scroll));
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::Element;
use crate::event::{EventKind, ScrollEventPayload};

/// One recorded event delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// When the event was delivered.
    pub timestamp: DateTime<Utc>,

    /// The kind of event that was delivered.
    pub name: EventKind,

    /// The payload the handler received.
    pub payload: ScrollEventPayload,
}

/// Collects the events delivered to the handlers it hands out.
///
/// Clones share the same underlying log, so a recorder can be handed to
/// several handlers (or elements) and observed from the test body.
#[derive(Clone, Default)]
pub struct EventRecorder {
    records: Arc<Mutex<Vec<EventRecord>>>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handler that records every delivery as `kind`.
    ///
    /// The handler is registrable via [`Element::set_handler`].
    pub fn handler_for(&self, kind: EventKind) -> impl FnMut(&ScrollEventPayload) + Send + 'static {
        let records = Arc::clone(&self.records);
        move |payload| {
            records
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    name: kind,
                    payload: payload.clone(),
                });
        }
    }

    /// Registers a recording handler on `element` for every event kind.
    pub fn record_all(&self, element: &Element) {
        for kind in EventKind::ALL {
            element.set_handler(kind, self.handler_for(kind));
        }
    }

    /// Returns a copy of all recorded events, in delivery order.
    pub fn events(&self) -> Vec<EventRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded stream reduced to `(kind, x, y)` content
    /// offsets, the shape most sequence assertions want.
    pub fn sequence(&self) -> Vec<(EventKind, f64, f64)> {
        self.events()
            .iter()
            .map(|record| {
                (
                    record.name,
                    record.payload.content_offset.x,
                    record.payload.content_offset.y,
                )
            })
            .collect()
    }

    /// Discards everything recorded so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::dispatch_event;
    use crate::element::ElementKind;
    use crate::event::{EventBuilder, Offset};

    #[test]
    fn records_carry_unique_ids_and_ordered_timestamps() {
        let element = Element::new(ElementKind::ScrollView);
        let recorder = EventRecorder::new();
        recorder.record_all(&element);

        dispatch_event(&element, EventKind::Scroll, EventBuilder::scroll(Offset::new(0.0, 10.0)));
        dispatch_event(&element, EventKind::Scroll, EventBuilder::scroll(Offset::new(0.0, 20.0)));

        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_ne!(events[0].id, events[1].id);
        assert!(events[0].timestamp <= events[1].timestamp);
    }

    #[test]
    fn sequence_projects_kind_and_content_offset() {
        let element = Element::new(ElementKind::ScrollView);
        let recorder = EventRecorder::new();
        recorder.record_all(&element);

        dispatch_event(
            &element,
            EventKind::ScrollBeginDrag,
            EventBuilder::scroll(Offset::new(5.0, 15.0)),
        );

        assert_eq!(recorder.sequence(), vec![(EventKind::ScrollBeginDrag, 5.0, 15.0)]);
    }

    #[test]
    fn clones_share_the_same_log() {
        let element = Element::new(ElementKind::ScrollView);
        let recorder = EventRecorder::new();
        let observer = recorder.clone();
        recorder.record_all(&element);

        dispatch_event(&element, EventKind::Scroll, EventBuilder::scroll(Offset::ORIGIN));
        assert_eq!(observer.events().len(), 1);

        observer.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn record_serializes_with_camel_case_event_name() {
        let element = Element::new(ElementKind::ScrollView);
        let recorder = EventRecorder::new();
        recorder.record_all(&element);

        dispatch_event(&element, EventKind::ScrollToTop, EventBuilder::scroll(Offset::ORIGIN));

        let json = serde_json::to_value(&recorder.events()[0]).unwrap();
        assert_eq!(json["name"], "scrollToTop");
        assert_eq!(json["payload"]["contentOffset"]["y"], 0.0);
    }
}
