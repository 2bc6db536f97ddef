//! Host element model for gesture simulation.
//!
//! This module provides the minimal element surface the simulation engine
//! consumes from its collaborators: a capability tag ("is this a host scroll
//! container, and what is its declared type name"), and an event handler
//! registry ("what callback, if any, is registered for a given event kind").
//! Component querying, rendering, and tree diffing live outside this crate;
//! tests construct [`Element`]s directly and register the handlers they want
//! to observe.
//!
//! Every element receives a unique, monotonically-assigned instance tag at
//! construction. The dispatcher stamps that tag into each payload's `target`
//! field before invoking a handler.
//!
//! # Example
//!
//! ```
//! use gestix_core::element::{Element, ElementKind};
//! use gestix_core::event::EventKind;
//!
//! let scroll_view = Element::with_test_id(ElementKind::ScrollView, "feed");
//! scroll_view.set_handler(EventKind::Scroll, |payload| {
//!     println!("scrolled to y={}", payload.content_offset.y);
//! });
//!
//! assert!(scroll_view.kind().is_scroll_view());
//! assert_eq!(scroll_view.type_name(), "ScrollView");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::event::{EventKind, ScrollEventPayload};

/// Capability tag identifying what kind of host element this is.
///
/// Only [`ElementKind::ScrollView`] backs native scrolling behavior; the
/// scroll engine rejects every other kind before emitting any event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A host scroll container.
    ScrollView,
    /// A plain layout element.
    View,
    /// A text element.
    Text,
    /// A text input element.
    TextInput,
}

impl ElementKind {
    /// Returns the declared type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::ScrollView => "ScrollView",
            ElementKind::View => "View",
            ElementKind::Text => "Text",
            ElementKind::TextInput => "TextInput",
        }
    }

    /// Whether this kind backs native scrolling behavior.
    pub fn is_scroll_view(&self) -> bool {
        matches!(self, ElementKind::ScrollView)
    }
}

/// A callback registered for one event kind on one element.
pub type EventHandler = Box<dyn FnMut(&ScrollEventPayload) + Send>;

/// Registered handlers live in their own cell so the registry lock can be
/// released before a handler runs.
type HandlerCell = Arc<Mutex<EventHandler>>;

/// Source of unique instance tags. Starts at 1 so that 0 can stay the
/// builder's inert "no target" default.
static NEXT_INSTANCE_TAG: AtomicU64 = AtomicU64::new(1);

/// A host element a simulated gesture can target.
///
/// Elements are shared as `Arc<Element>`: the scroll engine keys its
/// per-element committed state on the allocation identity of that `Arc`
/// without holding a strong reference, so dropping the last `Arc` outside
/// the engine also releases the associated state.
pub struct Element {
    kind: ElementKind,
    test_id: Option<String>,
    instance_tag: u64,
    handlers: Mutex<HashMap<EventKind, HandlerCell>>,
}

impl Element {
    /// Creates a new element of the given kind.
    pub fn new(kind: ElementKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            test_id: None,
            instance_tag: NEXT_INSTANCE_TAG.fetch_add(1, Ordering::Relaxed),
            handlers: Mutex::new(HashMap::new()),
        })
    }

    /// Creates a new element carrying a test identifier, a labeling aid
    /// for debugging output.
    pub fn with_test_id(kind: ElementKind, test_id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            kind,
            test_id: Some(test_id.into()),
            instance_tag: NEXT_INSTANCE_TAG.fetch_add(1, Ordering::Relaxed),
            handlers: Mutex::new(HashMap::new()),
        })
    }

    /// The element's capability tag.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's declared type name.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// The test identifier this element was constructed with, if any.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    /// The unique host instance tag assigned at construction.
    pub fn instance_tag(&self) -> u64 {
        self.instance_tag
    }

    /// Registers `handler` for `kind`, replacing any previous handler for
    /// that kind. One handler per kind per element.
    pub fn set_handler(
        &self,
        kind: EventKind,
        handler: impl FnMut(&ScrollEventPayload) + Send + 'static,
    ) {
        self.lock_handlers()
            .insert(kind, Arc::new(Mutex::new(Box::new(handler))));
    }

    /// Removes the handler registered for `kind`, if any.
    pub fn remove_handler(&self, kind: EventKind) {
        self.lock_handlers().remove(&kind);
    }

    /// Whether a handler is registered for `kind`.
    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.lock_handlers().contains_key(&kind)
    }

    /// Invokes the handler registered for `kind` with `payload`, if one is
    /// registered. Returns whether a handler ran.
    ///
    /// The registry lock is released before the handler runs, so a handler
    /// may register, replace, or remove handlers on its own element, and
    /// may dispatch further events to it. The one restriction left is that
    /// a handler must not recursively dispatch its own event kind to its
    /// own element: the handler cell is locked while it runs.
    pub(crate) fn invoke_handler(&self, kind: EventKind, payload: &ScrollEventPayload) -> bool {
        let cell = self.lock_handlers().get(&kind).map(Arc::clone);
        match cell {
            Some(cell) => {
                let mut handler = cell.lock().unwrap_or_else(PoisonError::into_inner);
                (*handler)(payload);
                true
            }
            None => false,
        }
    }

    fn lock_handlers(&self) -> std::sync::MutexGuard<'_, HashMap<EventKind, HandlerCell>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("test_id", &self.test_id)
            .field("instance_tag", &self.instance_tag)
            .finish_non_exhaustive()
    }
}
