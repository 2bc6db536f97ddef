//! Per-element committed scroll state.
//!
//! The engine remembers where each element last settled so that sequential
//! gestures continue from the previous offset instead of restarting at the
//! origin. The association is keyed by the allocation identity of the
//! element's `Arc` and holds only a [`Weak`] reference: it is an auxiliary
//! index, not an ownership edge. When the last strong reference to an
//! element is dropped elsewhere, its entry becomes dead and is pruned on the
//! next store access.
//!
//! State lives for the test process, matching the module-level registry the
//! simulation exposes through [`committed_state`] and [`commit_state`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The last committed scroll offset for one element.
///
/// Exactly one `ScrollState` (or absence, meaning origin) exists per element
/// at any time. It is created lazily on first interaction and overwritten
/// after each completed interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// The horizontal offset in points.
    pub x: f64,
    /// The vertical offset in points.
    pub y: f64,
}

impl ScrollState {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: ScrollState = ScrollState { x: 0.0, y: 0.0 };

    /// Creates a state from its components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this state is the origin.
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

struct Entry {
    element: Weak<Element>,
    state: ScrollState,
}

/// Identity-keyed, non-owning association from elements to their committed
/// scroll state.
#[derive(Default)]
pub struct ScrollStateStore {
    entries: Mutex<HashMap<usize, Entry>>,
}

impl ScrollStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed state for `element`, or the origin if none has
    /// been recorded.
    pub fn get(&self, element: &Arc<Element>) -> ScrollState {
        let mut entries = self.lock();
        Self::prune(&mut entries);
        entries
            .get(&Self::key(element))
            .map(|entry| entry.state)
            .unwrap_or_default()
    }

    /// Records `state` as the committed state for `element`.
    pub fn set(&self, element: &Arc<Element>, state: ScrollState) {
        let mut entries = self.lock();
        Self::prune(&mut entries);
        entries.insert(
            Self::key(element),
            Entry {
                element: Arc::downgrade(element),
                state,
            },
        );
    }

    /// Number of live associations currently held.
    pub fn len(&self) -> usize {
        let mut entries = self.lock();
        Self::prune(&mut entries);
        entries.len()
    }

    /// Whether the store holds no live associations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key(element: &Arc<Element>) -> usize {
        Arc::as_ptr(element) as usize
    }

    /// Drops entries whose element has been deallocated. Also protects the
    /// identity keys against pointer reuse: a reused allocation can never
    /// observe a dead predecessor's state.
    fn prune(entries: &mut HashMap<usize, Entry>) {
        entries.retain(|_, entry| entry.element.strong_count() > 0);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<usize, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static STORE: LazyLock<ScrollStateStore> = LazyLock::new(ScrollStateStore::new);

/// Returns the committed scroll state for `element` from the process-wide
/// store, defaulting to the origin.
pub fn committed_state(element: &Arc<Element>) -> ScrollState {
    STORE.get(element)
}

/// Commits `state` for `element` in the process-wide store.
pub fn commit_state(element: &Arc<Element>, state: ScrollState) {
    STORE.set(element, state);
}
