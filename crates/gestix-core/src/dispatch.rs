//! Synchronous event dispatch to registered element handlers.
//!
//! Dispatch is the sole mechanism by which simulated events become
//! observable effects: the engine hands a payload here, and this module
//! delivers it to whatever handler the test author registered for that
//! event kind on the target element. An element that does not subscribe to
//! an event kind simply never sees it; the dispatch is a silent no-op, just
//! like a component that omits the corresponding callback prop.
//!
//! Before invoking the handler, the dispatcher stamps the element's host
//! instance tag into the payload's `target` field, replacing the builder's
//! inert `0` default.

use tracing::{debug, trace};

use crate::element::Element;
use crate::event::{EventKind, ScrollEventPayload};

/// Delivers `payload` to the handler registered for `kind` on `element`.
///
/// The handler runs synchronously on the caller's stack. If no handler is
/// registered for `kind`, nothing happens.
pub fn dispatch_event(element: &Element, kind: EventKind, mut payload: ScrollEventPayload) {
    payload.target = element.instance_tag();

    let handled = element.invoke_handler(kind, &payload);
    if handled {
        debug!(
            event = kind.name(),
            target = payload.target,
            x = payload.content_offset.x,
            y = payload.content_offset.y,
            "dispatched simulated event"
        );
    } else {
        trace!(
            event = kind.name(),
            target = payload.target,
            "no handler registered, event dropped"
        );
    }
}
