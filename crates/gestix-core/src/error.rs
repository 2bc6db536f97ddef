//! Error kinds for rejected gestures.
//!
//! This is a test-assertion tool, so misuse is surfaced loudly: every error
//! propagates to the caller before a single event has been dispatched, and
//! the display text is stable enough to assert on directly. There is no
//! retry policy; a rejected gesture leaves the previously committed state
//! untouched.

use thiserror::Error;

/// Errors that can reject a simulated gesture.
#[derive(Error, Debug)]
pub enum GestureError {
    /// The target element's capability tag is not a scroll container.
    ///
    /// Raised synchronously before any event is emitted, naming the
    /// element's actual type.
    #[error("{operation}() works only with host \"ScrollView\" elements. Passed element has type \"{type_name}\".")]
    WrongElementType {
        /// The gesture operation that was attempted.
        operation: &'static str,
        /// The declared type name of the element that was passed.
        type_name: String,
    },

    /// `scroll_to_top` was invoked while the committed state is already the
    /// origin. On a real device the status-bar tap would not trigger, so
    /// the call is rejected rather than silently emitting nothing.
    #[error("scroll_to_top() does NOT trigger if content offset is already x:0, y:0.")]
    NoOpTrigger,
}
