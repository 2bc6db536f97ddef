//! # gestix-core
//!
//! Core library for simulating realistic user gesture event sequences against
//! UI component trees in tests.
//!
//! Given a high-level intent ("scroll this element to offset y"), the crate
//! synthesizes a temporally-ordered sequence of discrete scroll events
//! (begin-drag, intermediate motion samples, end-drag, optional momentum
//! phase), delivers each one synchronously to the handlers a test registered
//! on the target element, and remembers the committed scroll offset per
//! element so that sequential gestures continue from where the last one
//! ended.
//!
//! ## Modules
//!
//! - [`element`] - Host element model: capability tag, handler registry, instance tag
//! - [`event`] - Event kinds, payload types, and the payload builder
//! - [`dispatch`] - Synchronous event dispatch to registered handlers
//! - [`state`] - Per-element committed scroll state (weak, non-owning association)
//! - [`sched`] - Cooperative yield between emitted events
//! - [`scroll`] - Scroll simulation engine (`scroll_to`, `scroll_to_top`)
//! - [`error`] - Error kinds for rejected gestures
//! - [`config`] - Simulation defaults (intermediate sample counts)
//! - [`recorder`] - Event recorder test utility for asserting on event streams
//! - [`simulate`] - `UserEvent` entry points and one-shot convenience functions
//!
//! ## Example
//!
//! ```
//! use gestix_core::element::{Element, ElementKind};
//! use gestix_core::recorder::EventRecorder;
//! use gestix_core::scroll::ScrollToOptions;
//! use gestix_core::simulate::UserEvent;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gestix_core::error::GestureError> {
//! let scroll_view = Element::new(ElementKind::ScrollView);
//! let recorder = EventRecorder::new();
//! recorder.record_all(&scroll_view);
//!
//! let user = UserEvent::setup();
//! user.scroll_to(&scroll_view, ScrollToOptions::vertical(100.0)).await?;
//!
//! // begin-drag + 3 intermediate samples + end-drag
//! assert_eq!(recorder.events().len(), 5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod event;
pub mod recorder;
pub mod sched;
pub mod scroll;
pub mod simulate;
pub mod state;
