//! User-event entry points.
//!
//! [`UserEvent`] is the handle test authors drive gestures through. It holds
//! the simulation configuration and exposes one async method per gesture;
//! each method runs the full event sequence to completion before resolving,
//! so a test can `await` it and then assert on everything that was
//! dispatched.
//!
//! For one-off calls the module-level [`scroll_to`] and [`scroll_to_top`]
//! free functions perform setup-and-invoke in one step.
//!
//! # Example
//!
//! ```
//! use gestix_core::element::{Element, ElementKind};
//! use gestix_core::scroll::{Momentum, ScrollToOptions};
//! use gestix_core::simulate::UserEvent;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gestix_core::error::GestureError> {
//! let scroll_view = Element::new(ElementKind::ScrollView);
//!
//! let user = UserEvent::setup();
//! user.scroll_to(
//!     &scroll_view,
//!     ScrollToOptions::vertical(100.0).with_momentum(Momentum::new(30.0)),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{info_span, Instrument};

use crate::config::SimConfig;
use crate::element::Element;
use crate::error::GestureError;
use crate::scroll::{self, ScrollToOptions, ScrollToTopOptions};

/// A configured gesture-simulation handle.
#[derive(Debug, Clone, Default)]
pub struct UserEvent {
    config: SimConfig,
}

impl UserEvent {
    /// Creates a handle with default simulation settings.
    pub fn setup() -> Self {
        Self::default()
    }

    /// Creates a handle with explicit simulation settings.
    pub fn with_config(config: SimConfig) -> Self {
        Self { config }
    }

    /// The simulation settings this handle applies.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulates a drag scroll of `element` to the offset in `options`,
    /// with an optional momentum phase.
    ///
    /// Fails with [`GestureError::WrongElementType`] if `element` is not a
    /// host scroll container; no event is dispatched in that case.
    pub async fn scroll_to(
        &self,
        element: &Arc<Element>,
        options: ScrollToOptions,
    ) -> Result<(), GestureError> {
        let span = info_span!(
            "simulate_gesture",
            gesture = "scroll_to",
            element = element.type_name(),
            target = element.instance_tag(),
        );
        scroll::scroll_to(element, options, &self.config)
            .instrument(span)
            .await
    }

    /// Simulates the status-bar tap that scrolls `element` back to the
    /// origin.
    ///
    /// Fails with [`GestureError::WrongElementType`] for non-scroll
    /// containers and with [`GestureError::NoOpTrigger`] when the committed
    /// offset is already the origin; no event is dispatched in either case.
    pub async fn scroll_to_top(
        &self,
        element: &Arc<Element>,
        options: ScrollToTopOptions,
    ) -> Result<(), GestureError> {
        let span = info_span!(
            "simulate_gesture",
            gesture = "scroll_to_top",
            element = element.type_name(),
            target = element.instance_tag(),
        );
        scroll::scroll_to_top(element, options, &self.config)
            .instrument(span)
            .await
    }
}

/// One-shot `scroll_to` with default settings.
pub async fn scroll_to(element: &Arc<Element>, options: ScrollToOptions) -> Result<(), GestureError> {
    UserEvent::setup().scroll_to(element, options).await
}

/// One-shot `scroll_to_top` with default settings.
pub async fn scroll_to_top(
    element: &Arc<Element>,
    options: ScrollToTopOptions,
) -> Result<(), GestureError> {
    UserEvent::setup().scroll_to_top(element, options).await
}
