//! Event kinds and payload construction for simulated scroll gestures.
//!
//! This module defines the wire shape of every event the simulation engine
//! can emit: the [`EventKind`] discriminator, the [`ScrollEventPayload`]
//! carried by each event, and the [`EventBuilder`] that produces
//! structurally-complete payloads from minimal semantic inputs.
//!
//! Payloads mirror the shape production scroll handlers expect: besides the
//! content offset the gesture actually controls, they carry content size,
//! layout measurement, content inset, and velocity substructure. The
//! simulation cannot claim real measurement semantics for those fields, so
//! the builder fills them with stable zero defaults.
//!
//! # Example
//!
//! ```
//! use gestix_core::event::{EventBuilder, EventKind, Offset};
//!
//! let payload = EventBuilder::scroll(Offset::new(0.0, 100.0));
//! assert_eq!(payload.content_offset.y, 100.0);
//! assert_eq!(payload.velocity, Offset::ORIGIN);
//! assert_eq!(EventKind::ScrollEndDrag.name(), "scrollEndDrag");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a simulated scroll event.
///
/// Serialized under the camelCase names handlers are registered for
/// (`"scrollBeginDrag"`, `"scroll"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The user's finger touched down and started dragging.
    #[serde(rename = "scrollBeginDrag")]
    ScrollBeginDrag,

    /// An intermediate motion sample between drag start and commit.
    #[serde(rename = "scroll")]
    Scroll,

    /// The user's finger lifted; carries the exact target offset.
    #[serde(rename = "scrollEndDrag")]
    ScrollEndDrag,

    /// Deceleration continues past the drag end point.
    #[serde(rename = "momentumScrollBegin")]
    MomentumScrollBegin,

    /// Deceleration settled; carries the final momentum offset.
    #[serde(rename = "momentumScrollEnd")]
    MomentumScrollEnd,

    /// Status-bar tap snapped the container back to the origin.
    #[serde(rename = "scrollToTop")]
    ScrollToTop,
}

impl EventKind {
    /// All event kinds a scroll container can subscribe to.
    pub const ALL: [EventKind; 6] = [
        EventKind::ScrollBeginDrag,
        EventKind::Scroll,
        EventKind::ScrollEndDrag,
        EventKind::MomentumScrollBegin,
        EventKind::MomentumScrollEnd,
        EventKind::ScrollToTop,
    ];

    /// Returns the camelCase event name, suitable for handler lookup keys
    /// and tracing span metadata.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ScrollBeginDrag => "scrollBeginDrag",
            EventKind::Scroll => "scroll",
            EventKind::ScrollEndDrag => "scrollEndDrag",
            EventKind::MomentumScrollBegin => "momentumScrollBegin",
            EventKind::MomentumScrollEnd => "momentumScrollEnd",
            EventKind::ScrollToTop => "scrollToTop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A two-axis offset in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// The horizontal component.
    pub x: f64,
    /// The vertical component.
    pub y: f64,
}

impl Offset {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    /// Creates an offset from its components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// The width in points.
    pub width: f64,
    /// The height in points.
    pub height: f64,
}

impl Size {
    /// A zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Insets applied to the scrollable content, one per edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// The top inset in points.
    pub top: f64,
    /// The bottom inset in points.
    pub bottom: f64,
    /// The left inset in points.
    pub left: f64,
    /// The right inset in points.
    pub right: f64,
}

/// The payload carried by every simulated scroll event.
///
/// Field names serialize in camelCase so a recorded event stream can be
/// compared as JSON against what production scroll handlers receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEventPayload {
    /// Insets applied to the scrollable content.
    pub content_inset: EdgeInsets,

    /// The scroll position this event reports.
    pub content_offset: Offset,

    /// The total size of the scrollable content. Always zero: the
    /// simulation performs no layout.
    pub content_size: Size,

    /// The size of the visible viewport. Always zero: the simulation
    /// performs no layout.
    pub layout_measurement: Size,

    /// Whether the container should ignore responder-driven scrolling
    /// while this event settles.
    pub responder_ignore_scroll: bool,

    /// Host instance tag of the element the event targets. The builder
    /// leaves this at `0`; the dispatcher stamps the real tag.
    pub target: u64,

    /// The scroll velocity at the time of the sample. Always zero.
    pub velocity: Offset,
}

/// Builds structurally-valid payloads for each event family from minimal
/// semantic inputs.
pub struct EventBuilder;

impl EventBuilder {
    /// Builds a scroll payload positioned at `offset`.
    ///
    /// Every field the simulation cannot meaningfully measure (content
    /// size, layout, insets, velocity) is a deterministic zero default, so
    /// two payloads built from the same offset are identical.
    pub fn scroll(offset: Offset) -> ScrollEventPayload {
        ScrollEventPayload {
            content_inset: EdgeInsets::default(),
            content_offset: offset,
            content_size: Size::ZERO,
            layout_measurement: Size::ZERO,
            responder_ignore_scroll: true,
            target: 0,
            velocity: Offset::ORIGIN,
        }
    }
}
