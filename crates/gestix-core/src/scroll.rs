//! Scroll simulation engine.
//!
//! Computes and emits the ordered event sequence for a scroll-to or
//! scroll-to-top intent. A drag phase is `scrollBeginDrag` at the current
//! committed offset, a number of evenly-spaced intermediate `scroll`
//! samples, and `scrollEndDrag` landing exactly on the requested target. An
//! optional momentum phase then continues past the drag end point with its
//! own begin/samples/end triple. Between consecutive events the engine
//! yields to the scheduler so that each event occupies its own tick.
//!
//! Two semantic sharp edges carried over from real single-axis scrolling:
//!
//! - An omitted axis in [`ScrollToOptions`] resolves to zero for the
//!   emitted payloads, but a zero target axis falls back to the previously
//!   committed value when the new state is remembered. The wire says 0; the
//!   remembered state says "unchanged".
//! - Interpolation divides the distance into `callbacks_number + 1` jumps,
//!   so intermediate samples approach but never reach the target; only the
//!   terminal event (`scrollEndDrag`, `momentumScrollEnd`, `scrollToTop`)
//!   carries the exact requested value.
//!
//! State is committed only after the full event sequence of a call, so a
//! failure partway through an interaction leaves the previously committed
//! state intact.

use std::sync::Arc;

use crate::config::SimConfig;
use crate::dispatch::dispatch_event;
use crate::element::Element;
use crate::error::GestureError;
use crate::event::{EventBuilder, EventKind, Offset};
use crate::sched;
use crate::state::{commit_state, committed_state, ScrollState};

/// Options for a `scroll_to` gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollToOptions {
    /// Target horizontal offset. Omitted means zero, not "keep current".
    pub x: Option<f64>,

    /// Target vertical offset. Omitted means zero, not "keep current".
    pub y: Option<f64>,

    /// Number of intermediate `scroll` samples to emit during the drag.
    /// Defaults to the configured drag step count (3).
    pub callbacks_number: Option<u32>,

    /// Optional momentum phase continuing past the drag end point.
    pub momentum: Option<Momentum>,
}

impl ScrollToOptions {
    /// A vertical scroll to offset `y`.
    pub fn vertical(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    /// A horizontal scroll to offset `x`.
    pub fn horizontal(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    /// Overrides the number of intermediate samples for the drag phase.
    pub fn with_steps(mut self, callbacks_number: u32) -> Self {
        self.callbacks_number = Some(callbacks_number);
        self
    }

    /// Adds a momentum phase after the drag.
    pub fn with_momentum(mut self, momentum: Momentum) -> Self {
        self.momentum = Some(momentum);
        self
    }
}

/// An optional post-drag deceleration phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    /// Additional offset magnitude covered during momentum, applied to each
    /// axis the drag actually moved.
    pub value: f64,

    /// Number of intermediate samples during the momentum phase. Defaults
    /// to the configured momentum step count (0).
    pub callbacks_number: Option<u32>,
}

impl Momentum {
    /// A momentum phase covering `value` additional points with the default
    /// sample count.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            callbacks_number: None,
        }
    }

    /// Overrides the number of intermediate samples for the momentum phase.
    pub fn with_steps(mut self, callbacks_number: u32) -> Self {
        self.callbacks_number = Some(callbacks_number);
        self
    }
}

/// Options for a `scroll_to_top` gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollToTopOptions {
    /// Number of intermediate `scroll` samples to emit on the way to the
    /// origin. Defaults to the configured scroll-to-top step count (0).
    pub callbacks_number: Option<u32>,
}

impl ScrollToTopOptions {
    /// Emits `callbacks_number` intermediate samples before settling.
    pub fn with_steps(callbacks_number: u32) -> Self {
        Self {
            callbacks_number: Some(callbacks_number),
        }
    }
}

/// Simulates a drag scroll of `element` to the offset in `options`,
/// followed by an optional momentum phase.
pub(crate) async fn scroll_to(
    element: &Arc<Element>,
    options: ScrollToOptions,
    config: &SimConfig,
) -> Result<(), GestureError> {
    ensure_scroll_view(element, "scroll_to")?;

    let start = committed_state(element);
    let target = Offset::new(options.x.unwrap_or(0.0), options.y.unwrap_or(0.0));
    let steps = options.callbacks_number.unwrap_or(config.drag_steps);

    emit_drag_sequence(element, start, target, steps, options.momentum, config).await;
    Ok(())
}

/// Simulates the status-bar tap that snaps `element` back to the origin.
pub(crate) async fn scroll_to_top(
    element: &Arc<Element>,
    options: ScrollToTopOptions,
    config: &SimConfig,
) -> Result<(), GestureError> {
    ensure_scroll_view(element, "scroll_to_top")?;

    let start = committed_state(element);
    if start.is_origin() {
        return Err(GestureError::NoOpTrigger);
    }

    let steps = options
        .callbacks_number
        .unwrap_or(config.scroll_to_top_steps);
    emit_intermediate_events(element, start, Offset::ORIGIN, steps).await;

    // A single terminal event describing a fully settled container.
    dispatch_event(element, EventKind::ScrollToTop, EventBuilder::scroll(Offset::ORIGIN));

    commit_state(element, ScrollState::ORIGIN);
    Ok(())
}

fn ensure_scroll_view(element: &Element, operation: &'static str) -> Result<(), GestureError> {
    if element.kind().is_scroll_view() {
        Ok(())
    } else {
        Err(GestureError::WrongElementType {
            operation,
            type_name: element.type_name().to_string(),
        })
    }
}

/// Emits begin-drag, intermediate samples, end-drag, and the optional
/// momentum phase, then commits the new state.
async fn emit_drag_sequence(
    element: &Arc<Element>,
    start: ScrollState,
    target: Offset,
    steps: u32,
    momentum: Option<Momentum>,
    config: &SimConfig,
) {
    dispatch_event(
        element,
        EventKind::ScrollBeginDrag,
        EventBuilder::scroll(Offset::new(start.x, start.y)),
    );
    sched::next_tick().await;

    emit_intermediate_events(element, start, target, steps).await;

    // The terminal drag event carries the resolved target exactly, zeros
    // included.
    dispatch_event(element, EventKind::ScrollEndDrag, EventBuilder::scroll(target));

    // For the remembered state a zero axis means "untouched": it falls back
    // to the previously committed value.
    let actual = ScrollState {
        x: if target.x == 0.0 { start.x } else { target.x },
        y: if target.y == 0.0 { start.y } else { target.y },
    };

    let Some(momentum) = momentum else {
        commit_state(element, actual);
        return;
    };

    sched::next_tick().await;
    dispatch_event(
        element,
        EventKind::MomentumScrollBegin,
        EventBuilder::scroll(target),
    );
    sched::next_tick().await;

    // Momentum extends each axis the drag actually moved; an axis resolved
    // to zero stays zero.
    let momentum_target = Offset {
        x: if target.x == 0.0 { 0.0 } else { target.x + momentum.value },
        y: if target.y == 0.0 { 0.0 } else { target.y + momentum.value },
    };
    let momentum_steps = momentum.callbacks_number.unwrap_or(config.momentum_steps);

    emit_intermediate_events(element, actual, momentum_target, momentum_steps).await;

    dispatch_event(
        element,
        EventKind::MomentumScrollEnd,
        EventBuilder::scroll(momentum_target),
    );

    // Same zero-falls-back rule, against the pre-call committed state.
    commit_state(
        element,
        ScrollState {
            x: if momentum_target.x == 0.0 { start.x } else { momentum_target.x },
            y: if momentum_target.y == 0.0 { start.y } else { momentum_target.y },
        },
    );
}

/// Emits `steps` evenly-spaced `scroll` samples from `start` toward
/// `target`, yielding after each one.
///
/// The distance is divided into `steps + 1` jumps: the final jump belongs
/// to the caller's terminal event, so intermediate samples never land on
/// the target themselves.
async fn emit_intermediate_events(
    element: &Arc<Element>,
    start: ScrollState,
    target: Offset,
    steps: u32,
) {
    let jumps = f64::from(steps + 1);
    let step_x = (target.x - start.x) / jumps;
    let step_y = (target.y - start.y) / jumps;

    let mut x = start.x;
    let mut y = start.y;
    for _ in 0..steps {
        x += step_x;
        y += step_y;
        dispatch_event(element, EventKind::Scroll, EventBuilder::scroll(Offset::new(x, y)));
        sched::next_tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::recorder::EventRecorder;

    fn recorded_scroll_view() -> (Arc<Element>, EventRecorder) {
        let element = Element::new(ElementKind::ScrollView);
        let recorder = EventRecorder::new();
        recorder.record_all(&element);
        (element, recorder)
    }

    #[tokio::test]
    async fn intermediate_samples_divide_by_one_more_than_their_count() {
        let (element, recorder) = recorded_scroll_view();

        emit_intermediate_events(&element, ScrollState::ORIGIN, Offset::new(0.0, 100.0), 3).await;

        // 100 / (3 + 1) = 25 per jump; the 4th jump belongs to the caller.
        assert_eq!(
            recorder.sequence(),
            vec![
                (EventKind::Scroll, 0.0, 25.0),
                (EventKind::Scroll, 0.0, 50.0),
                (EventKind::Scroll, 0.0, 75.0),
            ]
        );
    }

    #[tokio::test]
    async fn zero_samples_emit_nothing() {
        let (element, recorder) = recorded_scroll_view();
        emit_intermediate_events(&element, ScrollState::ORIGIN, Offset::new(0.0, 100.0), 0).await;
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn samples_interpolate_downward_when_target_is_below_start() {
        let (element, recorder) = recorded_scroll_view();

        emit_intermediate_events(&element, ScrollState::new(0.0, 120.0), Offset::new(0.0, 20.0), 3)
            .await;

        assert_eq!(
            recorder.sequence(),
            vec![
                (EventKind::Scroll, 0.0, 95.0),
                (EventKind::Scroll, 0.0, 70.0),
                (EventKind::Scroll, 0.0, 45.0),
            ]
        );
    }

    #[tokio::test]
    async fn wrong_element_type_rejects_before_any_event() {
        let element = Element::new(ElementKind::Text);
        let recorder = EventRecorder::new();
        recorder.record_all(&element);

        let err = scroll_to(&element, ScrollToOptions::vertical(10.0), &SimConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GestureError::WrongElementType { operation: "scroll_to", .. }
        ));
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn zero_axis_commits_previous_value_but_emits_zero() {
        let config = SimConfig::default();
        let (element, recorder) = recorded_scroll_view();

        scroll_to(&element, ScrollToOptions::vertical(120.0), &config)
            .await
            .unwrap();

        // x stays omitted, y omitted on the second call: both resolve to 0
        // on the wire while the remembered state keeps y = 120.
        scroll_to(&element, ScrollToOptions::horizontal(50.0), &config)
            .await
            .unwrap();

        let last = recorder.events().last().unwrap().payload.clone();
        assert_eq!(last.content_offset, Offset::new(50.0, 0.0));
        assert_eq!(committed_state(&element), ScrollState::new(50.0, 120.0));
    }
}
