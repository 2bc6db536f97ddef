//! Integration tests for the `scroll_to_top` gesture: settled-container
//! payload shape, optional intermediate sampling, and rejections.

mod common;

use common::{named_sequence, recorded_scroll_view, recorded_view};

use gestix_core::scroll::{ScrollToOptions, ScrollToTopOptions};
use gestix_core::simulate::{self, UserEvent};
use gestix_core::state::{committed_state, ScrollState};
use serde_json::json;

#[tokio::test]
async fn rejects_when_already_at_the_origin() {
    let (element, recorder) = recorded_scroll_view();

    let err = simulate::scroll_to_top(&element, ScrollToTopOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "scroll_to_top() does NOT trigger if content offset is already x:0, y:0."
    );
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn settles_a_scrolled_element_back_to_the_origin() {
    let (element, recorder) = recorded_scroll_view();
    let user = UserEvent::setup();

    user.scroll_to(&element, ScrollToOptions::vertical(120.0))
        .await
        .unwrap();
    recorder.clear();

    user.scroll_to_top(&element, ScrollToTopOptions::default())
        .await
        .unwrap();

    assert_eq!(named_sequence(&recorder), vec![("scrollToTop", 0.0, 0.0)]);
    assert_eq!(committed_state(&element), ScrollState::ORIGIN);

    // The element is back at the origin, so a second trigger is misuse.
    let err = user
        .scroll_to_top(&element, ScrollToTopOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("does NOT trigger"));
}

#[tokio::test]
async fn terminal_payload_describes_a_fully_settled_container() {
    let (element, recorder) = recorded_scroll_view();
    let user = UserEvent::setup();

    user.scroll_to(&element, ScrollToOptions::vertical(120.0))
        .await
        .unwrap();
    recorder.clear();

    user.scroll_to_top(&element, ScrollToTopOptions::default())
        .await
        .unwrap();

    let payload = serde_json::to_value(&recorder.events()[0].payload).unwrap();
    assert_eq!(
        payload,
        json!({
            "contentInset": { "top": 0.0, "bottom": 0.0, "left": 0.0, "right": 0.0 },
            "contentOffset": { "x": 0.0, "y": 0.0 },
            "contentSize": { "width": 0.0, "height": 0.0 },
            "layoutMeasurement": { "width": 0.0, "height": 0.0 },
            "responderIgnoreScroll": true,
            "target": element.instance_tag(),
            "velocity": { "x": 0.0, "y": 0.0 },
        })
    );
}

#[tokio::test]
async fn optional_samples_interpolate_down_to_the_origin() {
    let (element, recorder) = recorded_scroll_view();
    let user = UserEvent::setup();

    user.scroll_to(&element, ScrollToOptions::vertical(120.0))
        .await
        .unwrap();
    recorder.clear();

    user.scroll_to_top(&element, ScrollToTopOptions::with_steps(3))
        .await
        .unwrap();

    assert_eq!(
        named_sequence(&recorder),
        vec![
            ("scroll", 0.0, 90.0),
            ("scroll", 0.0, 60.0),
            ("scroll", 0.0, 30.0),
            ("scrollToTop", 0.0, 0.0),
        ]
    );
}

#[tokio::test]
async fn both_axes_return_to_the_origin() {
    let (element, recorder) = recorded_scroll_view();
    let user = UserEvent::setup();

    user.scroll_to(&element, ScrollToOptions::horizontal(80.0))
        .await
        .unwrap();
    user.scroll_to(&element, ScrollToOptions::vertical(40.0))
        .await
        .unwrap();
    assert_eq!(committed_state(&element), ScrollState::new(80.0, 40.0));
    recorder.clear();

    user.scroll_to_top(&element, ScrollToTopOptions::with_steps(1))
        .await
        .unwrap();

    assert_eq!(
        named_sequence(&recorder),
        vec![("scroll", 40.0, 20.0), ("scrollToTop", 0.0, 0.0)]
    );
    assert_eq!(committed_state(&element), ScrollState::ORIGIN);
}

#[tokio::test]
async fn non_scroll_container_rejects_and_dispatches_nothing() {
    let (view, recorder) = recorded_view();

    let err = simulate::scroll_to_top(&view, ScrollToTopOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "scroll_to_top() works only with host \"ScrollView\" elements. Passed element has type \"View\"."
    );
    assert!(recorder.events().is_empty());
}
