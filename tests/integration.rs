// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the viewer screen the way a host would:
//! present an item, feed gesture samples and scroll callbacks, and apply
//! the returned effects.

use approx::assert_abs_diff_eq;
use iced_core::{Point, Size};
use image_zoom::config::Config;
use image_zoom::diagnostics::GestureEvent;
use image_zoom::domain::gesture::DragSample;
use image_zoom::domain::media::{DisplayItem, MediaKind};
use image_zoom::ui::state::panel::LayoutOffsets;
use image_zoom::ui::state::viewport::ViewGeometry;
use image_zoom::ui::viewer::{Effect, Message, State};
use std::time::Duration;

/// 600x800 full-screen layout used across the scenarios.
fn portrait_geometry() -> ViewGeometry {
    ViewGeometry::full_screen(Size::new(600.0, 800.0))
}

fn present(state: &mut State, item: DisplayItem) -> Effect {
    state.handle(Message::Present {
        item,
        geometry: portrait_geometry(),
    })
}

#[test]
fn presenting_an_item_prepares_the_panel() {
    let mut state = State::default();
    let item = DisplayItem::new(300, 300, MediaKind::Image);

    let Effect::RefreshPanel(content) = present(&mut state, item) else {
        panic!("expected a panel refresh");
    };

    assert_eq!(content.item, item);
    // One third of the 600-pt shorter dimension.
    assert_abs_diff_eq!(content.map_height, 200.0);
    assert_eq!(state.handle(Message::WillAppear), Effect::WillAppear(item));
    assert_eq!(state.handle(Message::DidAppear), Effect::DidAppear(item));
}

#[test]
fn double_tap_zooms_in_and_back_out() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));

    let Effect::ZoomTo { scale, rect } = state.handle(Message::DoubleTap(Point::new(450.0, 300.0)))
    else {
        panic!("expected a zoom request");
    };
    assert_abs_diff_eq!(scale.value(), 4.0);
    assert_abs_diff_eq!(rect.width, 150.0);
    assert_abs_diff_eq!(rect.height, 200.0);
    assert_abs_diff_eq!(rect.x, 450.0 - 75.0);
    assert_abs_diff_eq!(rect.y, 300.0 - 100.0);

    // The scroll container confirms the new scale, producing an inset.
    let Effect::SetContentInset(_) = state.handle(Message::ScaleChanged(scale.value())) else {
        panic!("expected a content inset");
    };

    // A second double tap returns to the minimum scale.
    let Effect::ZoomTo { scale, .. } = state.handle(Message::DoubleTap(Point::new(10.0, 10.0)))
    else {
        panic!("expected a zoom request");
    };
    assert_abs_diff_eq!(scale.value(), 1.0);
}

#[test]
fn drag_down_dismisses_a_screen_without_a_panel() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));

    let effect = state.handle(Message::Drag(DragSample::changed(0.0, 15.0)));

    let Effect::RequestDismiss(offsets) = effect else {
        panic!("expected a dismiss request");
    };
    assert!(!state.is_panel_shown());
    assert_abs_diff_eq!(offsets.top, 15.0);
    assert_abs_diff_eq!(offsets.bottom, -15.0);
}

#[test]
fn panel_reveal_matches_the_letterboxed_layout() {
    // A 300x300 image fits the 600x800 view at 600x600, leaving 100-pt
    // letterbox bands; a 100-pt panel slides into the lower band without
    // lifting the image at all.
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    let effect = state.handle(Message::Drag(DragSample::changed(0.0, -15.0)));

    let Effect::OpenPanel { animation, .. } = effect else {
        panic!("expected the panel to open");
    };
    assert!(state.is_panel_shown());
    assert_abs_diff_eq!(animation.offsets.top, 0.0);
    assert_abs_diff_eq!(animation.offsets.bottom, 0.0);
    assert_abs_diff_eq!(animation.panel_height, 100.0);
    assert_eq!(animation.duration, Duration::from_millis(300));
    assert!(animation.offsets == LayoutOffsets::ZERO);
}

#[test]
fn panel_open_close_round_trip_restores_the_layout() {
    // A 600x700 image renders 700 pts tall, so the panel must lift the
    // image by 100 - (800 - 700) / 2 = 50 pts while it is shown.
    let mut state = State::default();
    present(&mut state, DisplayItem::new(600, 700, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    let Effect::OpenPanel { animation, .. } =
        state.handle(Message::Drag(DragSample::changed(0.0, -15.0)))
    else {
        panic!("expected the panel to open");
    };
    assert_abs_diff_eq!(animation.offsets.top, -50.0);
    assert_abs_diff_eq!(animation.offsets.bottom, 50.0);

    // The transition ended the gesture; the next drag starts fresh and
    // closes the panel.
    let Effect::ClosePanel(animation) =
        state.handle(Message::Drag(DragSample::changed(0.0, 20.0)))
    else {
        panic!("expected the panel to close");
    };
    assert_eq!(animation.offsets, LayoutOffsets::ZERO);
    assert_abs_diff_eq!(animation.panel_height, 0.0);

    // Lifting the finger settles at the pre-open resting layout.
    let Effect::SettleOffsets(offsets) = state.handle(Message::Drag(DragSample::ended(0.0, 20.0)))
    else {
        panic!("expected a settle");
    };
    assert_eq!(offsets, LayoutOffsets::ZERO);
    assert!(!state.is_panel_shown());
}

#[test]
fn threshold_transitions_end_the_tracked_gesture() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    let open = state.handle(Message::Drag(DragSample::changed(0.0, -15.0)));
    assert!(open.ends_gesture());

    let track = state.handle(Message::Drag(DragSample::changed(0.0, 5.0)));
    assert!(!track.ends_gesture());
}

#[test]
fn dead_zone_boundaries_are_exclusive() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    assert!(matches!(
        state.handle(Message::Drag(DragSample::changed(0.0, 9.99))),
        Effect::TrackOffsets(_)
    ));
    assert!(matches!(
        state.handle(Message::Drag(DragSample::changed(0.0, -9.99))),
        Effect::TrackOffsets(_)
    ));
    assert!(matches!(
        state.handle(Message::Drag(DragSample::changed(0.0, 10.01))),
        Effect::RequestDismiss(_)
    ));
    assert!(matches!(
        state.handle(Message::Drag(DragSample::changed(0.0, -10.01))),
        Effect::OpenPanel { .. }
    ));
}

#[test]
fn transport_control_gates_zoom_for_video_only() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(1920, 1080, MediaKind::Video));
    state.handle(Message::TransportVisibilityChanged(true));

    assert_eq!(
        state.handle(Message::DoubleTap(Point::new(300.0, 400.0))),
        Effect::None
    );

    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    assert!(matches!(
        state.handle(Message::DoubleTap(Point::new(300.0, 400.0))),
        Effect::ZoomTo { .. }
    ));
}

#[test]
fn config_tunes_the_dead_zone_and_animation() {
    let config = Config {
        drag_dead_zone: Some(20.0),
        panel_animation_ms: Some(150),
        scale_snap_tolerance: None,
    };
    let mut state = State::new(&config);
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    // 15 pts is past the default dead zone but inside the tuned one.
    assert!(matches!(
        state.handle(Message::Drag(DragSample::changed(0.0, 15.0))),
        Effect::TrackOffsets(_)
    ));

    let Effect::OpenPanel { animation, .. } =
        state.handle(Message::Drag(DragSample::changed(0.0, -25.0)))
    else {
        panic!("expected the panel to open");
    };
    assert_eq!(animation.duration, Duration::from_millis(150));
}

#[test]
fn gesture_activity_is_captured_in_order() {
    let mut state = State::default();
    present(&mut state, DisplayItem::new(300, 300, MediaKind::Image));
    state.handle(Message::PanelMeasured(100.0));

    state.handle(Message::DoubleTap(Point::new(300.0, 400.0)));
    state.handle(Message::Drag(DragSample::changed(0.0, -15.0)));
    state.handle(Message::Drag(DragSample::changed(0.0, 15.0)));

    let events: Vec<_> = state.diagnostics().events().cloned().collect();
    assert_eq!(
        events,
        vec![
            GestureEvent::ItemPresented {
                media: MediaKind::Image.into()
            },
            GestureEvent::DoubleTapZoom { target_scale: 4.0 },
            GestureEvent::PanelOpened {
                constraint_height: 0.0
            },
            GestureEvent::PanelClosed,
        ]
    );
}
