use loading_content::{
    render, Branch, IndicatorState, LoadingContent, LoadingProps, PullInput, PullPhase,
    PullToRefreshState, RefreshConfig, VisualTree,
};
use std::cell::Cell;

use egui::{pos2, Event, Modifiers, PointerButton, Pos2};

fn props(loading: bool, empty: bool) -> LoadingProps {
    LoadingProps { loading, empty }
}

#[test]
fn test_empty_not_loading_never_refreshes() {
    let refreshes = Cell::new(0);
    let mut state = PullToRefreshState::new();

    // A full gesture's worth of input against the empty view
    for input in [PullInput::drag(200.0), PullInput::drag(200.0), PullInput::release()] {
        let tree = render(
            props(false, true),
            &mut state,
            &input,
            || "empty view",
            || refreshes.set(refreshes.get() + 1),
            || "content",
        );
        assert_eq!(tree, VisualTree::Empty("empty view"));
    }

    assert_eq!(refreshes.get(), 0);
    assert_eq!(state.phase(), PullPhase::Idle);
}

#[test]
fn test_loading_content_shows_indicator_and_still_refreshes() {
    let refreshes = Cell::new(0);
    let mut state = PullToRefreshState::new();

    let mut last = None;
    for input in [PullInput::drag(120.0), PullInput::drag(120.0), PullInput::release()] {
        last = Some(render(
            props(true, false),
            &mut state,
            &input,
            || (),
            || refreshes.set(refreshes.get() + 1),
            || vec!["Buy milk", "Walk the dog"],
        ));
    }

    let tree = last.unwrap();
    assert_eq!(tree.branch(), Branch::Populated);
    assert_eq!(tree.indicator(), IndicatorState::Refreshing);
    assert_eq!(tree.body().map(Vec::len), Some(2));
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn test_pull_on_idle_content_refreshes_once() {
    let refreshes = Cell::new(0);
    let mut state = PullToRefreshState::new();

    let before = render(props(false, false), &mut state, &PullInput::idle(0.016), || (), || {}, || ());
    assert_eq!(before.indicator(), IndicatorState::Hidden);

    let mut saw_pulling = false;
    for _ in 0..5 {
        let tree = render(
            props(false, false),
            &mut state,
            &PullInput::drag(40.0),
            || (),
            || refreshes.set(refreshes.get() + 1),
            || (),
        );
        saw_pulling |= matches!(tree.indicator(), IndicatorState::Pulling { .. });
    }
    assert!(saw_pulling);

    render(
        props(false, false),
        &mut state,
        &PullInput::release(),
        || (),
        || refreshes.set(refreshes.get() + 1),
        || (),
    );
    assert_eq!(refreshes.get(), 1);

    // Two more gestures, two more refreshes
    for _ in 0..2 {
        for input in [PullInput::drag(200.0), PullInput::release()] {
            render(props(false, false), &mut state, &input, || (), || refreshes.set(refreshes.get() + 1), || ());
        }
    }
    assert_eq!(refreshes.get(), 3);
    assert_eq!(state.completed_gestures(), 3);
}

#[test]
fn test_pull_ignored_when_content_scrolled() {
    let refreshes = Cell::new(0);
    let mut state = PullToRefreshState::new();

    for input in [PullInput::drag(300.0).at_top(false), PullInput::release().at_top(false)] {
        render(props(false, false), &mut state, &input, || (), || refreshes.set(refreshes.get() + 1), || ());
    }
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn test_custom_threshold() {
    let mut state = PullToRefreshState::with_config(RefreshConfig {
        threshold: 20.0,
        max_distance: 40.0,
        drag_multiplier: 1.0,
        ..Default::default()
    });

    state.drag(25.0, true);
    assert!(state.distance_fraction() > 1.0);
    assert!(state.release());
}

#[test]
fn test_indicator_returns_to_rest_after_refresh() {
    let mut state = PullToRefreshState::new();
    for input in [PullInput::drag(200.0), PullInput::release()] {
        render(props(false, false), &mut state, &input, || (), || {}, || ());
    }

    // Caller flips loading on, then off once its fetch finishes
    for _ in 0..120 {
        let tree = render(props(true, false), &mut state, &PullInput::idle(1.0 / 60.0), || (), || {}, || ());
        assert_eq!(tree.indicator(), IndicatorState::Refreshing);
    }
    assert_eq!(state.distance(), state.config().threshold);

    let mut tree = render(props(false, false), &mut state, &PullInput::idle(1.0 / 60.0), || (), || {}, || ());
    for _ in 0..300 {
        tree = render(props(false, false), &mut state, &PullInput::idle(1.0 / 60.0), || (), || {}, || ());
    }
    assert_eq!(tree.indicator(), IndicatorState::Hidden);
}

// ===== egui widget, driven headless =====

fn pointer_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Runs one frame of a `LoadingContent` over a short list; returns whether
/// `on_refresh` was called.
fn widget_frame(ctx: &egui::Context, state: &mut PullToRefreshState, events: Vec<Event>) -> bool {
    let mut refreshed = false;
    let input = egui::RawInput {
        events,
        ..Default::default()
    };

    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            LoadingContent::new(state).show(
                ui,
                |ui| ui.label("empty"),
                || refreshed = true,
                |ui| {
                    ui.label("Buy milk");
                    ui.label("Walk the dog");
                },
            );
        });
    });

    refreshed
}

#[test]
fn test_widget_pointer_pull_triggers_refresh() {
    let ctx = egui::Context::default();
    let mut state = PullToRefreshState::new();
    let start = pos2(200.0, 200.0);

    assert!(!widget_frame(&ctx, &mut state, vec![]));
    assert!(!widget_frame(&ctx, &mut state, vec![Event::PointerMoved(start), pointer_button(start, true)]));
    assert!(!widget_frame(&ctx, &mut state, vec![Event::PointerMoved(pos2(200.0, 300.0))]));
    assert!(!widget_frame(&ctx, &mut state, vec![Event::PointerMoved(pos2(200.0, 400.0))]));
    assert!(state.is_pulling());
    assert!(state.distance() >= state.config().threshold);

    assert!(widget_frame(&ctx, &mut state, vec![pointer_button(pos2(200.0, 400.0), false)]));
    assert_eq!(state.completed_gestures(), 1);
    assert!(!widget_frame(&ctx, &mut state, vec![]));
}
