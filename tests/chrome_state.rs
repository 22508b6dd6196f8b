use chromebar::host::WindowStateFlags;
use chromebar::style::CaptionButtonStyle;
use chromebar::titlebar::{TitleBar, TitleBarOptions};

fn bar(active: bool, maximized: bool) -> TitleBar {
    TitleBar::new(TitleBarOptions::default(), active, maximized)
}

#[test]
fn initial_state_is_sampled_at_construction() {
    let bar = bar(true, true);
    assert!(bar.is_active());
    assert!(bar.is_maximized());
    assert_eq!(bar.caption_button_style(), CaptionButtonStyle::Custom);
}

#[test]
fn window_state_change_is_idempotent() {
    let bar = bar(false, false);
    bar.on_window_state_change(true, WindowStateFlags::maximized());
    assert!(bar.is_active());
    assert!(bar.is_maximized());
    // Calling again with identical input changes nothing observable.
    bar.on_window_state_change(true, WindowStateFlags::maximized());
    assert!(bar.is_active());
    assert!(bar.is_maximized());

    bar.on_window_state_change(false, WindowStateFlags::normal());
    assert!(!bar.is_active());
    assert!(!bar.is_maximized());
}

#[test]
fn active_and_maximized_are_independent() {
    let bar = bar(false, false);
    bar.set_active(true);
    assert!(bar.is_active());
    assert!(!bar.is_maximized());

    bar.set_maximized(true);
    assert!(bar.is_active());
    assert!(bar.is_maximized());

    bar.set_active(false);
    assert!(bar.is_maximized());
}

#[test]
fn minimized_flag_does_not_masquerade_as_maximized() {
    let bar = bar(true, true);
    bar.on_window_state_change(true, WindowStateFlags::minimized());
    assert!(!bar.is_maximized());
}

#[test]
fn style_switch_round_trips_through_the_bar() {
    let bar = bar(true, false);
    bar.set_caption_button_style(CaptionButtonStyle::Mac);
    assert_eq!(bar.caption_button_style(), CaptionButtonStyle::Mac);
}
