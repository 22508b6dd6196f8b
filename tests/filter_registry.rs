use std::cell::RefCell;
use std::num::NonZeroIsize;
use std::rc::Rc;

use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, Win32WindowHandle, WindowsDisplayHandle,
};

use chromebar::host::WindowStateFlags;
use chromebar::platform::geometry::ResizeAxes;
use chromebar::platform::stub::StubDecorationFilter;
use chromebar::platform::{DecorationFilter, DecorationHooks, ObservedWindow, WindowTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Dispatched {
    Activation(bool),
    State(WindowStateFlags),
}

fn target(id: isize) -> WindowTarget {
    let window = RawWindowHandle::Win32(Win32WindowHandle::new(NonZeroIsize::new(id).unwrap()));
    let display = RawDisplayHandle::Windows(WindowsDisplayHandle::new());
    WindowTarget::from_raw(window, display)
}

fn recording_hooks(log: &Rc<RefCell<Vec<Dispatched>>>) -> DecorationHooks {
    DecorationHooks {
        is_caption_hovered: Box::new(|_, _| false),
        on_activation_changed: Box::new({
            let log = log.clone();
            move |active| log.borrow_mut().push(Dispatched::Activation(active))
        }),
        on_window_state_changed: Box::new({
            let log = log.clone();
            move |flags| log.borrow_mut().push(Dispatched::State(flags))
        }),
        resize: ResizeAxes::both(),
    }
}

#[test]
fn attach_then_detach_round_trips_the_registry() {
    let filter = StubDecorationFilter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let window = target(0x10);

    filter.attach(&window, recording_hooks(&log)).unwrap();
    assert!(filter.record(&window).is_some());

    filter.detach(&window);
    assert!(filter.record(&window).is_none());
}

#[test]
fn redundant_observations_dispatch_once() {
    let filter = StubDecorationFilter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let window = target(0x20);
    filter.attach(&window, recording_hooks(&log)).unwrap();

    let observed = ObservedWindow {
        focused: Some(true),
        maximized: Some(false),
        minimized: Some(false),
    };
    filter.notify_window_state(&window, observed);
    filter.notify_window_state(&window, observed);
    filter.notify_window_state(&window, observed);

    let entries = log.borrow().clone();
    assert_eq!(
        entries,
        vec![
            Dispatched::Activation(true),
            Dispatched::State(WindowStateFlags::normal()),
        ]
    );
}

#[test]
fn state_transitions_reach_the_callbacks() {
    let filter = StubDecorationFilter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let window = target(0x30);
    filter.attach(&window, recording_hooks(&log)).unwrap();

    filter.notify_window_state(
        &window,
        ObservedWindow {
            focused: Some(true),
            maximized: Some(false),
            minimized: Some(false),
        },
    );
    filter.notify_window_state(
        &window,
        ObservedWindow {
            focused: Some(true),
            maximized: Some(true),
            minimized: Some(false),
        },
    );
    filter.notify_window_state(
        &window,
        ObservedWindow {
            focused: Some(false),
            maximized: Some(true),
            minimized: Some(false),
        },
    );

    let entries = log.borrow().clone();
    assert_eq!(
        entries,
        vec![
            Dispatched::Activation(true),
            Dispatched::State(WindowStateFlags::normal()),
            Dispatched::State(WindowStateFlags::maximized()),
            Dispatched::Activation(false),
        ]
    );
}

#[test]
fn events_for_unregistered_windows_pass_through() {
    let filter = StubDecorationFilter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let registered = target(0x40);
    let stranger = target(0x41);
    filter.attach(&registered, recording_hooks(&log)).unwrap();

    filter.notify_window_state(
        &stranger,
        ObservedWindow {
            focused: Some(true),
            maximized: Some(true),
            minimized: Some(false),
        },
    );
    assert!(log.borrow().is_empty());
    assert!(filter.record(&stranger).is_none());

    // Dragging an unregistered window is a silent no-op too.
    filter.begin_window_drag(&stranger);
}

#[test]
fn unknown_fields_keep_the_last_known_state() {
    let filter = StubDecorationFilter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let window = target(0x50);
    filter.attach(&window, recording_hooks(&log)).unwrap();

    filter.notify_window_state(
        &window,
        ObservedWindow {
            focused: None,
            maximized: Some(true),
            minimized: Some(false),
        },
    );
    // No focus information observed yet: no activation dispatch.
    let entries = log.borrow().clone();
    assert_eq!(entries, vec![Dispatched::State(WindowStateFlags::maximized())]);
}
