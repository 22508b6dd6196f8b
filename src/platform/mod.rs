//! Per-OS decoration filters behind one widget-facing interface.
//!
//! Exactly one filter variant is selected at bootstrap ([`native_filter`]):
//! Win32 message interception on Windows, `_NET_WM_MOVERESIZE` delegation
//! on X11, and a no-op everywhere else (macOS keeps its native chrome
//! behavior). Filters own a registry of decorated windows; events for
//! handles that were never registered pass through untouched.

pub mod geometry;
pub mod stub;

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(all(unix, not(target_os = "macos")))]
pub mod x11;

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use raw_window_handle::{
    HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle,
};

use crate::host::WindowStateFlags;
use geometry::ResizeAxes;

/// Native identity of one top-level window, as needed by the filters.
#[derive(Debug, Clone, Copy)]
pub struct WindowTarget {
    window: RawWindowHandle,
    display: RawDisplayHandle,
}

impl WindowTarget {
    pub fn from_raw(window: RawWindowHandle, display: RawDisplayHandle) -> Self {
        Self { window, display }
    }

    /// Extract the native handles from an eframe frame. `None` before the
    /// window exists or on unsupported backends.
    pub fn from_frame(frame: &eframe::Frame) -> Option<Self> {
        let window = frame.window_handle().ok()?.as_raw();
        let display = frame.display_handle().ok()?.as_raw();
        Some(Self { window, display })
    }

    pub fn raw_window(&self) -> RawWindowHandle {
        self.window
    }

    pub fn raw_display(&self) -> RawDisplayHandle {
        self.display
    }

    /// Stable registry key for this window.
    pub fn key(&self) -> u64 {
        match self.window {
            RawWindowHandle::Win32(handle) => handle.hwnd.get() as u64,
            RawWindowHandle::Xlib(handle) => handle.window as u64,
            RawWindowHandle::Xcb(handle) => handle.window.get() as u64,
            RawWindowHandle::Wayland(handle) => handle.surface.as_ptr() as u64,
            RawWindowHandle::AppKit(handle) => handle.ns_view.as_ptr() as u64,
            _ => 0,
        }
    }

    #[cfg(target_os = "windows")]
    pub(crate) fn hwnd(&self) -> Option<windows::Win32::Foundation::HWND> {
        match self.window {
            RawWindowHandle::Win32(handle) => Some(windows::Win32::Foundation::HWND(
                handle.hwnd.get() as *mut core::ffi::c_void,
            )),
            _ => None,
        }
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    pub(crate) fn xlib(&self) -> Option<(*mut core::ffi::c_void, u64)> {
        let window = match self.window {
            RawWindowHandle::Xlib(handle) => handle.window as u64,
            _ => return None,
        };
        let display = match self.display {
            RawDisplayHandle::Xlib(handle) => handle
                .display
                .map(|ptr| ptr.as_ptr())
                .unwrap_or(std::ptr::null_mut()),
            _ => return None,
        };
        Some((display, window))
    }
}

/// Callbacks one window registers with its decoration filter.
pub struct DecorationHooks {
    /// Is this physical client-area point over draggable chrome?
    pub is_caption_hovered: Box<dyn Fn(f32, f32) -> bool>,
    /// The OS reported an activation change.
    pub on_activation_changed: Box<dyn Fn(bool)>,
    /// The OS reported a minimize/maximize/restore transition.
    pub on_window_state_changed: Box<dyn Fn(WindowStateFlags)>,
    /// Axes on which the window may actually be resized; resize hit-tests
    /// only fire on these.
    pub resize: ResizeAxes,
}

/// Window state as observed by the host toolkit on one frame. Fields the
/// backend cannot report stay `None` and leave the last known value alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservedWindow {
    pub focused: Option<bool>,
    pub maximized: Option<bool>,
    pub minimized: Option<bool>,
}

/// One registry entry: the hooks plus the last state dispatched, so
/// redundant observations stay silent.
pub struct WindowRecord {
    pub hooks: DecorationHooks,
    last_focus: Cell<Option<bool>>,
    last_state: Cell<Option<WindowStateFlags>>,
}

impl WindowRecord {
    pub fn new(hooks: DecorationHooks) -> Self {
        Self {
            hooks,
            last_focus: Cell::new(None),
            last_state: Cell::new(None),
        }
    }

    /// Diff `observed` against the last dispatch and invoke the matching
    /// callbacks. Idempotent for repeated identical observations.
    pub fn dispatch_observed(&self, observed: ObservedWindow) {
        if let Some(focused) = observed.focused {
            if self.last_focus.get() != Some(focused) {
                self.last_focus.set(Some(focused));
                (self.hooks.on_activation_changed)(focused);
            }
        }
        let flags = WindowStateFlags {
            minimized: observed.minimized.unwrap_or(false),
            maximized: observed.maximized.unwrap_or(false),
        };
        if self.last_state.get() != Some(flags) {
            self.last_state.set(Some(flags));
            (self.hooks.on_window_state_changed)(flags);
        }
    }
}

/// The platform-integration strategy for client-side decorations.
pub trait DecorationFilter {
    /// Register `target` for decoration. From this point the filter strips
    /// the native caption, answers hit-tests through
    /// `hooks.is_caption_hovered`, and feeds activation and window-state
    /// notifications back through the other callbacks.
    fn attach(&self, target: &WindowTarget, hooks: DecorationHooks) -> Result<()>;

    /// Remove the registration and any installed native hooks. Unknown
    /// targets are ignored.
    fn detach(&self, target: &WindowTarget);

    /// Register lookup; `None` means "not mine".
    fn record(&self, target: &WindowTarget) -> Option<Rc<WindowRecord>>;

    /// Hand the current pointer interaction to the window manager as a
    /// window move. Only the X11 variant does anything here; on Windows the
    /// caption hit-test already produces a native drag.
    fn begin_window_drag(&self, _target: &WindowTarget) {}

    /// Feed toolkit-observed window state through the registered
    /// callbacks. This is how activation and maximize changes reach the
    /// title bar on platforms without native message interception; calling
    /// it redundantly (every frame) is fine.
    fn notify_window_state(&self, target: &WindowTarget, observed: ObservedWindow) {
        if let Some(record) = self.record(target) {
            record.dispatch_observed(observed);
        }
    }

    fn name(&self) -> &'static str;
}

/// Pick the decoration strategy for the current OS, once, at bootstrap.
pub fn native_filter() -> Box<dyn DecorationFilter> {
    #[cfg(target_os = "windows")]
    {
        Box::new(win32::Win32DecorationFilter::new())
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Box::new(x11::X11DecorationFilter::new())
    }
    #[cfg(any(
        target_os = "macos",
        not(any(target_os = "windows", unix))
    ))]
    {
        Box::new(stub::StubDecorationFilter::new())
    }
}
