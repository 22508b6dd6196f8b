//! X11 decoration filter: delegates title-bar drags to the window manager
//! with a `_NET_WM_MOVERESIZE` client message, so the application never
//! tracks mouse deltas itself.

use std::cell::RefCell;
use std::collections::HashMap;
use std::os::raw::{c_char, c_long, c_ulong};
use std::rc::Rc;

use anyhow::{Context, Result};
use x11::xlib;

use super::{DecorationFilter, DecorationHooks, WindowRecord, WindowTarget};

/// `_NET_WM_MOVERESIZE` operation code for a window move.
const NET_WM_MOVERESIZE_MOVE: c_long = 8;
const BUTTON1: c_long = 1;

pub struct X11DecorationFilter {
    registry: RefCell<HashMap<u64, Rc<WindowRecord>>>,
}

impl X11DecorationFilter {
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for X11DecorationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationFilter for X11DecorationFilter {
    fn attach(&self, target: &WindowTarget, hooks: DecorationHooks) -> Result<()> {
        target.xlib().context("window has no Xlib handle")?;
        self.registry
            .borrow_mut()
            .insert(target.key(), Rc::new(WindowRecord::new(hooks)));
        tracing::debug!(window = target.key(), "x11 decoration filter attached");
        Ok(())
    }

    fn detach(&self, target: &WindowTarget) {
        self.registry.borrow_mut().remove(&target.key());
    }

    fn record(&self, target: &WindowTarget) -> Option<Rc<WindowRecord>> {
        self.registry.borrow().get(&target.key()).cloned()
    }

    /// Ask the window manager to move the window, exactly as a native
    /// title-bar drag would. Any failure (no display, no atom) silently
    /// leaves the press as ordinary client input.
    fn begin_window_drag(&self, target: &WindowTarget) {
        if self.record(target).is_none() {
            return;
        }
        let Some((display_ptr, window)) = target.xlib() else {
            return;
        };

        unsafe {
            let opened;
            let display = if display_ptr.is_null() {
                opened = xlib::XOpenDisplay(std::ptr::null());
                if opened.is_null() {
                    tracing::debug!("no X display, skipping move-resize");
                    return;
                }
                opened
            } else {
                opened = std::ptr::null_mut();
                display_ptr as *mut xlib::Display
            };

            let root = xlib::XDefaultRootWindow(display);
            let (pointer_x, pointer_y) = match root_pointer_position(display, root) {
                Some(pos) => pos,
                None => {
                    if !opened.is_null() {
                        xlib::XCloseDisplay(opened);
                    }
                    return;
                }
            };

            let atom = xlib::XInternAtom(
                display,
                b"_NET_WM_MOVERESIZE\0".as_ptr() as *const c_char,
                xlib::False,
            );
            if atom != 0 {
                // The WM takes over the drag; give up our implicit grab
                // first or it never sees the pointer.
                xlib::XUngrabPointer(display, xlib::CurrentTime);

                let mut event: xlib::XClientMessageEvent = std::mem::zeroed();
                event.type_ = xlib::ClientMessage;
                event.window = window as c_ulong;
                event.message_type = atom;
                event.format = 32;
                event.data.set_long(0, pointer_x as c_long);
                event.data.set_long(1, pointer_y as c_long);
                event.data.set_long(2, NET_WM_MOVERESIZE_MOVE);
                event.data.set_long(3, BUTTON1);
                event.data.set_long(4, 0);

                let mask = xlib::SubstructureRedirectMask | xlib::SubstructureNotifyMask;
                xlib::XSendEvent(
                    display,
                    root,
                    xlib::False,
                    mask,
                    &mut event as *mut xlib::XClientMessageEvent as *mut xlib::XEvent,
                );
                xlib::XFlush(display);
            }

            if !opened.is_null() {
                xlib::XCloseDisplay(opened);
            }
        }
    }

    fn name(&self) -> &'static str {
        "x11"
    }
}

/// Pointer position in root-window coordinates.
unsafe fn root_pointer_position(
    display: *mut xlib::Display,
    root: c_ulong,
) -> Option<(i32, i32)> {
    let mut root_ret = 0;
    let mut child_ret = 0;
    let mut root_x = 0;
    let mut root_y = 0;
    let mut win_x = 0;
    let mut win_y = 0;
    let mut mask = 0;
    let status = xlib::XQueryPointer(
        display,
        root,
        &mut root_ret,
        &mut child_ret,
        &mut root_x,
        &mut root_y,
        &mut win_x,
        &mut win_y,
        &mut mask,
    );
    if status == 0 {
        None
    } else {
        Some((root_x, root_y))
    }
}
