//! Win32 decoration filter: a window subclass that intercepts the
//! non-client messages of the decorated window so the borderless frame
//! behaves like real chrome.
//!
//! Every handler runs synchronously inside the message pump and must
//! return promptly; failed native queries fall back to default processing
//! instead of surfacing errors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, Result};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Dwm::{DwmExtendFrameIntoClientArea, DwmIsCompositionEnabled};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromWindow, ScreenToClient, MONITORINFO, MONITOR_DEFAULTTONULL,
};
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowPlacement, GetWindowRect, SetWindowPos, HTBOTTOM, HTBOTTOMLEFT,
    HTBOTTOMRIGHT, HTCAPTION, HTLEFT, HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT, NCCALCSIZE_PARAMS,
    SIZE_MAXIMIZED, SIZE_MINIMIZED, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SW_SHOWMAXIMIZED, WA_INACTIVE, WINDOWPLACEMENT, WM_ACTIVATE, WM_NCACTIVATE,
    WM_NCCALCSIZE, WM_NCDESTROY, WM_NCHITTEST, WM_SIZE,
};

use super::geometry::{
    classify_hit, Bounds, HitRegion, MonitorGeometry, Point, ResizeEdge, RESIZE_BORDER,
};
use super::{DecorationFilter, DecorationHooks, WindowRecord, WindowTarget};
use crate::host::WindowStateFlags;

const SUBCLASS_ID: usize = 0x43_42; // "CB"

thread_local! {
    // One process-wide table; registration and native dispatch both happen
    // on the UI thread, so plain interior mutability is enough.
    static REGISTRY: RefCell<HashMap<isize, Rc<WindowRecord>>> = RefCell::new(HashMap::new());
}

pub struct Win32DecorationFilter {
    attached: RefCell<Vec<isize>>,
}

impl Win32DecorationFilter {
    pub fn new() -> Self {
        Self {
            attached: RefCell::new(Vec::new()),
        }
    }
}

impl Default for Win32DecorationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationFilter for Win32DecorationFilter {
    fn attach(&self, target: &WindowTarget, hooks: DecorationHooks) -> Result<()> {
        let hwnd = target.hwnd().context("window has no Win32 handle")?;
        let key = hwnd.0 as isize;
        REGISTRY.with(|registry| {
            registry
                .borrow_mut()
                .insert(key, Rc::new(WindowRecord::new(hooks)))
        });
        unsafe { SetWindowSubclass(hwnd, Some(chrome_subclass_proc), SUBCLASS_ID, 0) }
            .ok()
            .context("SetWindowSubclass failed")?;
        self.attached.borrow_mut().push(key);
        // Re-layout so the frameless margins take effect immediately.
        force_frame_change(hwnd);
        tracing::debug!(hwnd = key, "win32 decoration filter attached");
        Ok(())
    }

    fn detach(&self, target: &WindowTarget) {
        let Some(hwnd) = target.hwnd() else {
            return;
        };
        remove_registration(hwnd);
        self.attached.borrow_mut().retain(|k| *k != hwnd.0 as isize);
    }

    fn record(&self, target: &WindowTarget) -> Option<Rc<WindowRecord>> {
        let hwnd = target.hwnd()?;
        REGISTRY.with(|registry| registry.borrow().get(&(hwnd.0 as isize)).cloned())
    }

    fn name(&self) -> &'static str {
        "win32"
    }
}

impl Drop for Win32DecorationFilter {
    fn drop(&mut self) {
        // Uninstall the subclass hooks before the records go away.
        for key in self.attached.borrow_mut().drain(..) {
            remove_registration(HWND(key as *mut core::ffi::c_void));
        }
    }
}

fn remove_registration(hwnd: HWND) {
    let removed = REGISTRY.with(|registry| registry.borrow_mut().remove(&(hwnd.0 as isize)));
    if removed.is_some() {
        unsafe {
            let _ = RemoveWindowSubclass(hwnd, Some(chrome_subclass_proc), SUBCLASS_ID);
        }
    }
}

fn force_frame_change(hwnd: HWND) {
    let result = unsafe {
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
        )
    };
    if let Err(err) = result {
        tracing::debug!(?err, "frame-change relayout failed");
    }
}

fn bounds_from(rect: RECT) -> Bounds {
    Bounds::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn rect_from(bounds: Bounds) -> RECT {
    RECT {
        left: bounds.left,
        top: bounds.top,
        right: bounds.right,
        bottom: bounds.bottom,
    }
}

fn hit_code(edge: ResizeEdge) -> u32 {
    match edge {
        ResizeEdge::Left => HTLEFT,
        ResizeEdge::Right => HTRIGHT,
        ResizeEdge::Top => HTTOP,
        ResizeEdge::Bottom => HTBOTTOM,
        ResizeEdge::TopLeft => HTTOPLEFT,
        ResizeEdge::TopRight => HTTOPRIGHT,
        ResizeEdge::BottomLeft => HTBOTTOMLEFT,
        ResizeEdge::BottomRight => HTBOTTOMRIGHT,
    }
}

/// Is the window about to be shown maximized?
fn about_to_show_maximized(hwnd: HWND) -> bool {
    let mut placement = WINDOWPLACEMENT {
        length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    };
    match unsafe { GetWindowPlacement(hwnd, &mut placement) } {
        Ok(()) => placement.showCmd == SW_SHOWMAXIMIZED.0 as u32,
        Err(_) => false,
    }
}

fn monitor_geometry(hwnd: HWND) -> Option<MonitorGeometry> {
    unsafe {
        let monitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONULL);
        if monitor.is_invalid() {
            return None;
        }
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if !GetMonitorInfoW(monitor, &mut info).as_bool() {
            return None;
        }
        Some(MonitorGeometry {
            bounds: bounds_from(info.rcMonitor),
            work_area: bounds_from(info.rcWork),
        })
    }
}

unsafe extern "system" fn chrome_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _subclass_id: usize,
    _ref_data: usize,
) -> LRESULT {
    // Clone the record out so callbacks can run without the registry
    // borrowed; a handle we never registered passes straight through.
    let record = REGISTRY.with(|registry| registry.borrow().get(&(hwnd.0 as isize)).cloned());
    let Some(record) = record else {
        return DefSubclassProc(hwnd, msg, wparam, lparam);
    };

    match msg {
        WM_ACTIVATE => {
            // A 1px extended frame keeps the DWM drop shadow and rounded
            // corners on an otherwise frameless window.
            let margins = MARGINS {
                cxLeftWidth: 1,
                cxRightWidth: 1,
                cyTopHeight: 1,
                cyBottomHeight: 1,
            };
            let _ = DwmExtendFrameIntoClientArea(hwnd, &margins);
            force_frame_change(hwnd);
            let active = (wparam.0 & 0xFFFF) as u32 != WA_INACTIVE;
            (record.hooks.on_activation_changed)(active);
            DefSubclassProc(hwnd, msg, wparam, lparam)
        }

        WM_NCCALCSIZE if wparam.0 != 0 => {
            let params = lparam.0 as *mut NCCALCSIZE_PARAMS;
            if params.is_null() {
                return DefSubclassProc(hwnd, msg, wparam, lparam);
            }
            // A borderless window maximized over the full monitor rect
            // would cover the taskbar; clamp the client to the work area.
            if about_to_show_maximized(hwnd) {
                if let Some(monitor) = monitor_geometry(hwnd) {
                    (*params).rgrc[0] = rect_from(super::geometry::maximized_client_rect(monitor));
                }
            }
            LRESULT(0)
        }

        WM_NCHITTEST => {
            let point = Point::new(
                (lparam.0 & 0xFFFF) as i16 as i32,
                ((lparam.0 >> 16) & 0xFFFF) as i16 as i32,
            );
            let mut window_rect = RECT::default();
            if GetWindowRect(hwnd, &mut window_rect).is_err() {
                return DefSubclassProc(hwnd, msg, wparam, lparam);
            }
            let caption_hovered = || {
                let mut client = POINT {
                    x: point.x,
                    y: point.y,
                };
                if !ScreenToClient(hwnd, &mut client).as_bool() {
                    return false;
                }
                (record.hooks.is_caption_hovered)(client.x as f32, client.y as f32)
            };
            match classify_hit(
                point,
                bounds_from(window_rect),
                RESIZE_BORDER,
                record.hooks.resize,
                caption_hovered,
            ) {
                HitRegion::Resize(edge) => LRESULT(hit_code(edge) as isize),
                HitRegion::Caption => LRESULT(HTCAPTION as isize),
                HitRegion::Client => DefSubclassProc(hwnd, msg, wparam, lparam),
            }
        }

        WM_NCACTIVATE => {
            // Without composition the default handler paints a native
            // caption flicker; claim the message instead.
            let composition = DwmIsCompositionEnabled()
                .map(|enabled| enabled.as_bool())
                .unwrap_or(false);
            if composition {
                DefSubclassProc(hwnd, msg, wparam, lparam)
            } else {
                LRESULT(1)
            }
        }

        WM_SIZE => {
            let flags = match wparam.0 as u32 {
                SIZE_MINIMIZED => WindowStateFlags::minimized(),
                SIZE_MAXIMIZED => WindowStateFlags::maximized(),
                _ => WindowStateFlags::normal(),
            };
            (record.hooks.on_window_state_changed)(flags);
            DefSubclassProc(hwnd, msg, wparam, lparam)
        }

        WM_NCDESTROY => {
            remove_registration(hwnd);
            DefSubclassProc(hwnd, msg, wparam, lparam)
        }

        _ => DefSubclassProc(hwnd, msg, wparam, lparam),
    }
}
