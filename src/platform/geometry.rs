//! OS-independent window-chrome geometry: resize-border bands, caption
//! classification, and the maximized-geometry fix. Pure integer math so it
//! can be unit-tested without a window system.

/// Width of the invisible resize band along each window edge, in physical
/// pixels.
pub const RESIZE_BORDER: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Which axes the window can actually be resized on. An axis where the
/// minimum and maximum size coincide never produces resize hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAxes {
    pub horizontal: bool,
    pub vertical: bool,
}

impl ResizeAxes {
    pub fn both() -> Self {
        Self {
            horizontal: true,
            vertical: true,
        }
    }

    pub fn none() -> Self {
        Self {
            horizontal: false,
            vertical: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// How a point over the window should be treated by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Resize(ResizeEdge),
    /// Draggable chrome: the OS performs a native window move.
    Caption,
    /// Ordinary client input.
    Client,
}

/// Locate `point` (screen coordinates) in the resize band of `window`.
/// Corners require both axes to be resizable.
pub fn resize_edge_at(
    point: Point,
    window: Bounds,
    border: i32,
    axes: ResizeAxes,
) -> Option<ResizeEdge> {
    let on_left = axes.horizontal && point.x >= window.left && point.x < window.left + border;
    let on_right = axes.horizontal && point.x < window.right && point.x >= window.right - border;
    let on_top = axes.vertical && point.y >= window.top && point.y < window.top + border;
    let on_bottom = axes.vertical && point.y < window.bottom && point.y >= window.bottom - border;

    match (on_left, on_right, on_top, on_bottom) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, true, _) => Some(ResizeEdge::Top),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        _ => None,
    }
}

/// Full non-client hit classification: resize band first, then the
/// caller's caption test, otherwise client.
pub fn classify_hit(
    point: Point,
    window: Bounds,
    border: i32,
    axes: ResizeAxes,
    caption_hovered: impl FnOnce() -> bool,
) -> HitRegion {
    if let Some(edge) = resize_edge_at(point, window, border, axes) {
        return HitRegion::Resize(edge);
    }
    if window.contains(point) && caption_hovered() {
        return HitRegion::Caption;
    }
    HitRegion::Client
}

/// One monitor: full bounds plus the usable area that excludes reserved OS
/// chrome such as the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    pub bounds: Bounds,
    pub work_area: Bounds,
}

/// Client rectangle a borderless window must take when maximized: the
/// monitor work area, never the full monitor bounds (a full-bounds client
/// would sit on top of the taskbar).
pub fn maximized_client_rect(monitor: MonitorGeometry) -> Bounds {
    monitor.work_area
}
