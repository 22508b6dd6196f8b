use std::time::Instant;

use eframe::egui::{self, Color32, Rect, Response, Sense, Ui, Vec2};

use crate::fader::Fade;
use crate::icons::{asset_uri, caption_icon_paths};
use crate::style::{self, CaptionButtonStyle};

/// What a button is for. Fixed at construction; determines hover color,
/// icon swapping, and whether hover state is shared with siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    CaptionIcon,
    Minimize,
    MaximizeRestore,
    Close,
    Tool,
    MenuBarItem,
}

impl ButtonRole {
    /// The three buttons the OS would normally own.
    pub fn is_system(self) -> bool {
        matches!(
            self,
            ButtonRole::Minimize | ButtonRole::MaximizeRestore | ButtonRole::Close
        )
    }

    fn caption_slot(self) -> Option<usize> {
        match self {
            ButtonRole::Minimize => Some(0),
            ButtonRole::MaximizeRestore => Some(1),
            ButtonRole::Close => Some(2),
            _ => None,
        }
    }
}

/// Read-only snapshot of bar-level state passed to every button at render
/// time, so buttons never reach into the bar itself.
#[derive(Debug, Clone, Copy)]
pub struct ButtonContext {
    pub active: bool,
    pub maximized: bool,
    pub style: CaptionButtonStyle,
    /// True while any of the three system buttons is hovered. Mac style
    /// lights up all three from this.
    pub caption_hovered: bool,
    pub hover_color: Color32,
    pub now: Instant,
}

pub struct TitleBarButton {
    role: ButtonRole,
    fade: Fade,
    keep_down: bool,
    enabled: bool,
    visible: bool,
    /// Icon URI for caption-icon / tool / menu buttons. System buttons
    /// derive their icon from the bar state instead.
    icon: Option<String>,
    hovered: bool,
}

impl TitleBarButton {
    pub fn new(role: ButtonRole) -> Self {
        Self {
            role,
            fade: Fade::new(),
            keep_down: false,
            enabled: true,
            visible: true,
            icon: None,
            hovered: false,
        }
    }

    pub fn with_icon(role: ButtonRole, icon: String) -> Self {
        let mut button = Self::new(role);
        button.icon = Some(icon);
        button
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn set_icon(&mut self, icon: String) {
        self.icon = Some(icon);
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pin the pressed visual; used for the active application mode so the
    /// indicator does not flicker with hover fades.
    pub fn set_keep_down(&mut self, keep_down: bool) {
        self.keep_down = keep_down;
    }

    pub fn keep_down(&self) -> bool {
        self.keep_down
    }

    /// Whether the pointer was over this button on the last frame.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Asset path a system caption button would draw right now, given its
    /// local `pressed` state. `None` for non-system roles.
    pub fn caption_icon_path(&self, ctx: &ButtonContext, pressed: bool) -> Option<&'static str> {
        let slot = self.role.caption_slot()?;
        let hovered = self.effective_hovered(ctx);
        Some(caption_icon_paths(ctx.active, ctx.maximized, hovered, pressed, ctx.style)[slot])
    }

    fn effective_hovered(&self, ctx: &ButtonContext) -> bool {
        self.hovered
            || (ctx.style == CaptionButtonStyle::Mac
                && self.role.is_system()
                && ctx.caption_hovered)
    }

    /// Fill color the button paints behind its glyph for the given state.
    pub fn hover_fill(&self, ctx: &ButtonContext, pressed: bool) -> Color32 {
        // Mac system buttons carry the hover state in the glyph itself.
        let mac_flat = ctx.style == CaptionButtonStyle::Mac && self.role.is_system();
        if !self.enabled || self.role == ButtonRole::CaptionIcon || mac_flat {
            return Color32::TRANSPARENT;
        }
        let base = if self.role == ButtonRole::Close {
            style::close_hover_color()
        } else {
            ctx.hover_color
        };
        if self.keep_down {
            base
        } else {
            let factor = if pressed { 1.0 } else { self.fade.value(ctx.now) };
            base.gamma_multiply(factor)
        }
    }

    pub fn show(&mut self, ui: &mut Ui, ctx: &ButtonContext, size: Vec2) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        self.hovered = response.hovered();
        let pressed = self.enabled && response.is_pointer_button_down_on();
        // A held button freezes the fade at whatever was visible.
        if !pressed {
            let target = if self.hovered { 1.0 } else { 0.0 };
            self.fade.animate_to(target, ctx.now);
        }
        if self.fade.is_animating(ctx.now) {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, 0.0, self.hover_fill(ctx, pressed));
            self.paint_icon(ui, ctx, rect, pressed);
            if self.role == ButtonRole::Tool && self.keep_down {
                let accent = Rect::from_min_size(rect.min, Vec2::new(rect.width(), 1.0));
                ui.painter().rect_filled(accent, 0.0, style::TOOL_ACCENT);
            }
        }

        response
    }

    fn paint_icon(&self, ui: &mut Ui, ctx: &ButtonContext, rect: Rect, pressed: bool) {
        let uri = if self.role.is_system() {
            self.caption_icon_path(ctx, pressed).map(asset_uri)
        } else {
            self.icon.clone()
        };
        let Some(uri) = uri else {
            return;
        };
        let side = if self.role.is_system() {
            ctx.style.caption_icon_size()
        } else {
            rect.width().min(rect.height()) - 12.0
        };
        let icon_rect = Rect::from_center_size(rect.center(), Vec2::splat(side));
        let image = egui::Image::from_uri(uri);
        let image = if self.enabled {
            image
        } else {
            image.tint(Color32::from_gray(110))
        };
        image.paint_at(ui, icon_rect);
    }
}
