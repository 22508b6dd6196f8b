use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, Ui, Vec2};

use crate::button::{ButtonContext, ButtonRole, TitleBarButton};
use crate::host::{HostEvent, ModeButtonSpec, ToolButtonSpec, WindowStateFlags, ids};
use crate::icons::{resolve_caption_icon, ResolvedCaptionIcon};
use crate::style::{
    self, CaptionButtonStyle, INACTIVE_BACKGROUND, LEFT_MARGIN_WIDTH, SQUARE_BUTTON_WIDTH,
    TITLE_BAR_HEIGHT,
};

/// Chrome state for one decorated top-level window.
#[derive(Debug, Clone)]
pub struct ChromeState {
    pub active: bool,
    pub maximized: bool,
    pub caption_button_style: CaptionButtonStyle,
    pub active_color: Color32,
    pub hover_color: Color32,
}

/// Layout rects recorded on the last rendered frame, used to answer
/// platform hit-tests between frames.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    /// The whole bar strip, in logical points.
    pub bar: Option<Rect>,
    /// Every interactive control in the bar (buttons of all roles).
    pub controls: Vec<Rect>,
    /// The embedded menu bar, when present.
    pub menu: Option<Rect>,
    /// Scale for mapping physical client pixels to logical points.
    pub pixels_per_point: f32,
}

#[derive(Debug)]
struct ChromeShared {
    state: ChromeState,
    layout: LayoutSnapshot,
}

/// Cheap cloneable handle onto the chrome state of one window.
///
/// The platform decoration filter holds one of these in its callbacks; the
/// [`TitleBar`] holds another. Everything stays on the UI thread.
#[derive(Clone)]
pub struct ChromeLink(Rc<RefCell<ChromeShared>>);

impl ChromeLink {
    fn new(state: ChromeState) -> Self {
        Self(Rc::new(RefCell::new(ChromeShared {
            state,
            layout: LayoutSnapshot::default(),
        })))
    }

    pub fn is_active(&self) -> bool {
        self.0.borrow().state.active
    }

    pub fn is_maximized(&self) -> bool {
        self.0.borrow().state.maximized
    }

    pub fn caption_button_style(&self) -> CaptionButtonStyle {
        self.0.borrow().state.caption_button_style
    }

    pub fn active_color(&self) -> Color32 {
        self.0.borrow().state.active_color
    }

    pub fn hover_color(&self) -> Color32 {
        self.0.borrow().state.hover_color
    }

    pub fn set_active(&self, active: bool) {
        self.0.borrow_mut().state.active = active;
    }

    pub fn set_maximized(&self, maximized: bool) {
        self.0.borrow_mut().state.maximized = maximized;
    }

    pub fn set_caption_button_style(&self, style: CaptionButtonStyle) {
        self.0.borrow_mut().state.caption_button_style = style;
    }

    pub fn set_active_color(&self, color: Color32) {
        self.0.borrow_mut().state.active_color = color;
    }

    pub fn set_hover_color(&self, color: Color32) {
        self.0.borrow_mut().state.hover_color = color;
    }

    /// Single entry point for OS window-state notifications. Idempotent;
    /// safe to call every frame with unchanged values.
    pub fn on_window_state_change(&self, active: bool, flags: WindowStateFlags) {
        let mut shared = self.0.borrow_mut();
        shared.state.active = active;
        shared.state.maximized = flags.maximized;
    }

    /// Record the rects of the last rendered frame.
    pub fn set_layout(&self, layout: LayoutSnapshot) {
        self.0.borrow_mut().layout = layout;
    }

    /// Whether `pos` (logical points) lands on draggable chrome: inside the
    /// bar, outside every control, outside the embedded menu bar.
    pub fn is_over_draggable_chrome(&self, pos: Pos2) -> bool {
        let shared = self.0.borrow();
        let layout = &shared.layout;
        let Some(bar) = layout.bar else {
            return false;
        };
        if !bar.contains(pos) {
            return false;
        }
        if layout.menu.is_some_and(|menu| menu.contains(pos)) {
            return false;
        }
        !layout.controls.iter().any(|rect| rect.contains(pos))
    }

    /// Same classification for a point in physical client pixels, as
    /// delivered by OS hit-test queries.
    pub fn is_over_draggable_chrome_px(&self, x: f32, y: f32) -> bool {
        let ppp = {
            let shared = self.0.borrow();
            let ppp = shared.layout.pixels_per_point;
            if ppp <= 0.0 {
                return false;
            }
            ppp
        };
        self.is_over_draggable_chrome(Pos2::new(x / ppp, y / ppp))
    }
}

/// Everything configurable about one title bar instance.
#[derive(Debug, Clone)]
pub struct TitleBarOptions {
    pub caption_style: CaptionButtonStyle,
    /// Explicit caption icon URI; wins over window and application icons.
    pub caption_icon: Option<String>,
    pub window_icon: Option<String>,
    pub app_icon: Option<String>,
    pub embed_menu_bar: bool,
    pub mode_buttons: Vec<ModeButtonSpec>,
    pub tool_buttons: Vec<ToolButtonSpec>,
    pub minimizable: bool,
    pub maximizable: bool,
    pub hover_color: Color32,
    pub active_color: Color32,
}

impl Default for TitleBarOptions {
    fn default() -> Self {
        Self {
            caption_style: CaptionButtonStyle::Custom,
            caption_icon: None,
            window_icon: None,
            app_icon: None,
            embed_menu_bar: false,
            mode_buttons: Vec::new(),
            tool_buttons: Vec::new(),
            minimizable: true,
            maximizable: true,
            hover_color: style::DEFAULT_HOVER_COLOR,
            active_color: style::initial_active_color(),
        }
    }
}

/// What happened in the bar this frame. The host translates the requests
/// into actual window-state changes; the bar never does that itself.
#[derive(Debug, Clone, Default)]
pub struct TitleBarResponse {
    pub minimize_requested: bool,
    pub maximize_restore_requested: bool,
    pub close_requested: bool,
    /// A left press landed on draggable chrome; on X11 the host forwards
    /// this to `DecorationFilter::begin_window_drag`.
    pub drag_requested: bool,
    pub activated_mode: Option<String>,
    pub clicked_tool: Option<String>,
}

struct LabeledButton {
    id: String,
    tooltip: String,
    button: TitleBarButton,
}

/// The title bar widget: caption icon, optional menu bar, mode and tool
/// buttons, and the three system caption buttons, in one 30-point strip.
pub struct TitleBar {
    link: ChromeLink,
    caption_icon: ResolvedCaptionIcon,
    embed_menu_bar: bool,
    btn_caption_icon: TitleBarButton,
    tools: Vec<LabeledButton>,
    modes: Vec<LabeledButton>,
    btn_minimize: TitleBarButton,
    btn_maximize_restore: TitleBarButton,
    btn_close: TitleBarButton,
}

impl TitleBar {
    /// Build a title bar; `initially_active` / `initially_maximized` are
    /// sampled from the OS by the caller at construction time.
    pub fn new(options: TitleBarOptions, initially_active: bool, initially_maximized: bool) -> Self {
        let caption_icon = resolve_caption_icon(
            options.caption_icon.as_deref(),
            options.window_icon.as_deref(),
            options.app_icon.as_deref(),
        );
        let link = ChromeLink::new(ChromeState {
            active: initially_active,
            maximized: initially_maximized,
            caption_button_style: options.caption_style,
            active_color: options.active_color,
            hover_color: options.hover_color,
        });

        let btn_caption_icon =
            TitleBarButton::with_icon(ButtonRole::CaptionIcon, caption_icon.uri.clone());
        let tools = options
            .tool_buttons
            .iter()
            .map(|spec| {
                let mut button = TitleBarButton::with_icon(ButtonRole::Tool, spec.icon.clone());
                button.set_enabled(spec.enabled);
                LabeledButton {
                    id: spec.id.clone(),
                    tooltip: spec.tooltip.clone(),
                    button,
                }
            })
            .collect();
        let modes = options
            .mode_buttons
            .iter()
            .map(|spec| {
                let mut button = TitleBarButton::with_icon(ButtonRole::Tool, spec.icon.clone());
                button.set_enabled(spec.enabled);
                LabeledButton {
                    id: spec.id.clone(),
                    tooltip: spec.tooltip.clone(),
                    button,
                }
            })
            .collect();

        let mut btn_minimize = TitleBarButton::new(ButtonRole::Minimize);
        btn_minimize.set_visible(options.minimizable);
        let mut btn_maximize_restore = TitleBarButton::new(ButtonRole::MaximizeRestore);
        btn_maximize_restore.set_visible(options.maximizable);
        let btn_close = TitleBarButton::new(ButtonRole::Close);

        Self {
            link,
            caption_icon,
            embed_menu_bar: options.embed_menu_bar,
            btn_caption_icon,
            tools,
            modes,
            btn_minimize,
            btn_maximize_restore,
            btn_close,
        }
    }

    /// Handle shared with the platform decoration filter.
    pub fn link(&self) -> ChromeLink {
        self.link.clone()
    }

    pub fn is_active(&self) -> bool {
        self.link.is_active()
    }

    pub fn set_active(&self, active: bool) {
        self.link.set_active(active);
    }

    pub fn is_maximized(&self) -> bool {
        self.link.is_maximized()
    }

    pub fn set_maximized(&self, maximized: bool) {
        self.link.set_maximized(maximized);
    }

    pub fn caption_button_style(&self) -> CaptionButtonStyle {
        self.link.caption_button_style()
    }

    pub fn set_caption_button_style(&self, style: CaptionButtonStyle) {
        self.link.set_caption_button_style(style);
    }

    pub fn set_active_color(&self, color: Color32) {
        self.link.set_active_color(color);
    }

    pub fn set_hover_color(&self, color: Color32) {
        self.link.set_hover_color(color);
    }

    pub fn set_minimizable(&mut self, on: bool) {
        self.btn_minimize.set_visible(on);
    }

    pub fn set_maximizable(&mut self, on: bool) {
        self.btn_maximize_restore.set_visible(on);
    }

    /// See [`ChromeLink::on_window_state_change`].
    pub fn on_window_state_change(&self, active: bool, flags: WindowStateFlags) {
        self.link.on_window_state_change(active, flags);
    }

    /// True while the pointer is over any of minimize / maximize-restore /
    /// close. Mac style shares hover across all three from this.
    pub fn is_caption_button_hovered(&self) -> bool {
        self.btn_minimize.is_hovered()
            || self.btn_maximize_restore.is_hovered()
            || self.btn_close.is_hovered()
    }

    pub fn is_over_draggable_chrome(&self, pos: Pos2) -> bool {
        self.link.is_over_draggable_chrome(pos)
    }

    pub fn set_mode_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(entry) = self.modes.iter_mut().find(|entry| entry.id == id) {
            entry.button.set_enabled(enabled);
        }
    }

    pub fn set_tool_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(entry) = self.tools.iter_mut().find(|entry| entry.id == id) {
            entry.button.set_enabled(enabled);
        }
    }

    pub fn set_tool_icon(&mut self, id: &str, icon: String) {
        if let Some(entry) = self.tools.iter_mut().find(|entry| entry.id == id) {
            entry.button.set_icon(icon);
        }
    }

    /// Pin the matching mode button down and release the others.
    pub fn set_current_mode(&mut self, id: &str) {
        for entry in &mut self.modes {
            entry.button.set_keep_down(entry.id == id);
        }
    }

    pub fn mode_keep_down(&self, id: &str) -> bool {
        self.modes
            .iter()
            .find(|entry| entry.id == id)
            .is_some_and(|entry| entry.button.keep_down())
    }

    pub fn mode_enabled(&self, id: &str) -> bool {
        self.modes
            .iter()
            .find(|entry| entry.id == id)
            .is_some_and(|entry| entry.button.is_enabled())
    }

    pub fn tool_icon(&self, id: &str) -> Option<&str> {
        self.tools
            .iter()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.button.icon())
    }

    /// Apply one host signal in enable/disable/set-icon/set-pressed terms.
    pub fn apply_host_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::ModeChanged(id) => self.set_current_mode(id),
            HostEvent::ProjectAdded => self.set_mode_enabled(ids::MODE_PROJECTS, true),
            HostEvent::ProjectRemoved { remaining } => {
                self.set_mode_enabled(ids::MODE_PROJECTS, *remaining > 0)
            }
            HostEvent::BuildStateChanged { building } => {
                let icon = if *building {
                    crate::icons::asset_uri("tool/cancel-build.svg")
                } else {
                    crate::icons::asset_uri("tool/build.svg")
                };
                self.set_tool_icon(ids::TOOL_BUILD, icon);
            }
            HostEvent::DesignModeAvailable(enabled) => {
                self.set_mode_enabled(ids::MODE_DESIGN, *enabled)
            }
        }
    }

    /// Render the bar without an embedded menu.
    pub fn show(&mut self, ctx: &egui::Context) -> TitleBarResponse {
        self.show_with_menu(ctx, |_| {})
    }

    /// Render the bar as a top panel; `menu` is laid out after the caption
    /// icon when menu embedding is enabled.
    pub fn show_with_menu(
        &mut self,
        ctx: &egui::Context,
        menu: impl FnOnce(&mut Ui),
    ) -> TitleBarResponse {
        let state = {
            let shared = self.link.0.borrow();
            shared.state.clone()
        };
        let background = if state.active {
            state.active_color
        } else {
            INACTIVE_BACKGROUND
        };

        let mut response = TitleBarResponse::default();
        let button_ctx = ButtonContext {
            active: state.active,
            maximized: state.maximized,
            style: state.caption_button_style,
            caption_hovered: self.is_caption_button_hovered(),
            hover_color: state.hover_color,
            now: Instant::now(),
        };

        let panel = egui::TopBottomPanel::top("chromebar_title_bar")
            .exact_height(TITLE_BAR_HEIGHT)
            .frame(egui::Frame::none().fill(background));
        panel.show(ctx, |ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;
            let bar_rect = ui.max_rect();
            let mut controls: Vec<Rect> = Vec::new();
            let mut menu_rect: Option<Rect> = None;

            ui.horizontal(|ui| {
                if !self.caption_icon.drop_left_margin {
                    ui.add_space(LEFT_MARGIN_WIDTH);
                }

                let square = Vec2::new(SQUARE_BUTTON_WIDTH, TITLE_BAR_HEIGHT);
                let icon_response = self.btn_caption_icon.show(ui, &button_ctx, square);
                controls.push(icon_response.rect);

                if self.embed_menu_bar {
                    let scope = ui.scope(|ui| {
                        egui::menu::bar(ui, |ui| menu(ui));
                    });
                    menu_rect = Some(scope.response.rect);
                }

                // Flexible spacer: push everything after it to the right.
                let caption_width = state.caption_button_style.caption_button_width();
                let system_count = [&self.btn_minimize, &self.btn_maximize_restore, &self.btn_close]
                    .iter()
                    .filter(|b| b.is_visible())
                    .count();
                let right_width = (self.tools.len() + self.modes.len()) as f32
                    * SQUARE_BUTTON_WIDTH
                    + system_count as f32 * caption_width;
                ui.add_space((ui.available_width() - right_width).max(0.0));

                for entry in &mut self.tools {
                    let r = entry
                        .button
                        .show(ui, &button_ctx, square)
                        .on_hover_text(&entry.tooltip);
                    controls.push(r.rect);
                    if r.clicked() && entry.button.is_enabled() {
                        response.clicked_tool = Some(entry.id.clone());
                    }
                }
                for entry in &mut self.modes {
                    let r = entry
                        .button
                        .show(ui, &button_ctx, square)
                        .on_hover_text(&entry.tooltip);
                    controls.push(r.rect);
                    if r.clicked() && entry.button.is_enabled() {
                        response.activated_mode = Some(entry.id.clone());
                    }
                }

                let caption_size = Vec2::new(caption_width, TITLE_BAR_HEIGHT);
                if self.btn_minimize.is_visible() {
                    let r = self.btn_minimize.show(ui, &button_ctx, caption_size);
                    controls.push(r.rect);
                    if r.clicked() {
                        response.minimize_requested = true;
                    }
                }
                if self.btn_maximize_restore.is_visible() {
                    let r = self.btn_maximize_restore.show(ui, &button_ctx, caption_size);
                    controls.push(r.rect);
                    if r.clicked() {
                        response.maximize_restore_requested = true;
                    }
                }
                let r = self.btn_close.show(ui, &button_ctx, caption_size);
                controls.push(r.rect);
                if r.clicked() {
                    response.close_requested = true;
                }
            });

            self.link.set_layout(LayoutSnapshot {
                bar: Some(bar_rect),
                controls,
                menu: menu_rect,
                pixels_per_point: ctx.pixels_per_point(),
            });
        });

        // A press on bare chrome is a window drag; the host forwards it to
        // the platform filter (the Win32 path never sees it, the OS routes
        // the press as a caption hit instead).
        let press = ctx.input(|i| {
            i.pointer
                .press_origin()
                .filter(|_| i.pointer.primary_pressed())
        });
        if let Some(pos) = press {
            if self.link.is_over_draggable_chrome(pos) {
                response.drag_requested = true;
            }
        }

        response
    }
}
