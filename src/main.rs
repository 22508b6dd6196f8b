use eframe::egui;

use chromebar::host::{ids, HostEvent, ModeButtonSpec, ToolButtonSpec};
use chromebar::icons::asset_uri;
use chromebar::platform::geometry::ResizeAxes;
use chromebar::platform::{native_filter, DecorationFilter, DecorationHooks, ObservedWindow, WindowTarget};
use chromebar::settings::Settings;
use chromebar::settings_editor::SettingsEditor;
use chromebar::titlebar::{TitleBar, TitleBarOptions};

/// Demo host: an IDE-like shell that hands its window chrome to the title
/// bar and translates chrome requests back into viewport commands.
struct ShellApp {
    title_bar: TitleBar,
    settings: Settings,
    settings_path: String,
    settings_editor: SettingsEditor,
    filter: Box<dyn DecorationFilter>,
    target: Option<WindowTarget>,

    // Mock project/build state standing in for the host subsystems.
    current_mode: String,
    projects: usize,
    building: bool,
    design_enabled: bool,
    editor_text: String,
}

impl ShellApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Settings, settings_path: String) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let options = TitleBarOptions {
            caption_style: settings.caption_button_style,
            app_icon: Some(asset_uri("app-icon.svg")),
            embed_menu_bar: true,
            tool_buttons: vec![
                ToolButtonSpec::new(ids::TOOL_RUN, asset_uri("tool/run.svg"), "Run"),
                ToolButtonSpec::new(ids::TOOL_DEBUG, asset_uri("tool/debug.svg"), "Start Debugging"),
                ToolButtonSpec::new(ids::TOOL_BUILD, asset_uri("tool/build.svg"), "Build Project"),
            ],
            mode_buttons: vec![
                ModeButtonSpec::new(ids::MODE_WELCOME, asset_uri("mode/mode-welcome.svg"), "Welcome"),
                ModeButtonSpec::new(ids::MODE_EDIT, asset_uri("mode/mode-edit.svg"), "Edit"),
                ModeButtonSpec::new(ids::MODE_DESIGN, asset_uri("mode/mode-design.svg"), "Design")
                    .disabled(),
                ModeButtonSpec::new(ids::MODE_DEBUG, asset_uri("mode/mode-debug.svg"), "Debug"),
                ModeButtonSpec::new(ids::MODE_PROJECTS, asset_uri("mode/mode-project.svg"), "Projects")
                    .disabled(),
                ModeButtonSpec::new(ids::MODE_HELP, asset_uri("mode/mode-help.svg"), "Help"),
            ],
            ..Default::default()
        };

        let mut title_bar = TitleBar::new(options, true, false);
        title_bar.apply_host_event(&HostEvent::ModeChanged(ids::MODE_EDIT.to_owned()));

        let editor = SettingsEditor::new(settings.caption_button_style);
        Self {
            title_bar,
            settings,
            settings_path,
            settings_editor: editor,
            filter: native_filter(),
            target: None,
            current_mode: ids::MODE_EDIT.to_owned(),
            projects: 0,
            building: false,
            design_enabled: false,
            editor_text: String::from("fn main() {\n    println!(\"hello\");\n}\n"),
        }
    }

    fn attach_filter(&mut self, ctx: &egui::Context, frame: &eframe::Frame) {
        let Some(target) = WindowTarget::from_frame(frame) else {
            return;
        };
        let link = self.title_bar.link();
        let hooks = DecorationHooks {
            is_caption_hovered: Box::new({
                let link = link.clone();
                move |x, y| link.is_over_draggable_chrome_px(x, y)
            }),
            on_activation_changed: Box::new({
                let link = link.clone();
                let ctx = ctx.clone();
                move |active| {
                    link.set_active(active);
                    ctx.request_repaint();
                }
            }),
            on_window_state_changed: Box::new({
                let ctx = ctx.clone();
                move |flags| {
                    link.on_window_state_change(link.is_active(), flags);
                    ctx.request_repaint();
                }
            }),
            resize: ResizeAxes::both(),
        };
        match self.filter.attach(&target, hooks) {
            Ok(()) => {
                tracing::info!(filter = self.filter.name(), "window decoration attached");
                self.target = Some(target);
            }
            Err(err) => tracing::warn!(?err, "window decoration unavailable"),
        }
    }

    fn set_building(&mut self, building: bool) {
        self.building = building;
        self.title_bar
            .apply_host_event(&HostEvent::BuildStateChanged { building });
    }

    fn save_settings(&self) {
        if let Some(parent) = std::path::Path::new(&self.settings_path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = self.settings.save(&self.settings_path) {
            tracing::warn!(?err, "failed to save settings");
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.target.is_none() {
            self.attach_filter(ctx, frame);
        }

        // Feed toolkit-observed window state through the filter; redundant
        // calls are fine, the record diffs before dispatching.
        let observed = ctx.input(|i| {
            let viewport = i.viewport();
            ObservedWindow {
                focused: viewport.focused,
                maximized: viewport.maximized,
                minimized: viewport.minimized,
            }
        });
        if let Some(target) = self.target {
            self.filter.notify_window_state(&target, observed);
        }

        let mut open_options = false;
        let mut quit = false;
        let mut toggle_build = false;
        let building = self.building;
        let response = self.title_bar.show_with_menu(ctx, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Options...").clicked() {
                    open_options = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    quit = true;
                    ui.close_menu();
                }
            });
            ui.menu_button("Build", |ui| {
                let label = if building {
                    "Cancel Build"
                } else {
                    "Build Project"
                };
                if ui.button(label).clicked() {
                    toggle_build = true;
                    ui.close_menu();
                }
            });
        });

        if toggle_build {
            let building = !self.building;
            self.set_building(building);
        }
        if open_options {
            self.settings_editor
                .open_with(self.settings.caption_button_style);
        }
        if let Some(style) = self.settings_editor.show(ctx) {
            self.settings.caption_button_style = style;
            self.title_bar.set_caption_button_style(style);
            self.save_settings();
        }

        if response.minimize_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
        }
        if response.maximize_restore_requested {
            let maximized = self.title_bar.is_maximized();
            ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
        }
        if response.close_requested || quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if response.drag_requested {
            if let Some(target) = self.target {
                self.filter.begin_window_drag(&target);
            }
        }
        if let Some(mode) = response.activated_mode {
            self.current_mode = mode.clone();
            self.title_bar.apply_host_event(&HostEvent::ModeChanged(mode));
        }
        if let Some(tool) = response.clicked_tool {
            match tool.as_str() {
                ids::TOOL_BUILD => {
                    let building = !self.building;
                    self.set_building(building);
                }
                other => tracing::info!(tool = other, "tool triggered"),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("chromebar demo shell");
            ui.label(format!("mode: {}", self.current_mode));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Add project").clicked() {
                    self.projects += 1;
                    self.title_bar.apply_host_event(&HostEvent::ProjectAdded);
                }
                if ui.button("Remove project").clicked() {
                    self.projects = self.projects.saturating_sub(1);
                    self.title_bar.apply_host_event(&HostEvent::ProjectRemoved {
                        remaining: self.projects,
                    });
                }
                if ui
                    .checkbox(&mut self.design_enabled, "Design mode available")
                    .changed()
                {
                    self.title_bar
                        .apply_host_event(&HostEvent::DesignModeAvailable(self.design_enabled));
                }
                ui.label(format!("projects: {}", self.projects));
                if self.building {
                    ui.spinner();
                    ui.label("building...");
                }
            });

            ui.separator();
            ui.add(
                egui::TextEdit::multiline(&mut self.editor_text)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(20),
            );
        });
    }
}

fn main() -> anyhow::Result<()> {
    chromebar::logging::init(std::env::var("CHROMEBAR_DEBUG").is_ok());

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_decorations(false)
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "chromebar",
        native_options,
        Box::new(move |cc| Box::new(ShellApp::new(cc, settings, settings_path))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
