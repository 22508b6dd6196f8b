use eframe::egui;

use crate::style::CaptionButtonStyle;

/// Options page for the chrome settings: a small window with the caption
/// button style picker.
pub struct SettingsEditor {
    pub open: bool,
    draft: CaptionButtonStyle,
}

impl SettingsEditor {
    pub fn new(current: CaptionButtonStyle) -> Self {
        Self {
            open: false,
            draft: current,
        }
    }

    pub fn open_with(&mut self, current: CaptionButtonStyle) {
        self.draft = current;
        self.open = true;
    }

    /// Render the editor; returns the newly applied style when the user
    /// confirms a change.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<CaptionButtonStyle> {
        if !self.open {
            return None;
        }
        let mut applied = None;
        let mut open = self.open;
        egui::Window::new("Title Bar Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Caption button style");
                for style in CaptionButtonStyle::ALL {
                    ui.radio_value(&mut self.draft, style, style.to_string());
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        applied = Some(self.draft);
                    }
                    if ui.button("Close").clicked() {
                        self.open = false;
                    }
                });
            });
        if !open {
            self.open = false;
        }
        applied
    }
}
