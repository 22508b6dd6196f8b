//! Client-side window decorations for eframe applications: a custom title
//! bar with caption buttons, an optional embedded menu bar, mode and tool
//! buttons, and per-OS window-manager integration so the borderless window
//! still moves, resizes, and maximizes like a native one.

pub mod button;
pub mod fader;
pub mod host;
pub mod icons;
pub mod logging;
pub mod platform;
pub mod settings;
pub mod settings_editor;
pub mod style;
pub mod titlebar;
