use serde::{Deserialize, Serialize};

use crate::style::CaptionButtonStyle;

/// Persisted chrome configuration. One field today: the caption button
/// style, stored as its integer ordinal (0=Custom, 1=Windows, 2=Mac).
/// A missing or empty file yields the defaults; an unknown ordinal falls
/// back to `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub caption_button_style: CaptionButtonStyle,
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Default on-disk location for the settings file.
    pub fn default_path() -> String {
        let dir = dirs_next::config_dir().unwrap_or_else(std::env::temp_dir);
        dir.join("chromebar")
            .join("settings.json")
            .to_string_lossy()
            .to_string()
    }
}
