use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Height of the title bar strip in logical points.
pub const TITLE_BAR_HEIGHT: f32 = 30.0;

/// Width of the left margin spacer before the caption icon.
pub const LEFT_MARGIN_WIDTH: f32 = 5.0;

/// Width of caption-icon / mode / tool buttons.
pub const SQUARE_BUTTON_WIDTH: f32 = 30.0;

/// Background color used while the window is inactive.
pub const INACTIVE_BACKGROUND: Color32 = Color32::from_rgb(33, 37, 43);

/// Active background used when the OS provides no accent color.
pub const DEFAULT_ACTIVE_BACKGROUND: Color32 = Color32::from_rgb(40, 44, 52);

/// Default hover fill for non-close buttons.
pub const DEFAULT_HOVER_COLOR: Color32 = Color32::from_rgb(62, 68, 81);

/// Underline color marking the pinned-down active-mode button.
pub const TOOL_ACCENT: Color32 = Color32::from_rgb(160, 165, 170);

/// Hover fill for the close button, independent of the theme.
pub fn close_hover_color() -> Color32 {
    Color32::from_rgba_unmultiplied(232, 17, 35, 229)
}

/// Icon set and geometry used for the three system caption buttons.
///
/// The ordinal is what gets persisted; unknown values fall back to
/// [`CaptionButtonStyle::Custom`] on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
pub enum CaptionButtonStyle {
    #[default]
    Custom,
    Windows,
    Mac,
}

impl CaptionButtonStyle {
    pub const ALL: [CaptionButtonStyle; 3] = [
        CaptionButtonStyle::Custom,
        CaptionButtonStyle::Windows,
        CaptionButtonStyle::Mac,
    ];

    pub fn ordinal(self) -> i64 {
        match self {
            CaptionButtonStyle::Custom => 0,
            CaptionButtonStyle::Windows => 1,
            CaptionButtonStyle::Mac => 2,
        }
    }

    pub fn from_ordinal(value: i64) -> Option<Self> {
        match value {
            0 => Some(CaptionButtonStyle::Custom),
            1 => Some(CaptionButtonStyle::Windows),
            2 => Some(CaptionButtonStyle::Mac),
            _ => None,
        }
    }

    /// Width of one system caption button for this style.
    pub fn caption_button_width(self) -> f32 {
        match self {
            CaptionButtonStyle::Custom => 30.0,
            CaptionButtonStyle::Windows => 46.0,
            CaptionButtonStyle::Mac => 26.0,
        }
    }

    /// Edge length of the caption button glyphs for this style.
    pub fn caption_icon_size(self) -> f32 {
        match self {
            CaptionButtonStyle::Mac => 16.0,
            _ => 12.0,
        }
    }
}

impl From<CaptionButtonStyle> for i64 {
    fn from(style: CaptionButtonStyle) -> i64 {
        style.ordinal()
    }
}

impl From<i64> for CaptionButtonStyle {
    fn from(value: i64) -> Self {
        CaptionButtonStyle::from_ordinal(value).unwrap_or_default()
    }
}

impl std::fmt::Display for CaptionButtonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionButtonStyle::Custom => write!(f, "Custom"),
            CaptionButtonStyle::Windows => write!(f, "Windows"),
            CaptionButtonStyle::Mac => write!(f, "Mac"),
        }
    }
}

/// Read the DWM colorization ("accent") color from the registry.
///
/// Any failure along the way simply yields `None`; callers fall back to
/// [`DEFAULT_ACTIVE_BACKGROUND`].
#[cfg(target_os = "windows")]
pub fn system_accent_color() -> Option<Color32> {
    use windows::core::w;
    use windows::Win32::Foundation::ERROR_SUCCESS;
    use windows::Win32::System::Registry::{RegGetValueW, HKEY_CURRENT_USER, RRF_RT_REG_DWORD};

    unsafe {
        let mut value: u32 = 0;
        let mut size = std::mem::size_of::<u32>() as u32;
        let result = RegGetValueW(
            HKEY_CURRENT_USER,
            w!("SOFTWARE\\Microsoft\\Windows\\DWM"),
            w!("ColorizationColor"),
            RRF_RT_REG_DWORD,
            None,
            Some(&mut value as *mut u32 as *mut core::ffi::c_void),
            Some(&mut size),
        );
        if result != ERROR_SUCCESS {
            return None;
        }
        // Stored as 0xAARRGGBB; the title bar background is opaque.
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        Some(Color32::from_rgb(r, g, b))
    }
}

#[cfg(not(target_os = "windows"))]
pub fn system_accent_color() -> Option<Color32> {
    None
}

/// Active title bar color: the OS accent color where available, otherwise
/// the built-in dark default.
pub fn initial_active_color() -> Color32 {
    system_accent_color().unwrap_or(DEFAULT_ACTIVE_BACKGROUND)
}
