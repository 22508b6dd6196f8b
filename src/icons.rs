use crate::style::CaptionButtonStyle;

/// Asset paths for the minimize / maximize-restore / close buttons, in that
/// order, for one rendering state.
///
/// Total over the whole `(active, maximized, hovered, pressed, style)`
/// space: every combination maps to a real asset.
pub fn caption_icon_paths(
    active: bool,
    maximized: bool,
    hovered: bool,
    pressed: bool,
    style: CaptionButtonStyle,
) -> [&'static str; 3] {
    match style {
        CaptionButtonStyle::Custom => {
            if active || hovered {
                [
                    "titlebar/custom/chrome-minimize-dark.svg",
                    if maximized {
                        "titlebar/custom/chrome-restore-dark.svg"
                    } else {
                        "titlebar/custom/chrome-maximize-dark.svg"
                    },
                    if hovered {
                        "titlebar/custom/chrome-close-light.svg"
                    } else {
                        "titlebar/custom/chrome-close-dark.svg"
                    },
                ]
            } else {
                [
                    "titlebar/custom/chrome-minimize-dark-disabled.svg",
                    if maximized {
                        "titlebar/custom/chrome-restore-dark-disabled.svg"
                    } else {
                        "titlebar/custom/chrome-maximize-dark-disabled.svg"
                    },
                    "titlebar/custom/chrome-close-dark-disabled.svg",
                ]
            }
        }
        CaptionButtonStyle::Windows => {
            if active || hovered {
                [
                    "titlebar/win/chrome-minimize-dark.svg",
                    if maximized {
                        "titlebar/win/chrome-restore-dark.svg"
                    } else {
                        "titlebar/win/chrome-maximize-dark.svg"
                    },
                    if hovered {
                        "titlebar/win/chrome-close-light.svg"
                    } else {
                        "titlebar/win/chrome-close-dark.svg"
                    },
                ]
            } else {
                [
                    "titlebar/win/chrome-minimize-dark-disabled.svg",
                    if maximized {
                        "titlebar/win/chrome-restore-dark-disabled.svg"
                    } else {
                        "titlebar/win/chrome-maximize-dark-disabled.svg"
                    },
                    "titlebar/win/chrome-close-dark-disabled.svg",
                ]
            }
        }
        // Mac buttons are little stoplight images; pressed wins over
        // hovered, hovered over plain, and an inactive window greys all
        // three out with the same dot.
        CaptionButtonStyle::Mac => {
            if pressed {
                [
                    "titlebar/mac/minimize-pressed.svg",
                    if maximized {
                        "titlebar/mac/maximize-restore-maximized-pressed.svg"
                    } else {
                        "titlebar/mac/maximize-restore-normal-pressed.svg"
                    },
                    "titlebar/mac/close-pressed.svg",
                ]
            } else if hovered {
                [
                    "titlebar/mac/minimize-hovered.svg",
                    if maximized {
                        "titlebar/mac/maximize-restore-maximized-hovered.svg"
                    } else {
                        "titlebar/mac/maximize-restore-normal-hovered.svg"
                    },
                    "titlebar/mac/close-hovered.svg",
                ]
            } else if active {
                [
                    "titlebar/mac/minimize.svg",
                    "titlebar/mac/maximize-restore.svg",
                    "titlebar/mac/close.svg",
                ]
            } else {
                [
                    "titlebar/mac/inactive.svg",
                    "titlebar/mac/inactive.svg",
                    "titlebar/mac/inactive.svg",
                ]
            }
        }
    }
}

/// Generic fallback glyph shown when neither the host nor the window
/// provides an icon.
pub const FALLBACK_CAPTION_ICON: &str = "titlebar/application-generic.svg";

/// Turn a repo-relative asset path into a URI the egui image loaders accept.
pub fn asset_uri(path: &str) -> String {
    format!("file://{}/assets/{}", env!("CARGO_MANIFEST_DIR"), path)
}

/// Outcome of caption icon resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCaptionIcon {
    /// URI of the icon to draw.
    pub uri: String,
    /// Whether the 5px left margin spacer should be removed from the bar
    /// layout. Only the Windows system-fallback icon sets this: the stock
    /// OS glyph carries its own padding.
    pub drop_left_margin: bool,
}

/// Pick the caption icon: explicit icon, then window icon, then application
/// icon, then the platform fallback.
pub fn resolve_caption_icon(
    explicit: Option<&str>,
    window_icon: Option<&str>,
    app_icon: Option<&str>,
) -> ResolvedCaptionIcon {
    resolve_caption_icon_for(cfg!(target_os = "windows"), explicit, window_icon, app_icon)
}

pub(crate) fn resolve_caption_icon_for(
    windows_fallback: bool,
    explicit: Option<&str>,
    window_icon: Option<&str>,
    app_icon: Option<&str>,
) -> ResolvedCaptionIcon {
    let provided = [explicit, window_icon, app_icon]
        .into_iter()
        .flatten()
        .find(|uri| !uri.is_empty());
    match provided {
        Some(uri) => ResolvedCaptionIcon {
            uri: uri.to_owned(),
            drop_left_margin: false,
        },
        None => ResolvedCaptionIcon {
            uri: asset_uri(FALLBACK_CAPTION_ICON),
            drop_left_margin: windows_fallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_icon_wins() {
        let resolved = resolve_caption_icon_for(true, Some("a"), Some("b"), Some("c"));
        assert_eq!(resolved.uri, "a");
        assert!(!resolved.drop_left_margin);
    }

    #[test]
    fn empty_entries_are_skipped() {
        let resolved = resolve_caption_icon_for(false, Some(""), None, Some("app"));
        assert_eq!(resolved.uri, "app");
    }

    #[test]
    fn windows_fallback_drops_margin() {
        let resolved = resolve_caption_icon_for(true, None, None, None);
        assert!(resolved.drop_left_margin);
        assert!(resolved.uri.ends_with("application-generic.svg"));
    }

    #[test]
    fn non_windows_fallback_keeps_margin() {
        let resolved = resolve_caption_icon_for(false, None, None, None);
        assert!(!resolved.drop_left_margin);
    }
}
