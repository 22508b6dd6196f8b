use std::time::Instant;

use eframe::egui::Color32;

use chromebar::button::{ButtonContext, ButtonRole, TitleBarButton};
use chromebar::style::{self, CaptionButtonStyle};

fn ctx(style: CaptionButtonStyle, caption_hovered: bool) -> ButtonContext {
    ButtonContext {
        active: true,
        maximized: false,
        style,
        caption_hovered,
        hover_color: style::DEFAULT_HOVER_COLOR,
        now: Instant::now(),
    }
}

#[test]
fn mac_shared_hover_lights_up_all_three_buttons() {
    // None of the buttons is hovered itself; the bar reports that one of
    // the trio is. Mac style must switch the entire set to the hovered
    // variant at once.
    let shared = ctx(CaptionButtonStyle::Mac, true);
    let minimize = TitleBarButton::new(ButtonRole::Minimize);
    let maximize = TitleBarButton::new(ButtonRole::MaximizeRestore);
    let close = TitleBarButton::new(ButtonRole::Close);
    assert_eq!(
        minimize.caption_icon_path(&shared, false),
        Some("titlebar/mac/minimize-hovered.svg")
    );
    assert_eq!(
        maximize.caption_icon_path(&shared, false),
        Some("titlebar/mac/maximize-restore-normal-hovered.svg")
    );
    assert_eq!(
        close.caption_icon_path(&shared, false),
        Some("titlebar/mac/close-hovered.svg")
    );
}

#[test]
fn shared_hover_does_not_leak_into_other_styles() {
    let shared = ctx(CaptionButtonStyle::Windows, true);
    let minimize = TitleBarButton::new(ButtonRole::Minimize);
    assert_eq!(
        minimize.caption_icon_path(&shared, false),
        Some("titlebar/win/chrome-minimize-dark.svg")
    );
}

#[test]
fn non_system_buttons_have_no_caption_icon() {
    let shared = ctx(CaptionButtonStyle::Custom, false);
    let tool = TitleBarButton::new(ButtonRole::Tool);
    assert_eq!(tool.caption_icon_path(&shared, false), None);
    let icon = TitleBarButton::new(ButtonRole::CaptionIcon);
    assert_eq!(icon.caption_icon_path(&shared, false), None);
}

#[test]
fn close_hover_fill_is_red_regardless_of_theme() {
    for active in [false, true] {
        let mut context = ctx(CaptionButtonStyle::Custom, false);
        context.active = active;
        context.hover_color = Color32::from_rgb(0, 120, 255); // loud theme
        let mut close = TitleBarButton::new(ButtonRole::Close);
        close.set_keep_down(true); // pin alpha so the base color shows
        let fill = close.hover_fill(&context, false);
        assert_eq!(fill, style::close_hover_color());
    }
}

#[test]
fn keep_down_pins_the_hover_fill() {
    let context = ctx(CaptionButtonStyle::Custom, false);
    let mut tool = TitleBarButton::new(ButtonRole::Tool);
    // No hover, no fade: a plain tool button paints nothing...
    assert_eq!(tool.hover_fill(&context, false), Color32::TRANSPARENT);
    // ...until it is the active-mode indicator.
    tool.set_keep_down(true);
    assert_eq!(tool.hover_fill(&context, false), style::DEFAULT_HOVER_COLOR);
}

#[test]
fn disabled_and_caption_icon_buttons_never_paint_hover() {
    let context = ctx(CaptionButtonStyle::Custom, false);
    let mut tool = TitleBarButton::new(ButtonRole::Tool);
    tool.set_enabled(false);
    tool.set_keep_down(true);
    assert_eq!(tool.hover_fill(&context, false), Color32::TRANSPARENT);

    let mut icon = TitleBarButton::new(ButtonRole::CaptionIcon);
    icon.set_keep_down(true);
    assert_eq!(icon.hover_fill(&context, false), Color32::TRANSPARENT);
}

#[test]
fn mac_system_buttons_paint_flat() {
    let context = ctx(CaptionButtonStyle::Mac, true);
    let mut close = TitleBarButton::new(ButtonRole::Close);
    close.set_keep_down(true);
    assert_eq!(close.hover_fill(&context, false), Color32::TRANSPARENT);
}

#[test]
fn menu_bar_items_use_the_theme_hover_color() {
    let context = ctx(CaptionButtonStyle::Custom, false);
    let mut item = TitleBarButton::new(ButtonRole::MenuBarItem);
    item.set_keep_down(true);
    assert_eq!(item.hover_fill(&context, false), style::DEFAULT_HOVER_COLOR);
}
