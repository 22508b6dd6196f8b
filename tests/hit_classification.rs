use eframe::egui::{Pos2, Rect};

use chromebar::titlebar::{LayoutSnapshot, TitleBar, TitleBarOptions};

/// A bar strip 800x30 with a caption icon at the left, a menu next to it,
/// and three caption buttons on the right.
fn install_layout(bar: &TitleBar, pixels_per_point: f32) {
    let controls = vec![
        Rect::from_min_max(Pos2::new(5.0, 0.0), Pos2::new(35.0, 30.0)), // caption icon
        Rect::from_min_max(Pos2::new(662.0, 0.0), Pos2::new(708.0, 30.0)), // minimize
        Rect::from_min_max(Pos2::new(708.0, 0.0), Pos2::new(754.0, 30.0)), // maximize-restore
        Rect::from_min_max(Pos2::new(754.0, 0.0), Pos2::new(800.0, 30.0)), // close
    ];
    bar.link().set_layout(LayoutSnapshot {
        bar: Some(Rect::from_min_max(Pos2::ZERO, Pos2::new(800.0, 30.0))),
        controls,
        menu: Some(Rect::from_min_max(Pos2::new(35.0, 0.0), Pos2::new(180.0, 30.0))),
        pixels_per_point,
    });
}

#[test]
fn points_inside_caption_buttons_are_never_draggable() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    install_layout(&bar, 1.0);
    assert!(!bar.is_over_draggable_chrome(Pos2::new(20.0, 15.0))); // caption icon
    assert!(!bar.is_over_draggable_chrome(Pos2::new(680.0, 15.0))); // minimize
    assert!(!bar.is_over_draggable_chrome(Pos2::new(730.0, 15.0))); // maximize
    assert!(!bar.is_over_draggable_chrome(Pos2::new(790.0, 5.0))); // close
}

#[test]
fn bare_bar_area_is_draggable() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    install_layout(&bar, 1.0);
    assert!(bar.is_over_draggable_chrome(Pos2::new(400.0, 15.0)));
    assert!(bar.is_over_draggable_chrome(Pos2::new(200.0, 1.0)));
}

#[test]
fn embedded_menu_bar_is_not_draggable() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    install_layout(&bar, 1.0);
    assert!(!bar.is_over_draggable_chrome(Pos2::new(100.0, 15.0)));
}

#[test]
fn points_outside_the_bar_are_not_chrome() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    install_layout(&bar, 1.0);
    assert!(!bar.is_over_draggable_chrome(Pos2::new(400.0, 45.0)));
    assert!(!bar.is_over_draggable_chrome(Pos2::new(-1.0, 10.0)));
}

#[test]
fn physical_pixel_queries_honor_the_scale_factor() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    install_layout(&bar, 2.0);
    let link = bar.link();
    // 800 physical px / 2.0 = logical x 400: bare chrome.
    assert!(link.is_over_draggable_chrome_px(800.0, 30.0));
    // 1560 physical px / 2.0 = logical x 780: inside the close button.
    assert!(!link.is_over_draggable_chrome_px(1560.0, 30.0));
    // Below the 30-point strip.
    assert!(!link.is_over_draggable_chrome_px(800.0, 70.0));
}

#[test]
fn hit_test_before_any_layout_is_never_chrome() {
    let bar = TitleBar::new(TitleBarOptions::default(), true, false);
    assert!(!bar.is_over_draggable_chrome(Pos2::new(10.0, 10.0)));
    assert!(!bar.link().is_over_draggable_chrome_px(10.0, 10.0));
}
