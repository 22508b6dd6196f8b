use chromebar::host::{ids, HostEvent, ModeButtonSpec, ToolButtonSpec};
use chromebar::titlebar::{TitleBar, TitleBarOptions};

fn ide_bar() -> TitleBar {
    let options = TitleBarOptions {
        tool_buttons: vec![
            ToolButtonSpec::new(ids::TOOL_RUN, "run.svg".into(), "Run"),
            ToolButtonSpec::new(ids::TOOL_BUILD, "build.svg".into(), "Build"),
        ],
        mode_buttons: vec![
            ModeButtonSpec::new(ids::MODE_WELCOME, "welcome.svg".into(), "Welcome"),
            ModeButtonSpec::new(ids::MODE_EDIT, "edit.svg".into(), "Edit"),
            ModeButtonSpec::new(ids::MODE_DESIGN, "design.svg".into(), "Design").disabled(),
            ModeButtonSpec::new(ids::MODE_PROJECTS, "projects.svg".into(), "Projects").disabled(),
        ],
        ..Default::default()
    };
    TitleBar::new(options, true, false)
}

#[test]
fn mode_change_pins_exactly_one_button() {
    let mut bar = ide_bar();
    bar.apply_host_event(&HostEvent::ModeChanged(ids::MODE_EDIT.to_owned()));
    assert!(bar.mode_keep_down(ids::MODE_EDIT));
    assert!(!bar.mode_keep_down(ids::MODE_WELCOME));

    bar.apply_host_event(&HostEvent::ModeChanged(ids::MODE_WELCOME.to_owned()));
    assert!(bar.mode_keep_down(ids::MODE_WELCOME));
    assert!(!bar.mode_keep_down(ids::MODE_EDIT));
}

#[test]
fn project_signals_gate_the_projects_mode() {
    let mut bar = ide_bar();
    assert!(!bar.mode_enabled(ids::MODE_PROJECTS));

    bar.apply_host_event(&HostEvent::ProjectAdded);
    assert!(bar.mode_enabled(ids::MODE_PROJECTS));

    bar.apply_host_event(&HostEvent::ProjectRemoved { remaining: 1 });
    assert!(bar.mode_enabled(ids::MODE_PROJECTS));

    bar.apply_host_event(&HostEvent::ProjectRemoved { remaining: 0 });
    assert!(!bar.mode_enabled(ids::MODE_PROJECTS));
}

#[test]
fn build_state_swaps_the_build_icon() {
    let mut bar = ide_bar();
    bar.apply_host_event(&HostEvent::BuildStateChanged { building: true });
    assert!(bar
        .tool_icon(ids::TOOL_BUILD)
        .unwrap()
        .ends_with("cancel-build.svg"));

    bar.apply_host_event(&HostEvent::BuildStateChanged { building: false });
    assert!(bar.tool_icon(ids::TOOL_BUILD).unwrap().ends_with("build.svg"));
    assert!(!bar
        .tool_icon(ids::TOOL_BUILD)
        .unwrap()
        .ends_with("cancel-build.svg"));
}

#[test]
fn design_mode_availability_toggles_the_design_button() {
    let mut bar = ide_bar();
    assert!(!bar.mode_enabled(ids::MODE_DESIGN));
    bar.apply_host_event(&HostEvent::DesignModeAvailable(true));
    assert!(bar.mode_enabled(ids::MODE_DESIGN));
    bar.apply_host_event(&HostEvent::DesignModeAvailable(false));
    assert!(!bar.mode_enabled(ids::MODE_DESIGN));
}

#[test]
fn signals_for_unknown_buttons_are_ignored() {
    let mut bar = TitleBar::new(TitleBarOptions::default(), true, false);
    // No mode or tool buttons configured; nothing to update, nothing to
    // panic about.
    bar.apply_host_event(&HostEvent::ProjectAdded);
    bar.apply_host_event(&HostEvent::BuildStateChanged { building: true });
    bar.apply_host_event(&HostEvent::ModeChanged(ids::MODE_EDIT.to_owned()));
    assert!(!bar.mode_keep_down(ids::MODE_EDIT));
}
