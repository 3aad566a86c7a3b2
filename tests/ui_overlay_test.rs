use court_ngin::ui::{
    CONTROLS_CONTAINER_ID, OverlayHost, SCORE_CONTAINER_ID, STYLESHEET_ID, Ui, panels::PanelHost,
};

fn controls_text(ui: &Ui<PanelHost>) -> String {
    ui.host()
        .panel(CONTROLS_CONTAINER_ID)
        .expect("instructions panel exists")
        .text()
}

#[test]
fn overlay_starts_with_score_and_instructions() {
    let ui = Ui::new(PanelHost::new());
    let host = ui.host();

    assert_eq!(host.stylesheets(), [STYLESHEET_ID.to_string()]);
    assert_eq!(host.panels().len(), 2);
    assert_eq!(
        host.panel(SCORE_CONTAINER_ID).map(|panel| panel.text()),
        Some("Score: 0".to_string())
    );

    let controls = controls_text(&ui);
    assert!(controls.starts_with("Basketball Court - HW05"));
    assert!(controls.contains("O - Toggle orbit camera"));
    assert!(!controls.contains("(ON)"));
    assert!(!controls.contains("(OFF)"));
}

#[test]
fn orbit_status_is_shown_after_a_toggle() {
    let mut ui = Ui::new(PanelHost::new());

    ui.update_orbit_status(false);
    let controls = controls_text(&ui);
    assert!(controls.contains("O - Toggle orbit camera (OFF)"));
    assert!(controls.contains("Interactive controls coming in HW06..."));

    ui.update_orbit_status(true);
    assert!(controls_text(&ui).contains("O - Toggle orbit camera (ON)"));
    assert_eq!(ui.host().panels().len(), 2);
}

#[test]
fn stylesheet_is_added_once() {
    let mut host = PanelHost::new();
    host.ensure_stylesheet(STYLESHEET_ID);
    let ui = Ui::new(host);
    assert_eq!(ui.host().stylesheets().len(), 1);
}

#[test]
fn missing_instructions_panel_is_ignored() {
    let mut ui = Ui::new(PanelHost::new());
    assert!(ui.host_mut().remove_panel(CONTROLS_CONTAINER_ID).is_some());

    ui.update_orbit_status(true);

    assert!(!ui.host().has_panel(CONTROLS_CONTAINER_ID));
    assert_eq!(ui.host().panels().len(), 1);
    assert!(ui.host().has_panel(SCORE_CONTAINER_ID));
}
