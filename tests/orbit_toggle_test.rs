use court_ngin::{
    camera::{OrbitCamera, OrbitController},
    court::{CourtState, orbit::OrbitToggle},
    ui::{CONTROLS_CONTAINER_ID, Ui, panels::PanelHost},
};
use instant::Duration;
use winit::{
    event::MouseScrollDelta,
    keyboard::{Key, NamedKey, SmolStr},
};

fn character(c: &str) -> Key {
    Key::Character(SmolStr::new(c))
}

#[test]
fn pressing_o_twice_restores_the_state() {
    for initial in [true, false] {
        let mut orbit = OrbitToggle::new(initial);
        assert!(orbit.handle_key(&character("o")));
        assert_eq!(orbit.is_enabled(), !initial);
        assert!(orbit.handle_key(&character("O")));
        assert_eq!(orbit.is_enabled(), initial);
    }
}

#[test]
fn other_keys_leave_the_state_alone() {
    let mut orbit = OrbitToggle::default();
    for key in [
        character("p"),
        character("0"),
        character("oo"),
        Key::Named(NamedKey::Space),
        Key::Named(NamedKey::Escape),
    ] {
        assert!(!orbit.handle_key(&key));
    }
    assert!(orbit.is_enabled());
    assert_eq!(orbit.label(), "ON");
}

#[test]
fn disabled_controller_drops_pending_input() {
    let mut camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
    let radius = camera.radius;
    let mut controller = OrbitController::new(0.005, 0.1);

    controller.set_enabled(false);
    controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 2.0));
    controller.update(&mut camera, Duration::from_millis(16));
    assert_eq!(camera.radius, radius);

    controller.set_enabled(true);
    controller.update(&mut camera, Duration::from_millis(16));
    assert_eq!(camera.radius, radius);

    controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 2.0));
    controller.update(&mut camera, Duration::from_millis(16));
    assert!(camera.radius < radius);
}

fn controls_text(ui: &Ui<PanelHost>) -> String {
    ui.host()
        .panel(CONTROLS_CONTAINER_ID)
        .expect("instructions panel exists")
        .text()
}

#[test]
fn court_key_presses_update_the_instructions() {
    let mut state = CourtState::default();
    let mut ui = Ui::new(PanelHost::new());

    assert!(state.on_key(&character("o"), &mut ui));
    assert!(controls_text(&ui).contains("O - Toggle orbit camera (OFF)"));

    assert!(state.on_key(&character("O"), &mut ui));
    assert!(controls_text(&ui).contains("O - Toggle orbit camera (ON)"));
    assert!(state.orbit.is_enabled());
}

#[test]
fn other_keys_leave_the_instructions_unchanged() {
    let mut state = CourtState::default();
    let mut ui = Ui::new(PanelHost::new());
    let before = controls_text(&ui);

    assert!(!state.on_key(&character("x"), &mut ui));
    assert!(!state.on_key(&Key::Named(NamedKey::Enter), &mut ui));

    assert_eq!(controls_text(&ui), before);
    assert!(state.orbit.is_enabled());
}

#[test]
fn orbit_flag_reaches_the_controller() {
    let mut state = CourtState::default();
    let mut ui = Ui::new(PanelHost::new());
    let mut controller = OrbitController::new(0.005, 0.1);

    state.on_key(&character("o"), &mut ui);
    state.apply_orbit(&mut controller);
    assert!(!controller.is_enabled());

    state.on_key(&character("o"), &mut ui);
    state.apply_orbit(&mut controller);
    assert!(controller.is_enabled());
}
