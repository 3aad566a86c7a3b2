mod common;

use cgmath::Point3;
use common::test_utils::{assert_close, assert_close_f32};
use court_ngin::court::{SceneConfig, build_scene};

#[test]
fn scene_holds_every_component_once() {
    let scene = build_scene();
    let names = scene
        .children
        .iter()
        .map(|child| child.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        ["skybox", "floor", "basket_left", "basket_right", "ball"]
    );
    assert!(scene.mesh_count() > 0);
}

#[test]
fn rim_world_position_follows_basket_scale() {
    let scene = build_scene();
    let rim = scene.world_transform_of("rim").expect("left basket has a rim");
    let origin = rim.transform_point(Point3::new(0.0, 0.0, 0.0));
    assert_close(origin, Point3::new(-14.0 + 0.5 * 0.85, 0.5 * 8.5, 0.0));
    assert_close_f32(rim.scale.x, 0.5);
}

#[test]
fn default_camera_looks_at_the_centre_court() {
    let config = SceneConfig::default();
    assert_close(config.target, Point3::new(0.0, 0.0, 0.0));
    assert!(config.eye.y > 0.0);
    assert!(config.orbit_enabled);
}
