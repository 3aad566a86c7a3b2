mod common;

use cgmath::{MetricSpace, Point3};
use common::test_utils::assert_close;
use court_ngin::{
    court::ball::{self, BALL_CENTER, Hemisphere, SEAM_POINTS, SEAM_RADIUS, seam_points},
    data_structures::geometry::Topology,
};

#[test]
fn ball_has_twelve_seams_of_thirty_three_points() {
    let ball = ball::build();
    let seams = ball.children_named("seam_").collect::<Vec<_>>();
    assert_eq!(seams.len(), 12);

    for seam in seams {
        let geometry = seam.geometry().expect("seams carry a mesh");
        assert_eq!(geometry.topology, Topology::Lines);
        assert_eq!(geometry.points().len(), SEAM_POINTS);
        assert_eq!(geometry.primitive_count(), SEAM_POINTS - 1);
    }
}

#[test]
fn ball_contains_sphere_and_shadow() {
    let ball = ball::build();
    assert_eq!(ball.children.first().map(|n| n.name.as_str()), Some("ball_sphere"));
    assert_eq!(ball.children.last().map(|n| n.name.as_str()), Some("ball_shadow"));
    assert!(ball.find("seam_5_bottom").is_some());
    assert!(ball.find("seam_6_top").is_none());
}

#[test]
fn seam_planes_are_sixty_degrees_apart() {
    for seam_index in 0..6 {
        let points = seam_points(seam_index, Hemisphere::Top);
        let equator = points[SEAM_POINTS / 2];
        let angle = seam_index as f32 * std::f32::consts::FRAC_PI_3;
        assert_close(
            equator,
            Point3::new(
                angle.cos() * SEAM_RADIUS,
                BALL_CENTER.y,
                angle.sin() * SEAM_RADIUS,
            ),
        );
    }
}

#[test]
fn hemispheres_mirror_each_other_around_the_centre() {
    let top = seam_points(2, Hemisphere::Top);
    let bottom = seam_points(2, Hemisphere::Bottom);
    for (t, b) in top.iter().zip(&bottom) {
        assert!((t.x - b.x).abs() < 1e-6);
        assert!((t.z - b.z).abs() < 1e-6);
        assert!(((t.y - BALL_CENTER.y) + (b.y - BALL_CENTER.y)).abs() < 1e-6);
        assert!((b.distance(BALL_CENTER) - SEAM_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn sphere_surface_is_centred_above_the_floor() {
    let ball = ball::build();
    let world = ball
        .world_transform_of("ball_sphere")
        .expect("ball has a sphere");
    let sphere = ball.find("ball_sphere").and_then(|n| n.geometry()).expect("sphere mesh");

    for point in sphere.points() {
        let point = world.transform_point(point);
        assert!((point.distance(BALL_CENTER) - ball::BALL_RADIUS).abs() < 1e-5);
    }
    assert_close(BALL_CENTER, Point3::new(0.0, 0.4, 0.0));
}

#[test]
fn shadow_lies_flat_on_the_floor() {
    let ball = ball::build();
    let world = ball
        .world_transform_of("ball_shadow")
        .expect("ball has a shadow");
    let shadow = ball.find("ball_shadow").and_then(|n| n.geometry()).expect("shadow mesh");

    for point in shadow.points() {
        let point = world.transform_point(point);
        assert!((point.y - 0.11).abs() < 1e-5, "{point:?} is off the floor");
        assert!(point.x.hypot(point.z) <= 0.4 + 1e-5);
    }
}
