mod common;

use cgmath::Point3;
use common::test_utils::{assert_close, assert_close_f32};
use court_ngin::court::basket::{
    self, BasketSide, NET_BOTTOM_RADIUS, RIM_HEIGHT, RIM_RADIUS, SCALE, arm_offset,
    guide_rectangle, net_ring, net_segments, pole_offset, ring_ratio, rim_center,
};

#[test]
fn net_has_twelve_strands_and_four_rings() {
    let basket = basket::build(BasketSide::LEFT);
    assert_eq!(basket.children_named("net_segment_").count(), 12);
    assert_eq!(basket.children_named("net_ring_").count(), 4);

    for strand in basket.children_named("net_segment_") {
        let geometry = strand.geometry().expect("strands carry a mesh");
        assert_eq!(geometry.points().len(), 2);
        assert_eq!(geometry.primitive_count(), 1);
    }
    for ring in basket.children_named("net_ring_") {
        assert_eq!(ring.geometry().expect("rings carry a mesh").points().len(), 33);
    }
}

#[test]
fn rings_narrow_linearly_towards_the_bottom() {
    for index in 1..=4 {
        let r = ring_ratio(index);
        let expected_radius = 0.75 + (0.4 - 0.75) * r;
        let ring = net_ring(index, 0.0, RIM_HEIGHT, 0.0);
        assert_eq!(ring.len(), 33);
        assert_close(ring[0], *ring.last().expect("ring is not empty"));
        for point in &ring {
            assert_close_f32(point.y, 8.5 - r);
            assert_close_f32(point.x.hypot(point.z), expected_radius);
        }
    }
    assert_close_f32(ring_ratio(4), 1.0);
}

#[test]
fn strands_join_rim_and_net_bottom() {
    let segments = net_segments(0.85, RIM_HEIGHT, 0.0);
    assert_eq!(segments.len(), 12);
    let [top, bottom] = segments[0];
    assert_close(top, Point3::new(0.85 + RIM_RADIUS, RIM_HEIGHT, 0.0));
    assert_close(bottom, Point3::new(0.85 + NET_BOTTOM_RADIUS, RIM_HEIGHT - 1.0, 0.0));
}

#[test]
fn sides_mirror_the_hoop_along_x() {
    let left = BasketSide::LEFT.direction;
    let right = BasketSide::RIGHT.direction;

    assert_close_f32(pole_offset(left).x, -1.5);
    assert_close_f32(pole_offset(left).x, -pole_offset(right).x);
    assert_close_f32(pole_offset(right).y, 6.0);

    assert_close_f32(arm_offset(left).x, -0.75);
    assert_close_f32(arm_offset(left).x, -arm_offset(right).x);
    assert_close_f32(arm_offset(right).y, 10.0);

    assert_close(rim_center(left), Point3::new(0.85, 8.5, 0.0));
    assert_close(rim_center(right), Point3::new(-0.85, 8.5, 0.0));
}

#[test]
fn guide_rectangle_is_closed_on_the_court_side() {
    for (direction, face_x) in [(1.0, 0.11), (-1.0, -0.11)] {
        let outline = guide_rectangle(direction);
        assert_close(outline[0], outline[4]);
        for point in outline {
            assert_close_f32(point.x, face_x);
            assert!(point.y >= 9.1 - 1e-5 && point.y <= 10.5 + 1e-5);
            assert!(point.z.abs() <= 1.1 + 1e-5);
        }
    }
}

#[test]
fn baskets_are_scaled_and_placed_at_the_court_ends() {
    let left = basket::build(BasketSide::LEFT);
    let right = basket::build(BasketSide::RIGHT);

    assert_eq!(left.name, "basket_left");
    assert_eq!(right.name, "basket_right");
    assert_close_f32(left.transform.scale.x, SCALE);
    assert_close_f32(left.transform.position.x, -14.0);
    assert_close_f32(right.transform.position.x, 14.0);

    let names = left
        .children
        .iter()
        .take(5)
        .map(|child| child.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["pole", "arm", "backboard", "guide_rectangle", "rim"]);
}

#[test]
fn rim_lies_horizontal_at_its_world_height() {
    let left = basket::build(BasketSide::LEFT);
    let world = left.world_transform_of("rim").expect("basket has a rim");
    let rim = left.find("rim").and_then(|n| n.geometry()).expect("rim mesh");
    let centre = Point3::new(-14.0 + SCALE * 0.85, SCALE * RIM_HEIGHT, 0.0);
    let tube = 0.05 * SCALE;

    for point in rim.points() {
        let point = world.transform_point(point);
        assert!((point.y - centre.y).abs() <= tube + 1e-5, "{point:?} leaves the rim plane");
        let radius = (point.x - centre.x).hypot(point.z - centre.z);
        assert!(radius >= SCALE * RIM_RADIUS - tube - 1e-5);
        assert!(radius <= SCALE * RIM_RADIUS + tube + 1e-5);
    }
}
