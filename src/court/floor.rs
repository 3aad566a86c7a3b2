//! The hardwood court and its painted lines.

use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::Point3;

use crate::{
    court::basket::{self, BasketSide},
    data_structures::{
        geometry::{self, arc_points, line_strip, ring_points},
        model::Material,
        scene_graph::Node,
    },
};

pub const COURT_LENGTH: f32 = 30.0;
pub const COURT_WIDTH: f32 = 15.0;
const COURT_THICKNESS: f32 = 0.2;
/// Lines sit on the surface (top face at y = 0.1), level with the ball's shadow.
pub const LINE_HEIGHT: f32 = 0.11;

const CENTER_CIRCLE_RADIUS: f32 = 1.8;
const KEY_LENGTH: f32 = 5.8;
const KEY_WIDTH: f32 = 4.9;
pub const THREE_POINT_RADIUS: f32 = 6.75;

const WOOD: u32 = 0xc68642;
const PAINT: u32 = 0xffffff;

fn half_length() -> f32 {
    COURT_LENGTH / 2.0
}

fn half_width() -> f32 {
    COURT_WIDTH / 2.0
}

pub fn boundary() -> [Point3<f32>; 5] {
    let (x, z) = (half_length(), half_width());
    [
        Point3::new(-x, LINE_HEIGHT, -z),
        Point3::new(x, LINE_HEIGHT, -z),
        Point3::new(x, LINE_HEIGHT, z),
        Point3::new(-x, LINE_HEIGHT, z),
        Point3::new(-x, LINE_HEIGHT, -z),
    ]
}

pub fn center_line() -> [Point3<f32>; 2] {
    [
        Point3::new(0.0, LINE_HEIGHT, -half_width()),
        Point3::new(0.0, LINE_HEIGHT, half_width()),
    ]
}

/// Baseline edge (±15) on the side of the court the hoop stands on.
fn baseline_x(side: BasketSide) -> f32 {
    side.x.signum() * half_length()
}

/// The painted key: an open rectangle from the baseline to the free-throw line.
pub fn key(side: BasketSide) -> [Point3<f32>; 4] {
    let baseline = baseline_x(side);
    let free_throw = baseline + side.direction * KEY_LENGTH;
    let z = KEY_WIDTH / 2.0;
    [
        Point3::new(baseline, LINE_HEIGHT, -z),
        Point3::new(free_throw, LINE_HEIGHT, -z),
        Point3::new(free_throw, LINE_HEIGHT, z),
        Point3::new(baseline, LINE_HEIGHT, z),
    ]
}

/// Where the hoop's rim projects onto the court.
pub fn hoop_spot(side: BasketSide) -> Point3<f32> {
    let rim = basket::rim_center(side.direction);
    Point3::new(side.x + rim.x * basket::SCALE, LINE_HEIGHT, rim.z)
}

/// Three-point line: a half circle around the hoop spot, closed to the baseline
/// with straight corner lines.
pub fn three_point_line(side: BasketSide) -> Vec<Point3<f32>> {
    let start = if side.direction > 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
    let arc = arc_points(
        hoop_spot(side),
        THREE_POINT_RADIUS,
        start,
        start + PI,
        48,
    );
    let baseline = baseline_x(side);
    let (first, last) = (arc[0], arc[arc.len() - 1]);

    let mut points = Vec::with_capacity(arc.len() + 2);
    points.push(Point3::new(baseline, LINE_HEIGHT, first.z));
    points.extend(arc);
    points.push(Point3::new(baseline, LINE_HEIGHT, last.z));
    points
}

pub fn build() -> Node {
    let paint = || Material::line(PAINT);
    let mut floor = Node::group("floor").with_child(Node::mesh(
        "court",
        geometry::cuboid(COURT_LENGTH, COURT_THICKNESS, COURT_WIDTH),
        Material::phong(WOOD).with_specular(0x222222, 10.0),
    ));

    floor.add_child(Node::mesh("boundary", line_strip(&boundary()), paint()));
    floor.add_child(Node::mesh(
        "center_line",
        line_strip(&center_line()),
        paint(),
    ));
    floor.add_child(Node::mesh(
        "center_circle",
        line_strip(&ring_points(
            Point3::new(0.0, LINE_HEIGHT, 0.0),
            CENTER_CIRCLE_RADIUS,
            64,
        )),
        paint(),
    ));

    for side in [BasketSide::LEFT, BasketSide::RIGHT] {
        let suffix = if side.x < 0.0 { "left" } else { "right" };
        floor.add_child(Node::mesh(
            &format!("key_{suffix}"),
            line_strip(&key(side)),
            paint(),
        ));
        floor.add_child(Node::mesh(
            &format!("three_point_{suffix}"),
            line_strip(&three_point_line(side)),
            paint(),
        ));
    }

    floor
}
