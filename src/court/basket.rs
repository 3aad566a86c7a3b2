//! A basketball hoop: pole, arm, backboard with its shooting guide, rim and net.
//!
//! Everything is laid out in hoop-local coordinates, mirrored along X by the
//! side's `direction` so the rim always faces the centre of the court. The
//! finished group is scaled by [`SCALE`] and moved to the side's `x`.

use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::{Point3, Rad, Vector3};

use crate::data_structures::{
    geometry::{self, arc_points, line_strip},
    model::Material,
    scene_graph::Node,
};

pub const SCALE: f32 = 0.5;

pub const RIM_RADIUS: f32 = 0.75;
pub const RIM_HEIGHT: f32 = 8.5;
pub const NET_BOTTOM_RADIUS: f32 = 0.4;
pub const NET_LENGTH: f32 = 1.0;
pub const NET_SEGMENTS: usize = 12;
pub const NET_RINGS: usize = 4;
const RING_SEGMENTS: u32 = 32;

const GUIDE_WIDTH: f32 = 2.2;
const GUIDE_HEIGHT: f32 = 1.4;
const GUIDE_BOTTOM: f32 = 9.1;

const STEEL: u32 = 0x666666;

/// Where a hoop stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasketSide {
    pub x: f32,
    /// +1 faces +X, -1 faces -X.
    pub direction: f32,
}

impl BasketSide {
    pub const LEFT: Self = Self {
        x: -14.0,
        direction: 1.0,
    };
    pub const RIGHT: Self = Self {
        x: 14.0,
        direction: -1.0,
    };

    pub fn name(&self) -> &'static str {
        if self.x < 0.0 {
            "basket_left"
        } else {
            "basket_right"
        }
    }
}

pub fn pole_offset(direction: f32) -> Vector3<f32> {
    Vector3::new(-direction * 1.5, 6.0, 0.0)
}

pub fn arm_offset(direction: f32) -> Vector3<f32> {
    Vector3::new(-direction * 0.75, 10.0, 0.0)
}

pub fn rim_center(direction: f32) -> Point3<f32> {
    Point3::new(direction * 0.85, RIM_HEIGHT, 0.0)
}

/// Closed outline on the court-facing side of the backboard.
pub fn guide_rectangle(direction: f32) -> [Point3<f32>; 5] {
    let face_x = direction * 0.11;
    let top = GUIDE_BOTTOM + GUIDE_HEIGHT;
    let (left, right) = (-GUIDE_WIDTH / 2.0, GUIDE_WIDTH / 2.0);
    [
        Point3::new(face_x, GUIDE_BOTTOM, left),
        Point3::new(face_x, top, left),
        Point3::new(face_x, top, right),
        Point3::new(face_x, GUIDE_BOTTOM, right),
        Point3::new(face_x, GUIDE_BOTTOM, left),
    ]
}

/// The net's vertical strands: rim circle down to the narrower bottom circle.
pub fn net_segments(offset_x: f32, y: f32, z: f32) -> Vec<[Point3<f32>; 2]> {
    (0..NET_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / NET_SEGMENTS as f32 * 2.0 * PI;
            let (sin, cos) = angle.sin_cos();
            [
                Point3::new(offset_x + cos * RIM_RADIUS, y, z + sin * RIM_RADIUS),
                Point3::new(
                    offset_x + cos * NET_BOTTOM_RADIUS,
                    y - NET_LENGTH,
                    z + sin * NET_BOTTOM_RADIUS,
                ),
            ]
        })
        .collect()
}

/// Height ratio of ring `index` (1..=4) between rim and net bottom.
pub fn ring_ratio(index: usize) -> f32 {
    index as f32 / NET_RINGS as f32
}

/// Ring `index` (1..=4) of the net; ring 4 closes the bottom.
pub fn net_ring(index: usize, offset_x: f32, y: f32, z: f32) -> Vec<Point3<f32>> {
    let ratio = ring_ratio(index);
    let radius = RIM_RADIUS + (NET_BOTTOM_RADIUS - RIM_RADIUS) * ratio;
    arc_points(
        Point3::new(offset_x, y - ratio * NET_LENGTH, z),
        radius,
        0.0,
        2.0 * PI,
        RING_SEGMENTS,
    )
}

pub fn net_rings(offset_x: f32, y: f32, z: f32) -> Vec<Vec<Point3<f32>>> {
    (1..=NET_RINGS)
        .map(|index| net_ring(index, offset_x, y, z))
        .collect()
}

fn net(direction: f32) -> Vec<Node> {
    let material = Material::line(0xeeeeee).with_opacity(0.8);
    let rim = rim_center(direction);

    let strands = net_segments(rim.x, rim.y, rim.z)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            Node::mesh(
                &format!("net_segment_{i}"),
                line_strip(&segment),
                material.clone(),
            )
        });
    let rings = net_rings(rim.x, rim.y, rim.z)
        .into_iter()
        .enumerate()
        .map(|(i, ring)| {
            Node::mesh(
                &format!("net_ring_{}", i + 1),
                line_strip(&ring),
                material.clone(),
            )
        });
    strands.chain(rings).collect()
}

pub fn build(side: BasketSide) -> Node {
    let direction = side.direction;
    let mut basket = Node::group(side.name());

    let pole = pole_offset(direction);
    basket.add_child(
        Node::mesh(
            "pole",
            geometry::cylinder(0.3, 0.3, 12.0, 32),
            Material::phong(STEEL),
        )
        .with_position(pole.x, pole.y, pole.z),
    );

    let arm = arm_offset(direction);
    basket.add_child(
        Node::mesh(
            "arm",
            geometry::cuboid(1.5, 0.3, 0.3),
            Material::phong(STEEL),
        )
        .with_position(arm.x, arm.y, arm.z),
    );

    basket.add_child(
        Node::mesh(
            "backboard",
            geometry::cuboid(0.2, 3.5, 6.0),
            Material::phong(0xffffff).with_opacity(0.8),
        )
        .with_position(0.0, 10.0, 0.0),
    );

    basket.add_child(Node::mesh(
        "guide_rectangle",
        line_strip(&guide_rectangle(direction)),
        Material::line(0xffffff),
    ));

    let rim = rim_center(direction);
    basket.add_child(
        Node::mesh(
            "rim",
            geometry::torus(RIM_RADIUS, 0.05, 8, 16),
            Material::phong(0xff6600),
        )
        .with_rotation_x(Rad(FRAC_PI_2))
        .with_position(rim.x, rim.y, rim.z),
    );

    for strand in net(direction) {
        basket.add_child(strand);
    }

    basket.with_scale(SCALE).with_position(side.x, 0.0, 0.0)
}
