//! The basketball: a lit sphere, twelve seam lines and a flat shadow decal.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use cgmath::{Point3, Rad};

use crate::data_structures::{
    geometry::{self, line_strip},
    model::Material,
    scene_graph::Node,
};

pub const BALL_RADIUS: f32 = 0.3;
pub const BALL_CENTER: Point3<f32> = Point3::new(0.0, 0.4, 0.0);
/// Slightly above the surface so the seams are not swallowed by the sphere.
pub const SEAM_RADIUS: f32 = 0.302;
pub const SEAM_PLANES: usize = 6;
/// Samples per seam arc, both poles included.
pub const SEAM_POINTS: usize = 33;

const BALL_COLOUR: u32 = 0xd2691e;
const SEAM_COLOUR: u32 = 0x1a1a1a;
const SHADOW_RADIUS: f32 = 0.4;
const SHADOW_HEIGHT: f32 = 0.11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    Top,
    Bottom,
}

impl Hemisphere {
    fn sign(self) -> f32 {
        match self {
            Hemisphere::Top => 1.0,
            Hemisphere::Bottom => -1.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Hemisphere::Top => "top",
            Hemisphere::Bottom => "bottom",
        }
    }
}

/// Half a great circle in the vertical plane turned `rotation_y` about the Y axis.
///
/// The arc runs pole to pole. `Top` starts at the north pole, `Bottom` mirrors
/// the height and starts at the south pole.
pub fn seam_arc(
    rotation_y: f32,
    hemisphere: Hemisphere,
    center: Point3<f32>,
    radius: f32,
) -> Vec<Point3<f32>> {
    let steps = (SEAM_POINTS - 1) as f32;
    (0..SEAM_POINTS)
        .map(|i| {
            let angle = i as f32 / steps * PI;
            let local_y = hemisphere.sign() * angle.cos() * radius;
            let local_radius = angle.sin() * radius;
            Point3::new(
                center.x + rotation_y.cos() * local_radius,
                center.y + local_y,
                center.z + rotation_y.sin() * local_radius,
            )
        })
        .collect()
}

/// Points of seam `seam_index` (0..6) on the ball.
pub fn seam_points(seam_index: usize, hemisphere: Hemisphere) -> Vec<Point3<f32>> {
    seam_arc(
        seam_index as f32 * FRAC_PI_3,
        hemisphere,
        BALL_CENTER,
        SEAM_RADIUS,
    )
}

pub fn build() -> Node {
    let mut ball = Node::group("ball");

    ball.add_child(
        Node::mesh(
            "ball_sphere",
            geometry::sphere(BALL_RADIUS, 32, 32),
            Material::phong(BALL_COLOUR).with_specular(0x442211, 20.0),
        )
        .with_position(BALL_CENTER.x, BALL_CENTER.y, BALL_CENTER.z),
    );

    for seam_index in 0..SEAM_PLANES {
        for hemisphere in [Hemisphere::Top, Hemisphere::Bottom] {
            ball.add_child(Node::mesh(
                &format!("seam_{seam_index}_{}", hemisphere.label()),
                line_strip(&seam_points(seam_index, hemisphere)),
                Material::line(SEAM_COLOUR),
            ));
        }
    }

    ball.add_child(
        Node::mesh(
            "ball_shadow",
            geometry::circle(SHADOW_RADIUS, 32),
            Material::basic(0x000000).with_opacity(0.2),
        )
        .with_rotation_x(Rad(-FRAC_PI_2))
        .with_position(0.0, SHADOW_HEIGHT, 0.0),
    );

    ball
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::MetricSpace;

    #[test]
    fn arcs_run_pole_to_pole_on_the_seam_radius() {
        let top = seam_points(0, Hemisphere::Top);
        assert!(top[0].distance(Point3::new(0.0, 0.4 + SEAM_RADIUS, 0.0)) < 1e-6);
        assert!(top[32].distance(Point3::new(0.0, 0.4 - SEAM_RADIUS, 0.0)) < 1e-6);
        for p in &top {
            assert!((p.distance(BALL_CENTER) - SEAM_RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn bottom_arc_mirrors_the_top_one() {
        let top = seam_points(2, Hemisphere::Top);
        let bottom = seam_points(2, Hemisphere::Bottom);
        for (t, b) in top.iter().zip(&bottom) {
            assert!((t.x - b.x).abs() < 1e-6);
            assert!((t.z - b.z).abs() < 1e-6);
            assert!(((t.y - BALL_CENTER.y) + (b.y - BALL_CENTER.y)).abs() < 1e-6);
        }
    }
}
