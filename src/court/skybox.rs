use crate::data_structures::{geometry, model::Material, scene_graph::Node};

pub const SKY_COLOUR: u32 = 0x87ceeb;
pub const SKY_RADIUS: f32 = 500.0;

/// A sky sphere around the whole scene, seen from the inside.
///
/// Unlit pipelines do not cull, so the sphere's inner faces are drawn as is.
pub fn build() -> Node {
    Node::mesh(
        "skybox",
        geometry::sphere(SKY_RADIUS, 32, 16),
        Material::basic(SKY_COLOUR),
    )
}

/// Background colour matching the sky, for anything beyond the far plane.
pub fn clear_colour() -> wgpu::Color {
    let [r, g, b] = crate::data_structures::model::rgb(SKY_COLOUR);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}
