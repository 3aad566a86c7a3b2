use cgmath::Point3;

use crate::{data_structures::model::rgb, pipelines::light::LightUniform};

/// Ambient fill plus one directional sun.
#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    /// Share of the sun colour applied everywhere.
    pub ambient: f32,
    /// The sun shines from here towards the origin.
    pub sun_position: Point3<f32>,
    pub sun_colour: u32,
    pub intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.4,
            sun_position: Point3::new(10.0, 20.0, 15.0),
            sun_colour: 0xffffff,
            intensity: 0.9,
        }
    }
}

impl Lighting {
    pub fn to_uniform(&self) -> LightUniform {
        LightUniform {
            position: self.sun_position.into(),
            intensity: self.intensity,
            color: rgb(self.sun_colour),
            ambient: self.ambient,
        }
    }
}
