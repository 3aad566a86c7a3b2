//! Node transforms and their GPU representation.
//!
//! Every scene node carries a local [`Instance`] (position, rotation, scale).
//! World transforms are obtained by composing parent and child instances, and
//! the result is packed into an [`InstanceRaw`] that the vertex shaders read
//! from the per-node instance buffer.

use std::ops::Mul;

use cgmath::{One, Rotation3};

use crate::data_structures::model;

/// Transformation of a scene node: position, rotation (as quaternion), and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        cgmath::Vector3::new(x, y, z).into()
    }

    pub fn rotated_x(mut self, angle: cgmath::Rad<f32>) -> Self {
        self.rotation = self.rotation * cgmath::Quaternion::from_angle_x(angle);
        self
    }

    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale = cgmath::Vector3::new(factor, factor, factor);
        self
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Maps a point from this node's local space into its parent's space.
    pub fn transform_point(&self, point: cgmath::Point3<f32>) -> cgmath::Point3<f32> {
        use cgmath::Transform;
        self.to_matrix().transform_point(point)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.to_matrix().into(),
            normal: cgmath::Matrix3::from(self.rotation).into(),
        }
    }
}

impl<'a, 'b> Mul<&'b Instance> for &'a Instance {
    type Output = Instance;

    /// `parent * child`: the child's transform expressed in the parent's space.
    fn mul(self, rhs: &'b Instance) -> Self::Output {
        let new_rotation = self.rotation * rhs.rotation;

        let new_scale = cgmath::Vector3::new(
            self.scale.x * rhs.scale.x,
            self.scale.y * rhs.scale.y,
            self.scale.z * rhs.scale.z,
        );
        let scaled_rhs_pos = cgmath::Vector3::new(
            self.scale.x * rhs.position.x,
            self.scale.y * rhs.position.y,
            self.scale.z * rhs.position.z,
        );
        let new_position = self.position + (self.rotation * scaled_rhs_pos);

        Instance {
            position: new_position,
            rotation: new_rotation,
            scale: new_scale,
        }
    }
}

impl Mul<Instance> for Instance {
    type Output = Self;

    fn mul(self, rhs: Instance) -> Self::Output {
        &self * &rhs
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
}

/**
 * As we store vertex data directly in the GPU memory we need to tell what the bytes refer to:
 *
 * offset: zero as we want to use the full space.
 * stride: length of a vertex
 *
 * Stride layout here: position + rotation + scale as 4x4 matrix (hence the four 4d vectors)
 * followed by the 3x3 normal matrix.
 */
impl model::Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // We need to switch from using a step mode of Vertex to Instance
            // This means that our shaders will only change to use the next
            // instance when the shader starts processing a new instance
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // A mat4 takes up 4 vertex slots as it is technically 4 vec4s.
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    // corresponds to the @location in the shader file.
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Normal matrix stored as 3x3
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Point3};

    #[test]
    fn parent_scale_and_translation_apply_to_child_position() {
        let parent = Instance::at(14.0, 0.0, 0.0).scaled(0.5);
        let child = Instance::at(-1.5, 6.0, 0.0);
        let world = &parent * &child;
        assert!((world.position - cgmath::Vector3::new(13.25, 3.0, 0.0)).magnitude() < 1e-6);
        assert_eq!(world.scale, cgmath::Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn quarter_turn_about_x_maps_z_to_minus_y() {
        let rim = Instance::new().rotated_x(cgmath::Rad(std::f32::consts::FRAC_PI_2));
        let p = rim.transform_point(Point3::new(0.0, 0.0, 1.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6 || (p.y + 1.0).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }
}
