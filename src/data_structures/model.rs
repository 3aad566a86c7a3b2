//! Vertex layout, materials and uploaded meshes.
//!
//! A [`Material`] is the CPU description of how a surface is shaded; once a
//! mesh is uploaded it becomes a [`Mesh`] holding its vertex/index buffers and
//! the bind group of its [`MaterialUniform`].

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::data_structures::geometry::{Geometry, Topology};

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex for ModelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Which pipeline family a material is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Lit with ambient, diffuse and specular terms.
    Phong,
    /// Flat colour, unaffected by lights.
    Basic,
    /// Flat colour line segments.
    Line,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: [f32; 3],
    pub opacity: f32,
    pub shading: Shading,
    /// Linear RGB.
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Material {
    fn with_shading(hex: u32, shading: Shading) -> Self {
        Self {
            color: rgb(hex),
            opacity: 1.0,
            shading,
            specular: rgb(0x111111),
            shininess: 30.0,
        }
    }

    pub fn phong(hex: u32) -> Self {
        Self::with_shading(hex, Shading::Phong)
    }

    pub fn basic(hex: u32) -> Self {
        Self::with_shading(hex, Shading::Basic)
    }

    pub fn line(hex: u32) -> Self {
        Self::with_shading(hex, Shading::Line)
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_specular(mut self, hex: u32, shininess: f32) -> Self {
        self.specular = rgb(hex);
        self.shininess = shininess;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            color: [self.color[0], self.color[1], self.color[2], self.opacity],
            specular: [
                self.specular[0],
                self.specular[1],
                self.specular[2],
                self.shininess,
            ],
        }
    }
}

/// Converts a `0xRRGGBB` sRGB colour into linear RGB.
pub fn rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// rgb + opacity
    color: [f32; 4],
    /// rgb + shininess
    specular: [f32; 4],
}

pub fn material_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("material_bind_group_layout"),
    })
}

/// An uploaded, immutable mesh together with its material.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
    pub material: wgpu::BindGroup,
    pub shading: Shading,
    pub transparent: bool,
}

impl Mesh {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        name: &str,
        geometry: &Geometry,
        material: &Material,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Material Buffer", name)),
            contents: bytemuck::cast_slice(&[material.to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            }],
            label: Some(&format!("{:?} Material Bind Group", name)),
        });
        // a line material on triangle geometry (or vice versa) would pick the wrong pipeline
        let shading = match (geometry.topology, material.shading) {
            (Topology::Lines, _) => Shading::Line,
            (Topology::Triangles, Shading::Line) => Shading::Basic,
            (Topology::Triangles, shading) => shading,
        };
        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: geometry.indices.len() as u32,
            material: material_bind_group,
            shading,
            transparent: material.is_transparent(),
        }
    }
}

pub trait DrawModel {
    fn draw_mesh_instanced(
        &mut self,
        mesh: &Mesh,
        instances: Range<u32>,
        camera_bind_group: &wgpu::BindGroup,
        light_bind_group: &wgpu::BindGroup,
    );
}

impl DrawModel for wgpu::RenderPass<'_> {
    fn draw_mesh_instanced(
        &mut self,
        mesh: &Mesh,
        instances: Range<u32>,
        camera_bind_group: &wgpu::BindGroup,
        light_bind_group: &wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, camera_bind_group, &[]);
        self.set_bind_group(1, light_bind_group, &[]);
        self.set_bind_group(2, &mesh.material, &[]);
        self.draw_indexed(0..mesh.num_elements, 0, instances);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_are_linearised() {
        assert_eq!(rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);
        let [r, g, b] = rgb(0xff6600);
        assert_eq!(r, 1.0);
        assert!(g > 0.12 && g < 0.14);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn opacity_below_one_is_transparent() {
        assert!(Material::basic(0x000000).with_opacity(0.2).is_transparent());
        assert!(!Material::phong(0x666666).is_transparent());
    }
}
