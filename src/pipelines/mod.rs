//! Render pipelines.
//!
//! Every mesh pipeline shares one layout (camera, light, material bind groups;
//! mesh vertices plus per-node instance data) and differs only in shader,
//! topology, blending and depth writes:
//!
//! - `basic`: the shared pipeline builder and the opaque Phong pipeline
//! - `transparent`: alpha-blended Phong for translucent materials
//! - `unlit`: flat colour for `Basic` materials and all line meshes
//! - `light`: the scene light uniform and its bind group

pub mod basic;
pub mod light;
pub mod transparent;
pub mod unlit;

use crate::pipelines::{
    basic::{mk_mesh_pipeline_layout, mk_phong_pipeline},
    transparent::mk_transparent_pipeline,
    unlit::mk_unlit_pipeline,
};

#[derive(Debug)]
pub struct Pipelines {
    pub phong: wgpu::RenderPipeline,
    pub phong_transparent: wgpu::RenderPipeline,
    pub unlit: wgpu::RenderPipeline,
    pub unlit_transparent: wgpu::RenderPipeline,
    pub lines: wgpu::RenderPipeline,
    pub lines_transparent: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        material_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let layout = mk_mesh_pipeline_layout(
            device,
            camera_bind_group_layout,
            light_bind_group_layout,
            material_bind_group_layout,
        );
        let triangles = wgpu::PrimitiveTopology::TriangleList;
        let lines = wgpu::PrimitiveTopology::LineList;
        Self {
            phong: mk_phong_pipeline(device, config, &layout),
            phong_transparent: mk_transparent_pipeline(device, config, &layout),
            unlit: mk_unlit_pipeline(device, config, &layout, triangles, false),
            unlit_transparent: mk_unlit_pipeline(device, config, &layout, triangles, true),
            lines: mk_unlit_pipeline(device, config, &layout, lines, false),
            lines_transparent: mk_unlit_pipeline(device, config, &layout, lines, true),
        }
    }
}
