use crate::{
    data_structures::{
        instance::InstanceRaw,
        model::{ModelVertex, Vertex},
        texture::Texture,
    },
    pipelines::basic::{PipelineOptions, mk_render_pipeline},
};

/**
 * Lit pipeline for materials with an opacity below `1.0` (the backboard).
 *
 * Transparent meshes are drawn after all opaque ones, alpha blended and
 * without writing depth so that what lies behind them stays visible.
 */
pub fn mk_transparent_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    layout: &wgpu::PipelineLayout,
) -> wgpu::RenderPipeline {
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Phong Shader (transparent)"),
        source: wgpu::ShaderSource::Wgsl(include_str!("phong.wgsl").into()),
    };
    mk_render_pipeline(
        device,
        layout,
        config.format,
        Some(Texture::DEPTH_FORMAT),
        &[ModelVertex::desc(), InstanceRaw::desc()],
        shader,
        PipelineOptions {
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write_enabled: false,
            ..Default::default()
        },
    )
}
