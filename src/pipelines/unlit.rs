use crate::{
    data_structures::{
        instance::InstanceRaw,
        model::{ModelVertex, Vertex},
        texture::Texture,
    },
    pipelines::basic::{PipelineOptions, mk_render_pipeline},
};

/**
 * Flat-colour pipeline used for `Basic` materials (skybox, shadow decal) and,
 * with a line-list topology, for every line mesh (seams, net, court lines).
 *
 * Faces are not culled: the skybox is seen from the inside and decals from
 * either side.
 */
pub fn mk_unlit_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    transparent: bool,
) -> wgpu::RenderPipeline {
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Unlit Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("unlit.wgsl").into()),
    };
    let options = if transparent {
        PipelineOptions {
            topology,
            cull_mode: None,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write_enabled: false,
        }
    } else {
        PipelineOptions {
            topology,
            cull_mode: None,
            ..Default::default()
        }
    };
    mk_render_pipeline(
        device,
        layout,
        config.format,
        Some(Texture::DEPTH_FORMAT),
        &[ModelVertex::desc(), InstanceRaw::desc()],
        shader,
        options,
    )
}
