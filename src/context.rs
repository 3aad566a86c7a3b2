use std::sync::Arc;

use anyhow::Context as _;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::{
    camera::{CameraResources, CameraUniform, OrbitCamera, OrbitController, Projection},
    data_structures::{model::material_bind_group_layout, texture},
    pipelines::{
        Pipelines,
        light::{LightResources, LightUniform},
    },
};

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub material_bind_group_layout: wgpu::BindGroupLayout,
    pub pipelines: Pipelines,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Cannot create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No graphics adapter is compatible with the window surface")?;
        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features, so if
                // we're building for the web we'll have to disable some.
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                ..Default::default()
            })
            .await
            .context("Cannot acquire a device from the graphics adapter")?;

        log::info!("Surface");
        let surface_caps = surface.get_capabilities(&adapter);
        // Material colours are linear, so the surface has to do the sRGB encoding.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface reports no supported formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Replaced by the flow's configuration in `on_init`.
        let camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
        let projection = Projection::new(
            config.width,
            config.height,
            cgmath::Deg(75.0),
            0.1,
            1000.0,
        );
        let camera_controller = OrbitController::new(0.005, 0.1);

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(&camera, &projection);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        // Replaced by the flow's lighting in `on_init`.
        let light = LightResources::new(
            LightUniform {
                position: [8.0, 80.0, 50.0],
                intensity: 1.0,
                color: [1.0, 1.0, 1.0],
                ambient: 0.3,
            },
            &device,
        );

        let material_bind_group_layout = material_bind_group_layout(&device);
        let pipelines = Pipelines::new(
            &device,
            &config,
            &camera_bind_group_layout,
            &light.bind_group_layout,
            &material_bind_group_layout,
        );

        let camera = CameraResources {
            camera,
            controller: camera_controller,
            uniform: camera_uniform,
            buffer: camera_buffer,
            bind_group: camera_bind_group,
            bind_group_layout: camera_bind_group_layout,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            material_bind_group_layout,
            pipelines,
            clear_colour: wgpu::Color::BLACK,
            window,
            depth_texture,
        })
    }

    /// Recomputes the view-projection matrix and uploads it.
    pub fn write_camera(&mut self) {
        self.camera
            .uniform
            .update_view_proj(&self.camera.camera, &self.projection);
        self.queue.write_buffer(
            &self.camera.buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform]),
        );
    }
}

/// Applies a new window size to the surface configuration and the projection.
///
/// Returns `false` (and changes nothing) for a zero-sized window, which happens
/// while minimised and cannot back a surface.
pub fn resize_surface(
    config: &mut wgpu::SurfaceConfiguration,
    projection: &mut Projection,
    width: u32,
    height: u32,
) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    config.width = width;
    config.height = height;
    projection.resize(width, height);
    true
}

/// What flow constructors get to create GPU resources before the first frame.
///
/// Cloning only clones the handles: `Device` and `Queue` are reference counted.
#[derive(Clone, Debug)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub material_bind_group_layout: wgpu::BindGroupLayout,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            format: ctx.config.format,
            material_bind_group_layout: ctx.material_bind_group_layout.clone(),
        }
    }
}
