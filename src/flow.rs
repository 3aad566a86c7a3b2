//! Flow control and application event loop.
//!
//! A "flow" is a self-contained part of the application: it reacts to window
//! input, updates its state every frame and tells the engine what to draw. The
//! engine owns the window, the GPU context and the loop, and composes all
//! flows' renders into one frame.
//!
//! # User-facing types
//!
//! - [`GraphicsFlow<S>`] is the trait for scenes that handle events and rendering
//! - [`Out`] is how a flow hands context changes back to the engine
//!
//! # Lifecycle Flow
//!
//! The event loop follows this pattern each frame:
//! 1. Window events go to the orbit controller and to every flow's `on_window_events`
//! 2. `Resized` applies [`resize_surface`] and reconfigures the surface
//! 3. On `RedrawRequested` the flows' `on_update` run, then the orbit controller
//!    steps the camera and the camera uniform is uploaded
//! 4. Every flow's `on_render()` is sorted into pipeline batches and drawn
//! 5. The frame is presented and the next redraw is requested right away

use std::{fmt::Debug, iter, pin::Pin, sync::Arc};

use anyhow::Context as _;
use instant::{Duration, Instant};

#[cfg(feature = "integration-tests")]
use tokio::runtime::Runtime;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::{Context, InitContext, resize_surface},
    data_structures::{model::DrawModel, texture::Texture},
    render::{Batches, Instanced},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

const WINDOW_TITLE: &str = "Basketball Court";

/// Output of every lifecycle hook.
///
/// `Out::Configure` modifies the [`Context`], for instance the camera placement,
/// the clear colour or whether the orbit controller accepts input. It is run by
/// the engine right after the hook returns.
///
/// `Empty` is the default output when nothing needs to change.
pub enum Out {
    Configure(Box<dyn FnOnce(&mut Context)>),
    Empty,
}

impl Default for Out {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(feature = "integration-tests")]
pub enum ImageTestResult {
    Passed,
    Waiting,
    Failed,
}

/// Trait for implementing a renderable scene.
///
/// # Lifecycle
///
/// 1. `on_init()` is called once after the flow was constructed; configure the context here
/// 2. `on_window_events()` is called for each winit window event
/// 3. `on_update()` is called every frame before the camera is stepped
/// 4. `on_render()` is called each frame and specifies how to render `self`
pub trait GraphicsFlow<S> {
    /// Initialize the flow and configure the context.
    fn on_init(&mut self, ctx: &mut Context, state: &mut S) -> Out;

    /// Update state every frame with the elapsed time `dt`.
    fn on_update(&mut self, ctx: &Context, state: &mut S, dt: Duration) -> Out;

    /// Handle window events (keyboard, mouse, resizing, etc.).
    fn on_window_events(&mut self, ctx: &Context, state: &mut S, event: &WindowEvent) -> Out;

    /// Return renderable objects for this flow.
    ///
    /// The engine batches all flows' renders per pipeline.
    fn on_render<'pass>(&self) -> crate::render::Render<'_, 'pass>;

    /// Inspect the frame that was just drawn offscreen.
    ///
    /// The test run ends once every flow returned `Passed`.
    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut S,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>;
}

// Dummy impl to make wasm work
impl<State> Debug for dyn GraphicsFlow<State> + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GraphicsFlow")
    }
}

/// Type alias for a flow constructor (factory function).
///
/// A flow constructor takes an `InitContext` and asynchronously returns a
/// boxed `GraphicsFlow`, which lets flows upload their GPU resources up front.
pub type FlowConstructor<S> =
    Box<dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = Box<dyn GraphicsFlow<S>>>>>>;

/// Application state bundle: GPU context, app state, and surface status.
#[derive(Debug)]
pub struct AppState<State: 'static> {
    pub(crate) ctx: Context,
    state: State,
    is_surface_configured: bool,
}

impl<State: Default> AppState<State> {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = Context::new(window)
            .await
            .context("App initialization failed. Cannot create the main context")?;
        Ok(Self {
            ctx,
            state: State::default(),
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if !resize_surface(&mut self.ctx.config, &mut self.ctx.projection, width, height) {
            return;
        }
        self.is_surface_configured = true;
        self.ctx
            .surface
            .configure(&self.ctx.device, &self.ctx.config);
        self.ctx.depth_texture = Texture::create_depth_texture(
            &self.ctx.device,
            [self.ctx.config.width, self.ctx.config.height],
            "depth_texture",
        );
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_3d_extent(&self) -> wgpu::Extent3d {
        // Rows copied to a buffer must be 256 byte aligned: 64 RGBA pixels.
        wgpu::Extent3d {
            width: self.ctx.config.width.div_ceil(64) * 64,
            height: self.ctx.config.height,
            depth_or_array_layers: 1,
        }
    }

    fn render(
        &mut self,
        graphics_flows: &mut [Box<dyn GraphicsFlow<State>>],
        #[cfg(feature = "integration-tests")] async_runtime: &Runtime,
        #[cfg(feature = "integration-tests")] event_loop: &winit::event_loop::EventLoopProxy<
            FlowEvent<State>,
        >,
    ) -> Result<(), wgpu::SurfaceError> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;

        #[cfg(not(feature = "integration-tests"))]
        let (view, depth) = (
            output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default()),
            self.ctx.depth_texture.clone(),
        );

        #[cfg(feature = "integration-tests")]
        let (target, view, depth) = {
            let extent = self.get_test_3d_extent();
            let target =
                Texture::create_readback_target(&self.ctx.device, extent, self.ctx.config.format);
            let depth = Texture::create_depth_texture(
                &self.ctx.device,
                [extent.width, extent.height],
                "readback_depth_texture",
            );
            let view = target.view.clone();
            (target, view, depth)
        };

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            let mut batches = Batches::default();
            graphics_flows
                .iter()
                .for_each(|flow| flow.on_render().set_pipelines(&mut batches));

            let ctx = &self.ctx;
            let pipelines = &ctx.pipelines;
            // opaque first so blended meshes are tested against the full depth buffer
            for (pipeline, batch) in [
                (&pipelines.phong, &batches.phong),
                (&pipelines.unlit, &batches.unlit),
                (&pipelines.lines, &batches.lines),
                (&pipelines.phong_transparent, &batches.phong_transparent),
                (&pipelines.unlit_transparent, &batches.unlit_transparent),
                (&pipelines.lines_transparent, &batches.lines_transparent),
            ] {
                draw_batch(&mut render_pass, ctx, pipeline, batch);
            }

            for custom in batches.custom {
                custom(ctx, &mut render_pass);
            }
        }

        #[cfg(feature = "integration-tests")]
        let output_buffer = {
            let u32_size = std::mem::size_of::<u32>() as u32;
            let extent = self.get_test_3d_extent();
            let output_buffer_size =
                (u32_size * extent.width * extent.height) as wgpu::BufferAddress;
            let output_buffer = self.ctx.device.create_buffer(&wgpu::BufferDescriptor {
                size: output_buffer_size,
                usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
                label: Some("Readback buffer"),
                mapped_at_creation: false,
            });
            encoder.copy_texture_to_buffer(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &target.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                },
                wgpu::TexelCopyBufferInfo {
                    buffer: &output_buffer,
                    layout: wgpu::TexelCopyBufferLayout {
                        offset: 0,
                        bytes_per_row: Some(u32_size * extent.width),
                        rows_per_image: Some(extent.height),
                    },
                },
                extent,
            );
            output_buffer
        };

        self.ctx.queue.submit(iter::once(encoder.finish()));

        #[cfg(feature = "integration-tests")]
        {
            use std::convert::identity;

            let extent = self.get_test_3d_extent();
            let fut_img = async {
                let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
                let buffer_slice = output_buffer.slice(..);
                buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
                    tx.send(result).unwrap();
                });
                self.ctx
                    .device
                    .poll(wgpu::PollType::Wait {
                        submission_index: None,
                        timeout: Some(Duration::from_secs(3)),
                    })
                    .unwrap();
                rx.receive().await.unwrap().unwrap();
                let data = buffer_slice.get_mapped_range();
                image::ImageBuffer::<image::Rgba<u8>, _>::from_raw(extent.width, extent.height, data)
                    .unwrap()
            };
            let mut img: image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView> =
                async_runtime.block_on(fut_img);
            let state = &mut self.state;
            let all_passed = graphics_flows
                .iter_mut()
                .map(|flow| flow.render_to_texture(&self.ctx, state, &mut img))
                .map(|res| match res {
                    Err(e) => panic!("{}", e),
                    Ok(ImageTestResult::Passed) => true,
                    Ok(ImageTestResult::Failed) => panic!("Assertion failed"),
                    Ok(ImageTestResult::Waiting) => false,
                })
                .all(identity);
            if all_passed {
                event_loop
                    .send_event(FlowEvent::Exit)
                    .expect("All assertions passed but the winit event-loop could not safely exit")
            }
        }

        output.present();
        Ok(())
    }
}

fn draw_batch(
    render_pass: &mut wgpu::RenderPass<'_>,
    ctx: &Context,
    pipeline: &wgpu::RenderPipeline,
    batch: &[Instanced<'_>],
) {
    if batch.is_empty() {
        return;
    }
    render_pass.set_pipeline(pipeline);
    for instanced in batch {
        if instanced.amount == 0 || instanced.instance.size() == 0 {
            log::warn!("{:?} was submitted with zero instances", instanced.mesh.name);
            continue;
        }
        render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
        render_pass.draw_mesh_instanced(
            instanced.mesh,
            0..instanced.amount as u32,
            &ctx.camera.bind_group,
            &ctx.light.bind_group,
        );
    }
}

pub struct App<State: 'static> {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    proxy: winit::event_loop::EventLoopProxy<FlowEvent<State>>,
    state: Option<AppState<State>>,
    // This will hold the fully initialized flows once they are ready.
    graphics_flows: Vec<Box<dyn GraphicsFlow<State>>>,
    // We use Option to `take()` the constructors after use.
    constructors: Option<Vec<FlowConstructor<State>>>,
    last_time: Instant,
}

impl<State: 'static> App<State> {
    fn new(
        event_loop: &EventLoop<FlowEvent<State>>,
        constructors: Vec<FlowConstructor<State>>,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime =
            tokio::runtime::Runtime::new().context("Cannot start the async runtime")?;
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            graphics_flows: Vec::new(),
            constructors: Some(constructors),
            last_time: Instant::now(),
        })
    }
}

pub(crate) enum FlowEvent<State: 'static> {
    #[allow(dead_code)]
    Initialized {
        state: AppState<State>,
        flows: Vec<Box<dyn GraphicsFlow<State>>>,
    },
    #[allow(dead_code)]
    Exit,
}

impl<State> Debug for FlowEvent<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { state: _, flows } => {
                f.debug_struct("Initialized").field("flows", flows).finish()
            }
            Self::Exit => f.write_str("Exit"),
        }
    }
}

fn init_flows<State>(
    app_state: &mut AppState<State>,
    flows: &mut [Box<dyn GraphicsFlow<State>>],
) {
    flows.iter_mut().for_each(|flow| {
        let out = flow.on_init(&mut app_state.ctx, &mut app_state.state);
        handle_flow_output(&mut app_state.ctx, out);
    });
}

impl<State: 'static + Default> ApplicationHandler<FlowEvent<State>> for App<State> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(constructors) = self.constructors.take() else {
            // already initialized; winit resumes again after a suspend on some platforms
            return;
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes().with_title(WINDOW_TITLE);

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Cannot create a window: {e}");
                event_loop.exit();
                return;
            }
        };

        let init_future = async move {
            let app_state = AppState::new(window).await?;

            let flow_futures: Vec<_> = constructors
                .into_iter()
                // The clone in into() leverages the internal Arcs of Device and Queue and thus only clones the ref
                .map(|constructor| constructor((&app_state.ctx).into()))
                .collect();
            let flows: Vec<_> = futures::future::join_all(flow_futures).await;
            anyhow::Ok((app_state, flows))
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok((mut app_state, mut flows)) => {
                    let size = app_state.ctx.window.inner_size();
                    app_state.resize(size.width, size.height);
                    init_flows(&mut app_state, &mut flows);
                    self.graphics_flows = flows;
                    app_state.ctx.window.request_redraw();
                    self.state = Some(app_state);
                }
                Err(e) => {
                    log::error!("{e:#}");
                    event_loop.exit();
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match init_future.await {
                    Ok((app_state, flows)) => assert!(
                        proxy
                            .send_event(FlowEvent::Initialized {
                                state: app_state,
                                flows,
                            })
                            .is_ok()
                    ),
                    Err(e) => log::error!("{e:#}"),
                }
            });
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: FlowEvent<State>) {
        match event {
            FlowEvent::Initialized { state, flows } => {
                // This is the message from our wasm `spawn_local`
                self.graphics_flows = flows;
                let app_state = self.state.insert(state);

                // Important: Trigger a resize and redraw now that we are initialized
                let size = app_state.ctx.window.inner_size();
                app_state.resize(size.width, size.height);
                init_flows(app_state, &mut self.graphics_flows);
                app_state.ctx.window.request_redraw();
            }
            FlowEvent::Exit => {
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.ctx.camera.controller.handle_window_events(&event);

        self.graphics_flows.iter_mut().for_each(|f| {
            let out = f.on_window_events(&state.ctx, &mut state.state, &event);
            handle_flow_output(&mut state.ctx, out);
        });

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                self.graphics_flows.iter_mut().for_each(|f| {
                    let out = f.on_update(&state.ctx, &mut state.state, dt);
                    handle_flow_output(&mut state.ctx, out);
                });

                // Update the camera
                state
                    .ctx
                    .camera
                    .controller
                    .update(&mut state.ctx.camera.camera, dt);
                state.ctx.write_camera();

                match state.render(
                    &mut self.graphics_flows,
                    #[cfg(feature = "integration-tests")]
                    &self.async_runtime,
                    #[cfg(feature = "integration-tests")]
                    &self.proxy,
                ) {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }

                // invoke main render loop
                state.ctx.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn handle_flow_output(ctx: &mut Context, out: Out) {
    match out {
        Out::Configure(f) => f(ctx),
        Out::Empty => (),
    }
}

/// Opens the window and drives the flows until the window is closed.
pub fn run<State: 'static + Default>(
    constructors: Vec<FlowConstructor<State>>,
) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    #[cfg(all(feature = "integration-tests", target_os = "linux"))]
    let event_loop: EventLoop<FlowEvent<State>> = {
        use winit::platform::wayland::EventLoopBuilderExtWayland;

        winit::event_loop::EventLoop::with_user_event()
            .with_any_thread(true)
            .build()
            .context("Failed to create an event loop")?
    };

    #[cfg(all(feature = "integration-tests", target_os = "windows"))]
    let event_loop: EventLoop<FlowEvent<State>> = {
        use winit::platform::windows::EventLoopBuilderExtWindows;

        winit::event_loop::EventLoop::with_user_event()
            .with_any_thread(true)
            .build()
            .context("Failed to create an event loop")?
    };

    #[cfg(not(feature = "integration-tests"))]
    let event_loop: EventLoop<FlowEvent<State>> = EventLoop::with_user_event().build()?;

    let mut app: App<State> = App::new(&event_loop, constructors)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
