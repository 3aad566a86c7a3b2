//! The basketball court scene and the flow that runs it.
//!
//! The scene is built once from procedural components ([`skybox`], [`floor`],
//! two [`basket`]s and the [`ball`]), uploaded to the GPU and redrawn unchanged
//! every frame. The only runtime state is whether the orbit camera is on,
//! flipped with the "O" key and shown in the [`crate::ui`] overlay.

pub mod ball;
pub mod basket;
pub mod floor;
pub mod lighting;
pub mod orbit;
pub mod skybox;

use std::pin::Pin;

use cgmath::{Deg, Point3};
use instant::Duration;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::Key,
};

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;
use crate::{
    camera::{OrbitCamera, OrbitController},
    context::{Context, InitContext},
    court::{basket::BasketSide, lighting::Lighting, orbit::OrbitToggle},
    data_structures::{
        instance::Instance,
        scene_graph::{Node, SceneNode, to_scene_node},
    },
    flow::{FlowConstructor, GraphicsFlow, Out},
    render::Render,
    ui::{OverlayHost, Ui},
};

#[cfg(not(target_arch = "wasm32"))]
pub type Host = crate::ui::panels::PanelHost;
#[cfg(target_arch = "wasm32")]
pub type Host = crate::ui::dom::DomHost;

/// Camera, lighting and start-up settings of the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub orbit_enabled: bool,
    pub clear_colour: wgpu::Color,
    pub lighting: Lighting,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 25.0, 25.0),
            target: Point3::new(0.0, 0.0, 0.0),
            fovy: Deg(75.0),
            znear: 0.1,
            zfar: 1000.0,
            orbit_enabled: true,
            clear_colour: skybox::clear_colour(),
            lighting: Lighting::default(),
        }
    }
}

impl SceneConfig {
    pub fn apply(&self, ctx: &mut Context) {
        ctx.camera.camera = OrbitCamera::from_position(self.eye, self.target);
        ctx.camera.controller.set_enabled(self.orbit_enabled);
        ctx.projection.fovy = self.fovy.into();
        ctx.projection.znear = self.znear;
        ctx.projection.zfar = self.zfar;
        ctx.clear_colour = self.clear_colour;
        ctx.light.set(&ctx.queue, self.lighting.to_uniform());
        ctx.write_camera();
    }
}

/// State shared with the event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct CourtState {
    pub orbit: OrbitToggle,
}

impl CourtState {
    /// Flips the orbit camera on "O" and shows the new state in `ui`.
    ///
    /// Returns whether the key was consumed.
    pub fn on_key<H: OverlayHost>(&mut self, key: &Key, ui: &mut Ui<H>) -> bool {
        if !self.orbit.handle_key(key) {
            return false;
        }
        log::info!("Orbit camera toggled: {}", self.orbit.label());
        ui.update_orbit_status(self.orbit.is_enabled());
        true
    }

    pub fn apply_orbit(&self, controller: &mut OrbitController) {
        controller.set_enabled(self.orbit.is_enabled());
    }
}

/// The complete scene description, root first.
pub fn build_scene() -> Node {
    Node::group("court")
        .with_child(skybox::build())
        .with_child(floor::build())
        .with_child(basket::build(BasketSide::LEFT))
        .with_child(basket::build(BasketSide::RIGHT))
        .with_child(ball::build())
}

pub struct CourtFlow {
    config: SceneConfig,
    scene: Box<dyn SceneNode>,
    ui: Ui<Host>,
    #[cfg(all(feature = "ui", not(target_arch = "wasm32")))]
    text: crate::ui::text::TextOverlay,
}

impl CourtFlow {
    pub fn new(ctx: InitContext, config: SceneConfig) -> Self {
        let description = build_scene();
        log::info!(
            "Uploading court scene with {} meshes",
            description.mesh_count()
        );
        let scene = to_scene_node(
            &description,
            &Instance::default(),
            &ctx.device,
            &ctx.material_bind_group_layout,
        );
        Self {
            config,
            scene,
            ui: Ui::new(Host::default()),
            #[cfg(all(feature = "ui", not(target_arch = "wasm32")))]
            text: crate::ui::text::TextOverlay::new(&ctx.device, &ctx.queue, ctx.format),
        }
    }

    pub fn ui(&self) -> &Ui<Host> {
        &self.ui
    }
}

impl GraphicsFlow<CourtState> for CourtFlow {
    fn on_init(&mut self, _: &mut Context, state: &mut CourtState) -> Out {
        state.orbit = OrbitToggle::new(self.config.orbit_enabled);
        log::info!(
            "Press 'O' to toggle orbit controls. Initial orbit state: {}",
            state.orbit.label()
        );
        let config = self.config.clone();
        Out::Configure(Box::new(move |ctx| config.apply(ctx)))
    }

    fn on_update(&mut self, _ctx: &Context, state: &mut CourtState, _: Duration) -> Out {
        #[cfg(all(feature = "ui", not(target_arch = "wasm32")))]
        if let Err(e) = self.text.prepare(
            &_ctx.device,
            &_ctx.queue,
            _ctx.config.width,
            _ctx.config.height,
            self.ui.host().panels(),
        ) {
            log::warn!("{e:#}");
        }

        let state = *state;
        Out::Configure(Box::new(move |ctx| {
            state.apply_orbit(&mut ctx.camera.controller)
        }))
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        state: &mut CourtState,
        event: &WindowEvent,
    ) -> Out {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key,
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } = event
        {
            state.on_key(logical_key, &mut self.ui);
        }
        Out::Empty
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        let scene = Render::from(self.scene.as_ref());
        #[cfg(all(feature = "ui", not(target_arch = "wasm32")))]
        let scene = Render::Composed(vec![
            scene,
            Render::Custom(Box::new(|_: &Context, pass: &mut wgpu::RenderPass<'pass>| {
                self.text.render(pass)
            })),
        ]);
        scene
    }

    /// Passes as soon as something other than the background was drawn.
    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        ctx: &Context,
        _: &mut CourtState,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        let Some(background) = texture.pixels().next().copied() else {
            return Ok(ImageTestResult::Waiting);
        };
        let width = ctx.config.width.min(texture.width());
        let drawn = texture
            .enumerate_pixels()
            .any(|(x, _, pixel)| x < width && *pixel != background);
        Ok(if drawn {
            ImageTestResult::Passed
        } else {
            ImageTestResult::Waiting
        })
    }
}

type FlowFuture = Pin<Box<dyn Future<Output = Box<dyn GraphicsFlow<CourtState>>>>>;

pub fn constructor(config: SceneConfig) -> FlowConstructor<CourtState> {
    Box::new(move |ctx: InitContext| -> FlowFuture {
        Box::pin(async move {
            let flow: Box<dyn GraphicsFlow<CourtState>> = Box::new(CourtFlow::new(ctx, config));
            flow
        })
    })
}

/// Opens the court in a window (or the page's canvas on the web).
pub fn run() -> anyhow::Result<()> {
    crate::flow::run(vec![constructor(SceneConfig::default())])
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_web() -> Result<(), wasm_bindgen::JsValue> {
    run().map_err(|e| wasm_bindgen::JsValue::from_str(&format!("{e:#}")))
}
