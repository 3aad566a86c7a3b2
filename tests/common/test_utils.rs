#![allow(dead_code)]

use cgmath::{MetricSpace, Point3};
#[cfg(feature = "integration-tests")]
use court_ngin::{
    context::Context,
    data_structures::scene_graph::SceneNode,
    flow::{GraphicsFlow, ImageTestResult, Out},
    render::Render,
};

pub(crate) const EPSILON: f32 = 1e-5;

pub(crate) fn assert_close(actual: Point3<f32>, expected: Point3<f32>) {
    assert!(
        actual.distance(expected) < EPSILON,
        "{actual:?} is not close to {expected:?}"
    );
}

pub(crate) fn assert_close_f32(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{actual} is not close to {expected}"
    );
}

#[derive(Default)]
pub(crate) struct FrameCounter(pub(crate) u32);

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

#[cfg(feature = "integration-tests")]
pub(crate) type Readback = image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>;

#[cfg(feature = "integration-tests")]
type Validate =
    Box<dyn Fn(&Context, &FrameCounter, &mut Readback) -> Result<ImageTestResult, anyhow::Error>>;

/// A flow drawing an optional scene and checking the offscreen frame.
#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender {
    scene: Option<Box<dyn SceneNode>>,
    setup: Box<dyn Fn(&mut Context)>,
    validate: Validate,
}

#[cfg(feature = "integration-tests")]
impl TestRender {
    pub(crate) fn new(
        scene: Option<Box<dyn SceneNode>>,
        setup: impl Fn(&mut Context) + 'static,
        validate: impl Fn(&Context, &FrameCounter, &mut Readback) -> Result<ImageTestResult, anyhow::Error>
        + 'static,
    ) -> Self {
        Self {
            scene,
            setup: Box::new(setup),
            validate: Box::new(validate),
        }
    }
}

#[cfg(feature = "integration-tests")]
impl GraphicsFlow<FrameCounter> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, _: &mut FrameCounter) -> Out {
        (self.setup)(ctx);
        Out::Empty
    }

    fn on_update(&mut self, _: &Context, state: &mut FrameCounter, _: std::time::Duration) -> Out {
        state.progress();
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &court_ngin::WindowEvent,
    ) -> Out {
        Out::Empty
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        match &self.scene {
            Some(scene) => Render::from(scene.as_ref()),
            None => Render::None,
        }
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut Readback,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

/// Runs one flow built by `$make_flow: FnOnce(InitContext) -> TestRender` until it passes.
///
/// winit allows a single event loop per process, so use it once per test binary.
#[macro_export]
macro_rules! golden_image_test {
    ($make_flow:expr) => {{
        use court_ngin::{
            context::InitContext,
            flow::{FlowConstructor, GraphicsFlow},
        };
        use $crate::common::test_utils::FrameCounter;

        type FlowFuture =
            std::pin::Pin<Box<dyn std::future::Future<Output = Box<dyn GraphicsFlow<FrameCounter>>>>>;

        let make_flow = $make_flow;
        let constructor: FlowConstructor<FrameCounter> =
            Box::new(move |ctx: InitContext| -> FlowFuture {
                Box::pin(async move {
                    let flow: Box<dyn GraphicsFlow<FrameCounter>> = Box::new(make_flow(ctx));
                    flow
                })
            });

        court_ngin::flow::run(vec![constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
