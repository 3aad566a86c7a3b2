#![cfg(feature = "integration-tests")]

mod common;

use common::test_utils::TestRender;
use court_ngin::{
    context::{Context, InitContext},
    court::{SceneConfig, build_scene},
    data_structures::{instance::Instance, scene_graph::to_scene_node},
    flow::ImageTestResult,
};

#[test]
fn should_draw_the_court_over_the_sky() {
    golden_image_test!(|ctx: InitContext| {
        let scene = to_scene_node(
            &build_scene(),
            &Instance::default(),
            &ctx.device,
            &ctx.material_bind_group_layout,
        );
        TestRender::new(
            Some(scene),
            |ctx: &mut Context| SceneConfig::default().apply(ctx),
            |ctx, state, texture| {
                if state.frame() == 0 {
                    return Ok(ImageTestResult::Waiting);
                }
                // the camera looks at the centre court, the top corner only sees sky
                let sky = *texture.get_pixel(0, 0);
                let centre = *texture.get_pixel(ctx.config.width / 2, ctx.config.height / 2);
                assert_ne!(centre, sky, "nothing was drawn at the centre of the frame");
                Ok(ImageTestResult::Passed)
            },
        )
    });
}
