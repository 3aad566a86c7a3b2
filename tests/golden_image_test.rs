#![cfg(feature = "integration-tests")]

mod common;

use common::test_utils::TestRender;
use court_ngin::{
    context::{Context, InitContext},
    flow::ImageTestResult,
};
use wgpu::Color;

#[test]
fn should_render_clear_colour() {
    golden_image_test!(|_: InitContext| {
        TestRender::new(
            None,
            |ctx: &mut Context| ctx.clear_colour = Color::WHITE,
            |ctx, state, texture| {
                if state.frame() == 0 {
                    return Ok(ImageTestResult::Waiting);
                }
                let white = image::Rgba([255, 255, 255, 255]);
                let width = ctx.config.width.min(texture.width());
                for (x, y, pixel) in texture.enumerate_pixels() {
                    if x < width {
                        assert_eq!(*pixel, white, "pixel ({x}, {y}) is not the clear colour");
                    }
                }
                Ok(ImageTestResult::Passed)
            },
        )
    });
}
