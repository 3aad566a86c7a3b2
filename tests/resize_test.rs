use court_ngin::{camera::Projection, context::resize_surface};

fn surface_config(width: u32, height: u32) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: wgpu::TextureFormat::Bgra8UnormSrgb,
        width,
        height,
        present_mode: wgpu::PresentMode::Fifo,
        desired_maximum_frame_latency: 2,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
    }
}

#[test]
fn resize_updates_surface_and_aspect() {
    let mut config = surface_config(1024, 768);
    let mut projection = Projection::new(1024, 768, cgmath::Deg(75.0), 0.1, 1000.0);

    assert!(resize_surface(&mut config, &mut projection, 800, 600));

    assert_eq!((config.width, config.height), (800, 600));
    assert!((projection.aspect - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut config = surface_config(800, 600);
    let mut projection = Projection::new(800, 600, cgmath::Deg(75.0), 0.1, 1000.0);

    assert!(!resize_surface(&mut config, &mut projection, 0, 600));
    assert!(!resize_surface(&mut config, &mut projection, 800, 0));

    assert_eq!((config.width, config.height), (800, 600));
    assert!((projection.aspect - 800.0 / 600.0).abs() < 1e-6);
}
