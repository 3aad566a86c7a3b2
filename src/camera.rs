//! Orbit camera, projection and the orbit controller.
//!
//! The camera is stored in spherical coordinates around a target point, which
//! is what an orbit control manipulates: dragging changes yaw and pitch,
//! scrolling changes the radius and panning moves the target.

use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};
use instant::Duration;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Point3<f32>,
    pub radius: f32,
    /// Angle around the Y axis, measured from +Z towards +X.
    pub yaw: Rad<f32>,
    /// Elevation above the XZ plane.
    pub pitch: Rad<f32>,
}

impl OrbitCamera {
    /// Places the camera at `eye`, looking at `target`.
    pub fn from_position<E: Into<Point3<f32>>, T: Into<Point3<f32>>>(eye: E, target: T) -> Self {
        let eye = eye.into();
        let target = target.into();
        let offset = eye - target;
        let radius = offset.magnitude();
        let yaw = Rad(offset.x.atan2(offset.z));
        let pitch = Rad((offset.y / radius).asin());
        Self {
            target,
            radius,
            yaw,
            pitch,
        }
    }

    pub fn position(&self) -> Point3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        self.target
            + Vector3::new(
                cos_pitch * sin_yaw * self.radius,
                sin_pitch * self.radius,
                cos_pitch * cos_yaw * self.radius,
            )
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position(), self.target, Vector3::unit_y())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Drag {
    None,
    Rotate,
    Pan,
}

/// Mouse-driven orbit control.
///
/// Input is accumulated from window events and applied in [`OrbitController::update`].
/// While disabled, `update` drops whatever was accumulated so a later re-enable
/// starts from rest.
#[derive(Debug)]
pub struct OrbitController {
    enabled: bool,
    rotate_speed: f32,
    zoom_speed: f32,
    drag: Drag,
    cursor: Option<PhysicalPosition<f64>>,
    yaw_delta: f32,
    pitch_delta: f32,
    pan_delta: (f32, f32),
    zoom_delta: f32,
}

impl OrbitController {
    /// `rotate_speed` is in radians per pixel dragged, `zoom_speed` scales one wheel line.
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            enabled: true,
            rotate_speed,
            zoom_speed,
            drag: Drag::None,
            cursor: None,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            pan_delta: (0.0, 0.0),
            zoom_delta: 0.0,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cursor movement in pixels while a drag is active.
    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        match self.drag {
            Drag::Rotate => {
                self.yaw_delta -= dx as f32 * self.rotate_speed;
                self.pitch_delta += dy as f32 * self.rotate_speed;
            }
            Drag::Pan => {
                self.pan_delta.0 += dx as f32;
                self.pan_delta.1 += dy as f32;
            }
            Drag::None => (),
        }
    }

    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        self.zoom_delta += match delta {
            MouseScrollDelta::LineDelta(_, lines) => *lines,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / 50.0,
        };
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.drag = match (button, state) {
                    (MouseButton::Left, ElementState::Pressed) => Drag::Rotate,
                    (MouseButton::Right, ElementState::Pressed) => Drag::Pan,
                    (_, ElementState::Released) => Drag::None,
                    _ => self.drag,
                };
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(last) = self.cursor {
                    self.handle_mouse(position.x - last.x, position.y - last.y);
                }
                self.cursor = Some(*position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.drag = Drag::None;
            }
            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(delta),
            _ => (),
        }
    }

    pub fn update(&mut self, camera: &mut OrbitCamera, _dt: Duration) {
        if self.enabled {
            camera.yaw = camera.yaw + Rad(self.yaw_delta);
            camera.pitch = Rad((camera.pitch.0 + self.pitch_delta).clamp(-SAFE_FRAC_PI_2, SAFE_FRAC_PI_2));
            camera.radius =
                (camera.radius * (1.0 - self.zoom_delta * self.zoom_speed)).clamp(MIN_RADIUS, MAX_RADIUS);

            if self.pan_delta != (0.0, 0.0) {
                // pan along the camera's right and up vectors, scaled with distance
                let forward = (camera.target - camera.position()).normalize();
                let right = forward.cross(Vector3::unit_y()).normalize();
                let up = right.cross(forward);
                let pan_scale = camera.radius * 0.002;
                camera.target = camera.target
                    + right * (-self.pan_delta.0 * pan_scale)
                    + up * (self.pan_delta.1 * pan_scale);
            }
        }
        self.yaw_delta = 0.0;
        self.pitch_delta = 0.0;
        self.pan_delta = (0.0, 0.0);
        self.zoom_delta = 0.0;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &OrbitCamera, projection: &Projection) {
        self.view_position = camera.position().to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera state and its GPU resources.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: OrbitCamera,
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point3<f32>, b: Point3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn spherical_round_trip_of_start_position() {
        let camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
        assert!(close(camera.position(), Point3::new(0.0, 25.0, 25.0)));
        assert!((camera.pitch.0 - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn disabled_controller_discards_drag() {
        let mut camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
        let before = camera.clone();
        let mut controller = OrbitController::new(0.01, 0.1);
        controller.drag = Drag::Rotate;
        controller.handle_mouse(40.0, 10.0);
        controller.set_enabled(false);
        controller.update(&mut camera, Duration::from_millis(16));
        assert_eq!(camera, before);

        controller.set_enabled(true);
        controller.update(&mut camera, Duration::from_millis(16));
        assert_eq!(camera, before);
    }

    #[test]
    fn enabled_controller_rotates_and_clamps_pitch() {
        let mut camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
        let mut controller = OrbitController::new(0.01, 0.1);
        controller.drag = Drag::Rotate;
        controller.handle_mouse(100.0, 10_000.0);
        controller.update(&mut camera, Duration::from_millis(16));
        assert!((camera.yaw.0 + 1.0).abs() < 1e-5);
        assert!(camera.pitch.0 < FRAC_PI_2);
        assert!((camera.radius - 25.0 * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::from_position((0.0, 25.0, 25.0), (0.0, 0.0, 0.0));
        let mut controller = OrbitController::new(0.01, 0.1);
        controller.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 100.0));
        controller.update(&mut camera, Duration::from_millis(16));
        assert_eq!(camera.radius, MIN_RADIUS);
    }

    #[test]
    fn projection_resize_sets_aspect() {
        let mut projection = Projection::new(100, 100, cgmath::Deg(75.0), 0.1, 1000.0);
        projection.resize(800, 600);
        assert_eq!(projection.aspect, 800.0 / 600.0);
    }
}
