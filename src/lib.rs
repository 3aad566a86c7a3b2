//! court-ngin
//!
//! A procedural basketball court (floor, two hoops with nets, a ball, sky and
//! a score/instructions overlay) on a small instancing-oriented wgpu engine
//! that runs natively and in the browser.
//!
//! High-level modules
//! - `camera`: orbit camera, projection, orbit controller and uniforms
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: transforms, procedural geometry, materials, scene graph
//! - `flow`: the flow trait and the application event loop
//! - `pipelines`: lit, unlit and line pipelines plus the scene light
//! - `render`: render composition and per-pipeline batching
//! - `court`: the court components and the flow that runs the scene
//! - `ui`: the score and instructions overlay
//!
//! Features
//! - `ui` (default): draws the overlay text natively with glyphon. Without it the
//!   native overlay only lives in memory; the web build always uses the page's DOM.
//! - `integration-tests`: offscreen rendering and frame readback for the GPU tests
//!

pub mod camera;
pub mod context;
pub mod court;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod ui;

// Re-exports commonly used crates for convenience in downstream code.
pub use cgmath;
pub use wgpu;
pub use winit;
pub use winit::event::WindowEvent;
