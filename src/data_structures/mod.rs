//! Engine data structures: transforms, geometry, materials, scene graphs.
//!
//! - `instance` holds node transforms and their GPU packing
//! - `geometry` contains the procedural mesh generators (pure, CPU only)
//! - `model` contains vertex layout, materials and uploaded meshes
//! - `scene_graph` enables hierarchical scene organization
//! - `texture` contains GPU texture wrappers (depth/readback targets)

pub mod geometry;
pub mod instance;
pub mod model;
pub mod scene_graph;
pub mod texture;
