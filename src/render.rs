//! Render composition and pipeline batching.
//!
//! This module defines the [`Render`] enum, which flows return every frame to
//! describe what should be drawn. The engine sorts the contained meshes into
//! batches per pipeline (lit, unlit, lines; opaque before transparent) so each
//! pipeline is bound once per frame, and runs custom passes (the text overlay)
//! after all meshes.
//!
//! # Key types
//!
//! - [`Render<'a, 'pass>`] is the primary enum describing render operations
//! - [`Instanced<'a>`] contains data for instanced rendering (mesh + instance buffer)
//! - [`Batches<'a, 'pass>`] is the per-frame sorting result

use crate::{context::Context, data_structures::model::{Mesh, Shading}};

/// Data for instanced mesh rendering: a mesh and its instance buffer.
#[derive(Clone)]
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub mesh: &'a Mesh,
    pub amount: usize,
}

/// A closure recording draw commands of its own into the frame's render pass.
pub type CustomRender<'a, 'pass> = Box<dyn 'a + FnOnce(&Context, &mut wgpu::RenderPass<'pass>)>;

/// Specifies how a flow's objects should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders a single opaque mesh
/// - `Defaults(Vec<Instanced>)` renders a batch of opaque meshes
/// - `Transparent(Instanced)` renders a single alpha-blended mesh
/// - `Transparents(Vec<Instanced>)` renders a batch of alpha-blended meshes
/// - `Composed(Vec<Render>)` recursively renders composition of multiple renders
/// - `Custom(...)` invokes a user-defined closure after all meshes were drawn
pub enum Render<'a, 'pass>
where
    'pass: 'a,
{
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Transparent(Instanced<'a>),
    Transparents(Vec<Instanced<'a>>),
    Composed(Vec<Render<'a, 'pass>>),
    Custom(CustomRender<'a, 'pass>),
}

/// Meshes of one frame sorted by the pipeline they are drawn with.
#[derive(Default)]
pub struct Batches<'a, 'pass> {
    pub phong: Vec<Instanced<'a>>,
    pub unlit: Vec<Instanced<'a>>,
    pub lines: Vec<Instanced<'a>>,
    pub phong_transparent: Vec<Instanced<'a>>,
    pub unlit_transparent: Vec<Instanced<'a>>,
    pub lines_transparent: Vec<Instanced<'a>>,
    pub custom: Vec<CustomRender<'a, 'pass>>,
}

impl<'a, 'pass> Batches<'a, 'pass> {
    fn push(&mut self, instanced: Instanced<'a>, transparent: bool) {
        let batch = match (instanced.mesh.shading, transparent) {
            (Shading::Phong, false) => &mut self.phong,
            (Shading::Basic, false) => &mut self.unlit,
            (Shading::Line, false) => &mut self.lines,
            (Shading::Phong, true) => &mut self.phong_transparent,
            (Shading::Basic, true) => &mut self.unlit_transparent,
            (Shading::Line, true) => &mut self.lines_transparent,
        };
        batch.push(instanced);
    }

    pub fn len(&self) -> usize {
        self.phong.len()
            + self.unlit.len()
            + self.lines.len()
            + self.phong_transparent.len()
            + self.unlit_transparent.len()
            + self.lines_transparent.len()
            + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, 'pass> Render<'a, 'pass> {
    /// Sorts this render tree into `batches`.
    ///
    /// The `Transparent*` variants force alpha blending; meshes inside
    /// `Default*` use their material's own transparency.
    pub(crate) fn set_pipelines(self, batches: &mut Batches<'a, 'pass>) {
        match self {
            Render::Default(instanced) => {
                let transparent = instanced.mesh.transparent;
                batches.push(instanced, transparent);
            }
            Render::Defaults(vec) => vec.into_iter().for_each(|instanced| {
                let transparent = instanced.mesh.transparent;
                batches.push(instanced, transparent);
            }),
            Render::Transparent(instanced) => batches.push(instanced, true),
            Render::Transparents(vec) => vec
                .into_iter()
                .for_each(|instanced| batches.push(instanced, true)),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(batches)),
            Render::Custom(f) => batches.custom.push(f),
            Render::None => (),
        }
    }
}
