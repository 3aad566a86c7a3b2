//! Native rendering of the overlay panels with glyphon.

use anyhow::Context as _;
use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution, Shaping, Style,
    SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport, Weight,
};

use crate::{
    data_structures::texture::Texture,
    ui::{Anchor, LineKind, Panel},
};

const LINE_HEIGHT: f32 = 1.4;
const HEADING_SCALE: f32 = 1.17;

fn attrs(kind: LineKind, bold_panel: bool) -> Attrs<'static> {
    let base = Attrs::new()
        .family(Family::SansSerif)
        .color(Color::rgb(255, 255, 255));
    let base = if bold_panel {
        base.weight(Weight::BOLD)
    } else {
        base
    };
    match kind {
        LineKind::Plain | LineKind::Normal => base,
        LineKind::Heading => base
            .weight(Weight::BOLD)
            .color(Color::rgb(0xff, 0xaa, 0x00)),
        LineKind::Strong => base.weight(Weight::BOLD),
        LineKind::Hint => base
            .style(Style::Italic)
            .color(Color::rgb(0x88, 0x88, 0x88)),
    }
}

struct PanelText {
    anchor: Anchor,
    margin: f32,
    padding: [f32; 2],
    buffer: Buffer,
}

/// Surface size and panels the glyph buffers were shaped for.
#[derive(Debug)]
struct ShapedFor {
    size: [u32; 2],
    panels: Vec<Panel>,
}

impl ShapedFor {
    fn matches(&self, size: [u32; 2], panels: &[Panel]) -> bool {
        self.size == size && self.panels == panels
    }
}

/// Draws overlay panels as text on top of the scene.
///
/// Buffers are reshaped only when the panels or the surface size change.
pub struct TextOverlay {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
    texts: Vec<PanelText>,
    shaped_for: Option<ShapedFor>,
}

impl TextOverlay {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);
        // drawn inside the scene's pass, so it must accept its depth attachment
        let renderer = TextRenderer::new(
            &mut atlas,
            device,
            wgpu::MultisampleState::default(),
            Some(wgpu::DepthStencilState {
                format: Texture::DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
        );
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            viewport,
            atlas,
            renderer,
            texts: Vec::new(),
            shaped_for: None,
        }
    }

    fn needs_shaping(&self, size: [u32; 2], panels: &[Panel]) -> bool {
        !self
            .shaped_for
            .as_ref()
            .is_some_and(|shaped| shaped.matches(size, panels))
    }

    /// Lays out `panels` for a `width` x `height` surface and uploads the glyphs.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        panels: &[Panel],
    ) -> anyhow::Result<()> {
        self.viewport.update(queue, Resolution { width, height });

        if self.needs_shaping([width, height], panels) {
            self.shape(width, height, panels);
        }

        let areas = self.texts.iter().map(|text| {
            let (text_width, text_height) = text
                .buffer
                .layout_runs()
                .fold((0.0f32, 0.0f32), |(w, h), run| {
                    (w.max(run.line_w), h + run.line_height)
                });
            let [pad_y, pad_x] = text.padding;
            let (left, top) = match text.anchor {
                Anchor::TopCenter => (
                    (width as f32 - text_width) / 2.0,
                    text.margin + pad_y,
                ),
                Anchor::BottomLeft => (
                    text.margin + pad_x,
                    height as f32 - text.margin - pad_y - text_height,
                ),
            };
            TextArea {
                buffer: &text.buffer,
                left,
                top,
                scale: 1.0,
                bounds: TextBounds {
                    left: 0,
                    top: 0,
                    right: width as i32,
                    bottom: height as i32,
                },
                default_color: Color::rgb(255, 255, 255),
                custom_glyphs: &[],
            }
        });

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                areas,
                &mut self.swash_cache,
            )
            .context("Cannot prepare the overlay text")?;
        self.atlas.trim();
        Ok(())
    }

    fn shape(&mut self, width: u32, height: u32, panels: &[Panel]) {
        self.texts = panels
            .iter()
            .map(|panel| {
                let font_size = panel.style.font_size_px as f32;
                let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT);
                let mut buffer = Buffer::new(&mut self.font_system, metrics);
                buffer.set_size(&mut self.font_system, Some(width as f32), Some(height as f32));

                let lines = panel
                    .content
                    .iter()
                    .enumerate()
                    .flat_map(|(i, line)| {
                        let attrs = attrs(line.kind, panel.style.bold);
                        let attrs = if line.kind == LineKind::Heading {
                            attrs.metrics(Metrics::new(
                                font_size * HEADING_SCALE,
                                font_size * HEADING_SCALE * LINE_HEIGHT,
                            ))
                        } else {
                            attrs
                        };
                        let separator = if i == 0 { None } else { Some(("\n", attrs.clone())) };
                        separator.into_iter().chain([(line.text.as_str(), attrs)])
                    })
                    .collect::<Vec<_>>();
                buffer.set_rich_text(
                    &mut self.font_system,
                    lines,
                    &attrs(LineKind::Normal, panel.style.bold),
                    Shaping::Advanced,
                    None,
                );
                buffer.shape_until_scroll(&mut self.font_system, false);

                PanelText {
                    anchor: panel.style.anchor,
                    margin: panel.style.margin_px as f32,
                    padding: panel.style.padding_px.map(|p| p as f32),
                    buffer,
                }
            })
            .collect();
        self.shaped_for = Some(ShapedFor {
            size: [width, height],
            panels: panels.to_vec(),
        });
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Err(e) = self.renderer.render(&self.atlas, &self.viewport, pass) {
            log::warn!("Overlay text was not drawn: {e}");
        }
    }
}
