//! Glyph rendering via `glyphon`.
//!
//! Text runs recorded in a frame are shaped into fresh buffers each frame;
//! at teaching scene sizes (a handful of labels and marks) that is far below
//! anything worth caching.

use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as TextColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};
use wgpu::MultisampleState;

use crate::canvas::TextSpec;

/// Wrapper for `glyphon::TextRenderer` and the components it needs.
pub(crate) struct TextRendererWrapper {
    text_renderer: TextRenderer,
    atlas: TextAtlas,
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
}

impl TextRendererWrapper {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        swapchain_format: wgpu::TextureFormat,
    ) -> Self {
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, swapchain_format);
        let text_renderer =
            TextRenderer::new(&mut atlas, device, MultisampleState::default(), None);
        let viewport = Viewport::new(device, &cache);

        Self {
            text_renderer,
            atlas,
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            viewport,
        }
    }

    /// Shapes and uploads this frame's text runs. Positions are logical
    /// pixels; glyphon wants physical framebuffer coordinates.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texts: &[TextSpec],
        physical_size: (u32, u32),
        scale_factor: f32,
    ) -> Result<(), glyphon::PrepareError> {
        self.viewport.update(
            queue,
            Resolution {
                width: physical_size.0,
                height: physical_size.1,
            },
        );

        let buffers: Vec<TextBuffer> = texts
            .iter()
            .map(|spec| {
                let mut buffer = TextBuffer::new(
                    &mut self.font_system,
                    Metrics::new(spec.font_size, spec.font_size * 1.2),
                );
                buffer.set_size(&mut self.font_system, None, None);
                buffer.set_text(
                    &mut self.font_system,
                    &spec.content,
                    &Attrs::new().family(Family::SansSerif),
                    Shaping::Advanced,
                );
                buffer.shape_until_scroll(&mut self.font_system, false);
                buffer
            })
            .collect();

        let areas = buffers.iter().zip(texts).map(|(buffer, spec)| {
            let [r, g, b, a] = spec.color.to_array();
            TextArea {
                buffer,
                left: spec.position.x * scale_factor,
                top: spec.position.y * scale_factor,
                scale: scale_factor,
                bounds: TextBounds {
                    left: 0,
                    top: 0,
                    right: physical_size.0 as i32,
                    bottom: physical_size.1 as i32,
                },
                default_color: TextColor::rgba(r, g, b, a),
                custom_glyphs: &[],
            }
        });

        self.text_renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) -> Result<(), glyphon::RenderError> {
        self.text_renderer.render(&self.atlas, &self.viewport, pass)
    }

    /// Releases atlas space unused since the last frame.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}
