//! The GPU canvas backend.
//!
//! The renderer owns the wgpu surface and pipelines and consumes the
//! [`Frame`]s recorded by a [`Painter`](crate::Painter): the aggregated shape
//! mesh renders through an alpha-blended color pipeline, images through a
//! textured-quad pipeline, and text through `glyphon`, all in one render
//! pass cleared to the window background.

mod text;
mod textures;

use wgpu::util::DeviceExt;
use wgpu::{CompositeAlphaMode, InstanceDescriptor, SurfaceTarget};

use crate::canvas::{DrawCommand, Frame};
use crate::error::Error;
use crate::pipeline::{create_shape_pipeline, create_texture_pipeline};
use crate::util::{srgb_to_linear, to_logical, to_ndc};
use crate::vertex::TexturedVertex;
use crate::Color;
use text::TextRendererWrapper;
use textures::TextureStore;

pub(crate) struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    physical_size: (u32, u32),
    scale_factor: f64,
    background: wgpu::Color,

    shape_bind_group: wgpu::BindGroup,
    shape_pipeline: wgpu::RenderPipeline,

    texture_bind_group_layout: wgpu::BindGroupLayout,
    texture_pipeline: wgpu::RenderPipeline,
    quad_index_buffer: wgpu::Buffer,
    textures: TextureStore,

    text: TextRendererWrapper,
}

impl Renderer {
    pub async fn new(
        window: impl Into<SurfaceTarget<'static>>,
        physical_size: (u32, u32),
        scale_factor: f64,
        background: Color,
    ) -> Result<Self, Error> {
        let instance = wgpu::Instance::new(&InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(|e| Error::GraphicsInit(format!("surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::GraphicsInit(format!("no suitable adapter: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| Error::GraphicsInit(format!("device: {e}")))?;

        let swapchain_format = wgpu::TextureFormat::Bgra8UnormSrgb;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: swapchain_format,
            width: physical_size.0,
            height: physical_size.1,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: CompositeAlphaMode::Opaque,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let (shape_bind_group, shape_pipeline) =
            create_shape_pipeline(to_logical(physical_size, scale_factor), &device, &config);
        let (texture_bind_group_layout, texture_pipeline) =
            create_texture_pipeline(&device, &config);

        let quad_indices: &[u16] = &[0, 1, 2, 2, 3, 0];
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let text = TextRendererWrapper::new(&device, &queue, swapchain_format);
        let textures = TextureStore::new(&device);

        tracing::debug!("renderer ready: {physical_size:?} at scale {scale_factor}");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            physical_size,
            scale_factor,
            background: linear_clear_color(background),
            shape_bind_group,
            shape_pipeline,
            texture_bind_group_layout,
            texture_pipeline,
            quad_index_buffer,
            textures,
            text,
        })
    }

    /// Renders one recorded frame and presents it.
    pub fn render(&mut self, frame: Frame) -> Result<(), wgpu::SurfaceError> {
        if self.physical_size.0 == 0 || self.physical_size.1 == 0 {
            // Minimized; nothing to draw into.
            return Ok(());
        }

        // Upload image textures and build the per-frame quad buffers before
        // the pass starts, so the pass only references long-enough-lived data.
        for command in &frame.commands {
            if let DrawCommand::Image(image) = command {
                self.textures.ensure_uploaded(
                    &self.device,
                    &self.queue,
                    &self.texture_bind_group_layout,
                    image,
                );
            }
        }
        let quad_buffers: Vec<Option<wgpu::Buffer>> = frame
            .commands
            .iter()
            .map(|command| match command {
                DrawCommand::Image(image) => Some(self.image_quad(image)),
                DrawCommand::Mesh { .. } => None,
            })
            .collect();

        let mesh_buffers = if frame.geometry.vertices.is_empty() {
            None
        } else {
            let vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Shape Vertex Buffer"),
                    contents: bytemuck::cast_slice(&frame.geometry.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Shape Index Buffer"),
                    contents: bytemuck::cast_slice(&frame.geometry.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
            Some((vertex_buffer, index_buffer))
        };

        let mut draw_text = !frame.texts.is_empty();
        if draw_text {
            if let Err(e) = self.text.prepare(
                &self.device,
                &self.queue,
                &frame.texts,
                self.physical_size,
                self.scale_factor as f32,
            ) {
                tracing::warn!("text preparation failed: {e}");
                draw_text = false;
            }
        }

        let output = self.surface.get_current_texture()?;
        let output_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (command, quad_buffer) in frame.commands.iter().zip(&quad_buffers) {
                match command {
                    DrawCommand::Mesh { indices } => {
                        let Some((vertex_buffer, index_buffer)) = &mesh_buffers else {
                            continue;
                        };
                        pass.set_pipeline(&self.shape_pipeline);
                        pass.set_bind_group(0, &self.shape_bind_group, &[]);
                        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(indices.clone(), 0, 0..1);
                    }
                    DrawCommand::Image(image) => {
                        let (Some(bind_group), Some(quad_buffer)) =
                            (self.textures.bind_group(image.id), quad_buffer)
                        else {
                            continue;
                        };
                        pass.set_pipeline(&self.texture_pipeline);
                        pass.set_bind_group(0, bind_group, &[]);
                        pass.set_vertex_buffer(0, quad_buffer.slice(..));
                        pass.set_index_buffer(
                            self.quad_index_buffer.slice(..),
                            wgpu::IndexFormat::Uint16,
                        );
                        pass.draw_indexed(0..6, 0, 0..1);
                    }
                }
            }

            if draw_text {
                if let Err(e) = self.text.render(&mut pass) {
                    tracing::warn!("text rendering failed: {e}");
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.text.trim();

        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        self.physical_size
    }

    /// The drawable area in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        to_logical(self.physical_size, self.scale_factor)
    }

    pub fn change_scale_factor(&mut self, new_scale_factor: f64) {
        self.scale_factor = new_scale_factor;
        self.resize(self.physical_size);
    }

    pub fn resize(&mut self, new_physical_size: (u32, u32)) {
        if new_physical_size.0 == 0 || new_physical_size.1 == 0 {
            self.physical_size = new_physical_size;
            return;
        }
        self.physical_size = new_physical_size;
        self.config.width = new_physical_size.0;
        self.config.height = new_physical_size.1;
        self.surface.configure(&self.device, &self.config);

        // The uniforms bake in the logical canvas size, so the pipeline is
        // rebuilt to match.
        let (shape_bind_group, shape_pipeline) = create_shape_pipeline(
            to_logical(new_physical_size, self.scale_factor),
            &self.device,
            &self.config,
        );
        self.shape_bind_group = shape_bind_group;
        self.shape_pipeline = shape_pipeline;
    }

    /// Builds the NDC quad for one image command.
    fn image_quad(&self, image: &crate::canvas::ImageCommand) -> wgpu::Buffer {
        let [top_left, bottom_right] = image.rect;
        let [uv_min, uv_max] = image.uv;
        let scale = self.scale_factor as f32;

        let corners = [
            ((top_left.x, top_left.y), [uv_min[0], uv_min[1]]),
            ((bottom_right.x, top_left.y), [uv_max[0], uv_min[1]]),
            ((bottom_right.x, bottom_right.y), [uv_max[0], uv_max[1]]),
            ((top_left.x, bottom_right.y), [uv_min[0], uv_max[1]]),
        ];
        let vertices: Vec<TexturedVertex> = corners
            .into_iter()
            .map(|(position, tex_coords)| TexturedVertex {
                position: to_ndc(position, self.physical_size, scale),
                tex_coords,
            })
            .collect();

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Image Quad Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
    }
}

fn linear_clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.normalize();
    wgpu::Color {
        r: srgb_to_linear(r) as f64,
        g: srgb_to_linear(g) as f64,
        b: srgb_to_linear(b) as f64,
        a: a as f64,
    }
}
