use ahash::{HashMap, HashMapExt};

use crate::canvas::ImageCommand;

/// Uploads image bitmaps to the GPU once and hands out their bind groups.
///
/// Bitmap ids are process-unique, so a bitmap drawn in many frames (or many
/// places in one frame) is uploaded a single time.
pub(crate) struct TextureStore {
    sampler: wgpu::Sampler,
    bind_groups: HashMap<u64, wgpu::BindGroup>,
}

impl TextureStore {
    pub fn new(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Image Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            sampler,
            bind_groups: HashMap::new(),
        }
    }

    pub fn ensure_uploaded(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        command: &ImageCommand,
    ) {
        if self.bind_groups.contains_key(&command.id) {
            return;
        }

        let (width, height) = command.dimensions;
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Image Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            command.pixels.as_slice(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Image Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        tracing::debug!("uploaded image texture {} ({}x{})", command.id, width, height);
        self.bind_groups.insert(command.id, bind_group);
    }

    pub fn bind_group(&self, id: u64) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(&id)
    }
}
