//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around WGPU GPU texture resources,
//! and helper methods for creating depth textures, solid colour fallbacks and
//! mip-mapped colour textures from decoded images.

use image::{RgbaImage, imageops::FilterType};

/// A GPU texture with a view and optional sampler.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: Option<wgpu::Sampler>,
}

impl Texture {
    /// Standard depth buffer texture format (32-bit float).
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// * `size` is [width, height] of the texture in pixels
    /// * `label` is used as a debug label for the GPU resource
    pub fn create_depth_texture(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };
        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            sampler: None,
        }
    }

    /// A `width` x `height` texture filled with one colour.
    ///
    /// Bound for draws that sample no texture so the pipeline layout never
    /// has to change.
    pub fn create_solid_color(
        color: [u8; 4],
        width: u32,
        height: u32,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> Texture {
        let pixels = RgbaImage::from_pixel(width.max(1), height.max(1), image::Rgba(color));
        Self::from_mip_chain(device, queue, &[pixels], "solid colour")
    }

    /// Upload `base` together with a full chain of downsampled mip levels.
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        base: RgbaImage,
        label: &str,
    ) -> Texture {
        let (width, height) = base.dimensions();
        let level_count = mip_level_count(width, height);
        let mut levels = Vec::with_capacity(level_count as usize);
        for level in 1..level_count {
            let w = (width >> level).max(1);
            let h = (height >> level).max(1);
            levels.push(image::imageops::resize(&base, w, h, FilterType::Triangle));
        }
        levels.insert(0, base);
        Self::from_mip_chain(device, queue, &levels, label)
    }

    fn from_mip_chain(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        levels: &[RgbaImage],
        label: &str,
    ) -> Texture {
        let (width, height) = levels[0].dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, pixels) in levels.iter().enumerate() {
            let (w, h) = pixels.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                },
                pixels.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d {
                    width: w,
                    height: h,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = Some(create_default_sampler(device));

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Number of levels down to 1x1 for a `width` x `height` image.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Repeat wrapping with linear filtering between texels and mip levels.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}
