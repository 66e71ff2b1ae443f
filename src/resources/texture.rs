//! Tagged texture registry.
//!
//! Textures are loaded once while the scene is prepared. Each one gets the
//! next free slot (its registration index), which is also the texture unit it
//! is bound to by [`TextureRegistry::bind_all`]. Draw code then refers to
//! textures by tag only.
//!
//! The registry talks to the GPU through [`TextureBackend`]. [`GpuTextures`]
//! is the wgpu implementation; it keeps one bind group per texture unit.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use image::RgbaImage;

use crate::{data_structures::texture::Texture, error::TextureError};

/// Texture units commonly available to a fragment shader.
///
/// Registering more textures than this is allowed but logged.
pub const MAX_TEXTURE_UNITS: usize = 16;

/// Decoded, vertically flipped pixel data as it comes out of the decoder.
///
/// `pixels` is tightly packed, `channels` bytes per pixel, first row is the
/// bottom of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Expands the pixels to RGBA8; missing alpha becomes opaque.
    pub fn to_rgba(&self) -> RgbaImage {
        let channels = self.channels.max(1) as usize;
        let texels = self.width as usize * self.height as usize;
        let mut rgba = Vec::with_capacity(texels * 4);
        for px in self.pixels.chunks_exact(channels) {
            let texel = match *px {
                [l] => [l, l, l, 255],
                [l, a] => [l, l, l, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a, ..] => [r, g, b, a],
                [] => [0, 0, 0, 255],
            };
            rgba.extend_from_slice(&texel);
        }
        rgba.resize(texels * 4, 255);
        RgbaImage::from_raw(self.width, self.height, rgba)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

/// Reads and decodes an image file, flipping it so the first row is the
/// bottom row, the way texture coordinates expect it.
///
/// The channel count is reported as found; checking it is up to the caller.
pub fn decode_image(path: impl AsRef<Path>) -> Result<DecodedImage, TextureError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| TextureError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let channels = img.color().channel_count();
    let img = img.flipv();
    let pixels = match channels {
        1 => img.to_luma8().into_raw(),
        2 => img.to_luma_alpha8().into_raw(),
        3 => img.to_rgb8().into_raw(),
        _ => img.to_rgba8().into_raw(),
    };
    Ok(DecodedImage {
        source: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
        channels,
        pixels,
    })
}

/// GPU side of the registry: creates, binds and releases texture objects.
pub trait TextureBackend {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Uploads an RGB or RGBA image with repeat wrapping, linear filtering
    /// and a full mip chain.
    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> Self::Handle;

    /// Makes `handle` the texture sampled through unit `slot`.
    fn bind_texture(&mut self, slot: usize, handle: Self::Handle);

    /// Frees the GPU object. Called exactly once per created handle.
    fn release_texture(&mut self, handle: Self::Handle);
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureEntry<H> {
    pub tag: String,
    pub handle: H,
}

/// Owns every texture it creates and releases each of them exactly once,
/// either through [`destroy`](Self::destroy) or on drop.
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry<B::Handle>>,
    by_tag: HashMap<String, usize>,
}

impl<B: TextureBackend> TextureRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::new(),
            by_tag: HashMap::new(),
        }
    }

    /// Decodes `path` and registers it under `tag`.
    ///
    /// Failures are logged and leave the registry untouched.
    pub fn load_texture(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<(), TextureError> {
        let image = decode_image(path.as_ref()).inspect_err(|e| log::error!("{}", e))?;
        self.register_image(image, tag)
    }

    /// Registers an already decoded image under `tag`.
    ///
    /// Only 3 (RGB) and 4 (RGBA) channel images are accepted. The pixel data
    /// is dropped once it has been uploaded.
    pub fn register_image(&mut self, image: DecodedImage, tag: &str) -> Result<(), TextureError> {
        if !matches!(image.channels, 3 | 4) {
            let err = TextureError::UnsupportedFormat {
                path: image.source,
                channels: image.channels,
            };
            log::error!("{}", err);
            return Err(err);
        }
        log::info!(
            "Successfully loaded image {}, width: {}, height: {}, channels: {}",
            image.source.display(),
            image.width,
            image.height,
            image.channels
        );

        let handle = self.backend.create_texture(&image, tag);
        let slot = self.entries.len();
        if slot == MAX_TEXTURE_UNITS {
            log::warn!(
                "texture \"{}\" takes slot {}, beyond the {} units most GPUs expose",
                tag,
                slot,
                MAX_TEXTURE_UNITS
            );
        }
        self.by_tag.entry(tag.to_string()).or_insert(slot);
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        Ok(())
    }

    /// Binds every registered texture to the unit matching its slot.
    pub fn bind_all(&mut self) {
        for (slot, entry) in self.entries.iter().enumerate() {
            self.backend.bind_texture(slot, entry.handle);
        }
    }

    pub fn find_handle(&self, tag: &str) -> Option<B::Handle> {
        self.by_tag.get(tag).map(|&slot| self.entries[slot].handle)
    }

    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.by_tag.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &TextureEntry<B::Handle>> {
        self.entries.iter()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases every texture and empties the registry.
    pub fn destroy(&mut self) {
        for entry in self.entries.drain(..) {
            self.backend.release_texture(entry.handle);
        }
        self.by_tag.clear();
    }
}

impl<B: TextureBackend> Drop for TextureRegistry<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Index of a texture owned by [`GpuTextures`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Layout of a texture unit: the texture at binding 0, its sampler at 1.
pub fn texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("texture_unit_bind_group_layout"),
    })
}

/// wgpu texture backend.
///
/// A texture unit is modelled as a bind group built from the texture bound to
/// it. Unbound or invalid units resolve to a 1x1 white fallback.
pub struct GpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    layout: wgpu::BindGroupLayout,
    textures: Vec<Option<Texture>>,
    units: Vec<Option<(TextureHandle, wgpu::BindGroup)>>,
    fallback: wgpu::BindGroup,
}

impl GpuTextures {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let layout = texture_layout(device);
        let white = Texture::create_solid_color([255; 4], 1, 1, device, queue);
        let fallback = mk_unit_bind_group(device, &layout, &white, "fallback texture unit");
        Self {
            device: device.clone(),
            queue: queue.clone(),
            layout,
            textures: Vec::new(),
            units: Vec::new(),
            fallback,
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Bind group of texture unit `slot`, or the fallback for negative,
    /// out-of-range or unbound slots.
    pub fn unit(&self, slot: i32) -> &wgpu::BindGroup {
        usize::try_from(slot)
            .ok()
            .and_then(|slot| self.units.get(slot))
            .and_then(|unit| unit.as_ref())
            .map_or(&self.fallback, |(_, group)| group)
    }
}

fn mk_unit_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &Texture,
    label: &str,
) -> wgpu::BindGroup {
    let sampler = texture
        .sampler
        .clone()
        .unwrap_or_else(|| crate::data_structures::texture::create_default_sampler(device));
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
        label: Some(label),
    })
}

impl TextureBackend for GpuTextures {
    type Handle = TextureHandle;

    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> TextureHandle {
        let texture = Texture::from_rgba(&self.device, &self.queue, image.to_rgba(), label);
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(Some(texture));
        handle
    }

    fn bind_texture(&mut self, slot: usize, handle: TextureHandle) {
        let Some(texture) = self
            .textures
            .get(handle.0 as usize)
            .and_then(|t| t.as_ref())
        else {
            log::warn!("cannot bind released texture {:?} to unit {}", handle, slot);
            return;
        };
        let group = mk_unit_bind_group(
            &self.device,
            &self.layout,
            texture,
            &format!("texture unit {}", slot),
        );
        if self.units.len() <= slot {
            self.units.resize_with(slot + 1, || None);
        }
        self.units[slot] = Some((handle, group));
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        match self.textures.get_mut(handle.0 as usize).and_then(Option::take) {
            Some(texture) => texture.texture.destroy(),
            None => log::warn!("texture {:?} released twice", handle),
        }
        for unit in self.units.iter_mut() {
            if unit.as_ref().is_some_and(|(bound, _)| *bound == handle) {
                *unit = None;
            }
        }
    }
}
