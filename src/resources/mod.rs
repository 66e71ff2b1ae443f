/**
 * This module contains all logic for getting textures and shape geometry onto the GPU.
 */
pub mod mesh;
pub mod texture;

pub use mesh::{MeshProvider, ShapeMeshes};
pub use texture::{
    DecodedImage, GpuTextures, TextureBackend, TextureHandle, TextureRegistry, decode_image,
};
