//! Error types shared by the registries and the dispatcher.

use std::{fmt, path::PathBuf};

/// Why a texture could not be added to the registry.
///
/// Neither variant leaves anything behind: the registry is unchanged and no
/// GPU resource exists for the failed image.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    /// The file could not be read or decoded.
    #[error("could not load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded fine but is neither RGB nor RGBA.
    #[error("image {} has {channels} channels, only RGB and RGBA are supported", path.display())]
    UnsupportedFormat { path: PathBuf, channels: u8 },
}

/// Which registry a tag lookup went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Texture,
    Material,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Texture => f.write_str("texture"),
            TagKind::Material => f.write_str("material"),
        }
    }
}

/// A tag was looked up that was never registered.
///
/// Returned after the dispatcher has already applied its fallback (slot `-1`
/// for textures, untouched uniforms for materials), so callers may log and
/// carry on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no {kind} registered under tag \"{tag}\"")]
pub struct TagNotFound {
    pub kind: TagKind,
    pub tag: String,
}

impl TagNotFound {
    pub fn texture(tag: &str) -> Self {
        Self {
            kind: TagKind::Texture,
            tag: tag.to_string(),
        }
    }

    pub fn material(tag: &str) -> Self {
        Self {
            kind: TagKind::Material,
            tag: tag.to_string(),
        }
    }
}

/// Errors while reading a [`SceneConfig`](crate::config::SceneConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
