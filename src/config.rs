//! Scene configuration.
//!
//! Everything that used to be baked into the scene as absolute file paths is
//! read from a TOML file instead: where the textures live, which file maps to
//! which tag, the window and the starting camera. [`SceneConfig::default`]
//! describes the still life with paths relative to `./assets`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One texture to load during scene preparation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureSource {
    /// File path, relative to [`SceneConfig::asset_root`] unless absolute.
    pub path: PathBuf,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Still Life".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Starting pose and controls of the fly camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub fovy_deg: f32,
    /// Units per second.
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 7.0, 14.0],
            yaw_deg: -90.0,
            pitch_deg: -25.0,
            fovy_deg: 45.0,
            speed: 6.0,
            sensitivity: 0.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub asset_root: PathBuf,
    pub clear_color: [f64; 4],
    pub window: WindowConfig,
    pub camera: CameraConfig,
    /// Loaded in this order, which also fixes each texture's slot.
    pub textures: Vec<TextureSource>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            clear_color: [0.05, 0.05, 0.08, 1.0],
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            textures: vec![
                TextureSource::new("PPAPER.jpg", "Paper"),
                TextureSource::new("WoodTab.jpg", "Table"),
                TextureSource::new("Metalstainless.jpg", "Metal_S"),
                TextureSource::new("PlasticGray.jpg", "Plastic_P"),
                TextureSource::new("Metal_T.jpg", "Metal_T"),
                TextureSource::new("Bagel01.jpg", "Bagel_B"),
                TextureSource::new("Candle.jpg", "Candle_C"),
                TextureSource::new("Candle_L.jpg", "Candle_L"),
                TextureSource::new("Mug_M.jpg", "Mug_M"),
                TextureSource::new("Lblue_B.jpg", "Lblue_B"),
                TextureSource::new("White_Lid.jpg", "White_Lid"),
            ],
        }
    }
}

impl SceneConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Where `source` lives on disk. Absolute paths are kept as they are.
    pub fn resolve(&self, source: &TextureSource) -> PathBuf {
        if source.path.is_absolute() {
            source.path.clone()
        } else {
            self.asset_root.join(&source.path)
        }
    }

    /// Same config, with relative texture paths now resolved against `root`.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }
}
