use std::path::PathBuf;

use still_life::{
    SceneConfig,
    config::TextureSource,
    error::ConfigError,
};

use crate::common::test_utils::TestAssets;

mod common;

#[test]
fn should_describe_the_still_life_by_default() {
    let config = SceneConfig::default();
    let tags: Vec<&str> = config.textures.iter().map(|t| t.tag.as_str()).collect();

    assert_eq!(
        tags,
        vec![
            "Paper",
            "Table",
            "Metal_S",
            "Plastic_P",
            "Metal_T",
            "Bagel_B",
            "Candle_C",
            "Candle_L",
            "Mug_M",
            "Lblue_B",
            "White_Lid"
        ]
    );
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.camera.fovy_deg, 45.0);
}

#[test]
fn should_parse_partial_toml_with_defaults() {
    let config = SceneConfig::from_toml(
        r#"
        asset_root = "/srv/textures"

        [window]
        title = "Test"

        [[textures]]
        path = "wood.png"
        tag = "Table"
        "#,
    )
    .unwrap();

    assert_eq!(config.asset_root, PathBuf::from("/srv/textures"));
    assert_eq!(config.window.title, "Test");
    assert_eq!(config.window.height, 720);
    assert_eq!(config.textures, vec![TextureSource::new("wood.png", "Table")]);
    assert_eq!(config.camera, SceneConfig::default().camera);
}

#[test]
fn should_reject_malformed_toml() {
    let result = SceneConfig::from_toml("window = 3");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn should_report_missing_config_file() {
    let assets = TestAssets::new();

    let result = SceneConfig::load_from_file(assets.root().join("scene.toml"));

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn should_load_config_from_file() {
    let assets = TestAssets::new();
    let path = assets.root().join("scene.toml");
    let written = SceneConfig::default().with_asset_root("textures");
    std::fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

    let loaded = SceneConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded, written);
}

#[test]
fn should_resolve_relative_paths_against_asset_root() {
    let config = SceneConfig::default().with_asset_root("assets");
    let relative = TextureSource::new("WoodTab.jpg", "Table");
    let absolute_path = std::env::temp_dir().join("WoodTab.jpg");
    let absolute = TextureSource::new(absolute_path.clone(), "Table");

    assert_eq!(config.resolve(&relative), PathBuf::from("assets").join("WoodTab.jpg"));
    assert_eq!(config.resolve(&absolute), absolute_path);
}
