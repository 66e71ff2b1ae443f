use still_life::{
    TextureError,
    resources::{DecodedImage, TextureRegistry, decode_image},
};

use crate::common::test_utils::{FakeTextures, TestAssets};

mod common;

#[test]
fn should_register_rgb_and_rgba_images() {
    let assets = TestAssets::new();
    let mut registry = TextureRegistry::new(FakeTextures::new());

    registry
        .load_texture(assets.rgb_png("wood.png", 4, 2), "Table")
        .expect("RGB image should load");
    registry
        .load_texture(assets.rgba_png("steel.png", 2, 2), "Metal_S")
        .expect("RGBA image should load");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find_handle("Table"), Some(1));
    assert_eq!(registry.find_handle("Metal_S"), Some(2));
    assert_eq!(registry.find_slot("Table"), Some(0));
    assert_eq!(registry.find_slot("Metal_S"), Some(1));

    let created = &registry.backend().created;
    assert_eq!(created[0].channels, 3);
    assert_eq!((created[0].width, created[0].height), (4, 2));
    assert_eq!(created[1].channels, 4);
}

#[test]
fn should_reject_unsupported_channel_count() {
    let assets = TestAssets::new();
    let mut registry = TextureRegistry::new(FakeTextures::new());
    registry
        .load_texture(assets.rgb_png("wood.png", 2, 2), "Table")
        .unwrap();

    let result = registry.load_texture(assets.gray_png("gray.png", 2, 2), "Gray");

    assert!(matches!(
        result,
        Err(TextureError::UnsupportedFormat { channels: 1, .. })
    ));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_slot("Gray"), None);
    // no GPU texture was created for the rejected image
    assert_eq!(registry.backend().created.len(), 1);
}

#[test]
fn should_report_missing_and_undecodable_files() {
    let assets = TestAssets::new();
    let mut registry = TextureRegistry::new(FakeTextures::new());

    let missing = registry.load_texture(assets.root().join("nope.png"), "Missing");
    let garbage = registry.load_texture(assets.garbage("broken.png"), "Broken");

    assert!(matches!(missing, Err(TextureError::ImageLoad { .. })));
    assert!(matches!(garbage, Err(TextureError::ImageLoad { .. })));
    assert!(registry.is_empty());
}

#[test]
fn should_return_none_for_unknown_tags() {
    let registry = TextureRegistry::new(FakeTextures::new());

    assert_eq!(registry.find_handle("Unknown"), None);
    assert_eq!(registry.find_slot("Unknown"), None);
}

#[test]
fn should_bind_each_texture_to_its_registration_slot() {
    let assets = TestAssets::new();
    let mut registry = TextureRegistry::new(FakeTextures::new());
    registry
        .load_texture(assets.rgb_png("table.png", 2, 2), "Table")
        .unwrap();
    registry
        .load_texture(assets.rgb_png("steel.png", 2, 2), "Metal_S")
        .unwrap();

    registry.bind_all();

    let units = &registry.backend().units;
    assert_eq!(units.get(&0).copied(), registry.find_handle("Table"));
    assert_eq!(units.get(&1).copied(), registry.find_handle("Metal_S"));
}

#[test]
fn should_resolve_duplicate_tags_to_the_first_registration() {
    let assets = TestAssets::new();
    let mut registry = TextureRegistry::new(FakeTextures::new());
    registry
        .load_texture(assets.rgb_png("a.png", 2, 2), "Twice")
        .unwrap();
    registry
        .load_texture(assets.rgb_png("b.png", 2, 2), "Twice")
        .unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find_slot("Twice"), Some(0));
    assert_eq!(registry.find_handle("Twice"), Some(1));
    let entries: Vec<(&str, u32)> = registry
        .iter()
        .map(|entry| (entry.tag.as_str(), entry.handle))
        .collect();
    assert_eq!(entries, vec![("Twice", 1), ("Twice", 2)]);
}

#[test]
fn should_keep_registering_past_the_unit_limit() {
    let mut registry = TextureRegistry::new(FakeTextures::new());
    for i in 0..20 {
        let image = DecodedImage {
            source: format!("texture_{}.png", i).into(),
            width: 1,
            height: 1,
            channels: 3,
            pixels: vec![0, 0, 0],
        };
        registry.register_image(image, &format!("T{}", i)).unwrap();
    }

    assert_eq!(registry.len(), 20);
    assert_eq!(registry.find_slot("T19"), Some(19));
}

#[test]
fn should_release_every_texture_exactly_once() {
    let assets = TestAssets::new();
    let backend = FakeTextures::new();
    let released = backend.release_log();
    let mut registry = TextureRegistry::new(backend);
    registry
        .load_texture(assets.rgb_png("a.png", 2, 2), "A")
        .unwrap();
    registry
        .load_texture(assets.rgb_png("b.png", 2, 2), "B")
        .unwrap();

    registry.destroy();
    assert_eq!(*released.borrow(), vec![1, 2]);
    assert!(registry.is_empty());
    assert_eq!(registry.find_handle("A"), None);

    // dropping after an explicit destroy releases nothing more
    drop(registry);
    assert_eq!(released.borrow().len(), 2);
}

#[test]
fn should_release_on_drop() {
    let assets = TestAssets::new();
    let backend = FakeTextures::new();
    let released = backend.release_log();
    {
        let mut registry = TextureRegistry::new(backend);
        registry
            .load_texture(assets.rgba_png("a.png", 2, 2), "A")
            .unwrap();
    }

    assert_eq!(*released.borrow(), vec![1]);
}

#[test]
fn should_flip_decoded_images_vertically() {
    let assets = TestAssets::new();
    let path = assets.root().join("rows.png");
    // top row red, bottom row blue
    image::RgbImage::from_fn(1, 2, |_, y| {
        if y == 0 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    })
    .save(&path)
    .unwrap();

    let decoded = decode_image(&path).unwrap();

    assert_eq!(decoded.channels, 3);
    assert_eq!(&decoded.pixels[0..3], &[0, 0, 255]);
    assert_eq!(&decoded.pixels[3..6], &[255, 0, 0]);
}

#[test]
fn should_expand_rgb_to_opaque_rgba() {
    let image = DecodedImage {
        source: "px.png".into(),
        width: 2,
        height: 1,
        channels: 3,
        pixels: vec![1, 2, 3, 4, 5, 6],
    };

    let rgba = image.to_rgba();

    assert_eq!(rgba.as_raw(), &vec![1, 2, 3, 255, 4, 5, 6, 255]);
}
