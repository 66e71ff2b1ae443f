#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use still_life::{
    data_structures::mesh::MeshKind,
    resources::{DecodedImage, MeshProvider, TextureBackend},
    shader::{ShaderUniforms, Uniform, UniformValue},
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FakeTexture {
    pub(crate) handle: u32,
    pub(crate) label: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) channels: u8,
}

/// CPU-only texture backend. Handles count up from 1.
///
/// Releases are written to a shared log so tests can still read it after the
/// registry owning this backend has been dropped.
#[derive(Debug, Default)]
pub(crate) struct FakeTextures {
    pub(crate) created: Vec<FakeTexture>,
    pub(crate) units: HashMap<usize, u32>,
    pub(crate) released: Rc<RefCell<Vec<u32>>>,
}

impl FakeTextures {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn release_log(&self) -> Rc<RefCell<Vec<u32>>> {
        self.released.clone()
    }
}

impl TextureBackend for FakeTextures {
    type Handle = u32;

    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> u32 {
        let handle = self.created.len() as u32 + 1;
        self.created.push(FakeTexture {
            handle,
            label: label.to_string(),
            width: image.width,
            height: image.height,
            channels: image.channels,
        });
        handle
    }

    fn bind_texture(&mut self, slot: usize, handle: u32) {
        self.units.insert(slot, handle);
    }

    fn release_texture(&mut self, handle: u32) {
        let mut released = self.released.borrow_mut();
        assert!(
            !released.contains(&handle),
            "texture {} released twice",
            handle
        );
        released.push(handle);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Uniform(String, UniformValue),
    LoadMesh(MeshKind),
    Draw(MeshKind),
}

/// Records every uniform push and mesh call in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Vec<Call>,
}

impl RecordingRenderer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every value pushed to `name`, oldest first.
    pub(crate) fn values_of(&self, name: &str) -> Vec<UniformValue> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Uniform(n, v) if n == name => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn last_value(&self, name: &str) -> Option<UniformValue> {
        self.values_of(name).pop()
    }

    pub(crate) fn uniform_names(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Uniform(n, _) => Some(n.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn loads(&self) -> Vec<MeshKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::LoadMesh(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn draws(&self) -> Vec<MeshKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    /// Calls grouped per draw: everything since the previous draw, up to and
    /// including the draw itself.
    pub(crate) fn per_draw(&self) -> Vec<&[Call]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for (i, call) in self.calls.iter().enumerate() {
            if matches!(call, Call::Draw(_)) {
                groups.push(&self.calls[start..=i]);
                start = i + 1;
            }
        }
        groups
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
    }
}

impl ShaderUniforms for RecordingRenderer {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        self.calls.push(Call::Uniform(uniform.to_string(), value));
    }
}

impl MeshProvider for RecordingRenderer {
    fn load_mesh(&mut self, kind: MeshKind) {
        self.calls.push(Call::LoadMesh(kind));
    }

    fn draw_mesh(&mut self, kind: MeshKind) {
        self.calls.push(Call::Draw(kind));
    }
}

/// A temporary directory of generated test images, removed on drop.
pub(crate) struct TestAssets {
    dir: tempfile::TempDir,
}

impl TestAssets {
    pub(crate) fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create a temporary asset directory"),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn rgb_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 40) as u8, (y * 40) as u8, 128])
        })
        .save(&path)
        .expect("Failed to write RGB test image");
        path
    }

    pub(crate) fn rgba_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 200]))
            .save(&path)
            .expect("Failed to write RGBA test image");
        path
    }

    pub(crate) fn gray_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        image::GrayImage::from_pixel(width, height, image::Luma([90]))
            .save(&path)
            .expect("Failed to write grayscale test image");
        path
    }

    pub(crate) fn garbage(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"definitely not an image").expect("Failed to write file");
        path
    }
}
