//! Named material property sets.

use std::collections::HashMap;

use cgmath::Vector3;

/// Surface response of an object to the scene lights.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        ambient_color: impl Into<Vector3<f32>>,
        ambient_strength: f32,
        diffuse_color: impl Into<Vector3<f32>>,
        specular_color: impl Into<Vector3<f32>>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            ambient_color: ambient_color.into(),
            ambient_strength,
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            shininess,
        }
    }
}

/// Write-once catalog of materials, looked up by tag.
///
/// Definitions are kept in order. A tag defined twice keeps resolving to its
/// first definition.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    by_tag: HashMap<String, usize>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_material(&mut self, material: Material) {
        let index = self.materials.len();
        if self.by_tag.contains_key(&material.tag) {
            log::warn!(
                "material tag \"{}\" defined twice, lookups keep returning the first one",
                material.tag
            );
        } else {
            self.by_tag.insert(material.tag.clone(), index);
        }
        self.materials.push(material);
    }

    pub fn find_material(&self, tag: &str) -> Option<&Material> {
        self.by_tag.get(tag).map(|&index| &self.materials[index])
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

impl FromIterator<Material> for MaterialRegistry {
    fn from_iter<T: IntoIterator<Item = Material>>(iter: T) -> Self {
        let mut registry = Self::new();
        iter.into_iter().for_each(|m| registry.define_material(m));
        registry
    }
}
