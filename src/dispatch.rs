//! Per-draw shader state.
//!
//! [`ShaderStateDispatcher`] turns scene-level requests ("use the Table
//! texture", "this is steel") into uniform pushes. It holds no state of its
//! own; whatever it pushed stays in the shader until overwritten.
//!
//! Before each draw the caller is expected to push, in order, the transform,
//! a colour or a texture, optionally a UV scale, and a material.

use cgmath::{Vector2, Vector4};

use crate::{
    data_structures::{material::MaterialRegistry, transform::Transform},
    error::TagNotFound,
    resources::texture::{TextureBackend, TextureRegistry},
    shader::{MaterialField, ShaderUniforms, Uniform},
};

pub struct ShaderStateDispatcher<'a, S: ShaderUniforms, B: TextureBackend> {
    shader: &'a mut S,
    textures: &'a TextureRegistry<B>,
    materials: &'a MaterialRegistry,
}

impl<'a, S: ShaderUniforms, B: TextureBackend> ShaderStateDispatcher<'a, S, B> {
    pub fn new(
        shader: &'a mut S,
        textures: &'a TextureRegistry<B>,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self {
            shader,
            textures,
            materials,
        }
    }

    /// Pushes the model matrix of `transform`.
    pub fn set_transformations(&mut self, transform: &Transform) {
        self.shader.set_mat4(Uniform::Model, transform.to_matrix());
    }

    /// Pushes a flat colour and switches texture sampling off.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.shader.set_bool(Uniform::UseTexture, false);
        self.shader
            .set_vec4(Uniform::ObjectColor, Vector4::new(r, g, b, a));
    }

    /// Switches texture sampling on and selects the unit holding `tag`.
    ///
    /// An unknown tag selects unit `-1`, which samples nothing useful.
    pub fn set_texture(&mut self, tag: &str) -> Result<(), TagNotFound> {
        self.shader.set_bool(Uniform::UseTexture, true);
        let slot = self.textures.find_slot(tag);
        self.shader.set_sampler(
            Uniform::ObjectTexture,
            slot.map_or(-1, |slot| slot as i32),
        );
        slot.map(|_| ()).ok_or_else(|| TagNotFound::texture(tag))
    }

    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(Uniform::UvScale, Vector2::new(u, v));
    }

    /// Pushes the five material uniforms of `tag`.
    ///
    /// Does nothing while no material is defined. An unknown tag pushes
    /// nothing either, so the previous material stays in effect.
    pub fn set_material(&mut self, tag: &str) -> Result<(), TagNotFound> {
        if self.materials.is_empty() {
            return Ok(());
        }
        let material = self
            .materials
            .find_material(tag)
            .ok_or_else(|| TagNotFound::material(tag))?;

        self.shader.set_vec3(
            Uniform::Material(MaterialField::AmbientColor),
            material.ambient_color,
        );
        self.shader.set_float(
            Uniform::Material(MaterialField::AmbientStrength),
            material.ambient_strength,
        );
        self.shader.set_vec3(
            Uniform::Material(MaterialField::DiffuseColor),
            material.diffuse_color,
        );
        self.shader.set_vec3(
            Uniform::Material(MaterialField::SpecularColor),
            material.specular_color,
        );
        self.shader
            .set_float(Uniform::Material(MaterialField::Shininess), material.shininess);
        Ok(())
    }

    /// Direct access to the shader, e.g. to issue the draw afterwards.
    pub fn shader(&mut self) -> &mut S {
        self.shader
    }
}
