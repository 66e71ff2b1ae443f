//! The uniform interface between the scene code and the shader.
//!
//! Scene code never spells a uniform name itself. It picks a [`Uniform`],
//! whose `Display` impl yields the wire name the shader program knows it by
//! (`model`, `bUseTexture`, `lightSources[2].position`, ...), and hands it to a
//! [`ShaderUniforms`] implementation together with a [`UniformValue`].
//!
//! - [`ShaderProgram`] is the GPU-side implementation: it keeps the values in
//!   `Pod` structs laid out like the WGSL uniform blocks in `scene.wgsl`.
//! - Tests implement the trait with a recorder to observe what was pushed.

use std::fmt;

pub mod program;

pub use program::{LightUniform, LightsUniform, ObjectUniform, ShaderProgram};

/// Number of light sources the shader reads.
pub const MAX_LIGHTS: usize = 5;

/// A per-material uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialField {
    AmbientColor,
    AmbientStrength,
    DiffuseColor,
    SpecularColor,
    Shininess,
}

impl MaterialField {
    pub const ALL: [MaterialField; 5] = [
        MaterialField::AmbientColor,
        MaterialField::AmbientStrength,
        MaterialField::DiffuseColor,
        MaterialField::SpecularColor,
        MaterialField::Shininess,
    ];

    fn name(self) -> &'static str {
        match self {
            MaterialField::AmbientColor => "ambientColor",
            MaterialField::AmbientStrength => "ambientStrength",
            MaterialField::DiffuseColor => "diffuseColor",
            MaterialField::SpecularColor => "specularColor",
            MaterialField::Shininess => "shininess",
        }
    }
}

/// A per-light uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightField {
    Position,
    AmbientColor,
    DiffuseColor,
    SpecularColor,
    FocalStrength,
    SpecularIntensity,
}

impl LightField {
    fn name(self) -> &'static str {
        match self {
            LightField::Position => "position",
            LightField::AmbientColor => "ambientColor",
            LightField::DiffuseColor => "diffuseColor",
            LightField::SpecularColor => "specularColor",
            LightField::FocalStrength => "focalStrength",
            LightField::SpecularIntensity => "specularIntensity",
        }
    }
}

/// Logical uniform roles. Renaming a wire name here is a breaking change for
/// every shader that consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    Model,
    ObjectColor,
    ObjectTexture,
    UseTexture,
    UseLighting,
    UvScale,
    Material(MaterialField),
    /// Light index, then field.
    Light(usize, LightField),
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uniform::Model => f.write_str("model"),
            Uniform::ObjectColor => f.write_str("objectColor"),
            Uniform::ObjectTexture => f.write_str("objectTexture"),
            Uniform::UseTexture => f.write_str("bUseTexture"),
            Uniform::UseLighting => f.write_str("bUseLighting"),
            Uniform::UvScale => f.write_str("UVscale"),
            Uniform::Material(field) => write!(f, "material.{}", field.name()),
            Uniform::Light(index, field) => write!(f, "lightSources[{}].{}", index, field.name()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([[f32; 4]; 4]),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Ints and bools both travel as ints, like a GLSL `bool` uniform.
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            UniformValue::Int(v) => Some(v),
            UniformValue::Bool(v) => Some(v as i32),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match *self {
            UniformValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match *self {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<[f32; 4]> {
        match *self {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<[[f32; 4]; 4]> {
        match *self {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }
}

/// Name-keyed uniform setters of the active shader program.
///
/// Implementors only provide [`set_uniform`](Self::set_uniform); the typed
/// helpers wrap their argument into the matching [`UniformValue`].
pub trait ShaderUniforms {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue);

    fn set_float(&mut self, uniform: Uniform, value: f32) {
        self.set_uniform(uniform, UniformValue::Float(value));
    }

    fn set_int(&mut self, uniform: Uniform, value: i32) {
        self.set_uniform(uniform, UniformValue::Int(value));
    }

    fn set_bool(&mut self, uniform: Uniform, value: bool) {
        self.set_uniform(uniform, UniformValue::Bool(value));
    }

    /// Selects the texture unit a sampler reads from. `-1` selects nothing.
    fn set_sampler(&mut self, uniform: Uniform, slot: i32) {
        self.set_uniform(uniform, UniformValue::Int(slot));
    }

    fn set_vec2(&mut self, uniform: Uniform, value: cgmath::Vector2<f32>) {
        self.set_uniform(uniform, UniformValue::Vec2(value.into()));
    }

    fn set_vec3(&mut self, uniform: Uniform, value: cgmath::Vector3<f32>) {
        self.set_uniform(uniform, UniformValue::Vec3(value.into()));
    }

    fn set_vec4(&mut self, uniform: Uniform, value: cgmath::Vector4<f32>) {
        self.set_uniform(uniform, UniformValue::Vec4(value.into()));
    }

    fn set_mat4(&mut self, uniform: Uniform, value: cgmath::Matrix4<f32>) {
        self.set_uniform(uniform, UniformValue::Mat4(value.into()));
    }
}
