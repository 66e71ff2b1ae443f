//! CPU-side mirror of the uniform blocks declared in `scene.wgsl`.
//!
//! wgpu has no per-name uniform setters, so [`ShaderProgram`] keeps the
//! current value of every uniform in two `Pod` structs. The renderer copies
//! [`ObjectUniform`] once per draw call and uploads [`LightsUniform`] once per
//! frame.

use cgmath::{Matrix, SquareMatrix};

use crate::shader::{LightField, MAX_LIGHTS, MaterialField, ShaderUniforms, Uniform, UniformValue};

/// Per-draw uniform block (`@group(1)` in the shader).
///
/// Field order and padding follow the WGSL uniform layout rules: every
/// `vec3` starts on a 16 byte boundary and is followed by a scalar that fills
/// the remaining 4 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    // mat3x3 columns are padded to vec4 in uniform buffers
    pub normal: [[f32; 4]; 3],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: i32,
    pub texture_slot: i32,
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    pub shininess: f32,
    pub specular_color: [f32; 3],
    pub use_lighting: i32,
}

impl Default for ObjectUniform {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = cgmath::Matrix4::identity().into();
        Self {
            model: identity,
            normal: [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
            object_color: [1.0; 4],
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            texture_slot: -1,
            ambient_color: [1.0; 3],
            ambient_strength: 0.1,
            diffuse_color: [1.0; 3],
            shininess: 32.0,
            specular_color: [0.5; 3],
            use_lighting: 0,
        }
    }
}

/// One entry of `lightSources` in the shader.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding: u32,
    pub specular_color: [f32; 3],
    pub _padding2: u32,
}

/// The whole light block (`@group(2)` in the shader).
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightUniform; MAX_LIGHTS],
}

/// Current uniform state of the scene shader.
#[derive(Debug, Default, Clone)]
pub struct ShaderProgram {
    pub object: ObjectUniform,
    pub lights: LightsUniform,
    lights_dirty: bool,
}

impl ShaderProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once after any light uniform changed.
    pub fn take_lights_dirty(&mut self) -> bool {
        std::mem::take(&mut self.lights_dirty)
    }

    fn set_model(&mut self, model: [[f32; 4]; 4]) {
        self.object.model = model;
        let m = cgmath::Matrix4::from(model);
        let upper = cgmath::Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
        // Inverse transpose keeps normals perpendicular under non-uniform scale.
        let normal = upper.invert().map(|inv| inv.transpose()).unwrap_or(upper);
        self.object.normal = [
            normal.x.extend(0.0).into(),
            normal.y.extend(0.0).into(),
            normal.z.extend(0.0).into(),
        ];
    }

    fn set_material(&mut self, field: MaterialField, value: UniformValue) -> Option<()> {
        match field {
            MaterialField::AmbientColor => self.object.ambient_color = value.as_vec3()?,
            MaterialField::AmbientStrength => self.object.ambient_strength = value.as_float()?,
            MaterialField::DiffuseColor => self.object.diffuse_color = value.as_vec3()?,
            MaterialField::SpecularColor => self.object.specular_color = value.as_vec3()?,
            MaterialField::Shininess => self.object.shininess = value.as_float()?,
        }
        Some(())
    }

    fn set_light(&mut self, index: usize, field: LightField, value: UniformValue) -> Option<()> {
        let light = self.lights.lights.get_mut(index)?;
        match field {
            LightField::Position => light.position = value.as_vec3()?,
            LightField::AmbientColor => light.ambient_color = value.as_vec3()?,
            LightField::DiffuseColor => light.diffuse_color = value.as_vec3()?,
            LightField::SpecularColor => light.specular_color = value.as_vec3()?,
            LightField::FocalStrength => light.focal_strength = value.as_float()?,
            LightField::SpecularIntensity => light.specular_intensity = value.as_float()?,
        }
        self.lights_dirty = true;
        Some(())
    }
}

impl ShaderUniforms for ShaderProgram {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        let applied = match uniform {
            Uniform::Model => value.as_mat4().map(|m| self.set_model(m)),
            Uniform::ObjectColor => value.as_vec4().map(|c| self.object.object_color = c),
            Uniform::ObjectTexture => value.as_int().map(|s| self.object.texture_slot = s),
            Uniform::UseTexture => value.as_int().map(|b| self.object.use_texture = b),
            Uniform::UseLighting => value.as_int().map(|b| self.object.use_lighting = b),
            Uniform::UvScale => value.as_vec2().map(|uv| self.object.uv_scale = uv),
            Uniform::Material(field) => self.set_material(field, value),
            Uniform::Light(index, field) => self.set_light(index, field, value),
        };
        if applied.is_none() {
            log::warn!("uniform {} ignored value {:?}", uniform, value);
        }
    }
}
