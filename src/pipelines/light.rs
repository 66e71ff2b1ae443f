use cgmath::Vector3;
use wgpu::util::DeviceExt;

use crate::shader::{LightField, LightsUniform, ShaderUniforms, Uniform};

/// A point light of the Phong model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Exponent sharpening the specular highlight.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    /// Pushes all six uniforms of `lightSources[index]`.
    pub fn apply<S: ShaderUniforms + ?Sized>(&self, index: usize, shader: &mut S) {
        shader.set_vec3(Uniform::Light(index, LightField::Position), self.position);
        shader.set_vec3(Uniform::Light(index, LightField::AmbientColor), self.ambient_color);
        shader.set_vec3(Uniform::Light(index, LightField::DiffuseColor), self.diffuse_color);
        shader.set_vec3(Uniform::Light(index, LightField::SpecularColor), self.specular_color);
        shader.set_float(Uniform::Light(index, LightField::FocalStrength), self.focal_strength);
        shader.set_float(
            Uniform::Light(index, LightField::SpecularIntensity),
            self.specular_intensity,
        );
    }
}

/// GPU buffer and bind group holding the [`LightsUniform`] block.
#[derive(Debug)]
pub struct LightResources {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(device: &wgpu::Device, uniform: &LightsUniform) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, uniform: &LightsUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[*uniform]));
    }
}

pub fn mk_buffer(device: &wgpu::Device, uniform: &LightsUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Lights Buffer"),
        contents: bytemuck::cast_slice(&[*uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("lights_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
        label: Some("lights_bind_group"),
    })
}
