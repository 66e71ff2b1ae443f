//! Scene rendering on wgpu.
//!
//! The scene code drives the renderer like an immediate-mode shader program:
//! it sets uniforms, then asks for a mesh to be drawn. [`SceneRenderer`]
//! turns that into a deferred frame. Every `draw_mesh` records a
//! [`DrawCommand`] holding a copy of the current per-object uniform block;
//! [`SceneRenderer::draw_frame`] uploads all copies into one uniform buffer and
//! replays the draws with dynamic offsets into it.
//!
//! # Key types
//!
//! - [`SceneRenderer`] implements [`ShaderUniforms`] and [`MeshProvider`]
//! - [`DrawCommand`] is one recorded draw: a mesh kind and its uniforms

use std::{iter, num::NonZeroU64};

use crate::{
    context::Context,
    data_structures::mesh::MeshKind,
    pipelines::{basic::mk_scene_pipeline, light::LightResources},
    resources::{
        mesh::{MeshProvider, ShapeMeshes},
        texture::GpuTextures,
    },
    shader::{ObjectUniform, ShaderProgram, ShaderUniforms, Uniform, UniformValue},
};

const OBJECT_UNIFORM_SIZE: u64 = std::mem::size_of::<ObjectUniform>() as u64;

/// Initial number of draws the object buffer holds before it grows.
const INITIAL_DRAW_CAPACITY: usize = 16;

/// A draw recorded during the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: MeshKind,
    pub object: ObjectUniform,
}

impl DrawCommand {
    /// Texture unit to bind, `-1` when the draw samples no texture.
    pub fn texture_unit(&self) -> i32 {
        if self.object.use_texture != 0 {
            self.object.texture_slot
        } else {
            -1
        }
    }
}

pub struct SceneRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    program: ShaderProgram,
    meshes: ShapeMeshes,
    draws: Vec<DrawCommand>,
    pipeline: wgpu::RenderPipeline,
    object_layout: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    object_capacity: usize,
    object_stride: u64,
    lights: LightResources,
}

impl SceneRenderer {
    pub fn new(ctx: &Context, texture_layout: &wgpu::BindGroupLayout) -> Self {
        let device = ctx.device.clone();
        let program = ShaderProgram::new();

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let object_stride = OBJECT_UNIFORM_SIZE.div_ceil(alignment) * alignment;
        let object_layout = mk_object_bind_group_layout(&device);
        let (object_buffer, object_bind_group) = mk_object_buffer(
            &device,
            &object_layout,
            INITIAL_DRAW_CAPACITY as u64 * object_stride,
        );

        let lights = LightResources::new(&device, &program.lights);
        let pipeline = mk_scene_pipeline(
            &device,
            &ctx.config,
            &ctx.camera.bind_group_layout,
            &object_layout,
            &lights.bind_group_layout,
            texture_layout,
        );

        Self {
            meshes: ShapeMeshes::new(&device),
            queue: ctx.queue.clone(),
            device,
            program,
            draws: Vec::new(),
            pipeline,
            object_layout,
            object_buffer,
            object_bind_group,
            object_capacity: INITIAL_DRAW_CAPACITY,
            object_stride,
            lights,
        }
    }

    /// Renders every draw recorded since the last call and presents the frame.
    ///
    /// The recorded draws are consumed even when the surface is unavailable.
    pub fn draw_frame(
        &mut self,
        ctx: &Context,
        textures: &GpuTextures,
    ) -> Result<(), wgpu::SurfaceError> {
        let draws = std::mem::take(&mut self.draws);

        if self.program.take_lights_dirty() {
            self.lights.write(&self.queue, &self.program.lights);
        }
        self.upload_objects(&draws);

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
            render_pass.set_bind_group(2, &self.lights.bind_group, &[]);

            for (i, draw) in draws.iter().enumerate() {
                let Some(mesh) = self.meshes.get(draw.kind) else {
                    continue;
                };
                let offset = (i as u64 * self.object_stride) as u32;
                render_pass.set_bind_group(1, &self.object_bind_group, &[offset]);
                render_pass.set_bind_group(3, textures.unit(draw.texture_unit()), &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.num_elements, 0, 0..1);
            }
        }

        self.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Writes one uniform slot per draw, growing the buffer when needed.
    fn upload_objects(&mut self, draws: &[DrawCommand]) {
        if draws.is_empty() {
            return;
        }
        if draws.len() > self.object_capacity {
            self.object_capacity = draws.len().next_power_of_two();
            log::debug!("growing object uniform buffer to {} draws", self.object_capacity);
            let (buffer, bind_group) = mk_object_buffer(
                &self.device,
                &self.object_layout,
                self.object_capacity as u64 * self.object_stride,
            );
            self.object_buffer = buffer;
            self.object_bind_group = bind_group;
        }

        let stride = self.object_stride as usize;
        let mut bytes = vec![0u8; draws.len() * stride];
        for (slot, draw) in bytes.chunks_exact_mut(stride).zip(draws) {
            let object = bytemuck::bytes_of(&draw.object);
            slot[..object.len()].copy_from_slice(object);
        }
        self.queue.write_buffer(&self.object_buffer, 0, &bytes);
    }
}

impl ShaderUniforms for SceneRenderer {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        self.program.set_uniform(uniform, value);
    }
}

impl MeshProvider for SceneRenderer {
    fn load_mesh(&mut self, kind: MeshKind) {
        self.meshes.load(kind);
    }

    fn draw_mesh(&mut self, kind: MeshKind) {
        if self.meshes.get(kind).is_none() {
            log::warn!("{:?} mesh drawn before it was loaded, skipping", kind);
            return;
        }
        self.draws.push(DrawCommand {
            kind,
            object: self.program.object,
        });
    }
}

fn mk_object_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: NonZeroU64::new(OBJECT_UNIFORM_SIZE),
            },
            count: None,
        }],
        label: Some("object_bind_group_layout"),
    })
}

fn mk_object_buffer(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    size: u64,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Object Uniform Buffer"),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: NonZeroU64::new(OBJECT_UNIFORM_SIZE),
            }),
        }],
        label: Some("object_bind_group"),
    });
    (buffer, bind_group)
}
