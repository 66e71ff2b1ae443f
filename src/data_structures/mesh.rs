//! Vertex layout and the geometry of the three primitive shapes.
//!
//! Shapes are generated in object space and sized so the scene table can
//! scale them directly:
//!
//! - `Plane`: 2x2 quad on the XZ plane centred on the origin, facing +Y
//! - `Cylinder`: radius 1 around the Y axis, from y = 0 to y = 1, capped
//! - `Torus`: ring of radius 1 in the XY plane with a tube radius of 0.1

use std::f32::consts::TAU;

/// Primitive mesh kinds the scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Cylinder,
    Torus,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Plane, MeshKind::Cylinder, MeshKind::Torus];
}

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for ModelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Indexed triangle list on the CPU, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

const CYLINDER_SEGMENTS: u32 = 36;
const TORUS_MAIN_SEGMENTS: u32 = 48;
const TORUS_TUBE_SEGMENTS: u32 = 24;
const TORUS_MAIN_RADIUS: f32 = 1.0;
const TORUS_TUBE_RADIUS: f32 = 0.1;

impl MeshData {
    pub fn for_kind(kind: MeshKind) -> Self {
        match kind {
            MeshKind::Plane => Self::plane(),
            MeshKind::Cylinder => Self::cylinder(CYLINDER_SEGMENTS),
            MeshKind::Torus => Self::torus(
                TORUS_MAIN_RADIUS,
                TORUS_TUBE_RADIUS,
                TORUS_MAIN_SEGMENTS,
                TORUS_TUBE_SEGMENTS,
            ),
        }
    }

    pub fn plane() -> Self {
        let up = [0.0, 1.0, 0.0];
        let vertices = vec![
            ModelVertex { position: [-1.0, 0.0, 1.0], tex_coords: [0.0, 0.0], normal: up },
            ModelVertex { position: [1.0, 0.0, 1.0], tex_coords: [1.0, 0.0], normal: up },
            ModelVertex { position: [1.0, 0.0, -1.0], tex_coords: [1.0, 1.0], normal: up },
            ModelVertex { position: [-1.0, 0.0, -1.0], tex_coords: [0.0, 1.0], normal: up },
        ];
        Self {
            vertices,
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    pub fn cylinder(segments: u32) -> Self {
        let segments = segments.max(3);
        let mut mesh = Self::default();

        // Side wall. The seam vertex is duplicated so u runs from 0 to 1.
        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let normal = [cos, 0.0, -sin];
            for y in [0.0, 1.0] {
                mesh.vertices.push(ModelVertex {
                    position: [cos, y, -sin],
                    tex_coords: [u, y],
                    normal,
                });
            }
        }
        for i in 0..segments {
            let bottom_a = i * 2;
            let top_a = bottom_a + 1;
            let bottom_b = bottom_a + 2;
            let top_b = bottom_a + 3;
            mesh.indices
                .extend_from_slice(&[bottom_a, bottom_b, top_b, bottom_a, top_b, top_a]);
        }

        mesh.push_cap(segments, 1.0, [0.0, 1.0, 0.0]);
        mesh.push_cap(segments, 0.0, [0.0, -1.0, 0.0]);
        mesh
    }

    fn push_cap(&mut self, segments: u32, y: f32, normal: [f32; 3]) {
        let center = self.vertices.len() as u32;
        self.vertices.push(ModelVertex {
            position: [0.0, y, 0.0],
            tex_coords: [0.5, 0.5],
            normal,
        });
        for i in 0..=segments {
            let (sin, cos) = (i as f32 / segments as f32 * TAU).sin_cos();
            self.vertices.push(ModelVertex {
                position: [cos, y, -sin],
                tex_coords: [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
                normal,
            });
        }
        let facing_up = normal[1] > 0.0;
        for i in 0..segments {
            let a = center + 1 + i;
            let b = a + 1;
            if facing_up {
                self.indices.extend_from_slice(&[center, a, b]);
            } else {
                self.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    pub fn torus(main_radius: f32, tube_radius: f32, main_segments: u32, tube_segments: u32) -> Self {
        let main_segments = main_segments.max(3);
        let tube_segments = tube_segments.max(3);
        let mut mesh = Self::default();

        for i in 0..=main_segments {
            let u = i as f32 / main_segments as f32;
            let (sin_u, cos_u) = (u * TAU).sin_cos();
            for j in 0..=tube_segments {
                let v = j as f32 / tube_segments as f32;
                let (sin_v, cos_v) = (v * TAU).sin_cos();
                let normal = [cos_v * cos_u, cos_v * sin_u, sin_v];
                mesh.vertices.push(ModelVertex {
                    position: [
                        main_radius * cos_u + tube_radius * normal[0],
                        main_radius * sin_u + tube_radius * normal[1],
                        tube_radius * normal[2],
                    ],
                    tex_coords: [u, v],
                    normal,
                });
            }
        }

        let ring = tube_segments + 1;
        for i in 0..main_segments {
            for j in 0..tube_segments {
                let a = i * ring + j;
                let b = (i + 1) * ring + j;
                let c = b + 1;
                let d = a + 1;
                mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
        mesh
    }
}
