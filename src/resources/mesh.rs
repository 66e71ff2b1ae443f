use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::data_structures::mesh::{MeshData, MeshKind};

/// Loads shape geometry and issues draw calls for it.
///
/// `draw_mesh` uses whatever uniform state was set before it; it does not
/// take any object parameters itself.
pub trait MeshProvider {
    /// Uploads the geometry of `kind`. Loading an already loaded kind does
    /// nothing.
    fn load_mesh(&mut self, kind: MeshKind);

    fn draw_mesh(&mut self, kind: MeshKind);
}

/// Vertex and index buffers of one shape.
#[derive(Debug)]
pub struct GpuMesh {
    pub kind: MeshKind,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

/**
 * GPU copies of the primitive shapes. Only one instance of a shape is kept
 * no matter how many objects are drawn with it.
 */
#[derive(Debug)]
pub struct ShapeMeshes {
    device: wgpu::Device,
    meshes: HashMap<MeshKind, GpuMesh>,
}

impl ShapeMeshes {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            device: device.clone(),
            meshes: HashMap::new(),
        }
    }

    /// Returns `false` when `kind` was already loaded.
    pub fn load(&mut self, kind: MeshKind) -> bool {
        if self.meshes.contains_key(&kind) {
            log::debug!("{:?} mesh already loaded", kind);
            return false;
        }
        let data = MeshData::for_kind(kind);

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Vertex Buffer", kind)),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Index Buffer", kind)),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        self.meshes.insert(
            kind,
            GpuMesh {
                kind,
                vertex_buffer,
                index_buffer,
                num_elements: data.indices.len() as u32,
            },
        );
        true
    }

    pub fn get(&self, kind: MeshKind) -> Option<&GpuMesh> {
        self.meshes.get(&kind)
    }
}
