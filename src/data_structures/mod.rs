//! Scene data types: transforms, materials, meshes and textures.
//!
//! - `transform` composes model matrices from scale, rotation and position
//! - `material` holds the named material catalog
//! - `mesh` contains the vertex layout and the primitive shape generators
//! - `texture` contains the GPU texture wrapper and creation utilities

pub mod material;
pub mod mesh;
pub mod texture;
pub mod transform;
