//! still-life
//!
//! Renders a static still-life scene (table, jar, napkin, bagel, candle, mug
//! and water bottle) built from three primitive meshes, image textures, a
//! material catalog and five Phong lights.
//!
//! The scene code talks to the GPU through two narrow seams: the name-keyed
//! uniform setters of [`shader::ShaderUniforms`] and the load/draw calls of
//! [`resources::MeshProvider`]. Everything above those seams runs without a
//! GPU, which is what the tests rely on.
//!
//! High-level modules
//! - `camera`: fly camera, projection and controller
//! - `config`: scene configuration loaded from TOML
//! - `context`: window, device, surface and depth buffer
//! - `data_structures`: transforms, materials, meshes and GPU textures
//! - `dispatch`: pushes per-object transform, colour, texture and material
//! - `error`: error types of the registries, dispatcher and config
//! - `flow`: the winit event loop
//! - `pipelines`: the scene pipeline, its WGSL shader and the light block
//! - `render`: records draws and replays them in one render pass
//! - `resources`: texture registry and mesh upload
//! - `scene`: scene preparation and the still-life object table
//! - `shader`: uniform names, values and the CPU-side uniform blocks
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod dispatch;
pub mod error;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod shader;

// Re-exports commonly used types for convenience in downstream code.
pub use config::SceneConfig;
pub use dispatch::ShaderStateDispatcher;
pub use error::{TagNotFound, TextureError};
pub use flow::run;
pub use scene::{SceneDirector, SceneObject};
