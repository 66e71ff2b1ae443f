//! Scene preparation and the per-frame draw sequence.
//!
//! [`SceneDirector`] owns the texture and material registries. It prepares
//! them once, pushes the lights, uploads each mesh kind it needs, and then
//! redraws the same object table every frame through a
//! [`ShaderStateDispatcher`].

pub mod still_life;

use crate::{
    config::SceneConfig,
    data_structures::{
        material::MaterialRegistry,
        mesh::MeshKind,
        transform::Transform,
    },
    dispatch::ShaderStateDispatcher,
    pipelines::light::LightSource,
    resources::{
        mesh::MeshProvider,
        texture::{TextureBackend, TextureRegistry},
    },
    shader::{MAX_LIGHTS, ShaderUniforms, Uniform},
};

/// One drawable of the scene and the state bound before drawing it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    /// RGBA
    pub color: [f32; 4],
    pub texture: Option<String>,
    pub uv_scale: Option<(f32, f32)>,
    /// `None` keeps whatever material the previous object left behind.
    pub material: Option<String>,
    pub mesh: MeshKind,
}

pub struct SceneDirector<B: TextureBackend> {
    config: SceneConfig,
    textures: TextureRegistry<B>,
    materials: MaterialRegistry,
    lights: [LightSource; MAX_LIGHTS],
    objects: Vec<SceneObject>,
    prepared: bool,
}

impl<B: TextureBackend> SceneDirector<B> {
    /// The still life, with textures taken from `config`.
    pub fn new(config: SceneConfig, backend: B) -> Self {
        Self {
            config,
            textures: TextureRegistry::new(backend),
            materials: MaterialRegistry::new(),
            lights: still_life::lights(),
            objects: still_life::objects(),
            prepared: false,
        }
    }

    /// Replaces the object table.
    pub fn with_objects(mut self, objects: Vec<SceneObject>) -> Self {
        self.objects = objects;
        self
    }

    /// One-time setup: textures, materials, lights and meshes.
    ///
    /// A texture that fails to load is skipped; objects using it render with
    /// whatever texture unit state is left. Later calls do nothing until
    /// [`destroy`](Self::destroy) releases the textures.
    pub fn prepare_scene<R: ShaderUniforms + MeshProvider>(&mut self, renderer: &mut R) {
        if self.prepared {
            log::warn!("scene is already prepared, ignoring");
            return;
        }
        self.prepared = true;

        let mut loaded = 0;
        for source in &self.config.textures {
            let path = self.config.resolve(source);
            if self.textures.load_texture(path, &source.tag).is_ok() {
                loaded += 1;
            }
        }
        log::info!(
            "loaded {} of {} scene textures",
            loaded,
            self.config.textures.len()
        );
        self.textures.bind_all();

        if self.materials.is_empty() {
            self.materials = still_life::materials().into_iter().collect();
        }

        for (index, light) in self.lights.iter().enumerate() {
            light.apply(index, renderer);
        }
        renderer.set_bool(Uniform::UseLighting, true);

        let mut kinds: Vec<MeshKind> = Vec::new();
        for object in &self.objects {
            if !kinds.contains(&object.mesh) {
                kinds.push(object.mesh);
            }
        }
        for kind in kinds {
            renderer.load_mesh(kind);
        }
    }

    /// Pushes the state of every object and draws it, in table order.
    pub fn render_scene<R: ShaderUniforms + MeshProvider>(&self, renderer: &mut R) {
        let mut dispatcher = ShaderStateDispatcher::new(renderer, &self.textures, &self.materials);
        for object in &self.objects {
            dispatcher.set_transformations(&object.transform);
            let [r, g, b, a] = object.color;
            dispatcher.set_color(r, g, b, a);
            if let Some(tag) = &object.texture {
                if let Err(e) = dispatcher.set_texture(tag) {
                    log::warn!("{}: {}", object.name, e);
                }
            }
            if let Some((u, v)) = object.uv_scale {
                dispatcher.set_uv_scale(u, v);
            }
            if let Some(tag) = &object.material {
                if let Err(e) = dispatcher.set_material(tag) {
                    log::warn!("{}: {}", object.name, e);
                }
            }
            dispatcher.shader().draw_mesh(object.mesh);
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Releases every texture. Dropping the director does the same.
    pub fn destroy(&mut self) {
        self.textures.destroy();
        self.prepared = false;
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }
}
