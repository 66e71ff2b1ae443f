use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{
    camera::{CameraResources, Projection},
    config::SceneConfig,
    data_structures::texture,
};

/// Window, device and the per-window resources every pass needs.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>, scene: &SceneConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("still-life device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The shader writes linear colours; an sRGB surface does the conversion.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface supports no formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let projection = Projection::new(
            config.width,
            config.height,
            cgmath::Deg(scene.camera.fovy_deg),
            0.1,
            100.0,
        );
        let camera = CameraResources::new(&device, &scene.camera, &projection);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let [r, g, b, a] = scene.clear_color;

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            clear_colour: wgpu::Color { r, g, b, a },
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Reconfigures the surface, depth buffer and projection. A zero sized
    /// window (minimised) is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.projection.resize(width, height);
        self.depth_texture =
            texture::Texture::create_depth_texture(&self.device, [width, height], "depth_texture");
    }
}
