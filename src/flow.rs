//! Application event loop.
//!
//! [`run`] opens the window and hands control to winit. The [`App`] handler
//! creates the GPU context on `resumed`, prepares the scene once, and then
//! redraws the still life on every `RedrawRequested`.
//!
//! # Lifecycle
//!
//! Each frame:
//! 1. Collect window/device events (camera input, resize, exit)
//! 2. Move the camera and upload its matrices
//! 3. Let the scene director push uniforms and record the draws
//! 4. Render the recorded draws and present the frame

use std::sync::Arc;

use instant::Instant;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::{
    config::SceneConfig,
    context::Context,
    render::SceneRenderer,
    resources::texture::GpuTextures,
    scene::SceneDirector,
};

/// Mouse deltas are scaled by this before they turn the camera.
const MOUSE_SPEED_FACTOR: f64 = 5.0;

struct AppState {
    director: SceneDirector<GpuTextures>,
    renderer: SceneRenderer,
    ctx: Context,
}

impl AppState {
    fn new(
        window: Arc<Window>,
        config: &SceneConfig,
        runtime: &tokio::runtime::Runtime,
    ) -> anyhow::Result<Self> {
        let ctx = runtime.block_on(Context::new(window, config))?;

        let textures = GpuTextures::new(&ctx.device, &ctx.queue);
        let mut renderer = SceneRenderer::new(&ctx, textures.layout());
        let mut director = SceneDirector::new(config.clone(), textures);
        director.prepare_scene(&mut renderer);

        Ok(Self {
            director,
            renderer,
            ctx,
        })
    }

    fn render(&mut self, dt: instant::Duration) -> Result<(), wgpu::SurfaceError> {
        self.ctx
            .camera
            .update(&self.ctx.queue, &mut self.ctx.projection, dt);
        self.director.render_scene(&mut self.renderer);
        self.renderer
            .draw_frame(&self.ctx, self.director.textures().backend())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: SceneConfig,
    state: Option<AppState>,
    mouse_look: bool,
    last_time: Instant,
}

impl App {
    pub fn new(config: SceneConfig, async_runtime: tokio::runtime::Runtime) -> Self {
        Self {
            async_runtime,
            config,
            state: None,
            mouse_look: false,
            last_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match AppState::new(window, &self.config, &self.async_runtime) {
            Ok(state) => {
                state.ctx.window().request_redraw();
                self.state = Some(state);
                self.last_time = Instant::now();
            }
            Err(e) => {
                log::error!("Unable to set up the scene: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.mouse_look {
                state
                    .ctx
                    .camera
                    .controller
                    .handle_mouse(dx * MOUSE_SPEED_FACTOR, dy * MOUSE_SPEED_FACTOR);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.ctx.camera.controller.handle_window_events(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => state.ctx.resize(size.width, size.height),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Right,
                ..
            } => self.mouse_look = button_state.is_pressed(),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                match state.render(dt) {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window().inner_size();
                        state.ctx.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
                state.ctx.window().request_redraw();
            }
            _ => {}
        }
    }
}

/// Opens the window and renders the scene described by `config` until the
/// window is closed.
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let async_runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, async_runtime);

    event_loop.run_app(&mut app)?;

    Ok(())
}
