use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::input::command_for_key;
use super::time::{FpsCounter, FrameClock};
use crate::renderer::{RenderState, SurfaceErrorAction};
use crate::settings::Settings;
use crate::sim::Sandbox;

/// Open the window and run the sandbox until it is closed
///
/// Fails before the first frame if settings are invalid, the windowing
/// system cannot start, or the window/GPU context cannot be created.
pub fn run(settings: Settings, seed: u64) -> Result<()> {
    settings.validate().context("invalid settings")?;

    let event_loop = EventLoop::new().context("failed to initialize windowing system")?;
    let mut app = SandboxApp::new(settings, seed);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Simulation context: everything the event callbacks touch
///
/// The window and renderer only exist between `resumed` and exit.
struct SandboxApp {
    settings: Settings,
    sandbox: Sandbox,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    clock: FrameClock,
    fps: FpsCounter,
    init_error: Option<anyhow::Error>,
}

impl SandboxApp {
    fn new(settings: Settings, seed: u64) -> Self {
        let sandbox = Sandbox::new(settings.sandbox.clone(), seed);
        log::info!(
            "Sandbox created with seed {} and {} shapes",
            seed,
            sandbox.len()
        );

        Self {
            settings,
            sandbox,
            window: None,
            renderer: None,
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            init_error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.settings.window_size();
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(RenderState::new(window.clone(), &self.settings))
            .context("failed to create rendering context")?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
        Ok(())
    }

    /// One tick: advance the simulation, report FPS, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let ft = self.clock.tick();
        self.sandbox.update(ft.dt);

        if let Some(report) = self.fps.record(ft.dt) {
            if self.settings.report_fps {
                log::info!(
                    "FPS: {} | Number of Shapes: {}",
                    report.frames,
                    self.sandbox.len()
                );
            }
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(err) = renderer.render(&self.sandbox) {
            match renderer.handle_surface_error(err.clone()) {
                SurfaceErrorAction::Reconfigured => log::debug!("surface reconfigured"),
                SurfaceErrorAction::SkipFrame => log::warn!("skipped frame: {err}"),
                SurfaceErrorAction::Fatal => {
                    log::error!("fatal surface error: {err}");
                    event_loop.exit();
                }
            }
        }
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_window(event_loop) {
            self.init_error = Some(err);
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        // Continuous redraw, paced by present
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(command) = command_for_key(event.physical_key, event.state) {
                    self.sandbox.apply(command);
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(renderer)) = (&self.window, self.renderer.as_mut()) {
                    renderer.resize(window.inner_size());
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }
}
