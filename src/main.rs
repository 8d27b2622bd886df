use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window},
};

use escaperoom::{
    logging, ui,
    controller::{FrameClock, FrameLoopContext, FrameOutput, InputEvent, ReleaseOutcome},
    view::{self, render, FrontendError, GpuContext, HudFrame, WindowSettings},
};

/// HUD keeps this many recent notices
const MAX_NOTICES: usize = 4;

struct App {
    window: Arc<Window>,
    gpu: GpuContext,

    // egui
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,

    // Game state
    frame_loop: FrameLoopContext,
    last_output: Option<FrameOutput>,
    notices: Vec<String>,

    // Input handling
    pointer_locked: bool,

    // Frame timing
    clock: FrameClock,
    started: Instant,
    fps: f32,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    async fn new(window: Arc<Window>) -> Result<Self, FrontendError> {
        let size = window.inner_size();
        let gpu = GpuContext::new_native(window.clone()).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            window,
            gpu,
            egui_renderer,
            egui_state,
            egui_ctx,
            frame_loop: FrameLoopContext::new(size.width, size.height),
            last_output: None,
            notices: Vec::new(),
            pointer_locked: false,
            clock: FrameClock::new(),
            started: Instant::now(),
            fps: 0.0,
            frame_count: 0,
            fps_timer: 0.0,
        })
    }

    fn set_pointer_locked(&mut self, locked: bool) {
        if locked {
            let grabbed = self
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                warn!(error = %e, "could not grab cursor");
                return;
            }
        } else if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            warn!(error = %e, "could not release cursor");
        }
        self.window.set_cursor_visible(!locked);
        self.pointer_locked = locked;
        self.frame_loop.input_state.reset_cursor();
    }

    /// Returns true if the event was consumed
    fn input(&mut self, event: &WindowEvent) -> bool {
        // First let egui process the event
        if self.egui_state.on_window_event(self.window.as_ref(), event).consumed {
            return true;
        }

        match event {
            WindowEvent::KeyboardInput { event: KeyEvent { state, physical_key, .. }, .. } => {
                if let PhysicalKey::Code(code) = physical_key {
                    if let Some(name) = view::key_name(*code) {
                        let name = name.to_string();
                        self.frame_loop.handle_event(&match state {
                            ElementState::Pressed => InputEvent::KeyDown(name),
                            ElementState::Released => InputEvent::KeyUp(name),
                        });
                    }
                }
                true
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                if !self.pointer_locked {
                    self.set_pointer_locked(true);
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                if !self.pointer_locked {
                    self.frame_loop.handle_event(&InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.frame_loop.handle_event(&InputEvent::MouseWheel { delta_y: view::scroll_lines(delta) });
                true
            }
            WindowEvent::CursorLeft { .. } | WindowEvent::CursorEntered { .. } => {
                self.frame_loop.handle_event(&InputEvent::CursorLeft);
                true
            }
            WindowEvent::Focused(false) => {
                self.frame_loop.handle_event(&InputEvent::FocusLost);
                if self.pointer_locked {
                    self.set_pointer_locked(false);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.pointer_locked {
            self.frame_loop.handle_event(&InputEvent::MouseMove { dx: dx as f32, dy: dy as f32 });
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
        self.frame_loop.set_aspect(new_size.width, new_size.height);
    }

    /// Returns false once the player asked to quit
    fn update(&mut self) -> bool {
        let dt = self.clock.tick(self.started.elapsed().as_secs_f64());

        // Update FPS (dt is scaled, the counter wants wall time)
        self.frame_count += 1;
        self.fps_timer += dt / FrameClock::TIME_SCALE;
        if self.fps_timer >= 1.0 {
            self.fps = self.frame_count as f32 / self.fps_timer;
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }

        let output = self.frame_loop.update(dt, self.started.elapsed().as_secs_f32());

        for found in &output.discoveries {
            self.push_notice(format!("{} found!", found.label));
        }
        if output.release == Some(ReleaseOutcome::Escaped) {
            self.push_notice("All cards are found. Lights turned on! Door opened!".to_string());
        }

        let keep_running = !output.quit_requested;
        self.last_output = Some(output);
        keep_running
    }

    fn push_notice(&mut self, notice: String) {
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let Some(frame) = self.last_output.as_ref() else {
            return Ok(());
        };
        let clear_color = frame.lighting_mode.preset().clear_color;

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let output = self.egui_ctx.run(raw_input, |ctx| {
            ui::build_ui(ctx, frame, self.fps, &self.notices);
        });
        self.egui_state.handle_platform_output(&self.window, output.platform_output);

        let pixels_per_point = self.window.scale_factor() as f32;
        let hud = HudFrame {
            primitives: self.egui_ctx.tessellate(output.shapes, pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point,
        };

        render::render_frame(&self.gpu, &mut self.egui_renderer, clear_color, &hud)
    }
}

fn run() -> Result<(), FrontendError> {
    let settings = WindowSettings::default();
    let event_loop = EventLoop::new()?;
    let window_attributes = Window::default_attributes()
        .with_title(settings.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height));
    let window = Arc::new(event_loop.create_window(window_attributes)?);

    let mut app = pollster::block_on(App::new(window))?;
    info!("escape room ready, find the four key cards");

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            if !app.update() {
                                elwt.exit();
                                return;
                            }

                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    app.gpu.reconfigure()
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    error!("GPU out of memory");
                                    elwt.exit();
                                }
                                Err(e) => warn!(error = ?e, "dropped frame"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::DeviceEvent { event: DeviceEvent::MouseMotion { delta }, .. } => {
                app.handle_mouse_motion(delta.0, delta.1);
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "escape room failed");
            ExitCode::FAILURE
        }
    }
}
