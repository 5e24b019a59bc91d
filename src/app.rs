use std::sync::Arc;

use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::audio::AudioSystem;
use crate::game::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::World;
use crate::game_loop::FrameClock;
use crate::input::InputState;
use crate::render::{Canvas, SpriteRenderer, WgpuRenderer};

pub struct App {
    window: Option<Arc<Window>>,
    wgpu_renderer: Option<WgpuRenderer>,
    sprite_renderer: Option<SpriteRenderer>,
    audio: Option<AudioSystem>,
    input: InputState,
    world: World,
    clock: FrameClock,
    canvas: Canvas,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            wgpu_renderer: None,
            sprite_renderer: None,
            audio: None,
            input: InputState::new(),
            world: World::new(),
            clock: FrameClock::new(),
            canvas: Canvas::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Seastrike")
            .with_inner_size(winit::dpi::LogicalSize::new(WORLD_WIDTH, WORLD_HEIGHT));
        let window = match event_loop.create_window(window_attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("Failed to create window: {:?}", e);
                event_loop.exit();
                return;
            }
        };

        let wgpu_renderer = match WgpuRenderer::new(window.clone()).block_on() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Failed to initialize wgpu: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut sprite_renderer = SpriteRenderer::new(
            wgpu_renderer.device.clone(),
            wgpu_renderer.queue.clone(),
            wgpu_renderer.surface_config.format,
        );
        sprite_renderer.load_all_textures();

        match AudioSystem::new() {
            Ok(mut audio) => {
                audio.load_all_sounds();
                self.audio = Some(audio);
            }
            Err(e) => {
                eprintln!("Audio disabled: {}", e);
            }
        }

        self.window = Some(window.clone());
        self.wgpu_renderer = Some(wgpu_renderer);
        self.sprite_renderer = Some(sprite_renderer);

        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut wgpu_renderer) = self.wgpu_renderer {
                    wgpu_renderer.resize(size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape && event.state.is_pressed() {
                        event_loop.exit();
                        return;
                    }
                    if event.state.is_pressed() {
                        self.input.handle_key_press(code, event.repeat);
                    } else {
                        self.input.handle_key_release(code);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                // Present the previous frame's state, then advance it.
                self.canvas.clear();
                self.world.draw(&mut self.canvas);

                if let (Some(sprite_renderer), Some(wgpu_renderer)) =
                    (self.sprite_renderer.as_mut(), self.wgpu_renderer.as_mut())
                {
                    sprite_renderer.render(&self.canvas, wgpu_renderer);
                }

                let dt = self.clock.tick();
                if self.input.take_fire() {
                    self.world.fire();
                }
                self.world.update(dt, &self.input);

                if let Some(ref mut audio) = self.audio {
                    for event in self.world.audio.drain() {
                        audio.process_event(&event);
                    }
                } else {
                    self.world.audio.events.clear();
                }

                if let Some(ref window) = self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
