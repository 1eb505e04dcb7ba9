use clap::Parser;
use glam::Vec2;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tree_core::photo::keep_decoded;
use tree_core::picking::screen_ray;
use tree_core::{
    key_action, FrameClock, FrameOutput, KeyAction, OrbitCamera, Photo, PhotoError, Scene,
    SceneSnapshot, TreeMode, HELP_LINES,
};
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, Window, WindowBuilder};

mod cli;
mod gpu;

use gpu::GpuState;

const MAX_FRAME_DT: f32 = 0.1;

fn load_photo_file(source: &str) -> Result<Photo, PhotoError> {
    let bytes = fs::read(source)?;
    Photo::from_bytes(source, &bytes)
}

fn load_photo_paths(paths: &[PathBuf]) -> Vec<Photo> {
    keep_decoded(paths.iter().map(|p| {
        let source = p.display().to_string();
        let res = load_photo_file(&source);
        (source, res)
    }))
}

/// `KeyboardEvent.key` style name for a winit key.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Space) => Some(" "),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::Enter) => Some("Enter"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

struct App {
    scene: Scene,
    camera: OrbitCamera,
    clock: FrameClock,
    out: FrameOutput,
    pointer: Option<Vec2>,
    last_frame: Instant,
    save_path: PathBuf,
}

impl App {
    fn new(scene: Scene, save_path: PathBuf) -> Self {
        Self {
            scene,
            camera: OrbitCamera::new(),
            clock: FrameClock::default(),
            out: FrameOutput::new(),
            pointer: None,
            last_frame: Instant::now(),
            save_path,
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        let json = self.scene.snapshot().to_json()?;
        fs::write(&self.save_path, json)?;
        log::info!("[snapshot] saved to {}", self.save_path.display());
        Ok(())
    }

    fn handle_key(&mut self, key: &str, window: &Window) {
        let Some(action) = key_action(key) else {
            return;
        };
        match action {
            KeyAction::ToggleMode => self.scene.toggle_mode(),
            KeyAction::CycleTheme => self.scene.cycle_theme(),
            KeyAction::SelectTheme(id) => self.scene.set_theme(id),
            KeyAction::ToggleOverlay => {
                for line in HELP_LINES {
                    log::info!("{}", line);
                }
            }
            KeyAction::SaveSnapshot => {
                if let Err(e) = self.save() {
                    log::warn!("[snapshot] {:#}", e);
                }
            }
            KeyAction::AddPhotos => log::info!("pass images with --photo <PATH>"),
            KeyAction::Orbit(delta) => self.camera.orbit(delta),
            KeyAction::Zoom(delta) => self.camera.zoom(delta),
            KeyAction::Fullscreen => {
                if window.fullscreen().is_some() {
                    window.set_fullscreen(None);
                } else {
                    window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                }
            }
        }
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;
        self.clock.advance(dt);

        self.camera
            .update(self.scene.mode() == TreeMode::TreeShape, dt);
        let camera = self.camera.camera(gpu.aspect());

        if let Some(px) = self.pointer {
            let (w, h) = gpu.size();
            let (origin, dir) = screen_ray(&camera, px.x, px.y, w as f32, h as f32);
            let hit = self.scene.pick_photo(origin, dir);
            if hit != self.scene.hovered_photo() {
                self.scene.set_hovered_photo(hit);
            }
        }

        self.scene.update(self.clock, &mut self.out);
        gpu.render(&self.out, &camera, self.scene.theme())
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<SceneSnapshot> {
    let json = fs::read_to_string(path)?;
    Ok(SceneSnapshot::from_json(&json)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::Args::parse();
    let mut scene = Scene::new(args.scene_config());
    if let Some(path) = &args.load {
        let snapshot = load_snapshot(path)?;
        log::info!("[snapshot] loaded {}", path.display());
        scene.apply_snapshot(&snapshot, load_photo_file);
    }
    args.apply_overrides(&mut scene);
    scene.extend_photos(load_photo_paths(&args.photos));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Evergreen")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App::new(scene, args.save);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(name) = key_name(&event.logical_key) {
                    app.handle_key(name, gpu.window);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.pointer = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                app.pointer = None;
                app.scene.set_hovered_photo(None);
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame(&mut gpu) {
            Ok(_) => gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("surface error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
