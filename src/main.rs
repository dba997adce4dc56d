use std::path::PathBuf;
use std::time::Instant;

use tess_core::{Camera, Settings};

use crate::abs::App;
use crate::input::KeyboardState;
use crate::render::{Renderer, ShaderSources};

mod abs;
mod input;
mod logging;
mod render;

/// Environment variable pointing at an alternative settings file.
const CONFIG_ENV: &str = "TESSELLATION_CONFIG";

/// Where the settings file is looked up when [`CONFIG_ENV`] is unset.
fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("tessellation").join("settings.json"))
}

fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        log::warn!("No config directory found, using default settings");
        return Settings::default();
    };

    match Settings::load(&path) {
        Ok(settings) => {
            log::info!("Settings loaded from {}", path.display());
            settings
        }
        Err(e) => {
            log::error!("{}, using default settings", e);
            Settings::default()
        }
    }
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let settings = load_settings();
    if let Ok(json) = serde_json::to_string(&settings) {
        log::debug!("Effective settings: {}", json);
    }

    if let Err(e) = run(&settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), String> {
    let mut app = App::new(&settings.window, &settings.renderer)?;

    let sources = match &settings.shader_dir {
        Some(dir) => {
            log::info!("Loading shaders from {}", dir.display());
            ShaderSources::from_dir(dir)?
        }
        None => ShaderSources::embedded(),
    };
    let renderer = Renderer::new(&app.gl, &sources, settings.renderer.clear_color)?;

    let (width, height) = app.window.drawable_size();
    renderer.resize(width as i32, height as i32);

    let camera = Camera::default();
    let mut levels = settings.tessellation.levels();
    let mut aspect = app.aspect();
    let mut keyboard = KeyboardState::default();
    let start = Instant::now();

    'running: loop {
        keyboard.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    renderer.resize(width as i32, height as i32);
                    aspect = width as f32 / height as f32;
                    log::debug!("Resized to {}x{}", width, height);
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.key_down(keycode),
                _ => {}
            }
        }

        if !input::apply_controls(&keyboard, &mut levels, settings.tessellation.step) {
            break 'running;
        }

        let transforms = camera.frame(start.elapsed().as_secs_f32(), aspect);
        renderer.render(&transforms, &levels, &settings.material);
        app.window.gl_swap_window();
    }

    log::info!("Exiting");
    Ok(())
}
