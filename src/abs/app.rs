//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use tess_core::settings::{RendererSettings, WindowSettings};

/// OpenGL 4.0 introduced tessellation shaders. 4.1 is the newest core
/// profile available everywhere, macOS included.
const GL_VERSION: (u8, u8) = (4, 1);

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] from the window and renderer settings.
    /// The window size and position are ignored if `fullscreen` is set.
    pub fn new(window: &WindowSettings, renderer: &RendererSettings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(GL_VERSION.0, GL_VERSION.1);
        gl_attr.set_depth_size(renderer.depth_bits);
        gl_attr.set_stencil_size(renderer.stencil_bits);
        if renderer.antialiasing > 0 {
            gl_attr.set_multisample_buffers(1);
            gl_attr.set_multisample_samples(renderer.antialiasing);
        }

        let mut builder = video_subsystem.window(&window.title, window.width, window.height);
        builder.opengl().resizable().position(window.x, window.y);
        if window.fullscreen {
            builder.fullscreen_desktop();
        }
        let window_handle = builder.build().map_err(|e| e.to_string())?;

        let gl_context = window_handle.gl_create_context()?;
        window_handle.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let swap_interval = if window.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(swap_interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let version = gl.version();
        log::info!(
            "OpenGL {}.{} ({})",
            version.major,
            version.minor,
            version.vendor_info
        );

        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window: window_handle,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Returns the drawable aspect ratio of the window.
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        width as f32 / height as f32
    }
}
