//! The GPU-free half of the tessellation demo. This crate holds everything
//! that can be computed without an OpenGL context such as the icosahedron
//! tables, the per-frame camera transforms, tessellation level state and the
//! settings file.

pub mod camera;
pub mod geometry;
pub mod levels;
pub mod settings;

pub use camera::{Camera, FrameTransforms};
pub use levels::TessLevels;
pub use settings::Settings;
