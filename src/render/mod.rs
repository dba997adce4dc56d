//! Rendering of the tessellated icosahedron.

pub mod icosahedron;
pub mod pipeline;

use std::sync::Arc;

use glow::HasContext;
use tess_core::{FrameTransforms, TessLevels, settings::MaterialSettings};

use crate::render::{icosahedron::IcosahedronMesh, pipeline::TessellationPipeline};

pub use pipeline::ShaderSources;

/// Owns the pipeline and geometry, and draws one frame at a time.
pub struct Renderer {
    gl: Arc<glow::Context>,
    pipeline: TessellationPipeline,
    mesh: IcosahedronMesh,
}

impl Renderer {
    /// Builds the pipeline from `sources` and uploads the icosahedron.
    pub fn new(
        gl: &Arc<glow::Context>,
        sources: &ShaderSources,
        clear_color: [f32; 4],
    ) -> Result<Self, String> {
        let pipeline = TessellationPipeline::new(gl, sources)?;
        let mesh = IcosahedronMesh::new(gl)?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            let [r, g, b, a] = clear_color;
            gl.clear_color(r, g, b, a);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            pipeline,
            mesh,
        })
    }

    /// Resizes the viewport to the drawable size.
    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    /// Clears the frame and draws the icosahedron with the given state.
    pub fn render(
        &self,
        transforms: &FrameTransforms,
        levels: &TessLevels,
        material: &MaterialSettings,
    ) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let pipeline = &self.pipeline;
        let constants = pipeline.constants();
        pipeline.bind();

        pipeline.set(&constants.tess_level_inner, levels.inner());
        pipeline.set(&constants.tess_level_outer, levels.outer());
        pipeline.set(&constants.light_position, material.light_position);
        pipeline.set(&constants.projection, transforms.projection);
        pipeline.set(&constants.modelview, transforms.modelview);
        pipeline.set(&constants.normal_matrix, transforms.normal_matrix);
        pipeline.set(&constants.ambient_material, material.ambient);
        pipeline.set(&constants.diffuse_material, material.diffuse);

        self.mesh.draw();
    }
}
