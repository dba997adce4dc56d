//! GPU copy of the icosahedron, drawn as triangle patches.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use tess_core::geometry;

use crate::abs::{Mesh, Vertex};

/// A vertex carrying only a `Position: Float3` attribute.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PositionVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

/// The icosahedron uploaded once and drawn every frame.
pub struct IcosahedronMesh {
    gl: Arc<glow::Context>,
    mesh: Mesh,
}

impl IcosahedronMesh {
    /// Uploads the icosahedron tables.
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let vertices: Vec<PositionVertex> = geometry::positions()
            .into_iter()
            .map(|position| PositionVertex { position })
            .collect();
        let mesh = Mesh::new(gl, &vertices, &geometry::ICOSAHEDRON_INDICES, glow::PATCHES)?;

        log::debug!(
            "Uploaded icosahedron: {} vertices, {} indices",
            vertices.len(),
            mesh.index_count()
        );

        Ok(Self {
            gl: Arc::clone(gl),
            mesh,
        })
    }

    /// Issues the indexed patch draw.
    pub fn draw(&self) {
        unsafe {
            self.gl
                .patch_parameter_i32(glow::PATCH_VERTICES, geometry::PATCH_VERTICES as i32);
        }
        self.mesh.draw();
    }
}
