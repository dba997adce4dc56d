//! The five-stage tessellation pipeline and its constant locations.

use std::{path::Path, sync::Arc};

use crate::abs::{Shader, ShaderProgram, ShaderStage, Uniform};

/// File stem shared by the shader sources on disk.
const SOURCE_STEM: &str = "test";

/// GLSL sources for every stage of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub tess_control: String,
    pub tess_evaluation: String,
    pub geometry: String,
    pub fragment: String,
}

impl ShaderSources {
    /// The sources compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            vertex: include_str!("shaders/tessellation/test.vert").to_string(),
            tess_control: include_str!("shaders/tessellation/test.tesc").to_string(),
            tess_evaluation: include_str!("shaders/tessellation/test.tese").to_string(),
            geometry: include_str!("shaders/tessellation/test.geom").to_string(),
            fragment: include_str!("shaders/tessellation/test.frag").to_string(),
        }
    }

    /// Reads `test.vert`, `test.tesc`, `test.tese`, `test.geom` and
    /// `test.frag` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, String> {
        let read = |stage: ShaderStage| {
            let path = dir.join(format!("{}.{}", SOURCE_STEM, stage.extension()));
            std::fs::read_to_string(&path).map_err(|e| {
                format!(
                    "Failed to read {} shader {}: {}",
                    stage,
                    path.display(),
                    e
                )
            })
        };

        Ok(Self {
            vertex: read(ShaderStage::Vertex)?,
            tess_control: read(ShaderStage::TessControl)?,
            tess_evaluation: read(ShaderStage::TessEvaluation)?,
            geometry: read(ShaderStage::Geometry)?,
            fragment: read(ShaderStage::Fragment)?,
        })
    }

    /// Returns the source for `stage`.
    pub fn get(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::TessControl => &self.tess_control,
            ShaderStage::TessEvaluation => &self.tess_evaluation,
            ShaderStage::Geometry => &self.geometry,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

/// A uniform location resolved once at pipeline creation.
pub struct Constant {
    name: &'static str,
    location: Option<glow::UniformLocation>,
}

impl Constant {
    fn resolve(program: &ShaderProgram, name: &'static str) -> Self {
        let location = program.location(name);
        if location.is_none() {
            log::warn!("Shader constant '{}' not found, it will not be set", name);
        }
        Self { name, location }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_bound(&self) -> bool {
        self.location.is_some()
    }
}

/// Every constant the tessellation shaders read.
pub struct Constants {
    pub tess_level_inner: Constant,
    pub tess_level_outer: Constant,
    pub light_position: Constant,
    pub projection: Constant,
    pub modelview: Constant,
    pub normal_matrix: Constant,
    pub ambient_material: Constant,
    pub diffuse_material: Constant,
}

impl Constants {
    fn resolve(program: &ShaderProgram) -> Self {
        Self {
            tess_level_inner: Constant::resolve(program, "TessLevelInner"),
            tess_level_outer: Constant::resolve(program, "TessLevelOuter"),
            light_position: Constant::resolve(program, "LightPosition"),
            projection: Constant::resolve(program, "Projection"),
            modelview: Constant::resolve(program, "Modelview"),
            normal_matrix: Constant::resolve(program, "NormalMatrix"),
            ambient_material: Constant::resolve(program, "AmbientMaterial"),
            diffuse_material: Constant::resolve(program, "DiffuseMaterial"),
        }
    }

    fn all(&self) -> [&Constant; 8] {
        [
            &self.tess_level_inner,
            &self.tess_level_outer,
            &self.light_position,
            &self.projection,
            &self.modelview,
            &self.normal_matrix,
            &self.ambient_material,
            &self.diffuse_material,
        ]
    }
}

/// A linked vertex/tessellation/geometry/fragment program.
pub struct TessellationPipeline {
    program: ShaderProgram,
    constants: Constants,
}

impl TessellationPipeline {
    /// Compiles every stage, links them and resolves the constant locations.
    pub fn new(gl: &Arc<glow::Context>, sources: &ShaderSources) -> Result<Self, String> {
        let shaders = ShaderStage::ALL
            .into_iter()
            .map(|stage| {
                log::debug!("Compiling {} shader", stage);
                Shader::new(gl, stage, sources.get(stage))
            })
            .collect::<Result<Vec<_>, String>>()?;
        let shader_refs: Vec<&Shader> = shaders.iter().collect();
        let program = ShaderProgram::new(gl, &shader_refs)?;

        let constants = Constants::resolve(&program);
        for constant in constants.all() {
            log::debug!("Constant {} bound: {}", constant.name(), constant.is_bound());
        }
        let bound = constants.all().iter().filter(|c| c.is_bound()).count();
        log::info!(
            "Tessellation pipeline linked with {} shader stages, {}/8 constants bound",
            shaders.len(),
            bound
        );

        Ok(Self { program, constants })
    }

    /// Binds the program.
    pub fn bind(&self) {
        self.program.use_program();
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Sets a constant on the bound program. Unbound constants are skipped.
    pub fn set<T: Uniform>(&self, constant: &Constant, value: T) {
        if let Some(location) = &constant.location {
            self.program.set_uniform_at(location, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tessellation-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_embedded_sources_declare_constants() {
        let sources = ShaderSources::embedded();
        for stage in ShaderStage::ALL {
            assert!(sources.get(stage).starts_with("#version 410 core"));
        }
        assert!(sources.tess_control.contains("uniform float TessLevelInner;"));
        assert!(sources.tess_control.contains("uniform float TessLevelOuter;"));
        assert!(sources.tess_evaluation.contains("uniform mat4 Projection;"));
        assert!(sources.tess_evaluation.contains("uniform mat4 Modelview;"));
        assert!(sources.geometry.contains("uniform mat3 NormalMatrix;"));
        assert!(sources.fragment.contains("uniform vec3 LightPosition;"));
        assert!(sources.fragment.contains("uniform vec3 AmbientMaterial;"));
        assert!(sources.fragment.contains("uniform vec3 DiffuseMaterial;"));
    }

    #[test]
    fn test_sources_from_dir() {
        let dir = scratch_dir("shaders-ok");
        for stage in ShaderStage::ALL {
            std::fs::write(
                dir.join(format!("test.{}", stage.extension())),
                format!("// {}", stage),
            )
            .unwrap();
        }

        let sources = ShaderSources::from_dir(&dir).unwrap();
        assert_eq!(sources.vertex, "// vertex");
        assert_eq!(sources.get(ShaderStage::TessControl), "// tessellation control");
        assert_eq!(sources.get(ShaderStage::Fragment), "// fragment");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_source_names_file() {
        let dir = scratch_dir("shaders-missing");
        std::fs::write(dir.join("test.vert"), "").unwrap();

        let err = ShaderSources::from_dir(&dir).unwrap_err();
        assert!(err.contains("test.tesc"), "{}", err);
        assert!(err.contains("tessellation control"), "{}", err);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
