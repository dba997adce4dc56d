//! User settings, loaded from a JSON file.
//!
//! Every field has a default so a settings file only needs to mention what it
//! changes. An absent file is not an error and yields [`Settings::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::levels::{self, TessLevels};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Tessellation".to_string(),
            width: 1024,
            height: 768,
            x: 100,
            y: 100,
            fullscreen: false,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererSettings {
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// Multisample count, `0` disables multisampling.
    pub antialiasing: u8,
    pub clear_color: [f32; 4],
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            depth_bits: 16,
            stencil_bits: 8,
            antialiasing: 0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TessellationSettings {
    pub inner: f32,
    pub outer: f32,
    /// How much one key press changes a level by.
    pub step: f32,
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            inner: levels::DEFAULT_INNER,
            outer: levels::DEFAULT_OUTER,
            step: 1.0,
        }
    }
}

impl TessellationSettings {
    pub fn levels(&self) -> TessLevels {
        TessLevels::new(self.inner, self.outer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialSettings {
    pub light_position: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            light_position: [0.25, 0.25, 1.0],
            ambient: [0.04, 0.04, 0.04],
            diffuse: [0.0, 0.75, 0.75],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window: WindowSettings,
    pub renderer: RendererSettings,
    pub tessellation: TessellationSettings,
    pub material: MaterialSettings,
    /// Directory holding `test.vert`, `test.tesc`, `test.tese`, `test.geom`
    /// and `test.frag`. The embedded shaders are used when unset.
    pub shader_dir: Option<PathBuf>,
}

impl Settings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json(s: &str) -> Result<Self, String> {
        let settings: Settings = serde_json::from_str(s).map_err(|e| e.to_string())?;
        settings.validate()
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents)
                .map_err(|e| format!("Invalid settings file {}: {}", path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            )),
        }
    }

    /// Rejects unusable values and clamps the tessellation levels.
    pub fn validate(mut self) -> Result<Self, String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        if !self.tessellation.step.is_finite() || self.tessellation.step <= 0.0 {
            return Err(format!(
                "Tessellation step must be positive, got {}",
                self.tessellation.step
            ));
        }

        let levels = self.tessellation.levels();
        if levels.inner() != self.tessellation.inner || levels.outer() != self.tessellation.outer {
            log::warn!(
                "Tessellation levels clamped to inner {} outer {}",
                levels.inner(),
                levels.outer()
            );
        }
        self.tessellation.inner = levels.inner();
        self.tessellation.outer = levels.outer();

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let settings = Settings::default();
        assert_eq!(settings.window.title, "Tessellation");
        assert_eq!((settings.window.width, settings.window.height), (1024, 768));
        assert_eq!((settings.window.x, settings.window.y), (100, 100));
        assert_eq!(settings.renderer.depth_bits, 16);
        assert_eq!(settings.renderer.stencil_bits, 8);
        assert_eq!(settings.renderer.antialiasing, 0);
        assert_eq!(settings.tessellation.levels(), TessLevels::default());
        assert_eq!(settings.material.diffuse, [0.0, 0.75, 0.75]);
        assert!(settings.shader_dir.is_none());
    }

    #[test]
    fn test_partial_document() {
        let settings =
            Settings::from_json(r#"{ "window": { "width": 640 }, "shader_dir": "shaders" }"#)
                .unwrap();
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, 768);
        assert_eq!(settings.shader_dir, Some(PathBuf::from("shaders")));
        assert_eq!(settings.material, MaterialSettings::default());
    }

    #[test]
    fn test_rejects_unknown_and_invalid() {
        assert!(Settings::from_json(r#"{ "windw": {} }"#).is_err());
        assert!(Settings::from_json(r#"{ "window": { "height": 0 } }"#).is_err());
        assert!(Settings::from_json(r#"{ "tessellation": { "step": -1 } }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_levels_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "tessellation": { "inner": 0.25, "outer": 90 } }"#).unwrap();
        assert_eq!(settings.tessellation.inner, levels::MIN_LEVEL);
        assert_eq!(settings.tessellation.outer, levels::MAX_LEVEL);
    }

    #[test]
    fn test_load_missing_and_present() {
        let dir = std::env::temp_dir().join(format!("tess-core-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(Settings::load(&missing).unwrap(), Settings::default());

        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "window": { "vsync": false } }"#).unwrap();
        assert!(!Settings::load(&path).unwrap().window.vsync);

        std::fs::write(&path, "{").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.contains("settings.json"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
