//! Tessellation level state.

/// Smallest level the tessellator accepts without discarding the patch.
pub const MIN_LEVEL: f32 = 1.0;
/// The minimum `GL_MAX_TESS_GEN_LEVEL` every OpenGL 4 driver guarantees.
pub const MAX_LEVEL: f32 = 64.0;

pub const DEFAULT_INNER: f32 = 3.0;
pub const DEFAULT_OUTER: f32 = 2.0;

/// Inner and outer tessellation levels applied uniformly to every patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessLevels {
    inner: f32,
    outer: f32,
}

impl Default for TessLevels {
    fn default() -> Self {
        Self {
            inner: DEFAULT_INNER,
            outer: DEFAULT_OUTER,
        }
    }
}

#[inline]
fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        MIN_LEVEL
    } else {
        level.clamp(MIN_LEVEL, MAX_LEVEL)
    }
}

impl TessLevels {
    /// Creates a new set of levels, clamped into the supported range.
    pub fn new(inner: f32, outer: f32) -> Self {
        Self {
            inner: clamp_level(inner),
            outer: clamp_level(outer),
        }
    }

    pub fn inner(&self) -> f32 {
        self.inner
    }

    pub fn outer(&self) -> f32 {
        self.outer
    }

    /// Steps the inner level by `delta`. Returns whether the level changed.
    pub fn adjust_inner(&mut self, delta: f32) -> bool {
        let old = self.inner;
        self.inner = clamp_level(self.inner + delta);
        old != self.inner
    }

    /// Steps the outer level by `delta`. Returns whether the level changed.
    pub fn adjust_outer(&mut self, delta: f32) -> bool {
        let old = self.outer;
        self.outer = clamp_level(self.outer + delta);
        old != self.outer
    }

    /// Restores the startup levels.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let levels = TessLevels::default();
        assert_eq!(levels.inner(), 3.0);
        assert_eq!(levels.outer(), 2.0);
    }

    #[test]
    fn test_new_clamps() {
        let levels = TessLevels::new(0.0, 1000.0);
        assert_eq!(levels.inner(), MIN_LEVEL);
        assert_eq!(levels.outer(), MAX_LEVEL);
        assert_eq!(TessLevels::new(f32::NAN, 5.0).inner(), MIN_LEVEL);
    }

    #[test]
    fn test_adjust_stops_at_bounds() {
        let mut levels = TessLevels::default();
        assert!(levels.adjust_inner(1.0));
        assert_eq!(levels.inner(), 4.0);

        assert!(levels.adjust_outer(-1.0));
        assert!(!levels.adjust_outer(-1.0));
        assert_eq!(levels.outer(), MIN_LEVEL);

        assert!(levels.adjust_inner(500.0));
        assert!(!levels.adjust_inner(1.0));
        assert_eq!(levels.inner(), MAX_LEVEL);

        levels.reset();
        assert_eq!(levels, TessLevels::default());
    }
}
