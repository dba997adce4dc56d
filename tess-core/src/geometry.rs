//! The coarse icosahedron fed to the tessellator.
//!
//! Each triangle is submitted as one patch of [`PATCH_VERTICES`] control
//! points. The tessellation stages subdivide it and push the new vertices
//! out onto the unit sphere.

use glam::Vec3;

pub const VERTEX_COUNT: usize = 12;
pub const TRIANGLE_COUNT: usize = 20;
pub const PATCH_VERTICES: usize = 3;

/// Vertex positions of a unit icosahedron with a vertex on each pole.
pub const ICOSAHEDRON_POSITIONS: [[f32; 3]; VERTEX_COUNT] = [
    [0.000, 0.000, 1.000],
    [0.894, 0.000, 0.447],
    [0.276, 0.851, 0.447],
    [-0.724, 0.526, 0.447],
    [-0.724, -0.526, 0.447],
    [0.276, -0.851, 0.447],
    [0.724, 0.526, -0.447],
    [-0.276, 0.851, -0.447],
    [-0.894, 0.000, -0.447],
    [-0.276, -0.851, -0.447],
    [0.724, -0.526, -0.447],
    [0.000, 0.000, -1.000],
];

/// Triangle list: the fan around the +Z pole, the fan around the -Z pole,
/// then the belt joining them.
#[rustfmt::skip]
pub const ICOSAHEDRON_INDICES: [u32; TRIANGLE_COUNT * PATCH_VERTICES] = [
    2, 1, 0,
    3, 2, 0,
    4, 3, 0,
    5, 4, 0,
    1, 5, 0,

    11, 6, 7,
    11, 7, 8,
    11, 8, 9,
    11, 9, 10,
    11, 10, 6,

    1, 2, 6,
    2, 3, 7,
    3, 4, 8,
    4, 5, 9,
    5, 1, 10,
    2, 7, 6,
    3, 8, 7,
    4, 9, 8,
    5, 10, 9,
    1, 6, 10,
];

/// Returns the icosahedron positions as vectors.
pub fn positions() -> Vec<Vec3> {
    ICOSAHEDRON_POSITIONS.iter().copied().map(Vec3::from).collect()
}

/// Iterates over the triangles of the index table.
pub fn triangles() -> impl Iterator<Item = [u32; 3]> {
    ICOSAHEDRON_INDICES
        .chunks_exact(PATCH_VERTICES)
        .map(|t| [t[0], t[1], t[2]])
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_indices_in_range() {
        assert_eq!(triangles().count(), TRIANGLE_COUNT);
        assert!(ICOSAHEDRON_INDICES.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for p in positions() {
            assert!((p.length() - 1.0).abs() < 1e-3, "{p} is not unit length");
        }
    }

    #[test]
    fn test_every_vertex_has_five_neighbours() {
        let mut valence = [0usize; VERTEX_COUNT];
        for i in ICOSAHEDRON_INDICES {
            valence[i as usize] += 1;
        }
        assert!(valence.iter().all(|&v| v == 5));
    }

    #[test]
    fn test_closed_and_consistently_wound() {
        // Every directed edge shows up once and its reverse shows up once.
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for [a, b, c] in triangles() {
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_default() += 1;
            }
        }
        assert_eq!(directed.len(), 60);
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1);
            assert_eq!(directed.get(&(b, a)), Some(&1));
        }
    }

    #[test]
    fn test_uniform_winding() {
        // The table winds every face the same way relative to the centre.
        let p = positions();
        let signs: Vec<bool> = triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (p[a as usize], p[b as usize], p[c as usize]);
                let normal = (b - a).cross(c - a);
                normal.dot((a + b + c) / 3.0) > 0.0
            })
            .collect();
        assert!(signs.iter().all(|&s| s == signs[0]));
    }
}
