//! UV-sphere tessellation.

use std::f32::consts::PI;

use crate::vertex::SphereVertex;

/// Longitude angular-span multiplier. The longitude parameter sweeps
/// `u * LON_SPAN * π`, so 2.0 covers the full 2π range and closes the
/// sphere. The reference demo also reuses `1 / LON_SPAN` to scale its
/// normals; both uses are preserved (see [`generate_sphere_vertices`]).
pub const LON_SPAN: f32 = 2.0;

/// A complete sphere mesh: interleaved vertices plus a u32 triangle index
/// buffer. Built once at startup and uploaded to the GPU unchanged.
pub struct SphereMesh {
    /// Interleaved position/normal/uv vertices, latitude-major.
    pub vertices: Vec<SphereVertex>,
    /// Two counter-wound triangles per latitude/longitude cell.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Generate a sphere with the given segment counts.
    pub fn generate(lat_segments: u32, lon_segments: u32) -> Self {
        Self {
            vertices: generate_sphere_vertices(lat_segments, lon_segments),
            indices: generate_sphere_indices(lat_segments, lon_segments),
        }
    }

    /// Number of indices, as the u32 wgpu draw calls expect.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Generate the vertex ring grid: `(lat_segments + 1) × (lon_segments + 1)`
/// vertices, iterating latitude outer and longitude inner so that each
/// latitude ring is contiguous.
///
/// The normal is `position * (1 / LON_SPAN)`, i.e. half-length for the
/// default full-sphere span. This is an artifact of the reference demo
/// (a `1/radius` scalar reused from a differently-scaled sphere) and is
/// preserved for behavioral parity; correcting it to `normalize(position)`
/// would visibly change the lighting.
pub fn generate_sphere_vertices(lat_segments: u32, lon_segments: u32) -> Vec<SphereVertex> {
    let inv_span = 1.0 / LON_SPAN;
    let mut vertices = Vec::with_capacity(((lat_segments + 1) * (lon_segments + 1)) as usize);

    for y in 0..=lat_segments {
        for x in 0..=lon_segments {
            let u = x as f32 / lon_segments as f32;
            let v = y as f32 / lat_segments as f32;

            let px = (u * LON_SPAN * PI).cos() * (v * PI).sin();
            let py = (v * PI).cos();
            let pz = (u * LON_SPAN * PI).sin() * (v * PI).sin();

            vertices.push(SphereVertex {
                position: [px, py, pz],
                normal: [px * inv_span, py * inv_span, pz * inv_span],
                uv: [u, v],
            });
        }
    }

    vertices
}

/// Generate the triangle index list: for each grid cell, two triangles
/// covering the quad between adjacent latitude rings, using row-major
/// linear indexing `r * (lon_segments + 1) + c`.
pub fn generate_sphere_indices(lat_segments: u32, lon_segments: u32) -> Vec<u32> {
    let ring = lon_segments + 1;
    let mut indices = Vec::with_capacity((lat_segments * lon_segments * 6) as usize);

    for i in 0..lat_segments {
        for j in 0..lon_segments {
            indices.push(i * ring + j);
            indices.push((i + 1) * ring + j);
            indices.push((i + 1) * ring + j + 1);

            indices.push(i * ring + j);
            indices.push((i + 1) * ring + j + 1);
            indices.push(i * ring + j + 1);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_matches_grid() {
        for (lat, lon) in [(1, 1), (3, 7), (50, 50)] {
            let vertices = generate_sphere_vertices(lat, lon);
            assert_eq!(
                vertices.len(),
                ((lat + 1) * (lon + 1)) as usize,
                "vertex count for {lat}x{lon}"
            );
        }
    }

    #[test]
    fn test_index_count_matches_cells() {
        for (lat, lon) in [(1, 1), (3, 7), (50, 50)] {
            let indices = generate_sphere_indices(lat, lon);
            assert_eq!(
                indices.len(),
                (lat * lon * 6) as usize,
                "index count for {lat}x{lon}"
            );
        }
    }

    #[test]
    fn test_all_indices_in_range() {
        let mesh = SphereMesh::generate(13, 29);
        let n = mesh.vertices.len() as u32;
        for &idx in &mesh.indices {
            assert!(idx < n, "index {idx} out of bounds (vertex count = {n})");
        }
    }

    #[test]
    fn test_smallest_sphere_is_two_triangles() {
        let mesh = SphereMesh::generate(1, 1);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_positions_on_unit_sphere() {
        // px² + pz² = sin²(vπ) and py² = cos²(vπ), so every position has
        // unit norm for the full-sphere span.
        let vertices = generate_sphere_vertices(50, 50);
        for vert in &vertices {
            let [x, y, z] = vert.position;
            let len = (x * x + y * y + z * z).sqrt();
            assert!(
                (len - 1.0).abs() < 1e-5,
                "position not on unit sphere: length = {len}"
            );
        }
    }

    #[test]
    fn test_normal_is_half_position() {
        // The preserved reference artifact: normals are position / LON_SPAN,
        // not unit length.
        let vertices = generate_sphere_vertices(10, 10);
        for vert in &vertices {
            for axis in 0..3 {
                assert!(
                    (vert.normal[axis] - vert.position[axis] / LON_SPAN).abs() < 1e-7,
                    "normal should be position scaled by 1/{LON_SPAN}"
                );
            }
        }
    }

    #[test]
    fn test_uvs_cover_unit_square() {
        let vertices = generate_sphere_vertices(4, 4);
        for vert in &vertices {
            assert!((0.0..=1.0).contains(&vert.uv[0]), "u out of range");
            assert!((0.0..=1.0).contains(&vert.uv[1]), "v out of range");
        }
        // The grid includes both seam edges.
        assert_eq!(vertices.first().unwrap().uv, [0.0, 0.0]);
        assert_eq!(vertices.last().unwrap().uv, [1.0, 1.0]);
    }

    #[test]
    fn test_poles_collapse() {
        // v = 0 and v = 1 rings all sit at the poles (0, ±1, 0).
        let lat = 6;
        let lon = 8;
        let vertices = generate_sphere_vertices(lat, lon);
        let ring = (lon + 1) as usize;
        for vert in &vertices[..ring] {
            assert!((vert.position[1] - 1.0).abs() < 1e-6);
            assert!(vert.position[0].abs() < 1e-6);
            assert!(vert.position[2].abs() < 1e-6);
        }
        for vert in &vertices[vertices.len() - ring..] {
            assert!((vert.position[1] + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = SphereMesh::generate(17, 23);
        let b = SphereMesh::generate(17, 23);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_cell_triangles_share_diagonal() {
        // Triangle A = (c00, c10, c11), triangle B = (c00, c11, c01): both
        // reference the cell diagonal c00→c11.
        let lon = 5u32;
        let indices = generate_sphere_indices(4, lon);
        let ring = lon + 1;
        for cell in indices.chunks(6) {
            let (a, b) = (&cell[..3], &cell[3..]);
            assert_eq!(a[0], b[0], "triangles share the cell origin");
            assert_eq!(a[2], b[1], "triangles share the cell diagonal");
            // Corners are one ring apart.
            assert_eq!(a[1], a[0] + ring);
            assert_eq!(b[2], b[0] + 1);
        }
    }
}
