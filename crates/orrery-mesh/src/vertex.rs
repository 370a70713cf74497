//! Interleaved vertex format shared by the sphere pipelines.

use bytemuck::{Pod, Zeroable};

/// A single sphere vertex: 8 floats, tightly packed.
///
/// The layout matches the GPU vertex buffer directly, so the generated
/// `Vec<SphereVertex>` can be uploaded with a single `cast_slice`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
    /// Shading normal. See [`generate_sphere_vertices`] for the scaling
    /// caveat inherited from the reference demo.
    ///
    /// [`generate_sphere_vertices`]: crate::generate_sphere_vertices
    pub normal: [f32; 3],
    /// Equirectangular texture coordinate in `[0, 1]²`.
    pub uv: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_8_floats() {
        assert_eq!(std::mem::size_of::<SphereVertex>(), 8 * 4);
    }

    #[test]
    fn test_field_offsets_are_interleaved() {
        // position at 0, normal at 12, uv at 24 — the stride layout the
        // pipelines declare.
        let v = SphereVertex {
            position: [1.0, 2.0, 3.0],
            normal: [4.0, 5.0, 6.0],
            uv: [7.0, 8.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
