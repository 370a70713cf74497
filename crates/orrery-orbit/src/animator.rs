//! Per-frame composition of body transforms.

use glam::{Mat4, Quat, Vec3};

use crate::body::{Body, solar_system};

/// Model matrices for the fixed three-body demo scene, in the order the
/// renderer draws them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransforms {
    pub sun: Mat4,
    pub earth: Mat4,
    pub moon: Mat4,
}

/// Compute one model matrix per body at elapsed time `t` (seconds).
///
/// For each body the matrix is composed as
///
/// ```text
/// T(parent_pos) · Rz(plane_tilt) · T(orbit_offset(t)) · Rz(axial_tilt) · Ry(spin) · S(scale)
/// ```
///
/// and the body's own world position, inherited by its children, is
/// `parent_pos + Rz(plane_tilt) · orbit_offset(t)`. Tilt, spin, and scale
/// stay local to the body. A pure function of its inputs: no internal state,
/// identical results for identical `(bodies, t)`.
pub fn model_matrices(bodies: &[Body], t: f32) -> Vec<Mat4> {
    let mut positions = Vec::with_capacity(bodies.len());
    let mut matrices = Vec::with_capacity(bodies.len());

    for (i, body) in bodies.iter().enumerate() {
        let parent_pos = match body.parent {
            Some(parent) => {
                debug_assert!(parent < i, "parent must precede child");
                positions[parent]
            }
            None => Vec3::ZERO,
        };

        let plane_tilt = body.plane_tilt.to_radians();
        let offset = body.orbit_offset(t);
        let position = parent_pos + Quat::from_rotation_z(plane_tilt) * offset;

        let matrix = Mat4::from_translation(parent_pos)
            * Mat4::from_rotation_z(plane_tilt)
            * Mat4::from_translation(offset)
            * Mat4::from_rotation_z(body.axial_tilt.to_radians())
            * Mat4::from_rotation_y((body.spin_rate * t).to_radians())
            * Mat4::from_scale(Vec3::splat(body.scale));

        positions.push(position);
        matrices.push(matrix);
    }

    matrices
}

/// Convenience wrapper: the demo scene's transforms at time `t`.
pub fn compute_transforms(t: f32) -> BodyTransforms {
    let matrices = model_matrices(&solar_system(), t);
    BodyTransforms {
        sun: matrices[0],
        earth: matrices[1],
        moon: matrices[2],
    }
}
