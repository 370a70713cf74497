//! Body descriptors for the sun/earth/moon system.

use glam::{Vec2, Vec3};

/// One body in the orbital hierarchy.
///
/// Angle conventions follow the reference demo and are deliberately mixed:
/// `orbit_rate` is raw radians per second (the demo feeds `2.5 * t` straight
/// into `cos`/`sin`), while `plane_tilt`, `axial_tilt`, and `spin_rate` are
/// degrees, converted at the point of use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub name: &'static str,
    /// Index of the parent body, which must precede this one in the slice.
    /// `None` marks a root.
    pub parent: Option<usize>,
    /// Fixed offset of the orbit center from the parent's position.
    pub orbit_center: Vec3,
    /// Orbit semi-radii along local X and Z. Unequal radii give the
    /// elliptical path the earth traces.
    pub orbit_radii: Vec2,
    /// Orbit angular rate in radians per second.
    pub orbit_rate: f32,
    /// Tilt of the whole orbital plane about Z, in degrees. Applied before
    /// the orbit offset, so it carries into this body's world position.
    pub plane_tilt: f32,
    /// Tilt of the body's own axis about Z, in degrees. Applied after the
    /// orbit offset; affects orientation only.
    pub axial_tilt: f32,
    /// Self-rotation rate about local Y, in degrees per second.
    pub spin_rate: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Body {
    /// Position on the orbit at time `t`, in the (tilted) orbital plane,
    /// relative to the parent's position.
    pub fn orbit_offset(&self, t: f32) -> Vec3 {
        let angle = self.orbit_rate * t;
        self.orbit_center
            + Vec3::new(
                angle.cos() * self.orbit_radii.x,
                0.0,
                angle.sin() * self.orbit_radii.y,
            )
    }
}

/// The demo's three-body system: a sun fixed ahead of the default camera, an
/// earth on an elliptical orbit around it, and a moon circling the earth in
/// a plane tilted 45 degrees.
pub fn solar_system() -> Vec<Body> {
    vec![
        Body {
            name: "sun",
            parent: None,
            orbit_center: Vec3::new(0.0, 0.0, -5.0),
            orbit_radii: Vec2::ZERO,
            orbit_rate: 0.0,
            plane_tilt: 0.0,
            axial_tilt: 0.0,
            spin_rate: -20.0,
            scale: 1.0,
        },
        Body {
            name: "earth",
            parent: Some(0),
            orbit_center: Vec3::ZERO,
            orbit_radii: Vec2::new(3.0, 2.0),
            orbit_rate: 2.5,
            plane_tilt: 0.0,
            axial_tilt: -22.5,
            spin_rate: 200.0,
            scale: 0.3,
        },
        Body {
            name: "moon",
            parent: Some(1),
            orbit_center: Vec3::ZERO,
            orbit_radii: Vec2::splat(0.5),
            orbit_rate: 5.0,
            plane_tilt: -45.0,
            axial_tilt: 0.0,
            spin_rate: 100.0,
            scale: 0.1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_parents_precede_children() {
        let bodies = solar_system();
        for (i, body) in bodies.iter().enumerate() {
            if let Some(parent) = body.parent {
                assert!(parent < i, "{} has a forward parent reference", body.name);
            }
        }
    }

    #[test]
    fn test_orbit_offset_at_time_zero() {
        let bodies = solar_system();
        assert_eq!(bodies[0].orbit_offset(0.0), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(bodies[1].orbit_offset(0.0), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(bodies[2].orbit_offset(0.0), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_earth_orbit_is_elliptical() {
        let earth = solar_system()[1];
        // A quarter orbit: angle = π/2, so the offset lies on the short axis.
        let t = std::f32::consts::FRAC_PI_2 / earth.orbit_rate;
        let offset = earth.orbit_offset(t);
        assert!(offset.x.abs() < 1e-5);
        assert!((offset.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sun_never_moves() {
        let sun = solar_system()[0];
        for t in [0.0, 0.37, 12.5, 9000.0] {
            assert_eq!(sun.orbit_offset(t), Vec3::new(0.0, 0.0, -5.0));
        }
    }
}
