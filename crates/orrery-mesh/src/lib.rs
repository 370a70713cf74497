//! Procedural UV-sphere mesh generation for the orrery demo.
//!
//! The sphere is tessellated by a regular latitude/longitude grid. Vertices
//! are emitted latitude-major (one full ring of longitude samples per
//! latitude step), interleaved as position + normal + uv, and indexed with
//! two triangles per grid cell. Generation is a pure function of the segment
//! counts: the same inputs always produce bit-identical buffers.

mod sphere;
mod vertex;

pub use sphere::{LON_SPAN, SphereMesh, generate_sphere_indices, generate_sphere_vertices};
pub use vertex::SphereVertex;
