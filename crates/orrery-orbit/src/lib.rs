//! Hierarchical orbital animation for the orrery demo.
//!
//! Bodies are described declaratively as a flat tree of [`Body`] records
//! (each naming its parent by index), and [`model_matrices`] turns that tree
//! plus an elapsed time into one model matrix per body. Children orbit the
//! translation of their parent only: a parent's tilt, spin, and scale never
//! propagate down.

mod animator;
mod body;

pub use animator::{BodyTransforms, compute_transforms, model_matrices};
pub use body::{Body, solar_system};
