//! # velum-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Velum cloth simulation core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Velum crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{VelumError, VelumResult};
pub use ids::{ParticleId, TriangleId};
pub use scalar::Scalar;
