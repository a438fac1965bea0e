//! # velum-math
//!
//! Math primitives for the Velum cloth core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, etc.) as the canonical math types
//! - The flat-buffer vector kernel used by the solver's inner loops

pub mod kernel;

// Re-export glam types as the canonical math types for Velum.
pub use glam::{Vec2, Vec3, Vec4};
