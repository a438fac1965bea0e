//! Error types for the Velum core.
//!
//! All crates return `VelumResult<T>` from fallible operations.
//! The simulation itself is a deterministic single-pass function of its
//! state — failures are validation rejections at construction time,
//! never transient runtime errors.

use thiserror::Error;

/// Unified error type for the Velum core.
#[derive(Debug, Error)]
pub enum VelumError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Mesh topology violates the manifold precondition
    /// (an edge shared by three or more triangles).
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// An operation that needs at least one particle was called on a
    /// cloth with none (e.g. grabbing an empty mesh).
    #[error("Empty topology: {0}")]
    EmptyTopology(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, VelumError>`.
pub type VelumResult<T> = Result<T, VelumError>;
