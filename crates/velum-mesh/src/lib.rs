//! # velum-mesh
//!
//! Triangle mesh representation and cloth constraint topology.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — The core mesh type. Stores positions, normals,
//!   and UVs in contiguous SoA buffers plus a flat triangle index list.
//! - [`ClothTopology`] — Stretching edges and bending pairs derived from
//!   the triangle list via an edge-adjacency pass.
//! - Procedural generators for test meshes (quad grids).

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::TriangleMesh;
pub use topology::ClothTopology;
