//! # velum-solver
//!
//! The XPBD cloth core: particle state, constraint projection, the
//! substep integrator, and interactive grabbing.
//!
//! ## Key Types
//!
//! - [`ClothSim`] — Owns one cloth instance: mesh, topology, state,
//!   constraints, and grab state. Drives `pre_solve → solve → post_solve`
//!   substeps and end-of-frame bookkeeping.
//! - [`ClothState`] — Flat per-particle buffers (position, previous
//!   position, rest position, velocity, inverse mass).
//! - [`DistanceConstraints`] — Compliance-weighted XPBD distance
//!   constraint set (used for both stretching and bending).
//! - [`ClothConfig`] — Tunables: substeps, gravity, compliances,
//!   ground plane, pin policy.
//! - [`PinPolicy`] — Boundary-condition policy selecting structurally
//!   pinned particles.

pub mod cloth;
pub mod config;
pub mod constraints;
pub mod pinning;
pub mod state;

pub use cloth::ClothSim;
pub use config::ClothConfig;
pub use constraints::DistanceConstraints;
pub use pinning::PinPolicy;
pub use state::ClothState;
