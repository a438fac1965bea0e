//! Particle state — flat per-particle buffers plus mass lumping.
//!
//! This is the primary mutable data during simulation. Vector channels
//! are interleaved flat buffers (`[x0, y0, z0, x1, y1, z1, ...]`)
//! addressed by particle index through `velum_math::kernel`, so the
//! position buffer can be handed to a renderer as-is.

use velum_math::kernel;
use velum_mesh::TriangleMesh;

/// Per-particle simulation buffers.
///
/// All vector buffers have length `3 * num_particles`; `inv_mass` has
/// length `num_particles`.
///
/// Invariant: `inv_mass[i] == 0` if and only if particle `i` is
/// immovable — structurally pinned at construction or currently grabbed.
pub struct ClothState {
    /// Number of particles (one per mesh vertex).
    pub num_particles: usize,

    /// Current solved positions.
    pub pos: Vec<f32>,

    /// Positions before the current substep's prediction; used to
    /// reconstruct velocity.
    pub prev: Vec<f32>,

    /// Initial positions at construction. Never read after
    /// construction; reserved for future shape-matching constraints.
    pub rest: Vec<f32>,

    /// Per-particle velocities, updated at substep boundaries.
    pub vel: Vec<f32>,

    /// Inverse masses; 0 encodes infinite mass.
    pub inv_mass: Vec<f32>,
}

impl ClothState {
    /// Initialize state from a mesh.
    ///
    /// Positions are copied from the mesh; velocities start at zero and
    /// inverse masses are lumped from triangle areas.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let n = mesh.vertex_count();
        let positions = mesh.positions_interleaved();

        let mut state = Self {
            num_particles: n,
            pos: positions.clone(),
            prev: positions.clone(),
            rest: positions,
            vel: vec![0.0; 3 * n],
            inv_mass: vec![0.0; n],
        };
        state.lump_inverse_masses(&mesh.indices);
        state
    }

    /// Accumulate inverse masses from triangle areas.
    ///
    /// Each triangle of area `A` assigns `A / 3` of participating mass
    /// to each of its vertices, i.e. `inv_mass += 1 / (A / 3)` when
    /// `A > 0`. A degenerate (zero-area) triangle contributes nothing.
    /// Larger-area neighborhoods end up with lower inverse mass, the
    /// standard mass-lumping approximation for a uniform-density sheet.
    pub fn lump_inverse_masses(&mut self, indices: &[u32]) {
        self.inv_mass.fill(0.0);

        let num_tris = indices.len() / 3;
        let mut e0 = [0.0f32; 3];
        let mut e1 = [0.0f32; 3];
        let mut c = [0.0f32; 3];

        for t in 0..num_tris {
            let id0 = indices[3 * t] as usize;
            let id1 = indices[3 * t + 1] as usize;
            let id2 = indices[3 * t + 2] as usize;

            kernel::set_diff(&mut e0, 0, &self.pos, id1, &self.pos, id0, 1.0);
            kernel::set_diff(&mut e1, 0, &self.pos, id2, &self.pos, id0, 1.0);
            kernel::set_cross(&mut c, 0, &e0, 0, &e1, 0);

            let area = 0.5 * kernel::length_sq(&c, 0).sqrt();
            let p_inv_mass = if area > 0.0 { 1.0 / (area / 3.0) } else { 0.0 };

            self.inv_mass[id0] += p_inv_mass;
            self.inv_mass[id1] += p_inv_mass;
            self.inv_mass[id2] += p_inv_mass;
        }
    }

    /// Force the given particles to be immovable.
    pub fn apply_pinned(&mut self, pinned: &[bool]) {
        for (i, &pin) in pinned.iter().enumerate().take(self.num_particles) {
            if pin {
                self.inv_mass[i] = 0.0;
            }
        }
    }

    /// Returns true if particle `i` is immovable.
    #[inline]
    pub fn is_pinned(&self, i: usize) -> bool {
        self.inv_mass[i] == 0.0
    }

    /// Sum of all inverse masses (diagnostic; area-weighted total).
    pub fn total_inverse_mass(&self) -> f64 {
        self.inv_mass.iter().map(|&w| w as f64).sum()
    }
}
