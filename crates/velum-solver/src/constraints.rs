//! XPBD distance constraint projection.
//!
//! One constraint set covers both constraint families: stretching
//! constraints act along mesh edges, bending constraints act between
//! the wing vertices of each interior edge. Both reduce to the same
//! compliance-weighted distance projection.

use velum_math::kernel;
use velum_mesh::ClothTopology;

/// A set of distance constraints with precomputed rest lengths.
///
/// Rest lengths are measured once against the construction-time
/// positions and never recomputed.
#[derive(Debug, Clone)]
pub struct DistanceConstraints {
    /// Constraint endpoints as particle index pairs.
    pub pairs: Vec<[u32; 2]>,
    /// Euclidean rest distance per constraint.
    pub rest_lengths: Vec<f32>,
}

impl DistanceConstraints {
    /// Build the stretching set: one constraint per unique mesh edge.
    pub fn stretching(topology: &ClothTopology, positions: &[f32]) -> Self {
        Self::from_pairs(topology.stretch_edges.clone(), positions)
    }

    /// Build the bending set: one constraint per interior edge,
    /// connecting the two triangles' opposite (wing) vertices.
    pub fn bending(topology: &ClothTopology, positions: &[f32]) -> Self {
        let pairs = topology
            .bending_pairs
            .iter()
            .map(|&[_, _, wing_a, wing_b]| [wing_a, wing_b])
            .collect();
        Self::from_pairs(pairs, positions)
    }

    fn from_pairs(pairs: Vec<[u32; 2]>, positions: &[f32]) -> Self {
        let rest_lengths = pairs
            .iter()
            .map(|&[a, b]| kernel::dist_sq(positions, a as usize, positions, b as usize).sqrt())
            .collect();
        Self { pairs, rest_lengths }
    }

    /// Returns the number of constraints.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Project all constraints once, in sequence (Gauss–Seidel style).
    ///
    /// Per constraint with endpoints `(a, b)`, inverse masses
    /// `(w0, w1)` and rest length `L`:
    ///
    /// ```text
    /// alpha  = compliance / dt²
    /// C      = |pos[a] − pos[b]| − L
    /// s      = −C / (w0 + w1 + alpha)
    /// pos[a] += s · w0 · n
    /// pos[b] −= s · w1 · n
    /// ```
    ///
    /// Degenerate cases are skipped for this pass: a zero-length
    /// gradient has no direction, and a constraint with both endpoints
    /// pinned admits no correction. Convergence comes from substepping,
    /// not from extra iterations of this single pass.
    pub fn project(&self, pos: &mut [f32], inv_mass: &[f32], compliance: f32, dt: f32) {
        let alpha = compliance / (dt * dt);

        for (i, &[a, b]) in self.pairs.iter().enumerate() {
            let id0 = a as usize;
            let id1 = b as usize;
            let w0 = inv_mass[id0];
            let w1 = inv_mass[id1];
            let w = w0 + w1;
            if w == 0.0 {
                continue;
            }

            let d = kernel::read(pos, id0) - kernel::read(pos, id1);
            let len = d.length();
            if len == 0.0 {
                continue;
            }
            let n = d / len;

            let c = len - self.rest_lengths[i];
            let s = -c / (w + alpha);

            kernel::write(pos, id0, kernel::read(pos, id0) + n * (s * w0));
            kernel::write(pos, id1, kernel::read(pos, id1) - n * (s * w1));
        }
    }
}
