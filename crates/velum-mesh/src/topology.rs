//! Cloth constraint topology.
//!
//! Derives unique stretching edges and bending (triangle-pair)
//! constraints from the triangle index buffer using a sorted
//! edge-adjacency pass. Built once when a mesh is loaded; the solver
//! consumes the result and never recomputes it.

use velum_types::{VelumError, VelumResult};

use crate::mesh::TriangleMesh;

/// Marker for a triangle edge without a neighboring triangle.
pub const NO_NEIGHBOR: i32 = -1;

/// Constraint topology derived from a manifold triangle mesh.
///
/// # Precondition
///
/// The mesh must be 2-manifold: every edge borders at most two
/// triangles. [`ClothTopology::build`] rejects meshes that violate this
/// instead of silently mis-pairing.
#[derive(Debug, Clone)]
pub struct ClothTopology {
    /// Per-triangle edge adjacency: `neighbors[3*t + e]` is the edge
    /// reference (`3*other_t + other_e`) of the matching edge in the
    /// neighboring triangle, or [`NO_NEIGHBOR`] for a boundary edge.
    pub neighbors: Vec<i32>,

    /// Unique mesh edges as particle index pairs. Each edge shared by
    /// two triangles appears exactly once; boundary edges are always
    /// included. One stretching constraint per entry.
    pub stretch_edges: Vec<[u32; 2]>,

    /// Per interior edge: `[e0, e1, wing_a, wing_b]`, where `e0`/`e1`
    /// span the shared edge and `wing_a`/`wing_b` are the opposite
    /// vertices of the two adjoining triangles. One bending constraint
    /// per entry, acting between the wings.
    pub bending_pairs: Vec<[u32; 4]>,
}

/// One directed triangle edge, keyed by its canonicalized endpoints.
#[derive(Debug, Clone, Copy)]
struct EdgeRecord {
    min_id: u32,
    max_id: u32,
    /// `3 * triangle + local_edge`.
    edge_ref: u32,
}

impl ClothTopology {
    /// Build constraint topology from a triangle mesh.
    ///
    /// Emits one `(min_id, max_id, edge_ref)` record per triangle edge,
    /// sorts by endpoint key, and matches adjacent equal keys as
    /// neighbors. An unmatched edge is a boundary edge. A key appearing
    /// more than twice means the mesh is non-manifold and the build
    /// fails with [`VelumError::InvalidTopology`].
    pub fn build(mesh: &TriangleMesh) -> VelumResult<Self> {
        let tri_count = mesh.triangle_count();

        let mut records = Vec::with_capacity(tri_count * 3);
        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            let tri_edges = [(a, b), (b, c), (c, a)];
            for (e, (v0, v1)) in tri_edges.into_iter().enumerate() {
                records.push(EdgeRecord {
                    min_id: v0.min(v1),
                    max_id: v0.max(v1),
                    edge_ref: (3 * t + e) as u32,
                });
            }
        }

        records.sort_unstable_by_key(|r| (r.min_id, r.max_id));

        let mut neighbors = vec![NO_NEIGHBOR; tri_count * 3];
        let mut at = 0;
        while at < records.len() {
            let run_start = at;
            let key = (records[at].min_id, records[at].max_id);
            while at < records.len() && (records[at].min_id, records[at].max_id) == key {
                at += 1;
            }
            match at - run_start {
                1 => {} // boundary edge
                2 => {
                    let r0 = records[run_start].edge_ref as usize;
                    let r1 = records[run_start + 1].edge_ref as usize;
                    neighbors[r0] = r1 as i32;
                    neighbors[r1] = r0 as i32;
                }
                n => {
                    return Err(VelumError::InvalidTopology(format!(
                        "edge ({}, {}) is shared by {} triangles (manifold meshes \
                         allow at most 2)",
                        key.0, key.1, n
                    )));
                }
            }
        }

        // Second pass: walk every triangle edge, emitting each unique
        // edge once and one bending pair per interior edge. The
        // `id0 < id1` test picks a single owner for a shared edge
        // (winding-consistent meshes traverse it in both directions).
        let mut stretch_edges = Vec::new();
        let mut bending_pairs = Vec::new();

        for t in 0..tri_count {
            let tri = mesh.triangle(t);
            for e in 0..3 {
                let id0 = tri[e];
                let id1 = tri[(e + 1) % 3];
                let n = neighbors[3 * t + e];

                if n == NO_NEIGHBOR || id0 < id1 {
                    stretch_edges.push([id0, id1]);
                }

                if n != NO_NEIGHBOR && id0 < id1 {
                    let nt = (n / 3) as usize;
                    let ne = (n % 3) as usize;
                    let wing_a = tri[(e + 2) % 3];
                    let wing_b = mesh.triangle(nt)[(ne + 2) % 3];
                    bending_pairs.push([id0, id1, wing_a, wing_b]);
                }
            }
        }

        Ok(Self {
            neighbors,
            stretch_edges,
            bending_pairs,
        })
    }

    /// Returns the number of stretching constraints.
    pub fn stretch_count(&self) -> usize {
        self.stretch_edges.len()
    }

    /// Returns the number of bending constraints.
    pub fn bending_count(&self) -> usize {
        self.bending_pairs.len()
    }

    /// Returns the number of boundary edges (edges without a matched
    /// neighbor).
    pub fn boundary_edge_count(&self) -> usize {
        self.neighbors.iter().filter(|&&n| n == NO_NEIGHBOR).count()
    }
}
