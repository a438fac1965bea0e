//! Integration tests for velum-mesh.

use velum_mesh::generators::quad_grid;
use velum_mesh::normals::compute_vertex_normals;
use velum_mesh::{ClothTopology, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        uv_u: vec![0.0, 1.0, 0.0],
        uv_v: vec![0.0, 0.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

/// Single quad: 4 vertices, 2 triangles sharing the (1, 2) diagonal.
fn make_single_quad() -> TriangleMesh {
    TriangleMesh::from_interleaved(
        &[
            0.0, 0.0, 0.0, // 0: bottom-left
            1.0, 0.0, 0.0, // 1: bottom-right
            0.0, 1.0, 0.0, // 2: top-left
            1.0, 1.0, 0.0, // 3: top-right
        ],
        &[0, 1, 2, 1, 3, 2],
        &[],
    )
    .unwrap()
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn validate_ok() {
    let mesh = make_single_triangle();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved_roundtrip() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = vec![0, 1, 2];
    let uvs = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &indices, &uvs).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.uv_u, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.positions_interleaved(), positions);
}

#[test]
fn mesh_serialization_roundtrip() {
    let mesh = make_single_quad();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.vertex_count(), 4);
    assert_eq!(recovered.indices, mesh.indices);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_stays_above_ground() {
    let mesh = quad_grid(4, 4, 2.0, 1.5);
    for &y in &mesh.pos_y {
        assert!(y >= 0.0, "grid vertex below ground: y={y}");
    }
    let max_y = mesh.pos_y.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!((max_y - 1.5).abs() < 1e-6);
}

#[test]
fn quad_grid_20x20() {
    let mesh = quad_grid(20, 20, 2.0, 2.0);
    assert_eq!(mesh.vertex_count(), 441);
    assert_eq!(mesh.triangle_count(), 800);
    assert!(mesh.validate().is_ok());
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn single_triangle_topology() {
    let mesh = make_single_triangle();
    let topo = ClothTopology::build(&mesh).unwrap();
    assert_eq!(topo.stretch_count(), 3); // All edges are boundary
    assert_eq!(topo.bending_count(), 0); // No interior edge
    assert_eq!(topo.boundary_edge_count(), 3);
}

#[test]
fn single_quad_topology() {
    // 2 triangles, 1 shared edge: 5 unique edges, 1 bending pair.
    let mesh = make_single_quad();
    let topo = ClothTopology::build(&mesh).unwrap();
    assert_eq!(topo.stretch_count(), 5);
    assert_eq!(topo.bending_count(), 1);
    assert_eq!(topo.boundary_edge_count(), 4);
}

#[test]
fn single_quad_bending_wings() {
    // The shared edge is (1, 2); the wings are vertices 0 and 3.
    let mesh = make_single_quad();
    let topo = ClothTopology::build(&mesh).unwrap();
    let [e0, e1, wa, wb] = topo.bending_pairs[0];
    let mut edge = [e0, e1];
    edge.sort_unstable();
    assert_eq!(edge, [1, 2]);
    let mut wings = [wa, wb];
    wings.sort_unstable();
    assert_eq!(wings, [0, 3]);
}

#[test]
fn shared_edges_deduplicated() {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    let topo = ClothTopology::build(&mesh).unwrap();

    let mut keys: Vec<(u32, u32)> = topo
        .stretch_edges
        .iter()
        .map(|&[a, b]| (a.min(b), a.max(b)))
        .collect();
    keys.sort_unstable();
    let before = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), before, "duplicate stretching edge emitted");
}

#[test]
fn quad_grid_edge_counts() {
    // For a c×r quad grid: horizontal (c)(r+1) + vertical (c+1)(r)
    // + one diagonal per quad.
    let (c, r) = (4, 3);
    let mesh = quad_grid(c, r, 1.0, 1.0);
    let topo = ClothTopology::build(&mesh).unwrap();
    let expected = c * (r + 1) + (c + 1) * r + c * r;
    assert_eq!(topo.stretch_count(), expected);
    // One bending pair per interior edge; diagonals are all interior,
    // plus the interior horizontal and vertical grid lines.
    let interior = c * r + c * (r - 1) + (c - 1) * r;
    assert_eq!(topo.bending_count(), interior);
}

#[test]
fn topology_rebuild_is_identical() {
    let mesh = quad_grid(5, 5, 1.0, 1.0);
    let a = ClothTopology::build(&mesh).unwrap();
    let b = ClothTopology::build(&mesh).unwrap();
    assert_eq!(a.stretch_edges, b.stretch_edges);
    assert_eq!(a.bending_pairs, b.bending_pairs);
}

#[test]
fn non_manifold_edge_rejected() {
    // Three triangles fanning around the same edge (0, 1).
    let mesh = TriangleMesh::from_interleaved(
        &[
            0.0, 0.0, 0.0, // 0
            1.0, 0.0, 0.0, // 1
            0.5, 1.0, 0.0, // 2
            0.5, -1.0, 0.0, // 3
            0.5, 0.0, 1.0, // 4
        ],
        &[0, 1, 2, 0, 3, 1, 0, 1, 4],
        &[],
    )
    .unwrap();

    let err = ClothTopology::build(&mesh).unwrap_err();
    assert!(
        matches!(err, velum_types::VelumError::InvalidTopology(_)),
        "expected InvalidTopology, got: {err}"
    );
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_face_z() {
    let mut mesh = quad_grid(3, 3, 1.0, 1.0);
    // Scramble stored normals; recomputation must fix them.
    mesh.normal_z.iter_mut().for_each(|z| *z = 0.0);
    compute_vertex_normals(&mut mesh);

    for i in 0..mesh.vertex_count() {
        assert!(mesh.normal_x[i].abs() < 1e-6);
        assert!(mesh.normal_y[i].abs() < 1e-6);
        assert!(
            (mesh.normal_z[i].abs() - 1.0).abs() < 1e-6,
            "normal {i} not unit-Z: {}",
            mesh.normal_z[i]
        );
    }
}

#[test]
fn normals_are_unit_length() {
    let mut mesh = quad_grid(4, 4, 2.0, 2.0);
    // Bend the sheet so normals vary.
    for i in 0..mesh.vertex_count() {
        mesh.pos_z[i] = (mesh.pos_x[i] * 3.0).sin() * 0.2;
    }
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let len_sq = mesh.normal_x[i] * mesh.normal_x[i]
            + mesh.normal_y[i] * mesh.normal_y[i]
            + mesh.normal_z[i] * mesh.normal_z[i];
        assert!((len_sq - 1.0).abs() < 1e-4, "normal {i} not unit: {len_sq}");
    }
}
