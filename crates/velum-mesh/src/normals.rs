//! Vertex normal recomputation.
//!
//! Area-weighted vertex normals, accumulated from each adjacent
//! triangle's face normal. The integrator calls this at end of frame so
//! the renderer sees shading that matches the solved positions.

use velum_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's unnormalized face normal (cross product of two edge
/// vectors, magnitude = 2 × area) is accumulated at its three vertices,
/// then the per-vertex sums are normalized. Modifies the mesh's
/// `normal_{x,y,z}` arrays in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();

    mesh.normal_x[..n].fill(0.0);
    mesh.normal_y[..n].fill(0.0);
    mesh.normal_z[..n].fill(0.0);

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let a = ia as usize;
        let b = ib as usize;
        let c = ic as usize;

        let pa = mesh.position_vec3(a);
        let face = (mesh.position_vec3(b) - pa).cross(mesh.position_vec3(c) - pa);

        for &v in &[a, b, c] {
            mesh.normal_x[v] += face.x;
            mesh.normal_y[v] += face.y;
            mesh.normal_z[v] += face.z;
        }
    }

    for i in 0..n {
        let v = Vec3::new(mesh.normal_x[i], mesh.normal_y[i], mesh.normal_z[i]);
        let len = v.length();
        if len > 1e-10 {
            let unit = v / len;
            mesh.normal_x[i] = unit.x;
            mesh.normal_y[i] = unit.y;
            mesh.normal_z[i] = unit.z;
        }
    }
}
