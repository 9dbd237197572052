use glam::Vec3;

use crate::types::MeshBuffers;

/// Rebuild the per-vertex normal buffer from triangle geometry.
///
/// Each triangle's edge cross product is accumulated onto its three corners
/// and the sums are normalized, so larger triangles weigh more. Degenerate
/// triangles contribute nothing; vertices referenced by no triangle end up
/// with a zero normal. The result agrees with the generators' winding: a
/// counter-clockwise triangle gets a normal on its counter-clockwise side.
pub fn recalculate_normals(mesh: &mut MeshBuffers) {
    let vertex_count = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; vertex_count];

    for tri in mesh.indices.chunks_exact(3) {
        let a = mesh.position(tri[0] as usize);
        let b = mesh.position(tri[1] as usize);
        let c = mesh.position(tri[2] as usize);

        // Unnormalized: magnitude is twice the triangle area
        let face = (b - a).cross(c - a);

        accum[tri[0] as usize] += face;
        accum[tri[1] as usize] += face;
        accum[tri[2] as usize] += face;
    }

    mesh.normals.clear();
    mesh.normals.reserve(vertex_count * 3);
    for n in accum {
        let n = n.normalize_or_zero();
        mesh.normals.extend_from_slice(&[n.x, n.y, n.z]);
    }
}
