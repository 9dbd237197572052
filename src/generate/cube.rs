use crate::attributes::recalculate_normals;
use crate::types::MeshBuffers;

/// Generate a unit cube with 8 shared corner vertices and 12 triangles.
///
/// Corners are shared between faces, so per-vertex normals are averaged
/// across the adjoining faces by [`recalculate_normals`] rather than supplied
/// per face. UVs wrap the same 0..1 square around bottom and top rings.
pub fn generate_cube() -> MeshBuffers {
    let positions = vec![
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 1.0, 1.0, //
        1.0, 1.0, 1.0, //
        1.0, 0.0, 1.0, //
        0.0, 0.0, 1.0,
    ];

    let uvs = vec![
        0.0, 0.0, //
        1.0, 0.0, //
        1.0, 1.0, //
        0.0, 1.0, //
        0.0, 0.0, //
        1.0, 0.0, //
        1.0, 1.0, //
        0.0, 1.0,
    ];

    let indices = vec![
        0, 2, 1, // front
        0, 3, 2, //
        2, 3, 4, // top
        2, 4, 5, //
        1, 2, 5, // right
        1, 5, 6, //
        0, 7, 4, // left
        0, 4, 3, //
        5, 4, 7, // back
        5, 7, 6, //
        0, 6, 7, // bottom
        0, 1, 6,
    ];

    let mut mesh = MeshBuffers {
        positions,
        normals: vec![],
        uvs,
        colors: vec![],
        tangents: vec![],
        indices,
    };

    recalculate_normals(&mut mesh);
    mesh
}
