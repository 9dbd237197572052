use crate::types::MeshBuffers;

/// Generate a unit quad in the XY plane at z = 0.
///
/// Four vertices, two triangles, facing -Z. Carries the full attribute set:
/// UVs, normals, per-corner vertex colors (red, green, blue, yellow), and
/// constant tangents with left-handed `w`.
pub fn generate_quad() -> MeshBuffers {
    let positions = vec![
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        1.0, 1.0, 0.0,
    ];

    let indices = vec![
        0, 2, 1, //
        1, 2, 3,
    ];

    let uvs = vec![
        0.0, 0.0, //
        1.0, 0.0, //
        0.0, 1.0, //
        1.0, 1.0,
    ];

    let normals = vec![
        0.0, 0.0, -1.0, //
        0.0, 0.0, -1.0, //
        0.0, 0.0, -1.0, //
        0.0, 0.0, -1.0,
    ];

    let colors = vec![
        1.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0, //
        0.0, 0.0, 1.0, 1.0, //
        1.0, 1.0, 0.0, 1.0,
    ];

    let tangents = vec![
        1.0, 0.0, 0.0, -1.0, //
        1.0, 0.0, 0.0, -1.0, //
        1.0, 0.0, 0.0, -1.0, //
        1.0, 0.0, 0.0, -1.0,
    ];

    MeshBuffers {
        positions,
        normals,
        uvs,
        colors,
        tangents,
        indices,
    }
}
