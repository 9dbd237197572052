use glam::Vec2;

use crate::types::MeshBuffers;

/// Default vertex color: opaque white.
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Generate a subdivided planar grid mesh in the XZ plane at y = 0.
///
/// `size` is the total extent along X and Z; `resolution` is the number of
/// subdivisions per axis and is clamped to at least 1 (0 would divide by
/// zero). Vertices form an `(n+1) x (n+1)` row-major grid with up-facing
/// normals, `[0,1]` UVs, and white vertex colors. Size components are not
/// validated: zero or negative size yields a degenerate but well-formed mesh.
///
/// Each call allocates fresh buffers; the function holds no shared state.
pub fn generate_plane(size: Vec2, resolution: u32) -> MeshBuffers {
    generate_plane_with_colors(size, resolution, |_, _, _| WHITE)
}

/// Like [`generate_plane`], but with a caller-supplied per-vertex color.
///
/// The closure receives the vertex's grid row, grid column, and UV.
pub fn generate_plane_with_colors<F>(size: Vec2, resolution: u32, mut color: F) -> MeshBuffers
where
    F: FnMut(u32, u32, Vec2) -> [f32; 4],
{
    let n = resolution.max(1);

    let x_step = size.x / n as f32;
    let z_step = size.y / n as f32;

    // An n x n grid of cells needs (n+1) x (n+1) vertices
    let vertex_count = ((n + 1) * (n + 1)) as usize;

    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);
    let mut uvs = Vec::with_capacity(vertex_count * 2);
    let mut colors = Vec::with_capacity(vertex_count * 4);

    for row in 0..=n {
        for col in 0..=n {
            positions.extend_from_slice(&[col as f32 * x_step, 0.0, row as f32 * z_step]);
            normals.extend_from_slice(&[0.0, 1.0, 0.0]);

            let uv = Vec2::new(col as f32, row as f32) / n as f32;
            uvs.extend_from_slice(&[uv.x, uv.y]);
            colors.extend_from_slice(&color(row, col, uv));
        }
    }

    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for row in 0..n {
        for col in 0..n {
            let i = row * (n + 1) + col;

            // Two triangles per cell, both counter-clockwise seen from +Y
            indices.extend_from_slice(&[i, i + n + 1, i + n + 2]);
            indices.extend_from_slice(&[i, i + n + 2, i + 1]);
        }
    }

    MeshBuffers {
        positions,
        normals,
        uvs,
        colors,
        tangents: vec![],
        indices,
    }
}
