use glam::Vec3;

/// The fundamental geometry container.
///
/// All buffers are contiguous `Vec<f32>` / `Vec<u32>` for zero-copy handoff to
/// a rendering host. Per-vertex buffers are positionally aligned: the i-th
/// entry of every attribute describes the same vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Interleaved positions: [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Interleaved normals: [nx, ny, nz, ...] or empty
    pub normals: Vec<f32>,
    /// Interleaved UVs: [u, v, u, v, ...] or empty
    pub uvs: Vec<f32>,
    /// Interleaved vertex colors: [r, g, b, a, ...] or empty
    pub colors: Vec<f32>,
    /// Interleaved tangents: [x, y, z, w, ...] or empty; w carries handedness
    pub tangents: Vec<f32>,
    /// Triangle indices into the vertex buffers
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Number of vertices (positions / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (indices / 3).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether normals are present.
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether UV coordinates are present.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Whether vertex colors are present.
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Whether tangents are present.
    pub fn has_tangents(&self) -> bool {
        !self.tangents.is_empty()
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i`.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Normal of vertex `i`. Requires `has_normals()`.
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.normals[i * 3],
            self.normals[i * 3 + 1],
            self.normals[i * 3 + 2],
        )
    }

    /// Check buffer alignment and index ranges.
    ///
    /// Every present attribute buffer must cover exactly `vertex_count()`
    /// vertices at its stride, the index count must be a multiple of 3, and
    /// every index must reference an existing vertex.
    pub fn validate(&self) -> bool {
        if self.positions.len() % 3 != 0 {
            return false;
        }
        let vertex_count = self.vertex_count();

        if self.has_normals() && self.normals.len() != vertex_count * 3 {
            return false;
        }
        if self.has_uvs() && self.uvs.len() != vertex_count * 2 {
            return false;
        }
        if self.has_colors() && self.colors.len() != vertex_count * 4 {
            return false;
        }
        if self.has_tangents() && self.tangents.len() != vertex_count * 4 {
            return false;
        }
        if self.indices.len() % 3 != 0 {
            return false;
        }

        self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }
}
