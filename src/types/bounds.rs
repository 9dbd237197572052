use glam::Vec3;

use crate::types::MeshBuffers;

/// Axis-aligned bounding box in 3-D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Centre point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-extents along each axis.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Length of the space diagonal.
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }
}

/// Compute the bounding box of a mesh from its positions.
///
/// Returns `None` for an empty mesh. The generators supply normals
/// explicitly, so this derived-data pass is the only recomputation a host
/// needs after taking ownership of the buffers.
pub fn compute_bounding_box(mesh: &MeshBuffers) -> Option<BoundingBox> {
    if mesh.is_empty() {
        return None;
    }

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for pos in mesh.positions.chunks_exact(3) {
        let p = Vec3::new(pos[0], pos[1], pos[2]);
        min = min.min(p);
        max = max.max(p);
    }

    Some(BoundingBox { min, max })
}
