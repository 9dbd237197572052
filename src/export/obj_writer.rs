use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MeshForgeError, Result};
use crate::overlay::OverlayGeometry;
use crate::types::MeshBuffers;

/// Write mesh buffers as a Wavefront OBJ file.
///
/// Faces reference position/uv/normal with the same index since the buffers
/// are positionally aligned. Vertex colors, when present, use the common
/// `v x y z r g b` extension. UVs are written as-is: the generators and OBJ
/// share a bottom-left origin.
pub fn write_obj(mesh: &MeshBuffers, path: &Path) -> Result<()> {
    let mut obj = String::new();

    for (i, pos) in mesh.positions.chunks_exact(3).enumerate() {
        if mesh.has_colors() {
            let c = &mesh.colors[i * 4..i * 4 + 3];
            obj.push_str(&format!(
                "v {} {} {} {} {} {}\n",
                pos[0], pos[1], pos[2], c[0], c[1], c[2]
            ));
        } else {
            obj.push_str(&format!("v {} {} {}\n", pos[0], pos[1], pos[2]));
        }
    }

    for uv in mesh.uvs.chunks_exact(2) {
        obj.push_str(&format!("vt {} {}\n", uv[0], uv[1]));
    }

    for nrm in mesh.normals.chunks_exact(3) {
        obj.push_str(&format!("vn {} {} {}\n", nrm[0], nrm[1], nrm[2]));
    }

    for tri in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        let face = match (mesh.has_uvs(), mesh.has_normals()) {
            (true, true) => format!("f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}\n"),
            (true, false) => format!("f {a}/{a} {b}/{b} {c}/{c}\n"),
            (false, true) => format!("f {a}//{a} {b}//{b} {c}//{c}\n"),
            (false, false) => format!("f {a} {b} {c}\n"),
        };
        obj.push_str(&face);
    }

    fs::write(path, &obj)
        .map_err(|e| MeshForgeError::Output(format!("Failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), bytes = obj.len(), "Wrote OBJ");
    Ok(())
}

/// Write overlay line segments as an OBJ of `v` + `l` records.
///
/// Labels have no OBJ representation and are omitted; the JSON format keeps
/// them.
pub fn write_overlay_obj(overlay: &OverlayGeometry, path: &Path) -> Result<()> {
    let mut obj = String::new();

    for line in &overlay.lines {
        obj.push_str(&format!(
            "v {} {} {}\n",
            line.start[0], line.start[1], line.start[2]
        ));
        obj.push_str(&format!(
            "v {} {} {}\n",
            line.end[0], line.end[1], line.end[2]
        ));
    }

    for i in 0..overlay.lines.len() {
        let a = i * 2 + 1;
        obj.push_str(&format!("l {} {}\n", a, a + 1));
    }

    fs::write(path, &obj)
        .map_err(|e| MeshForgeError::Output(format!("Failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), lines = overlay.lines.len(), "Wrote overlay OBJ");
    Ok(())
}
