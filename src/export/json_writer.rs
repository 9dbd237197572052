use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::error::{MeshForgeError, Result};
use crate::overlay::OverlayGeometry;
use crate::types::{compute_bounding_box, MeshBuffers};

/// Write mesh buffers (and overlay geometry, when present) as a
/// pretty-printed JSON document.
///
/// Absent attribute buffers are left out of the document rather than written
/// as empty arrays.
pub fn write_json(
    mesh: &MeshBuffers,
    overlay: Option<&OverlayGeometry>,
    path: &Path,
) -> Result<()> {
    let mut doc = json!({
        "asset": {
            "generator": "mesh-forge",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "mesh": {
            "vertexCount": mesh.vertex_count(),
            "triangleCount": mesh.triangle_count(),
            "positions": mesh.positions,
            "indices": mesh.indices,
        },
    });

    if mesh.has_normals() {
        doc["mesh"]["normals"] = json!(mesh.normals);
    }
    if mesh.has_uvs() {
        doc["mesh"]["uvs"] = json!(mesh.uvs);
    }
    if mesh.has_colors() {
        doc["mesh"]["colors"] = json!(mesh.colors);
    }
    if mesh.has_tangents() {
        doc["mesh"]["tangents"] = json!(mesh.tangents);
    }

    if let Some(bb) = compute_bounding_box(mesh) {
        doc["mesh"]["bounds"] = json!({
            "min": bb.min.to_array(),
            "max": bb.max.to_array(),
        });
    }

    if let Some(overlay) = overlay {
        doc["overlay"] = serde_json::to_value(overlay)
            .map_err(|e| MeshForgeError::Output(format!("Failed to serialize overlay: {e}")))?;
    }

    let json_string = serde_json::to_string_pretty(&doc)
        .map_err(|e| MeshForgeError::Output(format!("Failed to serialize mesh: {e}")))?;

    fs::write(path, &json_string)
        .map_err(|e| MeshForgeError::Output(format!("Failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), bytes = json_string.len(), "Wrote JSON");
    Ok(())
}
