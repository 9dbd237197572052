pub mod json_writer;
pub mod obj_writer;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MeshForgeError, Result};
use crate::overlay::OverlayGeometry;
use crate::types::MeshBuffers;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[value(name = "obj")]
    Obj,
    #[value(name = "json")]
    Json,
}

impl OutputFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "obj" => Ok(OutputFormat::Obj),
            "json" => Ok(OutputFormat::Json),
            _ => Err(MeshForgeError::Output(format!(
                "Unsupported output format: .{ext}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Obj => "OBJ",
            OutputFormat::Json => "JSON",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write the mesh (and overlay geometry, when present) to `path`.
///
/// With the OBJ format, overlay lines go to a `<stem>_overlay.obj` sidecar
/// since OBJ has no room for them next to the faces; JSON embeds everything
/// in one document.
pub fn export(
    mesh: &MeshBuffers,
    overlay: Option<&OverlayGeometry>,
    format: OutputFormat,
    path: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        OutputFormat::Obj => {
            obj_writer::write_obj(mesh, path)?;
            if let Some(overlay) = overlay {
                let sidecar = overlay_sidecar_path(path);
                obj_writer::write_overlay_obj(overlay, &sidecar)?;
                info!(path = %sidecar.display(), "Wrote overlay sidecar");
            }
        }
        OutputFormat::Json => json_writer::write_json(mesh, overlay, path)?,
    }

    info!(path = %path.display(), format = %format, "Wrote mesh");
    Ok(())
}

/// Sidecar path for overlay lines: `plane.obj` → `plane_overlay.obj`.
pub fn overlay_sidecar_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    path.with_file_name(format!("{stem}_overlay.obj"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_obj() {
        assert_eq!(
            OutputFormat::from_path(Path::new("mesh.obj")).unwrap(),
            OutputFormat::Obj
        );
    }

    #[test]
    fn format_detection_json() {
        assert_eq!(
            OutputFormat::from_path(Path::new("mesh.json")).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn format_detection_case_insensitive() {
        assert_eq!(
            OutputFormat::from_path(Path::new("Mesh.OBJ")).unwrap(),
            OutputFormat::Obj
        );
    }

    #[test]
    fn format_detection_unsupported() {
        assert!(OutputFormat::from_path(Path::new("mesh.stl")).is_err());
        assert!(OutputFormat::from_path(Path::new("mesh")).is_err());
    }

    #[test]
    fn sidecar_path_keeps_directory() {
        let sidecar = overlay_sidecar_path(Path::new("out/plane.obj"));
        assert_eq!(sidecar, PathBuf::from("out/plane_overlay.obj"));
    }
}
