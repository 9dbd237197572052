use std::time::{Duration, Instant};

use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{MeshForgeError, Result};
use crate::export::{self, OutputFormat};
use crate::generate::{self, GenerateStats};
use crate::overlay;
use crate::types::{compute_bounding_box, BoundingBox};

/// Summary of a completed pipeline run.
#[derive(Debug)]
pub struct ProcessingResult {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub duration: Duration,
}

/// Pipeline orchestrator -- drives the three generation stages.
pub struct Pipeline;

impl Pipeline {
    /// Run the full generation pipeline.
    pub fn run(config: &GeneratorConfig) -> Result<ProcessingResult> {
        let start = Instant::now();

        info!(shape = %config.shape, "Starting generation");

        // Stage 1: generate
        info!("Stage 1/3: Generate");
        let result = generate::generate(config);

        if !result.mesh.validate() {
            return Err(MeshForgeError::Validation(
                "generated buffers are misaligned or reference missing vertices".into(),
            ));
        }

        let bounds = compute_bounding_box(&result.mesh);
        print_mesh_summary(&result.stats, bounds.as_ref());

        // Stage 2: overlay
        let overlay_geometry = if config.overlay.any_enabled() {
            info!("Stage 2/3: Overlay");
            let geometry = overlay::build_overlay(&result.mesh, &config.overlay);
            info!(
                lines = geometry.lines.len(),
                labels = geometry.labels.len(),
                "Overlay geometry built"
            );
            Some(geometry)
        } else {
            None
        };

        if config.dry_run {
            info!("--dry-run: skipping export");
            return Ok(ProcessingResult {
                vertex_count: result.stats.vertex_count,
                triangle_count: result.stats.triangle_count,
                duration: start.elapsed(),
            });
        }

        // Stage 3: export
        info!("Stage 3/3: Export");
        let format = Self::resolve_format(config)?;
        export::export(
            &result.mesh,
            overlay_geometry.as_ref(),
            format,
            &config.output,
        )?;

        let duration = start.elapsed();
        info!(
            vertices = result.stats.vertex_count,
            triangles = result.stats.triangle_count,
            elapsed = ?duration,
            "Generation complete"
        );

        Ok(ProcessingResult {
            vertex_count: result.stats.vertex_count,
            triangle_count: result.stats.triangle_count,
            duration,
        })
    }

    fn resolve_format(config: &GeneratorConfig) -> Result<OutputFormat> {
        match config.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_path(&config.output),
        }
    }
}

/// Print a summary of the generated mesh.
fn print_mesh_summary(stats: &GenerateStats, bounds: Option<&BoundingBox>) {
    println!("=== Mesh ===");
    println!("  Shape:     {}", stats.shape);
    println!("  Vertices:  {}", stats.vertex_count);
    println!("  Triangles: {}", stats.triangle_count);
    println!("  Normals:   {}", if stats.has_normals { "yes" } else { "no" });
    println!("  UVs:       {}", if stats.has_uvs { "yes" } else { "no" });
    println!("  Colors:    {}", if stats.has_colors { "yes" } else { "no" });
    println!("  Tangents:  {}", if stats.has_tangents { "yes" } else { "no" });

    if let Some(bb) = bounds {
        println!(
            "  Bounds:    ({:.3}, {:.3}, {:.3}) → ({:.3}, {:.3}, {:.3})",
            bb.min.x, bb.min.y, bb.min.z, bb.max.x, bb.max.y, bb.max.z
        );
        println!("  Diagonal:  {:.3}", bb.diagonal());
    }
}
