pub mod cube;
pub mod plane;
pub mod quad;

use tracing::{debug, warn};

use crate::config::{GeneratorConfig, Shape};
use crate::types::MeshBuffers;

/// Result of the generation stage.
#[derive(Debug)]
pub struct GenerateResult {
    pub mesh: MeshBuffers,
    pub stats: GenerateStats,
}

/// Statistics about the generated mesh.
#[derive(Debug)]
pub struct GenerateStats {
    pub shape: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub has_normals: bool,
    pub has_uvs: bool,
    pub has_colors: bool,
    pub has_tangents: bool,
}

/// Run the generation stage: dispatch to the shape generator.
pub fn generate(config: &GeneratorConfig) -> GenerateResult {
    let mesh = match config.shape {
        Shape::Plane => {
            if config.resolution < 1 {
                warn!(
                    resolution = config.resolution,
                    "Resolution below 1, clamping to 1"
                );
            }
            plane::generate_plane(config.size, config.resolution)
        }
        Shape::Quad => quad::generate_quad(),
        Shape::Cube => cube::generate_cube(),
    };

    let stats = compute_stats(&mesh, config.shape);
    debug!(
        vertices = stats.vertex_count,
        triangles = stats.triangle_count,
        "Generation stats"
    );

    GenerateResult { mesh, stats }
}

/// Compute summary statistics for a generated mesh.
pub fn compute_stats(mesh: &MeshBuffers, shape: Shape) -> GenerateStats {
    GenerateStats {
        shape: shape.to_string(),
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        has_normals: mesh.has_normals(),
        has_uvs: mesh.has_uvs(),
        has_colors: mesh.has_colors(),
        has_tangents: mesh.has_tangents(),
    }
}
