//! Debug overlay geometry: edge lines, normal rays, and vertex-index labels
//! built from mesh buffers. Drawing is the host's job; this module only
//! produces the segments and label anchors it would draw.

use serde::Serialize;

use crate::types::MeshBuffers;

/// RGBA line colors, one per edge within a triangle: 0→1 red, 1→2 green,
/// 2→0 blue.
pub const EDGE_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// RGBA color of normal rays.
pub const NORMAL_RAY_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Which overlay elements to build.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlaySettings {
    pub show_edges: bool,
    pub show_vertex_labels: bool,
    /// Length of the per-vertex normal rays; 0 disables them.
    pub normals_length: f32,
}

impl OverlaySettings {
    /// Whether any overlay element is enabled.
    pub fn any_enabled(&self) -> bool {
        self.show_edges || self.show_vertex_labels || self.normals_length > 0.0
    }
}

/// A colored line segment.
#[derive(Debug, Clone, Serialize)]
pub struct OverlayLine {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub color: [f32; 4],
}

/// A text label anchored at a point.
#[derive(Debug, Clone, Serialize)]
pub struct OverlayLabel {
    pub position: [f32; 3],
    pub text: String,
}

/// Overlay output: line segments plus label anchors, ready for a host to draw.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverlayGeometry {
    pub lines: Vec<OverlayLine>,
    pub labels: Vec<OverlayLabel>,
}

/// Build overlay geometry for a mesh according to the given settings.
pub fn build_overlay(mesh: &MeshBuffers, settings: &OverlaySettings) -> OverlayGeometry {
    let mut geometry = OverlayGeometry::default();

    if settings.show_edges {
        for tri in mesh.indices.chunks_exact(3) {
            for edge in 0..3 {
                let from = mesh.position(tri[edge] as usize);
                let to = mesh.position(tri[(edge + 1) % 3] as usize);
                geometry.lines.push(OverlayLine {
                    start: from.to_array(),
                    end: to.to_array(),
                    color: EDGE_COLORS[edge],
                });
            }
        }
    }

    let draw_normals = settings.normals_length > 0.0 && mesh.has_normals();
    for i in 0..mesh.vertex_count() {
        if draw_normals {
            let origin = mesh.position(i);
            let tip = origin + mesh.normal(i) * settings.normals_length;
            geometry.lines.push(OverlayLine {
                start: origin.to_array(),
                end: tip.to_array(),
                color: NORMAL_RAY_COLOR,
            });
        }

        if settings.show_vertex_labels {
            geometry.labels.push(OverlayLabel {
                position: mesh.position(i).to_array(),
                text: i.to_string(),
            });
        }
    }

    geometry
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::generate::plane::generate_plane;

    #[test]
    fn disabled_settings_produce_nothing() {
        let mesh = generate_plane(Vec2::ONE, 2);
        let geometry = build_overlay(&mesh, &OverlaySettings::default());
        assert!(geometry.lines.is_empty());
        assert!(geometry.labels.is_empty());
        assert!(!OverlaySettings::default().any_enabled());
    }

    #[test]
    fn edges_emit_three_lines_per_triangle() {
        let mesh = generate_plane(Vec2::ONE, 1);
        let settings = OverlaySettings {
            show_edges: true,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        assert_eq!(geometry.lines.len(), mesh.triangle_count() * 3);
        // Per-edge color coding cycles red, green, blue
        assert_eq!(geometry.lines[0].color, EDGE_COLORS[0]);
        assert_eq!(geometry.lines[1].color, EDGE_COLORS[1]);
        assert_eq!(geometry.lines[2].color, EDGE_COLORS[2]);
    }

    #[test]
    fn edge_endpoints_follow_indices() {
        let mesh = generate_plane(Vec2::new(2.0, 2.0), 1);
        let settings = OverlaySettings {
            show_edges: true,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        // First triangle is (0, 2, 3): first edge runs 0 → 2
        assert_eq!(geometry.lines[0].start, [0.0, 0.0, 0.0]);
        assert_eq!(geometry.lines[0].end, [0.0, 0.0, 2.0]);
    }

    #[test]
    fn normal_rays_scale_with_length() {
        let mesh = generate_plane(Vec2::ONE, 1);
        let settings = OverlaySettings {
            normals_length: 0.25,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        assert_eq!(geometry.lines.len(), mesh.vertex_count());
        for line in &geometry.lines {
            assert_eq!(line.color, NORMAL_RAY_COLOR);
            // Plane normals point up, so rays rise by exactly the length
            assert!((line.end[1] - line.start[1] - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_length_disables_rays() {
        let mesh = generate_plane(Vec2::ONE, 1);
        let settings = OverlaySettings {
            normals_length: 0.0,
            show_vertex_labels: true,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        assert!(geometry.lines.is_empty());
        assert_eq!(geometry.labels.len(), 4);
    }

    #[test]
    fn no_rays_without_normals() {
        let mut mesh = generate_plane(Vec2::ONE, 1);
        mesh.normals.clear();
        let settings = OverlaySettings {
            normals_length: 1.0,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        assert!(geometry.lines.is_empty());
    }

    #[test]
    fn labels_carry_vertex_indices() {
        let mesh = generate_plane(Vec2::ONE, 1);
        let settings = OverlaySettings {
            show_vertex_labels: true,
            ..Default::default()
        };

        let geometry = build_overlay(&mesh, &settings);
        assert_eq!(geometry.labels.len(), 4);
        assert_eq!(geometry.labels[0].text, "0");
        assert_eq!(geometry.labels[3].text, "3");
        assert_eq!(geometry.labels[3].position, mesh.position(3).to_array());
    }
}
