use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use crate::export::OutputFormat;
use crate::overlay::OverlaySettings;

/// Shape selector for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shape {
    #[value(name = "plane")]
    Plane,
    #[value(name = "quad")]
    Quad,
    #[value(name = "cube")]
    Cube,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Plane => write!(f, "plane"),
            Shape::Quad => write!(f, "quad"),
            Shape::Cube => write!(f, "cube"),
        }
    }
}

/// Fully resolved generator configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub shape: Shape,
    /// Plane extent along X and Z.
    pub size: Vec2,
    /// Plane subdivisions per axis; values below 1 are clamped.
    pub resolution: u32,
    pub output: PathBuf,
    /// Output format; `None` means detect from the output extension.
    pub format: Option<OutputFormat>,
    pub overlay: OverlaySettings,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Plane,
            size: Vec2::ONE,
            resolution: 2,
            output: PathBuf::new(),
            format: None,
            overlay: OverlaySettings::default(),
            dry_run: false,
            verbose: false,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "mesh-forge",
    about = "Procedural planar grid mesh generator",
    version
)]
pub struct CliArgs {
    /// Shape to generate
    #[arg(short = 's', long, value_enum, default_value = "plane")]
    pub shape: Shape,

    /// Plane width (X extent)
    #[arg(long, default_value_t = 1.0)]
    pub width: f32,

    /// Plane height (Z extent)
    #[arg(long, default_value_t = 1.0)]
    pub height: f32,

    /// Plane subdivisions per axis (minimum 1)
    #[arg(short = 'r', long, default_value_t = 2)]
    pub resolution: u32,

    /// Output file (.obj or .json)
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Output format override (default: detected from output extension)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include triangle edge lines in the debug overlay
    #[arg(long)]
    pub edges: bool,

    /// Include vertex index labels in the debug overlay
    #[arg(long)]
    pub vertex_labels: bool,

    /// Length of debug normal rays (0 disables them)
    #[arg(long, default_value_t = 0.0)]
    pub normals_length: f32,

    /// Generate and report stats without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<CliArgs> for GeneratorConfig {
    fn from(args: CliArgs) -> Self {
        GeneratorConfig {
            shape: args.shape,
            size: Vec2::new(args.width, args.height),
            resolution: args.resolution,
            output: args.output,
            format: args.format,
            overlay: OverlaySettings {
                show_edges: args.edges,
                show_vertex_labels: args.vertex_labels,
                normals_length: args.normals_length,
            },
            dry_run: args.dry_run,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_display() {
        assert_eq!(Shape::Plane.to_string(), "plane");
        assert_eq!(Shape::Quad.to_string(), "quad");
        assert_eq!(Shape::Cube.to_string(), "cube");
    }

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.shape, Shape::Plane);
        assert_eq!(config.size, Vec2::ONE);
        assert_eq!(config.resolution, 2);
        assert!(config.format.is_none());
        assert!(!config.overlay.any_enabled());
    }

    #[test]
    fn cli_args_to_generator_config() {
        let args = CliArgs::parse_from([
            "mesh-forge",
            "--shape",
            "plane",
            "--width",
            "4",
            "--height",
            "2.5",
            "-r",
            "8",
            "-o",
            "out/plane.obj",
            "--format",
            "obj",
            "--edges",
            "--vertex-labels",
            "--normals-length",
            "0.2",
            "--dry-run",
            "-v",
        ]);

        let config: GeneratorConfig = args.into();

        assert_eq!(config.shape, Shape::Plane);
        assert_eq!(config.size, Vec2::new(4.0, 2.5));
        assert_eq!(config.resolution, 8);
        assert_eq!(config.output, PathBuf::from("out/plane.obj"));
        assert_eq!(config.format, Some(OutputFormat::Obj));
        assert!(config.overlay.show_edges);
        assert!(config.overlay.show_vertex_labels);
        assert!((config.overlay.normals_length - 0.2).abs() < f32::EPSILON);
        assert!(config.dry_run);
        assert!(config.verbose);
    }

    #[test]
    fn cli_args_minimal() {
        let args = CliArgs::parse_from(["mesh-forge", "-o", "mesh.json"]);
        let config: GeneratorConfig = args.into();

        assert_eq!(config.shape, Shape::Plane);
        assert_eq!(config.size, Vec2::ONE);
        assert_eq!(config.resolution, 2);
        assert_eq!(config.output, PathBuf::from("mesh.json"));
        assert!(config.format.is_none());
        assert!(!config.overlay.any_enabled());
        assert!(!config.dry_run);
        assert!(!config.verbose);
    }

    #[test]
    fn cli_shape_cube() {
        let args = CliArgs::parse_from(["mesh-forge", "-s", "cube", "-o", "cube.obj"]);
        let config: GeneratorConfig = args.into();
        assert_eq!(config.shape, Shape::Cube);
    }
}
