use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mesh_forge::config::{CliArgs, GeneratorConfig};
use mesh_forge::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("mesh_forge=debug")
    } else {
        EnvFilter::new("mesh_forge=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: GeneratorConfig = args.into();

    match Pipeline::run(&config) {
        Ok(result) => {
            println!(
                "Done: {} vertices, {} triangles in {:.2}s",
                result.vertex_count,
                result.triangle_count,
                result.duration.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            error!(%e, "Generation failed");
            Err(anyhow::anyhow!(e)).context("mesh-forge generation failed")
        }
    }
}
