// main.rs
//
// Generates the sphere mesh and writes the three TikZ drawings (plus the
// optional SVG preview) into the output directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tikzsphere::errors::Result;
use tikzsphere::float_types::Real;
use tikzsphere::{IndexedMesh, RenderConfig, Scene};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Render a triangulated sphere as TikZ wireframes and a greedy triangle coloring.
#[derive(Parser, Debug)]
#[command(name = "tikzsphere", version, about)]
struct Args {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the drawings are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Target element size of the sphere mesh (overrides the config).
    #[arg(long)]
    mesh_size: Option<Real>,

    /// Sphere radius (overrides the config).
    #[arg(long)]
    radius: Option<Real>,

    /// Also write an SVG preview of the coloring.
    #[arg(long)]
    svg: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective config as TOML and exit without rendering.
    #[arg(long)]
    print_config: bool,
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load_from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(h) = args.mesh_size {
        config.mesh.h = h;
    }
    if let Some(radius) = args.radius {
        config.mesh.radius = radius;
    }
    config.validate()?;

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mesh = IndexedMesh::sphere(config.mesh.radius, config.mesh.h)?;
    tracing::info!(
        "sphere mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let scene = Scene::build(mesh, &config)?;
    tracing::info!(
        "{} front-facing triangles, {} visible, {} of {} colors used",
        scene.front().len(),
        scene.visible().len(),
        scene.coloring().colors_used(),
        scene.coloring().palette()
    );

    let written = tikzsphere::io::write_all(&scene, &config.output, &args.out_dir, args.svg)?;
    tracing::info!("{} files written to {}", written.len(), args.out_dir.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("tikzsphere=info");
    let filter = match log_directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("invalid log level {log_directive:?} ({e}), using tikzsphere=info");
            EnvFilter::new("tikzsphere=info")
        },
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        },
    }
}
