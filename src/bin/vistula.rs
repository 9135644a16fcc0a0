use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use vistula::Scene;
use vistula::render::raster::{rasterize_scene, write_png};
use vistula::render::svg::scene_to_svg_string;

#[derive(Parser, Debug)]
#[command(name = "vistula", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the scene as an SVG document.
    Svg(SvgArgs),
    /// Rasterize the scene as a PNG frame.
    Frame(FrameArgs),
    /// Validate a scene JSON document.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input scene JSON. Defaults to the built-in dawn scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON. Defaults to the built-in dawn scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Uniform raster scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn load_scene(in_path: &Option<PathBuf>) -> anyhow::Result<Scene> {
    match in_path {
        Some(path) => {
            Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
        }
        None => Ok(Scene::dawn()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Svg(args) => {
            let scene = load_scene(&args.in_path)?;
            let svg = scene_to_svg_string(&scene).context("render scene")?;
            fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
            println!("wrote {}", args.out.display());
        }
        Command::Frame(args) => {
            let scene = load_scene(&args.in_path)?;
            let frame = rasterize_scene(&scene, args.scale).context("rasterize scene")?;
            write_png(&frame, &args.out).context("encode png")?;
            println!(
                "wrote {} ({}x{})",
                args.out.display(),
                frame.width,
                frame.height
            );
        }
        Command::Validate(args) => {
            let scene = Scene::from_path(&args.in_path)
                .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
            scene.validate().context("validate scene")?;
            println!(
                "ok: {} decorations, audio {}",
                scene.decoration_count(),
                scene.audio_source()
            );
        }
    }

    Ok(())
}
