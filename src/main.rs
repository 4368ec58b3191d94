//! inktensor CLI
//!
//! Replays a recorded drawing through the pipeline and prints the tensor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use inktensor::render::image::save_png;
use inktensor::{Drawing, InkConfig, InkError, PenStyle, Pipeline};

#[derive(Parser)]
#[command(name = "inktensor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a freehand digit drawing into a classifier tensor", long_about = None)]
struct Cli {
    /// Drawing file: JSON array of strokes, each an array of [x, y] points
    drawing: PathBuf,

    /// Pen width in pixels (5-50), overrides the config
    #[arg(short, long)]
    pen: Option<f32>,

    /// Config file to use instead of the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the rendered, recentred canvas as PNG
    #[arg(long)]
    canvas_png: Option<PathBuf>,

    /// Save the downsampled tensor image as PNG
    #[arg(long)]
    tensor_png: Option<PathBuf>,

    /// Store the pen width as the new default in the config file
    #[arg(long)]
    save_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut config = match &cli.config {
        Some(path) => InkConfig::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => InkConfig::load(),
    };
    let pen = cli.pen.map(PenStyle::new).unwrap_or_else(|| config.pen());

    if cli.save_config {
        config.set_pen(pen);
        match &cli.config {
            Some(path) => config
                .save_to(path)
                .with_context(|| format!("Failed to save config: {}", path.display()))?,
            None => config.save(),
        }
        log::info!("Saved pen width {} to config", pen.width());
    }

    let json = std::fs::read_to_string(&cli.drawing)
        .with_context(|| format!("Failed to read drawing: {}", cli.drawing.display()))?;
    let drawing = Drawing::from_json(&json)
        .with_context(|| format!("Malformed drawing: {}", cli.drawing.display()))?;
    log::info!(
        "Loaded {} strokes ({} points) from {}",
        drawing.strokes().len(),
        drawing.point_count(),
        cli.drawing.display()
    );

    let pipeline = Pipeline::from_config(&config);
    let result = pipeline
        .recognize_detailed(&drawing, pen)
        .map_err(|err| recognition_error(err, &cli.drawing))?;

    if let Some(path) = &cli.canvas_png {
        save_png(&result.canvas, path)
            .with_context(|| format!("Failed to save canvas: {}", path.display()))?;
        log::info!("Canvas saved to {}", path.display());
    }
    if let Some(path) = &cli.tensor_png {
        save_png(&result.downsampled, path)
            .with_context(|| format!("Failed to save tensor image: {}", path.display()))?;
        log::info!("Tensor image saved to {}", path.display());
    }

    println!("{}", serde_json::to_string(&result.tensor)?);
    Ok(())
}

fn recognition_error(err: InkError, drawing: &Path) -> anyhow::Error {
    match err {
        InkError::EmptyInput => anyhow!("Nothing to recognize: {} has no points", drawing.display()),
        err => anyhow::Error::new(err).context("Recognition failed"),
    }
}
