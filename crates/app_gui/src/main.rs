mod app;

use annotator_core::{AnnotationSession, AnnotatorConfig, FolderSource};
use anyhow::{Context, Result, anyhow};
use app::UiApp;
use clap::Parser;
use eframe::{NativeOptions, egui};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Image Annotator (Gender + Status)";

#[derive(Debug, Parser)]
#[command(name = "annotator", version, about = WINDOW_TITLE)]
struct Cli {
    /// Path to the folder containing images; a folder picker opens when omitted
    image_folder: Option<PathBuf>,

    /// Where to write the TSV (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to ./annotator.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e:#}");
        eprintln!("Annotator stopped with error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config =
        AnnotatorConfig::load_or_default(cli.config.as_deref()).context("loading config")?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let folder = match cli.image_folder {
        Some(dir) => dir,
        None => FileDialog::new()
            .set_title("Choose image folder")
            .set_directory(".")
            .pick_folder()
            .context("no image folder selected")?,
    };
    let source = FolderSource::new(folder);
    let session = AnnotationSession::from_source(&source)
        .with_context(|| format!("reading images from {}", source.root().display()))?;

    let side = config.display_size as f32;
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([side + 200.0, side + 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(
                session, source, config,
            )))
        }),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}
