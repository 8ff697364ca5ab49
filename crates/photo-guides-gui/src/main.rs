#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use log::LevelFilter;
use photo_guides::{GuideOptions, Margin, Size};
use std::path::PathBuf;

mod app;
mod logger;
mod ui_components;
mod worker;

#[derive(Parser)]
#[command(name = "photo-guides", about = "Align hexagon cutting guides on a photo", version)]
struct Args {
    /// Photo to open
    image: Option<PathBuf>,

    /// Scale, crop or extend the photo to this resolution, e.g. 2700x1905
    #[arg(short = 'r', long)]
    force_resolution: Option<Size>,

    /// Cutting edge in pixels: top,right,bottom,left
    #[arg(short = 'c', long)]
    cutting_edge: Option<Margin>,

    /// Lab preset supplying resolution and cutting edge
    #[arg(short, long)]
    preset: Option<String>,

    /// Folder for saved guide images (default: next to the photo)
    #[arg(short = 'd', long)]
    target_folder: Option<PathBuf>,

    /// Log debug output in the log panel
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = logger::AppLogger::new(500, level);
    logger.clone().init().context("Failed to install logger")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let startup = app::Startup {
        image: args.image,
        options: GuideOptions {
            target: args.force_resolution,
            margin: args.cutting_edge,
            preset: args.preset,
            ..Default::default()
        },
        target_folder: args.target_folder,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("Photo Guides"),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Guides",
        options,
        Box::new(move |cc| Ok(Box::new(app::GuideApp::new(cc, handle, logger, startup)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
