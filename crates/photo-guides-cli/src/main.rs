mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use photo_guides::{
    ChartOptions, Color, GuideOptions, Margin, MarginRange, PRESETS, Size, guide_output_path,
    layout_chart, plan_guides,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pgt", about = "Photo print calibration tools", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw hexagon cutting guides onto a photo
    Guides(GuidesArgs),

    /// Generate a measurement chart for calibrating a print lab
    Chart(ChartArgs),

    /// List the built-in lab presets
    Presets,
}

#[derive(Args)]
struct GuidesArgs {
    /// Input image
    filename: PathBuf,

    /// Folder for the output image (default: next to the input)
    #[arg(short = 'd', long)]
    target_folder: Option<PathBuf>,

    /// Output file; overrides the default `<input>_guides.png` name
    #[arg(short, long, conflicts_with = "target_folder")]
    output: Option<PathBuf>,

    /// Scale, crop or extend the image to this resolution, e.g. 640x320
    #[arg(short = 'r', long)]
    force_resolution: Option<Size>,

    /// Cutting edge in pixels: top,right,bottom,left
    #[arg(short = 'c', long)]
    cutting_edge: Option<Margin>,

    /// Lab preset supplying resolution and cutting edge
    #[arg(short, long)]
    preset: Option<String>,

    /// Horizontal guide offset in output pixels
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,

    /// JSON file with guide options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ChartArgs {
    /// Output image file
    file: PathBuf,

    /// Chart geometry, e.g. 800x600
    #[arg(short, long)]
    geometry: Option<Size>,

    /// Line base width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Text printed onto the chart
    #[arg(short, long)]
    comment: Option<String>,

    /// Cutting margin indicators: start,stop,step in pixels
    #[arg(short, long)]
    margin: Option<MarginRange>,

    /// Add measurement axes
    #[arg(short, long)]
    axis: bool,

    /// Add checkerboards
    #[arg(long)]
    checkerboard: bool,

    /// Add color test lines
    #[arg(long)]
    test_lines_color: bool,

    /// Add black and white test lines
    #[arg(long)]
    test_lines_bw: bool,

    /// Background color, e.g. white or #ffeedd
    #[arg(short, long)]
    background: Option<Color>,

    /// Print the chart options onto the chart
    #[arg(long)]
    print_args: bool,

    /// Font file for labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON file with chart options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Guides(args) => run_guides(args).await?,
        Commands::Chart(args) => run_chart(args).await?,
        Commands::Presets => {
            for preset in PRESETS {
                println!("{}: {}", preset.name, preset.description);
                for entry in preset.entries {
                    println!("  {}  cutting edge {}", entry.resolution, entry.margin);
                }
            }
        }
    }

    Ok(())
}

async fn run_guides(args: GuidesArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => GuideOptions::load(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GuideOptions::default(),
    };
    if args.force_resolution.is_some() {
        options.target = args.force_resolution;
    }
    if args.cutting_edge.is_some() {
        options.margin = args.cutting_edge;
    }
    if args.preset.is_some() {
        options.preset = args.preset;
    }
    if let Some(offset) = args.offset {
        options.offset = offset;
    }

    let output = match args.output {
        Some(path) => path,
        None => guide_output_path(&args.filename, args.target_folder.as_deref())?,
    };
    check_output_folder(&output)?;

    let image = photo_guides_render::load_image(&args.filename)
        .await
        .with_context(|| format!("Failed to read {}", args.filename.display()))?;
    let plan = plan_guides(photo_guides_render::image_size(&image), &options)?;
    let out = photo_guides_render::render_guides(image, &plan)?;
    photo_guides_render::save_png(out, &output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{} → {}", args.filename.display(), output.display());
    Ok(())
}

async fn run_chart(args: ChartArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => ChartOptions::load(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ChartOptions::default(),
    };
    if let Some(geometry) = args.geometry {
        options.geometry = geometry;
    }
    if let Some(width) = args.width {
        options.base_width = width;
    }
    if args.comment.is_some() {
        options.comment = args.comment;
    }
    if args.margin.is_some() {
        options.margin = args.margin;
    }
    if let Some(background) = args.background {
        options.background = background;
    }
    if args.font.is_some() {
        options.font_path = args.font;
    }
    options.axis |= args.axis;
    options.checkerboard |= args.checkerboard;
    options.test_lines_color |= args.test_lines_color;
    options.test_lines_bw |= args.test_lines_bw;
    options.print_args |= args.print_args;
    options.output = Some(args.file.clone());

    check_output_folder(&args.file)?;
    let layout = layout_chart(&options)?;
    let font = photo_guides_render::load_font(options.font_path.as_deref()).await?;
    let image = photo_guides_render::render_chart(&layout, font.as_ref())?;
    photo_guides_render::save_png(image, &args.file)
        .await
        .with_context(|| format!("Failed to write {}", args.file.display()))?;

    println!("Chart {} → {}", options.geometry, args.file.display());
    Ok(())
}

/// Fail before any pixel work when the output folder is missing
fn check_output_folder(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            anyhow::bail!("Output folder {} does not exist", parent.display())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_guides_flags_parse() {
        let cli = Cli::try_parse_from([
            "pgt", "guides", "photo.jpg", "-r", "2700x1905", "-c", "12,30,15,45", "--offset", "-20",
        ])
        .unwrap();
        let Commands::Guides(args) = cli.command else {
            panic!("expected guides");
        };
        assert_eq!(args.force_resolution, Some(Size::new(2700, 1905)));
        assert_eq!(args.cutting_edge, Some(Margin::new(12, 30, 15, 45)));
        assert_eq!(args.offset, Some(-20.0));
    }

    #[test]
    fn test_bad_geometry_rejected() {
        assert!(Cli::try_parse_from(["pgt", "chart", "-g", "800by600", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["pgt", "chart", "-m", "0,100,0", "out.png"]).is_ok());
    }

    #[test]
    fn test_missing_output_folder() {
        assert!(check_output_folder(Path::new("/nonexistent-dir/out.png")).is_err());
        assert!(check_output_folder(Path::new("out.png")).is_ok());
    }
}
