use image::RgbaImage;
use image::imageops::{self, FilterType};
use photo_guides::constants::PREVIEW_MAX_EDGE;
use photo_guides::{GuideOptions, GuidePlan, Size, plan_guides, preview_size};
use photo_guides_render::{Result, apply_resize_plan, image_size, load_image, render_guides, save_png};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum GuideCommand {
    /// Load a photo and produce its preview
    Load { path: PathBuf, options: GuideOptions },
    /// Render the guides at full resolution and write them out
    Save {
        source: PathBuf,
        options: GuideOptions,
        output: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug)]
pub enum GuideUpdate {
    Loaded {
        path: PathBuf,
        plan: GuidePlan,
        preview: RgbaImage,
    },
    Saved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

/// Async worker task that processes guide commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<GuideCommand>,
    update_tx: mpsc::UnboundedSender<GuideUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            GuideCommand::Load { mut path, mut options } => {
                // Only the latest load matters
                while let Ok(next) = command_rx.try_recv() {
                    match next {
                        GuideCommand::Load {
                            path: new_path,
                            options: new_options,
                        } => {
                            log::debug!("Discarding queued load of {}", path.display());
                            path = new_path;
                            options = new_options;
                        }
                        save @ GuideCommand::Save { .. } => handle(save, &update_tx).await,
                    }
                }
                handle(GuideCommand::Load { path, options }, &update_tx).await;
            }
            save => handle(save, &update_tx).await,
        }
    }
}

async fn handle(cmd: GuideCommand, update_tx: &mpsc::UnboundedSender<GuideUpdate>) {
    let update = match cmd {
        GuideCommand::Load { path, options } => match load_preview(&path, &options).await {
            Ok((plan, preview)) => GuideUpdate::Loaded {
                path,
                plan,
                preview,
            },
            Err(e) => GuideUpdate::Error {
                message: format!("Failed to load {}: {e}", path.display()),
            },
        },
        GuideCommand::Save {
            source,
            options,
            output,
        } => match save_guides(&source, &options, &output).await {
            Ok(()) => GuideUpdate::Saved { path: output },
            Err(e) => GuideUpdate::Error {
                message: format!("Failed to save {}: {e}", output.display()),
            },
        },
    };
    if let GuideUpdate::Error { message } = &update {
        log::error!("{message}");
    }
    let _ = update_tx.send(update);
}

/// Load `path`, normalize it per `options` and shrink it for display
pub async fn load_preview(path: &Path, options: &GuideOptions) -> Result<(GuidePlan, RgbaImage)> {
    let image = load_image(path).await?;
    let plan = plan_guides(image_size(&image), options)?;
    let task_plan = plan.clone();
    let preview = tokio::task::spawn_blocking(move || preview_image(image, &task_plan)).await??;
    Ok((plan, preview))
}

fn preview_image(image: RgbaImage, plan: &GuidePlan) -> Result<RgbaImage> {
    let normalized = match &plan.resize {
        Some(resize) => apply_resize_plan(&image, resize)?,
        None => image,
    };
    let size: Size = preview_size(plan.output_size, PREVIEW_MAX_EDGE);
    if size == plan.output_size {
        return Ok(normalized);
    }
    Ok(imageops::resize(
        &normalized,
        size.width,
        size.height,
        FilterType::Triangle,
    ))
}

/// Render guides onto the full-resolution photo and save them
pub async fn save_guides(source: &Path, options: &GuideOptions, output: &Path) -> Result<()> {
    let image = load_image(source).await?;
    let plan = plan_guides(image_size(&image), options)?;
    let out = tokio::task::spawn_blocking(move || render_guides(image, &plan)).await??;
    save_png(out, output).await
}
