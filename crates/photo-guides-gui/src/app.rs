use eframe::egui;
use photo_guides::{
    GuideOptions, GuidePlan, GuideStroke, InteractiveOffsetSession, Line, Margin, Size,
    guide_output_path,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::ui_components::{CuttingEdgeEditor, preset_selector, resolution_editor};
use crate::worker::{GuideCommand, GuideUpdate};

/// Options the window starts with
#[derive(Default)]
pub struct Startup {
    pub image: Option<PathBuf>,
    pub options: GuideOptions,
    pub target_folder: Option<PathBuf>,
}

/// A loaded photo with its preview and offset session
struct LoadedPhoto {
    path: PathBuf,
    plan: GuidePlan,
    texture: egui::TextureHandle,
    preview: Size,
    session: InteractiveOffsetSession,
}

pub struct GuideApp {
    logger: AppLogger,
    status: String,
    busy: bool,

    // Editable options
    use_target: bool,
    target: Size,
    use_margin: bool,
    margin: Margin,
    preset: Option<String>,
    target_folder: Option<PathBuf>,
    base_options: GuideOptions,

    photo: Option<LoadedPhoto>,

    command_tx: mpsc::UnboundedSender<GuideCommand>,
    update_rx: mpsc::UnboundedReceiver<GuideUpdate>,
    _tokio_handle: tokio::runtime::Handle,
}

impl GuideApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
        startup: Startup,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        let options = startup.options;
        let mut app = Self {
            logger,
            status: String::new(),
            busy: false,
            use_target: options.target.is_some(),
            target: options.target.unwrap_or(Size::new(2700, 1905)),
            use_margin: options.margin.is_some(),
            margin: options.margin.unwrap_or_default(),
            preset: options.preset.clone(),
            target_folder: startup.target_folder,
            base_options: options,
            photo: None,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        };
        if let Some(path) = startup.image {
            app.load(path);
        }
        app
    }

    /// Guide options from the editor, with `offset` applied
    fn options(&self, offset: f64) -> GuideOptions {
        GuideOptions {
            target: self.use_target.then_some(self.target),
            margin: self.use_margin.then_some(self.margin),
            preset: self.preset.clone(),
            offset,
            ..self.base_options.clone()
        }
    }

    fn load(&mut self, path: PathBuf) {
        self.status = format!("Loading {}...", path.display());
        self.busy = true;
        let options = self.options(0.0);
        let _ = self.command_tx.send(GuideCommand::Load { path, options });
    }

    fn save(&mut self, output: PathBuf) {
        let Some(photo) = &self.photo else {
            return;
        };
        let offset = photo.session.offset();
        log::info!("saving {} with offset {:.1} px", output.display(), offset);
        let options = self.options(offset);
        let _ = self.command_tx.send(GuideCommand::Save {
            source: photo.path.clone(),
            options,
            output,
        });
        self.status = "Saving...".to_string();
        self.busy = true;
    }

    fn default_output(&self) -> Option<PathBuf> {
        let photo = self.photo.as_ref()?;
        match guide_output_path(&photo.path, self.target_folder.as_deref()) {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: GuideUpdate) {
        self.busy = false;
        match update {
            GuideUpdate::Loaded {
                path,
                plan,
                preview,
            } => {
                let preview_size = Size::new(preview.width(), preview.height());
                let session = match InteractiveOffsetSession::new(
                    plan.output_size,
                    plan.area.margin(),
                    preview_size,
                ) {
                    Ok(session) => session,
                    Err(e) => {
                        log::error!("{e}");
                        self.status = format!("Error: {e}");
                        return;
                    }
                };
                if let Some(old) = self.photo.take() {
                    old.session.finish();
                }

                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [preview_size.width as usize, preview_size.height as usize],
                    preview.as_raw(),
                );
                let texture =
                    ctx.load_texture("photo_preview", color_image, egui::TextureOptions::LINEAR);

                self.status = format!(
                    "Loaded {} ({} → {})",
                    path.display(),
                    plan.resize.map(|r| r.source).unwrap_or(plan.output_size),
                    plan.output_size
                );
                self.photo = Some(LoadedPhoto {
                    path,
                    plan,
                    texture,
                    preview: preview_size,
                    session,
                });
            }
            GuideUpdate::Saved { path } => {
                self.status = format!("Saved {}", path.display());
            }
            GuideUpdate::Error { message } => {
                self.status = format!("Error: {message}");
            }
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Photo");
        if ui.button("Open...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"])
                .pick_file()
            {
                self.load(path);
            }
        }

        ui.separator();
        ui.heading("Print");
        let mut changed = preset_selector(ui, &mut self.preset);

        changed |= ui
            .checkbox(&mut self.use_target, "Force resolution")
            .changed();
        if self.use_target {
            changed |= resolution_editor(ui, &mut self.target);
        }

        changed |= ui.checkbox(&mut self.use_margin, "Cutting edge").changed();
        if self.use_margin {
            let max = self.target.width.max(self.target.height) / 2;
            changed |= CuttingEdgeEditor::new(&mut self.margin, max).show(ui);
        }

        if changed {
            if let Some(path) = self.photo.as_ref().map(|p| p.path.clone()) {
                self.load(path);
            }
        }

        ui.separator();
        ui.heading("Guides");
        if let Some(photo) = &mut self.photo {
            ui.label(format!("Offset: {:.1} px", photo.session.offset()));
            ui.label(format!("Image: {}", photo.plan.output_size));
            ui.label(format!("Cutting edge: {}", photo.plan.area.margin()));
            if ui.button("Reset offset").clicked() {
                let center = photo.preview.width as f64 / 2.0;
                let _ = photo.session.press(center);
                let _ = photo.session.release();
            }
        } else {
            ui.label("Drag on the photo to move the guides");
        }

        ui.separator();
        ui.add_enabled_ui(self.photo.is_some() && !self.busy, |ui| {
            if ui.button("Save").clicked() {
                if let Some(output) = self.default_output() {
                    self.save(output);
                }
            }
            if ui.button("Save as...").clicked() {
                let name = self
                    .default_output()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .unwrap_or_default();
                if let Some(output) = rfd::FileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name(name)
                    .save_file()
                {
                    self.save(output);
                }
            }
        });
    }

    fn show_log(&self, ui: &mut egui::Ui) {
        if ui.small_button("Clear log").clicked() {
            self.logger.clear();
        }
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in self.logger.get_entries() {
                    let color = match entry.level {
                        log::Level::Error => egui::Color32::RED,
                        log::Level::Warn => egui::Color32::YELLOW,
                        _ => ui.visuals().text_color(),
                    };
                    ui.colored_label(
                        color,
                        format!(
                            "{} {:<5} {}",
                            entry.timestamp.format("%H:%M:%S"),
                            entry.level,
                            entry.message
                        ),
                    );
                }
            });
    }
}

/// Preview of the photo with the guides painted over it
fn show_photo(ui: &mut egui::Ui, photo: &mut LoadedPhoto, stroke: GuideStroke) {
    let preview = egui::vec2(photo.preview.width as f32, photo.preview.height as f32);
    let available = ui.available_size();
    let scale = (available.x / preview.x).min(available.y / preview.y).min(1.0);
    let display = preview * scale;

    let response = ui.add(
        egui::Image::from_texture(egui::load::SizedTexture::new(photo.texture.id(), display))
            .sense(egui::Sense::click_and_drag()),
    );
    let rect = response.rect;

    // Screen position to preview pixels
    let to_preview = |pos: egui::Pos2| ((pos.x - rect.min.x) / scale) as f64;
    let result = if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() || response.clicked() {
            photo.session.press(to_preview(pos))
        } else if response.dragged() {
            photo.session.drag(to_preview(pos))
        } else {
            Ok(None)
        }
    } else {
        Ok(None)
    };
    if let Err(e) = result {
        log::warn!("guide update rejected: {e}");
    }
    if response.drag_stopped() || response.clicked() {
        let _ = photo.session.release();
    }

    let guides = match photo.session.preview_guides() {
        Ok(guides) => guides,
        Err(e) => {
            log::warn!("cannot draw guides: {e}");
            return;
        }
    };

    let painter = ui.painter_at(rect);
    let factor = photo.session.resize_factor() as f32 / scale;
    let to_screen = |line: &Line| -> Vec<egui::Pos2> {
        line.points()
            .iter()
            .map(|p| rect.min + egui::vec2(p.x as f32, p.y as f32) * scale)
            .collect()
    };
    let parts = [
        (stroke.outer_width, stroke.outer_color),
        (stroke.inner_width, stroke.inner_color),
    ];
    for line in &guides {
        for (width, color) in parts {
            let width = (width as f32 / factor).max(1.0);
            let [r, g, b, a] = color.to_array();
            painter.add(egui::Shape::line(
                to_screen(line),
                egui::Stroke::new(width, egui::Color32::from_rgba_unmultiplied(r, g, b, a)),
            ));
        }
    }
}

impl Drop for GuideApp {
    fn drop(&mut self) {
        if let Some(photo) = self.photo.take() {
            photo.session.finish();
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop of photos
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            self.load(path);
        }

        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
        }
        if self.busy {
            ctx.request_repaint();
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.show_controls(ui));

        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                if !self.status.is_empty() {
                    ui.label(&self.status);
                    ui.separator();
                }
                self.show_log(ui);
            });

        let stroke = self.base_options.stroke;
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.photo {
            Some(photo) => show_photo(ui, photo, stroke),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Open or drop a photo to add cutting guides");
                });
            }
        });
    }
}
