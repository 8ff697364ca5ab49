use eframe::egui;
use photo_guides::{Margin, PRESETS, Size};

/// Builder for creating drag values with automatic formatting
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f32>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Labeled pixel value
pub fn labeled_pixels(ui: &mut egui::Ui, label: &str, value: &mut u32, max: u32) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value)
            .range(0..=max)
            .suffix(" px")
            .speed(1.0)
            .show(ui)
    })
    .inner
}

/// Cutting edge editor, one value per side
pub struct CuttingEdgeEditor<'a> {
    margin: &'a mut Margin,
    max: u32,
}

impl<'a> CuttingEdgeEditor<'a> {
    pub fn new(margin: &'a mut Margin, max: u32) -> Self {
        Self { margin, max }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        changed |= labeled_pixels(ui, "Top", &mut self.margin.top, self.max);
        changed |= labeled_pixels(ui, "Right", &mut self.margin.right, self.max);
        changed |= labeled_pixels(ui, "Bottom", &mut self.margin.bottom, self.max);
        changed |= labeled_pixels(ui, "Left", &mut self.margin.left, self.max);
        changed
    }
}

/// Width and height editor for a target resolution
pub fn resolution_editor(ui: &mut egui::Ui, size: &mut Size) -> bool {
    ui.horizontal(|ui| {
        let mut changed = DragValueBuilder::new(&mut size.width)
            .range(1..=20_000)
            .show(ui);
        ui.label("×");
        changed |= DragValueBuilder::new(&mut size.height)
            .range(1..=20_000)
            .show(ui);
        changed
    })
    .inner
}

/// Preset picker; `None` means no preset
pub fn preset_selector(ui: &mut egui::Ui, preset: &mut Option<String>) -> bool {
    let mut changed = false;
    let selected = preset.as_deref().unwrap_or("none").to_string();
    egui::ComboBox::from_label("Preset")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            changed |= ui.selectable_value(preset, None, "none").changed();
            for p in PRESETS {
                changed |= ui
                    .selectable_value(preset, Some(p.name.to_string()), p.name)
                    .on_hover_text(p.description)
                    .changed();
            }
        });
    changed
}
