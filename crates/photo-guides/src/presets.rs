//! Photo lab presets
//!
//! A preset names a printer profile and lists the (resolution, cutting
//! margin) pairs it prints at, one per paper size. The entry used for an
//! image is the one whose height is closest to the image's height.

use crate::types::{GuideError, Margin, Result, Size};

/// One paper size of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub resolution: Size,
    pub margin: Margin,
}

impl PresetEntry {
    const fn new(width: u32, height: u32, margin: [u32; 4]) -> Self {
        Self {
            resolution: Size { width, height },
            margin: Margin {
                top: margin[0],
                right: margin[1],
                bottom: margin[2],
                left: margin[3],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub entries: &'static [PresetEntry],
}

impl Preset {
    /// The entry whose height is closest to `source.height`; ties go to the earlier entry
    pub fn select(&self, source: Size) -> Result<PresetEntry> {
        self.entries
            .iter()
            .copied()
            .min_by_key(|e| e.resolution.height.abs_diff(source.height))
            .ok_or_else(|| GuideError::Config(format!("preset {} has no entries", self.name)))
    }
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "dm_fotoparadies_labor",
        description: "dm Fotoparadies lab prints",
        entries: &[
            PresetEntry::new(2700, 1905, [12, 30, 15, 45]),
            PresetEntry::new(3000, 2000, [14, 32, 16, 46]),
            PresetEntry::new(3600, 2400, [16, 38, 19, 55]),
        ],
    },
    Preset {
        name: "borderless",
        description: "3:2 prints without a cutting margin",
        entries: &[
            PresetEntry::new(1800, 1200, [0, 0, 0, 0]),
            PresetEntry::new(2700, 1800, [0, 0, 0, 0]),
            PresetEntry::new(3600, 2400, [0, 0, 0, 0]),
        ],
    },
];

/// Look up a preset by name
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| GuideError::UnknownPreset(name.to_string()))
}

/// Look up a preset and pick its entry for `source`
pub fn select_preset(name: &str, source: Size) -> Result<PresetEntry> {
    let entry = find_preset(name)?.select(source)?;
    log::info!(
        "preset {} selected {} with margin {} for a {} source",
        name,
        entry.resolution,
        entry.margin,
        source
    );
    Ok(entry)
}
