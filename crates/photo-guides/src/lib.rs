mod chart;
pub mod constants;
mod guides;
mod hexagon;
mod margin_indicator;
mod normalize;
mod options;
mod patterns;
mod presets;
mod session;
mod ticks;
mod types;

pub use chart::{ArgsBlock, ChartLayout, layout_chart};
pub use guides::{GuidePlan, guide_output_path, plan_guides};
pub use hexagon::hexagon_guides;
pub use margin_indicator::*;
pub use normalize::{ResizeAction, ResizePlan};
pub use options::*;
pub use patterns::*;
pub use presets::{PRESETS, Preset, PresetEntry, find_preset, select_preset};
pub use session::*;
pub use ticks::*;
pub use types::*;
