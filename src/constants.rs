/// Front-end tuning constants.
///
/// Framing defaults live in `ruler_core::constants`; this file only holds
/// what the browser surface needs (element ids, colors, input scaling).
// DOM
pub const CONTAINER_ID: &str = "app";
pub const READOUT_ID: &str = "ruler-readout";

// Mouse buttons as reported by MouseEvent.button
pub const BUTTON_LEFT: i16 = 0;
pub const BUTTON_MIDDLE: i16 = 1;
pub const BUTTON_RIGHT: i16 = 2;

// Zoom input
pub const ZOOM_STEP: f64 = 0.95; // zoom multiplier per wheel notch
pub const DRAG_ZOOM_PX_PER_STEP: f64 = 10.0; // middle-drag pixels per zoom step

// Readout logging: at most once per interval while the view keeps changing
pub const READOUT_LOG_INTERVAL_MS: u128 = 250;
pub const VISIBILITY_EPS: f64 = 1e-3; // percent

// Drawing
pub const BACKGROUND_COLOR: &str = "#000000";
pub const RULER_COLOR: &str = "#00ff00";
pub const MINOR_TICK_COLOR: &str = "#ff0000";
pub const MAJOR_TICK_COLOR: &str = "#ffffff";
pub const LABEL_FONT: &str = "11px system-ui";
pub const LABEL_OFFSET_PX: f64 = 4.0;
pub const MIN_LABEL_SPACING_PX: f64 = 16.0; // labels are skipped when ticks crowd closer
pub const MIN_MINOR_SPACING_PX: f64 = 2.0; // minor marks are skipped below this
