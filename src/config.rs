use ruler_core::{FramingConfig, PanMode};
use web_sys as web;

// Overrides read from `data-*` attributes on the widget container.
pub const ATTR_FRUSTUM_SIZE: &str = "data-frustum-size";
pub const ATTR_CANVAS_HEIGHT: &str = "data-canvas-height";
pub const ATTR_HEIGHT_FRACTION: &str = "data-height-fraction";
pub const ATTR_TICK_COUNT: &str = "data-tick-count";
pub const ATTR_PAN_MODE: &str = "data-pan-mode";

fn parse_f64(name: &str, raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] {}={:?} is not a number, ignoring", name, raw);
            None
        }
    }
}

/// Apply every override `lookup` yields on top of `base`.
///
/// Unparseable values are skipped with a warning; range checks happen in
/// [`resolve`].
pub fn apply_overrides(
    mut base: FramingConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> FramingConfig {
    if let Some(v) = lookup(ATTR_FRUSTUM_SIZE).and_then(|s| parse_f64(ATTR_FRUSTUM_SIZE, &s)) {
        base.frustum_size = v;
    }
    if let Some(v) = lookup(ATTR_CANVAS_HEIGHT).and_then(|s| parse_f64(ATTR_CANVAS_HEIGHT, &s)) {
        base.viewport_height = v;
    }
    if let Some(v) =
        lookup(ATTR_HEIGHT_FRACTION).and_then(|s| parse_f64(ATTR_HEIGHT_FRACTION, &s))
    {
        base.height_fraction = v;
    }
    if let Some(raw) = lookup(ATTR_TICK_COUNT) {
        match raw.trim().parse::<u32>() {
            Ok(n) => base.tick_count = n,
            Err(_) => log::warn!("[config] {}={:?} is not a count, ignoring", ATTR_TICK_COUNT, raw),
        }
    }
    if let Some(raw) = lookup(ATTR_PAN_MODE) {
        match PanMode::parse(&raw) {
            Some(mode) => base.pan_mode = mode,
            None => log::warn!("[config] unknown {}={:?}, ignoring", ATTR_PAN_MODE, raw),
        }
    }
    base
}

/// Defaults plus overrides, falling back to plain defaults if the result
/// does not validate.
pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> FramingConfig {
    let cfg = apply_overrides(FramingConfig::default(), lookup);
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FramingConfig::default()
        }
    }
}

pub fn from_element(el: &web::Element) -> FramingConfig {
    resolve(|name| el.get_attribute(name))
}
