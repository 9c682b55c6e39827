// Host-side tests for reading widget configuration overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use ruler_core::{FramingConfig, PanMode};
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn no_attributes_gives_defaults() {
    assert_eq!(resolve(lookup_from(&[])), FramingConfig::default());
}

#[test]
fn attributes_override_defaults() {
    let cfg = resolve(lookup_from(&[
        (ATTR_FRUSTUM_SIZE, "60"),
        (ATTR_CANVAS_HEIGHT, " 240 "),
        (ATTR_HEIGHT_FRACTION, "0.6"),
        (ATTR_TICK_COUNT, "12"),
        (ATTR_PAN_MODE, "free"),
    ]));
    assert_eq!(cfg.frustum_size, 60.0);
    assert_eq!(cfg.viewport_height, 240.0);
    assert_eq!(cfg.height_fraction, 0.6);
    assert_eq!(cfg.tick_count, 12);
    assert_eq!(cfg.pan_mode, PanMode::Free);
}

#[test]
fn unparseable_attributes_are_skipped() {
    let cfg = resolve(lookup_from(&[
        (ATTR_FRUSTUM_SIZE, "wide"),
        (ATTR_TICK_COUNT, "-3"),
        (ATTR_PAN_MODE, "diagonal"),
        (ATTR_HEIGHT_FRACTION, "0.7"),
    ]));
    let defaults = FramingConfig::default();
    assert_eq!(cfg.frustum_size, defaults.frustum_size);
    assert_eq!(cfg.tick_count, defaults.tick_count);
    assert_eq!(cfg.pan_mode, defaults.pan_mode);
    assert_eq!(cfg.height_fraction, 0.7);
}

#[test]
fn invalid_combination_falls_back_to_defaults() {
    let cfg = resolve(lookup_from(&[
        (ATTR_FRUSTUM_SIZE, "60"),
        (ATTR_HEIGHT_FRACTION, "3"),
    ]));
    assert_eq!(cfg, FramingConfig::default());
}

#[test]
fn oversized_tick_count_falls_back_to_defaults() {
    let cfg = resolve(lookup_from(&[(ATTR_TICK_COUNT, "3000000000")]));
    assert_eq!(cfg, FramingConfig::default());
}
