#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod viewer;

pub use viewer::{RulerViewer, VisibilityReport};

// Global handle for pages that rely on the auto-mounted widget.
const WINDOW_HANDLE: &str = "ruler";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ruler-view starting");

    let has_container = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CONTAINER_ID))
        .is_some();
    if !has_container {
        log::info!(
            "no #{} element, waiting for new RulerViewer(id)",
            constants::CONTAINER_ID
        );
        return Ok(());
    }

    let viewer = RulerViewer::new(None)?;
    if let Some(window) = web::window() {
        _ = js_sys::Reflect::set(&window, &JsValue::from_str(WINDOW_HANDLE), &viewer.into());
    }
    Ok(())
}
