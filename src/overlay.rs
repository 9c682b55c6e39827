use ruler_core::Visibility;
use web_sys as web;

use crate::constants::READOUT_ID;

/// Text shown in the readout element and the console.
pub fn readout_text(visibility: &Visibility, zoom: f64) -> String {
    format!("{}, zoom {:.2}", visibility, zoom)
}

/// Update the optional `#ruler-readout` element; no-op when the page has none.
pub fn update_readout(document: &web::Document, visibility: &Visibility, zoom: f64) {
    if let Some(el) = document.get_element_by_id(READOUT_ID) {
        el.set_text_content(Some(&readout_text(visibility, zoom)));
    }
}
