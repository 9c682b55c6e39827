use crate::constants::CONTAINER_ID;
use crate::events::InputWiring;
use crate::frame::FrameContext;
use crate::input::MouseState;
use crate::{config, dom, events, frame};
use anyhow::anyhow;
use ruler_core::{default_ruler_bounds, ViewportState, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Horizontal visibility in percent of the ruler width.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct VisibilityReport {
    pub total: f64,
    pub start: f64,
    pub end: f64,
}

impl From<Visibility> for VisibilityReport {
    fn from(v: Visibility) -> Self {
        Self {
            total: v.total,
            start: v.start,
            end: v.end,
        }
    }
}

/// Handle to one mounted ruler widget.
///
/// All methods clamp their inputs and never throw.
#[wasm_bindgen]
pub struct RulerViewer {
    state: Rc<RefCell<ViewportState>>,
}

#[wasm_bindgen]
impl RulerViewer {
    /// Mount a new widget into the element with `container_id` (default `app`).
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: Option<String>) -> Result<RulerViewer, JsValue> {
        let id = container_id.as_deref().unwrap_or(CONTAINER_ID);
        mount(id).map_err(|e| {
            log::error!("[viewer] mount #{} failed: {:?}", id, e);
            JsValue::from(js_sys::Error::new(&e.to_string()))
        })
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&self, level: f64) -> f64 {
        self.state.borrow_mut().set_zoom(level)
    }

    #[wasm_bindgen(js_name = fitToHeight)]
    pub fn fit_to_height(&self) -> f64 {
        self.state.borrow_mut().fit_to_height()
    }

    #[wasm_bindgen(js_name = setViewByPercentages)]
    pub fn set_view_by_percentages(&self, start: f64, end: f64) {
        self.state.borrow_mut().set_view_by_percentages(start, end);
    }

    #[wasm_bindgen(js_name = focusOnNumber)]
    pub fn focus_on_number(&self, number: i32) {
        self.state.borrow_mut().focus_on_number(number);
    }

    /// Returns the tick number nearest to the new view center.
    #[wasm_bindgen(js_name = focusOnNumberRange)]
    pub fn focus_on_number_range(&self, start: f64, end: f64) -> u32 {
        self.state.borrow_mut().focus_on_number_range(start, end)
    }

    pub fn visibility(&self) -> VisibilityReport {
        self.state.borrow().visibility().into()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.state.borrow().zoom()
    }
}

fn mount(container_id: &str) -> anyhow::Result<RulerViewer> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow!("missing #{}", container_id))?;

    let cfg = config::from_element(&container);
    let height = cfg.viewport_height;
    let width = dom::window_inner_width().unwrap_or(height);

    let canvas = dom::append_canvas(&document, &container, height)?;
    dom::sync_canvas_backing_size(&canvas, width, height);
    let ctx = dom::context_2d(&canvas)?;

    let mut state = ViewportState::new(cfg, width, default_ruler_bounds())?;
    let zoom = state.fit_to_height();
    log::info!(
        "[viewer] mounted on #{} ({:.0}x{:.0} px), zoom {:.2}",
        container_id,
        width,
        height,
        zoom
    );
    let state = Rc::new(RefCell::new(state));

    let state_resize = state.clone();
    let canvas_resize = canvas.clone();
    dom::wire_window_resize(move |new_width| {
        state_resize.borrow_mut().set_viewport_width(new_width);
        let vp = state_resize.borrow().viewport();
        dom::sync_canvas_backing_size(&canvas_resize, vp.width, vp.height);
        log::debug!("[resize] viewport {:.0}x{:.0}", vp.width, vp.height);
    });

    events::wire_input_handlers(InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        mouse: Rc::new(RefCell::new(MouseState::default())),
    });

    let frame_ctx = FrameContext::new(state.clone(), canvas, ctx, document);
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));

    Ok(RulerViewer { state })
}
