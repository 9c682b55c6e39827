use crate::constants::{READOUT_LOG_INTERVAL_MS, VISIBILITY_EPS};
use crate::{overlay, render};
use instant::Instant;
use ruler_core::{ViewportState, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<ViewportState>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,

    pub last_visibility: Option<Visibility>,
    pub last_log: Instant,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<ViewportState>>,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        document: web::Document,
    ) -> Self {
        Self {
            state,
            canvas,
            ctx,
            document,
            last_visibility: None,
            last_log: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let state = self.state.borrow();

        // Camera moves under user input between frames, so this is never cached.
        let visibility = state.visibility();
        let changed = self
            .last_visibility
            .map_or(true, |prev| !prev.approx_eq(&visibility, VISIBILITY_EPS));
        if changed {
            overlay::update_readout(&self.document, &visibility, state.zoom());
            let now = Instant::now();
            if (now - self.last_log).as_millis() >= READOUT_LOG_INTERVAL_MS {
                log::debug!("[frame] {}", overlay::readout_text(&visibility, state.zoom()));
                self.last_log = now;
            }
            self.last_visibility = Some(visibility);
        }

        let vp = state.viewport();
        let dpr = f64::from(self.canvas.width()) / vp.width.max(1.0);
        render::draw(&self.ctx, &state, dpr);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
