use crate::input::{self, DragMode, MouseState};
use ruler_core::ViewportState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<ViewportState>>,
    pub mouse: Rc<RefCell<MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    // A cancelled pointer never sends pointerup.
    wire_drag_end(&w, "pointerup");
    wire_drag_end(&w, "pointercancel");
    wire_wheel(&w);
    suppress_context_menu(&w.canvas);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(mode) = input::drag_mode_for_button(ev.button()) else {
            return;
        };
        w.mouse
            .borrow_mut()
            .begin(ev.client_x() as f64, ev.client_y() as f64, mode);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        log::debug!("[input] begin {:?} drag", mode);
        // No middle-button autoscroll.
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (mode, dx, dy) = {
            let mut ms = w.mouse.borrow_mut();
            let Some(mode) = ms.drag else {
                return;
            };
            let (dx, dy) = ms.advance(ev.client_x() as f64, ev.client_y() as f64);
            (mode, dx, dy)
        };
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        let mut state = w.state.borrow_mut();
        match mode {
            DragMode::Pan => state.pan_by_pixels(dx, dy),
            DragMode::Zoom => {
                state.zoom_by_factor(input::drag_zoom_factor(dy));
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_drag_end(w: &InputWiring, event_name: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = w.mouse.borrow().drag.is_some();
        if was_dragging {
            w.mouse.borrow_mut().end();
            if w.canvas.has_pointer_capture(ev.pointer_id()) {
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
            }
            let v = w.state.borrow().visibility();
            log::debug!("[input] drag end ({}), {}", ev.type_(), v);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let factor = input::wheel_zoom_factor(ev.delta_y());
        w.state.borrow_mut().zoom_by_factor(factor);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right-button drags pan; the context menu never opens over the canvas.
fn suppress_context_menu(canvas: &web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
