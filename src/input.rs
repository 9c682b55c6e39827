use crate::constants::{BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, DRAG_ZOOM_PX_PER_STEP, ZOOM_STEP};

/// What an active pointer drag does to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Pan,
    Zoom,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub drag: Option<DragMode>,
}

impl MouseState {
    pub fn begin(&mut self, x: f64, y: f64, mode: DragMode) {
        self.x = x;
        self.y = y;
        self.drag = Some(mode);
    }

    /// Record a new pointer position and return the delta since the last one.
    pub fn advance(&mut self, x: f64, y: f64) -> (f64, f64) {
        let delta = (x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        delta
    }

    pub fn end(&mut self) {
        self.drag = None;
    }
}

/// Left and right buttons pan, the middle button zooms.
#[inline]
pub fn drag_mode_for_button(button: i16) -> Option<DragMode> {
    match button {
        BUTTON_LEFT | BUTTON_RIGHT => Some(DragMode::Pan),
        BUTTON_MIDDLE => Some(DragMode::Zoom),
        _ => None,
    }
}

/// Wheel up (negative delta) zooms in by one step, wheel down zooms out.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y < 0.0 {
        1.0 / ZOOM_STEP
    } else if delta_y > 0.0 {
        ZOOM_STEP
    } else {
        1.0
    }
}

/// Dragging up zooms in, dragging down zooms out, proportional to distance.
#[inline]
pub fn drag_zoom_factor(dy: f64) -> f64 {
    if !dy.is_finite() {
        return 1.0;
    }
    ZOOM_STEP.powf(dy / DRAG_ZOOM_PX_PER_STEP)
}
