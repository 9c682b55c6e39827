//! Camera framing: zoom clamping, percentage windows, tick focusing and
//! horizontal visibility.
//!
//! Every operation clamps its inputs instead of failing. The only fallible
//! step is building a [`ViewportState`] from a configuration.

use glam::{DVec2, DVec3};

use crate::config::{validate_bounds, ConfigError, FramingConfig};
use crate::constants::{MINOR_TICK_INTERVAL, MINOR_TICK_OVERHANG};
use crate::state::{Bounds, Frustum, OrthoCamera, PanMode, Viewport, Visibility};
use crate::ticks::{minor_tick_positions, TickScale};

/// Clamp a percentage into `[0, 100]`; NaN counts as 0.
#[inline]
pub fn clamp_percent(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 100.0)
    }
}

/// Clamp both ends and order them so that `start <= end`.
#[inline]
pub fn normalize_percent_range(start: f64, end: f64) -> (f64, f64) {
    let (s, e) = (clamp_percent(start), clamp_percent(end));
    if s <= e {
        (s, e)
    } else {
        (e, s)
    }
}

/// Viewport, camera and target object of one widget instance.
#[derive(Clone, Debug)]
pub struct ViewportState {
    config: FramingConfig,
    viewport: Viewport,
    camera: OrthoCamera,
    object: Bounds,
    ticks: TickScale,
}

impl ViewportState {
    pub fn new(
        config: FramingConfig,
        viewport_width: f64,
        object: Bounds,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_bounds(&object)?;
        let width = if Viewport::is_valid(viewport_width, config.viewport_height) {
            viewport_width
        } else {
            log::warn!(
                "[resize] ignoring initial width {}, using height as width",
                viewport_width
            );
            config.viewport_height
        };
        let viewport = Viewport::new(width, config.viewport_height);
        let camera = OrthoCamera::new(Frustum::from_aspect(config.frustum_size, viewport.aspect()));
        let ticks = TickScale::new(config.tick_count);
        Ok(Self {
            config,
            viewport,
            camera,
            object,
            ticks,
        })
    }

    pub fn config(&self) -> &FramingConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn object(&self) -> &Bounds {
        &self.object
    }

    pub fn ticks(&self) -> TickScale {
        self.ticks
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[inline]
    pub fn camera_x(&self) -> f64 {
        self.camera.position.x
    }

    /// Horizontal world extent at zoom = 1: `frustum_size * aspect`.
    #[inline]
    pub fn frustum_width(&self) -> f64 {
        self.config.frustum_size * self.viewport.aspect()
    }

    // ---------------- Zoom ----------------

    /// Clamp `zoom_level` into the zoom limits and apply it.
    ///
    /// Returns the zoom actually applied. NaN leaves the current zoom in place.
    pub fn set_zoom(&mut self, zoom_level: f64) -> f64 {
        if zoom_level.is_nan() {
            log::debug!("[framing] ignoring NaN zoom, keeping {}", self.camera.zoom);
            return self.camera.zoom;
        }
        let clamped = zoom_level.clamp(self.config.min_zoom, self.config.max_zoom);
        self.camera.zoom = clamped;
        self.camera.update_projection_matrix();
        clamped
    }

    /// Multiply the current zoom by `factor`; non-positive factors are ignored.
    pub fn zoom_by_factor(&mut self, factor: f64) -> f64 {
        if !(factor.is_finite() && factor > 0.0) {
            return self.camera.zoom;
        }
        self.set_zoom(self.camera.zoom * factor)
    }

    /// Zoom that makes `object` fill `height_fraction` of the frustum height.
    pub fn height_fit_zoom(&self, object: &Bounds, height_fraction: f64) -> f64 {
        // Division by a zero height gives +inf, which set_zoom clamps.
        (self.config.frustum_size / object.height()) * height_fraction
    }

    /// Fit `object` vertically so it spans `height_fraction` of the view.
    pub fn fit_object_height(&mut self, object: &Bounds, height_fraction: f64) -> f64 {
        let zoom = self.height_fit_zoom(object, height_fraction);
        self.set_zoom(zoom)
    }

    /// Fit the ruler itself using the configured height fraction.
    pub fn fit_to_height(&mut self) -> f64 {
        let object = self.object;
        let applied = self.fit_object_height(&object, self.config.height_fraction);
        log::debug!("[framing] fit to height, zoom {:.3}", applied);
        applied
    }

    // ---------------- Visibility ----------------

    /// Which part of `object`'s width the camera currently shows.
    pub fn horizontal_visibility(&self, object: &Bounds) -> Visibility {
        let object_width = object.width();
        if !(object_width.is_finite() && object_width > 0.0) {
            return Visibility::NONE;
        }

        let half_span = self.frustum_width() / 2.0 / self.camera.zoom;
        let camera_left = self.camera.position.x - half_span;
        let camera_right = self.camera.position.x + half_span;

        let object_left = object.min.x;
        let object_right = object.max.x;

        let visible_left = object_left.max(camera_left);
        let visible_right = object_right.min(camera_right);
        let visible_width = (visible_right - visible_left).max(0.0);

        Visibility {
            total: visible_width / object_width * 100.0,
            start: (visible_left - object_left) / object_width * 100.0,
            end: (visible_right - object_left) / object_width * 100.0,
        }
    }

    /// Visibility of the ruler itself.
    pub fn visibility(&self) -> Visibility {
        self.horizontal_visibility(&self.object)
    }

    // ---------------- Framing ----------------

    /// Zoom and center so `[start, end]` percent of the width fills the view.
    ///
    /// Vertical framing is left alone; call [`Self::fit_to_height`] separately.
    pub fn set_view_by_percentages(&mut self, start_percent: f64, end_percent: f64) {
        let (start, end) = normalize_percent_range(start_percent, end_percent);
        let object_width = self.object.width();

        let visible_width = (end - start) / 100.0 * object_width;
        let required_zoom = self.frustum_width() / visible_width;
        self.set_zoom(required_zoom);

        let visible_center = self.object.min.x + ((start + end) / 200.0) * object_width;
        self.camera.set_x(visible_center);
        self.camera.update_projection_matrix();
    }

    /// Jump to tick `number` (clamped to `1..=count`) without changing zoom.
    pub fn focus_on_number(&mut self, number: i32) {
        let x = self.ticks.number_to_x(&self.object, number);
        self.camera.set_x(x);
        self.camera.update_projection_matrix();
    }

    /// Center `[start, end]` percent with a margin, capped by the height fit.
    ///
    /// Returns the tick number nearest to the new view center.
    pub fn focus_on_number_range(&mut self, start_percent: f64, end_percent: f64) -> u32 {
        let (start, end) = normalize_percent_range(start_percent, end_percent);
        let start_x = self.object.x_at_percent(start);
        let end_x = self.object.x_at_percent(end);
        let center_x = (start_x + end_x) / 2.0;
        let range_width = end_x - start_x;

        self.camera.set_x(center_x);

        let range_zoom = self.config.frustum_size / (range_width * self.config.range_margin);
        let object = self.object;
        let height_zoom = self.height_fit_zoom(&object, self.config.height_fraction);
        let applied = self.set_zoom(range_zoom.min(height_zoom));

        let center = self.ticks.nearest_number(&self.object, center_x);
        log::info!(
            "[framing] range {:.1}%..{:.1}% centered on tick {} (zoom {:.3})",
            start,
            end,
            center,
            applied
        );
        center
    }

    // ---------------- Resize / pan ----------------

    /// Track a new canvas width; height stays as configured.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.resize(width, self.viewport.height);
    }

    /// Recompute aspect and frustum bounds for a new canvas size.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !Viewport::is_valid(width, height) {
            log::warn!("[resize] ignoring invalid size {}x{}", width, height);
            return;
        }
        self.viewport = Viewport::new(width, height);
        let mut frustum = Frustum::from_aspect(self.config.frustum_size, self.viewport.aspect());
        frustum.near = self.camera.frustum.near;
        frustum.far = self.camera.frustum.far;
        self.camera.frustum = frustum;
        self.camera.update_projection_matrix();
    }

    /// Pan by a pointer delta in CSS pixels; dragging right moves the view left.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        let f = self.camera.frustum;
        let world_dx = dx * f.width() / self.camera.zoom / self.viewport.width;
        let world_dy = dy * f.height() / self.camera.zoom / self.viewport.height;

        let delta = match self.config.pan_mode {
            PanMode::HorizontalOnly => DVec3::new(-world_dx, 0.0, 0.0),
            PanMode::Free => DVec3::new(-world_dx, world_dy, 0.0),
        };
        if !delta.is_finite() {
            return;
        }
        self.camera.position += delta;
        self.camera.target += delta;
    }

    // ---------------- Projection ----------------

    /// Project a world point onto the canvas, in CSS pixels with Y down.
    pub fn world_to_pixel(&self, p: DVec3) -> DVec2 {
        let view_proj = self.camera.projection_matrix() * self.camera.view_matrix();
        let ndc = view_proj.project_point3(p);
        DVec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        )
    }

    /// `(number, world_x)` of every numbered tick.
    pub fn tick_positions(&self) -> Vec<(u32, f64)> {
        self.ticks.positions(&self.object).collect()
    }

    /// World X of every minor mark, plus the Y extent they are drawn over.
    pub fn minor_tick_positions(&self) -> (Vec<f64>, f64, f64) {
        let overhang = self.object.height() * MINOR_TICK_OVERHANG;
        (
            minor_tick_positions(&self.object, MINOR_TICK_INTERVAL),
            self.object.min.y - overhang,
            self.object.max.y + overhang,
        )
    }
}
