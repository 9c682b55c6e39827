//! Plain value types describing the viewport, camera and target object.
//!
//! None of these reference platform APIs. The web frontend mirrors window
//! size into [`Viewport`] and reads [`OrthoCamera`] back to project the ruler
//! onto the canvas.

use std::fmt;

use glam::{DMat4, DVec3};

use crate::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_Z};

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_valid(width: f64, height: f64) -> bool {
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }
}

/// Orthographic frustum bounds at zoom = 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub size: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    /// Fixed vertical extent `size`, horizontal extent `size * aspect`.
    pub fn from_aspect(size: f64, aspect: f64) -> Self {
        Self {
            size,
            left: (size * aspect) / -2.0,
            right: (size * aspect) / 2.0,
            top: size / 2.0,
            bottom: size / -2.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Orthographic camera looking down -Z at its pan target.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub position: DVec3,
    pub target: DVec3,
    pub up: DVec3,
    pub zoom: f64,
    pub frustum: Frustum,
    projection: DMat4,
}

impl OrthoCamera {
    pub fn new(frustum: Frustum) -> Self {
        let mut camera = Self {
            position: DVec3::new(0.0, 0.0, CAMERA_Z),
            target: DVec3::ZERO,
            up: DVec3::Y,
            zoom: 1.0,
            frustum,
            projection: DMat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the cached projection from the frustum and zoom.
    ///
    /// Zoom shrinks the frustum around its own center, so the visible world
    /// width is `frustum.width() / zoom`.
    pub fn update_projection_matrix(&mut self) {
        let f = &self.frustum;
        let dx = f.width() / (2.0 * self.zoom);
        let dy = f.height() / (2.0 * self.zoom);
        let cx = (f.right + f.left) / 2.0;
        let cy = (f.top + f.bottom) / 2.0;
        self.projection =
            DMat4::orthographic_rh(cx - dx, cx + dx, cy - dy, cy + dy, f.near, f.far);
    }

    pub fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Move camera and pan target together along X.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
        self.target.x = x;
    }
}

/// Axis-aligned bounding box of the target object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// World X at `percent` of the width from the left edge.
    #[inline]
    pub fn x_at_percent(&self, percent: f64) -> f64 {
        self.min.x + (percent / 100.0) * self.width()
    }
}

/// How pointer drags translate into camera movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanMode {
    /// Vertical drag components are dropped.
    #[default]
    HorizontalOnly,
    Free,
}

impl PanMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "horizontal" | "horizontal-only" => Some(PanMode::HorizontalOnly),
            "free" => Some(PanMode::Free),
            _ => None,
        }
    }
}

/// Horizontal visibility of the object, all values in percent of its width.
///
/// `start`/`end` are not clamped to `[0, 100]`: values past either end mean
/// the view extends beyond the object on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Visibility {
    pub total: f64,
    pub start: f64,
    pub end: f64,
}

impl Visibility {
    pub const NONE: Visibility = Visibility {
        total: 0.0,
        start: 0.0,
        end: 0.0,
    };

    /// Equal within `eps` on every component.
    pub fn approx_eq(&self, other: &Visibility, eps: f64) -> bool {
        (self.total - other.total).abs() <= eps
            && (self.start - other.start).abs() <= eps
            && (self.end - other.end).abs() <= eps
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visible {:.2}%, from {:.2}% to {:.2}%",
            self.total, self.start, self.end
        )
    }
}
