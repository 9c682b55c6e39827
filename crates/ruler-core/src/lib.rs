//! Headless camera framing for the ruler widget.
//!
//! [`ViewportState`] holds one widget's viewport, orthographic camera and
//! target object. The web frontend owns one per canvas and drives it from
//! resize events, pointer input and the programmatic API.

pub mod config;
pub mod constants;
pub mod framing;
pub mod state;
pub mod ticks;

pub use config::*;
pub use constants::*;
pub use framing::*;
pub use state::*;
pub use ticks::*;

/// The stock ruler: a 40 x 2 x 10 box centered on the origin.
pub fn default_ruler_bounds() -> Bounds {
    Bounds::from_center_size(glam::DVec3::ZERO, ruler_size_vec3())
}
