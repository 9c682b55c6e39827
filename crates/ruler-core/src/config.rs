use thiserror::Error;

use crate::constants::*;
use crate::state::{Bounds, PanMode};

/// Tunables for a [`crate::ViewportState`].
///
/// `Default` reproduces the stock widget: an 80-unit frustum over a 300 px
/// tall canvas, zoom limited to `[0.1, 100]`, 36 numbered ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct FramingConfig {
    pub frustum_size: f64,
    pub viewport_height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub height_fraction: f64,
    pub range_margin: f64,
    pub tick_count: u32,
    pub pan_mode: PanMode,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            frustum_size: FRUSTUM_SIZE,
            viewport_height: VIEWPORT_HEIGHT_PX,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            height_fraction: DEFAULT_HEIGHT_FRACTION,
            range_margin: RANGE_MARGIN,
            tick_count: TICK_COUNT,
            pan_mode: PanMode::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frustum size must be positive and finite, got {0}")]
    FrustumSize(f64),
    #[error("viewport height must be positive and finite, got {0}")]
    ViewportHeight(f64),
    #[error("zoom limits must satisfy 0 < min <= max, got [{min}, {max}]")]
    ZoomLimits { min: f64, max: f64 },
    #[error("height fraction must lie in (0, 1], got {0}")]
    HeightFraction(f64),
    #[error("range margin must be at least 1, got {0}")]
    RangeMargin(f64),
    #[error("tick count must lie in [2, {max}], got {0}", max = MAX_TICK_COUNT)]
    TickCount(u32),
    #[error("object bounds are degenerate: width {width}, height {height}")]
    DegenerateBounds { width: f64, height: f64 },
}

fn positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl FramingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive_finite(self.frustum_size) {
            return Err(ConfigError::FrustumSize(self.frustum_size));
        }
        if !positive_finite(self.viewport_height) {
            return Err(ConfigError::ViewportHeight(self.viewport_height));
        }
        if !positive_finite(self.min_zoom)
            || !positive_finite(self.max_zoom)
            || self.min_zoom > self.max_zoom
        {
            return Err(ConfigError::ZoomLimits {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.height_fraction > 0.0 && self.height_fraction <= 1.0) {
            return Err(ConfigError::HeightFraction(self.height_fraction));
        }
        if !(self.range_margin.is_finite() && self.range_margin >= 1.0) {
            return Err(ConfigError::RangeMargin(self.range_margin));
        }
        if !(2..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(ConfigError::TickCount(self.tick_count));
        }
        Ok(())
    }
}

/// Reject objects that cannot be framed horizontally.
///
/// Zero height is allowed: height fitting then clamps to the max zoom.
pub fn validate_bounds(bounds: &Bounds) -> Result<(), ConfigError> {
    let width = bounds.width();
    let height = bounds.height();
    if !positive_finite(width) || !(height.is_finite() && height >= 0.0) {
        return Err(ConfigError::DegenerateBounds { width, height });
    }
    Ok(())
}
