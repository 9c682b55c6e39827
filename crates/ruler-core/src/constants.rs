use glam::DVec3;

// Framing defaults shared by the web frontend and host tests.

// Zoom limits
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 100.0;

// Viewport / frustum
pub const FRUSTUM_SIZE: f64 = 80.0; // vertical world extent visible at zoom = 1
pub const VIEWPORT_HEIGHT_PX: f64 = 300.0; // canvas height stays fixed, width tracks the window
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_Z: f64 = 50.0;

// Framing
pub const DEFAULT_HEIGHT_FRACTION: f64 = 0.8; // object fills 80% of the frustum height
pub const RANGE_MARGIN: f64 = 1.2; // 20% slack around a focused range

// Ruler object
pub const RULER_SIZE: [f64; 3] = [40.0, 2.0, 10.0];
pub const TICK_COUNT: u32 = 36;
pub const MAX_TICK_COUNT: u32 = 1000; // every tick is walked each frame
pub const MINOR_TICK_INTERVAL: f64 = 0.2; // world units between minor marks
pub const MINOR_TICK_OVERHANG: f64 = 0.1; // fraction of object height above/below

#[inline]
pub fn ruler_size_vec3() -> DVec3 {
    DVec3::new(RULER_SIZE[0], RULER_SIZE[1], RULER_SIZE[2])
}
