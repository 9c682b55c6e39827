use crate::constants::MAX_TICK_COUNT;
use crate::state::Bounds;

/// Numbered ticks `1..=count` spread evenly across an object's width.
///
/// Tick 1 sits on `min.x` and tick `count` on `max.x`, so the spacing is
/// `width / (count - 1)`. Drawing, focusing and the reported view center all
/// go through this one mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickScale {
    count: u32,
}

impl TickScale {
    /// `count` is kept within `[2, MAX_TICK_COUNT]`.
    pub fn new(count: u32) -> Self {
        Self {
            count: count.clamp(2, MAX_TICK_COUNT),
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn clamp_number(&self, number: i32) -> u32 {
        i64::from(number).clamp(1, i64::from(self.count)) as u32
    }

    #[inline]
    pub fn spacing(&self, bounds: &Bounds) -> f64 {
        bounds.width() / f64::from(self.count - 1)
    }

    /// World X of tick `number`, after clamping it into range.
    pub fn number_to_x(&self, bounds: &Bounds, number: i32) -> f64 {
        let n = self.clamp_number(number);
        bounds.min.x + f64::from(n - 1) * self.spacing(bounds)
    }

    /// Tick number closest to world X, clamped into range.
    pub fn nearest_number(&self, bounds: &Bounds, x: f64) -> u32 {
        let spacing = self.spacing(bounds);
        if !(spacing.is_finite() && spacing > 0.0) || !x.is_finite() {
            return 1;
        }
        let idx = ((x - bounds.min.x) / spacing).round();
        let idx = idx.clamp(0.0, f64::from(self.count - 1));
        idx as u32 + 1
    }

    /// `(number, world_x)` for every tick, left to right.
    pub fn positions<'a>(&'a self, bounds: &'a Bounds) -> impl Iterator<Item = (u32, f64)> + 'a {
        (1..=self.count).map(move |n| (n, self.number_to_x(bounds, n as i32)))
    }
}

/// Minor marks every `interval` world units from `min.x` up to `max.x`.
///
/// Positions are computed by index rather than accumulation so the last mark
/// lands on `max.x` whenever the width is a multiple of the interval.
pub fn minor_tick_positions(bounds: &Bounds, interval: f64) -> Vec<f64> {
    let width = bounds.width();
    if !(interval.is_finite() && interval > 0.0) || !(width.is_finite() && width >= 0.0) {
        return Vec::new();
    }
    let steps = (width / interval + 1e-9).floor() as usize;
    (0..=steps)
        .map(|i| bounds.min.x + i as f64 * interval)
        .collect()
}
