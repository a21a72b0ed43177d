//! Bar value storage.
//!
//! Holds the most recent level for each of the 32 bars. The host overwrites
//! values between frames and the renderer reads them once per frame; no
//! history is kept.

/// Number of bars in the visualization.
pub const BAR_COUNT: usize = 32;

/// Fixed-capacity set of bar levels, nominally in `[0.0, 1.0]`.
///
/// Values are not clamped here or anywhere downstream: an out-of-range level
/// produces an out-of-bounds quad, which hosts use for deliberate overshoot
/// effects (e.g. peak indicators).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarValueSet {
    values: [f32; BAR_COUNT],
}

impl Default for BarValueSet {
    fn default() -> Self {
        // Seed at 10% so an idle visualizer is visibly alive.
        Self {
            values: [0.1; BAR_COUNT],
        }
    }
}

impl BarValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the first `min(values.len(), 32)` levels in place.
    ///
    /// Excess input beyond 32 entries is silently ignored; entries not
    /// covered by the input keep their previous value.
    pub fn update(&mut self, values: &[f32]) {
        let count = values.len().min(BAR_COUNT);
        self.values[..count].copy_from_slice(&values[..count]);
    }

    /// Current levels, one per bar.
    pub fn values(&self) -> &[f32; BAR_COUNT] {
        &self.values
    }
}
