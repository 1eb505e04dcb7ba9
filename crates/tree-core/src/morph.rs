//! Damped progress values that drive every layer's scatter/tree morph.
//!
//! Progress never snaps: each frame it moves a fraction `1 - e^(-rate * dt)` of
//! the remaining distance towards its target. There is no "arrived" state, so
//! callers must never compare progress for exact equality with the target.

use crate::geometry::lerp;

/// Frame-rate independent exponential smoothing of `current` towards `target`.
///
/// Non-finite or negative `dt` leaves `current` unchanged.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 || rate <= 0.0 {
        return current;
    }
    lerp(current, target, 1.0 - (-rate * dt).exp())
}

/// Scalar morph progress in `[0, 1]` for one layer or sub-group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphProgress {
    value: f32,
    rate: f32,
}

impl MorphProgress {
    pub fn new(rate: f32) -> Self {
        Self { value: 0.0, rate }
    }

    pub fn with_value(rate: f32, value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            rate,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Advance towards `target` and return the new progress.
    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        self.value = damp(self.value, target.clamp(0.0, 1.0), self.rate, dt).clamp(0.0, 1.0);
        self.value
    }
}

/// Damped hover multiplier for photo frames (1.0 idle, grows while hovered).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverScale {
    value: f32,
    hovered: bool,
    peak: f32,
    rate: f32,
}

impl HoverScale {
    pub fn new(peak: f32, rate: f32) -> Self {
        Self {
            value: 1.0,
            hovered: false,
            peak,
            rate,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, dt: f32) -> f32 {
        let target = if self.hovered { self.peak } else { 1.0 };
        self.value = damp(self.value, target, self.rate, dt);
        self.value
    }
}
