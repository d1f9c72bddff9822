#![forbid(unsafe_code)]

//! Composable animation primitives.
//!
//! Time-based progress producing normalized `f32` values (0.0–1.0). The
//! overlay layer drives these from its tick; they allocate nothing and know
//! nothing about layout.

use std::time::Duration;

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Linear progression from 0.0 to 1.0 over a duration, with configurable
/// easing.
///
/// Elapsed time is tracked as [`Duration`] internally for precise
/// accumulation (no floating-point drift).
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade with the given duration and default linear easing.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Create a fade that starts part-way through.
    ///
    /// `progress` is raw (pre-easing) progress in [0, 1]. This is what makes
    /// jump-free reversal possible: a reversed animation resumes from the
    /// complement of where the interrupted one stopped.
    #[must_use]
    pub fn from_progress(duration: Duration, progress: f32) -> Self {
        let mut fade = Self::new(duration);
        fade.elapsed = fade.duration.mul_f64(f64::from(progress.clamp(0.0, 1.0)));
        fade
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Advance the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the animation has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current output value, clamped to [0.0, 1.0].
    #[must_use]
    pub fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    /// Reset the animation to its initial state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
