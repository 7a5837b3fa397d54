use glam::Vec3;

use crate::constants::IDLE_STEP_SLACK;

/// Accumulates how long the subject has been perfectly still.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdleTimer {
    elapsed: f32,
}

impl IdleTimer {
    /// Adds `dt` when `delta` is exactly zero, otherwise resets to zero.
    /// Returns the accumulated stillness in seconds.
    pub fn advance(&mut self, delta: Vec3, dt: f32) -> f32 {
        if delta == Vec3::ZERO {
            self.elapsed += dt;
        } else {
            self.elapsed = 0.0;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Whether the subject has been still for at least `threshold` seconds.
    ///
    /// Summing `dt` in f32 drifts below the exact total (150 steps of 0.02
    /// give 2.9999979), so the comparison allows a small fraction of one
    /// step of slack. The answer never flips a whole step early.
    #[inline]
    pub fn expired(&self, threshold: f32, dt: f32) -> bool {
        self.elapsed >= threshold - dt * IDLE_STEP_SLACK
    }
}
