//! Tunable parameters for the follow controller.
//!
//! These are plain value types. Documented ranges are guidance for hosts and
//! editors; the only rule enforced at runtime is the band margin applied by
//! [`Bands::clamped`] and the positivity checks in [`FollowConfig::validate`].

use glam::Vec2;

use crate::constants::*;
use crate::error::{FollowError, Result};

/// Screen regions, as half-extents in normalized viewport units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bands {
    /// Region in which the subject may move without moving the camera.
    /// Each axis is typically in `0.0..=0.5`.
    pub safe: Vec2,
    /// Region whose violation switches to the limit smoothing time.
    /// Narrower than `safe` horizontally, wider vertically.
    pub hard_limit: Vec2,
    /// Shifts the vertical centre of both bands, typically `-0.25..=0.25`.
    pub vertical_offset: f32,
}

impl Default for Bands {
    fn default() -> Self {
        Self {
            safe: Vec2::from(DEFAULT_SAFE_BAND),
            hard_limit: Vec2::from(DEFAULT_HARD_LIMIT_BAND),
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
        }
    }
}

impl Bands {
    /// Vertical centre of both bands in viewport units.
    #[inline]
    pub fn mid(&self) -> f32 {
        VIEWPORT_MID + self.vertical_offset
    }

    /// Returns a copy whose hard-limit band keeps at least [`BAND_MARGIN`]
    /// inside the safe band horizontally and outside it vertically.
    pub fn clamped(self) -> Self {
        let hard_limit = Vec2::new(
            self.hard_limit.x.min(self.safe.x - BAND_MARGIN),
            self.hard_limit.y.max(self.safe.y + BAND_MARGIN),
        );
        Self { hard_limit, ..self }
    }

    pub fn is_finite(&self) -> bool {
        self.safe.is_finite() && self.hard_limit.is_finite() && self.vertical_offset.is_finite()
    }
}

/// Integrator time constants in seconds. Smaller is snappier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothTimes {
    /// Used while idle or tracking inside the hard limit.
    pub base: f32,
    /// Used while the subject is outside the hard-limit band.
    pub limit: f32,
    /// Used while recentering on an idle subject.
    pub recenter: f32,
}

impl Default for SmoothTimes {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_SMOOTH_TIME,
            limit: DEFAULT_LIMIT_SMOOTH_TIME,
            recenter: DEFAULT_RECENTER_SMOOTH_TIME,
        }
    }
}

impl SmoothTimes {
    /// Builds time constants from multipliers of the fixed step, e.g. a base
    /// of 10 at a 0.02 s step is 0.2 s.
    pub fn from_step_multipliers(base: f32, limit: f32, recenter: f32, step: f32) -> Self {
        Self {
            base: base * step,
            limit: limit * step,
            recenter: recenter * step,
        }
    }

    fn check(&self) -> Result<()> {
        for (regime, value) in [
            ("base", self.base),
            ("limit", self.limit),
            ("recenter", self.recenter),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FollowError::InvalidSmoothTime { regime, value });
            }
        }
        Ok(())
    }
}

/// Idle recentering settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleRecenter {
    pub enabled: bool,
    /// Seconds of subject stillness before the camera recentres on it.
    pub time_to_recenter: f32,
}

impl Default for IdleRecenter {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_IDLE_RECENTER,
            time_to_recenter: DEFAULT_IDLE_TIME_TO_RECENTER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowConfig {
    pub bands: Bands,
    pub smooth_times: SmoothTimes,
    pub idle: IdleRecenter,
    /// Whether the debug band overlay produces geometry.
    pub draw_bands: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self::new(Bands::default(), SmoothTimes::default(), IdleRecenter::default())
    }
}

impl FollowConfig {
    pub fn new(bands: Bands, smooth_times: SmoothTimes, idle: IdleRecenter) -> Self {
        Self {
            bands,
            smooth_times,
            idle,
            draw_bands: true,
        }
    }

    /// Clamps the bands and checks the time settings.
    ///
    /// Band adjustments never fail. Non-finite band values, non-positive
    /// smooth times and negative idle times are rejected.
    pub fn validate(&mut self) -> Result<()> {
        if !self.bands.is_finite() {
            return Err(FollowError::NonFiniteBands);
        }
        let clamped = self.bands.clamped();
        if clamped != self.bands {
            log::warn!(
                "hard-limit band ({:.3},{:.3}) clamped to ({:.3},{:.3}) against safe band ({:.3},{:.3})",
                self.bands.hard_limit.x,
                self.bands.hard_limit.y,
                clamped.hard_limit.x,
                clamped.hard_limit.y,
                self.bands.safe.x,
                self.bands.safe.y
            );
            self.bands = clamped;
        }
        self.smooth_times.check()?;
        let idle = self.idle.time_to_recenter;
        if !idle.is_finite() || idle < 0.0 {
            return Err(FollowError::InvalidIdleTime(idle));
        }
        Ok(())
    }
}
