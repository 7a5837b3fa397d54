//! Band tests and smoothing-regime selection.

use glam::{BVec2, Vec2, Vec3};

use crate::config::{Bands, SmoothTimes};

/// Which smoothing behaviour is active for a step.
///
/// Priority is `Recenter` > `HardLimit` > `Tracking` > `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Subject inside the safe band; the camera only settles.
    #[default]
    Idle,
    /// Subject outside the safe band on at least one axis.
    Tracking,
    /// Subject outside the hard-limit band; faster correction.
    HardLimit,
    /// Subject has been still long enough to recentre on it.
    Recenter,
}

impl Regime {
    pub fn smooth_time(self, times: &SmoothTimes) -> f32 {
        match self {
            Regime::Idle | Regime::Tracking => times.base,
            Regime::HardLimit => times.limit,
            Regime::Recenter => times.recenter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Regime::Idle => "idle",
            Regime::Tracking => "tracking",
            Regime::HardLimit => "hard-limit",
            Regime::Recenter => "recenter",
        }
    }
}

/// Result of classifying one step, before idle recentering is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Gated subject movement to add to the camera target (x/y only).
    pub correction: Vec2,
    /// Axes on which the subject is outside the safe band.
    pub outside_safe: BVec2,
    /// Axes whose movement is applied. Same as `outside_safe` unless the
    /// subject did not move at all.
    pub gated: BVec2,
    pub hard_limit: bool,
    pub regime: Regime,
}

/// True when `p` lies outside the band with half-extents `extent`.
///
/// Horizontal extents are measured in from the screen edges, vertical
/// extents out from `mid`.
#[inline]
pub fn outside_band(p: Vec2, extent: Vec2, mid: f32) -> BVec2 {
    BVec2::new(
        p.x > 1.0 - extent.x || p.x < extent.x,
        p.y > extent.y + mid || p.y < mid - extent.y,
    )
}

/// Decides which axes of `delta` move the camera and which regime applies.
///
/// `viewport` is the subject's normalized screen position and `delta` its
/// world-space movement since the previous step.
pub fn classify(viewport: Vec2, delta: Vec3, bands: &Bands) -> Classification {
    let mid = bands.mid();
    let outside_safe = outside_band(viewport, bands.safe, mid);
    let hard_limit = outside_band(viewport, bands.hard_limit, mid).any();

    let movement = delta.truncate();
    let gated = if delta == Vec3::ZERO {
        BVec2::new(false, false)
    } else {
        outside_safe
    };
    let correction = Vec2::select(gated, movement, Vec2::ZERO);

    let regime = if hard_limit {
        Regime::HardLimit
    } else if gated.any() {
        Regime::Tracking
    } else {
        Regime::Idle
    };

    Classification {
        correction,
        outside_safe,
        gated,
        hard_limit,
        regime,
    }
}
