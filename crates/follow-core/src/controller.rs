use glam::{Vec2, Vec3};

use crate::config::FollowConfig;
use crate::damp::damp_position;
use crate::error::{FollowError, Result};
use crate::gizmo::{band_geometry, BandGeometry};
use crate::idle::IdleTimer;
use crate::projection::ViewportProjection;
use crate::regime::{classify, Regime};

/// Per-instance runtime state, seeded by [`CameraFollowController::initialize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingState {
    /// Current camera position. Its z is owned by the caller.
    pub camera: Vec3,
    /// Where the camera is heading. Accumulates gated subject movement.
    pub target: Vec3,
    pub last_subject: Vec3,
    /// Integrator velocity on x/y.
    pub velocity: Vec2,
    pub idle: IdleTimer,
    pub regime: Regime,
}

/// Keeps a subject inside the configured screen bands, one fixed step at a
/// time.
///
/// The controller holds no references to the host: each [`step`] is given
/// the subject position, the step length and a projection.
///
/// [`step`]: CameraFollowController::step
#[derive(Clone, Debug)]
pub struct CameraFollowController {
    config: FollowConfig,
    state: Option<TrackingState>,
}

impl CameraFollowController {
    pub fn new(mut config: FollowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
        })
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Validates and stores `config`. On error the previous configuration
    /// stays in place.
    pub fn configure(&mut self, mut config: FollowConfig) -> Result<()> {
        config.validate()?;
        if !config.idle.enabled {
            if let Some(state) = self.state.as_mut() {
                state.idle.reset();
            }
        }
        self.config = config;
        Ok(())
    }

    /// Applies an in-place edit to a copy of the configuration, then
    /// validates and stores it like [`configure`](Self::configure).
    pub fn update_config(&mut self, edit: impl FnOnce(&mut FollowConfig)) -> Result<()> {
        let mut config = self.config;
        edit(&mut config);
        self.configure(config)
    }

    /// Starts (or restarts) tracking from the given positions.
    pub fn initialize(&mut self, camera: Vec3, subject: Vec3) {
        log::info!(
            "tracking start camera=({:.2},{:.2},{:.2}) subject=({:.2},{:.2},{:.2})",
            camera.x,
            camera.y,
            camera.z,
            subject.x,
            subject.y,
            subject.z
        );
        self.state = Some(TrackingState {
            camera,
            target: camera,
            last_subject: subject,
            velocity: Vec2::ZERO,
            idle: IdleTimer::default(),
            regime: Regime::Idle,
        });
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&TrackingState> {
        self.state.as_ref()
    }

    pub fn camera_position(&self) -> Option<Vec3> {
        self.state.map(|s| s.camera)
    }

    pub fn target(&self) -> Option<Vec3> {
        self.state.map(|s| s.target)
    }

    pub fn velocity(&self) -> Option<Vec2> {
        self.state.map(|s| s.velocity)
    }

    pub fn idle_time(&self) -> Option<f32> {
        self.state.map(|s| s.idle.elapsed())
    }

    /// Regime chosen by the most recent step; `Idle` before any step.
    pub fn regime(&self) -> Regime {
        self.state.map(|s| s.regime).unwrap_or_default()
    }

    /// Runs one fixed step and returns the camera's new world position.
    ///
    /// The subject is projected with the camera where it was before this
    /// step. Nothing is updated when an error is returned.
    pub fn step(
        &mut self,
        subject: Vec3,
        dt: f32,
        projection: &impl ViewportProjection,
    ) -> Result<Vec3> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(FollowError::InvalidStepDuration(dt));
        }
        if !subject.is_finite() {
            return Err(FollowError::NonFiniteSubject(subject));
        }
        let config = &self.config;
        let current = self.state.as_mut().ok_or(FollowError::NotInitialized)?;
        let mut next = *current;

        let delta = subject - next.last_subject;
        let viewport = projection.world_to_viewport(next.camera, subject);
        let class = classify(viewport, delta, &config.bands);
        let mut regime = class.regime;
        next.target += class.correction.extend(0.0);

        if config.idle.enabled {
            next.idle.advance(delta, dt);
            if next.idle.expired(config.idle.time_to_recenter, dt) {
                next.target = subject;
                regime = Regime::Recenter;
            }
        }
        next.target.z = next.camera.z;
        next.last_subject = subject;

        let smooth_time = regime.smooth_time(&config.smooth_times);
        let position = damp_position(
            next.camera,
            next.target,
            &mut next.velocity,
            smooth_time,
            dt,
        );
        if !position.is_finite() {
            return Err(FollowError::NonFinitePosition(position));
        }

        if regime != current.regime {
            log::debug!(
                "regime {} -> {} at viewport ({:.3},{:.3}), idle {:.2}s",
                current.regime.name(),
                regime.name(),
                viewport.x,
                viewport.y,
                next.idle.elapsed()
            );
        }
        log::trace!(
            "step vp=({:.3},{:.3}) target=({:.3},{:.3}) cam=({:.3},{:.3})",
            viewport.x,
            viewport.y,
            next.target.x,
            next.target.y,
            position.x,
            position.y
        );

        next.regime = regime;
        next.camera = position;
        *current = next;
        Ok(position)
    }

    /// Band outline around the current camera position, for debug overlays.
    /// Empty before [`initialize`](Self::initialize) or when band drawing is off.
    pub fn debug_band_geometry(&self, projection: &impl ViewportProjection) -> BandGeometry {
        match &self.state {
            Some(state) => band_geometry(&self.config, state.camera, projection),
            None => BandGeometry::new(),
        }
    }
}
