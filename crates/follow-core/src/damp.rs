//! Critically damped smoothing.
//!
//! A closed-form approximation of a critically damped spring: the position
//! approaches the target as fast as possible for the given time constant
//! without oscillating. Velocity is carried between calls by the caller.

use glam::{Vec2, Vec3};

use crate::constants::{MIN_SMOOTH_TIME, SNAP_FACTOR};

/// Advances `current` toward `target` over `dt` seconds.
///
/// `smooth_time` is roughly the time to close most of the gap. Time constants
/// at or below [`MIN_SMOOTH_TIME`], or steps many orders of magnitude longer
/// than the time constant, land exactly on the target with zero velocity.
/// The result never passes the target on its way in.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    if smooth_time <= MIN_SMOOTH_TIME {
        *velocity = 0.0;
        return target;
    }
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    if x > SNAP_FACTOR {
        *velocity = 0.0;
        return target;
    }
    // Pade-style approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current) * (output - target) > 0.0 {
        *velocity = 0.0;
        return target;
    }
    output
}

/// Per-axis [`smooth_damp`]; each axis gets its own overshoot guard.
#[inline]
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    Vec2::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
    )
}

/// Damps the x/y of a camera position and keeps its depth untouched.
#[inline]
pub fn damp_position(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    smooth_damp_vec2(current.truncate(), target.truncate(), velocity, smooth_time, dt)
        .extend(current.z)
}
