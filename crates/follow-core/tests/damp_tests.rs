// Tests for the critically damped integrator.

use follow_core::{damp_position, smooth_damp, smooth_damp_vec2};
use glam::{Vec2, Vec3};

#[test]
fn converges_monotonically_without_overshoot() {
    for &smooth_time in &[0.05_f32, 0.1, 0.2, 0.5, 1.0] {
        for &dt in &[0.005_f32, 0.02, 0.05] {
            for &(start, target) in &[(0.0_f32, 10.0_f32), (3.0, -4.0), (-7.5, -7.0)] {
                let mut pos = start;
                let mut vel = 0.0;
                let mut dist = (target - pos).abs();
                for i in 0..4000 {
                    pos = smooth_damp(pos, target, &mut vel, smooth_time, dt);
                    assert!(pos.is_finite());
                    assert!(
                        (target - start) * (pos - target) <= 0.0,
                        "overshoot at step {i}: st={smooth_time} dt={dt} pos={pos} target={target}"
                    );
                    let d = (target - pos).abs();
                    assert!(
                        d <= dist + 1e-5,
                        "moved away at step {i}: st={smooth_time} dt={dt} {dist} -> {d}"
                    );
                    dist = d;
                }
                assert!(
                    dist < 1e-4,
                    "did not converge: st={smooth_time} dt={dt} remaining={dist}"
                );
            }
        }
    }
}

#[test]
fn at_target_with_no_velocity_stays_exactly() {
    let mut vel = 0.0;
    let out = smooth_damp(2.5, 2.5, &mut vel, 0.2, 0.02);
    assert_eq!(out, 2.5);
    assert_eq!(vel, 0.0);
}

#[test]
fn tiny_time_constant_snaps_to_target() {
    for smooth_time in [0.0_f32, 1e-6, 1e-4] {
        let mut vel = 3.0;
        let out = smooth_damp(0.0, 5.0, &mut vel, smooth_time, 0.02);
        assert_eq!(out, 5.0, "smooth_time={smooth_time}");
        assert_eq!(vel, 0.0);
    }
}

// Property: from rest, no combination of step and time constant diverges or
// ends further from the target than it started.
#[test]
fn stable_for_extreme_steps_and_time_constants() {
    let times = [1e-5_f32, 1e-3, 0.01, 0.1, 1.0, 10.0];
    let steps = [1e-4_f32, 0.02, 1.0, 100.0, 1e4];
    for &smooth_time in &times {
        for &dt in &steps {
            let mut vel = 0.0;
            let out = smooth_damp(-20.0, 20.0, &mut vel, smooth_time, dt);
            assert!(
                out.is_finite() && vel.is_finite(),
                "non-finite for st={smooth_time} dt={dt}: out={out} vel={vel}"
            );
            assert!(
                (-20.0..=20.0).contains(&out),
                "left the start..target span for st={smooth_time} dt={dt}: {out}"
            );
            if dt / smooth_time > 1e3 {
                assert!(
                    (out - 20.0).abs() < 1e-3,
                    "long step should land on target: st={smooth_time} dt={dt} out={out}"
                );
            }
        }
    }
}

#[test]
fn non_positive_step_is_a_no_op() {
    let mut vel = 1.5;
    assert_eq!(smooth_damp(1.0, 9.0, &mut vel, 0.2, 0.0), 1.0);
    assert_eq!(smooth_damp(1.0, 9.0, &mut vel, 0.2, -0.02), 1.0);
    assert_eq!(vel, 1.5);
}

#[test]
fn axes_are_damped_independently() {
    let mut vel = Vec2::ZERO;
    let out = smooth_damp_vec2(Vec2::new(0.0, 4.0), Vec2::new(10.0, 4.0), &mut vel, 0.2, 0.02);
    assert!(out.x > 0.0 && out.x < 10.0);
    assert_eq!(out.y, 4.0);
    assert_eq!(vel.y, 0.0);
}

#[test]
fn position_damping_keeps_camera_depth() {
    let mut vel = Vec2::ZERO;
    let current = Vec3::new(1.0, 2.0, -10.0);
    let target = Vec3::new(5.0, -3.0, 42.0);
    let mut pos = current;
    for _ in 0..200 {
        pos = damp_position(pos, target, &mut vel, 0.1, 0.02);
        assert_eq!(pos.z, -10.0);
    }
    assert!((pos.truncate() - target.truncate()).length() < 1e-3);
}
