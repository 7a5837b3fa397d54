// Tests for the orthographic and perspective projection adapters.

use follow_core::{OrthographicProjection, PerspectiveProjection, ViewportProjection};
use glam::{Vec2, Vec3};

fn perspective() -> PerspectiveProjection {
    PerspectiveProjection {
        fovy_radians: std::f32::consts::FRAC_PI_4,
        aspect: 16.0 / 9.0,
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn orthographic_camera_centre_is_mid_screen() {
    let proj = OrthographicProjection::new(5.0, 2.0);
    let cam = Vec3::new(3.0, -1.0, 10.0);
    let vp = proj.world_to_viewport(cam, Vec3::new(3.0, -1.0, 0.0));
    assert!((vp - Vec2::splat(0.5)).length() < 1e-6);

    // visible area is 10 wide per half (half_height * aspect) and 5 tall
    let right_top = proj.world_to_viewport(cam, Vec3::new(13.0, 4.0, 0.0));
    assert!((right_top - Vec2::ONE).length() < 1e-6);
    let left_bottom = proj.world_to_viewport(cam, Vec3::new(-7.0, -6.0, 0.0));
    assert!(left_bottom.length() < 1e-6);
}

#[test]
fn orthographic_round_trip_over_grid() {
    let proj = OrthographicProjection::new(4.0, 16.0 / 9.0);
    let cam = Vec3::new(-2.0, 7.5, 10.0);
    for ix in 0..=8 {
        for iy in 0..=8 {
            let vp = Vec2::new(ix as f32 / 8.0, iy as f32 / 8.0);
            let world = proj.viewport_to_world(cam, vp, 0.3);
            assert!((world.z - 9.7).abs() < 1e-6);
            let back = proj.world_to_viewport(cam, world);
            assert!((back - vp).length() < 1e-5, "vp={vp} back={back}");
        }
    }
}

#[test]
fn perspective_camera_axis_projects_to_centre() {
    let proj = perspective();
    let cam = Vec3::new(1.0, 2.0, 10.0);
    for depth in [1.0_f32, 5.0, 20.0] {
        let vp = proj.world_to_viewport(cam, Vec3::new(1.0, 2.0, 10.0 - depth));
        assert!((vp - Vec2::splat(0.5)).length() < 1e-5, "depth={depth} vp={vp}");
    }
}

#[test]
fn perspective_round_trip_over_grid() {
    let proj = perspective();
    let cam = Vec3::new(-4.0, 0.5, 12.0);
    for &depth in &[0.3_f32, 2.0, 12.0] {
        for ix in 0..=4 {
            for iy in 0..=4 {
                let vp = Vec2::new(ix as f32 / 4.0, iy as f32 / 4.0);
                let world = proj.viewport_to_world(cam, vp, depth);
                assert!((world.z - (cam.z - depth)).abs() < 1e-4);
                let back = proj.world_to_viewport(cam, world);
                assert!(
                    (back - vp).length() < 1e-4,
                    "depth={depth} vp={vp} back={back}"
                );
            }
        }
    }
}

#[test]
fn perspective_points_further_away_move_toward_centre() {
    let proj = perspective();
    let cam = Vec3::new(0.0, 0.0, 10.0);
    let near = proj.world_to_viewport(cam, Vec3::new(2.0, 0.0, 5.0));
    let far = proj.world_to_viewport(cam, Vec3::new(2.0, 0.0, -20.0));
    assert!(near.x > far.x && far.x > 0.5);
    assert!((near.y - 0.5).abs() < 1e-5 && (far.y - 0.5).abs() < 1e-5);
}
