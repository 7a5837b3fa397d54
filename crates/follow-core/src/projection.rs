//! World <-> viewport conversion for a camera with fixed orientation.
//!
//! The camera looks down -Z with +Y up (right-handed), and only its position
//! changes. Viewport coordinates are normalized to `0..1` on both axes with
//! the origin at the bottom-left of the screen.

use glam::{Mat4, Vec2, Vec3};

/// Converts between world space and normalized viewport space.
///
/// Implementations must be pure: the same inputs always give the same
/// outputs and nothing is mutated.
pub trait ViewportProjection {
    /// Projects `world` to viewport coordinates for a camera at `camera`.
    fn world_to_viewport(&self, camera: Vec3, world: Vec3) -> Vec2;

    /// Un-projects a viewport point to world space, `depth` units in front
    /// of the camera plane.
    fn viewport_to_world(&self, camera: Vec3, viewport: Vec2, depth: f32) -> Vec3;
}

#[inline]
fn ndc_to_viewport(ndc: Vec2) -> Vec2 {
    (ndc + Vec2::ONE) * 0.5
}

#[inline]
fn viewport_to_ndc(viewport: Vec2) -> Vec2 {
    viewport * 2.0 - Vec2::ONE
}

/// Orthographic camera: `half_height` world units above and below centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicProjection {
    pub half_height: f32,
    /// Width over height.
    pub aspect: f32,
}

impl OrthographicProjection {
    pub fn new(half_height: f32, aspect: f32) -> Self {
        Self {
            half_height,
            aspect,
        }
    }

    /// World-space half-extents of the visible area.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_height * self.aspect, self.half_height)
    }
}

impl ViewportProjection for OrthographicProjection {
    fn world_to_viewport(&self, camera: Vec3, world: Vec3) -> Vec2 {
        let rel = (world - camera).truncate();
        ndc_to_viewport(rel / self.half_extents())
    }

    fn viewport_to_world(&self, camera: Vec3, viewport: Vec2, depth: f32) -> Vec3 {
        let rel = viewport_to_ndc(viewport) * self.half_extents();
        camera + rel.extend(-depth)
    }
}

/// Perspective camera with a vertical field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveProjection {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveProjection {
    /// Right-handed clip matrix for the lens. It does not depend on where
    /// the camera is, so callers may cache it while only the camera moves.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// View matrix for a camera at `camera` looking down -Z.
    pub fn view_matrix(&self, camera: Vec3) -> Mat4 {
        Mat4::look_at_rh(camera, camera - Vec3::Z, Vec3::Y)
    }
}

impl ViewportProjection for PerspectiveProjection {
    fn world_to_viewport(&self, camera: Vec3, world: Vec3) -> Vec2 {
        let view_proj = self.projection_matrix() * self.view_matrix(camera);
        ndc_to_viewport(view_proj.project_point3(world).truncate())
    }

    fn viewport_to_world(&self, camera: Vec3, viewport: Vec2, depth: f32) -> Vec3 {
        let half_height = depth * (self.fovy_radians * 0.5).tan();
        let half = Vec2::new(half_height * self.aspect, half_height);
        camera + (viewport_to_ndc(viewport) * half).extend(-depth)
    }
}
