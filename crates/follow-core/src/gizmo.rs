//! Debug overlay geometry for the configured bands.
//!
//! Pure queries: nothing here touches controller state. Hosts draw the
//! returned segments however they like, or upload [`LineVertex`] pairs.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::config::FollowConfig;
use crate::constants::{HARD_LIMIT_BAND_COLOR, OVERLAY_DEPTH, SAFE_BAND_COLOR};
use crate::projection::ViewportProjection;

/// Two bands, four edges each.
pub type BandGeometry = SmallVec<[BandSegment; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandKind {
    Safe,
    HardLimit,
}

impl BandKind {
    pub fn color(self) -> [f32; 4] {
        match self {
            BandKind::Safe => SAFE_BAND_COLOR,
            BandKind::HardLimit => HARD_LIMIT_BAND_COLOR,
        }
    }
}

/// One band edge in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSegment {
    pub band: BandKind,
    pub start: Vec3,
    pub end: Vec3,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl BandSegment {
    /// Line-list vertices for this segment.
    pub fn vertices(&self) -> [LineVertex; 2] {
        let color = self.band.color();
        [
            LineVertex {
                position: self.start.to_array(),
                color,
            },
            LineVertex {
                position: self.end.to_array(),
                color,
            },
        ]
    }
}

// left, right, top, bottom
fn band_edges(extent: Vec2, mid: f32) -> [(Vec2, Vec2); 4] {
    let (left, right) = (extent.x, 1.0 - extent.x);
    let (bottom, top) = (mid - extent.y, extent.y + mid);
    [
        (Vec2::new(left, bottom), Vec2::new(left, top)),
        (Vec2::new(right, bottom), Vec2::new(right, top)),
        (Vec2::new(left, top), Vec2::new(right, top)),
        (Vec2::new(left, bottom), Vec2::new(right, bottom)),
    ]
}

/// World-space outline of the safe and hard-limit bands for a camera at
/// `camera`, placed [`OVERLAY_DEPTH`] in front of it. Empty when
/// `config.draw_bands` is off.
pub fn band_geometry(
    config: &FollowConfig,
    camera: Vec3,
    projection: &impl ViewportProjection,
) -> BandGeometry {
    let mut out = BandGeometry::new();
    if !config.draw_bands {
        return out;
    }
    let bands = &config.bands;
    for (band, extent) in [
        (BandKind::Safe, bands.safe),
        (BandKind::HardLimit, bands.hard_limit),
    ] {
        for (a, b) in band_edges(extent, bands.mid()) {
            out.push(BandSegment {
                band,
                start: projection.viewport_to_world(camera, a, OVERLAY_DEPTH),
                end: projection.viewport_to_world(camera, b, OVERLAY_DEPTH),
            });
        }
    }
    out
}

/// Flattens segments into a line-list vertex buffer.
pub fn line_vertices(segments: &[BandSegment]) -> Vec<LineVertex> {
    segments.iter().flat_map(|s| s.vertices()).collect()
}
