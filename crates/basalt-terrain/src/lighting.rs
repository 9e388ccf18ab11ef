//! Directional lighting with the slope-sampling approximation
//!
//! Per-vertex brightness comes from a fixed up normal plus an optional
//! slope term. The slope term never materializes a surface normal: the
//! light direction picks two neighboring cells once, and every cell after
//! that costs two height lookups and a blend.

use basalt_core::{Color, Result, Vec3};

use crate::heightmap::HeightMap;

/// Directional light parameter block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    /// Direction the light travels, from the source into the scene.
    /// Normalized on use.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient_intensity: 0.2,
            diffuse_intensity: 0.8,
            direction: Vec3::new(0.0, -1.0, 0.0),
        }
    }
}

/// The 8-neighborhood, counter-clockwise from +X, as `(dx, dz)` offsets.
/// Entry `k` sits at azimuth `k * 45` degrees.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Which two neighboring cells approximate the local slope toward the
/// light, and how to blend their heights
///
/// Computed once per light direction and reused for every cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlopeLightInfo {
    /// Offset to the first sampled cell, toward the light source
    pub dx0: i64,
    pub dz0: i64,
    /// Offset to the second sampled cell, toward the light source
    pub dx1: i64,
    pub dz1: i64,
    /// Interpolation factor between the two sampled heights
    pub factor: f32,
}

impl SlopeLightInfo {
    /// Derive the sampling offsets from the light's travel direction.
    ///
    /// The horizontal direction toward the source selects an octant of the
    /// 8-neighborhood; the two bracketing offsets are kept along with the
    /// fractional position between them. A vertical light has no horizontal
    /// component and yields the degenerate all-zero info, whose slope
    /// contribution is zero everywhere.
    pub fn from_light_dir(dir: &Vec3) -> Self {
        // Walk against the travel direction, toward the source.
        let (tx, tz) = (-dir.x, -dir.z);
        if tx == 0.0 && tz == 0.0 {
            return Self::default();
        }

        let mut angle = tz.atan2(tx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }

        let sector = angle / 45.0;
        let i0 = (sector as usize) % 8;
        let i1 = (i0 + 1) % 8;
        let (dx0, dz0) = NEIGHBOR_OFFSETS[i0];
        let (dx1, dz1) = NEIGHBOR_OFFSETS[i1];

        Self {
            dx0,
            dz0,
            dx1,
            dz1,
            factor: sector - sector.floor(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.dx0 == 0 && self.dz0 == 0 && self.dx1 == 0 && self.dz1 == 0
    }
}

/// Brightness from the fixed up normal alone:
/// `ambient + diffuse * saturate(up . -L)`, clamped to [0, 1].
pub fn simple_brightness(light: &DirectionalLight) -> f32 {
    let shade = Vec3::UP
        .dot(&-light.direction.normalized())
        .clamp(0.0, 1.0);

    (light.ambient_intensity + light.diffuse_intensity * shade).clamp(0.0, 1.0)
}

/// Brightness with the slope term folded in.
///
/// The two precomputed neighbor heights blend into an estimate of the
/// terrain height toward the light; the ascent per world unit shifts the
/// shade before the ambient/diffuse combination. Terrain rising toward the
/// light brightens, terrain falling away darkens, and a flat grid or a
/// vertical light reproduces [`simple_brightness`] exactly.
pub fn slope_scale_brightness(
    heightmap: &HeightMap,
    info: &SlopeLightInfo,
    light: &DirectionalLight,
    world_scale: f32,
    x: usize,
    z: usize,
) -> Result<f32> {
    let here = heightmap.get(x, z)?;

    if info.is_degenerate() {
        return Ok(simple_brightness(light));
    }

    let (x, z) = (x as i64, z as i64);
    let h0 = heightmap.get_clamped(x + info.dx0, z + info.dz0);
    let h1 = heightmap.get_clamped(x + info.dx1, z + info.dz1);
    let toward = h0 + (h1 - h0) * info.factor;
    let ascent = (toward - here) / world_scale;

    let up_shade = Vec3::UP
        .dot(&-light.direction.normalized())
        .clamp(0.0, 1.0);
    let shade = (up_shade + ascent).clamp(0.0, 1.0);

    Ok((light.ambient_intensity + light.diffuse_intensity * shade).clamp(0.0, 1.0))
}
