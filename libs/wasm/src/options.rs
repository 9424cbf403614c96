//! # Generator Options
//!
//! JSON option objects accepted by the exported functions. Every field is
//! optional; missing fields fall back to the demo scene values. Unknown
//! fields are rejected so typos surface instead of silently using defaults.

use config::constants::{DEFAULT_PARTICLE_SIZE, DEFAULT_RING_SCALE, DEFAULT_RING_SEGMENTS};
use meshgen::scenes::{
    CUBE_POINTS_PER_SIDE, PARTICLE_SHAPE_WIDTH, SPHERE_POINTS, SPHERE_TURNS, TORUS_KNOT,
    TORUS_RADIUS, TORUS_SEGMENTS,
};
use meshgen::{GeometryError, GeometryResult, ParticleConfig, TorusConfig, Vec3};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while turning JavaScript input into geometry.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The options string is not valid JSON for the expected shape.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    /// The options parsed but describe an invalid configuration.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The log level name is not one of off/error/warn/info/debug/trace.
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Parses an options object; blank input means "all defaults".
pub(crate) fn parse_options<T>(json: &str) -> Result<T, OptionsError>
where
    T: DeserializeOwned + Default,
{
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// TORUS
// =============================================================================

/// Options for `torus_mesh`.
///
/// ```json
/// { "segments": 200, "p": 2, "q": 5, "ringSegments": 20, "ringScale": 0.35, "colors": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TorusOptions {
    /// Spline steps along the knot.
    pub segments: u32,
    /// Radius recorded with the knot.
    pub radius: f32,
    /// Windings around the z axis.
    pub p: f32,
    /// Windings through the hole.
    pub q: f32,
    /// Steps around the tube cross-section.
    pub ring_segments: u32,
    /// Tube radius.
    pub ring_scale: f32,
    /// Emit texture coordinates.
    pub texcoords: bool,
    /// Emit normals.
    pub normals: bool,
    /// Emit debug colors.
    pub colors: bool,
}

impl Default for TorusOptions {
    fn default() -> Self {
        let (p, q) = TORUS_KNOT;
        Self {
            segments: TORUS_SEGMENTS,
            radius: TORUS_RADIUS,
            p,
            q,
            ring_segments: DEFAULT_RING_SEGMENTS,
            ring_scale: DEFAULT_RING_SCALE,
            texcoords: true,
            normals: true,
            colors: false,
        }
    }
}

impl TorusOptions {
    /// Validated sweep configuration.
    pub fn config(&self) -> GeometryResult<TorusConfig> {
        Ok(TorusConfig::new(self.ring_segments, self.ring_scale)?
            .with_texcoords(self.texcoords)
            .with_normals(self.normals)
            .with_colors(self.colors))
    }
}

// =============================================================================
// PARTICLES
// =============================================================================

/// Options for `particle_cube`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CubeOptions {
    /// Samples along each side.
    pub points_per_side: u32,
    /// Edge length.
    pub width: f32,
    /// Centre as `[x, y, z]`.
    pub origin: Vec3,
    /// Billboard edge length.
    pub particle_size: f32,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            points_per_side: CUBE_POINTS_PER_SIDE,
            width: PARTICLE_SHAPE_WIDTH,
            origin: Vec3::ZERO,
            particle_size: DEFAULT_PARTICLE_SIZE,
        }
    }
}

impl CubeOptions {
    /// Validated billboard configuration.
    pub fn config(&self) -> GeometryResult<ParticleConfig> {
        ParticleConfig::new(self.particle_size)
    }
}

/// Options for `particle_sphere`.
///
/// `origin` is accepted for parity with the other samplers; the sphere is
/// always centred on the world origin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SphereOptions {
    /// Points along the spiral.
    pub total_points: u32,
    /// Spiral windings.
    pub num_turns: f32,
    /// Diameter.
    pub width: f32,
    /// Ignored centre.
    pub origin: Vec3,
    /// Billboard edge length.
    pub particle_size: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            total_points: SPHERE_POINTS,
            num_turns: SPHERE_TURNS,
            width: PARTICLE_SHAPE_WIDTH,
            origin: Vec3::ZERO,
            particle_size: DEFAULT_PARTICLE_SIZE,
        }
    }
}

impl SphereOptions {
    /// Validated billboard configuration.
    pub fn config(&self) -> GeometryResult<ParticleConfig> {
        ParticleConfig::new(self.particle_size)
    }
}

/// Options for `particle_svg`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SvgOptions {
    /// Path data, e.g. `"M 0,0 l 10,0 l 0,10"`.
    pub path: String,
    /// Bounding box diagonal after fitting.
    pub width: f32,
    /// Centroid after fitting.
    pub origin: Vec3,
    /// Billboard edge length.
    pub particle_size: f32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            path: String::new(),
            width: PARTICLE_SHAPE_WIDTH,
            origin: Vec3::ZERO,
            particle_size: DEFAULT_PARTICLE_SIZE,
        }
    }
}

impl SvgOptions {
    /// Validated billboard configuration.
    pub fn config(&self) -> GeometryResult<ParticleConfig> {
        ParticleConfig::new(self.particle_size)
    }
}
