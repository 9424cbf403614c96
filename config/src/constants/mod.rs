//! Centralized configuration values shared by the geometry generators.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Torus sweep**: Ring resolution, tube scale, Frenet frame parameters
//! - **Particles**: Billboard quad size
//! - **Animation**: Scalar drivers the demo scenes feed their shaders

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated `f32` geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-3);
/// ```
pub const EPSILON_TOLERANCE: f32 = 1.0e-5;

// =============================================================================
// TORUS SWEEP CONSTANTS
// =============================================================================

/// Default number of angular steps around the tube cross-section.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RING_SEGMENTS;
/// assert!(DEFAULT_RING_SEGMENTS >= 3);
/// ```
pub const DEFAULT_RING_SEGMENTS: u32 = 20;

/// Default tube radius, applied to the unit ring directions.
pub const DEFAULT_RING_SCALE: f32 = 0.35;

/// Parameter offset for the central-difference tangent estimate.
///
/// The tangent is taken as `curve(phi - eps) - curve(phi + eps)`.
pub const FRENET_EPSILON: f32 = 0.01;

/// Fixed reference axis crossed with the tangent to obtain the frame normal.
///
/// Degenerates when the tangent is parallel to it; accepted as-is.
pub const FRAME_HELPER: [f32; 3] = [1.0, 1.0, 0.0];

/// Number of spline segments covered by one texture tile along the knot.
///
/// # Examples
/// ```
/// use config::constants::TEXCOORD_TILE_SEGMENTS;
/// let v_step = 1.0 / TEXCOORD_TILE_SEGMENTS as f32;
/// assert_eq!(v_step, 0.125);
/// ```
pub const TEXCOORD_TILE_SEGMENTS: u32 = 8;

// =============================================================================
// PARTICLE CONSTANTS
// =============================================================================

/// Default edge length of a particle billboard quad.
pub const DEFAULT_PARTICLE_SIZE: f32 = 0.1;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Angular frequency (radians per millisecond) of the particle morph driver.
///
/// # Examples
/// ```
/// use config::constants::MORPH_FREQUENCY;
/// // one full cube -> sphere -> cube cycle takes roughly 7.85 seconds
/// let period_ms = std::f32::consts::TAU / MORPH_FREQUENCY;
/// assert!((period_ms - 7853.98).abs() < 1.0);
/// ```
pub const MORPH_FREQUENCY: f32 = 0.0008;

/// Immutable snapshot of generator settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.ring_segments, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Angular steps around the torus tube.
    pub ring_segments: u32,
    /// Tube radius of the torus sweep.
    pub ring_scale: f32,
    /// Edge length of particle billboards.
    pub particle_size: f32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(12, 0.5, 0.2).expect("valid config");
    /// assert_eq!(cfg.ring_segments, 12);
    /// ```
    pub fn new(ring_segments: u32, ring_scale: f32, particle_size: f32) -> Result<Self, ConfigError> {
        if ring_segments == 0 {
            return Err(ConfigError::InvalidRingSegments(ring_segments));
        }
        if !(ring_scale.is_finite() && ring_scale > 0.0) {
            return Err(ConfigError::InvalidRingScale(ring_scale));
        }
        if !(particle_size.is_finite() && particle_size > 0.0) {
            return Err(ConfigError::InvalidParticleSize(particle_size));
        }
        Ok(Self {
            ring_segments,
            ring_scale,
            particle_size,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            ring_segments: DEFAULT_RING_SEGMENTS,
            ring_scale: DEFAULT_RING_SCALE,
            particle_size: DEFAULT_PARTICLE_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the ring has no angular steps.
    InvalidRingSegments(u32),
    /// Raised when the tube radius is zero, negative or not finite.
    InvalidRingScale(f32),
    /// Raised when the particle size is zero, negative or not finite.
    InvalidParticleSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRingSegments(value) => {
                write!(f, "ring_segments must be >= 1: {value}")
            }
            ConfigError::InvalidRingScale(value) => {
                write!(f, "ring_scale must be positive: {value}")
            }
            ConfigError::InvalidParticleSize(value) => {
                write!(f, "particle_size must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
