//! Generator configuration building on the shared `config` crate.
//!
//! Settings are immutable values passed into each generator call. The
//! defaults reproduce the demo scenes; the validated constructors are opt-in
//! for callers (such as the WASM boundary) that want to reject bad input
//! instead of producing degenerate geometry.

use config::constants::{GlobalConfig, DEFAULT_PARTICLE_SIZE, DEFAULT_RING_SCALE, DEFAULT_RING_SEGMENTS};

use crate::error::GeometryResult;
use crate::mesh::VertexAttribute;

/// Ring sweep settings and requested attributes for [`crate::TorusKnot`].
///
/// # Examples
/// ```
/// use meshgen::TorusConfig;
///
/// let cfg = TorusConfig::default().with_colors(true).with_normals(false);
/// assert_eq!(cfg.ring_segments, 20);
/// assert!(cfg.colors && !cfg.normals);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusConfig {
    /// Angular steps around the tube cross-section.
    pub ring_segments: u32,
    /// Tube radius applied to the unit ring directions.
    pub ring_scale: f32,
    /// Emit tiled texture coordinates.
    pub texcoords: bool,
    /// Emit (approximate) ring-direction normals.
    pub normals: bool,
    /// Emit the debug `(sin, cos, 0, 1)` ring coloring.
    pub colors: bool,
}

impl TorusConfig {
    /// Creates a validated configuration with texcoords and normals enabled.
    ///
    /// # Examples
    /// ```
    /// use meshgen::TorusConfig;
    /// assert!(TorusConfig::new(0, 0.35).is_err());
    /// assert_eq!(TorusConfig::new(8, 0.5).unwrap().ring_segments, 8);
    /// ```
    pub fn new(ring_segments: u32, ring_scale: f32) -> GeometryResult<Self> {
        let global = GlobalConfig::new(ring_segments, ring_scale, DEFAULT_PARTICLE_SIZE)?;
        Ok(Self::from_global(&global))
    }

    /// Takes ring settings from a shared global configuration.
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self {
            ring_segments: global.ring_segments,
            ring_scale: global.ring_scale,
            ..Self::default()
        }
    }

    /// Replaces the ring resolution and tube radius without validation.
    #[must_use]
    pub fn with_ring(mut self, ring_segments: u32, ring_scale: f32) -> Self {
        self.ring_segments = ring_segments;
        self.ring_scale = ring_scale;
        self
    }

    /// Toggles texture coordinate output.
    #[must_use]
    pub fn with_texcoords(mut self, enabled: bool) -> Self {
        self.texcoords = enabled;
        self
    }

    /// Toggles normal output.
    #[must_use]
    pub fn with_normals(mut self, enabled: bool) -> Self {
        self.normals = enabled;
        self
    }

    /// Toggles debug color output.
    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Optional attributes this configuration asks for.
    pub fn attributes(&self) -> Vec<VertexAttribute> {
        [
            (self.texcoords, VertexAttribute::TexCoord),
            (self.normals, VertexAttribute::Normal),
            (self.colors, VertexAttribute::Color),
        ]
        .into_iter()
        .filter_map(|(enabled, attribute)| enabled.then_some(attribute))
        .collect()
    }
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            ring_segments: DEFAULT_RING_SEGMENTS,
            ring_scale: DEFAULT_RING_SCALE,
            texcoords: true,
            normals: true,
            colors: false,
        }
    }
}

/// Billboard settings for [`crate::points_to_particle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    /// Edge length of each particle quad.
    pub particle_size: f32,
}

impl ParticleConfig {
    /// Creates a validated particle configuration.
    ///
    /// # Examples
    /// ```
    /// use meshgen::ParticleConfig;
    /// assert!(ParticleConfig::new(-0.1).is_err());
    /// ```
    pub fn new(particle_size: f32) -> GeometryResult<Self> {
        let global = GlobalConfig::new(DEFAULT_RING_SEGMENTS, DEFAULT_RING_SCALE, particle_size)?;
        Ok(Self::from_global(&global))
    }

    /// Takes the particle size from a shared global configuration.
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self {
            particle_size: global.particle_size,
        }
    }

    /// Replaces the particle size without validation.
    #[must_use]
    pub fn with_size(self, particle_size: f32) -> Self {
        Self { particle_size }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_size: DEFAULT_PARTICLE_SIZE,
        }
    }
}
