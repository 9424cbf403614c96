//! Morph pairs: two particle meshes the renderer blends between.

use config::constants::MORPH_FREQUENCY;
use log::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshBuffers;

/// Source and target particle meshes with matching vertex counts.
///
/// Blending happens on the GPU: both position buffers are uploaded as
/// separate attributes and mixed by a transition uniform, see
/// [`morph_state`]. Texture coordinates are taken from the source.
///
/// # Examples
/// ```
/// use meshgen::{point_cube, point_sphere, points_to_particle, ParticleConfig, ParticleMorph, Vec3};
///
/// let config = ParticleConfig::default();
/// let cube = points_to_particle(&point_cube(10, 4.0, Vec3::ZERO), &config);
/// let sphere = points_to_particle(&point_sphere(360, 20.0, 4.0, Vec3::ZERO), &config);
/// let morph = ParticleMorph::new(cube, sphere).unwrap();
/// assert_eq!(morph.vertex_count(), 360 * 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleMorph {
    from: MeshBuffers,
    to: MeshBuffers,
}

impl ParticleMorph {
    /// Pairs two meshes, rejecting them if their vertex counts differ.
    pub fn new(from: MeshBuffers, to: MeshBuffers) -> GeometryResult<Self> {
        if from.vertex_count() != to.vertex_count() {
            return Err(GeometryError::MorphMismatch {
                from: from.vertex_count(),
                to: to.vertex_count(),
            });
        }
        debug!("morph pair with {} vertices", from.vertex_count());
        Ok(Self { from, to })
    }

    /// Mesh shown at transition 0.
    pub fn from(&self) -> &MeshBuffers {
        &self.from
    }

    /// Mesh shown at transition 1.
    pub fn to(&self) -> &MeshBuffers {
        &self.to
    }

    /// Vertex count shared by both meshes.
    pub fn vertex_count(&self) -> usize {
        self.from.vertex_count()
    }

    /// Splits the pair back into `(from, to)`.
    pub fn into_parts(self) -> (MeshBuffers, MeshBuffers) {
        (self.from, self.to)
    }
}

/// Transition uniform after `timer_ms` milliseconds: oscillates in `[0, 1]`,
/// starting halfway.
///
/// # Examples
/// ```
/// assert_eq!(meshgen::morph_state(0.0), 0.5);
/// ```
pub fn morph_state(timer_ms: f32) -> f32 {
    ((timer_ms * MORPH_FREQUENCY).sin() + 1.0) * 0.5
}
