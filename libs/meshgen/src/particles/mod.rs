//! Particle clouds.
//!
//! Samplers turn a shape description into a list of points; each point is
//! then splatted into a billboard quad by [`points_to_particle`].
//!
//! ```
//! use meshgen::{point_sphere, points_to_particle, ParticleConfig, Vec3};
//!
//! let points = point_sphere(360, 20.0, 4.0, Vec3::ZERO);
//! let mesh = points_to_particle(&points, &ParticleConfig::default());
//! assert_eq!(mesh.vertex_count(), 360 * 6);
//! ```

pub mod cube;
pub mod morph;
pub mod sphere;
pub mod svg;

pub use cube::point_cube;
pub use morph::{morph_state, ParticleMorph};
pub use sphere::point_sphere;
pub use svg::{parse_path, point_svg, PathSamples};

use log::{debug, warn};

use crate::config::ParticleConfig;
use crate::core::vec::{Vec2, Vec3};
use crate::mesh::{MeshBuffers, VertexAttribute};

/// Quad texture coordinates: top-left, top-right, bottom-left, bottom-right.
const QUAD_TEXCOORDS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Expands every point into a camera-facing quad of edge `particle_size`.
///
/// Each point yields two triangles `(tl, tr, bl)` and `(bl, tr, br)` in the
/// xy plane of the point, with texcoords `(0,0) (1,0) (0,1) (1,1)`.
///
/// # Examples
/// ```
/// use meshgen::{points_to_particle, ParticleConfig, Vec3};
///
/// let mesh = points_to_particle(&[Vec3::new(1.0, 2.0, 3.0)], &ParticleConfig::default());
/// assert_eq!(mesh.vertices.len(), 18);
/// assert_eq!(mesh.texcoords.map(|t| t.len()), Some(12));
/// ```
pub fn points_to_particle(points: &[Vec3], config: &ParticleConfig) -> MeshBuffers {
    let mut mesh = MeshBuffers::with_capacity(points.len() * 6, &[VertexAttribute::TexCoord]);
    let half = config.particle_size * 0.5;
    if half == 0.0 && !points.is_empty() {
        warn!("particle size is zero, every quad collapses onto its point");
    }

    let [tex_tl, tex_tr, tex_bl, tex_br] = QUAD_TEXCOORDS;
    for &point in points {
        let tl = point + Vec3::new(-half, -half, 0.0);
        let tr = point + Vec3::new(half, -half, 0.0);
        let bl = point + Vec3::new(-half, half, 0.0);
        let br = point + Vec3::new(half, half, 0.0);

        mesh.push_triangle(tl, tr, bl);
        mesh.push_triangle(bl, tr, br);

        mesh.push_texcoords(tex_tl, tex_tr, tex_bl);
        mesh.push_texcoords(tex_bl, tex_tr, tex_br);
    }

    debug!(
        "{} particles -> {} vertices",
        points.len(),
        mesh.vertex_count()
    );
    mesh
}

#[cfg(test)]
mod tests;
