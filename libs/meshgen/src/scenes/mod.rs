//! Geometry presets of the demo scenes.

use log::info;

use crate::config::{ParticleConfig, TorusConfig};
use crate::core::vec::Vec3;
use crate::error::GeometryResult;
use crate::mesh::MeshBuffers;
use crate::particles::{point_cube, point_sphere, points_to_particle, ParticleMorph};
use crate::torus::{torus_curve, TorusKnot};

/// Spline steps of the torus scene.
pub const TORUS_SEGMENTS: u32 = 200;
/// Radius the torus scene describes its tube with.
pub const TORUS_RADIUS: f32 = 0.35;
/// Knot windings `(p, q)` of the torus scene.
pub const TORUS_KNOT: (f32, f32) = (2.0, 5.0);
/// Curve parameter the bump highlight advances per frame.
pub const BUMP_PHI_STEP: f32 = 0.01;

/// Side resolution of the particle cube (360 points).
pub const CUBE_POINTS_PER_SIDE: u32 = 10;
/// Spiral sphere point count, matching the cube.
pub const SPHERE_POINTS: u32 = 360;
/// Spiral windings of the particle sphere.
pub const SPHERE_TURNS: f32 = 20.0;
/// Edge length of the cube and diameter of the sphere.
pub const PARTICLE_SHAPE_WIDTH: f32 = 4.0;

/// The torus knot tube of the torus scene, with texcoords and normals.
///
/// # Examples
/// ```
/// let mesh = meshgen::scenes::torus_scene();
/// assert_eq!(mesh.vertex_count(), 200 * 20 * 6);
/// assert!(mesh.normals.is_some());
/// ```
pub fn torus_scene() -> MeshBuffers {
    let (p, q) = TORUS_KNOT;
    let mesh = TorusKnot::new(TORUS_SEGMENTS, TORUS_RADIUS, p, q).generate(&TorusConfig::default());
    info!("torus scene: {} triangles", mesh.triangle_count());
    mesh
}

/// Bump highlight position after the scene advanced the curve to `phi`.
pub fn torus_bump_position(phi: f32) -> Vec3 {
    let (p, q) = TORUS_KNOT;
    torus_curve(p, q, phi)
}

/// Cube-to-sphere morph pair of the particle scene.
///
/// # Examples
/// ```
/// let morph = meshgen::scenes::particle_morph_scene().unwrap();
/// assert_eq!(morph.vertex_count(), 360 * 6);
/// ```
pub fn particle_morph_scene() -> GeometryResult<ParticleMorph> {
    let config = ParticleConfig::default();
    let cube = point_cube(CUBE_POINTS_PER_SIDE, PARTICLE_SHAPE_WIDTH, Vec3::ZERO);
    let sphere = point_sphere(SPHERE_POINTS, SPHERE_TURNS, PARTICLE_SHAPE_WIDTH, Vec3::ZERO);

    let morph = ParticleMorph::new(
        points_to_particle(&cube, &config),
        points_to_particle(&sphere, &config),
    )?;
    info!("particle scene: {} particles", cube.len());
    Ok(morph)
}

#[cfg(test)]
mod tests;
