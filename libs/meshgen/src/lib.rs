//! Procedural geometry for the torus and particle demo scenes.
//!
//! Every generator in this crate is a pure function from a few parameters to
//! freshly allocated buffers. Geometry is built with `glam` vector types and
//! only flattened into [`MeshBuffers`] at the boundary with the renderer.
//!
//! ```
//! use meshgen::{point_cube, points_to_particle, ParticleConfig, TorusConfig, TorusKnot};
//!
//! let tube = TorusKnot::new(16, 0.35, 2.0, 5.0).generate(&TorusConfig::default());
//! assert_eq!(tube.vertices.len(), 16 * 20 * 18);
//!
//! let cloud = point_cube(4, 2.0, meshgen::Vec3::ZERO);
//! let particles = points_to_particle(&cloud, &ParticleConfig::default());
//! assert_eq!(particles.vertex_count(), cloud.len() * 6);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod mesh;
pub mod particles;
pub mod scenes;
pub mod torus;

pub use crate::config::{ParticleConfig, TorusConfig};
pub use crate::core::vec::{Vec2, Vec3, Vec4};
pub use error::{GeometryError, GeometryResult, PathError};
pub use mesh::{MeshBuffers, VertexAttribute};
pub use particles::{
    morph_state, point_cube, point_sphere, point_svg, points_to_particle, ParticleMorph,
};
pub use torus::{circle_vector, knot_polyline, torus_curve, FrenetFrame, TorusKnot};
