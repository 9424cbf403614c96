//! Spiral sphere point sampler.

use std::f32::consts::{PI, TAU};

use crate::core::vec::Vec3;

/// Distributes `total_points` along a spiral running pole to pole on a sphere
/// of diameter `width`, winding `num_turns` times around the z axis.
///
/// The sphere is always centred on the world origin: `_origin` is accepted for
/// signature parity with [`point_cube`](super::point_cube) but not applied.
///
/// # Examples
/// ```
/// use meshgen::{point_sphere, Vec3};
///
/// let points = point_sphere(360, 20.0, 4.0, Vec3::ZERO);
/// assert_eq!(points.len(), 360);
/// assert!(points.iter().all(|p| (p.length() - 2.0).abs() < 1e-4));
/// ```
pub fn point_sphere(total_points: u32, num_turns: f32, width: f32, _origin: Vec3) -> Vec<Vec3> {
    let half = width * 0.5;

    (0..total_points)
        .map(|i| {
            let progress = i as f32 / total_points as f32 - 1.0;

            let z_progress = progress * PI;
            let (sin_z, cos_z) = z_progress.sin_cos();
            let radius = sin_z * half;

            let (sin_i, cos_i) = (progress * num_turns * TAU).sin_cos();
            Vec3::new(cos_i * radius, sin_i * radius, cos_z * half)
        })
        .collect()
}
