//! Square-tube point sampler.

use crate::core::vec::Vec3;

/// Samples the four vertical sides of a square tube of edge `width` centred
/// at `origin`.
///
/// For every step `i` in `1..points_per_side` along a side and every depth
/// level `z` in `0..points_per_side`, one point is emitted per side in the
/// order top, right, bottom, left:
///
/// ```text
/// 41111
/// 4   2
/// 4   2
/// 4   2
/// 33332
/// ```
///
/// Yields `4 * (points_per_side - 1) * points_per_side` points; fewer than two
/// points per side yield none.
///
/// # Examples
/// ```
/// use meshgen::{point_cube, Vec3};
/// assert_eq!(point_cube(10, 4.0, Vec3::ZERO).len(), 360);
/// assert!(point_cube(1, 4.0, Vec3::ZERO).is_empty());
/// ```
pub fn point_cube(points_per_side: u32, width: f32, origin: Vec3) -> Vec<Vec3> {
    let count = 4 * points_per_side.saturating_sub(1) as usize * points_per_side as usize;
    let mut points = Vec::with_capacity(count);
    let radius = width * 0.5;

    for i in 1..points_per_side {
        let progress = i as f32 / (points_per_side - 1) as f32;
        let along = (progress - 0.5) * width;

        for z in 0..points_per_side {
            let z_level = origin.z + (z as f32 / points_per_side as f32 - 0.5) * width;

            // top
            points.push(Vec3::new(origin.x + along, origin.y - radius, z_level));
            // right
            points.push(Vec3::new(origin.x + radius, origin.y + along, z_level));
            // bottom
            points.push(Vec3::new(origin.x - along, origin.y + radius, z_level));
            // left
            points.push(Vec3::new(origin.x - radius, origin.y - along, z_level));
        }
    }

    points
}
