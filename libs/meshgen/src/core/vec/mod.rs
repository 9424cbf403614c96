//! Thin wrapper around `glam`'s `f32` vectors shared across generator modules.
//!
//! Geometry stays in vector form until it reaches a buffer; the `push_*`
//! helpers below are the only place where vectors become flat floats.

pub use glam::{Vec2, Vec3, Vec4};

use config::constants::FRAME_HELPER;

/// Returns the fixed reference axis used to orient Frenet frames.
///
/// # Examples
/// ```
/// use meshgen::core::vec::frame_helper;
/// assert_eq!(frame_helper(), meshgen::Vec3::new(1.0, 1.0, 0.0));
/// ```
pub fn frame_helper() -> Vec3 {
    Vec3::from_array(FRAME_HELPER)
}

/// Appends three `Vec3` values as nine consecutive floats.
///
/// # Examples
/// ```
/// use meshgen::core::vec::push_vec3_triplet;
/// use meshgen::Vec3;
///
/// let mut out = Vec::new();
/// push_vec3_triplet(&mut out, Vec3::X, Vec3::Y, Vec3::Z);
/// assert_eq!(out, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn push_vec3_triplet(out: &mut Vec<f32>, a: Vec3, b: Vec3, c: Vec3) {
    out.extend_from_slice(&a.to_array());
    out.extend_from_slice(&b.to_array());
    out.extend_from_slice(&c.to_array());
}

/// Appends three `Vec2` values as six consecutive floats.
pub fn push_vec2_triplet(out: &mut Vec<f32>, a: Vec2, b: Vec2, c: Vec2) {
    out.extend_from_slice(&a.to_array());
    out.extend_from_slice(&b.to_array());
    out.extend_from_slice(&c.to_array());
}

/// Appends three `Vec4` values as twelve consecutive floats.
pub fn push_vec4_triplet(out: &mut Vec<f32>, a: Vec4, b: Vec4, c: Vec4) {
    out.extend_from_slice(&a.to_array());
    out.extend_from_slice(&b.to_array());
    out.extend_from_slice(&c.to_array());
}

/// Reads a flat xyz buffer back into vectors, ignoring a trailing partial
/// triple.
///
/// # Examples
/// ```
/// use meshgen::core::vec::vec3s_from_flat;
/// let points = vec3s_from_flat(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(points, vec![meshgen::Vec3::new(1.0, 2.0, 3.0)]);
/// ```
pub fn vec3s_from_flat(values: &[f32]) -> Vec<Vec3> {
    values.chunks_exact(3).map(Vec3::from_slice).collect()
}
