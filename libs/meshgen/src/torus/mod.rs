//! Torus-knot tube generator.
//!
//! A circular cross-section is swept along the closed `(p, q)` torus knot
//! curve. Each spline step contributes one band of quads between two
//! consecutive Frenet frames; every quad is split into two triangles.

use std::f32::consts::TAU;

use config::constants::{FRENET_EPSILON, TEXCOORD_TILE_SEGMENTS};
use log::{debug, warn};

use crate::config::TorusConfig;
use crate::core::vec::{frame_helper, Vec2, Vec3, Vec4};
use crate::mesh::MeshBuffers;

/// Point on the `(p, q)` torus knot at parameter `phi`.
///
/// The curve winds `p` times around the z axis and `q` times through the
/// hole, on a torus with centre radius 2 and tube radius 1.
///
/// # Examples
/// ```
/// use meshgen::{torus_curve, Vec3};
/// assert_eq!(torus_curve(2.0, 5.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
/// ```
pub fn torus_curve(p: f32, q: f32, phi: f32) -> Vec3 {
    let r = (q * phi).cos() + 2.0;
    Vec3::new(r * (p * phi).cos(), r * (p * phi).sin(), (q * phi).sin())
}

/// Direction on the circle spanned by `x_axis` and `y_axis` at angle `gamma`.
///
/// # Examples
/// ```
/// use meshgen::{circle_vector, Vec3};
/// let v = circle_vector(Vec3::X, Vec3::Y, std::f32::consts::FRAC_PI_2);
/// assert!(v.abs_diff_eq(Vec3::Y, 1e-6));
/// ```
pub fn circle_vector(x_axis: Vec3, y_axis: Vec3, gamma: f32) -> Vec3 {
    let (sin, cos) = gamma.sin_cos();
    x_axis * cos + y_axis * sin
}

/// Flat xyz polyline of the knot itself, `segments + 1` points closing the
/// loop, for line-mode debug drawing.
///
/// # Examples
/// ```
/// let line = meshgen::knot_polyline(100, 2.0, 5.0);
/// assert_eq!(line.len(), 101 * 3);
/// assert!(meshgen::knot_polyline(0, 2.0, 5.0).is_empty());
/// ```
pub fn knot_polyline(segments: u32, p: f32, q: f32) -> Vec<f32> {
    if segments == 0 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((segments as usize + 1) * 3);
    for i_phi in 0..=segments {
        let phi = spline_angle(segments, i_phi);
        vertices.extend_from_slice(&torus_curve(p, q, phi).to_array());
    }
    vertices
}

fn spline_angle(segments: u32, i_phi: u32) -> f32 {
    (i_phi as f32 / segments as f32) * TAU
}

// =============================================================================
// FRENET FRAME
// =============================================================================

/// Local coordinate frame anchored on the knot.
///
/// `tangent`, `normal` and `binormal` are mutually orthogonal unit vectors,
/// except where the tangent is parallel to the fixed helper axis, in which
/// case `normal` and `binormal` collapse to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetFrame {
    /// Curve point the frame is anchored at.
    pub point: Vec3,
    /// Unit tangent, oriented "before minus after".
    pub tangent: Vec3,
    /// `normalize(tangent × helper)`.
    pub normal: Vec3,
    /// `normalize(tangent × normal)`.
    pub binormal: Vec3,
}

impl FrenetFrame {
    /// Builds the frame at spline step `i_phi` of `segments` on the `(p, q)`
    /// knot.
    ///
    /// # Examples
    /// ```
    /// use meshgen::FrenetFrame;
    ///
    /// let frame = FrenetFrame::on_knot(200, 17, 2.0, 5.0);
    /// assert!(frame.tangent.dot(frame.normal).abs() < 1e-5);
    /// assert!((frame.binormal.length() - 1.0).abs() < 1e-5);
    /// ```
    pub fn on_knot(segments: u32, i_phi: u32, p: f32, q: f32) -> Self {
        let phi = spline_angle(segments, i_phi);
        let point = torus_curve(p, q, phi);

        let before = torus_curve(p, q, phi - FRENET_EPSILON);
        let after = torus_curve(p, q, phi + FRENET_EPSILON);
        let tangent = (before - after).normalize_or_zero();

        let normal = tangent.cross(frame_helper()).normalize_or_zero();
        let binormal = tangent.cross(normal).normalize_or_zero();

        Self {
            point,
            tangent,
            normal,
            binormal,
        }
    }

    /// Unit direction in the frame's normal plane at ring angle `gamma`.
    pub fn ring_direction(&self, gamma: f32) -> Vec3 {
        circle_vector(self.normal, self.binormal, gamma)
    }
}

// =============================================================================
// TORUS KNOT TUBE
// =============================================================================

/// Parameters of one torus-knot tube.
///
/// # Examples
/// ```
/// use meshgen::{TorusConfig, TorusKnot};
///
/// let knot = TorusKnot::new(200, 0.35, 2.0, 5.0);
/// let mesh = knot.generate(&TorusConfig::default());
/// assert_eq!(mesh.vertices.len(), 200 * 20 * 2 * 3 * 3);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusKnot {
    segments: u32,
    radius: f32,
    p: f32,
    q: f32,
}

impl TorusKnot {
    /// Describes a tube of `segments` spline steps along the `(p, q)` knot.
    ///
    /// `radius` is carried for callers but does not change the sweep; the
    /// tube thickness comes from [`TorusConfig::ring_scale`].
    pub fn new(segments: u32, radius: f32, p: f32, q: f32) -> Self {
        Self {
            segments,
            radius,
            p,
            q,
        }
    }

    /// Spline steps along the knot.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Radius the tube was described with.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Windings around the z axis.
    pub fn p(&self) -> f32 {
        self.p
    }

    /// Windings through the torus hole.
    pub fn q(&self) -> f32 {
        self.q
    }

    /// Point on this knot at parameter `phi`.
    pub fn curve_point(&self, phi: f32) -> Vec3 {
        torus_curve(self.p, self.q, phi)
    }

    /// Vertex count `generate` produces: six per ring quad.
    ///
    /// # Examples
    /// ```text
    /// segments=10, ring_segments=4 => 10 * 4 * 6 = 240
    /// ```
    pub fn vertex_count(&self, config: &TorusConfig) -> usize {
        self.segments as usize * config.ring_segments as usize * 6
    }

    /// Sweeps the ring along the knot and returns the expanded triangle list.
    ///
    /// Band `i_phi` spans frames `i_phi` and `i_phi + 1`; the last band ends on
    /// the frame that coincides with frame 0, closing the tube. Zero
    /// `segments` or `ring_segments` yield an empty mesh.
    pub fn generate(&self, config: &TorusConfig) -> MeshBuffers {
        let mut mesh = MeshBuffers::with_capacity(self.vertex_count(config), &config.attributes());
        let ring_segments = config.ring_segments;
        if self.segments == 0 || ring_segments == 0 {
            warn!(
                "torus knot with {} segments and {} ring segments is empty",
                self.segments, ring_segments
            );
            return mesh;
        }

        let v_step = 1.0 / TEXCOORD_TILE_SEGMENTS as f32;
        let mut current = FrenetFrame::on_knot(self.segments, 0, self.p, self.q);

        for i_phi in 0..self.segments {
            let next = FrenetFrame::on_knot(self.segments, i_phi + 1, self.p, self.q);
            let v1 = (i_phi % TEXCOORD_TILE_SEGMENTS) as f32 * v_step;
            let v2 = v1 + v_step;

            for i in 0..ring_segments {
                let u_a = i as f32 / ring_segments as f32;
                let u_b = (i + 1) as f32 / ring_segments as f32;
                let gamma_a = u_a * TAU;
                let gamma_b = u_b * TAU;

                let dir1a = current.ring_direction(gamma_a);
                let dir2a = next.ring_direction(gamma_a);
                let dir1b = current.ring_direction(gamma_b);
                let dir2b = next.ring_direction(gamma_b);

                let seg1a = current.point + dir1a * config.ring_scale;
                let seg2a = next.point + dir2a * config.ring_scale;
                let seg1b = current.point + dir1b * config.ring_scale;
                let seg2b = next.point + dir2b * config.ring_scale;

                mesh.push_triangle(seg1a, seg2a, seg1b);
                mesh.push_triangle(seg1b, seg2a, seg2b);

                let tex1a = Vec2::new(u_a, v1);
                let tex2a = Vec2::new(u_a, v2);
                let tex1b = Vec2::new(u_b, v1);
                let tex2b = Vec2::new(u_b, v2);
                mesh.push_texcoords(tex1a, tex2a, tex1b);
                mesh.push_texcoords(tex1b, tex2a, tex2b);

                mesh.push_normals(dir1a, dir2a, dir1b);
                mesh.push_normals(dir1b, dir2a, dir2b);

                let color_a = ring_color(gamma_a);
                let color_b = ring_color(gamma_b);
                mesh.push_colors(color_a, color_a, color_b);
                mesh.push_colors(color_b, color_a, color_b);
            }

            current = next;
        }

        debug!(
            "torus knot ({}, {}): {} segments x {} ring segments -> {} vertices",
            self.p,
            self.q,
            self.segments,
            ring_segments,
            mesh.vertex_count()
        );
        mesh
    }
}

/// Debug coloring of a ring angle.
fn ring_color(gamma: f32) -> Vec4 {
    let (sin, cos) = gamma.sin_cos();
    Vec4::new(sin, cos, 0.0, 1.0)
}

#[cfg(test)]
mod tests;
