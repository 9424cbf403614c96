//! Torus knot tube tests.

use approx::assert_abs_diff_eq;

use super::*;
use crate::core::vec::vec3s_from_flat;

const KNOTS: [(f32, f32); 3] = [(2.0, 5.0), (3.0, 7.0), (1.0, 1.0)];

#[test]
fn test_curve_starts_on_outer_equator() {
    for (p, q) in KNOTS {
        assert_eq!(torus_curve(p, q, 0.0), Vec3::new(3.0, 0.0, 0.0));
    }
}

#[test]
fn test_curve_is_periodic() {
    for (p, q) in KNOTS {
        for step in 0..16 {
            let phi = step as f32 * 0.37;
            let a = torus_curve(p, q, phi);
            let b = torus_curve(p, q, phi + TAU);
            assert!(a.abs_diff_eq(b, 1e-3), "({p}, {q}) at {phi}: {a} vs {b}");
        }
    }
}

#[test]
fn test_curve_stays_on_torus_surface() {
    // distance from the centre circle of radius 2 is always 1
    for step in 0..50 {
        let point = torus_curve(2.0, 5.0, step as f32 * 0.1);
        let ring = Vec3::new(point.x, point.y, 0.0).normalize() * 2.0;
        assert_abs_diff_eq!(point.distance(ring), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn test_frames_are_orthonormal() {
    for i_phi in 0..200 {
        let frame = FrenetFrame::on_knot(200, i_phi, 2.0, 5.0);
        if frame.tangent.cross(frame_helper()).length() < 1e-2 {
            continue;
        }
        assert_abs_diff_eq!(frame.tangent.length(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.normal.length(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.binormal.length(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.tangent.dot(frame.normal), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.tangent.dot(frame.binormal), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.normal.dot(frame.binormal), 0.0, epsilon = 1e-4);
    }
}

#[test]
fn test_tangent_points_backwards_along_curve() {
    let frame = FrenetFrame::on_knot(100, 10, 2.0, 5.0);
    let phi = spline_angle(100, 10);
    let forward = torus_curve(2.0, 5.0, phi + 0.001) - frame.point;
    assert!(frame.tangent.dot(forward) < 0.0);
}

#[test]
fn test_frame_point_is_on_curve() {
    let frame = FrenetFrame::on_knot(8, 3, 3.0, 7.0);
    let expected = torus_curve(3.0, 7.0, 3.0 / 8.0 * TAU);
    assert!(frame.point.abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_vertex_count_law() {
    for (segments, ring_segments) in [(1, 1), (4, 3), (200, 20), (17, 9)] {
        let config = TorusConfig::default()
            .with_ring(ring_segments, 0.35)
            .with_colors(true);
        let knot = TorusKnot::new(segments, 0.35, 2.0, 5.0);
        let mesh = knot.generate(&config);

        let quads = (segments * ring_segments) as usize;
        assert_eq!(mesh.vertices.len(), quads * 2 * 3 * 3);
        assert_eq!(mesh.vertex_count(), knot.vertex_count(&config));
        assert_eq!(mesh.texcoords.as_ref().map(Vec::len), Some(quads * 12));
        assert_eq!(mesh.normals.as_ref().map(Vec::len), Some(quads * 18));
        assert_eq!(mesh.colors.as_ref().map(Vec::len), Some(quads * 24));
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn test_attributes_follow_config() {
    let knot = TorusKnot::new(4, 0.35, 2.0, 5.0);
    let bare = knot.generate(
        &TorusConfig::default()
            .with_texcoords(false)
            .with_normals(false),
    );
    assert!(bare.texcoords.is_none());
    assert!(bare.normals.is_none());
    assert!(bare.colors.is_none());
    assert_eq!(bare.vertices.len(), 4 * 20 * 18);
}

#[test]
fn test_degenerate_inputs_give_empty_mesh() {
    let config = TorusConfig::default();
    let mesh = TorusKnot::new(0, 0.35, 2.0, 5.0).generate(&config);
    assert!(mesh.is_empty());
    assert!(mesh.validate().is_ok());

    let mesh = TorusKnot::new(10, 0.35, 2.0, 5.0).generate(&config.with_ring(0, 0.35));
    assert!(mesh.is_empty());
}

#[test]
fn test_first_quad_layout() {
    let config = TorusConfig::default().with_ring(4, 0.5);
    let mesh = TorusKnot::new(10, 0.35, 2.0, 5.0).generate(&config);
    let vertices = vec3s_from_flat(&mesh.vertices);

    let f0 = FrenetFrame::on_knot(10, 0, 2.0, 5.0);
    let f1 = FrenetFrame::on_knot(10, 1, 2.0, 5.0);
    let quarter = TAU / 4.0;
    let seg1a = f0.point + f0.ring_direction(0.0) * 0.5;
    let seg2a = f1.point + f1.ring_direction(0.0) * 0.5;
    let seg1b = f0.point + f0.ring_direction(quarter) * 0.5;
    let seg2b = f1.point + f1.ring_direction(quarter) * 0.5;

    let expected = [seg1a, seg2a, seg1b, seg1b, seg2a, seg2b];
    for (actual, expected) in vertices.iter().zip(expected) {
        assert!(actual.abs_diff_eq(expected, 1e-6));
    }
}

#[test]
fn test_quad_triangles_share_winding() {
    let mesh = TorusKnot::new(200, 0.35, 2.0, 5.0).generate(&TorusConfig::default());
    let vertices = vec3s_from_flat(&mesh.vertices[..18]);
    let normals = vec3s_from_flat(&mesh.normals.unwrap_or_default()[..18]);

    let facing: Vec<f32> = vertices
        .chunks_exact(3)
        .zip(normals.chunks_exact(3))
        .map(|(tri, ring)| {
            let face = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            face.dot(ring[0] + ring[1] + ring[2])
        })
        .collect();
    assert_eq!(facing.len(), 2);
    assert!(facing[0] * facing[1] > 0.0, "{facing:?}");
}

#[test]
fn test_ring_points_sit_at_ring_scale() {
    let config = TorusConfig::default().with_ring(6, 0.25);
    let mesh = TorusKnot::new(5, 0.35, 2.0, 5.0).generate(&config);
    let first = Vec3::from_slice(&mesh.vertices[..3]);
    let frame = FrenetFrame::on_knot(5, 0, 2.0, 5.0);
    assert_abs_diff_eq!(first.distance(frame.point), 0.25, epsilon = 1e-5);
}

#[test]
fn test_tube_closes_on_first_frame() {
    let first = FrenetFrame::on_knot(50, 0, 2.0, 5.0);
    let last = FrenetFrame::on_knot(50, 50, 2.0, 5.0);
    assert!(first.point.abs_diff_eq(last.point, 1e-4));
    assert!(first.normal.abs_diff_eq(last.normal, 1e-3));
}

#[test]
fn test_texcoords_tile_every_eight_segments() {
    let ring_segments = 2;
    let config = TorusConfig::default().with_ring(ring_segments, 0.35);
    let mesh = TorusKnot::new(10, 0.35, 2.0, 5.0).generate(&config);
    let texcoords = mesh.texcoords.unwrap_or_default();
    let band_stride = ring_segments as usize * 12;

    // first vertex of each band is (u=0, v1)
    let v_of_band = |band: usize| texcoords[band * band_stride + 1];
    assert_abs_diff_eq!(v_of_band(0), 0.0);
    assert_abs_diff_eq!(v_of_band(7), 0.875);
    assert_abs_diff_eq!(v_of_band(8), 0.0);
    assert_abs_diff_eq!(v_of_band(9), 0.125);

    // second vertex belongs to the next frame: v2 = v1 + 0.125
    assert_abs_diff_eq!(texcoords[7 * band_stride + 3], 1.0);

    // third vertex sits at the next ring angle: u = 1 / ring_segments
    assert_abs_diff_eq!(texcoords[4], 0.5);
}

#[test]
fn test_normals_are_unit_ring_directions() {
    let mesh = TorusKnot::new(20, 0.35, 2.0, 5.0).generate(&TorusConfig::default());
    for normal in vec3s_from_flat(mesh.normals.as_deref().unwrap_or_default()) {
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn test_colors_follow_ring_angle() {
    let config = TorusConfig::default().with_ring(4, 0.35).with_colors(true);
    let mesh = TorusKnot::new(3, 0.35, 2.0, 5.0).generate(&config);
    let colors = mesh.colors.unwrap_or_default();

    // seg1a at gamma = 0 -> (0, 1, 0, 1)
    assert_eq!(&colors[..4], &[0.0, 1.0, 0.0, 1.0]);
    // seg1b at gamma = pi/2 -> (1, ~0, 0, 1)
    assert_abs_diff_eq!(colors[8], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(colors[9], 0.0, epsilon = 1e-6);
    assert_eq!(colors[11], 1.0);
}

#[test]
fn test_radius_is_recorded_but_not_applied() {
    let config = TorusConfig::default();
    let thin = TorusKnot::new(6, 0.1, 2.0, 5.0);
    let thick = TorusKnot::new(6, 3.0, 2.0, 5.0);
    assert_eq!(thick.radius(), 3.0);
    assert_eq!(thin.generate(&config), thick.generate(&config));
}

#[test]
fn test_polyline_closes() {
    let line = knot_polyline(64, 2.0, 5.0);
    let points = vec3s_from_flat(&line);
    assert_eq!(points.len(), 65);
    assert!(points[0].abs_diff_eq(points[64], 1e-4));
}
