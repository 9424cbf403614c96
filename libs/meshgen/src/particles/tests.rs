//! Billboard expansion tests.

use approx::assert_abs_diff_eq;

use super::*;
use crate::core::vec::vec3s_from_flat;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_point_expands_to_two_triangles() {
    let mesh = points_to_particle(&[Vec3::new(1.0, -2.0, 0.5)], &ParticleConfig::default());
    assert_eq!(mesh.vertices.len(), 18);
    assert_eq!(mesh.texcoords.as_ref().map(Vec::len), Some(12));
    assert!(mesh.normals.is_none());
    assert!(mesh.colors.is_none());
    assert!(mesh.validate().is_ok());
}

#[test]
fn corners_form_square_around_point() {
    let center = Vec3::new(1.0, -2.0, 0.5);
    let size = 0.4;
    let mesh = points_to_particle(&[center], &ParticleConfig::default().with_size(size));
    let vertices = vec3s_from_flat(&mesh.vertices);

    let mut corners: Vec<Vec3> = Vec::new();
    for vertex in &vertices {
        if !corners.iter().any(|c| c.abs_diff_eq(*vertex, 1e-6)) {
            corners.push(*vertex);
        }
    }
    assert_eq!(corners.len(), 4);

    for corner in &corners {
        let offset = *corner - center;
        assert_abs_diff_eq!(offset.x.abs(), size / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(offset.y.abs(), size / 2.0, epsilon = 1e-6);
        assert_eq!(offset.z, 0.0);
    }

    let centroid = corners.iter().copied().sum::<Vec3>() / 4.0;
    assert!(centroid.abs_diff_eq(center, 1e-6));
}

#[test]
fn triangle_order_matches_texcoords() {
    let mesh = points_to_particle(&[Vec3::ZERO], &ParticleConfig::default().with_size(2.0));
    let vertices = vec3s_from_flat(&mesh.vertices);
    let expected = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    assert_eq!(vertices, expected);
    assert_eq!(
        mesh.texcoords.unwrap_or_default(),
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0]
    );
}

#[test]
fn empty_input_gives_empty_mesh() {
    let mesh = points_to_particle(&[], &ParticleConfig::default());
    assert!(mesh.is_empty());
    assert_eq!(mesh.texcoords, Some(Vec::new()));
}

#[test]
fn zero_size_collapses_quads() {
    init_logging();
    let center = Vec3::new(3.0, 2.0, 1.0);
    let mesh = points_to_particle(&[center], &ParticleConfig::default().with_size(0.0));
    for vertex in vec3s_from_flat(&mesh.vertices) {
        assert_eq!(vertex, center);
    }
}

#[test]
fn many_points_scale_linearly() {
    let points = point_cube(5, 1.0, Vec3::ZERO);
    let mesh = points_to_particle(&points, &ParticleConfig::default());
    assert_eq!(mesh.vertex_count(), points.len() * 6);
    assert_eq!(mesh.triangle_count(), points.len() * 2);
}
