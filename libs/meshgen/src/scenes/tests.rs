use super::*;

#[test]
fn test_torus_scene_buffers() {
    let mesh = torus_scene();
    assert_eq!(mesh.vertices.len(), 200 * 20 * 18);
    assert_eq!(mesh.texcoords.as_ref().map(Vec::len), Some(200 * 20 * 12));
    assert_eq!(mesh.normals.as_ref().map(Vec::len), Some(200 * 20 * 18));
    assert!(mesh.colors.is_none());
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_bump_follows_scene_knot() {
    assert_eq!(torus_bump_position(0.0), Vec3::new(3.0, 0.0, 0.0));

    let mut phi = 0.0;
    for _ in 0..10 {
        phi += BUMP_PHI_STEP;
    }
    let expected = torus_curve(2.0, 5.0, phi);
    assert_eq!(torus_bump_position(phi), expected);
}

#[test]
fn test_particle_scene_pairs_equal_clouds() {
    let morph = particle_morph_scene().unwrap();
    assert_eq!(morph.vertex_count(), 360 * 6);
    assert!(morph.from().validate().is_ok());
    assert!(morph.to().validate().is_ok());
    assert_ne!(morph.from().vertices, morph.to().vertices);
    assert_eq!(morph.from().texcoords, morph.to().texcoords);
}
