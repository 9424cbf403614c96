use super::*;

#[test]
fn new_mesh_is_empty_and_valid() {
    let mesh = MeshBuffers::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
    assert!(mesh.validate().is_ok());
}

#[test]
fn optional_pushes_are_skipped_without_buffer() {
    let mut mesh = MeshBuffers::new();
    mesh.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
    mesh.push_texcoords(Vec2::ZERO, Vec2::X, Vec2::Y);
    mesh.push_colors(Vec4::ONE, Vec4::ONE, Vec4::ONE);
    assert!(mesh.texcoords.is_none());
    assert!(mesh.colors.is_none());
    assert!(mesh.validate().is_ok());
}

#[test]
fn full_attribute_triangle_validates() {
    let mut mesh = MeshBuffers::with_capacity(
        3,
        &[
            VertexAttribute::TexCoord,
            VertexAttribute::Normal,
            VertexAttribute::Color,
        ],
    );
    mesh.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
    mesh.push_texcoords(Vec2::ZERO, Vec2::X, Vec2::Y);
    mesh.push_normals(Vec3::Z, Vec3::Z, Vec3::Z);
    mesh.push_colors(Vec4::ONE, Vec4::ONE, Vec4::ONE);

    assert_eq!(mesh.attributes().len(), 4);
    assert_eq!(mesh.texcoords.as_ref().map(Vec::len), Some(6));
    assert_eq!(mesh.colors.as_ref().map(Vec::len), Some(12));
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_reports_mismatched_attribute() {
    let mut mesh = MeshBuffers::with_capacity(3, &[VertexAttribute::Normal]);
    mesh.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);

    assert_eq!(
        mesh.validate(),
        Err(GeometryError::AttributeLength {
            attribute: VertexAttribute::Normal,
            expected: 9,
            actual: 0,
        })
    );
}

#[test]
fn validate_rejects_partial_triangles() {
    let mut mesh = MeshBuffers::new();
    mesh.vertices = vec![0.0; 6];
    assert_eq!(mesh.validate(), Err(GeometryError::NotTriangleList(2)));

    mesh.vertices = vec![0.0; 7];
    assert_eq!(mesh.validate(), Err(GeometryError::RaggedPositions(7)));
}

#[test]
fn attribute_components_match_layout() {
    assert_eq!(VertexAttribute::Position.components(), 3);
    assert_eq!(VertexAttribute::TexCoord.components(), 2);
    assert_eq!(VertexAttribute::Normal.components(), 3);
    assert_eq!(VertexAttribute::Color.to_string(), "color");
}
