//! # Mesh Module
//!
//! Flat, non-indexed triangle-list buffers handed to the renderer.
//!
//! ## Memory Layout
//!
//! Buffers are laid out per attribute, not interleaved per vertex:
//!
//! - `vertices`: [x0, y0, z0, x1, y1, z1, ...] - 3 floats per vertex
//! - `texcoords`: Optional [u0, v0, ...] - 2 floats per vertex
//! - `normals`: Optional [nx0, ny0, nz0, ...] - 3 floats per vertex
//! - `colors`: Optional [r0, g0, b0, a0, ...] - 4 floats per vertex
//!
//! Every three consecutive vertices form one triangle; there is no index
//! buffer.
//!
//! ## Example
//!
//! ```rust
//! use meshgen::{MeshBuffers, Vec3};
//!
//! let mut mesh = MeshBuffers::new();
//! mesh.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.triangle_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

use std::fmt;

use crate::core::vec::{push_vec2_triplet, push_vec3_triplet, push_vec4_triplet, Vec2, Vec3, Vec4};
use crate::error::{GeometryError, GeometryResult};

// =============================================================================
// VERTEX ATTRIBUTES
// =============================================================================

/// Semantic role of a vertex buffer, as bound by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    /// `vec3` position
    Position,
    /// `vec2` texture coordinate
    TexCoord,
    /// `vec3` normal
    Normal,
    /// `vec4` RGBA color
    Color,
}

impl VertexAttribute {
    /// Number of floats one vertex occupies in this attribute's buffer.
    ///
    /// # Examples
    /// ```
    /// use meshgen::VertexAttribute;
    /// assert_eq!(VertexAttribute::Color.components(), 4);
    /// ```
    pub const fn components(self) -> usize {
        match self {
            VertexAttribute::Position | VertexAttribute::Normal => 3,
            VertexAttribute::TexCoord => 2,
            VertexAttribute::Color => 4,
        }
    }

    /// Lowercase semantic name of the attribute.
    pub const fn name(self) -> &'static str {
        match self {
            VertexAttribute::Position => "position",
            VertexAttribute::TexCoord => "texcoord",
            VertexAttribute::Normal => "normal",
            VertexAttribute::Color => "color",
        }
    }
}

impl fmt::Display for VertexAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// MESH BUFFERS
// =============================================================================

/// Non-indexed triangle list with optional per-vertex attributes.
///
/// All present buffers describe the same number of vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions: [x0, y0, z0, x1, y1, z1, ...]
    pub vertices: Vec<f32>,

    /// Optional texture coordinates: [u0, v0, u1, v1, ...]
    pub texcoords: Option<Vec<f32>>,

    /// Optional vertex normals: [nx0, ny0, nz0, ...]
    pub normals: Option<Vec<f32>>,

    /// Optional vertex colors: [r0, g0, b0, a0, ...]
    pub colors: Option<Vec<f32>>,
}

impl MeshBuffers {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty position-only mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated buffers for the requested attributes.
    ///
    /// Positions are always allocated; `attributes` selects which optional
    /// buffers exist (their presence matters even when empty).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use meshgen::{MeshBuffers, VertexAttribute};
    ///
    /// let mesh = MeshBuffers::with_capacity(6, &[VertexAttribute::TexCoord]);
    /// assert!(mesh.texcoords.is_some());
    /// assert!(mesh.normals.is_none());
    /// ```
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, attributes: &[VertexAttribute]) -> Self {
        let buffer = |attribute: VertexAttribute| {
            attributes
                .contains(&attribute)
                .then(|| Vec::with_capacity(vertex_capacity * attribute.components()))
        };

        Self {
            vertices: Vec::with_capacity(vertex_capacity * 3),
            texcoords: buffer(VertexAttribute::TexCoord),
            normals: buffer(VertexAttribute::Normal),
            colors: buffer(VertexAttribute::Color),
        }
    }

    // =========================================================================
    // TRIANGLE OPERATIONS
    // =========================================================================

    /// Append one triangle's positions.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        push_vec3_triplet(&mut self.vertices, a, b, c);
    }

    /// Append one triangle's texture coordinates, if the mesh carries them.
    pub fn push_texcoords(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        if let Some(texcoords) = self.texcoords.as_mut() {
            push_vec2_triplet(texcoords, a, b, c);
        }
    }

    /// Append one triangle's normals, if the mesh carries them.
    pub fn push_normals(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        if let Some(normals) = self.normals.as_mut() {
            push_vec3_triplet(normals, a, b, c);
        }
    }

    /// Append one triangle's colors, if the mesh carries them.
    pub fn push_colors(&mut self, a: Vec4, b: Vec4, c: Vec4) {
        if let Some(colors) = self.colors.as_mut() {
            push_vec4_triplet(colors, a, b, c);
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of vertices described by the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles (`vertex_count / 3`), as passed to a draw call.
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Returns true if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the present buffers keyed by their semantic role, positions
    /// first.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use meshgen::{MeshBuffers, VertexAttribute};
    ///
    /// let mesh = MeshBuffers::with_capacity(0, &[VertexAttribute::Normal]);
    /// let roles: Vec<_> = mesh.attributes().into_iter().map(|(role, _)| role).collect();
    /// assert_eq!(roles, vec![VertexAttribute::Position, VertexAttribute::Normal]);
    /// ```
    pub fn attributes(&self) -> Vec<(VertexAttribute, &[f32])> {
        let mut attributes = vec![(VertexAttribute::Position, self.vertices.as_slice())];
        let optional = [
            (VertexAttribute::TexCoord, &self.texcoords),
            (VertexAttribute::Normal, &self.normals),
            (VertexAttribute::Color, &self.colors),
        ];
        for (attribute, buffer) in optional {
            if let Some(buffer) = buffer {
                attributes.push((attribute, buffer.as_slice()));
            }
        }
        attributes
    }

    /// Checks that every buffer describes the same whole-triangle vertex
    /// count.
    ///
    /// # Errors
    /// - [`GeometryError::RaggedPositions`] when positions are not xyz triples
    /// - [`GeometryError::NotTriangleList`] when vertices don't form triangles
    /// - [`GeometryError::AttributeLength`] when an optional buffer disagrees
    pub fn validate(&self) -> GeometryResult<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(GeometryError::RaggedPositions(self.vertices.len()));
        }
        let vertex_count = self.vertex_count();
        if vertex_count % 3 != 0 {
            return Err(GeometryError::NotTriangleList(vertex_count));
        }

        for (attribute, buffer) in self.attributes() {
            let expected = vertex_count * attribute.components();
            if buffer.len() != expected {
                return Err(GeometryError::AttributeLength {
                    attribute,
                    expected,
                    actual: buffer.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
