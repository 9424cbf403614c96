//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use meshgen::{MeshBuffers, ParticleMorph, VertexAttribute};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A handle to non-indexed triangle-list buffers that can be accessed from
/// JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = torus_mesh('{"segments": 200}');
///
/// gl.bufferData(gl.ARRAY_BUFFER, mesh.vertices(), gl.STATIC_DRAW);
/// if (mesh.has_texcoords()) {
///   gl.bufferData(gl.ARRAY_BUFFER, mesh.texcoords(), gl.STATIC_DRAW);
/// }
/// gl.drawArrays(gl.TRIANGLES, 0, mesh.vertex_count);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    buffers: MeshBuffers,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.buffers.vertex_count()).unwrap_or(u32::MAX)
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.buffers.triangle_count()).unwrap_or(u32::MAX)
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.buffers.vertices[..])
    }

    /// Returns the texture coordinates as a Float32Array, if available.
    ///
    /// Format: [u, v, u, v, ...]
    /// Length: vertex_count * 2
    #[wasm_bindgen]
    pub fn texcoords(&self) -> Option<js_sys::Float32Array> {
        self.buffers
            .texcoords
            .as_ref()
            .map(|t| js_sys::Float32Array::from(&t[..]))
    }

    /// Returns the vertex normals as a Float32Array, if available.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.buffers
            .normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Returns the vertex colors as a Float32Array, if available.
    ///
    /// Format: [r, g, b, a, r, g, b, a, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn colors(&self) -> Option<js_sys::Float32Array> {
        self.buffers
            .colors
            .as_ref()
            .map(|c| js_sys::Float32Array::from(&c[..]))
    }

    /// Returns true if the mesh has texture coordinates.
    #[wasm_bindgen]
    pub fn has_texcoords(&self) -> bool {
        self.buffers.texcoords.is_some()
    }

    /// Returns true if the mesh has normals.
    #[wasm_bindgen]
    pub fn has_normals(&self) -> bool {
        self.buffers.normals.is_some()
    }

    /// Returns true if the mesh has colors.
    #[wasm_bindgen]
    pub fn has_colors(&self) -> bool {
        self.buffers.colors.is_some()
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Describes the buffer layout as JSON:
    /// `{"vertexCount":..,"triangleCount":..,"attributes":[{"name":"position","components":3},..]}`.
    #[wasm_bindgen]
    pub fn layout_json(&self) -> String {
        serde_json::to_string(&self.layout()).unwrap_or_default()
    }
}

impl MeshHandle {
    /// Wraps generated buffers.
    pub fn from_buffers(buffers: MeshBuffers) -> Self {
        Self { buffers }
    }

    /// Borrows the underlying buffers.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Buffer layout summary.
    pub fn layout(&self) -> MeshLayout {
        MeshLayout {
            vertex_count: self.buffers.vertex_count(),
            triangle_count: self.buffers.triangle_count(),
            attributes: self
                .buffers
                .attributes()
                .into_iter()
                .map(|(attribute, _)| AttributeLayout::from(attribute))
                .collect(),
        }
    }
}

/// Serializable description of a [`MeshHandle`]'s buffers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshLayout {
    /// Vertices in every buffer.
    pub vertex_count: usize,
    /// Triangles drawn with `gl.TRIANGLES`.
    pub triangle_count: usize,
    /// Buffers present, positions first.
    pub attributes: Vec<AttributeLayout>,
}

/// One attribute buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeLayout {
    /// Attribute name, e.g. `"texcoord"`.
    pub name: &'static str,
    /// Floats per vertex.
    pub components: usize,
}

impl From<VertexAttribute> for AttributeLayout {
    fn from(attribute: VertexAttribute) -> Self {
        Self {
            name: attribute.name(),
            components: attribute.components(),
        }
    }
}

/// Source and target particle meshes for a GPU morph.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const morph = particle_morph_scene();
/// gl.bufferData(gl.ARRAY_BUFFER, morph.source().vertices(), gl.STATIC_DRAW);
/// gl.bufferData(gl.ARRAY_BUFFER, morph.target().vertices(), gl.STATIC_DRAW);
/// gl.uniform1f(uMorphTransition, morph_state(timer));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MorphHandle {
    source: MeshHandle,
    target: MeshHandle,
}

#[wasm_bindgen]
impl MorphHandle {
    /// Mesh shown at transition 0.
    #[wasm_bindgen]
    pub fn source(&self) -> MeshHandle {
        self.source.clone()
    }

    /// Mesh shown at transition 1.
    #[wasm_bindgen]
    pub fn target(&self) -> MeshHandle {
        self.target.clone()
    }

    /// Vertex count shared by both meshes.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.source.vertex_count()
    }
}

impl From<ParticleMorph> for MorphHandle {
    fn from(morph: ParticleMorph) -> Self {
        let (source, target) = morph.into_parts();
        Self {
            source: MeshHandle::from_buffers(source),
            target: MeshHandle::from_buffers(target),
        }
    }
}
