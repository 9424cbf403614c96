//! # Error Types
//!
//! Error types for the geometry layer.
//!
//! ## Error Policy
//!
//! - Generators never fail: degenerate parameters yield degenerate or empty
//!   buffers, not errors
//! - Errors are reserved for explicit checks (buffer validation, morph pairs,
//!   validated configuration)
//! - SVG path problems are reported as [`PathError`] alongside the partial
//!   result, never as a failed call

use config::constants::ConfigError;
use thiserror::Error;

use crate::mesh::VertexAttribute;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the explicit checks of this crate.
///
/// ## Example
///
/// ```rust
/// use meshgen::{GeometryError, MeshBuffers};
///
/// let mut mesh = MeshBuffers::new();
/// mesh.vertices = vec![0.0; 4];
/// match mesh.validate() {
///     Err(GeometryError::RaggedPositions(len)) => assert_eq!(len, 4),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The position buffer does not hold whole xyz triples.
    #[error("position buffer length {0} is not a multiple of 3")]
    RaggedPositions(usize),

    /// The vertex count does not form whole triangles.
    #[error("{0} vertices do not form a triangle list")]
    NotTriangleList(usize),

    /// An optional attribute disagrees with the position buffer on the
    /// vertex count.
    #[error("{attribute} buffer holds {actual} floats, expected {expected}")]
    AttributeLength {
        /// Attribute whose buffer is inconsistent
        attribute: VertexAttribute,
        /// Expected float count
        expected: usize,
        /// Actual float count
        actual: usize,
    },

    /// Morph targets must have the same vertex count.
    #[error("morph targets differ in size: {from} vs {to} vertices")]
    MorphMismatch {
        /// Vertex count of the source cloud
        from: usize,
        /// Vertex count of the target cloud
        to: usize,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Reasons an SVG path parse stopped before the end of its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Coordinates followed a command letter the sampler does not know.
    #[error("unexpected path command '{0}'")]
    UnknownCommand(String),

    /// Coordinates appeared before the first command letter.
    #[error("coordinates '{0}' appear before any path command")]
    NoCommand(String),

    /// A command ran out of operand tokens.
    #[error("command '{command}' is missing operands at token {index}")]
    MissingOperand {
        /// Active command letter
        command: char,
        /// Token index where the operand was expected
        index: usize,
    },

    /// A coordinate token was not an `x,y` pair of numbers.
    #[error("cannot parse coordinate pair '{0}'")]
    InvalidNumber(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for the checked operations of this crate.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
