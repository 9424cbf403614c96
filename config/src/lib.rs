//! # Config Crate
//!
//! Centralized configuration constants for the torus and particle scene
//! generators. All magic numbers and tunable parameters are defined here so
//! the geometry crate and the WASM boundary agree on the same defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RING_SCALE, DEFAULT_RING_SEGMENTS, FRENET_EPSILON};
//!
//! // Tube cross-section resolution for the torus sweep
//! assert_eq!(DEFAULT_RING_SEGMENTS, 20);
//! assert!(DEFAULT_RING_SCALE > 0.0);
//!
//! // Step used for the central-difference tangent estimate
//! assert!(FRENET_EPSILON < 0.1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Scene Compatible**: Defaults match the WebGL demo scenes

pub mod constants;
