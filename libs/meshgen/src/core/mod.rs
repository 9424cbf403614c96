//! Core value types shared by the generators.
//!
//! Includes the vector aliases (`Vec2`, `Vec3`, `Vec4`) and the helpers that
//! flatten them into GPU buffers.

pub mod vec;
