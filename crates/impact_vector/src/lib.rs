//! Generic 2-, 3- and 4-component vectors.
//!
//! The vectors are plain values over a scalar type `T`, used for positions,
//! directions, normals, colors and texture coordinates. Besides arithmetic
//! and geometric operations they support a canonical text form for
//! configuration files (see [`text`]) and conversion to a common byte order
//! for portable binary storage (see [`endian`]).

#[macro_use]
mod macros;

pub mod endian;
pub mod num;
pub mod text;
pub mod vector;

pub use impact_byte_order::{ByteOrder, CommonEndian};
pub use num::{Numeric, Scalar};
pub use vector::{
    Vector2, Vector2b, Vector2c, Vector2d, Vector2f, Vector2i, Vector3, Vector3b, Vector3c,
    Vector3d, Vector3f, Vector3i, Vector4, Vector4b, Vector4c, Vector4d, Vector4f, Vector4i,
};
