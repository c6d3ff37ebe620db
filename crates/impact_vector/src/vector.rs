//! Vectors.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

pub type Vector2i = Vector2<i32>;
pub type Vector2b = Vector2<bool>;
pub type Vector2c = Vector2<i8>;
pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

pub type Vector3i = Vector3<i32>;
pub type Vector3b = Vector3<bool>;
pub type Vector3c = Vector3<i8>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

pub type Vector4i = Vector4<i32>;
pub type Vector4b = Vector4<bool>;
pub type Vector4c = Vector4<i8>;
pub type Vector4f = Vector4<f32>;
pub type Vector4d = Vector4<f64>;
