//! 2-component vectors.

use crate::{
    num::{DEFAULT_DECIMAL_PRECISION, Numeric, truncate_decimal},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::ops::{Add, Div, Mul};

/// A 2-component vector.
///
/// Vectors compare lexicographically by component, x first, so vectors with
/// totally ordered components can be used as keys in ordered collections.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

// SAFETY: `#[repr(C)]` with only `T` fields, so there is no padding.
unsafe impl<T: Zeroable> Zeroable for Vector2<T> {}
unsafe impl<T: Pod> Pod for Vector2<T> {}

impl<T> Vector2<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all components zero (or `false`).
    #[inline]
    pub fn zeros() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: T) -> Self
    where
        T: Copy,
    {
        Self::new(value, value)
    }

    /// Creates a new vector from the first two elements of the given slice.
    ///
    /// # Panics
    /// If the slice has fewer than two elements.
    #[inline]
    pub fn from_slice(components: &[T]) -> Self
    where
        T: Copy,
    {
        Self::new(components[0], components[1])
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// The components as a contiguous array, in declaration order.
    #[inline]
    pub fn as_array(&self) -> &[T; 2]
    where
        T: Pod,
    {
        bytemuck::cast_ref(self)
    }

    /// The components as a mutable contiguous array, in declaration order.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; 2]
    where
        T: Pod,
    {
        bytemuck::cast_mut(self)
    }

    /// Converts each component to the scalar type `U` like an `as` cast.
    #[inline]
    pub fn cast<U>(&self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub fn extended(&self, z: T) -> Vector3<T>
    where
        T: Copy,
    {
        Vector3::new(self.x, self.y, z)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self
    where
        T: Copy + Div<Output = T>,
    {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy + Add<Output = T> + Mul<Output = T>,
    {
        self.x * other.x + self.y * other.y
    }

    /// Computes the length of the vector.
    ///
    /// The length is always computed in single precision and truncated to
    /// [`DEFAULT_DECIMAL_PRECISION`] fractional digits, so that it is the same
    /// on all platforms.
    #[inline]
    pub fn length(&self) -> f32
    where
        T: Numeric,
    {
        let (x, y) = (self.x.to_f32(), self.y.to_f32());
        truncate_decimal((x * x + y * y).sqrt(), DEFAULT_DECIMAL_PRECISION)
    }

    /// Computes the distance between the points represented by this vector
    /// and another.
    #[inline]
    pub fn dist(&self, other: &Self) -> f32
    where
        T: Numeric,
    {
        Vector2::new(
            other.x.to_f32() - self.x.to_f32(),
            other.y.to_f32() - self.y.to_f32(),
        )
        .length()
    }

    /// Divides the vector by its length. The components of a zero vector
    /// become NaN.
    #[inline]
    pub fn normalize(&mut self)
    where
        T: Numeric,
    {
        let length = T::from_f32(self.length());
        *self = *self / length;
    }

    /// Interpolates linearly between this vector (`t = 0`) and `other`
    /// (`t = 1`). `t` is not clamped.
    #[inline]
    pub fn lerp(&self, t: T, other: &Self) -> Self
    where
        T: Numeric,
    {
        *self + (*other - *self) * t
    }

    /// Rotates the vector counterclockwise by the given angle in radians
    /// about the origin.
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self
    where
        T: Numeric,
    {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x.to_f32(), self.y.to_f32());
        Self::new(T::from_f32(x * cos - y * sin), T::from_f32(x * sin + y * cos))
    }

    /// Rotates the vector counterclockwise by the given angle in radians
    /// about the given pivot point.
    #[inline]
    pub fn rotate_around(&self, angle: f32, pivot: &Self) -> Self
    where
        T: Numeric,
    {
        *pivot + (*self - *pivot).rotate(angle)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        vector.to_array()
    }
}

impl_arithmetic!(Vector2, [x, y]);

impl_approx_eq!(Vector2, [x, y]);

impl_common_endian!(Vector2, [x, y]);

impl_text!(Vector2, 2, [x, y]);
