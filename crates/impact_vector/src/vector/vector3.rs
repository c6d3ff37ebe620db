//! 3-component vectors.

use crate::{
    num::{DEFAULT_DECIMAL_PRECISION, Numeric, truncate_decimal},
    vector::{Vector2, Vector4},
};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, One};
use std::ops::{Add, Div, Mul, Sub};

/// A 3-component vector.
///
/// Vectors compare lexicographically by component (x, then y, then z), so
/// vectors with totally ordered components can be used as keys in ordered
/// collections.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: `#[repr(C)]` with only `T` fields, so there is no padding.
unsafe impl<T: Zeroable> Zeroable for Vector3<T> {}
unsafe impl<T: Pod> Pod for Vector3<T> {}

impl<T> Vector3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
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
        Self::new(value, value, value)
    }

    /// Creates a new vector from the first three elements of the given slice.
    ///
    /// # Panics
    /// If the slice has fewer than three elements.
    #[inline]
    pub fn from_slice(components: &[T]) -> Self
    where
        T: Copy,
    {
        Self::new(components[0], components[1], components[2])
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// The components as a contiguous array, in declaration order.
    #[inline]
    pub fn as_array(&self) -> &[T; 3]
    where
        T: Pod,
    {
        bytemuck::cast_ref(self)
    }

    /// The components as a mutable contiguous array, in declaration order.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; 3]
    where
        T: Pod,
    {
        bytemuck::cast_mut(self)
    }

    /// Converts each component to the scalar type `U` like an `as` cast.
    #[inline]
    pub fn cast<U>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub fn xy(&self) -> Vector2<T>
    where
        T: Copy,
    {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: T) -> Vector4<T>
    where
        T: Copy,
    {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Converts the vector to homogeneous coordinates by appending a
    /// w-component of one.
    #[inline]
    pub fn to_homogeneous(&self) -> Vector4<T>
    where
        T: Copy + One,
    {
        self.extended(T::one())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self
    where
        T: Copy + Div<Output = T>,
    {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy + Add<Output = T> + Mul<Output = T>,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another, using the
    /// right-handed convention.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy + Sub<Output = T> + Mul<Output = T>,
    {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
        let (x, y, z) = (self.x.to_f32(), self.y.to_f32(), self.z.to_f32());
        truncate_decimal((x * x + y * y + z * z).sqrt(), DEFAULT_DECIMAL_PRECISION)
    }

    /// Computes the distance between the points represented by this vector
    /// and another.
    #[inline]
    pub fn dist(&self, other: &Self) -> f32
    where
        T: Numeric,
    {
        Vector3::new(
            other.x.to_f32() - self.x.to_f32(),
            other.y.to_f32() - self.y.to_f32(),
            other.z.to_f32() - self.z.to_f32(),
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

    /// Computes the normalized version of the vector. The components of a
    /// normalized zero vector are NaN.
    #[inline]
    pub fn normalized(&self) -> Self
    where
        T: Numeric,
    {
        let mut normalized = *self;
        normalized.normalize();
        normalized
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

    /// Computes the unit normal of the triangle with this point as the
    /// shared vertex of the edges to `p1` and `p2`.
    ///
    /// The normal is `(p2 - self) × (p1 - self)`, so it points toward the
    /// side from which the points appear in clockwise order.
    #[inline]
    pub fn normal(&self, p1: &Self, p2: &Self) -> Self
    where
        T: Numeric,
    {
        (*p2 - *self).cross(&(*p1 - *self)).normalized()
    }

    /// Computes the unit normal of the quad `p1, p2, p3, p4` by averaging the
    /// [`normal`](Self::normal)s of the four triangles that the edges
    /// `(p1, p2)`, `(p2, p3)`, `(p3, p4)` and `(p4, p1)` form with this point.
    ///
    /// This gives a reasonable normal also when the points are not exactly
    /// coplanar. This point should lie inside the quad, typically at its
    /// center. It must not be one of the corners `p1..p4`, as that makes two
    /// of the triangles degenerate and the result NaN.
    pub fn quad_normal(&self, p1: &Self, p2: &Self, p3: &Self, p4: &Self) -> Self
    where
        T: Numeric,
    {
        let sum = self.normal(p1, p2)
            + self.normal(p2, p3)
            + self.normal(p3, p4)
            + self.normal(p4, p1);
        sum.normalized()
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.to_array()
    }
}

impl_arithmetic!(Vector3, [x, y, z]);

impl_approx_eq!(Vector3, [x, y, z]);

impl_common_endian!(Vector3, [x, y, z]);

impl_text!(Vector3, 3, [x, y, z]);
