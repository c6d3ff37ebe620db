//! 4-component vectors.

use crate::{
    num::{DEFAULT_DECIMAL_PRECISION, Numeric, truncate_decimal},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::ops::{Add, Div, Mul};

/// A 4-component vector.
///
/// Vectors compare lexicographically by component (x, y, z, then w), so
/// vectors with totally ordered components can be used as keys in ordered
/// collections.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// SAFETY: `#[repr(C)]` with only `T` fields, so there is no padding.
unsafe impl<T: Zeroable> Zeroable for Vector4<T> {}
unsafe impl<T: Pod> Pod for Vector4<T> {}

impl<T> Vector4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
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
        Self::new(value, value, value, value)
    }

    /// Creates a new vector from the first four elements of the given slice.
    ///
    /// # Panics
    /// If the slice has fewer than four elements.
    #[inline]
    pub fn from_slice(components: &[T]) -> Self
    where
        T: Copy,
    {
        Self::new(components[0], components[1], components[2], components[3])
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The components as a contiguous array, in declaration order.
    #[inline]
    pub fn as_array(&self) -> &[T; 4]
    where
        T: Pod,
    {
        bytemuck::cast_ref(self)
    }

    /// The components as a mutable contiguous array, in declaration order.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; 4]
    where
        T: Pod,
    {
        bytemuck::cast_mut(self)
    }

    /// Converts each component to the scalar type `U` like an `as` cast.
    #[inline]
    pub fn cast<U>(&self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector4::new(self.x.as_(), self.y.as_(), self.z.as_(), self.w.as_())
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    /// The w-component is dropped.
    #[inline]
    pub fn xyz(&self) -> Vector3<T>
    where
        T: Copy,
    {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self
    where
        T: Copy + Div<Output = T>,
    {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy + Add<Output = T> + Mul<Output = T>,
    {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the length of the vector, in single precision and truncated
    /// to [`DEFAULT_DECIMAL_PRECISION`] fractional digits.
    #[inline]
    pub fn length(&self) -> f32
    where
        T: Numeric,
    {
        let (x, y, z, w) = (
            self.x.to_f32(),
            self.y.to_f32(),
            self.z.to_f32(),
            self.w.to_f32(),
        );
        truncate_decimal((x * x + y * y + z * z + w * w).sqrt(), DEFAULT_DECIMAL_PRECISION)
    }

    /// Computes the distance between the points represented by this vector
    /// and another.
    #[inline]
    pub fn dist(&self, other: &Self) -> f32
    where
        T: Numeric,
    {
        Vector4::new(
            other.x.to_f32() - self.x.to_f32(),
            other.y.to_f32() - self.y.to_f32(),
            other.z.to_f32() - self.z.to_f32(),
            other.w.to_f32() - self.w.to_f32(),
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
}

impl<T> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        vector.to_array()
    }
}

impl_arithmetic!(Vector4, [x, y, z, w]);

impl_approx_eq!(Vector4, [x, y, z, w]);

impl_common_endian!(Vector4, [x, y, z, w]);

impl_text!(Vector4, 4, [x, y, z, w]);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::ByteOrder;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn default_vector4_is_zero() {
        assert_eq!(Vector4::<u8>::default(), Vector4::new(0, 0, 0, 0));
        assert_eq!(Vector4::<bool>::zeros(), Vector4::same(false));
    }

    #[test]
    fn creating_vector4_from_memory_works() {
        let colors = [0.1_f32, 0.2, 0.3, 1.0, 0.5, 0.5, 0.5, 1.0];
        assert_eq!(Vector4::from_slice(&colors), Vector4::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(
            Vector4::from_slice(&colors[4..]),
            Vector4::new(0.5, 0.5, 0.5, 1.0)
        );
        assert_eq!(<[u8; 4]>::from(Vector4::new(1, 2, 3, 4)), [1, 2, 3, 4]);
    }

    #[test]
    fn viewing_vector4_as_array_works() {
        let mut v = Vector4::new(1_i32, 2, 3, 4);
        assert_eq!(v.as_array(), &[1, 2, 3, 4]);
        v.as_array_mut()[3] = 8;
        assert_eq!(v.w, 8);
    }

    #[test]
    fn narrowing_vector4_drops_w() {
        assert_eq!(Vector4::new(1, 2, 3, 4).xyz(), Vector3::new(1, 2, 3));
    }

    #[test]
    fn widening_and_narrowing_vector3_round_trips() {
        let v = Vector3::new(1.5_f32, -2.0, 0.25);
        assert_eq!(v.extended(9.0).xyz(), v);
        assert_eq!(v.to_homogeneous().xyz(), v);
    }

    #[test]
    fn casting_vector4_converts_each_component() {
        assert_eq!(
            Vector4::new(0.0_f32, 127.9, 255.0, 300.0).cast::<u8>(),
            Vector4::new(0, 127, 255, 255)
        );
    }

    #[test]
    fn vector4_arithmetic_operations_work() {
        let v1 = Vector4::new(1.0_f64, 2.0, 3.0, 4.0);
        let v2 = Vector4::same(2.0);

        assert_eq!(v1 + v2, Vector4::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(&v1 - v2, Vector4::new(-1.0, 0.0, 1.0, 2.0));
        assert_eq!(-v1, Vector4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(v1 * 0.5, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(v1 / 2.0, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(v1.component_mul(&v2), Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v1.component_div(&v2), Vector4::new(0.5, 1.0, 1.5, 2.0));

        let mut v3 = v1;
        v3 += v2;
        v3 -= &v1;
        assert_eq!(v3, v2);
    }

    #[test]
    fn vector4_dot_product_works() {
        assert_eq!(Vector4::new(1, 2, 3, 4).dot(&Vector4::new(5, 6, 7, 8)), 70);
    }

    #[test]
    fn computing_vector4_length_and_distance_works() {
        assert_eq!(Vector4::new(1.0_f32, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(
            Vector4::new(1, 1, 1, 1).dist(&Vector4::new(2, 2, 2, 2)),
            2.0
        );
        assert_eq!(Vector4::<i8>::new(0, 0, 0, 100).length(), 100.0);
        assert_eq!(
            Vector4::<i8>::same(-100).dist(&Vector4::same(100)),
            400.0
        );
    }

    #[test]
    fn normalizing_vector4_gives_unit_vector() {
        let mut v = Vector4::new(0.0_f32, 0.0, 3.0, 4.0);
        v.normalize();
        assert_abs_diff_eq!(v, Vector4::new(0.0, 0.0, 0.6, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn lerping_vector4_works() {
        let a = Vector4::new(0.0_f32, 0.0, 0.0, 1.0);
        let b = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a.lerp(0.5, &b), Vector4::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(a.lerp(0.0, &b), a);
        assert_eq!(a.lerp(1.0, &b), b);
    }

    #[test]
    fn vector4_ordering_is_lexicographic() {
        let set: BTreeSet<_> = [
            Vector4::new(0, 0, 1, 0),
            Vector4::new(0, 0, 0, 1),
            Vector4::new(1, 0, 0, 0),
            Vector4::new(0, 1, 0, 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![
                Vector4::new(0, 0, 0, 1),
                Vector4::new(0, 0, 1, 0),
                Vector4::new(0, 1, 0, 0),
                Vector4::new(1, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn formatting_vector4_gives_canonical_text() {
        assert_eq!(
            Vector4::new(1, 0, 0, 255).to_string(),
            "x [1] y [0] z [0] w [255]"
        );
        assert_eq!(
            Vector4::new(true, true, false, true).to_string(),
            "x [1] y [1] z [0] w [1]"
        );
    }

    #[test]
    fn parsing_vector4_works() {
        assert_eq!(
            Vector4::<i32>::parse("x [1] y [0] z [0] w [0]").unwrap(),
            Vector4::new(1, 0, 0, 0)
        );
        assert_eq!(
            "x [0.5] y [0.25] z [0.125] w [1]"
                .parse::<Vector4<f32>>()
                .unwrap(),
            Vector4::new(0.5, 0.25, 0.125, 1.0)
        );
    }

    #[test]
    fn parsing_vector4_with_wrong_field_count_gives_zero_vector() {
        assert_eq!(
            Vector4::<f32>::parse("x [1] y [0] z [0]").unwrap(),
            Vector4::zeros()
        );
    }

    #[test]
    fn parsing_vector4_with_malformed_number_fails() {
        assert!(Vector4::<i32>::parse("x [1] y [0] z [0] w [one]").is_err());
    }

    #[test]
    fn converting_vector4_to_big_endian_host_order_swaps_each_component() {
        let mut v = Vector4::new(1_u32, 0x0000_00ff, 0x1234_5678, 0);
        v.to_endian(ByteOrder::Big);
        assert_eq!(v, Vector4::new(0x0100_0000, 0xff00_0000, 0x7856_3412, 0));
    }

    proptest! {
        #[test]
        fn vector4_text_round_trips(components in prop::array::uniform4(any::<i16>())) {
            let v = Vector4::from(components);
            prop_assert_eq!(Vector4::<i16>::parse(&v.to_string()).unwrap(), v);
        }
    }

    proptest! {
        #[test]
        fn vector4_endian_conversion_round_trips(components in prop::array::uniform4(any::<u32>())) {
            let v = Vector4::from(components);
            for host in [ByteOrder::Little, ByteOrder::Big] {
                let mut converted = v;
                converted.from_endian(host);
                converted.to_endian(host);
                prop_assert_eq!(converted, v);
            }
        }
    }

    proptest! {
        #[test]
        fn vector4_ordering_is_irreflexive_and_transitive(
            a in prop::array::uniform4(0_u8..2),
            b in prop::array::uniform4(0_u8..2),
            c in prop::array::uniform4(0_u8..2),
        ) {
            let (a, b, c) = (Vector4::from(a), Vector4::from(b), Vector4::from(c));
            let same_as_a = a;
            prop_assert!(!(a < same_as_a));
            if a < b && b < c {
                prop_assert!(a < c);
            }
        }
    }

    proptest! {
        #[test]
        fn vector4_dot_product_is_commutative(
            a in prop::array::uniform4(-1000_i32..1000),
            b in prop::array::uniform4(-1000_i32..1000),
        ) {
            let a = Vector4::from(a);
            let b = Vector4::from(b);
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }
}
