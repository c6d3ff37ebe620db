//! Utility macros.

/// Implements a binary operator between two vectors of the same type by
/// applying it to each pair of corresponding components. Owned and borrowed
/// operands are supported in all combinations.
macro_rules! impl_componentwise_binop {
    ($op:ident, $method:ident, $vec:ident, [$($field:ident),+]) => {
        impl<T: ::std::ops::$op<Output = T>> ::std::ops::$op for $vec<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                $vec {
                    $($field: ::std::ops::$op::$method(self.$field, rhs.$field)),+
                }
            }
        }

        impl<'a, T: Copy + ::std::ops::$op<Output = T>> ::std::ops::$op<&'a $vec<T>> for &'a $vec<T> {
            type Output = $vec<T>;

            #[inline]
            fn $method(self, rhs: &'a $vec<T>) -> Self::Output {
                ::std::ops::$op::$method(*self, *rhs)
            }
        }

        impl<T: Copy + ::std::ops::$op<Output = T>> ::std::ops::$op<$vec<T>> for &$vec<T> {
            type Output = $vec<T>;

            #[inline]
            fn $method(self, rhs: $vec<T>) -> Self::Output {
                ::std::ops::$op::$method(*self, rhs)
            }
        }

        impl<'a, T: Copy + ::std::ops::$op<Output = T>> ::std::ops::$op<&'a $vec<T>> for $vec<T> {
            type Output = $vec<T>;

            #[inline]
            fn $method(self, rhs: &'a $vec<T>) -> Self::Output {
                ::std::ops::$op::$method(self, *rhs)
            }
        }
    };
}

/// Implements a binary operator between a vector and a scalar by applying
/// it to each component.
macro_rules! impl_scalar_binop {
    ($op:ident, $method:ident, $vec:ident, [$($field:ident),+]) => {
        impl<T: Copy + ::std::ops::$op<Output = T>> ::std::ops::$op<T> for $vec<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $vec {
                    $($field: ::std::ops::$op::$method(self.$field, rhs)),+
                }
            }
        }

        impl<T: Copy + ::std::ops::$op<Output = T>> ::std::ops::$op<T> for &$vec<T> {
            type Output = $vec<T>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                ::std::ops::$op::$method(*self, rhs)
            }
        }
    };
}

macro_rules! impl_componentwise_binop_assign {
    ($op:ident, $method:ident, $vec:ident, [$($field:ident),+]) => {
        impl<T: ::std::ops::$op> ::std::ops::$op for $vec<T> {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                $(::std::ops::$op::$method(&mut self.$field, rhs.$field);)+
            }
        }

        impl<T: Copy + ::std::ops::$op> ::std::ops::$op<&$vec<T>> for $vec<T> {
            #[inline]
            fn $method(&mut self, rhs: &$vec<T>) {
                ::std::ops::$op::$method(self, *rhs);
            }
        }
    };
}

macro_rules! impl_scalar_binop_assign {
    ($op:ident, $method:ident, $vec:ident, [$($field:ident),+]) => {
        impl<T: Copy + ::std::ops::$op> ::std::ops::$op<T> for $vec<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                $(::std::ops::$op::$method(&mut self.$field, rhs);)+
            }
        }
    };
}

macro_rules! impl_neg {
    ($vec:ident, [$($field:ident),+]) => {
        impl<T: ::std::ops::Neg<Output = T>> ::std::ops::Neg for $vec<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                $vec {
                    $($field: -self.$field),+
                }
            }
        }

        impl<T: Copy + ::std::ops::Neg<Output = T>> ::std::ops::Neg for &$vec<T> {
            type Output = $vec<T>;

            #[inline]
            fn neg(self) -> Self::Output {
                -*self
            }
        }
    };
}

/// Implements the full set of arithmetic operators for the given vector
/// type. Vector-by-vector multiplication and division are not operators;
/// use `component_mul` and `component_div` for those.
macro_rules! impl_arithmetic {
    ($vec:ident, [$($field:ident),+]) => {
        impl_componentwise_binop!(Add, add, $vec, [$($field),+]);
        impl_componentwise_binop!(Sub, sub, $vec, [$($field),+]);
        impl_scalar_binop!(Mul, mul, $vec, [$($field),+]);
        impl_scalar_binop!(Div, div, $vec, [$($field),+]);
        impl_componentwise_binop_assign!(AddAssign, add_assign, $vec, [$($field),+]);
        impl_componentwise_binop_assign!(SubAssign, sub_assign, $vec, [$($field),+]);
        impl_scalar_binop_assign!(MulAssign, mul_assign, $vec, [$($field),+]);
        impl_scalar_binop_assign!(DivAssign, div_assign, $vec, [$($field),+]);
        impl_neg!($vec, [$($field),+]);
    };
}

macro_rules! impl_approx_eq {
    ($vec:ident, [$($field:ident),+]) => {
        impl<T> ::approx::AbsDiffEq for $vec<T>
        where
            T: ::approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(::approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl<T> ::approx::RelativeEq for $vec<T>
        where
            T: ::approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(::approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }
    };
}

/// Implements [`CommonEndian`](impact_byte_order::CommonEndian) for the
/// vector type by converting each component independently, along with the
/// in-place `to_endian` and `from_endian` methods.
macro_rules! impl_common_endian {
    ($vec:ident, [$($field:ident),+]) => {
        impl<T: ::impact_byte_order::CommonEndian> ::impact_byte_order::CommonEndian for $vec<T> {
            #[inline]
            fn swap_byte_order(self) -> Self {
                $vec {
                    $($field: ::impact_byte_order::CommonEndian::swap_byte_order(self.$field)),+
                }
            }
        }

        impl<T: ::impact_byte_order::CommonEndian> $vec<T> {
            /// Converts every component from the `host` byte order to the
            /// common (little-endian) byte order, in place. Does nothing if
            /// `host` already is the common byte order.
            #[inline]
            pub fn to_endian(&mut self, host: ::impact_byte_order::ByteOrder) {
                if !host.is_common() {
                    *self = ::impact_byte_order::CommonEndian::to_common_endian(*self, host);
                }
            }

            /// Converts every component from the common (little-endian) byte
            /// order to the `host` byte order, in place. Does nothing if
            /// `host` already is the common byte order.
            #[inline]
            pub fn from_endian(&mut self, host: ::impact_byte_order::ByteOrder) {
                if !host.is_common() {
                    *self = ::impact_byte_order::CommonEndian::from_common_endian(*self, host);
                }
            }
        }
    };
}

/// Implements the canonical text form (`Display`) and its parser
/// (`FromStr`) for the vector type.
macro_rules! impl_text {
    ($vec:ident, $n:literal, [$($field:ident),+]) => {
        impl<T: $crate::num::Scalar> ::std::fmt::Display for $vec<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::text::write_fields(f, &[$(self.$field),+])
            }
        }

        impl<T: $crate::num::Scalar> ::std::str::FromStr for $vec<T> {
            type Err = ::anyhow::Error;

            fn from_str(text: &str) -> ::anyhow::Result<Self> {
                Self::parse(text)
            }
        }

        impl<T: $crate::num::Scalar> $vec<T> {
            /// Parses a vector from its canonical text form, as produced by
            /// the [`Display`](::std::fmt::Display) implementation.
            ///
            /// A string without exactly the expected number of bracketed
            /// fields gives the zero vector rather than an error, so that
            /// partial or legacy configuration strings are tolerated.
            /// Malformed numbers inside correctly bracketed fields are
            /// still reported as errors.
            ///
            /// # Errors
            /// Returns an error if a bracketed field does not contain a
            /// valid number.
            pub fn parse(text: &str) -> ::anyhow::Result<Self> {
                $crate::text::parse_fields::<T, $n>(text).map(Self::from)
            }
        }
    };
}
