//! Host byte order detection and conversion between the host byte order and
//! the common byte order used for stored and transmitted data.

use lazy_static::lazy_static;

/// The order in which the bytes of a multi-byte scalar are laid out in
/// memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Scalars (and aggregates of scalars) that can be converted between the
/// host byte order and [`ByteOrder::COMMON`].
///
/// The conversions take the host byte order as an explicit argument rather
/// than looking it up, so that callers decide when detection happens and so
/// that the swapping path can be exercised on any host. Use
/// [`ByteOrder::host`] to obtain the actual host byte order.
pub trait CommonEndian: Copy {
    /// Returns the value with the order of its bytes reversed.
    #[must_use]
    fn swap_byte_order(self) -> Self;

    /// Converts the value from the `host` byte order to the common byte
    /// order. This is the identity when `host` already is the common byte
    /// order.
    #[inline]
    #[must_use]
    fn to_common_endian(self, host: ByteOrder) -> Self {
        if host.is_common() {
            self
        } else {
            self.swap_byte_order()
        }
    }

    /// Converts the value from the common byte order to the `host` byte
    /// order. This is the identity when `host` already is the common byte
    /// order.
    #[inline]
    #[must_use]
    fn from_common_endian(self, host: ByteOrder) -> Self {
        if host.is_common() {
            self
        } else {
            self.swap_byte_order()
        }
    }
}

lazy_static! {
    static ref HOST_BYTE_ORDER: ByteOrder = {
        let byte_order = ByteOrder::detect();
        log::debug!("Detected {byte_order:?}-endian host byte order");
        byte_order
    };
}

impl ByteOrder {
    /// The byte order of all data written to files or sent over the network.
    pub const COMMON: Self = Self::Little;

    /// The native byte order of the host.
    ///
    /// The byte order is detected the first time this is called and cached
    /// for the lifetime of the process.
    #[inline]
    pub fn host() -> Self {
        *HOST_BYTE_ORDER
    }

    /// Whether this is the big-endian byte order.
    #[inline]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Whether this is [`Self::COMMON`], in which case no conversion is
    /// needed to go to or from the common byte order.
    #[inline]
    pub const fn is_common(self) -> bool {
        matches!(self, Self::Little)
    }

    fn detect() -> Self {
        if 1_u16.to_ne_bytes()[0] == 1 {
            Self::Little
        } else {
            Self::Big
        }
    }
}

macro_rules! impl_common_endian_for_integers {
    ($($t:ty),+) => {
        $(
            impl CommonEndian for $t {
                #[inline]
                fn swap_byte_order(self) -> Self {
                    self.swap_bytes()
                }
            }
        )+
    };
}

macro_rules! impl_common_endian_for_floats {
    ($($t:ty),+) => {
        $(
            impl CommonEndian for $t {
                #[inline]
                fn swap_byte_order(self) -> Self {
                    Self::from_bits(self.to_bits().swap_bytes())
                }
            }
        )+
    };
}

impl_common_endian_for_integers!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_common_endian_for_floats!(f32, f64);

impl CommonEndian for bool {
    #[inline]
    fn swap_byte_order(self) -> Self {
        self
    }
}
