//! Conversion of vector buffers between host and common byte order.
//!
//! Binary files store vectors in the common byte order (little endian). The
//! host byte order is passed explicitly to every conversion, so that code
//! reading or writing files can be tested against either order on any
//! machine. Use [`ByteOrder::host`] for the actual host.

use impact_byte_order::{ByteOrder, CommonEndian};
use log::trace;

/// Converts every vector in the slice in place from the `host` byte order to
/// the common byte order. Does nothing when the host order is already the
/// common one.
pub fn to_endian_array<V: CommonEndian>(vectors: &mut [V], host: ByteOrder) {
    if host.is_common() {
        return;
    }
    trace!(
        "Converting {} values from {host:?} to common byte order",
        vectors.len()
    );
    for vector in vectors {
        *vector = vector.to_common_endian(host);
    }
}

/// Converts every vector in the slice in place from the common byte order to
/// the `host` byte order. Does nothing when the host order is already the
/// common one.
pub fn from_endian_array<V: CommonEndian>(vectors: &mut [V], host: ByteOrder) {
    if host.is_common() {
        return;
    }
    trace!(
        "Converting {} values from common to {host:?} byte order",
        vectors.len()
    );
    for vector in vectors {
        *vector = vector.from_common_endian(host);
    }
}
