//! StreamVByte packing of unsigned 32-bit values.
//!
//! Each value is stored as its 1-4 significant little-endian bytes, with a
//! 2-bit length code per value kept in a separate key stream ahead of the
//! data stream. Two wire layouts exist side by side: the reference layout
//! ([`Version::V0`], four codes per key byte, SIMD-friendly) and the
//! bit-packed layout ([`Version::V1`]). The layouts are not interchangeable;
//! a stream must be decoded with the version that produced it.

mod v0;
mod v1;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;

use crate::{
    error::Error,
    options::{VBZ_VERSION_V0, VBZ_VERSION_V1},
};

/// StreamVByte wire layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Version {
    V0,
    V1,
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Error> {
        match raw {
            VBZ_VERSION_V0 => Ok(Version::V0),
            VBZ_VERSION_V1 => Ok(Version::V1),
            other => Err(Error::UnknownVersion(other)),
        }
    }
}

/// Two-bit length code for one packed value; the data stream stores
/// `code + 1` little-endian bytes.
fn key_code(value: u32) -> u8 {
    if value < (1 << 8) {
        0
    } else if value < (1 << 16) {
        1
    } else if value < (1 << 24) {
        2
    } else {
        3
    }
}

/// Upper bound on the encoded size of `count` values under either layout:
/// a full key stream plus four data bytes per value.
pub(crate) fn max_encoded_size(count: usize) -> usize {
    (count + 3) / 4 + 4 * count
}

/// Packs `values` into `dst` and returns the number of bytes written.
pub(crate) fn encode(version: Version, values: &[u32], dst: &mut [u8]) -> Result<usize, Error> {
    match version {
        Version::V0 => v0::encode(values, dst),
        Version::V1 => v1::encode(values, dst),
    }
}

/// Unpacks exactly `dst.len()` values from `src` and returns the number of
/// bytes written to `dst` (always `4 * dst.len()`). The caller supplies the
/// value count through the destination length; it is never inferred from
/// `src`. Trailing bytes in `src` beyond what the key stream implies are
/// ignored.
pub(crate) fn decode(version: Version, src: &[u8], dst: &mut [u32]) -> Result<usize, Error> {
    match version {
        Version::V0 => v0::decode(src, dst),
        Version::V1 => v1::decode(src, dst),
    }
}
