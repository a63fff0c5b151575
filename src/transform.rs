//! Width-parameterized delta + zig-zag pre-transform.
//!
//! The forward direction reads raw little-endian sample bytes and produces
//! the unsigned 32-bit values handed to the StreamVByte packers: wrapping
//! delta, zig-zag to unsigned, zero-extension. The inverse narrows packed
//! values back into sample bytes: truncate, un-zig-zag, wrapping prefix sum.
//! Both directions run as one iterator pass over a fresh buffer, so the
//! caller's slices are never mutated. With the pre-transform disabled the
//! pass is a plain zero-extension (or truncation) of the two's-complement
//! byte pattern.

use delta_encoding::{DeltaDecoderExt, DeltaEncoderExt};
use zigzag::ZigZag;

pub(crate) fn widen_samples(src: &[u8], width: u32, delta_zig_zag: bool) -> Vec<u32> {
    match width {
        1 => {
            let samples = src.iter().map(|&b| b as i8);
            if delta_zig_zag {
                samples.deltas().map(ZigZag::encode).map(u32::from).collect()
            } else {
                samples.map(|x| x as u8 as u32).collect()
            }
        }
        2 => {
            let samples = src
                .chunks_exact(2)
                .map(|raw| i16::from_le_bytes(raw.try_into().unwrap()));
            if delta_zig_zag {
                samples.deltas().map(ZigZag::encode).map(u32::from).collect()
            } else {
                samples.map(|x| x as u16 as u32).collect()
            }
        }
        4 => {
            let samples = src
                .chunks_exact(4)
                .map(|raw| i32::from_le_bytes(raw.try_into().unwrap()));
            if delta_zig_zag {
                samples.deltas().map(ZigZag::encode).collect()
            } else {
                samples.map(|x| x as u32).collect()
            }
        }
        _ => unreachable!("sample width is validated before the transform"),
    }
}

/// Inverse of [`widen_samples`]. `dst` must hold `values.len() * width` bytes.
pub(crate) fn narrow_samples(values: &[u32], width: u32, delta_zig_zag: bool, dst: &mut [u8]) {
    match width {
        1 => {
            let narrowed = values.iter().map(|&v| v as u8);
            if delta_zig_zag {
                let samples = narrowed.map(i8::decode).original();
                for (out, x) in dst.iter_mut().zip(samples) {
                    *out = x as u8;
                }
            } else {
                for (out, x) in dst.iter_mut().zip(narrowed) {
                    *out = x;
                }
            }
        }
        2 => {
            let narrowed = values.iter().map(|&v| v as u16);
            if delta_zig_zag {
                let samples = narrowed.map(i16::decode).original();
                for (out, x) in dst.chunks_exact_mut(2).zip(samples) {
                    out.copy_from_slice(&x.to_le_bytes());
                }
            } else {
                for (out, x) in dst.chunks_exact_mut(2).zip(narrowed) {
                    out.copy_from_slice(&x.to_le_bytes());
                }
            }
        }
        4 => {
            if delta_zig_zag {
                let samples = values.iter().copied().map(i32::decode).original();
                for (out, x) in dst.chunks_exact_mut(4).zip(samples) {
                    out.copy_from_slice(&x.to_le_bytes());
                }
            } else {
                for (out, &x) in dst.chunks_exact_mut(4).zip(values) {
                    out.copy_from_slice(&x.to_le_bytes());
                }
            }
        }
        _ => unreachable!("sample width is validated before the transform"),
    }
}
