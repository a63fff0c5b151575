//! Lossless compression of nanopore signal data.
//!
//! VBZ is the block codec used for the signal tables of POD5 files. Signal
//! traces are sequences of small signed integers whose neighbours sit close
//! together, so the pipeline is
//!
//! `delta -> zig-zag -> StreamVByte -> zstd`
//!
//! with the exact inverse on decompression. Every stage can be switched per
//! call through [`CompressionOptions`]: the delta + zig-zag pre-transform,
//! the sample width (1, 2 or 4 bytes), the zstd level (0 disables the
//! entropy stage) and the StreamVByte wire layout version.
//!
//! The codec holds no state between calls and performs no I/O; callers own
//! every buffer. The plain [`compress`]/[`decompress`] pair requires the
//! caller to remember the original byte length out of band, while the
//! `_sized` variants frame the payload with a 4-byte little-endian length
//! header so streams describe themselves:
//!
//! ```
//! let samples: Vec<i16> = vec![100, 102, 101, 99, 98];
//! let raw: Vec<u8> = samples.iter().flat_map(|x| x.to_le_bytes()).collect();
//!
//! let options = vbz::CompressionOptions::default();
//! let compressed = vbz::compress_sized_to_vec(&raw, &options)?;
//! let restored = vbz::decompress_sized_to_vec(&compressed, &options)?;
//! assert_eq!(restored, raw);
//! # Ok::<(), vbz::Error>(())
//! ```

mod codec;
mod error;
mod options;
mod svb;
mod transform;

pub use codec::{
    compress, compress_sized, compress_sized_to_vec, compress_to_vec, decompress,
    decompress_sized, decompress_sized_to_vec, decompress_to_vec, decompressed_size,
    max_compressed_size, max_compressed_size_sized, SIZED_HEADER_LEN,
};
pub use error::{
    is_error, Error, DESTINATION_TOO_SMALL, INPUT_CORRUPTED, INPUT_SIZE, UNKNOWN_VERSION,
    ZSTD_ERROR,
};
pub use options::{CompressionOptions, VBZ_DEFAULT_VERSION, VBZ_VERSION_V0, VBZ_VERSION_V1};

/// Version of this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
