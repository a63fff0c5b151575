//! Per-call compression settings.

use crate::{error::Error, svb::Version};

/// StreamVByte layout identifiers accepted in [`CompressionOptions::version`].
pub const VBZ_VERSION_V0: u32 = 0;
pub const VBZ_VERSION_V1: u32 = 1;

/// Layout used when callers have no reason to pick one.
pub const VBZ_DEFAULT_VERSION: u32 = VBZ_VERSION_V0;

/// Settings for one compress or decompress call.
///
/// The options are not recorded anywhere in the output stream, so the
/// decompressing side must present the same options that produced it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    /// Delta-code then zig-zag the samples before packing.
    pub perform_delta_zig_zag: bool,
    /// Sample width in bytes: 1, 2 or 4.
    pub integer_size: u32,
    /// 0 disables the zstd stage; any other value is handed to zstd as the
    /// compression level, which clamps it to its own valid range.
    pub zstd_compression_level: u32,
    /// StreamVByte layout, [`VBZ_VERSION_V0`] or [`VBZ_VERSION_V1`].
    pub version: u32,
}

impl CompressionOptions {
    pub fn new(
        perform_delta_zig_zag: bool,
        integer_size: u32,
        zstd_compression_level: u32,
        version: u32,
    ) -> Self {
        Self {
            perform_delta_zig_zag,
            integer_size,
            zstd_compression_level,
            version,
        }
    }

    pub(crate) fn checked_width(&self) -> Result<u32, Error> {
        match self.integer_size {
            1 | 2 | 4 => Ok(self.integer_size),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }

    pub(crate) fn checked_version(&self) -> Result<Version, Error> {
        Version::try_from(self.version)
    }

    pub(crate) fn zstd_enabled(&self) -> bool {
        self.zstd_compression_level != 0
    }
}

impl Default for CompressionOptions {
    /// The settings used for nanopore signal tables: delta + zig-zag over
    /// 16-bit samples, zstd level 1, default layout.
    fn default() -> Self {
        Self {
            perform_delta_zig_zag: true,
            integer_size: 2,
            zstd_compression_level: 1,
            version: VBZ_DEFAULT_VERSION,
        }
    }
}
