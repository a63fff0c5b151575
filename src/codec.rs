//! Compress/decompress entry points composing the pre-transform, the
//! StreamVByte packers and the zstd stage.

use crate::{error::Error, options::CompressionOptions, svb, transform};

/// Bytes of little-endian original-length framing written by
/// [`compress_sized`] ahead of the payload.
pub const SIZED_HEADER_LEN: usize = 4;

fn sample_count(len_bytes: usize, width: u32) -> Result<usize, Error> {
    if len_bytes % width as usize != 0 {
        return Err(Error::InputSize {
            len: len_bytes,
            width,
        });
    }
    Ok(len_bytes / width as usize)
}

/// Compresses `src` into `dst` and returns the number of bytes written.
///
/// delta -> zig-zag -> StreamVByte -> zstd, with stages switched on and off
/// by `options`. `src` holds little-endian samples of
/// `options.integer_size` bytes each; a `dst` of
/// [`max_compressed_size`] bytes always suffices.
pub fn compress(src: &[u8], dst: &mut [u8], options: &CompressionOptions) -> Result<usize, Error> {
    let width = options.checked_width()?;
    let version = options.checked_version()?;
    if src.len() > u32::MAX as usize {
        return Err(Error::InputTooLong(src.len()));
    }
    let count = sample_count(src.len(), width)?;
    log::trace!("compressing {count} samples of width {width}");

    let widened = transform::widen_samples(src, width, options.perform_delta_zig_zag);
    if !options.zstd_enabled() {
        return svb::encode(version, &widened, dst);
    }
    let mut packed = vec![0u8; svb::max_encoded_size(count)];
    let packed_len = svb::encode(version, &widened, &mut packed)?;
    zstd_compress(&packed[..packed_len], dst, options.zstd_compression_level)
}

/// Decompresses `src` into `dst` and returns the number of bytes written,
/// always `dst.len()`.
///
/// zstd -> StreamVByte -> zig-zag -> delta. The sample count is taken from
/// the destination length, so `dst` must be sized to exactly the original
/// byte length; use [`decompress_sized`] when that length travels with the
/// stream.
pub fn decompress(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, Error> {
    let width = options.checked_width()?;
    let version = options.checked_version()?;
    let count = sample_count(dst.len(), width)?;
    log::trace!("decompressing {count} samples of width {width}");

    let mut values = vec![0u32; count];
    if options.zstd_enabled() {
        let mut packed = vec![0u8; svb::max_encoded_size(count)];
        let packed_len = zstd_decompress(src, &mut packed)?;
        svb::decode(version, &packed[..packed_len], &mut values)?;
    } else {
        svb::decode(version, src, &mut values)?;
    }
    transform::narrow_samples(&values, width, options.perform_delta_zig_zag, dst);
    Ok(dst.len())
}

/// Like [`compress`], but writes a 4-byte little-endian header holding the
/// original byte length ahead of the payload, making the stream
/// self-describing.
pub fn compress_sized(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, Error> {
    if src.len() > u32::MAX as usize {
        return Err(Error::InputTooLong(src.len()));
    }
    if dst.len() < SIZED_HEADER_LEN {
        return Err(Error::DestinationTooSmall {
            dst: dst.len(),
            needed: SIZED_HEADER_LEN,
        });
    }
    let (header, payload) = dst.split_at_mut(SIZED_HEADER_LEN);
    header.copy_from_slice(&(src.len() as u32).to_le_bytes());
    let n = compress(src, payload, options)?;
    Ok(SIZED_HEADER_LEN + n)
}

/// Inverse of [`compress_sized`]: reads the length header, decodes that many
/// bytes into the front of `dst` and returns the count.
pub fn decompress_sized(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, Error> {
    let width = options.checked_width()?;
    let size = decompressed_size(src, options)? as usize;
    if size % width as usize != 0 {
        // a header the producer cannot have written
        return Err(Error::InputCorrupted);
    }
    if dst.len() < size {
        return Err(Error::DestinationTooSmall {
            dst: dst.len(),
            needed: size,
        });
    }
    decompress(&src[SIZED_HEADER_LEN..], &mut dst[..size], options)
}

/// Reads the original byte length recorded by [`compress_sized`] without
/// touching the payload.
pub fn decompressed_size(src: &[u8], options: &CompressionOptions) -> Result<u32, Error> {
    options.checked_width()?;
    options.checked_version()?;
    let header: [u8; SIZED_HEADER_LEN] = src
        .get(..SIZED_HEADER_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or(Error::InputCorrupted)?;
    Ok(u32::from_le_bytes(header))
}

/// Conservative bound on the output of [`compress`] for any input of
/// `input_bytes` bytes under `options`. Non-decreasing in `input_bytes`.
pub fn max_compressed_size(input_bytes: u32, options: &CompressionOptions) -> Result<u32, Error> {
    let width = options.checked_width()?;
    options.checked_version()?;
    let count = (input_bytes as u64 + width as u64 - 1) / width as u64;
    let mut bound = (count + 3) / 4 + 4 * count;
    if options.zstd_enabled() {
        bound = zstd::zstd_safe::compress_bound(bound as usize) as u64;
    }
    u32::try_from(bound).map_err(|_| Error::InputTooLong(bound as usize))
}

/// [`max_compressed_size`] plus the sized-frame header.
pub fn max_compressed_size_sized(
    input_bytes: u32,
    options: &CompressionOptions,
) -> Result<u32, Error> {
    let bound = max_compressed_size(input_bytes, options)?;
    bound
        .checked_add(SIZED_HEADER_LEN as u32)
        .ok_or(Error::InputTooLong(bound as usize + SIZED_HEADER_LEN))
}

/// [`compress`] into a freshly allocated buffer of [`max_compressed_size`]
/// bytes, truncated to the bytes written.
pub fn compress_to_vec(src: &[u8], options: &CompressionOptions) -> Result<Vec<u8>, Error> {
    if src.len() > u32::MAX as usize {
        return Err(Error::InputTooLong(src.len()));
    }
    let bound = max_compressed_size(src.len() as u32, options)?;
    let mut dst = vec![0u8; bound as usize];
    let n = compress(src, &mut dst, options)?;
    dst.truncate(n);
    Ok(dst)
}

/// [`decompress`] into a freshly allocated buffer of `decompressed_len`
/// bytes, the original byte length the caller tracked out of band.
pub fn decompress_to_vec(
    src: &[u8],
    decompressed_len: usize,
    options: &CompressionOptions,
) -> Result<Vec<u8>, Error> {
    let mut dst = vec![0u8; decompressed_len];
    decompress(src, &mut dst, options)?;
    Ok(dst)
}

/// [`compress_sized`] into a freshly allocated buffer.
pub fn compress_sized_to_vec(src: &[u8], options: &CompressionOptions) -> Result<Vec<u8>, Error> {
    if src.len() > u32::MAX as usize {
        return Err(Error::InputTooLong(src.len()));
    }
    let bound = max_compressed_size_sized(src.len() as u32, options)?;
    let mut dst = vec![0u8; bound as usize];
    let n = compress_sized(src, &mut dst, options)?;
    dst.truncate(n);
    Ok(dst)
}

/// [`decompress_sized`] into a freshly allocated buffer sized from the
/// stream's own length header.
pub fn decompress_sized_to_vec(
    src: &[u8],
    options: &CompressionOptions,
) -> Result<Vec<u8>, Error> {
    let size = decompressed_size(src, options)? as usize;
    let mut dst = vec![0u8; size];
    decompress_sized(src, &mut dst, options)?;
    Ok(dst)
}

fn zstd_compress(src: &[u8], dst: &mut [u8], level: u32) -> Result<usize, Error> {
    zstd::bulk::compress_to_buffer(src, &mut *dst, level as i32).map_err(|e| {
        let bound = zstd::zstd_safe::compress_bound(src.len());
        if dst.len() < bound {
            Error::DestinationTooSmall {
                dst: dst.len(),
                needed: bound,
            }
        } else {
            Error::Zstd(e.to_string())
        }
    })
}

fn zstd_decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    // a well-formed frame that declares more content than the sample count
    // allows is a destination problem, not corruption
    let content = zstd::zstd_safe::get_frame_content_size(src).map_err(|_| Error::InputCorrupted)?;
    if let Some(size) = content {
        if size > dst.len() as u64 {
            return Err(Error::DestinationTooSmall {
                dst: dst.len(),
                needed: size as usize,
            });
        }
    }
    zstd::bulk::decompress_to_buffer(src, dst).map_err(|_| Error::InputCorrupted)
}
