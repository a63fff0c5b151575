//! Error types.

/// Stable return codes for hosts that consume results as plain integers,
/// e.g. when the codec runs as a block filter inside a container library.
/// Non-negative values are byte counts; negative values are errors.
pub const INPUT_SIZE: i32 = -1;
pub const DESTINATION_TOO_SMALL: i32 = -2;
pub const INPUT_CORRUPTED: i32 = -3;
pub const ZSTD_ERROR: i32 = -4;
pub const UNKNOWN_VERSION: i32 = -5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A buffer length does not describe a whole number of samples.
    #[error("length of {len} bytes is not a whole number of {width}-byte samples")]
    InputSize { len: usize, width: u32 },

    #[error("unsupported sample width {0}, expected 1, 2 or 4")]
    UnsupportedWidth(u32),

    /// Every size in the codec is held in 32 bits.
    #[error("{0} bytes does not fit the codec's 32-bit sizes")]
    InputTooLong(usize),

    #[error("destination of {dst} bytes is too small, {needed} bytes required")]
    DestinationTooSmall { dst: usize, needed: usize },

    /// The key stream or length header implies more bytes than the
    /// compressed input provides, or the zstd frame is malformed.
    #[error("compressed input is truncated or corrupted")]
    InputCorrupted,

    /// zstd failed for a reason other than bad input.
    #[error("zstd failure: {0}")]
    Zstd(String),

    #[error("unrecognized stream version {0}")]
    UnknownVersion(u32),
}

impl Error {
    /// The stable integer code for this error. Codes keep their values
    /// across releases so embedding filters can match on them.
    pub fn code(&self) -> i32 {
        match self {
            Error::InputSize { .. } | Error::UnsupportedWidth(_) | Error::InputTooLong(_) => {
                INPUT_SIZE
            }
            Error::DestinationTooSmall { .. } => DESTINATION_TOO_SMALL,
            Error::InputCorrupted => INPUT_CORRUPTED,
            Error::Zstd(_) => ZSTD_ERROR,
            Error::UnknownVersion(_) => UNKNOWN_VERSION,
        }
    }
}

/// Whether an integer return value from the codec signals an error.
pub const fn is_error(n: i32) -> bool {
    n < 0
}
