use std::io;

use thiserror::Error;

use crate::{compression::ConfigError, headers::HeaderError};

/// Unified stream error covering I/O, header, configuration, and bit-channel misuse.
/// - Ergonomic `From<T>` impls enable `?` across encode/decode.
/// - Only `Io` and `Header` can be caused by the data being processed; the rest are caller bugs.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O error on the underlying reader or writer. Fatal, never retried.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container header rejected (bad magic, short header).
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Invalid `Lz78Config`.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A value was pushed through the bit channel with an unusable width.
    #[error("bit width {width} cannot carry value {value}")]
    BitWidth { width: u8, value: u16 },
}

impl StreamError {
    /// True when the stream was rejected because its magic number did not match.
    pub fn is_invalid_magic(&self) -> bool {
        matches!(self, StreamError::Header(HeaderError::InvalidMagic { .. }))
    }
}

pub type StreamResult<T> = Result<T, StreamError>;
