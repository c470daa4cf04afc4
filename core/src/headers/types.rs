// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Container header struct and error type.
//!
//! Design notes:
//! - Fixed 6-byte header: magic (u32) followed by protection bits (u16).
//! - Multi-byte fields are little-endian on disk. A big-endian host swaps them on the way in
//!   and out, so a file written on one host decodes identically on any other.
//! - Magic is checked before any other field is trusted.

use std::fmt;

use byteorder::LittleEndian;

use crate::constants::{DEFAULT_PROTECTION, MAGIC, PERMISSION_MASK};

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 4 + 2;

/// Byte order used for every multi-byte header field on disk.
pub type DiskOrder = LittleEndian;

/// Container header written once in front of the pair stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u32,      // MAGIC marker
    pub protection: u16, // mode bits of the original input
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTION)
    }
}

impl FileHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header for a freshly compressed stream.
    pub fn new(protection: u16) -> Self {
        Self { magic: MAGIC, protection }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC });
        }
        Ok(())
    }

    /// Same header with every multi-byte field byte-swapped.
    /// This is the value a host of the opposite byte order sees before normalization.
    pub fn swapped(&self) -> Self {
        Self {
            magic: self.magic.swap_bytes(),
            protection: self.protection.swap_bytes(),
        }
    }

    /// Permission bits suitable for `chmod` (file-type bits stripped).
    pub fn permissions(&self) -> u16 {
        self.protection & PERMISSION_MASK
    }
}

#[derive(Debug)]
pub enum HeaderError {
    /// Input ended before a full header was read.
    BufferTooShort { have: usize, need: usize },

    /// Magic marker does not identify an LZ78 container.
    InvalidMagic { have: u32, need: u32 },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected 0x{:08x}, got 0x{:08x}", need, have),
        }
    }
}

impl std::error::Error for HeaderError {}
