//! compression/types.rs
//! Run configuration shared by the encoder and decoder.
use thiserror::Error;

use crate::compression::constants::{MAX_CODE, START_CODE};
use crate::constants::BLOCK;

/// Parameters of one encode or decode run.
///
/// Neither field is recorded in the container: a stream must be decoded with the same
/// `max_code` it was encoded with. `block_size` only affects I/O batching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz78Config {
    /// Ceiling of the code space; reaching it resets the dictionary.
    pub max_code: u16,
    /// Size of each I/O block buffer in bytes.
    pub block_size: usize,
}

impl Default for Lz78Config {
    fn default() -> Self {
        Self { max_code: MAX_CODE, block_size: BLOCK }
    }
}

impl Lz78Config {
    pub fn with_max_code(mut self, max_code: u16) -> Self {
        self.max_code = max_code;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_code <= START_CODE {
            return Err(ConfigError::MaxCodeTooSmall { max_code: self.max_code, min: START_CODE + 1 });
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }

    /// Largest number of dictionary entries alive at once.
    pub fn dictionary_capacity(&self) -> usize {
        self.max_code.saturating_sub(START_CODE) as usize
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_code {max_code} leaves no assignable codes (minimum {min})")]
    MaxCodeTooSmall { max_code: u16, min: u16 },

    #[error("block_size must be non-zero")]
    ZeroBlockSize,
}
