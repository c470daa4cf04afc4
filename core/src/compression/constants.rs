//! compression/constants.rs
//! Code space layout shared by the encoder and decoder.

/// Number of distinct input symbols (one byte each).
pub const ALPHABET: usize = 256;

/// Root of the trie / the empty word. Never emitted as a dictionary entry.
pub const EMPTY_CODE: u16 = 0;

/// End-of-stream marker. Never assigned to a dictionary entry.
pub const STOP_CODE: u16 = 1;

/// First code handed out to a new dictionary entry.
pub const START_CODE: u16 = 2;

/// Default ceiling of the code space. Reaching it resets the dictionary.
pub const MAX_CODE: u16 = u16::MAX;

/// Width of the symbol field of every pair.
pub const SYMBOL_BITS: u8 = 8;

/// Widest code the bit channel accepts.
pub const MAX_CODE_BITS: u8 = 16;
