// ## src/compression/mod.rs

//! compression/mod.rs
//! LZ78 compression and decompression over the bit channel.
//!
//! Notes:
//! - `trie` (encoder) and `word` (decoder) are mirror images of the same dictionary.
//! - `protocol` is the only place the code width and reset rule are defined; both
//!   directions go through it.

pub mod constants;
pub mod types;
pub mod protocol;
pub mod trie;
pub mod word;
pub mod encode;
pub mod decode;

pub use constants::*;
pub use types::*;
pub use protocol::*;
pub use encode::*;
pub use decode::*;
