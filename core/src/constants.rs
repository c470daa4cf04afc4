/// Magic number identifying an LZ78 container.
/// Stored as the first 4 bytes of every compressed file (little-endian on disk).
pub const MAGIC: u32 = 0xBAAD_BAAC;

/// Defaults when `Lz78Config` is built with `Default`
pub const BLOCK: usize = 4096; // 4 KiB I/O block

/// Bits per byte.
pub const BYTE: u32 = 8;

/// Default permission bits used when the input has no meaningful mode (e.g. non-Unix hosts).
pub const DEFAULT_PROTECTION: u16 = 0o644;

/// Mask applied to stored protection bits before handing them to `chmod`.
pub const PERMISSION_MASK: u16 = 0o7777;
