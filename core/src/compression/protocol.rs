//! compression/protocol.rs
//! Code-width growth and dictionary-reset rules.
//!
//! The encoder and decoder each keep their own `CodeCounter` and advance it once per
//! dictionary entry. Because both compute the pair width from their counter with
//! `code_bit_width`, they stay in lockstep without the width ever being transmitted.
//! Any divergence here desynchronizes the stream.

use crate::compression::constants::START_CODE;

/// Minimal number of bits needed to represent `code`. Zero still takes one bit.
#[inline]
pub fn code_bit_width(code: u16) -> u8 {
    ((u16::BITS - code.leading_zeros()) as u8).max(1)
}

/// Next-assignable-code counter with the reset rule built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCounter {
    next: u16,
    max_code: u16,
    epoch: u64,
}

impl CodeCounter {
    pub fn new(max_code: u16) -> Self {
        Self { next: START_CODE, max_code, epoch: 0 }
    }

    /// Code the next dictionary entry will receive.
    #[inline]
    pub fn next(&self) -> u16 {
        self.next
    }

    /// Width of the code field for the pair emitted now.
    #[inline]
    pub fn width(&self) -> u8 {
        code_bit_width(self.next)
    }

    /// Number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Code after the current one, wrapped modulo `max_code` without resetting.
    /// Only used to size the terminator after the final pair.
    #[inline]
    pub fn wrapped_next(&self) -> u16 {
        ((self.next as u32 + 1) % self.max_code as u32) as u16
    }

    /// Consume the current code.
    ///
    /// Returns `true` when the code space was exhausted and numbering restarted at
    /// `START_CODE`; the caller must then drop every dictionary entry.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.next += 1;
        if self.next >= self.max_code {
            self.next = START_CODE;
            self.epoch += 1;
            return true;
        }
        false
    }
}
