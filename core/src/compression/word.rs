//! compression/word.rs
//! Decoder dictionary: code → byte sequence.
//!
//! Every word owns its bytes. A new word is its prefix's bytes plus one symbol, copied;
//! words never share storage.

use crate::compression::constants::EMPTY_CODE;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word(Box<[u8]>);

impl Word {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `prefix` followed by `sym`.
    pub fn append(prefix: &[u8], sym: u8) -> Self {
        let mut bytes = Vec::with_capacity(prefix.len() + 1);
        bytes.extend_from_slice(prefix);
        bytes.push(sym);
        Self(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed-capacity slot table indexed by code.
#[derive(Debug)]
pub struct WordTable {
    slots: Vec<Option<Word>>,
    live: usize,
}

impl WordTable {
    /// Table with `capacity` slots (the run's `max_code`). Slot `EMPTY_CODE` holds the
    /// empty word for the table's whole life.
    pub fn new(capacity: u16) -> Self {
        let mut slots: Vec<Option<Word>> = (0..capacity.max(1)).map(|_| None).collect();
        slots[EMPTY_CODE as usize] = Some(Word::empty());
        Self { slots, live: 0 }
    }

    /// Bytes for `code`. Unassigned or out-of-range codes (corrupt input only) expand to
    /// the empty word.
    pub fn get(&self, code: u16) -> &[u8] {
        match self.slots.get(code as usize) {
            Some(Some(word)) => word.as_bytes(),
            _ => &[],
        }
    }

    pub fn contains(&self, code: u16) -> bool {
        matches!(self.slots.get(code as usize), Some(Some(_)))
    }

    /// New word for the pair `(code, sym)`.
    pub fn extend(&self, code: u16, sym: u8) -> Word {
        Word::append(self.get(code), sym)
    }

    /// Store `word` at `code`, replacing whatever was there.
    pub fn insert(&mut self, code: u16, word: Word) {
        if code == EMPTY_CODE {
            return;
        }
        if let Some(slot) = self.slots.get_mut(code as usize) {
            if slot.replace(word).is_none() {
                self.live += 1;
            }
        }
    }

    /// Drop every word except the empty one.
    pub fn reset(&mut self) {
        for (code, slot) in self.slots.iter_mut().enumerate() {
            if code != EMPTY_CODE as usize {
                *slot = None;
            }
        }
        self.live = 0;
    }

    /// Number of learned words (the empty word excluded).
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
