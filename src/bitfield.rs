//! BitField - register storage using the bitvec crate.
//!
//! This module provides the fixed-width bit sequence that holds the contents
//! of a shift register. It is backed by `bitvec`, which gives cheap shifts and
//! hardware popcount for the parity used as the feedback function.
//!
//! # Design
//!
//! - Uses `BitVec<u32, Lsb0>` for storage (32-bit words, LSB-first ordering)
//! - Index 0 is the leftmost register cell, index N-1 the cell shifted out
//! - Length is fixed after construction; every operation preserves it
//!
//! # Examples
//!
//! ```
//! use lfsr::BitField;
//!
//! let mut bf = BitField::from_bitstring("1011").unwrap();
//! assert_eq!(bf.parity(), 1);
//! assert_eq!(bf.last_bit(), 1);
//!
//! bf.shift_right();
//! assert_eq!(bf.to_bitstring(), "0101");
//! ```

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::utils::{bit_to_char, parse_bitstring};
use crate::Result;

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 32;

/// Fixed-width ordered bit sequence.
///
/// All bit indices are 0-based. Values are read and written as `u8` (0 or 1);
/// any non-zero value written is stored as 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitField {
    /// Underlying bitvec storage with u32 words, LSB0 ordering
    bv: BitVec<Word, Lsb0>,
}

impl BitField {
    /// Create a new BitField with `n` bits, all initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr::BitField;
    ///
    /// let bf = BitField::new(12);
    /// assert_eq!(bf.num_bits(), 12);
    /// assert!(bf.is_zero());
    /// ```
    #[inline]
    pub fn new(n: usize) -> Self {
        Self {
            bv: BitVec::repeat(false, n),
        }
    }

    /// Create a BitField from bit values. Any non-zero value is a 1.
    pub fn from_bits(vals: &[u8]) -> Self {
        let mut bf = Self::new(vals.len());
        for (i, &val) in vals.iter().enumerate() {
            bf.assign_bit(i, val);
        }
        bf
    }

    /// Parse a string of '0'/'1' characters, index 0 first.
    ///
    /// Fails with [`LfsrError::InvalidInput`](crate::LfsrError::InvalidInput)
    /// on the first character that is not a bit.
    pub fn from_bitstring(s: &str) -> Result<Self> {
        Ok(Self::from_bits(&parse_bitstring(s)?))
    }

    /// Get total number of bits.
    #[inline(always)]
    pub fn num_bits(&self) -> usize {
        self.bv.len()
    }

    /// Get number of storage words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.bv.as_raw_slice().len()
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get bit at position `b` (returns 0 or 1 as u8).
    ///
    /// # Panics
    ///
    /// Panics if `b >= num_bits`.
    #[inline]
    pub fn get_bit(&self, b: usize) -> u8 {
        debug_assert!(b < self.bv.len(), "bit index {} out of bounds (length: {})", b, self.bv.len());
        if self.bv[b] { 1 } else { 0 }
    }

    /// Assign bit at position `b` to given value (0 or 1).
    ///
    /// Any non-zero value is treated as 1.
    #[inline]
    pub fn assign_bit(&mut self, b: usize, val: u8) {
        debug_assert!(b < self.bv.len(), "bit index {} out of bounds (length: {})", b, self.bv.len());
        self.bv.set(b, val > 0);
    }

    /// Value of the rightmost cell (index N-1), the one a right shift drops.
    ///
    /// # Panics
    ///
    /// Panics if the field is empty.
    #[inline]
    pub fn last_bit(&self) -> u8 {
        self.get_bit(self.bv.len() - 1)
    }

    // =========================================================================
    // Register Operations
    // =========================================================================

    /// Shift every bit one cell towards the end, filling index 0 with 0.
    ///
    /// Produces `[0] + bits[0..N-1]`. The old last bit is discarded, so read
    /// it with [`last_bit`](Self::last_bit) first if it matters.
    #[inline]
    pub fn shift_right(&mut self) {
        if !self.bv.is_empty() {
            self.bv.shift_right(1);
        }
    }

    /// XOR of every bit in the field.
    ///
    /// The XOR-reduction of a bit sequence is the parity of its population
    /// count, so this runs on popcount rather than a bit-by-bit fold.
    #[inline]
    pub fn parity(&self) -> u8 {
        (self.num_set() & 1) as u8
    }

    // =========================================================================
    // Vector Operations
    // =========================================================================

    /// Get all bit values as vector of 0s and 1s.
    pub fn get_bits(&self) -> Vec<u8> {
        self.bv.iter().map(|b| if *b { 1 } else { 0 }).collect()
    }

    /// Render as a string of '0'/'1' characters, index 0 first.
    pub fn to_bitstring(&self) -> String {
        self.bv.iter().map(|b| bit_to_char(*b as u8)).collect()
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn num_set(&self) -> usize {
        self.bv.count_ones()
    }

    /// True if no bit is set.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bv.not_any()
    }

    /// Get direct read-only access to word storage.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        self.bv.as_raw_slice()
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bitstring())
    }
}

// =============================================================================
// Comparison and Hashing
// =============================================================================

impl PartialEq for BitField {
    /// Compare BitFields using word-level comparison.
    ///
    /// Padding bits past `num_bits` are never written, so raw words compare
    /// equal exactly when the live bits do.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bv.len() == other.bv.len() && self.bv.as_raw_slice() == other.bv.as_raw_slice()
    }
}

impl Eq for BitField {}

impl Hash for BitField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bv.len().hash(state);
        self.bv.as_raw_slice().hash(state);
    }
}
