//! Register - the linear feedback shift register state machine.
//!
//! A [`Register`] holds a fixed-width bit sequence. Every clock tick
//! ([`Register::step`]) shifts the sequence one cell to the right, records the
//! bit that falls off the end in an output log, and injects the XOR of all
//! pre-shift bits at index 0. The taps are fixed: every cell feeds back.
//!
//! # Examples
//!
//! ```
//! use lfsr::Register;
//!
//! let mut reg = Register::new("1000").unwrap();
//! reg.step();
//! assert_eq!(reg.state_as_bitstring(), "1100");
//! assert_eq!(reg.output(), "0");
//!
//! assert_eq!(reg.period(), 5);
//! // period() leaves the register reset to its seed
//! assert_eq!(reg.state_as_bitstring(), "1000");
//! assert_eq!(reg.output(), "");
//! ```

use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::utils::{bit_to_char, bits_to_string};
use crate::{BitField, LfsrError, Result};

/// Smallest register width for which the feedback function is defined.
pub const MIN_BITS: usize = 2;

/// Breakdown of the state sequence produced from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Steps taken before the first state that lies on the cycle
    pub transient: usize,
    /// Number of distinct states on the cycle
    pub length: usize,
}

impl Cycle {
    /// Steps until the first repeated state, `transient + length`.
    pub fn period(&self) -> usize {
        self.transient + self.length
    }
}

/// Fibonacci-style LFSR with every cell tapped.
#[derive(Clone, Debug)]
pub struct Register {
    /// Seed restored by `reset()`; never modified after construction
    initial_state: BitField,
    /// Current register contents
    bits: BitField,
    /// Every bit shifted out since the last clear or reset, oldest first
    output_log: BitVec<u32, Lsb0>,
}

impl Register {
    /// Create a register from a seed of '0'/'1' characters.
    ///
    /// # Errors
    ///
    /// - [`LfsrError::InvalidInput`] if any character is not a bit
    /// - [`LfsrError::InvalidConfiguration`] if the seed has fewer than 2 bits
    pub fn new(seed: &str) -> Result<Self> {
        Self::from_field(BitField::from_bitstring(seed)?)
    }

    /// Create a register from bit values. Any non-zero value is a 1.
    pub fn from_bits(seed: &[u8]) -> Result<Self> {
        Self::from_field(BitField::from_bits(seed))
    }

    /// Create a register of `num_bits` cells with a uniformly random seed.
    pub fn random<R: Rng>(num_bits: usize, rng: &mut R) -> Result<Self> {
        let seed: Vec<u8> = (0..num_bits).map(|_| rng.gen_bool(0.5) as u8).collect();
        Self::from_bits(&seed)
    }

    pub(crate) fn from_field(seed: BitField) -> Result<Self> {
        if seed.num_bits() < MIN_BITS {
            return Err(LfsrError::InvalidConfiguration {
                length: seed.num_bits(),
            });
        }

        debug!("new register: seed={} width={}", seed, seed.num_bits());

        Ok(Self {
            bits: seed.clone(),
            initial_state: seed,
            output_log: BitVec::new(),
        })
    }

    /// Overwrite progress. Caller guarantees `bits` is as wide as the seed.
    pub(crate) fn restore(&mut self, bits: BitField, output_log: BitVec<u32, Lsb0>) {
        debug_assert_eq!(bits.num_bits(), self.initial_state.num_bits());
        self.bits = bits;
        self.output_log = output_log;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The seed this register was built from.
    pub fn initial_state(&self) -> &BitField {
        &self.initial_state
    }

    /// Current register contents.
    pub fn state(&self) -> &BitField {
        &self.bits
    }

    /// Current register contents as '0'/'1' characters, index 0 first.
    pub fn state_as_bitstring(&self) -> String {
        self.bits.to_bitstring()
    }

    /// Number of cells in the register.
    pub fn size(&self) -> usize {
        self.bits.num_bits()
    }

    /// Bits shifted out since the last clear or reset, oldest first.
    pub fn output(&self) -> String {
        self.output_log.iter().map(|b| bit_to_char(*b as u8)).collect()
    }

    /// Output log as bit values, oldest first.
    pub fn output_bits(&self) -> Vec<u8> {
        self.output_log.iter().map(|b| *b as u8).collect()
    }

    /// Number of bits in the output log.
    pub fn output_len(&self) -> usize {
        self.output_log.len()
    }

    /// Empty the output log. Register contents are unchanged.
    pub fn clear_output(&mut self) {
        self.output_log.clear();
    }

    // =========================================================================
    // Transition
    // =========================================================================

    /// The bit the next `step()` will inject at index 0.
    #[inline]
    pub fn feedback_bit(&self) -> u8 {
        self.bits.parity()
    }

    /// Advance the register one clock tick and return the bit shifted out.
    ///
    /// Feedback is computed from the pre-shift contents; the shift then drops
    /// the last cell and the feedback bit overwrites the zero fill at index 0.
    pub fn step(&mut self) -> u8 {
        let out = self.bits.last_bit();
        self.output_log.push(out == 1);

        let c = self.feedback_bit();
        self.bits.shift_right();
        self.bits.assign_bit(0, c);

        trace!("step: out={} feedback={} state={}", out, c, self.bits);
        out
    }

    /// Run `k` steps and return the bits emitted by this call.
    pub fn step_n(&mut self, k: usize) -> String {
        bits_to_string((0..k).map(|_| self.step()))
    }

    /// Restore the seed and empty the output log.
    pub fn reset(&mut self) {
        self.bits = self.initial_state.clone();
        self.output_log.clear();
        debug!("reset register to seed {}", self.initial_state);
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Number of steps from the seed until a state repeats.
    ///
    /// **This resets the register.** The scan starts from the seed, discarding
    /// any progress, and the register is reset again before returning, so
    /// afterwards the contents equal the seed and the output log is empty.
    /// Use [`cycle`](Self::cycle) to measure without touching the register.
    ///
    /// The result lies in `[1, 2^N]`. The scan remembers every visited state,
    /// so time and memory are exponential in the register width.
    pub fn period(&mut self) -> usize {
        self.reset();

        let mut seen = HashSet::new();
        let mut p = 0;
        loop {
            seen.insert(self.bits.clone());
            self.step();
            p += 1;
            if seen.contains(&self.bits) {
                break;
            }
        }

        self.reset();
        debug!("period of seed {}: {}", self.initial_state, p);
        p
    }

    /// Transient and cycle length of the sequence started from the seed.
    ///
    /// Works on a scratch copy; this register is left untouched.
    pub fn cycle(&self) -> Cycle {
        let mut scratch = Self {
            initial_state: self.initial_state.clone(),
            bits: self.initial_state.clone(),
            output_log: BitVec::new(),
        };

        let mut first_seen = HashMap::new();
        let mut t = 0;
        let transient = loop {
            first_seen.insert(scratch.bits.clone(), t);
            scratch.step();
            t += 1;
            if let Some(&first) = first_seen.get(&scratch.bits) {
                break first;
            }
        };

        let cycle = Cycle {
            transient,
            length: t - transient,
        };
        debug!(
            "cycle of seed {}: transient={} length={}",
            self.initial_state, cycle.transient, cycle.length
        );
        cycle
    }
}

impl fmt::Display for Register {
    /// Boxed cells with arrows, then the output trail, between dash rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-----     ".repeat(self.size());
        let cells = self
            .bits
            .get_bits()
            .iter()
            .map(|b| format!("| {} | --> ", b))
            .join("");
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}{}", cells, self.output())?;
        write!(f, "{}", rule)
    }
}
