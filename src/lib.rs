//! lfsr - Linear Feedback Shift Register
//!
//! A shift register over a fixed-width bit sequence whose next input bit is
//! the XOR of every current bit. Registers like this underlie pseudo-random
//! bit generation, CRC computation and stream ciphers; this crate models the
//! register itself and the analysis of its state sequence.
//!
//! # Architecture
//!
//! - **BitField**: fixed-width bit storage with shift and parity primitives
//! - **Register**: the state machine (step, reset, output log, period)
//! - **RegisterSnapshot**: JSON/binary persistence of seed and progress
//!
//! # Examples
//!
//! ```
//! use lfsr::Register;
//!
//! let mut reg = Register::new("1000").unwrap();
//! assert_eq!(reg.step_n(5), "00011");
//! assert_eq!(reg.state_as_bitstring(), "1000");
//!
//! let cycle = reg.cycle();
//! assert_eq!(cycle.length, 5);
//! ```
//!
//! # Limits
//!
//! Not a cryptographically secure generator. Taps are fixed. Period detection
//! stores every visited state and is exponential in the register width.
//!
//! # Concurrency
//!
//! A [`Register`] is a plain owned value. `step()` and `period()` update the
//! contents and the output log together, so sharing one across threads needs
//! a single lock around every call.

pub mod bitfield;
pub mod error;
pub mod register;
pub mod register_config;
pub mod utils;

pub use bitfield::{BitField, Word, BITS_PER_WORD};
pub use error::{LfsrError, Result};
pub use register::{Cycle, Register, MIN_BITS};
pub use register_config::{RegisterConfig, RegisterSnapshot, RegisterState};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "lfsr";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
