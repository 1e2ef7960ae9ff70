//! Register configuration and state serialization.
//!
//! A register is fully described by two layers:
//! 1. **RegisterConfig** - the seed needed to rebuild it, plus free-form metadata
//! 2. **RegisterState** - its progress: current contents and output log
//!
//! A [`RegisterSnapshot`] bundles both and can be written as JSON or as a
//! compact binary (bincode) blob.
//!
//! # Example
//!
//! ```
//! use lfsr::{Register, RegisterSnapshot};
//!
//! let mut reg = Register::new("10110").unwrap();
//! reg.step_n(3);
//!
//! let json = reg.to_snapshot().to_json().unwrap();
//! let restored = Register::from_snapshot(&RegisterSnapshot::from_json(&json).unwrap()).unwrap();
//!
//! assert_eq!(restored.state_as_bitstring(), reg.state_as_bitstring());
//! assert_eq!(restored.output(), reg.output());
//! ```

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::utils::parse_bitstring;
use crate::{BitField, LfsrError, Register, Result};

/// What is needed to rebuild a register from scratch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterConfig {
    /// Version of the serialization format
    pub version: String,

    /// Seed as '0'/'1' characters
    pub seed: String,

    /// Optional metadata (name, description, etc.)
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl RegisterConfig {
    /// Create a configuration for the given seed.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed: seed.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the configuration.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Progress of a running register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterState {
    /// Current contents as '0'/'1' characters
    pub bits: String,
    /// Output log as '0'/'1' characters, oldest first
    pub output: String,
}

/// Configuration plus optional progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterSnapshot {
    /// Seed and metadata
    pub config: RegisterConfig,

    /// Progress; `None` restores a freshly seeded register
    #[serde(default)]
    pub state: Option<RegisterState>,
}

impl RegisterSnapshot {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LfsrError::Other(format!("Failed to serialize snapshot to JSON: {}", e))
        })
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            LfsrError::Other(format!("Failed to deserialize snapshot from JSON: {}", e))
        })
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }

    /// Write to `path`. A `.json` extension selects JSON, anything else binary.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if is_json(path) {
            std::fs::write(path, self.to_json()?)?;
        } else {
            std::fs::write(path, self.to_binary()?)?;
        }
        Ok(())
    }

    /// Read from `path`, choosing the format the same way as [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if is_json(path) {
            Self::from_json(&std::fs::read_to_string(path)?)
        } else {
            Self::from_binary(&std::fs::read(path)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

impl Register {
    /// Export the seed as a configuration.
    pub fn to_config(&self) -> RegisterConfig {
        RegisterConfig::new(self.initial_state().to_bitstring())
    }

    /// Build a freshly seeded register from a configuration.
    pub fn from_config(config: &RegisterConfig) -> Result<Self> {
        Self::new(&config.seed)
    }

    /// Export seed and progress.
    pub fn to_snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            config: self.to_config(),
            state: Some(RegisterState {
                bits: self.state_as_bitstring(),
                output: self.output(),
            }),
        }
    }

    /// Rebuild a register, restoring progress when the snapshot carries it.
    ///
    /// # Errors
    ///
    /// - [`LfsrError::InvalidInput`] if a stored string contains a non-bit
    /// - [`LfsrError::InvalidInputSize`] if the stored contents are not as
    ///   wide as the seed
    pub fn from_snapshot(snapshot: &RegisterSnapshot) -> Result<Self> {
        let mut reg = Self::from_config(&snapshot.config)?;

        if let Some(state) = &snapshot.state {
            let bits = BitField::from_bitstring(&state.bits)?;
            if bits.num_bits() != reg.size() {
                return Err(LfsrError::InvalidInputSize {
                    expected: reg.size(),
                    actual: bits.num_bits(),
                });
            }
            let output: BitVec<u32, Lsb0> = parse_bitstring(&state.output)?
                .into_iter()
                .map(|b| b == 1)
                .collect();
            reg.restore(bits, output);
        }

        Ok(reg)
    }
}
