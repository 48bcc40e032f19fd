//! Generator configuration
//!
//! Loaded from JSON by the CLI and by embedding frameworks:
//!
//! ```json
//! { "algorithm": "pseudo_des", "seed": "0x01020304" }
//! ```
//!
//! `seed` accepts an integer (its 8 little-endian bytes), a hex string
//! (optional `0x` prefix), or an array of bytes. Both fields are optional.

use serde::{Deserialize, Serialize};

use crate::error::RandomError;
use crate::rng::{create_prng_with, Algorithm, RandomSource};

/// Seed material as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedSpec {
    Integer(u64),
    Hex(String),
    Bytes(Vec<u8>),
}

impl Default for SeedSpec {
    fn default() -> Self {
        SeedSpec::Bytes(Vec::new())
    }
}

impl SeedSpec {
    /// Resolve to the raw seed bytes handed to the factory
    ///
    /// # Errors
    /// [`RandomError::InvalidSeed`] if a hex string has odd length or
    /// non-hex characters.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RandomError> {
        match self {
            SeedSpec::Integer(value) => Ok(value.to_le_bytes().to_vec()),
            SeedSpec::Hex(text) => decode_hex(text),
            SeedSpec::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>, RandomError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.len() % 2 != 0 {
        return Err(RandomError::invalid_seed(format!(
            "hex seed '{}' has an odd number of digits",
            text
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RandomError::invalid_seed(format!(
            "hex seed '{}' contains non-hex characters",
            text
        )));
    }
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| RandomError::invalid_seed(format!("bad hex pair in '{}'", text)))
        })
        .collect()
}

/// Which generator to build and how to seed it
///
/// # Example
/// ```
/// use randlib_core::PrngConfig;
///
/// let config = PrngConfig::from_json(r#"{"algorithm": "xorshift64_star", "seed": 42}"#).unwrap();
/// let rng = config.build().unwrap();
/// assert_eq!(rng.name(), "XORSHIFT64STAR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrngConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub seed: SeedSpec,
}

impl PrngConfig {
    pub fn new(algorithm: Algorithm, seed: SeedSpec) -> Self {
        Self { algorithm, seed }
    }

    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured generator
    pub fn build(&self) -> Result<Box<dyn RandomSource>, RandomError> {
        let seed = self.seed.to_bytes()?;
        Ok(create_prng_with(self.algorithm, &seed))
    }
}
