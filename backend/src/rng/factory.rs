//! Generator factory
//!
//! Hands out generators as `Box<dyn RandomSource>` so callers never name a
//! concrete algorithm. Swapping the default algorithm is a change here only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pseudo_des::PseudoDes;
use super::seed::{SeedDerivation, SeedWords};
use super::xorshift::Xorshift64Star;
use super::RandomSource;
use crate::error::RandomError;

/// Generator algorithms available through the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "psdes", alias = "pseudo-des")]
    PseudoDes,
    #[serde(alias = "xorshift", alias = "xorshift64*")]
    Xorshift64Star,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::PseudoDes, Algorithm::Xorshift64Star];

    /// Canonical lowercase name, accepted back by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::PseudoDes => "pseudo-des",
            Algorithm::Xorshift64Star => "xorshift64*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pseudo-des" | "pseudo_des" | "psdes" => Ok(Algorithm::PseudoDes),
            "xorshift64*" | "xorshift64star" | "xorshift64_star" | "xorshift" => {
                Ok(Algorithm::Xorshift64Star)
            }
            _ => Err(RandomError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Create the default generator from arbitrary seed bytes
///
/// An empty seed is valid and yields the fixed default stream.
///
/// # Example
/// ```
/// use randlib_core::create_prng;
///
/// let mut a = create_prng(&[0x01, 0x02, 0x03, 0x04]);
/// let mut b = create_prng(&[0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
pub fn create_prng(seed: &[u8]) -> Box<dyn RandomSource> {
    create_prng_with(Algorithm::default(), seed)
}

/// Create a generator of the given algorithm from arbitrary seed bytes
pub fn create_prng_with(algorithm: Algorithm, seed: &[u8]) -> Box<dyn RandomSource> {
    let words = SeedWords::from_bytes(seed);
    debug!(
        algorithm = %algorithm,
        seed_len = seed.len(),
        derivation = SeedDerivation::for_len(seed.len()).as_str(),
        "creating PRNG"
    );
    match algorithm {
        Algorithm::PseudoDes => Box::new(PseudoDes::new(words)),
        Algorithm::Xorshift64Star => Box::new(Xorshift64Star::new(words)),
    }
}

/// Create the default generator from a possibly-missing buffer and a
/// declared length
///
/// This is the shape foreign callers hand seeds over in. A missing buffer
/// is only acceptable with a zero length; a declared length beyond the
/// buffer's end is rejected. Only the first `length` bytes are used.
///
/// # Errors
/// [`RandomError::InvalidSeed`] for a missing buffer with nonzero length, or
/// a length past the end of the buffer.
pub fn create_prng_from_parts(
    seed: Option<&[u8]>,
    length: usize,
) -> Result<Box<dyn RandomSource>, RandomError> {
    match seed {
        None if length == 0 => Ok(create_prng(&[])),
        None => Err(RandomError::invalid_seed(format!(
            "missing seed buffer with length {}",
            length
        ))),
        Some(bytes) => {
            let used = bytes.get(..length).ok_or_else(|| {
                RandomError::invalid_seed(format!(
                    "length {} exceeds buffer of {} bytes",
                    length,
                    bytes.len()
                ))
            })?;
            Ok(create_prng(used))
        }
    }
}
