//! xorshift64* random number generator
//!
//! Fast 64-bit generator, kept as the alternative to the pseudo-DES
//! default.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output,
//! which is served as two 32-bit words (low half first).
//!
//! # Seeding
//!
//! The two seed words are packed into one u64 (`seed2` high) and XORed with
//! [`STATE_SALT`], so the all-zero seed lands on an ordinary state. The
//! seed equal to `STATE_SALT` would give the forbidden zero state; it is
//! moved to state 1 and shares its stream with seed `STATE_SALT ^ 1`.

use super::seed::SeedWords;
use super::stream::{Prng, WordCore};

const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Mixed into the packed seed before use (64-bit golden ratio)
pub const STATE_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Word function of the xorshift64* generator
#[derive(Debug, Clone)]
pub struct Xorshift64StarCore {
    /// Internal state (64-bit, never zero)
    state: u64,
    /// High half of the last 64-bit output, not yet served
    high: Option<u32>,
}

impl Xorshift64StarCore {
    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MULTIPLIER)
    }
}

impl WordCore for Xorshift64StarCore {
    const NAME: &'static str = "XORSHIFT64STAR";

    fn from_seed(seed: SeedWords) -> Self {
        // Ensure state is never zero (xorshift requirement)
        let state = match seed.to_u64() ^ STATE_SALT {
            0 => 1,
            s => s,
        };
        Self { state, high: None }
    }

    fn next_word(&mut self) -> u32 {
        if let Some(high) = self.high.take() {
            return high;
        }
        let value = self.next_u64();
        self.high = Some((value >> 32) as u32);
        value as u32
    }
}

/// xorshift64* generator with the shared byte-stream accessors
pub type Xorshift64Star = Prng<Xorshift64StarCore>;
