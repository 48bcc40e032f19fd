//! Deterministic random number generation
//!
//! Callers depend only on the [`RandomSource`] capability and obtain
//! instances from the factory ([`create_prng`] and friends). Concrete
//! generators are [`PseudoDes`] (default) and [`Xorshift64Star`].
//!
//! CRITICAL: Same seed bytes → same output, across every accessor.
//!
//! # Output format
//!
//! All accessors read from a single byte stream: generated 32-bit words
//! laid out little-endian. `next_u32()` is the next 4 bytes of that stream,
//! floats consume whole `next_u32()` values (see [`u32_to_unit_f32`]).

mod convert;
mod factory;
mod pseudo_des;
mod seed;
mod stream;
mod xorshift;

pub use convert::{u32_to_unit_f32, words_to_unit_f64};
pub use factory::{create_prng, create_prng_from_parts, create_prng_with, Algorithm};
pub use pseudo_des::{psdes, PseudoDes, PseudoDesCore};
pub use seed::{SeedDerivation, SeedWords, DEFAULT_SEED_WORDS, NATIVE_SEED_LEN};
pub use stream::{Prng, WordCore};
pub use xorshift::{Xorshift64Star, Xorshift64StarCore, STATE_SALT};

/// Seedable source of pseudo-random bits
///
/// Every generation call advances internal state; there is no other way to
/// mutate it. Instances are single-owner: share across threads only behind
/// external locking, or give each thread its own independently seeded
/// instance.
///
/// # Example
/// ```
/// use randlib_core::{create_prng, RandomSource};
///
/// let mut rng = create_prng(&[0x01, 0x02, 0x03, 0x04]);
/// let word = rng.next_u32();
/// let unit = rng.next_f32();
/// assert!((0.0..1.0).contains(&unit));
///
/// let mut bytes = [0u8; 16];
/// rng.fill_bits(&mut bytes);
/// # let _ = word;
/// ```
pub trait RandomSource: Send {
    /// Stable identifier for diagnostics
    fn name(&self) -> &'static str;

    /// Fill `buffer` with the next `buffer.len()` bytes of the stream
    fn fill_bits(&mut self, buffer: &mut [u8]);

    /// Next 4 bytes of the stream as a little-endian u32
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bits(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// Fill `buffer` with floats in `[0.0, 1.0)`, one `next_u32()` each
    fn fill_floats(&mut self, buffer: &mut [f32]) {
        for slot in buffer.iter_mut() {
            *slot = u32_to_unit_f32(self.next_u32());
        }
    }

    /// Single-value form of [`RandomSource::fill_floats`]
    fn next_f32(&mut self) -> f32 {
        u32_to_unit_f32(self.next_u32())
    }

    /// Float in `[0.0, 1.0)` with 53 bits of precision, two `next_u32()` each
    fn next_f64(&mut self) -> f64 {
        let high = self.next_u32();
        let low = self.next_u32();
        words_to_unit_f64(high, low)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill_bits(&mut self, buffer: &mut [u8]) {
        (**self).fill_bits(buffer)
    }

    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn fill_floats(&mut self, buffer: &mut [f32]) {
        (**self).fill_floats(buffer)
    }

    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
