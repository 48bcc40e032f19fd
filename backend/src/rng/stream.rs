//! Byte-stream adapter shared by all word generators
//!
//! A [`WordCore`] only knows how to produce the next 32-bit word. [`Prng`]
//! turns that word sequence into a byte stream (each word contributes its
//! four little-endian bytes, in order) and keeps the unread tail of a
//! partially consumed word for the next call.
//!
//! This is what makes every accessor consistent with every other:
//! `fill_bits(8)` equals `fill_bits(3)` followed by `fill_bits(5)`, and
//! `next_u32()` always equals `fill_bits(4)` read little-endian, even when
//! the stream is not word-aligned.

use super::seed::SeedWords;
use super::RandomSource;

/// A generator algorithm reduced to its word function
pub trait WordCore: Send {
    /// Stable identifier reported by [`RandomSource::name`]
    const NAME: &'static str;

    fn from_seed(seed: SeedWords) -> Self;

    /// Advance the state and return the next 32-bit word
    fn next_word(&mut self) -> u32;
}

/// Generic [`RandomSource`] over any [`WordCore`]
#[derive(Debug, Clone)]
pub struct Prng<C> {
    core: C,
    /// Bytes of the last generated word; `spare[spare_pos..]` are unread
    spare: [u8; 4],
    spare_pos: usize,
}

impl<C: WordCore> Prng<C> {
    pub fn new(seed: SeedWords) -> Self {
        Self {
            core: C::from_seed(seed),
            spare: [0; 4],
            spare_pos: 4,
        }
    }

    /// Seed from an arbitrary byte buffer (see [`SeedWords::from_bytes`])
    pub fn from_seed_bytes(seed: &[u8]) -> Self {
        Self::new(SeedWords::from_bytes(seed))
    }

    /// Number of buffered bytes the next call will serve before drawing a
    /// fresh word
    pub fn buffered_bytes(&self) -> usize {
        4 - self.spare_pos
    }
}

impl<C: WordCore> RandomSource for Prng<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn fill_bits(&mut self, buffer: &mut [u8]) {
        let take = self.buffered_bytes().min(buffer.len());
        let (head, rest) = buffer.split_at_mut(take);
        head.copy_from_slice(&self.spare[self.spare_pos..self.spare_pos + take]);
        self.spare_pos += take;

        let mut chunks = rest.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.core.next_word().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            self.spare = self.core.next_word().to_le_bytes();
            tail.copy_from_slice(&self.spare[..tail.len()]);
            self.spare_pos = tail.len();
        }
    }

    fn next_u32(&mut self) -> u32 {
        if self.spare_pos == 4 {
            return self.core.next_word();
        }
        let mut bytes = [0u8; 4];
        self.fill_bits(&mut bytes);
        u32::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits 0x03020100, 0x07060504, ... so the byte stream is 0, 1, 2, ...
    #[derive(Debug)]
    struct CountingCore {
        next: u8,
    }

    impl WordCore for CountingCore {
        const NAME: &'static str = "COUNTING";

        fn from_seed(seed: SeedWords) -> Self {
            Self {
                next: seed.seed1 as u8,
            }
        }

        fn next_word(&mut self) -> u32 {
            let mut bytes = [0u8; 4];
            for b in bytes.iter_mut() {
                *b = self.next;
                self.next = self.next.wrapping_add(1);
            }
            u32::from_le_bytes(bytes)
        }
    }

    fn counting() -> Prng<CountingCore> {
        Prng::new(SeedWords::new(0, 0))
    }

    #[test]
    fn test_stream_is_little_endian_words() {
        let mut rng = counting();
        let mut buf = [0u8; 8];
        rng.fill_bits(&mut buf);
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_partial_word_is_kept_for_next_call() {
        let mut rng = counting();
        let mut first = [0u8; 3];
        rng.fill_bits(&mut first);
        assert_eq!(first, [0, 1, 2]);
        assert_eq!(rng.buffered_bytes(), 1);

        let mut second = [0u8; 2];
        rng.fill_bits(&mut second);
        assert_eq!(second, [3, 4]);
        assert_eq!(rng.buffered_bytes(), 3);
    }

    #[test]
    fn test_next_u32_reads_through_buffered_bytes() {
        let mut rng = counting();
        let mut one = [0u8; 1];
        rng.fill_bits(&mut one);

        assert_eq!(rng.next_u32(), u32::from_le_bytes([1, 2, 3, 4]));
        assert_eq!(rng.buffered_bytes(), 3);
    }

    #[test]
    fn test_small_fill_inside_spare_does_not_draw() {
        let mut rng = counting();
        let mut one = [0u8; 1];
        rng.fill_bits(&mut one);
        rng.fill_bits(&mut one);
        rng.fill_bits(&mut one);
        assert_eq!(one, [2]);
        assert_eq!(rng.buffered_bytes(), 1);
        rng.fill_bits(&mut one);
        assert_eq!(one, [3]);
        assert_eq!(rng.buffered_bytes(), 0);
    }

    #[test]
    fn test_zero_length_fill_is_noop() {
        let mut rng = counting();
        rng.fill_bits(&mut []);
        rng.fill_floats(&mut []);
        assert_eq!(rng.buffered_bytes(), 0);
        assert_eq!(rng.next_u32(), 0x0302_0100);
    }

    #[test]
    fn test_name_comes_from_core() {
        assert_eq!(counting().name(), "COUNTING");
    }
}
