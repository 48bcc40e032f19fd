//! Bit-to-float mappings
//!
//! These are part of the observable output format: two implementations
//! seeded identically must agree bit-for-bit on every float they produce.
//!
//! - `f32`: top 24 bits of one word, scaled by 2^-24 → `[0, 1 - 2^-24]`
//! - `f64`: top 32 bits of the first word and top 21 bits of the second,
//!   53 bits total, scaled by 2^-53 → `[0, 1 - 2^-53]`
//!
//! Both scales are exact powers of two, so 1.0 is unreachable.

const F32_SCALE: f32 = 1.0 / (1u32 << 24) as f32;
const F64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Map one 32-bit word into `[0.0, 1.0)`
///
/// # Example
/// ```
/// use randlib_core::rng::u32_to_unit_f32;
///
/// assert_eq!(u32_to_unit_f32(0), 0.0);
/// assert!(u32_to_unit_f32(u32::MAX) < 1.0);
/// ```
#[inline]
pub fn u32_to_unit_f32(word: u32) -> f32 {
    (word >> 8) as f32 * F32_SCALE
}

/// Map two 32-bit words (high first) into `[0.0, 1.0)`
#[inline]
pub fn words_to_unit_f64(high: u32, low: u32) -> f64 {
    let bits = ((high as u64) << 21) | (low >> 11) as u64;
    bits as f64 * F64_SCALE
}
