//! RandLib Core - seedable pseudo-random number generation
//!
//! Deterministic random bits for simulation frameworks, behind a single
//! capability trait.
//!
//! # Architecture
//!
//! - **rng**: `RandomSource` trait, generators, seed derivation, factory
//! - **config**: Serde-loadable generator configuration
//! - **stats**: Statistical smoke tests over generator output
//! - **error**: Error taxonomy
//!
//! # Critical Invariants
//!
//! 1. Same seed bytes → same output sequence, for every accessor
//! 2. All accessors read one little-endian byte stream
//! 3. Floats are always in `[0.0, 1.0)`

// Module declarations
pub mod config;
pub mod error;
pub mod rng;
pub mod stats;

// Re-exports for convenience
pub use config::{PrngConfig, SeedSpec};
pub use error::RandomError;
pub use rng::{
    create_prng, create_prng_from_parts, create_prng_with, Algorithm, PseudoDes, RandomSource,
    SeedWords, Xorshift64Star,
};
pub use stats::StatsReport;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn randlib_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyRandomSource>()?;
    Ok(())
}
