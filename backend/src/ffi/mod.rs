//! PyO3 wrapper for RandomSource
//!
//! Exposes the factory and the generation accessors to Python simulation
//! code. Errors become `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::error::RandomError;
use crate::rng::{create_prng_with, Algorithm, RandomSource};

fn to_py_err(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a boxed generator
///
/// # Example (from Python)
///
/// ```python
/// from randlib_core import RandomSource
///
/// rng = RandomSource(b"\x01\x02\x03\x04")
/// word = rng.next_uint32()
/// floats = rng.fill_floats(10)
/// ```
#[pyclass(name = "RandomSource")]
pub struct PyRandomSource {
    inner: Box<dyn RandomSource>,
}

#[pymethods]
impl PyRandomSource {
    #[new]
    #[pyo3(signature = (seed, algorithm=None))]
    fn new(seed: &[u8], algorithm: Option<&str>) -> PyResult<Self> {
        let algorithm = match algorithm {
            Some(name) => name.parse::<Algorithm>().map_err(to_py_err)?,
            None => Algorithm::default(),
        };
        Ok(Self {
            inner: create_prng_with(algorithm, seed),
        })
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn next_uint32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_float(&mut self) -> f32 {
        self.inner.next_f32()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn fill_bits<'py>(&mut self, py: Python<'py>, count: usize) -> Bound<'py, PyBytes> {
        let mut buffer = vec![0u8; count];
        self.inner.fill_bits(&mut buffer);
        PyBytes::new_bound(py, &buffer)
    }

    fn fill_floats(&mut self, count: usize) -> Vec<f32> {
        let mut buffer = vec![0.0f32; count];
        self.inner.fill_floats(&mut buffer);
        buffer
    }

    fn __repr__(&self) -> String {
        format!("RandomSource(name='{}')", self.inner.name())
    }
}
