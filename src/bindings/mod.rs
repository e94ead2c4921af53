mod evaluate;
mod noll;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::ZernikeError;

impl From<ZernikeError> for PyErr {
    fn from(err: ZernikeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Zernike polynomials and Noll index conversion
#[pymodule]
pub fn zernike(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Polynomial evaluation
    evaluate::register(m)?;
    // Noll index <-> (n, m)
    noll::register(m)?;
    Ok(())
}
