use numpy::IntoPyArray;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::ops::noll as mapper;

/// Noll index (or sequence of indices) to `(n, m)`.
#[pyfunction]
pub fn noll2degrees(py: Python<'_>, noll: &PyAny) -> PyResult<PyObject> {
    if let Ok(j) = noll.extract::<i64>() {
        let d = mapper::noll_to_degrees(j)?;
        return Ok((d.n(), d.m()).into_py(py));
    }
    let nolls: Vec<i64> = noll
        .extract()
        .map_err(|_| PyValueError::new_err(format!("input is not integer, input = {}", noll)))?;
    let (n, m) = mapper::nolls_to_degrees(&nolls)?;
    Ok((n.into_pyarray(py), m.into_pyarray(py)).into_py(py))
}

/// `(n, m)` scalars or sequences to Noll indices.
#[pyfunction]
pub fn degrees2noll(py: Python<'_>, n: &PyAny, m: &PyAny) -> PyResult<PyObject> {
    if let (Ok(n), Ok(m)) = (n.extract::<i64>(), m.extract::<i64>()) {
        return Ok(mapper::degrees_to_noll(n, m)?.into_py(py));
    }
    let n: Vec<i64> = n
        .extract()
        .map_err(|_| PyValueError::new_err(format!("Radial degree is not integer, input = {}", n)))?;
    let m: Vec<i64> = m.extract().map_err(|_| {
        PyValueError::new_err(format!("Azimuthal degree is not integer, input = {}", m))
    })?;
    let nolls = mapper::degrees_to_nolls(&n, &m)?;
    Ok(nolls.into_pyarray(py).into_py(py))
}

/// Classical names of the first fifteen Noll indices.
#[pyfunction]
pub fn noll2name(py: Python<'_>) -> PyResult<&PyDict> {
    let names = PyDict::new(py);
    for (j, name) in mapper::NOLL_NAMES.iter() {
        names.set_item(*j, *name)?;
    }
    Ok(names)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(noll2degrees, m)?)?;
    m.add_function(wrap_pyfunction!(degrees2noll, m)?)?;
    m.add_function(wrap_pyfunction!(noll2name, m)?)?;
    Ok(())
}
