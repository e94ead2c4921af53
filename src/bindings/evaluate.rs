use numpy::{IntoPyArray, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::error::ZernikeError;
use crate::ops::batch::{self, Selector};
use crate::ops::grid;
use crate::ops::polynomial::EvalOptions;

/// `zernike(r, theta, 4)`, `zernike(r, theta, [1, 2, 3])`,
/// `zernike(r, theta, n, m)` or `zernike(r, theta, [[n...], [m...]])`.
fn selector_from_args(args: &PyTuple) -> PyResult<Selector> {
    match args.len() {
        1 => {
            let arg = args.get_item(0)?;
            if let Ok(j) = arg.extract::<i64>() {
                return Ok(Selector::SingleNoll(j));
            }
            if let Ok(nolls) = arg.extract::<Vec<i64>>() {
                return Ok(Selector::NollSequence(nolls));
            }
            let rows: Vec<Vec<i64>> = arg
                .extract()
                .map_err(|_| PyValueError::new_err(format!("{} is the wrong shape", arg)))?;
            match <[Vec<i64>; 2]>::try_from(rows) {
                Ok([n, m]) => Ok(Selector::DegreeSequencePair(n, m)),
                Err(rows) => Err(PyValueError::new_err(format!(
                    "expected two rows (n, m), got {}",
                    rows.len()
                ))),
            }
        }
        2 => {
            let n = args.get_item(0)?;
            let m = args.get_item(1)?;
            if let (Ok(n), Ok(m)) = (n.extract::<i64>(), m.extract::<i64>()) {
                return Ok(Selector::DegreePair(n, m));
            }
            let n: Vec<i64> = n
                .extract()
                .map_err(|_| PyValueError::new_err("Radial degree has the wrong shape"))?;
            let m: Vec<i64> = m
                .extract()
                .map_err(|_| PyValueError::new_err("Azimuthal degree has the wrong shape"))?;
            Ok(Selector::DegreeSequencePair(n, m))
        }
        count => Err(ZernikeError::invalid(
            "args",
            format!("{} is an invalid number of arguments", count),
        )
        .into()),
    }
}

#[pyfunction]
#[pyo3(signature = (r, theta, *args, norm = true))]
pub fn zernike<'py>(
    py: Python<'py>,
    r: PyReadonlyArrayDyn<'py, f64>,
    theta: PyReadonlyArrayDyn<'py, f64>,
    args: &PyTuple,
    norm: bool,
) -> PyResult<&'py PyArrayDyn<f64>> {
    let selector = selector_from_args(args)?;
    let options = EvalOptions::default().with_norm(norm);
    let r_arr = r.as_array();
    let theta_arr = theta.as_array();
    let result = batch::zernike(&r_arr, &theta_arr, &selector, &options)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
pub fn cart2pol<'py>(
    py: Python<'py>,
    y: PyReadonlyArrayDyn<'py, f64>,
    x: PyReadonlyArrayDyn<'py, f64>,
) -> PyResult<(&'py PyArrayDyn<f64>, &'py PyArrayDyn<f64>)> {
    let y_arr = y.as_array();
    let x_arr = x.as_array();
    let (r, theta) = grid::cart_to_polar(&y_arr, &x_arr)?;
    Ok((r.into_pyarray(py), theta.into_pyarray(py)))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(zernike, m)?)?;
    m.add_function(wrap_pyfunction!(cart2pol, m)?)?;
    Ok(())
}
