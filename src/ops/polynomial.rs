//! Full Zernike polynomial: radial factor, angular factor and the discrete
//! L2 normalization.

use ndarray::{Array, ArrayView, Dimension, Zip};
use num_integer::Integer;

use crate::error::Result;
use crate::ops::radial::radial_zernike;
use crate::ops::utils::{check_samples, l2_norm};

/// Evaluation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Divide every output array by its own Euclidean norm over the
    /// supplied samples. The scale therefore depends on the sample grid.
    pub norm: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { norm: true }
    }
}

impl EvalOptions {
    pub fn with_norm(mut self, norm: bool) -> Self {
        self.norm = norm;
        self
    }
}

/// Scale `zern` to unit Euclidean norm. An all-zero array is left as is.
pub fn normalize_l2<D: Dimension>(zern: &mut Array<f64, D>) {
    let norm = l2_norm(zern);
    if norm > 0.0 {
        zern.mapv_inplace(|v| v / norm);
    }
}

/// Zernike polynomial `(n, m)` over polar samples `(r, theta)`.
///
/// The degree pair is not validated here: if `m - n` is odd (or `|m| > n`)
/// the result is all zeros. Use [`crate::ops::batch::zernike`] for checked
/// degree pairs and Noll indices.
pub fn zernike_polynomial<D: Dimension>(
    r: &ArrayView<f64, D>,
    theta: &ArrayView<f64, D>,
    n: i64,
    m: i64,
    options: &EvalOptions,
) -> Result<Array<f64, D>> {
    check_samples(r, theta)?;
    Ok(evaluate(r, theta, n, m, options))
}

/// Same as [`zernike_polynomial`] without the sample checks; `r` and `theta`
/// must have the same shape.
pub(crate) fn evaluate<D: Dimension>(
    r: &ArrayView<f64, D>,
    theta: &ArrayView<f64, D>,
    n: i64,
    m: i64,
    options: &EvalOptions,
) -> Array<f64, D> {
    if (m - n).is_odd() {
        return Array::zeros(r.raw_dim());
    }
    let mut zern = radial_zernike(r, n, m);
    let mf = m as f64;
    if m < 0 {
        // odd (sine) term
        Zip::from(&mut zern)
            .and(theta)
            .for_each(|z, &t| *z *= (mf * t).sin());
    } else {
        Zip::from(&mut zern)
            .and(theta)
            .for_each(|z, &t| *z *= (mf * t).cos());
    }
    if options.norm {
        normalize_l2(&mut zern);
    }
    zern
}
