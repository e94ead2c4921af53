//! Polar sample grids.
//!
//! The polynomial evaluators only consume polar coordinates; these helpers
//! prepare them from Cartesian ones.

use ndarray::{Array, Array1, Array2, ArrayView, Dimension, Zip};

use crate::error::{Result, ZernikeError};

/// Cartesian to polar: `r = hypot(x, y)`, `theta = atan2(y, x)`.
pub fn cart_to_polar<D: Dimension>(
    y: &ArrayView<f64, D>,
    x: &ArrayView<f64, D>,
) -> Result<(Array<f64, D>, Array<f64, D>)> {
    if y.shape() != x.shape() {
        return Err(ZernikeError::ShapeMismatch {
            expected: y.shape().to_vec(),
            got: x.shape().to_vec(),
        });
    }
    let r = Zip::from(y).and(x).map_collect(|&y, &x| x.hypot(y));
    let theta = Zip::from(y).and(x).map_collect(|&y, &x| y.atan2(x));
    Ok((r, theta))
}

/// `size x size` grid over `[-1, 1] x [-1, 1]` in polar form.
///
/// Rows follow `y` and columns follow `x`, so `(r, theta)[[i, j]]` is the
/// point `(x_j, y_i)`.
pub fn square_grid(size: usize) -> Result<(Array2<f64>, Array2<f64>)> {
    if size < 2 {
        return Err(ZernikeError::invalid(
            "size",
            format!("grid needs at least 2 points per side, input = {}", size),
        ));
    }
    let axis = Array1::linspace(-1.0, 1.0, size);
    let xx = Array2::from_shape_fn((size, size), |(_, j)| axis[j]);
    let yy = Array2::from_shape_fn((size, size), |(i, _)| axis[i]);
    cart_to_polar(&yy.view(), &xx.view())
}
