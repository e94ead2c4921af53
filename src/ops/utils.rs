use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{Result, ZernikeError};

/// Sample arrays may be scalars, 1-D or 2-D.
pub const MAX_SAMPLE_NDIM: usize = 2;

/// Euclidean norm of the flattened array.
pub fn l2_norm<S, D>(x: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.fold(0.0, |acc, &a| acc + a * a).sqrt()
}

/// Checks that `r` and `theta` pair element-wise and have at most
/// [`MAX_SAMPLE_NDIM`] dimensions.
pub fn check_samples<S, T, D>(r: &ArrayBase<S, D>, theta: &ArrayBase<T, D>) -> Result<()>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    if r.shape() != theta.shape() {
        return Err(ZernikeError::ShapeMismatch {
            expected: r.shape().to_vec(),
            got: theta.shape().to_vec(),
        });
    }
    if r.ndim() > MAX_SAMPLE_NDIM {
        return Err(ZernikeError::TooManyDimensions {
            ndim: r.ndim(),
            max: MAX_SAMPLE_NDIM,
        });
    }
    Ok(())
}
