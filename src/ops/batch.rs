use log::{debug, trace};
use ndarray::{Array, ArrayD, ArrayView, Axis, Dimension, IxDyn};
use rayon::prelude::*;

use crate::error::{Result, ZernikeError};
use crate::ops::noll::{noll_to_degrees, Degrees};
use crate::ops::polynomial::{evaluate, EvalOptions};
use crate::ops::utils::check_samples;

/// Which polynomials to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    SingleNoll(i64),
    NollSequence(Vec<i64>),
    DegreePair(i64, i64),
    /// Radial degrees and azimuthal degrees, paired element-wise
    DegreeSequencePair(Vec<i64>, Vec<i64>),
}

impl Selector {
    /// Flat list of validated degree pairs in request order.
    pub fn resolve(&self) -> Result<Vec<Degrees>> {
        let pairs = match self {
            Selector::SingleNoll(j) => vec![noll_to_degrees(*j)?],
            Selector::NollSequence(nolls) => nolls
                .iter()
                .map(|&j| noll_to_degrees(j))
                .collect::<Result<Vec<_>>>()?,
            Selector::DegreePair(n, m) => vec![Degrees::new(*n, *m)?],
            Selector::DegreeSequencePair(n, m) => {
                if n.len() != m.len() {
                    return Err(ZernikeError::ShapeMismatch {
                        expected: vec![n.len()],
                        got: vec![m.len()],
                    });
                }
                n.iter()
                    .zip(m.iter())
                    .map(|(&nn, &mm)| Degrees::new(nn, mm))
                    .collect::<Result<Vec<_>>>()?
            }
        };
        if pairs.is_empty() {
            return Err(ZernikeError::invalid(
                "selector",
                "at least one polynomial must be requested",
            ));
        }
        for d in &pairs {
            trace!("resolved {}", d);
        }
        Ok(pairs)
    }
}

impl From<i64> for Selector {
    fn from(j: i64) -> Self {
        Selector::SingleNoll(j)
    }
}

impl From<Vec<i64>> for Selector {
    fn from(nolls: Vec<i64>) -> Self {
        Selector::NollSequence(nolls)
    }
}

impl From<&[i64]> for Selector {
    fn from(nolls: &[i64]) -> Self {
        Selector::NollSequence(nolls.to_vec())
    }
}

impl From<(i64, i64)> for Selector {
    fn from((n, m): (i64, i64)) -> Self {
        Selector::DegreePair(n, m)
    }
}

impl From<Degrees> for Selector {
    fn from(d: Degrees) -> Self {
        Selector::DegreePair(d.n(), d.m())
    }
}

impl From<(Vec<i64>, Vec<i64>)> for Selector {
    fn from((n, m): (Vec<i64>, Vec<i64>)) -> Self {
        Selector::DegreeSequencePair(n, m)
    }
}

/// Evaluates every polynomial picked by `selector` over `(r, theta)`.
///
/// The result has shape `[k, ..r.shape()]` for `k` requested polynomials,
/// or `r.shape()` when `k == 1`. Polynomials are evaluated in parallel and
/// stacked in request order.
pub fn zernike<D: Dimension>(
    r: &ArrayView<f64, D>,
    theta: &ArrayView<f64, D>,
    selector: &Selector,
    options: &EvalOptions,
) -> Result<ArrayD<f64>> {
    check_samples(r, theta)?;
    let pairs = selector.resolve()?;
    debug!(
        "evaluating {} zernike polynomial(s) over samples of shape {:?} (norm = {})",
        pairs.len(),
        r.shape(),
        options.norm
    );

    let r = r.view().into_dyn();
    let theta = theta.view().into_dyn();

    let mut shape = Vec::with_capacity(r.ndim() + 1);
    shape.push(pairs.len());
    shape.extend_from_slice(r.shape());
    let mut stack = ArrayD::<f64>::zeros(IxDyn(&shape));

    stack
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut slot)| {
            let d = pairs[i];
            slot.assign(&evaluate(&r, &theta, d.n(), d.m(), options));
        });

    if pairs.len() == 1 {
        Ok(stack.index_axis_move(Axis(0), 0))
    } else {
        Ok(stack)
    }
}

/// Single polynomial by Noll index, keeping the sample dimensionality.
pub fn zernike_noll<D: Dimension>(
    r: &ArrayView<f64, D>,
    theta: &ArrayView<f64, D>,
    noll: i64,
    options: &EvalOptions,
) -> Result<Array<f64, D>> {
    check_samples(r, theta)?;
    let d = noll_to_degrees(noll)?;
    Ok(evaluate(r, theta, d.n(), d.m(), options))
}

/// Single polynomial by degree pair. Unlike [`zernike_polynomial`] the pair
/// is validated, so an odd `n - m` is an error instead of zeros.
///
/// [`zernike_polynomial`]: crate::ops::polynomial::zernike_polynomial
pub fn zernike_nm<D: Dimension>(
    r: &ArrayView<f64, D>,
    theta: &ArrayView<f64, D>,
    n: i64,
    m: i64,
    options: &EvalOptions,
) -> Result<Array<f64, D>> {
    check_samples(r, theta)?;
    let d = Degrees::new(n, m)?;
    Ok(evaluate(r, theta, d.n(), d.m(), options))
}
