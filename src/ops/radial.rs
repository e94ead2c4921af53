//! Radial part of the Zernike polynomial.
//!
//! ```text
//! R(r; n, m) = r^n · C(n, (n+m)/2) · ₂F₁(-(n+m)/2, -(n-m)/2; -n; r⁻²)    r <= 1
//! R(r; n, m) = 0                                                       r >  1
//! ```
//!
//! Both upper parameters are non-positive integers, so the series stops
//! after `(n - |m|)/2 + 1` terms. [`radial_coefficients`] expands it into
//! coefficients of `r^(n-2k)`. Those alternate in sign and grow like `2.4^n`,
//! so values are computed with Kintner's three-term recurrence in `n`
//! instead, starting from `R(m, m) = r^m` and `R(m+2, m)`. `r⁻²` is never
//! formed and `r = 0` stays finite for every degree.

use ndarray::{Array, ArrayView, Dimension};
use num_integer::Integer;

use crate::error::{Result, ZernikeError};
use crate::ops::noll::Degrees;

/// Largest radial degree [`radial_coefficients`] expands. Coefficient
/// magnitudes reach about `1e192` here and overflow `f64` near `n = 800`.
pub const MAX_EXPANDED_DEGREE: i64 = 512;

/// Number of terms after which ₂F₁ terminates when `x` is a
/// non-positive integer upper parameter.
fn terminating_order(x: f64) -> Option<usize> {
    if x <= 0.0 && x == x.floor() {
        Some((-x) as usize)
    } else {
        None
    }
}

/// Coefficients of `z^k` of a terminating ₂F₁(a, b; c; z).
///
/// Returns `None` if neither `a` nor `b` is a non-positive integer, or if
/// `c` hits a pole before the series terminates.
pub fn hyp2f1_terms(a: f64, b: f64, c: f64) -> Option<Vec<f64>> {
    let order = match (terminating_order(a), terminating_order(b)) {
        (Some(p), Some(q)) => p.min(q),
        (Some(p), None) | (None, Some(p)) => p,
        (None, None) => return None,
    };

    let mut terms = Vec::with_capacity(order + 1);
    let mut term = 1.0;
    terms.push(term);
    for k in 1..=order {
        let k_f = k as f64;
        let denom = (c + k_f - 1.0) * k_f;
        if denom == 0.0 {
            return None;
        }
        term *= (a + k_f - 1.0) * (b + k_f - 1.0) / denom;
        terms.push(term);
    }
    Some(terms)
}

/// Terminating Gauss hypergeometric function ₂F₁(a, b; c; z).
pub fn hyp2f1_terminating(a: f64, b: f64, c: f64, z: f64) -> Option<f64> {
    hyp2f1_terms(a, b, c).map(|terms| terms.iter().rev().fold(0.0, |acc, &t| acc * z + t))
}

fn binomial(n: i64, k: i64) -> f64 {
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}

/// Coefficients of the expanded radial polynomial; `c[k]` multiplies
/// `r^(n - 2k)`.
pub fn radial_coefficients(n: i64, m: i64) -> Result<Vec<f64>> {
    let d = Degrees::new(n, m)?;
    if d.n() > MAX_EXPANDED_DEGREE {
        return Err(ZernikeError::invalid(
            "n",
            format!(
                "coefficients are only expanded up to n = {}, input = {}",
                MAX_EXPANDED_DEGREE, n
            ),
        ));
    }
    let am = d.m().abs();
    let p = (d.n() + am) / 2;
    let q = (d.n() - am) / 2;
    let scale = binomial(d.n(), p);
    let terms = hyp2f1_terms(-(p as f64), -(q as f64), -(d.n() as f64))
        .ok_or_else(|| ZernikeError::invalid("n", format!("no terminating series for {}", d)))?;
    Ok(terms.into_iter().map(|t| t * scale).collect())
}

/// Radial polynomial of one degree pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialPolynomial {
    pub n: i64,
    pub m: i64,
}

impl RadialPolynomial {
    /// Degree pairs outside `|m| <= n`, `n - m` even evaluate to zero.
    pub fn new(n: i64, m: i64) -> Self {
        Self { n, m }
    }

    fn is_valid(&self) -> bool {
        self.n >= 0 && self.m.unsigned_abs() <= self.n as u64 && self.n.is_odd() == self.m.is_odd()
    }

    /// Value at radius `rho`, zero outside the unit disk.
    pub fn eval(&self, rho: f64) -> f64 {
        if rho > 1.0 || rho.is_nan() || !self.is_valid() {
            return 0.0;
        }
        let n = self.n.unsigned_abs();
        let am = self.m.unsigned_abs();
        let r_m = match i32::try_from(am) {
            Ok(e) => rho.powi(e),
            Err(_) => rho.powf(am as f64),
        };
        if n == am {
            return r_m;
        }

        let s = rho * rho;
        let mf = am as f64;
        let mut older = r_m;
        let mut old = (mf + 2.0) * s * r_m - (mf + 1.0) * r_m;
        let mut k = am + 4;
        while k <= n {
            let kf = k as f64;
            let k1 = (kf + mf) * (kf - mf) * (kf - 2.0) / 2.0;
            let k2 = 2.0 * kf * (kf - 1.0) * (kf - 2.0);
            let k3 = -mf * mf * (kf - 1.0) - kf * (kf - 1.0) * (kf - 2.0);
            let k4 = -kf * (kf + mf - 2.0) * (kf - mf - 2.0) / 2.0;
            let next = ((k2 * s + k3) * old + k4 * older) / k1;
            older = old;
            old = next;
            k += 2;
        }
        old
    }
}

/// Radial factor `R(r; n, m)` over an array of radii.
pub fn radial_zernike<D: Dimension>(r: &ArrayView<f64, D>, n: i64, m: i64) -> Array<f64, D> {
    let radial = RadialPolynomial::new(n, m);
    r.mapv(|rho| radial.eval(rho))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::noll::MAX_RADIAL_DEGREE;
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array1};

    const EPSILON: f64 = 1e-12;

    fn radii() -> Array1<f64> {
        Array1::linspace(0.0, 1.0, 21).mapv(|r: f64| r.min(1.0))
    }

    fn origin_value(n: i64, m: i64) -> f64 {
        match (m, (n / 2) % 2) {
            (0, 0) => 1.0,
            (0, _) => -1.0,
            _ => 0.0,
        }
    }

    #[test]
    fn test_low_order_closed_forms() {
        let closed: [(i64, i64, fn(f64) -> f64); 8] = [
            (1, 1, |r: f64| r),
            (1, -1, |r: f64| r),
            (2, 0, |r: f64| 2.0 * r * r - 1.0),
            (2, 2, |r: f64| r * r),
            (3, 1, |r: f64| 3.0 * r.powi(3) - 2.0 * r),
            (3, -3, |r: f64| r.powi(3)),
            (4, 0, |r: f64| 6.0 * r.powi(4) - 6.0 * r * r + 1.0),
            (4, 2, |r: f64| 4.0 * r.powi(4) - 3.0 * r * r),
        ];
        for (n, m, f) in closed {
            let radial = RadialPolynomial::new(n, m);
            for &rho in radii().iter() {
                assert_relative_eq!(radial.eval(rho), f(rho), epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_matches_hypergeometric_form() {
        // r^n C(n, (n+m)/2) 2F1(-(n+m)/2, -(n-m)/2; -n; r^-2) away from r = 0
        for n in 1..=10i64 {
            for m in (-n..=n).step_by(2) {
                let radial = RadialPolynomial::new(n, m);
                let p = (n + m) / 2;
                let q = (n - m) / 2;
                for &rho in [0.3f64, 0.55, 0.8, 1.0].iter() {
                    let hyper = hyp2f1_terminating(
                        -(p as f64),
                        -(q as f64),
                        -(n as f64),
                        rho.powi(-2),
                    )
                    .unwrap();
                    let expected = rho.powi(n as i32) * binomial(n, p) * hyper;
                    assert_relative_eq!(radial.eval(rho), expected, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_recurrence_matches_coefficients() {
        for n in 0..=14i64 {
            for m in (-n..=n).step_by(2) {
                let coeffs = radial_coefficients(n, m).unwrap();
                assert_eq!(coeffs.len() as i64, (n - m.abs()) / 2 + 1);
                let radial = RadialPolynomial::new(n, m);
                for &rho in radii().iter() {
                    let s = rho * rho;
                    let expanded = coeffs.iter().fold(0.0, |acc, &c| acc * s + c)
                        * rho.powi(m.abs() as i32);
                    assert_relative_eq!(radial.eval(rho), expanded, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_unit_value_at_rim() {
        for n in 0..=200i64 {
            for m in (-n..=n).step_by(2) {
                assert_relative_eq!(RadialPolynomial::new(n, m).eval(1.0), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_finite_at_origin() {
        for n in 0..=200i64 {
            for m in (-n..=n).step_by(2) {
                let value = RadialPolynomial::new(n, m).eval(0.0);
                assert!(value.is_finite(), "R({}, {})(0) = {}", n, m, value);
                assert_relative_eq!(value, origin_value(n, m), epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_bounded_on_disk_at_high_order() {
        let r = Array1::linspace(0.0, 1.0, 257).mapv(|v: f64| v.min(1.0));
        for (n, m) in [(60, 0), (60, 2), (100, 0), (149, -37), (200, 0), (200, 198), (1100, 0)] {
            let out = radial_zernike(&r.view(), n, m);
            for (&v, &rho) in out.iter().zip(r.iter()) {
                assert!(v.is_finite(), "R({}, {})({}) = {}", n, m, rho, v);
                assert!(v.abs() <= 1.0 + 1e-9, "R({}, {})({}) = {}", n, m, rho, v);
            }
            assert_relative_eq!(out[0], origin_value(n, m), epsilon = 1e-9);
            assert_relative_eq!(out[256], 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_largest_degree_is_cheap() {
        let radial = RadialPolynomial::new(MAX_RADIAL_DEGREE, MAX_RADIAL_DEGREE);
        assert_eq!(radial.eval(1.0), 1.0);
        assert_eq!(radial.eval(0.5), 0.0);
        assert_eq!(radial.eval(0.0), 0.0);
    }

    #[test]
    fn test_zero_outside_support() {
        let r = arr1(&[1.0 + 1e-12, 1.5, 2.0, 10.0, f64::INFINITY]);
        for (n, m) in [(0, 0), (2, 0), (3, -1), (6, 4)] {
            let out = radial_zernike(&r.view(), n, m);
            assert!(out.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_piston_is_one_inside() {
        let r = arr1(&[0.0, 0.25, 0.999, 1.0, 1.01]);
        let out = radial_zernike(&r.view(), 0, 0);
        assert_eq!(out, arr1(&[1.0, 1.0, 1.0, 1.0, 0.0]));
    }

    #[test]
    fn test_invalid_pairs_evaluate_to_zero() {
        assert_eq!(RadialPolynomial::new(3, 0).eval(0.5), 0.0);
        assert_eq!(RadialPolynomial::new(2, 4).eval(1.0), 0.0);
        assert_eq!(RadialPolynomial::new(-2, 0).eval(0.0), 0.0);
        assert!(radial_coefficients(3, 0).unwrap_err().is_invalid_input());
        assert!(radial_coefficients(2, 4).is_err());
        assert!(radial_coefficients(MAX_EXPANDED_DEGREE + 2, 0).is_err());
        assert!(radial_coefficients(MAX_EXPANDED_DEGREE, 0).unwrap().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_symmetric_in_m() {
        for n in 0..=12i64 {
            for m in (1..=n).filter(|m| (n - m) % 2 == 0) {
                assert_eq!(radial_coefficients(n, m).unwrap(), radial_coefficients(n, -m).unwrap());
                assert_eq!(
                    RadialPolynomial::new(n, m).eval(0.7),
                    RadialPolynomial::new(n, -m).eval(0.7)
                );
            }
        }
    }

    #[test]
    fn test_hyp2f1_terms() {
        // 2F1(-2, b; c; z) = 1 - 2bz/c + b(b+1)z^2/(c(c+1))
        let terms = hyp2f1_terms(-2.0, 3.0, 5.0).unwrap();
        assert_eq!(terms.len(), 3);
        assert_relative_eq!(terms[1], -6.0 / 5.0, epsilon = EPSILON);
        assert_relative_eq!(terms[2], 12.0 / 30.0, epsilon = EPSILON);
        assert!(hyp2f1_terms(0.5, 1.5, 2.0).is_none());
        assert_eq!(hyp2f1_terminating(-3.0, 1.0, 2.0, 0.0), Some(1.0));
    }
}
