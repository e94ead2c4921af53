//! # Noll 인덱스 ↔ (n, m) 차수 변환
//!
//! Noll (1976) ordering: rows of increasing radial degree `n`, inside a row
//! increasing `|m|`. A nonzero `|m|` takes two consecutive indices and the
//! even one of the pair is the cosine (`m > 0`) term.
//!
//! The ordering is generated, not tabulated, so any index that fits in an
//! `i64` maps to a degree pair.

use log::trace;
use num_integer::{Integer, Roots};

use crate::error::{Result, ZernikeError};

/// Radial and azimuthal degree of a Zernike polynomial.
///
/// Constructed through [`Degrees::new`] or [`noll_to_degrees`], so every
/// value satisfies `n >= 0`, `|m| <= n` and `n - m` even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degrees {
    n: i64,
    m: i64,
}

/// Largest radial degree whose Noll indices fit in an `i64`
pub const MAX_RADIAL_DEGREE: i64 = i32::MAX as i64;

impl Degrees {
    pub fn new(n: i64, m: i64) -> Result<Self> {
        if !(0..=MAX_RADIAL_DEGREE).contains(&n) {
            return Err(ZernikeError::invalid(
                "n",
                format!(
                    "radial degree must be in 0..={}, input = {}",
                    MAX_RADIAL_DEGREE, n
                ),
            ));
        }
        if m.unsigned_abs() > n as u64 {
            return Err(ZernikeError::invalid(
                "m",
                format!("|m| must not exceed n, input = ({}, {})", n, m),
            ));
        }
        if (n - m).is_odd() {
            return Err(ZernikeError::invalid(
                "m",
                format!(
                    "the difference between radial and azimuthal degree isn't even, input = ({}, {})",
                    n, m
                ),
            ));
        }
        Ok(Self { n, m })
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    pub fn m(&self) -> i64 {
        self.m
    }

    pub fn noll(&self) -> i64 {
        let am = self.m.abs();
        let first = triangular(self.n) + 1;
        if am == 0 {
            return first;
        }
        // the pair (+|m|, -|m|) starts at first + |m| - 1
        let pair = first + am - 1;
        if pair.is_even() == (self.m > 0) {
            pair
        } else {
            pair + 1
        }
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(n={}, m={})", self.n, self.m)
    }
}

impl TryFrom<(i64, i64)> for Degrees {
    type Error = ZernikeError;

    fn try_from((n, m): (i64, i64)) -> Result<Self> {
        Degrees::new(n, m)
    }
}

fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Convert a Noll index to its degree pair.
pub fn noll_to_degrees(j: i64) -> Result<Degrees> {
    if j <= 0 {
        return Err(ZernikeError::invalid(
            "noll",
            format!("Noll indices must be greater than 0, input = {}", j),
        ));
    }
    let disc = (j - 1)
        .checked_mul(8)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| ZernikeError::invalid("noll", format!("index {} is too large", j)))?;
    // largest n with T(n) < j
    let n = (disc.sqrt() - 1) / 2;
    let offset = j - triangular(n) - 1;
    let am = if n.is_even() {
        2 * ((offset + 1) / 2)
    } else {
        2 * (offset / 2) + 1
    };
    let m = if am == 0 || j.is_even() { am } else { -am };
    trace!("noll {} -> (n={}, m={})", j, n, m);
    Ok(Degrees { n, m })
}

/// Convert a degree pair to its Noll index.
pub fn degrees_to_noll(n: i64, m: i64) -> Result<i64> {
    Ok(Degrees::new(n, m)?.noll())
}

/// Element-wise [`noll_to_degrees`]; every index is checked before any is
/// converted.
pub fn nolls_to_degrees(nolls: &[i64]) -> Result<(Vec<i64>, Vec<i64>)> {
    if let Some(&bad) = nolls.iter().find(|&&j| j <= 0) {
        return Err(ZernikeError::invalid(
            "noll",
            format!("Noll indices must be greater than 0, input = {}", bad),
        ));
    }
    let pairs = nolls
        .iter()
        .map(|&j| noll_to_degrees(j))
        .collect::<Result<Vec<_>>>()?;
    Ok(pairs.iter().map(|d| (d.n, d.m)).unzip())
}

/// Element-wise [`degrees_to_noll`].
pub fn degrees_to_nolls(n: &[i64], m: &[i64]) -> Result<Vec<i64>> {
    if n.len() != m.len() {
        return Err(ZernikeError::ShapeMismatch {
            expected: vec![n.len()],
            got: vec![m.len()],
        });
    }
    n.iter()
        .zip(m.iter())
        .map(|(&nn, &mm)| degrees_to_noll(nn, mm))
        .collect()
}

/// Classical names of the first fifteen Noll indices
pub const NOLL_NAMES: [(i64, &str); 15] = [
    (1, "Piston"),
    (2, "Tip (lateral position) (X-Tilt)"),
    (3, "Tilt (lateral position) (Y-Tilt)"),
    (4, "Defocus (longitudinal position)"),
    (5, "Oblique astigmatism"),
    (6, "Vertical astigmatism"),
    (7, "Vertical coma"),
    (8, "Horizontal coma"),
    (9, "Vertical trefoil"),
    (10, "Oblique trefoil"),
    (11, "Primary spherical"),
    (12, "Vertical secondary astigmatism"),
    (13, "Oblique secondary astigmatism"),
    (14, "Vertical quadrafoil"),
    (15, "Oblique quadrafoil"),
];

pub fn noll_name(j: i64) -> Option<&'static str> {
    NOLL_NAMES
        .iter()
        .find(|(k, _)| *k == j)
        .map(|(_, name)| *name)
}
