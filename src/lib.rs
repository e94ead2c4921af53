//! Zernike polynomials on the unit disk and Noll index conversion.
//!
//! ```no_run
//! use zernike::{square_grid, zernike, EvalOptions, Selector};
//!
//! let (r, theta) = square_grid(512)?;
//! // defocus
//! let defocus = zernike(&r.view(), &theta.view(), &Selector::SingleNoll(4), &EvalOptions::default())?;
//! assert_eq!(defocus.shape(), &[512, 512]);
//! # Ok::<(), zernike::ZernikeError>(())
//! ```

pub mod error;
pub mod ops;

#[cfg(feature = "python")]
mod bindings;

pub use error::{Result, ZernikeError};
pub use ops::{
    cart_to_polar, degrees_to_noll, degrees_to_nolls, noll_name, noll_to_degrees,
    nolls_to_degrees, radial_coefficients, radial_zernike, square_grid, zernike, zernike_nm,
    zernike_noll, zernike_polynomial,
    Degrees, EvalOptions, RadialPolynomial, Selector, NOLL_NAMES,
};
