pub mod batch;
pub mod grid;
pub mod noll;
pub mod polynomial;
pub mod radial;
pub mod utils;

pub use self::batch::{zernike, zernike_nm, zernike_noll, Selector};
pub use self::grid::{cart_to_polar, square_grid};
pub use self::noll::{
    degrees_to_noll, degrees_to_nolls, noll_name, noll_to_degrees, nolls_to_degrees, Degrees,
    MAX_RADIAL_DEGREE, NOLL_NAMES,
};
pub use self::polynomial::{normalize_l2, zernike_polynomial, EvalOptions};
pub use self::radial::{
    hyp2f1_terminating, radial_coefficients, radial_zernike, RadialPolynomial,
    MAX_EXPANDED_DEGREE,
};

#[cfg(test)]
mod __test__;
