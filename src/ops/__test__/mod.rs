//! Cross-module properties of the evaluators over random sample grids.

use log::LevelFilter;
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;


pub(crate) fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Random `(r, theta)` samples with `r` uniform in `[r_min, r_max)`.
pub(crate) fn random_samples(
    shape: (usize, usize),
    r_min: f64,
    r_max: f64,
    seed: u64,
) -> (Array2<f64>, Array2<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let r = Array2::random_using(shape, Uniform::new(r_min, r_max), &mut rng);
    let theta = Array2::random_using(shape, Uniform::new(-PI, PI), &mut rng);
    (r, theta)
}
