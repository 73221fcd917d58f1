use ndarray::Axis;

use crate::Matrix;
use crate::error::{Error, Result};

/// Sample covariance of `x` (rows = samples, columns = features).
///
/// Mean-centers each feature, then forms `centeredᵀ·centered / (n-1)`.
/// The unbiased denominator requires at least two samples.
pub fn covariance_matrix(x: &Matrix) -> Result<Matrix> {
    let n_samples = x.nrows();
    if n_samples <= 1 {
        return Err(Error::DegenerateCovariance { n_samples });
    }

    let mean = x.mean_axis(Axis(0)).unwrap();
    let centered = x - &mean.view().insert_axis(Axis(0));

    Ok(centered.t().dot(&centered) / (n_samples as f64 - 1.0))
}
