use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// An eigenvalue paired with its eigenvector. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vector,
}

const MAX_SWEEPS: usize = 64;

/// Eigendecomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns one pair per dimension, stable-sorted descending by eigenvalue,
/// with orthonormal eigenvectors. Symmetry of the input is a precondition;
/// a non-square input is rejected.
pub fn symmetric_eigen(matrix: &Matrix) -> Result<Vec<EigenPair>> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: matrix.ncols(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let threshold = convergence_threshold(matrix);
    let mut a = matrix.clone();
    let mut v = Matrix::eye(n);

    let mut converged = off_diagonal_norm(&a) <= threshold;
    for _ in 0..MAX_SWEEPS {
        if converged {
            break;
        }
        for p in 0..n - 1 {
            for q in p + 1..n {
                rotate(&mut a, &mut v, p, q);
            }
        }
        converged = off_diagonal_norm(&a) <= threshold;
    }
    if !converged {
        return Err(Error::NotConverged { sweeps: MAX_SWEEPS });
    }

    let mut pairs: Vec<EigenPair> = (0..n)
        .map(|i| EigenPair {
            value: a[[i, i]],
            vector: v.column(i).to_owned(),
        })
        .collect();
    pairs.sort_by(|x, y| y.value.partial_cmp(&x.value).unwrap_or(Ordering::Equal));
    Ok(pairs)
}

fn convergence_threshold(matrix: &Matrix) -> f64 {
    let frobenius = matrix.iter().map(|x| x * x).sum::<f64>().sqrt();
    let n = matrix.nrows() as f64;
    // rounding leaves each off-diagonal entry at O(eps * |A|), so the
    // achievable norm floor scales with the entry count
    frobenius * n * n * f64::EPSILON
}

fn off_diagonal_norm(a: &Matrix) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += a[[i, j]] * a[[i, j]];
            }
        }
    }
    sum.sqrt()
}

/// One Jacobi rotation zeroing `a[[p, q]]`: `A <- RᵀAR`, `V <- VR`.
fn rotate(a: &mut Matrix, v: &mut Matrix, p: usize, q: usize) {
    let apq = a[[p, q]];
    if apq == 0.0 {
        return;
    }

    let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
    let t = if theta >= 0.0 {
        1.0 / (theta + (theta * theta + 1.0).sqrt())
    } else {
        -1.0 / (-theta + (theta * theta + 1.0).sqrt())
    };
    let c = 1.0 / (t * t + 1.0).sqrt();
    let s = t * c;

    let n = a.nrows();
    for k in 0..n {
        let akp = a[[k, p]];
        let akq = a[[k, q]];
        a[[k, p]] = c * akp - s * akq;
        a[[k, q]] = s * akp + c * akq;
    }
    for k in 0..n {
        let apk = a[[p, k]];
        let aqk = a[[q, k]];
        a[[p, k]] = c * apk - s * aqk;
        a[[q, k]] = s * apk + c * aqk;
    }
    for k in 0..n {
        let vkp = v[[k, p]];
        let vkq = v[[k, q]];
        v[[k, p]] = c * vkp - s * vkq;
        v[[k, q]] = s * vkp + c * vkq;
    }
}
