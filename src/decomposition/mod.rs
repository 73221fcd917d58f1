//! Covariance estimation, symmetric eigendecomposition, and PCA projection.
//!
//! The pipeline runs covariance → eigendecomposition → projection. `Pca`
//! bundles the three for the common case of fitting on training data and
//! projecting both training and test sets with the same basis.
//!
//! # Examples
//!
//! ```rust
//! use ablate::{Pca, covariance_matrix, symmetric_eigen};
//! use ndarray::array;
//!
//! let x = array![[2.0, 0.0], [0.0, 1.0], [-2.0, 0.0], [0.0, -1.0]];
//!
//! let cov = covariance_matrix(&x).unwrap();
//! let pairs = symmetric_eigen(&cov).unwrap();
//! assert!(pairs[0].value >= pairs[1].value);
//!
//! let mut pca = Pca::new();
//! pca.fit(&x).unwrap();
//! let projected = pca.project(&x, 1).unwrap();
//! assert_eq!(projected.shape(), &[4, 1]);
//! ```

mod covariance;
mod eigen;
mod pca;

pub use covariance::covariance_matrix;
pub use eigen::{EigenPair, symmetric_eigen};
pub use pca::Pca;
