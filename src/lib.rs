//! Measures how KNN classification accuracy degrades as dimensionality is
//! reduced, by raw feature removal and by principal-component truncation.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod experiment;
pub mod metrics;
pub mod neighbors;

pub use dataset::{Dataset, load_feature_ranking};
pub use decomposition::{EigenPair, Pca, covariance_matrix, symmetric_eigen};
pub use error::{Error, Result};
pub use experiment::{AblationReport, Experiment, write_report};
pub use neighbors::{DistanceRecord, KnnClassifier, rank_by_distance};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
