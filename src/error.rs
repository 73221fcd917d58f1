use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// All failures are fatal: a run either completes both ablation loops and
/// writes one results file, or writes nothing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("{0} contains a header but no data rows")]
    EmptyDataset(PathBuf),

    #[error("training and test files have mismatching headers")]
    HeaderMismatch,

    #[error("{path}: line {row}: {message}")]
    MalformedRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("k={k} must be between 1 and the number of references ({available})")]
    InvalidNeighborCount { k: usize, available: usize },

    #[error("n_components={requested} must be between 1 and {available}")]
    InvalidComponentCount { requested: usize, available: usize },

    #[error("dataset has no feature named '{0}'")]
    UnknownFeature(String),

    #[error("invalid feature ranking: {0}")]
    InvalidRanking(String),

    #[error("covariance requires at least 2 samples, got {n_samples}")]
    DegenerateCovariance { n_samples: usize },

    #[error("eigendecomposition did not converge after {sweeps} sweeps")]
    NotConverged { sweeps: usize },

    #[error("{0} not fitted. Call fit() first.")]
    NotFitted(&'static str),
}
