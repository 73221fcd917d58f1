//! The two-loop ablation study: feature removal and principal-component
//! reduction over a fixed training/test pair, with one KNN accuracy value
//! per step.
//!
//! # Examples
//!
//! ```rust
//! use ablate::{Dataset, Experiment};
//! use ndarray::array;
//!
//! let train = Dataset::new(
//!     "class",
//!     vec!["x".into(), "y".into()],
//!     vec!["a".into(), "a".into(), "b".into(), "b".into()],
//!     array![[0.0, 0.0], [1.0, 0.0], [5.0, 5.0], [6.0, 5.0]],
//! ).unwrap();
//! let test = Dataset::new(
//!     "class",
//!     vec!["x".into(), "y".into()],
//!     vec!["a".into()],
//!     array![[0.5, 0.0]],
//! ).unwrap();
//!
//! // ranking file order, least variance first; removal runs it reversed
//! let ranking = vec!["y".into(), "x".into()];
//! let report = Experiment::new(train, test, ranking, 1).unwrap().run().unwrap();
//!
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.feature_accuracies()[0], 1.0);
//! ```

mod report;
mod runner;

pub use report::{AblationReport, write_report};
pub use runner::Experiment;
