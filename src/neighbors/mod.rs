//! Nearest-neighbor search and classification.
//!
//! `rank_by_distance` produces the canonical neighbor ranking (reference
//! indices sorted ascending by Euclidean distance); `KnnClassifier` consumes
//! it to predict by majority vote among the nearest k.
//!
//! # Examples
//!
//! ```rust
//! use ablate::KnnClassifier;
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [1.0, 0.0], [5.0, 5.0], [6.0, 5.0]];
//! let y: Vec<String> = ["a", "a", "b", "b"].iter().map(|s| s.to_string()).collect();
//!
//! let mut knn = KnnClassifier::new(1);
//! knn.fit(&x, &y).unwrap();
//!
//! let predictions = knn.predict(&array![[0.5, 0.0]]).unwrap();
//! assert_eq!(predictions, vec!["a"]);
//! ```

mod distance;
mod knn;

pub use distance::{DistanceRecord, euclidean_distance, rank_by_distance};
pub use knn::KnnClassifier;
