use std::collections::{HashMap, HashSet};

use crate::Matrix;
use crate::error::{Error, Result};
use crate::metrics::accuracy_score;
use crate::neighbors::distance::{DistanceRecord, rank_by_distance};

/// K-nearest-neighbor classifier over string labels.
#[derive(Clone, Debug)]
pub struct KnnClassifier {
    k: usize,
    references: Option<Matrix>,
    labels: Option<Vec<String>>,
}

impl KnnClassifier {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            references: None,
            labels: None,
        }
    }

    pub fn fit(&mut self, x: &Matrix, y: &[String]) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(Error::DimensionMismatch {
                expected: x.nrows(),
                actual: y.len(),
            });
        }
        if self.k < 1 || self.k > x.nrows() {
            return Err(Error::InvalidNeighborCount {
                k: self.k,
                available: x.nrows(),
            });
        }

        self.references = Some(x.clone());
        self.labels = Some(y.to_vec());
        Ok(())
    }

    /// Majority-vote label among the k nearest references, per query row.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<String>> {
        let references = self
            .references
            .as_ref()
            .ok_or(Error::NotFitted("KnnClassifier"))?;
        let labels = self.labels.as_ref().ok_or(Error::NotFitted("KnnClassifier"))?;

        if x.ncols() != references.ncols() {
            return Err(Error::DimensionMismatch {
                expected: references.ncols(),
                actual: x.ncols(),
            });
        }

        let mut predictions = Vec::with_capacity(x.nrows());
        for query in x.rows() {
            let ranked = rank_by_distance(references, query)?;
            predictions.push(majority_vote(&ranked[..self.k], labels));
        }
        Ok(predictions)
    }

    pub fn score(&self, x: &Matrix, y: &[String]) -> Result<f64> {
        let predictions = self.predict(x)?;
        accuracy_score(y, &predictions)
    }
}

/// Most frequent label among the ranked neighbors. On equal counts the
/// label whose first occurrence ranks nearest wins: labels are considered
/// in first-occurrence order and the running best is replaced only on a
/// strictly greater count.
fn majority_vote(neighbors: &[DistanceRecord], labels: &[String]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in neighbors {
        *counts.entry(labels[record.index].as_str()).or_insert(0) += 1;
    }

    let mut seen = HashSet::new();
    let mut best = "";
    let mut best_count = 0;
    for record in neighbors {
        let label = labels[record.index].as_str();
        if !seen.insert(label) {
            continue;
        }
        let count = counts[label];
        if count > best_count {
            best = label;
            best_count = count;
        }
    }
    best.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_k1_returns_nearest_label() {
        let x = array![[0.0, 0.0], [1.0, 0.0], [5.0, 5.0], [6.0, 5.0]];
        let y = labels(&["a", "a", "b", "b"]);

        let mut knn = KnnClassifier::new(1);
        knn.fit(&x, &y).unwrap();

        let predictions = knn.predict(&array![[0.5, 0.0]]).unwrap();
        assert_eq!(predictions, vec!["a"]);
    }

    #[test]
    fn test_nearest_b_classified_b() {
        let x = array![[0.0, 0.0], [1.0, 0.0], [5.0, 5.0], [6.0, 5.0]];
        let y = labels(&["a", "a", "b", "b"]);

        let mut knn = KnnClassifier::new(1);
        knn.fit(&x, &y).unwrap();

        let predictions = knn.predict(&array![[5.4, 5.0]]).unwrap();
        assert_eq!(predictions, vec!["b"]);
    }

    #[test]
    fn test_majority_vote() {
        let x = array![[0.0], [1.0], [2.0], [10.0]];
        let y = labels(&["a", "b", "b", "a"]);

        let mut knn = KnnClassifier::new(3);
        knn.fit(&x, &y).unwrap();

        // nearest 3 to 0.5 are indices 0, 1, 2 with labels a, b, b
        let predictions = knn.predict(&array![[0.5]]).unwrap();
        assert_eq!(predictions, vec!["b"]);
    }

    #[test]
    fn test_tie_break_prefers_nearest_first_occurrence() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = labels(&["a", "b", "b", "a"]);

        let mut knn = KnnClassifier::new(4);
        knn.fit(&x, &y).unwrap();

        // both labels count 2; "a" first occurs at rank 1, "b" at rank 2
        let predictions = knn.predict(&array![[0.0]]).unwrap();
        assert_eq!(predictions, vec!["a"]);
    }

    #[test]
    fn test_vote_ignores_reference_order() {
        let query = array![[0.0]];

        let mut forward = KnnClassifier::new(3);
        forward
            .fit(&array![[1.0], [2.0], [3.0]], &labels(&["a", "b", "b"]))
            .unwrap();

        let mut shuffled = KnnClassifier::new(3);
        shuffled
            .fit(&array![[3.0], [1.0], [2.0]], &labels(&["b", "a", "b"]))
            .unwrap();

        assert_eq!(forward.predict(&query).unwrap(), shuffled.predict(&query).unwrap());
    }

    #[test]
    fn test_k_zero_rejected() {
        let x = array![[1.0], [2.0]];
        let mut knn = KnnClassifier::new(0);
        assert!(knn.fit(&x, &labels(&["a", "b"])).is_err());
    }

    #[test]
    fn test_k_exceeding_references_rejected() {
        let x = array![[1.0], [2.0]];
        let mut knn = KnnClassifier::new(3);
        assert!(knn.fit(&x, &labels(&["a", "b"])).is_err());
    }

    #[test]
    fn test_predict_without_fit() {
        let knn = KnnClassifier::new(1);
        assert!(knn.predict(&array![[1.0]]).is_err());
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let mut knn = KnnClassifier::new(1);
        knn.fit(&array![[1.0, 2.0]], &labels(&["a"])).unwrap();
        assert!(knn.predict(&array![[1.0]]).is_err());
    }

    #[test]
    fn test_score() {
        let x = array![[0.0], [10.0]];
        let y = labels(&["a", "b"]);

        let mut knn = KnnClassifier::new(1);
        knn.fit(&x, &y).unwrap();

        let accuracy = knn.score(&array![[1.0], [9.0]], &y).unwrap();
        assert!((accuracy - 1.0).abs() < 1e-10);
    }
}
