use std::cmp::Ordering;

use ndarray::ArrayView1;

use crate::Matrix;
use crate::error::{Error, Result};

/// A reference-sample index paired with its distance to a query.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceRecord {
    pub index: usize,
    pub distance: f64,
}

/// Euclidean distance between two equal-length vectors.
pub fn euclidean_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Distances from `query` to every row of `references`, sorted ascending.
///
/// The sort is stable, so references at equal distance keep their original
/// relative order. The returned index set is a permutation of the row
/// indices.
pub fn rank_by_distance(references: &Matrix, query: ArrayView1<f64>) -> Result<Vec<DistanceRecord>> {
    if query.len() != references.ncols() {
        return Err(Error::DimensionMismatch {
            expected: references.ncols(),
            actual: query.len(),
        });
    }

    let mut records: Vec<DistanceRecord> = references
        .rows()
        .into_iter()
        .enumerate()
        .map(|(index, row)| DistanceRecord {
            index,
            distance: euclidean_distance(row, query),
        })
        .collect();

    records.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_ranking_sorted_ascending() {
        let references = array![[5.0, 5.0], [1.0, 0.0], [0.0, 0.0], [3.0, 4.0]];
        let query = array![0.0, 0.0];

        let ranked = rank_by_distance(&references, query.view()).unwrap();

        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert_eq!(ranked[0].index, 2);
        assert_eq!(ranked[1].index, 1);
    }

    #[test]
    fn test_ranking_is_permutation() {
        let references = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let query = array![3.1];

        let ranked = rank_by_distance(&references, query.view()).unwrap();

        let mut indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = array![1.5, -2.0, 3.0];
        assert_eq!(euclidean_distance(point.view(), point.view()), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![-4.0, 0.5, 2.0];
        assert_eq!(
            euclidean_distance(a.view(), b.view()),
            euclidean_distance(b.view(), a.view())
        );
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let references = array![[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0]];
        let query = array![0.0, 0.0];

        let ranked = rank_by_distance(&references, query.view()).unwrap();
        let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let references = array![[1.0, 2.0], [3.0, 4.0]];
        let query = array![1.0, 2.0, 3.0];

        assert!(rank_by_distance(&references, query.view()).is_err());
    }
}
