use crate::error::{Error, Result};

/// Fraction of predictions that exactly match the true labels.
pub fn accuracy_score(y_true: &[String], y_pred: &[String]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::DimensionMismatch {
            expected: 1,
            actual: 0,
        });
    }

    let matches = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(matches as f64 / y_true.len() as f64)
}
