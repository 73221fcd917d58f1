use std::path::Path;

use crate::error::{Error, Result};

/// Per-step accuracies for both ablation strategies. Row i corresponds to
/// i features/components removed from the full set.
#[derive(Clone, Debug, PartialEq)]
pub struct AblationReport {
    feature: Vec<f64>,
    component: Vec<f64>,
}

impl AblationReport {
    pub fn new(feature: Vec<f64>, component: Vec<f64>) -> Result<Self> {
        if feature.len() != component.len() {
            return Err(Error::DimensionMismatch {
                expected: feature.len(),
                actual: component.len(),
            });
        }
        Ok(Self { feature, component })
    }

    pub fn len(&self) -> usize {
        self.feature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature.is_empty()
    }

    pub fn feature_accuracies(&self) -> &[f64] {
        &self.feature
    }

    pub fn component_accuracies(&self) -> &[f64] {
        &self.component
    }

    /// `(removed, feature accuracy, component accuracy)` per step.
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.feature
            .iter()
            .zip(&self.component)
            .enumerate()
            .map(|(i, (&f, &c))| (i, f, c))
    }
}

/// Writes the results table. Written once, only after both loops complete.
pub fn write_report(path: &Path, report: &AblationReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Num Removed", "Features", "Components"])?;
    for (removed, feature, component) in report.rows() {
        writer.write_record(&[
            removed.to_string(),
            feature.to_string(),
            component.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_pair_sequences_by_removal_count() {
        let report = AblationReport::new(vec![1.0, 0.75], vec![1.0, 0.5]).unwrap();

        let rows: Vec<(usize, f64, f64)> = report.rows().collect();
        assert_eq!(rows, vec![(0, 1.0, 1.0), (1, 0.75, 0.5)]);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        assert!(AblationReport::new(vec![1.0], vec![1.0, 0.5]).is_err());
    }
}
