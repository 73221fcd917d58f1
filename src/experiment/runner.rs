use std::collections::HashSet;

use log::info;

use crate::Matrix;
use crate::dataset::Dataset;
use crate::decomposition::Pca;
use crate::error::{Error, Result};
use crate::experiment::report::AblationReport;
use crate::neighbors::KnnClassifier;

/// The two ablation loops over one immutable training/test pair and a
/// fixed neighbor count.
pub struct Experiment {
    train: Dataset,
    test: Dataset,
    removal_order: Vec<String>,
    k: usize,
}

impl Experiment {
    /// Validates the dataset pair and the variance ranking up front.
    ///
    /// `ranking` is the feature ranking file in its original line order;
    /// removal proceeds through it in reverse.
    pub fn new(train: Dataset, test: Dataset, ranking: Vec<String>, k: usize) -> Result<Self> {
        train.check_compatible(&test)?;

        if ranking.len() != train.n_features() {
            return Err(Error::InvalidRanking(format!(
                "ranking lists {} features, dataset has {}",
                ranking.len(),
                train.n_features()
            )));
        }
        let mut seen = HashSet::new();
        for name in &ranking {
            if !train.feature_names().contains(name) {
                return Err(Error::InvalidRanking(format!(
                    "'{name}' is not in the dataset header"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidRanking(format!(
                    "'{name}' appears more than once"
                )));
            }
        }

        let mut removal_order = ranking;
        removal_order.reverse();

        Ok(Self {
            train,
            test,
            removal_order,
            k,
        })
    }

    /// Runs both loops and pairs the accuracy sequences into one report,
    /// row i corresponding to i features/components removed.
    pub fn run(&self) -> Result<AblationReport> {
        let feature = self.run_feature_ablation()?;
        let component = self.run_component_ablation()?;
        AblationReport::new(feature, component)
    }

    /// Classifies on the current feature set, then drops the next column
    /// from fresh copies of both datasets. One accuracy value per removal
    /// count, 0..numFeatures-1.
    fn run_feature_ablation(&self) -> Result<Vec<f64>> {
        let mut train = self.train.clone();
        let mut test = self.test.clone();

        let mut accuracies = Vec::with_capacity(self.removal_order.len());
        for (removed, name) in self.removal_order.iter().enumerate() {
            let accuracy = self.knn_accuracy(train.features(), test.features())?;
            info!(
                "feature ablation: {removed} removed, accuracy {accuracy:.4}, next to drop '{name}'"
            );
            accuracies.push(accuracy);

            train = train.remove_feature(name)?;
            test = test.remove_feature(name)?;
        }
        Ok(accuracies)
    }

    /// Fits PCA once on the training data, then classifies on projections
    /// of both sets for every retained component count, numFeatures down
    /// to 1.
    fn run_component_ablation(&self) -> Result<Vec<f64>> {
        let n_features = self.train.n_features();

        let mut pca = Pca::new();
        pca.fit(self.train.features())?;

        let mut accuracies = Vec::with_capacity(n_features);
        for n_components in (1..=n_features).rev() {
            let projected_train = pca.project(self.train.features(), n_components)?;
            let projected_test = pca.project(self.test.features(), n_components)?;

            let accuracy = self.knn_accuracy(&projected_train, &projected_test)?;
            info!(
                "component ablation: {} removed ({n_components} components), accuracy {accuracy:.4}",
                n_features - n_components
            );
            accuracies.push(accuracy);
        }
        Ok(accuracies)
    }

    fn knn_accuracy(&self, train_x: &Matrix, test_x: &Matrix) -> Result<f64> {
        let mut knn = KnnClassifier::new(self.k);
        knn.fit(train_x, self.train.labels())?;
        knn.score(test_x, self.test.labels())
    }
}
