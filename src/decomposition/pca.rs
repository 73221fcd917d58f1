use crate::Matrix;
use crate::decomposition::covariance::covariance_matrix;
use crate::decomposition::eigen::{EigenPair, symmetric_eigen};
use crate::error::{Error, Result};

/// Principal component analysis fitted on training data.
///
/// `fit` stores the full ranked eigendecomposition of the training
/// covariance once; `basis` and `project` then serve any retained component
/// count without refitting. Projection is the plain matrix product of the
/// (uncentered) data with the eigenvector basis, so training and test data
/// reduced with the same fitted instance land in the same space.
#[derive(Clone, Debug)]
pub struct Pca {
    eigenpairs: Option<Vec<EigenPair>>,
}

impl Pca {
    pub fn new() -> Self {
        Self { eigenpairs: None }
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let cov = covariance_matrix(x)?;
        self.eigenpairs = Some(symmetric_eigen(&cov)?);
        Ok(())
    }

    /// Eigenvalues in descending order.
    pub fn eigenvalues(&self) -> Result<Vec<f64>> {
        let pairs = self.eigenpairs.as_ref().ok_or(Error::NotFitted("Pca"))?;
        Ok(pairs.iter().map(|p| p.value).collect())
    }

    /// The top-`n_components` eigenvector basis, one component per column.
    ///
    /// The matrix is allocated zeroed and only the retained columns are
    /// filled in.
    pub fn basis(&self, n_components: usize) -> Result<Matrix> {
        let pairs = self.eigenpairs.as_ref().ok_or(Error::NotFitted("Pca"))?;
        let n_features = pairs.len();
        if n_components < 1 || n_components > n_features {
            return Err(Error::InvalidComponentCount {
                requested: n_components,
                available: n_features,
            });
        }

        let mut basis = Matrix::zeros((n_features, n_components));
        for (j, pair) in pairs.iter().take(n_components).enumerate() {
            basis.column_mut(j).assign(&pair.vector);
        }
        Ok(basis)
    }

    /// Re-expresses each row of `x` in the retained component space.
    pub fn project(&self, x: &Matrix, n_components: usize) -> Result<Matrix> {
        let basis = self.basis(n_components)?;
        if x.ncols() != basis.nrows() {
            return Err(Error::DimensionMismatch {
                expected: basis.nrows(),
                actual: x.ncols(),
            });
        }
        Ok(x.dot(&basis))
    }
}

impl Default for Pca {
    fn default() -> Self {
        Self::new()
    }
}
