use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ndarray::Axis;

use crate::Matrix;
use crate::error::{Error, Result};

/// A labeled feature table: one label string plus a fixed-length row of
/// numeric feature values per sample. Immutable once loaded; ablation steps
/// derive fresh reduced copies instead of mutating in place.
#[derive(Clone, Debug)]
pub struct Dataset {
    label_column: String,
    feature_names: Vec<String>,
    labels: Vec<String>,
    features: Matrix,
}

impl Dataset {
    pub fn new(
        label_column: impl Into<String>,
        feature_names: Vec<String>,
        labels: Vec<String>,
        features: Matrix,
    ) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        if features.ncols() != feature_names.len() {
            return Err(Error::DimensionMismatch {
                expected: features.ncols(),
                actual: feature_names.len(),
            });
        }
        Ok(Self {
            label_column: label_column.into(),
            feature_names,
            labels,
            features,
        })
    }

    /// Loads a delimited data file: header row with the label column name
    /// first and feature names after it, then one sample per row.
    pub fn from_csv(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        Self::from_reader(File::open(path)?, path)
    }

    fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                row: 1,
                message: "header needs a label column and at least one feature".to_string(),
            });
        }
        let label_column = headers[0].to_string();
        let feature_names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();
        let n_features = feature_names.len();

        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (record_no, record) in csv_reader.records().enumerate() {
            // header is line 1; the csv reader rejects rows with a wrong
            // field count on its own
            let row = record_no + 2;
            let record = record?;
            let mut fields = record.iter();
            let label = fields.next().ok_or_else(|| Error::MalformedRow {
                path: path.to_path_buf(),
                row,
                message: "empty row".to_string(),
            })?;
            labels.push(label.to_string());

            for (column, raw) in fields.enumerate() {
                let value: f64 = raw.trim().parse().map_err(|_| Error::MalformedRow {
                    path: path.to_path_buf(),
                    row,
                    message: format!("'{}' is not a number (column '{}')", raw, feature_names[column]),
                })?;
                values.push(value);
            }
        }
        if labels.is_empty() {
            return Err(Error::EmptyDataset(path.to_path_buf()));
        }

        let n_samples = labels.len();
        let n_values = values.len();
        let features = Matrix::from_shape_vec((n_samples, n_features), values).map_err(|_| {
            Error::DimensionMismatch {
                expected: n_samples * n_features,
                actual: n_values,
            }
        })?;

        Self::new(label_column, feature_names, labels, features)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    /// `HeaderMismatch` unless both datasets share the exact header (label
    /// column and feature-name sequence).
    pub fn check_compatible(&self, other: &Dataset) -> Result<()> {
        if self.label_column != other.label_column || self.feature_names != other.feature_names {
            return Err(Error::HeaderMismatch);
        }
        Ok(())
    }

    /// A fresh copy of the dataset without the named feature column.
    pub fn remove_feature(&self, name: &str) -> Result<Dataset> {
        let index = self
            .feature_names
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| Error::UnknownFeature(name.to_string()))?;

        let feature_names: Vec<String> = self
            .feature_names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, f)| f.clone())
            .collect();
        let kept: Vec<usize> = (0..self.n_features()).filter(|&i| i != index).collect();
        let features = self.features.select(Axis(1), &kept);

        Ok(Dataset {
            label_column: self.label_column.clone(),
            feature_names,
            labels: self.labels.clone(),
            features,
        })
    }
}

/// Loads the variance ranking: one feature name per line, blank lines
/// ignored.
pub fn load_feature_ranking(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    ranking_from_reader(File::open(path)?)
}

fn ranking_from_reader<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::path::PathBuf;

    fn parse(data: &str) -> Result<Dataset> {
        Dataset::from_reader(data.as_bytes(), &PathBuf::from("test.csv"))
    }

    #[test]
    fn test_parse_labeled_samples() {
        let dataset = parse("class,f1,f2\na,1.0,2.0\nb,3.5,-4.0\n").unwrap();

        assert_eq!(dataset.label_column(), "class");
        assert_eq!(dataset.feature_names(), ["f1", "f2"]);
        assert_eq!(dataset.labels(), ["a", "b"]);
        assert_eq!(dataset.features(), &array![[1.0, 2.0], [3.5, -4.0]]);
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let err = parse("class,f1\na,1.0\nb,oops\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRow { row: 3, .. }));
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        assert!(parse("class,f1,f2\na,1.0\n").is_err());
    }

    #[test]
    fn test_no_data_rows_rejected() {
        let err = parse("class,f1,f2\n").unwrap_err();
        assert!(matches!(err, Error::EmptyDataset(_)));
    }

    #[test]
    fn test_header_without_features_rejected() {
        assert!(parse("class\na\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_csv(&PathBuf::from("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn test_check_compatible() {
        let train = parse("class,f1,f2\na,1.0,2.0\n").unwrap();
        let test = parse("class,f1,f2\nb,0.0,0.0\n").unwrap();
        let renamed = parse("class,f2,f1\nb,0.0,0.0\n").unwrap();

        assert!(train.check_compatible(&test).is_ok());
        assert!(matches!(
            train.check_compatible(&renamed),
            Err(Error::HeaderMismatch)
        ));
    }

    #[test]
    fn test_remove_feature() {
        let dataset = parse("class,f1,f2,f3\na,1.0,2.0,3.0\nb,4.0,5.0,6.0\n").unwrap();

        let reduced = dataset.remove_feature("f2").unwrap();

        assert_eq!(reduced.feature_names(), ["f1", "f3"]);
        assert_eq!(reduced.features(), &array![[1.0, 3.0], [4.0, 6.0]]);
        // the source dataset is untouched
        assert_eq!(dataset.n_features(), 3);
    }

    #[test]
    fn test_remove_unknown_feature() {
        let dataset = parse("class,f1\na,1.0\n").unwrap();
        assert!(matches!(
            dataset.remove_feature("nope"),
            Err(Error::UnknownFeature(_))
        ));
    }

    #[test]
    fn test_ranking_from_lines() {
        let names = ranking_from_reader("f2\nf1\n\nf3\n".as_bytes()).unwrap();
        assert_eq!(names, ["f2", "f1", "f3"]);
    }

    #[test]
    fn test_missing_ranking_file() {
        let err = load_feature_ranking(&PathBuf::from("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
