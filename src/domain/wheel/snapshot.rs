//! The frozen label/value pair handed to chart, export and submission.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, ValidationError};

/// Completed assessment: labels and scores in category order.
///
/// Immutable once built; collaborators only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    labels: Vec<String>,
    values: Vec<Score>,
}

impl WheelSnapshot {
    /// Builds a snapshot from parallel arrays, validating shape.
    pub fn new(labels: Vec<String>, values: Vec<Score>) -> Result<Self, ValidationError> {
        if labels.len() != values.len() {
            return Err(ValidationError::length_mismatch(
                "categories",
                labels.len(),
                "values",
                values.len(),
            ));
        }
        if labels.is_empty() {
            return Err(ValidationError::empty_field("categories"));
        }
        Ok(Self { labels, values })
    }

    /// Builds a snapshot from raw integers, validating each score.
    pub fn from_raw(labels: Vec<String>, values: &[i64]) -> Result<Self, ValidationError> {
        let values = values
            .iter()
            .map(|v| Score::new(*v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(labels, values)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn scores(&self) -> &[Score] {
        &self.values
    }

    /// Plain numeric values in category order.
    pub fn values(&self) -> Vec<u8> {
        self.values.iter().map(Score::value).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, score)` pairs in category order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Score)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
