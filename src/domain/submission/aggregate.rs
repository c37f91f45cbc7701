//! Submission entity.
//!
//! A submission is the stored record of one completed assessment. It is
//! persisted once and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, SubmissionId, Timestamp, ValidationError};
use crate::domain::wheel::WheelSnapshot;

use super::ClientDetails;

/// A validated submission that has not been stored yet.
///
/// # Invariants
///
/// - `categories.len() == values.len()`
/// - every value is within 0..=10
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    client: ClientDetails,
    categories: Vec<String>,
    values: Vec<Score>,
}

impl NewSubmission {
    /// Validates raw payload arrays.
    ///
    /// Equal-length empty arrays are accepted; only shape and range are
    /// checked here.
    pub fn new(
        client: ClientDetails,
        categories: Vec<String>,
        values: &[i64],
    ) -> Result<Self, ValidationError> {
        if categories.len() != values.len() {
            return Err(ValidationError::length_mismatch(
                "categories",
                categories.len(),
                "values",
                values.len(),
            ));
        }
        let values = values
            .iter()
            .map(|v| Score::new(*v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            client,
            categories,
            values,
        })
    }

    /// Builds a submission from a completed wizard.
    pub fn from_snapshot(client: ClientDetails, snapshot: &WheelSnapshot) -> Self {
        Self {
            client,
            categories: snapshot.labels().to_vec(),
            values: snapshot.scores().to_vec(),
        }
    }

    pub fn client(&self) -> &ClientDetails {
        &self.client
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn values(&self) -> &[Score] {
        &self.values
    }

    /// Stamps the submission with its storage identity.
    pub fn into_submission(self, id: SubmissionId, created_at: Timestamp) -> Submission {
        Submission {
            id,
            created_at,
            client_email: self.client.email().map(str::to_string),
            client_name: self.client.name().map(str::to_string),
            categories: self.categories,
            values: self.values,
        }
    }
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub created_at: Timestamp,
    pub client_email: Option<String>,
    pub client_name: Option<String>,
    pub categories: Vec<String>,
    pub values: Vec<Score>,
}

impl Submission {
    /// Plain numeric values in category order.
    pub fn raw_values(&self) -> Vec<u8> {
        self.values.iter().map(Score::value).collect()
    }

    pub fn client(&self) -> ClientDetails {
        ClientDetails::new(self.client_email.clone(), self.client_name.clone())
    }
}
