//! SQLite implementation of SubmissionRepository.
//!
//! Category labels and scores are stored as JSON arrays in text columns.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, Score, SubmissionId, Timestamp};
use crate::domain::submission::{NewSubmission, Submission};
use crate::ports::SubmissionRepository;

/// SQLite implementation of the SubmissionRepository port.
#[derive(Clone)]
pub struct SqliteSubmissionRepository {
    pool: SqlitePool,
}

impl SqliteSubmissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Database row representation of a submission.
#[derive(Debug, sqlx::FromRow)]
struct SubmissionRow {
    id: i64,
    created_at: String,
    client_email: Option<String>,
    client_name: Option<String>,
    categories: String,
    scores: String,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = DomainError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let created_at = Timestamp::parse_rfc3339(&row.created_at)
            .map_err(|e| DomainError::database(format!("Invalid created_at: {}", e)))?;
        let categories: Vec<String> = serde_json::from_str(&row.categories)
            .map_err(|e| DomainError::database(format!("Invalid categories JSON: {}", e)))?;
        let raw: Vec<i64> = serde_json::from_str(&row.scores)
            .map_err(|e| DomainError::database(format!("Invalid scores JSON: {}", e)))?;
        let values = raw
            .into_iter()
            .map(Score::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::database(format!("Invalid stored score: {}", e)))?;

        Ok(Submission {
            id: SubmissionId::new(row.id),
            created_at,
            client_email: row.client_email,
            client_name: row.client_name,
            categories,
            values,
        })
    }
}

#[async_trait]
impl SubmissionRepository for SqliteSubmissionRepository {
    async fn insert(
        &self,
        submission: NewSubmission,
        created_at: Timestamp,
    ) -> Result<Submission, DomainError> {
        let categories = serde_json::to_string(submission.categories())
            .map_err(|e| DomainError::database(format!("Failed to encode categories: {}", e)))?;
        let scores = serde_json::to_string(submission.values())
            .map_err(|e| DomainError::database(format!("Failed to encode scores: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO submissions (created_at, client_email, client_name, categories, scores)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(created_at.to_rfc3339())
        .bind(submission.client().email())
        .bind(submission.client().name())
        .bind(categories)
        .bind(scores)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save submission: {}", e)))?;

        let id = SubmissionId::new(result.last_insert_rowid());
        Ok(submission.into_submission(id, created_at))
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, DomainError> {
        let rows: Vec<SubmissionRow> = sqlx::query_as(
            r#"
            SELECT id, created_at, client_email, client_name, categories, scores
            FROM submissions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list submissions: {}", e)))?;

        rows.into_iter().map(Submission::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{connect, migrate};
    use crate::domain::submission::ClientDetails;
    use chrono::{Duration, Utc};

    async fn repo(name: &str) -> SqliteSubmissionRepository {
        let url = format!("sqlite:file:{}?mode=memory&cache=shared", name);
        let pool = connect(&url, 1).await.unwrap();
        migrate(&pool).await.unwrap();
        SqliteSubmissionRepository::new(pool)
    }

    fn new_submission(labels: &[&str], values: &[i64]) -> NewSubmission {
        NewSubmission::new(
            ClientDetails::new(Some("c@x.io".into()), None),
            labels.iter().map(|s| s.to_string()).collect(),
            values,
        )
        .unwrap()
    }

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteSubmissionRepository>();
    }

    #[tokio::test]
    async fn insert_then_list_round_trips_arrays() {
        let repo = repo("memdb_sub_roundtrip").await;
        let stored = repo
            .insert(new_submission(&["A", "B"], &[3, 7]), Timestamp::now())
            .await
            .unwrap();

        let listed = repo.list_newest_first().await.unwrap();
        assert_eq!(listed.len(), 1);
        let found = &listed[0];
        assert_eq!(found.id, stored.id);
        assert_eq!(found.categories, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(found.raw_values(), vec![3, 7]);
        assert_eq!(found.client_email.as_deref(), Some("c@x.io"));
        assert_eq!(found.client_name, None);
    }

    #[tokio::test]
    async fn list_orders_newest_first_with_id_tiebreak() {
        let repo = repo("memdb_sub_order").await;
        let earlier = Timestamp::from_datetime(Utc::now() - Duration::hours(1));
        let later = Timestamp::now();

        let old = repo.insert(new_submission(&["A"], &[1]), earlier).await.unwrap();
        let first = repo.insert(new_submission(&["A"], &[2]), later).await.unwrap();
        let second = repo.insert(new_submission(&["A"], &[3]), later).await.unwrap();

        let ids: Vec<i64> = repo
            .list_newest_first()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id.value())
            .collect();
        assert_eq!(ids, vec![second.id.value(), first.id.value(), old.id.value()]);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let repo = repo("memdb_sub_migrate_twice").await;
        migrate(repo.pool()).await.unwrap();
        assert!(repo.list_newest_first().await.unwrap().is_empty());
    }
}
