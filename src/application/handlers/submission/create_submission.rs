//! CreateSubmissionHandler - Command handler for storing a submission.
//!
//! Runs in sequence: persist the row, render the PDF report, then email it
//! to the coach when notifications are configured. Nothing is retried and a
//! stored row is never rolled back.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::submission::{
    notice_body, NewSubmission, Submission, SubmissionError, NOTICE_SUBJECT, REPORT_FILENAME,
};
use crate::ports::{
    Attachment, ChartAttachment, DocumentRenderer, EmailSender, OutgoingEmail, ScoreReport,
    SubmissionRepository,
};

/// Command to store a validated submission.
#[derive(Debug, Clone)]
pub struct CreateSubmissionCommand {
    pub submission: NewSubmission,
    pub chart: ChartAttachment,
}

/// Result of successful submission creation.
#[derive(Debug, Clone)]
pub struct CreateSubmissionResult {
    pub submission: Submission,
    /// True when the report was emailed to the coach.
    pub notified: bool,
}

/// Where and how coach notifications are delivered.
#[derive(Clone)]
pub struct CoachNotifier {
    sender: Arc<dyn EmailSender>,
    coach_email: String,
}

impl CoachNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, coach_email: impl Into<String>) -> Self {
        Self {
            sender,
            coach_email: coach_email.into(),
        }
    }
}

/// Handler for storing submissions.
pub struct CreateSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
    documents: Arc<dyn DocumentRenderer>,
    notifier: Option<CoachNotifier>,
}

impl CreateSubmissionHandler {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        documents: Arc<dyn DocumentRenderer>,
        notifier: Option<CoachNotifier>,
    ) -> Self {
        Self {
            repository,
            documents,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubmissionCommand,
    ) -> Result<CreateSubmissionResult, SubmissionError> {
        // 1. Persist
        let submission = self
            .repository
            .insert(cmd.submission, Timestamp::now())
            .await
            .map_err(|e| SubmissionError::storage(e.message))?;
        let submission_id = submission.id;
        tracing::info!(submission_id = %submission_id, "submission stored");

        // 2. Render report
        let report = ScoreReport::from_submission(&submission, cmd.chart);
        let pdf = self.documents.render_pdf(&report).await.map_err(|e| {
            tracing::error!(submission_id = %submission_id, error = %e, "report rendering failed");
            SubmissionError::document(e.to_string())
        })?;

        // 3. Notify coach
        let Some(notifier) = &self.notifier else {
            tracing::debug!(submission_id = %submission_id, "coach notification not configured; skipping email");
            return Ok(CreateSubmissionResult {
                submission,
                notified: false,
            });
        };

        let email = OutgoingEmail {
            to: notifier.coach_email.clone(),
            subject: NOTICE_SUBJECT.to_string(),
            text: notice_body(&submission.client(), &submission.values),
            attachments: vec![Attachment::pdf(REPORT_FILENAME, pdf)],
        };
        notifier.sender.send(&email).await.map_err(|e| {
            tracing::error!(submission_id = %submission_id, error = %e, "coach notification failed");
            SubmissionError::delivery(e.to_string())
        })?;

        Ok(CreateSubmissionResult {
            submission,
            notified: true,
        })
    }
}
