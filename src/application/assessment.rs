//! AssessmentController - drives one assessment from first step to export.
//!
//! Owns the wizard, the single chart slot and the last submitted snapshot.
//! Chart and export collaborators only ever read the snapshot; their failures
//! are reported without touching wizard state.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::{ClientDetails, NewSubmission};
use crate::domain::wheel::{
    CategorySet, ChartTheme, Selection, StepView, WheelSnapshot, Wizard, WizardError,
};
use crate::ports::{
    ChartAttachment, ChartError, ChartRenderer, ChartSlot, ClientError, DocumentRenderer,
    ExportError, ScoreReport, SubmissionClient,
};

/// Errors from controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Export requested before a successful submit.
    #[error("Assessment has not been submitted")]
    NotSubmitted,

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Remote(#[from] ClientError),
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub snapshot: WheelSnapshot,
    /// Set when the chart could not be drawn; exports still work without it.
    pub chart_error: Option<ChartError>,
}

/// Single-owner controller for one assessment.
pub struct AssessmentController {
    wizard: Wizard,
    chart: ChartSlot,
    renderer: Arc<dyn ChartRenderer>,
    theme: ChartTheme,
    submitted: Option<WheelSnapshot>,
}

impl AssessmentController {
    pub fn new(categories: CategorySet, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            wizard: Wizard::new(categories),
            chart: ChartSlot::new(),
            renderer,
            theme: ChartTheme::default(),
            submitted: None,
        }
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn view(&self) -> StepView {
        self.wizard.view()
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    /// Last snapshot produced by `submit`, cleared by `reset`.
    pub fn submitted(&self) -> Option<&WheelSnapshot> {
        self.submitted.as_ref()
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_live()
    }

    pub fn select_value(&mut self, value: i64) -> Result<Selection, WizardError> {
        let step = self.wizard.current_index();
        self.wizard.select_value(step, value)
    }

    pub fn advance(&mut self) -> Result<usize, WizardError> {
        self.wizard.advance()
    }

    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        self.wizard.retreat()
    }

    /// Freezes the answers and draws the chart.
    ///
    /// A chart failure is returned inside [`Submitted`]; the snapshot is kept
    /// so document and remote exports can proceed without an image.
    pub fn submit(&mut self) -> Result<Submitted, WizardError> {
        let snapshot = self.wizard.submit()?;
        let chart_error = self
            .chart
            .render(self.renderer.as_ref(), &snapshot, &self.theme)
            .err();
        if let Some(err) = &chart_error {
            tracing::warn!(error = %err, "chart rendering failed");
        }
        self.submitted = Some(snapshot.clone());
        Ok(Submitted {
            snapshot,
            chart_error,
        })
    }

    /// Switches theme, redrawing a live chart.
    pub fn set_theme(&mut self, theme: ChartTheme) -> Result<(), ChartError> {
        self.theme = theme;
        match (&self.submitted, self.chart.is_live()) {
            (Some(snapshot), true) => {
                self.chart
                    .render(self.renderer.as_ref(), snapshot, &self.theme)
            }
            _ => Ok(()),
        }
    }

    /// Back to step one with nothing answered; the chart is released.
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.chart.clear();
        self.submitted = None;
    }

    /// PNG of the live chart.
    pub fn export_png(&self) -> Result<Vec<u8>, AssessmentError> {
        Ok(self.chart.to_png()?)
    }

    /// Single-page PDF with the chart (when live) and score table.
    pub async fn export_pdf(
        &self,
        documents: &dyn DocumentRenderer,
        client_name: Option<String>,
    ) -> Result<Vec<u8>, AssessmentError> {
        let snapshot = self.submitted.as_ref().ok_or(AssessmentError::NotSubmitted)?;
        let report = ScoreReport::from_snapshot(snapshot, client_name, self.chart_attachment());
        Ok(documents.render_pdf(&report).await?)
    }

    /// Posts the submission to the remote store.
    pub async fn send_to_remote(
        &self,
        client: &dyn SubmissionClient,
        details: ClientDetails,
    ) -> Result<SubmissionId, AssessmentError> {
        let snapshot = self.submitted.as_ref().ok_or(AssessmentError::NotSubmitted)?;
        let submission = NewSubmission::from_snapshot(details, snapshot);
        let png = self.chart.to_png().ok();
        Ok(client.send(&submission, png.as_deref()).await?)
    }

    fn chart_attachment(&self) -> ChartAttachment {
        ChartAttachment::from_png(self.chart.to_png().ok())
    }
}
