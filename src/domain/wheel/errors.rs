//! Wizard-specific error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Reasons a wizard operation was refused.
///
/// A refused operation never changes wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Selection targeted a step other than the one on display.
    #[error("Step {step} is not the current step ({current})")]
    StepNotCurrent { step: usize, current: usize },

    /// The selected value is not on the 0–10 scale.
    #[error("Invalid score: {0}")]
    InvalidScore(#[from] ValidationError),

    /// Forward navigation before the current step has a value.
    #[error("Step {step} has no value yet")]
    StepUnanswered { step: usize },

    /// `advance` on the last step; the last step uses `submit`.
    #[error("Already on the last step")]
    AtLastStep,

    /// `retreat` on the first step.
    #[error("Already on the first step")]
    AtFirstStep,

    /// `submit` while some steps are still unset.
    #[error("{} step(s) still need a value", unanswered.len())]
    Incomplete { unanswered: Vec<usize> },
}

impl WizardError {
    /// True for refusals that are plain no-ops in the UI (boundary navigation).
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            WizardError::AtFirstStep | WizardError::AtLastStep | WizardError::StepUnanswered { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_reports_count() {
        let err = WizardError::Incomplete {
            unanswered: vec![1, 4],
        };
        assert_eq!(err.to_string(), "2 step(s) still need a value");
    }

    #[test]
    fn boundary_navigation_is_noop() {
        assert!(WizardError::AtFirstStep.is_noop());
        assert!(WizardError::AtLastStep.is_noop());
        assert!(!WizardError::Incomplete { unanswered: vec![0] }.is_noop());
    }
}
