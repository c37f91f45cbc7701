//! Assessment wizard state machine.
//!
//! One category is on display at a time. Navigation is reversible, but forward
//! progress is gated on the displayed step having a value. Answers are never
//! cleared by navigation, only by [`Wizard::reset`].

use serde::Serialize;

use crate::domain::foundation::Score;

use super::category::CategorySet;
use super::errors::WizardError;
use super::scale::{scale_options, ScaleOption};
use super::snapshot::WheelSnapshot;

/// Result of a successful `select_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The value was recorded (new or changed).
    Recorded,
    /// The step already held this value.
    Unchanged,
}

/// Wizard state: current step plus one optional answer per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    categories: CategorySet,
    current_index: usize,
    values: Vec<Option<Score>>,
}

impl Wizard {
    /// Starts a wizard on the first step with every value unset.
    pub fn new(categories: CategorySet) -> Self {
        let values = vec![None; categories.len()];
        Self {
            categories,
            current_index: 0,
            values,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn step_count(&self) -> usize {
        self.values.len()
    }

    /// Stored answers in category order.
    pub fn values(&self) -> &[Option<Score>] {
        &self.values
    }

    pub fn value_at(&self, step: usize) -> Option<Score> {
        self.values.get(step).copied().flatten()
    }

    fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.last_index()
    }

    /// Whether next/submit is enabled for the displayed step.
    pub fn can_proceed(&self) -> bool {
        self.values[self.current_index].is_some()
    }

    /// Indices of steps without a value.
    pub fn unanswered(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect()
    }

    /// Records a value for the displayed step.
    ///
    /// # Errors
    ///
    /// - `StepNotCurrent` if `step` is not the displayed step
    /// - `InvalidScore` if `value` is outside 0..=10
    pub fn select_value(&mut self, step: usize, value: i64) -> Result<Selection, WizardError> {
        if step != self.current_index {
            return Err(WizardError::StepNotCurrent {
                step,
                current: self.current_index,
            });
        }
        let score = Score::new(value)?;
        let slot = &mut self.values[step];
        if *slot == Some(score) {
            return Ok(Selection::Unchanged);
        }
        *slot = Some(score);
        Ok(Selection::Recorded)
    }

    /// Moves to the next step. Returns the new index.
    ///
    /// # Errors
    ///
    /// - `AtLastStep` on the final step
    /// - `StepUnanswered` if the displayed step has no value
    pub fn advance(&mut self) -> Result<usize, WizardError> {
        if self.is_last() {
            return Err(WizardError::AtLastStep);
        }
        if !self.can_proceed() {
            return Err(WizardError::StepUnanswered {
                step: self.current_index,
            });
        }
        self.current_index += 1;
        Ok(self.current_index)
    }

    /// Moves to the previous step. Returns the new index.
    ///
    /// # Errors
    ///
    /// - `AtFirstStep` on the first step
    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        if self.is_first() {
            return Err(WizardError::AtFirstStep);
        }
        self.current_index -= 1;
        Ok(self.current_index)
    }

    /// Freezes the answers into a snapshot. Does not move the current step.
    ///
    /// # Errors
    ///
    /// - `Incomplete` listing every unset step
    pub fn submit(&self) -> Result<WheelSnapshot, WizardError> {
        let scores: Option<Vec<Score>> = self.values.iter().copied().collect();
        match scores {
            Some(scores) => Ok(WheelSnapshot::new(self.categories.labels(), scores)?),
            None => Err(WizardError::Incomplete {
                unanswered: self.unanswered(),
            }),
        }
    }

    /// Returns to the first step with every value unset.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.values.iter_mut().for_each(|v| *v = None);
    }

    /// Display state of the current step.
    pub fn view(&self) -> StepView {
        StepView::derive(self)
    }
}

/// Everything needed to draw the current step, derived from [`Wizard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    /// 1-based step number.
    pub step_number: usize,
    pub step_total: usize,
    pub label: String,
    pub subtitle: String,
    pub is_first: bool,
    pub is_last: bool,
    pub back_enabled: bool,
    pub next_visible: bool,
    pub next_enabled: bool,
    pub submit_visible: bool,
    pub submit_enabled: bool,
    pub scale: Vec<ScaleOption>,
}

impl StepView {
    fn derive(wizard: &Wizard) -> Self {
        let idx = wizard.current_index;
        let (label, subtitle) = wizard
            .categories
            .get(idx)
            .map(|c| (c.label().to_string(), c.subtitle().to_string()))
            .unwrap_or_default();
        let is_first = wizard.is_first();
        let is_last = wizard.is_last();
        let answered = wizard.can_proceed();

        Self {
            step_number: idx + 1,
            step_total: wizard.step_count(),
            label,
            subtitle,
            is_first,
            is_last,
            back_enabled: !is_first,
            next_visible: !is_last,
            next_enabled: answered,
            submit_visible: is_last,
            submit_enabled: answered,
            scale: scale_options(wizard.values[idx]),
        }
    }

    /// Value currently selected on the scale, if any.
    pub fn selected(&self) -> Option<Score> {
        self.scale.iter().find(|o| o.selected).map(|o| o.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wizard(n: usize) -> Wizard {
        let names: Vec<String> = (0..n).map(|i| format!("C{}", i)).collect();
        Wizard::new(CategorySet::from_names(names).unwrap())
    }

    fn answer_and_advance(w: &mut Wizard, value: i64) {
        let step = w.current_index();
        w.select_value(step, value).unwrap();
        if !w.is_last() {
            w.advance().unwrap();
        }
    }

    #[test]
    fn new_wizard_starts_unset_on_first_step() {
        let w = Wizard::new(CategorySet::canonical());
        assert_eq!(w.current_index(), 0);
        assert_eq!(w.step_count(), 8);
        assert!(w.values().iter().all(Option::is_none));
    }

    #[test]
    fn advance_requires_current_value() {
        let mut w = wizard(3);
        assert_eq!(w.advance(), Err(WizardError::StepUnanswered { step: 0 }));
        assert_eq!(w.current_index(), 0);

        w.select_value(0, 4).unwrap();
        assert_eq!(w.advance(), Ok(1));
    }

    #[test]
    fn advance_is_refused_on_last_step() {
        let mut w = wizard(2);
        answer_and_advance(&mut w, 1);
        w.select_value(1, 2).unwrap();
        assert_eq!(w.advance(), Err(WizardError::AtLastStep));
        assert_eq!(w.current_index(), 1);
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut w = wizard(3);
        assert_eq!(w.retreat(), Err(WizardError::AtFirstStep));
        assert_eq!(w.current_index(), 0);
    }

    #[test]
    fn retreat_keeps_values() {
        let mut w = wizard(3);
        answer_and_advance(&mut w, 6);
        w.select_value(1, 9).unwrap();
        assert_eq!(w.retreat(), Ok(0));
        assert_eq!(w.value_at(0).map(|s| s.value()), Some(6));
        assert_eq!(w.value_at(1).map(|s| s.value()), Some(9));
    }

    #[test]
    fn select_targets_only_current_step() {
        let mut w = wizard(3);
        assert_eq!(
            w.select_value(2, 5),
            Err(WizardError::StepNotCurrent { step: 2, current: 0 })
        );
        assert!(w.value_at(2).is_none());
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut w = wizard(2);
        assert!(matches!(
            w.select_value(0, 11),
            Err(WizardError::InvalidScore(_))
        ));
        assert!(matches!(
            w.select_value(0, -1),
            Err(WizardError::InvalidScore(_))
        ));
        assert!(w.value_at(0).is_none());
    }

    #[test]
    fn reselecting_same_value_is_idempotent() {
        let mut w = wizard(3);
        assert_eq!(w.select_value(0, 5), Ok(Selection::Recorded));
        let view_before = w.view();
        assert_eq!(w.select_value(0, 5), Ok(Selection::Unchanged));
        assert_eq!(w.value_at(0).map(|s| s.value()), Some(5));
        assert_eq!(w.view(), view_before);
    }

    #[test]
    fn changing_value_is_recorded() {
        let mut w = wizard(2);
        w.select_value(0, 5).unwrap();
        assert_eq!(w.select_value(0, 8), Ok(Selection::Recorded));
        assert_eq!(w.value_at(0).map(|s| s.value()), Some(8));
    }

    #[test]
    fn submit_fails_until_complete() {
        let mut w = wizard(2);
        w.select_value(0, 3).unwrap();
        assert_eq!(
            w.submit(),
            Err(WizardError::Incomplete {
                unanswered: vec![1]
            })
        );
    }

    #[test]
    fn submit_does_not_move_current_step() {
        let mut w = wizard(2);
        answer_and_advance(&mut w, 3);
        w.select_value(1, 7).unwrap();
        w.submit().unwrap();
        assert_eq!(w.current_index(), 1);
    }

    #[test]
    fn eight_category_scenario_yields_values_in_order() {
        let mut w = Wizard::new(CategorySet::canonical());
        for v in 0..=6 {
            answer_and_advance(&mut w, v);
        }
        assert!(w.is_last());
        w.select_value(7, 10).unwrap();

        let snapshot = w.submit().unwrap();
        assert_eq!(snapshot.values(), vec![0, 1, 2, 3, 4, 5, 6, 10]);
        assert_eq!(snapshot.labels(), CategorySet::canonical().labels().as_slice());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut w = wizard(3);
        answer_and_advance(&mut w, 1);
        answer_and_advance(&mut w, 2);
        w.reset();
        assert_eq!(w, wizard(3));
        assert!(w.submit().is_err());
    }

    #[test]
    fn view_on_first_unanswered_step() {
        let w = Wizard::new(CategorySet::canonical());
        let view = w.view();
        assert_eq!(view.step_number, 1);
        assert_eq!(view.step_total, 8);
        assert_eq!(view.label, "Work & career");
        assert!(view.is_first);
        assert!(!view.back_enabled);
        assert!(view.next_visible);
        assert!(!view.next_enabled);
        assert!(!view.submit_visible);
        assert!(view.selected().is_none());
    }

    #[test]
    fn view_on_last_answered_step() {
        let mut w = wizard(2);
        answer_and_advance(&mut w, 2);
        w.select_value(1, 9).unwrap();
        let view = w.view();
        assert_eq!(view.step_number, 2);
        assert!(view.is_last);
        assert!(view.back_enabled);
        assert!(!view.next_visible);
        assert!(view.submit_visible);
        assert!(view.submit_enabled);
        assert_eq!(view.selected().map(|s| s.value()), Some(9));
    }

    #[test]
    fn single_category_wizard_is_first_and_last() {
        let mut w = wizard(1);
        assert!(w.is_first() && w.is_last());
        assert_eq!(w.advance(), Err(WizardError::AtLastStep));
        w.select_value(0, 0).unwrap();
        assert_eq!(w.submit().unwrap().values(), vec![0]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Select(i64),
        Advance,
        Retreat,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..=10).prop_map(Op::Select),
            Just(Op::Advance),
            Just(Op::Retreat),
        ]
    }

    proptest! {
        #[test]
        fn advance_succeeds_iff_current_step_answered(
            n in 1usize..10,
            ops in prop::collection::vec(op_strategy(), 0..60),
        ) {
            let mut w = wizard(n);
            for op in ops {
                match op {
                    Op::Select(v) => {
                        let step = w.current_index();
                        w.select_value(step, v).unwrap();
                    }
                    Op::Advance => {
                        let before = w.current_index();
                        let answered = w.value_at(before).is_some();
                        let last = before == n - 1;
                        let result = w.advance();
                        prop_assert_eq!(result.is_ok(), answered && !last);
                        if result.is_err() {
                            prop_assert_eq!(w.current_index(), before);
                        }
                    }
                    Op::Retreat => {
                        let before = w.current_index();
                        let _ = w.retreat();
                        prop_assert_eq!(w.current_index(), before.saturating_sub(1));
                    }
                }
                prop_assert!(w.current_index() < n);
            }
        }

        #[test]
        fn submit_succeeds_iff_all_set(
            values in prop::collection::vec(prop::option::of(0i64..=10), 1..10),
        ) {
            let n = values.len();
            let mut w = wizard(n);
            w.values = values
                .iter()
                .map(|v| v.map(|v| Score::new(v).unwrap()))
                .collect();
            w.current_index = n - 1;

            let all_set = values.iter().all(Option::is_some);
            let result = w.submit();
            prop_assert_eq!(result.is_ok(), all_set);
            if let Ok(snapshot) = result {
                let expected: Vec<u8> = values.iter().map(|v| v.unwrap() as u8).collect();
                prop_assert_eq!(snapshot.values(), expected);
            }
        }

        #[test]
        fn revisiting_steps_in_any_order_keeps_latest_values(
            first in prop::collection::vec(0i64..=10, 1..8),
            edits in prop::collection::vec((0usize..8, 0i64..=10), 0..20),
        ) {
            let n = first.len();
            let mut w = wizard(n);
            let mut expected = first.clone();
            for (i, v) in first.iter().enumerate() {
                w.select_value(i, *v).unwrap();
                if i + 1 < n {
                    w.advance().unwrap();
                }
            }
            for (target, v) in edits {
                let target = target % n;
                while w.current_index() > target {
                    w.retreat().unwrap();
                }
                while w.current_index() < target {
                    w.advance().unwrap();
                }
                w.select_value(target, v).unwrap();
                expected[target] = v;
            }
            let snapshot = w.submit().unwrap();
            let expected: Vec<u8> = expected.iter().map(|v| *v as u8).collect();
            prop_assert_eq!(snapshot.values(), expected);
        }

        #[test]
        fn reset_then_submit_always_fails(
            n in 1usize..10,
            fill in prop::collection::vec(0i64..=10, 0..10),
        ) {
            let mut w = wizard(n);
            for v in fill.into_iter().take(n) {
                let step = w.current_index();
                w.select_value(step, v).unwrap();
                let _ = w.advance();
            }
            w.reset();
            prop_assert!(w.submit().is_err());
            prop_assert_eq!(w.current_index(), 0);
        }
    }
}
