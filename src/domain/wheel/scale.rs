//! The 11-position rating selector shown for each step.
//!
//! The scale owns no state: it is derived from the wizard's stored value for
//! the current step every time a step is displayed.

use serde::Serialize;

use crate::domain::foundation::Score;

/// One selectable position on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleOption {
    pub score: Score,
    /// Mirrors `aria-checked` on a radio button.
    pub selected: bool,
}

impl ScaleOption {
    /// Text shown on the option.
    pub fn caption(&self) -> String {
        self.score.to_string()
    }
}

/// Builds the 0..=10 options with at most one marked selected.
pub fn scale_options(selected: Option<Score>) -> Vec<ScaleOption> {
    Score::all()
        .map(|score| ScaleOption {
            score,
            selected: selected == Some(score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_eleven_positions() {
        let options = scale_options(None);
        assert_eq!(options.len(), 11);
        assert_eq!(options[0].caption(), "0");
        assert_eq!(options[10].caption(), "10");
    }

    #[test]
    fn nothing_selected_without_value() {
        assert!(scale_options(None).iter().all(|o| !o.selected));
    }

    #[test]
    fn exactly_one_selected_with_value() {
        let options = scale_options(Some(Score::new(4).unwrap()));
        let selected: Vec<u8> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.score.value())
            .collect();
        assert_eq!(selected, vec![4]);
    }
}
