//! In-memory state of the lead questionnaire: the current step and the
//! answers accumulated so far. Lives for a single page view; nothing is
//! persisted.

use serde_json::{Map, Value};

pub const TOTAL_STEPS: usize = 7;

#[derive(Clone, PartialEq, Debug)]
pub struct Questionario {
    current: usize,
    answers: Map<String, Value>,
}

impl Default for Questionario {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionario {
    pub fn new() -> Self {
        Self {
            current: 1,
            answers: Map::new(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn answers(&self) -> &Map<String, Value> {
        &self.answers
    }

    /// Merges a completed step's fields into the record (existing keys are
    /// overwritten, none are removed) and moves to the next step, clamped
    /// at the last one.
    pub fn advance(&mut self, step_data: Option<Map<String, Value>>) {
        if let Some(data) = step_data {
            for (key, value) in data {
                self.answers.insert(key, value);
            }
        }
        self.current = (self.current + 1).min(TOTAL_STEPS);
    }

    /// Moves back one step, never below the first.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current - 1) as f64 / (TOTAL_STEPS - 1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn starts_on_the_first_step_with_no_answers() {
        let state = Questionario::new();
        assert_eq!(state.current_step(), 1);
        assert!(state.answers().is_empty());
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn retreat_never_goes_below_the_first_step() {
        let mut state = Questionario::new();
        for _ in 0..10 {
            state.retreat();
        }
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn advance_never_goes_past_the_last_step() {
        let mut state = Questionario::new();
        for _ in 0..20 {
            state.advance(None);
        }
        assert_eq!(state.current_step(), TOTAL_STEPS);
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn answers_accumulate_across_steps() {
        let mut state = Questionario::new();
        state.advance(Some(fields(&[("x", json!(1))])));
        state.advance(Some(fields(&[("y", json!(2))])));
        assert_eq!(state.answers().get("x"), Some(&json!(1)));
        assert_eq!(state.answers().get("y"), Some(&json!(2)));
    }

    #[test]
    fn resubmitting_a_step_overwrites_without_duplicating() {
        let mut state = Questionario::new();
        state.advance(Some(fields(&[("x", json!(1))])));
        state.advance(Some(fields(&[("y", json!(2))])));
        state.retreat();
        state.retreat();
        state.advance(Some(fields(&[("x", json!(3))])));
        assert_eq!(state.answers().get("x"), Some(&json!(3)));
        assert_eq!(state.answers().get("y"), Some(&json!(2)));
        assert_eq!(state.answers().len(), 2);
    }

    #[test]
    fn progress_is_linear_in_the_step_index() {
        let mut state = Questionario::new();
        state.advance(None);
        assert!((state.progress_percent() - 100.0 / 6.0).abs() < 1e-9);
        state.advance(None);
        assert!((state.progress_percent() - 200.0 / 6.0).abs() < 1e-9);
    }
}
