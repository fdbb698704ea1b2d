/// Label controls for the current element: the offered values, which one is
/// selected, and a generation counter that orders overlapping submissions.
///
/// Selection is a single owned value compared by string equality, so "exactly
/// one control selected" holds by construction. The generation counter
/// resolves the double-click race: only the most recently issued submission
/// may update the selection when its response arrives.
pub struct LabelState {
    values: Vec<String>,
    selected: Option<String>,
    generation: u64,
}

impl LabelState {
    pub(in crate::app) fn new(values: Vec<String>, initial: Option<String>) -> Self {
        LabelState {
            values,
            selected: initial,
            generation: 0,
        }
    }

    pub(in crate::app) fn values(&self) -> &[String] {
        &self.values
    }

    pub(in crate::app) fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub(in crate::app) fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    /// Restore the stored selection when switching elements.
    pub(in crate::app) fn set_selected(&mut self, value: Option<String>) {
        self.selected = value;
    }

    /// Stamp a new outgoing submission; the returned generation travels with
    /// the request and comes back with the response.
    pub(in crate::app) fn begin_submission(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(in crate::app) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply a successful submission. Stale generations are ignored so a
    /// slow earlier response cannot overwrite a later choice.
    pub(in crate::app) fn apply_success(&mut self, generation: u64, value: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.selected = Some(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> LabelState {
        LabelState::new(vec!["Good".into(), "Bad".into(), "Unsure".into()], None)
    }

    #[test]
    fn success_selects_exactly_the_submitted_value() {
        let mut labels = labels();
        let generation = labels.begin_submission();
        assert!(labels.apply_success(generation, "Bad"));
        assert!(labels.is_selected("Bad"));
        assert!(!labels.is_selected("Good"));
        assert!(!labels.is_selected("Unsure"));
    }

    #[test]
    fn stale_generation_cannot_overwrite_a_later_choice() {
        let mut labels = labels();
        let first = labels.begin_submission();
        let second = labels.begin_submission();
        assert!(labels.apply_success(second, "Good"));
        // The earlier submission's response arrives late.
        assert!(!labels.apply_success(first, "Bad"));
        assert!(labels.is_selected("Good"));
    }

    #[test]
    fn selection_matches_by_exact_string() {
        let mut labels = labels();
        labels.set_selected(Some("Good".into()));
        assert!(!labels.is_selected("good"));
        assert!(labels.is_selected("Good"));
    }

    #[test]
    fn failed_submission_leaves_selection_untouched() {
        let mut labels = labels();
        labels.set_selected(Some("Good".into()));
        let _generation = labels.begin_submission();
        // No apply_success call: the reducer skips it on error.
        assert!(labels.is_selected("Good"));
    }
}
