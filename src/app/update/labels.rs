use super::Effect;
use super::super::state::App;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_label_clicked(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(value) = self.labels.value_at(index).map(str::to_string) else {
            return;
        };
        let generation = self.labels.begin_submission();
        let element_id = self.session.current().element_id;
        let elapsed_ms = self.timer.elapsed_ms();
        debug!(element_id, label = %value, elapsed_ms, "Submitting label");
        effects.push(Effect::SubmitLabel {
            generation,
            element_id,
            label_value: value,
            elapsed_ms,
        });
    }

    pub(super) fn handle_label_posted(
        &mut self,
        generation: u64,
        element_id: i64,
        label_value: String,
        error: Option<String>,
    ) {
        if let Some(err) = error {
            // Selection and timer stay as they were; the annotator can try again.
            warn!(element_id, label = %label_value, "Label failed: {err}");
            self.status = Some("Label failed".to_string());
            return;
        }
        if element_id != self.session.current().element_id {
            debug!(element_id, "Dropping label response for a different element");
            return;
        }
        if !self.labels.apply_success(generation, &label_value) {
            debug!(generation, "Dropping label response from a superseded submission");
            return;
        }
        info!(element_id, label = %label_value, "Label saved");
        self.timer.reset();
        self.status = Some("Label saved".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use crate::manifest::{ElementImage, SessionElement, SessionManifest, SessionType};
    use std::path::PathBuf;

    fn manifest() -> SessionManifest {
        SessionManifest {
            label_session_id: 5,
            dataset: "brains".into(),
            session_name: "labels-test".into(),
            session_type: SessionType::CategoricalVolume,
            prompt: "Rate the scan".into(),
            label_values: vec!["Good".into(), "Bad".into(), "Unsure".into()],
            elements: vec![SessionElement {
                element_id: 300,
                current_label: None,
                images: vec![ElementImage {
                    image_name: "subject-00".into(),
                    slice_counts: [40, 40, 40],
                    image_max: 800.0,
                    slice_type: None,
                    slice_index: None,
                }],
            }],
        }
    }

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(
            manifest(),
            PathBuf::from("/tmp/slice-labeler-labels-test.json"),
            AppConfig::default(),
            1.0,
            None,
        );
        app
    }

    fn submitted(effects: &[Effect]) -> (u64, i64, String) {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::SubmitLabel {
                    generation,
                    element_id,
                    label_value,
                    ..
                } => Some((*generation, *element_id, label_value.clone())),
                _ => None,
            })
            .expect("a SubmitLabel effect")
    }

    #[test]
    fn click_submits_the_matching_value() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::LabelClicked(1));
        let (_, element_id, value) = submitted(&effects);
        assert_eq!(element_id, 300);
        assert_eq!(value, "Bad");
        // Selection waits for the server's answer.
        assert!(!app.labels.is_selected("Bad"));
    }

    #[test]
    fn out_of_range_control_is_ignored() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::LabelClicked(7));
        assert!(effects.is_empty());
    }

    #[test]
    fn success_selects_and_resets_the_timer() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::LabelClicked(0));
        let (generation, element_id, value) = submitted(&effects);

        app.reduce(Message::LabelPosted {
            generation,
            element_id,
            label_value: value,
            error: None,
        });

        assert!(app.labels.is_selected("Good"));
        assert_eq!(app.timer.elapsed_ms(), 0);
        assert_eq!(app.status.as_deref(), Some("Label saved"));
    }

    #[test]
    fn failure_leaves_selection_and_timer_alone() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::LabelClicked(0));
        let (generation, element_id, value) = submitted(&effects);
        let elapsed_before = app.timer.elapsed();

        app.reduce(Message::LabelPosted {
            generation,
            element_id,
            label_value: value,
            error: Some("503 Service Unavailable".into()),
        });

        assert!(!app.labels.is_selected("Good"));
        assert!(app.timer.elapsed() >= elapsed_before);
        assert_eq!(app.status.as_deref(), Some("Label failed"));
    }

    #[test]
    fn double_click_lets_the_last_issued_submission_win() {
        let mut app = build_test_app();
        let first = submitted(&app.reduce(Message::LabelClicked(0)));
        let second = submitted(&app.reduce(Message::LabelClicked(1)));

        // Responses arrive out of order: the second click's response first.
        app.reduce(Message::LabelPosted {
            generation: second.0,
            element_id: second.1,
            label_value: second.2,
            error: None,
        });
        app.reduce(Message::LabelPosted {
            generation: first.0,
            element_id: first.1,
            label_value: first.2,
            error: None,
        });

        assert!(app.labels.is_selected("Bad"));
        assert!(!app.labels.is_selected("Good"));
    }

    #[test]
    fn response_for_a_previous_element_is_dropped() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::LabelClicked(0));
        let (generation, _element_id, value) = submitted(&effects);

        app.reduce(Message::LabelPosted {
            generation,
            element_id: 999,
            label_value: value,
            error: None,
        });

        assert!(!app.labels.is_selected("Good"));
    }
}
