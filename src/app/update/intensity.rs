use super::Effect;
use super::super::messages::IntensityBound;
use super::super::state::{App, INTENSITY_SCALE_FACTOR};
use tracing::{debug, warn};

impl App {
    /// Double or halve every pane's intensity maximum and remember the new
    /// multiplier so the next session starts with the same scaling.
    pub(super) fn handle_scale_intensity(&mut self, up: bool, effects: &mut Vec<Effect>) {
        let factor = if up {
            INTENSITY_SCALE_FACTOR
        } else {
            1.0 / INTENSITY_SCALE_FACTOR
        };
        self.multiplier *= factor;
        for window in &mut self.windows {
            window.scale_max(factor);
        }
        debug!(multiplier = self.multiplier, "Scaled intensity windows");
        effects.push(Effect::SaveMultiplier(self.multiplier));
        effects.extend(self.slice_refresh_effects());
    }

    pub(super) fn handle_intensity_input_changed(
        &mut self,
        slot: usize,
        bound: IntensityBound,
        value: String,
    ) {
        let Some(window) = self.windows.get_mut(slot) else {
            return;
        };
        match bound {
            IntensityBound::Min => window.min_input = value,
            IntensityBound::Max => window.max_input = value,
        }
    }

    pub(super) fn handle_intensity_input_submitted(
        &mut self,
        slot: usize,
        bound: IntensityBound,
        effects: &mut Vec<Effect>,
    ) {
        let Some(window) = self.windows.get_mut(slot) else {
            return;
        };
        let raw = match bound {
            IntensityBound::Min => window.min_input.clone(),
            IntensityBound::Max => window.max_input.clone(),
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => {
                match bound {
                    IntensityBound::Min => window.commit_min(value),
                    IntensityBound::Max => window.commit_max(value),
                }
                effects.extend(self.slice_refresh_effects());
            }
            Err(_) => {
                warn!(input = %raw, "Ignoring non-numeric intensity bound");
                // Put the committed value back so the field shows the truth.
                match bound {
                    IntensityBound::Min => window.min_input = super::super::state::format_intensity(window.min),
                    IntensityBound::Max => window.max_input = super::super::state::format_intensity(window.max),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use crate::manifest::{ElementImage, SessionElement, SessionManifest, SessionType};
    use crate::viewer::SliceType;
    use std::path::PathBuf;

    fn comparison_manifest() -> SessionManifest {
        SessionManifest {
            label_session_id: 9,
            dataset: "brains".into(),
            session_name: "intensity-test".into(),
            session_type: SessionType::ComparisonSlice,
            prompt: "Which is sharper?".into(),
            label_values: Vec::new(),
            elements: vec![SessionElement {
                element_id: 1,
                current_label: None,
                images: (0..2)
                    .map(|i| ElementImage {
                        image_name: format!("subject-{i:02}"),
                        slice_counts: [40, 40, 40],
                        image_max: 500.0,
                        slice_type: Some(SliceType::Axial),
                        slice_index: Some(20),
                    })
                    .collect(),
            }],
        }
    }

    fn build_test_app(multiplier: f64) -> App {
        let (app, _task) = App::bootstrap(
            comparison_manifest(),
            PathBuf::from("/tmp/slice-labeler-intensity-test.json"),
            AppConfig::default(),
            multiplier,
            None,
        );
        app
    }

    #[test]
    fn scaling_up_doubles_every_pane_and_persists_the_multiplier() {
        let mut app = build_test_app(1.0);
        let effects = app.reduce(Message::ScaleIntensity(true));

        assert_eq!(app.windows[0].max, 1_000.0);
        assert_eq!(app.windows[1].max, 1_000.0);
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::SaveMultiplier(value) if *value == 2.0
        )));
    }

    #[test]
    fn cached_multiplier_prescales_the_default_window() {
        let app = build_test_app(4.0);
        assert_eq!(app.windows[0].max, 2_000.0);
        assert!(app.side_panes()[0].url.ends_with("max=2000"));
    }

    #[test]
    fn scale_down_then_up_round_trips() {
        let mut app = build_test_app(1.0);
        app.reduce(Message::ScaleIntensity(false));
        assert_eq!(app.windows[0].max, 250.0);
        app.reduce(Message::ScaleIntensity(true));
        assert_eq!(app.windows[0].max, 500.0);
        assert_eq!(app.multiplier, 1.0);
    }

    #[test]
    fn committed_input_moves_the_window_and_refetches() {
        let mut app = build_test_app(1.0);
        app.reduce(Message::IntensityInputChanged {
            slot: 0,
            bound: IntensityBound::Min,
            value: "12.9".into(),
        });
        let effects = app.reduce(Message::IntensityInputSubmitted {
            slot: 0,
            bound: IntensityBound::Min,
        });

        assert_eq!(app.windows[0].min, 12.9);
        // Floored in the URL, not in the committed state.
        assert!(app.side_panes()[0].url.contains("min=12"));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::FetchThumbnails(_)))
        );
    }

    #[test]
    fn malformed_input_reverts_to_the_committed_value() {
        let mut app = build_test_app(1.0);
        app.reduce(Message::IntensityInputChanged {
            slot: 1,
            bound: IntensityBound::Max,
            value: "banana".into(),
        });
        let effects = app.reduce(Message::IntensityInputSubmitted {
            slot: 1,
            bound: IntensityBound::Max,
        });

        assert_eq!(app.windows[1].max, 500.0);
        assert_eq!(app.windows[1].max_input, "500");
        assert!(effects.is_empty());
    }
}
