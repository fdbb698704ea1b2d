use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        if is_user_interaction(&message) {
            self.timer.record_activity();
        }

        let mut effects = Vec::new();

        match message {
            Message::NextElement => self.handle_step_element(1, &mut effects),
            Message::PreviousElement => self.handle_step_element(-1, &mut effects),
            Message::SelectSliceType(slice_type) => {
                self.handle_select_slice_type(slice_type, &mut effects)
            }
            Message::StepSlice(amount) => self.handle_step_slice(amount, &mut effects),
            Message::CycleSliceType(delta) => self.handle_cycle_slice_type(delta, &mut effects),
            Message::ScaleIntensity(up) => self.handle_scale_intensity(up, &mut effects),
            Message::IntensityInputChanged { slot, bound, value } => {
                self.handle_intensity_input_changed(slot, bound, value)
            }
            Message::IntensityInputSubmitted { slot, bound } => {
                self.handle_intensity_input_submitted(slot, bound, &mut effects)
            }
            Message::LabelClicked(index) => self.handle_label_clicked(index, &mut effects),
            Message::LabelPosted {
                generation,
                element_id,
                label_value,
                error,
            } => self.handle_label_posted(generation, element_id, label_value, error),
            Message::ThumbnailLoaded { url, handle, error } => {
                self.handle_thumbnail_loaded(url, handle, error)
            }
            Message::ToggleTheme => {
                self.config.theme = match self.config.theme {
                    ThemeMode::Day => ThemeMode::Night,
                    ThemeMode::Night => ThemeMode::Day,
                };
            }
            Message::PointerActivity => {}
            Message::KeyPressed { key, modifiers } => {
                if let Some(mapped) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(mapped));
                }
            }
        }

        effects
    }
}

/// Whether a message originates from the annotator rather than from a
/// completing background task. Only annotator activity feeds the timer.
fn is_user_interaction(message: &Message) -> bool {
    !matches!(
        message,
        Message::LabelPosted { .. } | Message::ThumbnailLoaded { .. }
    )
}
