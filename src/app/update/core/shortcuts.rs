use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Map a key press to a message, honoring the rebindable keys from the
    /// config. Presses with a system modifier held are keyboard commands
    /// and never ours; shift stays available because it selects the fast
    /// slice step. Digits 1-9 always press the matching label control.
    pub(in crate::app) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }

        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowLeft) => {
                return Some(Message::StepSlice(-self.step_amount(modifiers)));
            }
            Key::Named(key::Named::ArrowRight) => {
                return Some(Message::StepSlice(self.step_amount(modifiers)));
            }
            Key::Named(key::Named::ArrowUp) => return Some(Message::CycleSliceType(-1)),
            Key::Named(key::Named::ArrowDown) => return Some(Message::CycleSliceType(1)),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if let Some(index) = label_hotkey_index(&pressed) {
            return Some(Message::LabelClicked(index));
        }

        if Self::shortcut_matches(&self.config.key_previous_slice, "a", &pressed) {
            Some(Message::StepSlice(-self.step_amount(modifiers)))
        } else if Self::shortcut_matches(&self.config.key_next_slice, "d", &pressed) {
            Some(Message::StepSlice(self.step_amount(modifiers)))
        } else if Self::shortcut_matches(&self.config.key_previous_slice_type, "w", &pressed) {
            Some(Message::CycleSliceType(-1))
        } else if Self::shortcut_matches(&self.config.key_next_slice_type, "s", &pressed) {
            Some(Message::CycleSliceType(1))
        } else if Self::shortcut_matches(&self.config.key_intensity_up, "e", &pressed) {
            Some(Message::ScaleIntensity(true))
        } else if Self::shortcut_matches(&self.config.key_intensity_down, "r", &pressed) {
            Some(Message::ScaleIntensity(false))
        } else if Self::shortcut_matches(&self.config.key_next_element, "space", &pressed) {
            Some(Message::NextElement)
        } else if Self::shortcut_matches(&self.config.key_previous_element, "u", &pressed) {
            Some(Message::PreviousElement)
        } else {
            None
        }
    }

    fn step_amount(&self, modifiers: Modifiers) -> i64 {
        if modifiers.shift() {
            self.config.slice_step_fast
        } else {
            self.config.slice_step
        }
    }

    pub(super) fn shortcut_matches(raw: &str, fallback: &str, pressed: &str) -> bool {
        Self::normalize_shortcut_token(raw, fallback) == pressed
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

/// Digits 1-9 select the first through ninth label control.
fn label_hotkey_index(pressed: &str) -> Option<usize> {
    let mut chars = pressed.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit == 0 {
        return None;
    }
    Some(digit as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn empty_binding_falls_back_to_default() {
        assert!(App::shortcut_matches("", "u", "u"));
        assert!(!App::shortcut_matches("", "u", "d"));
    }

    #[test]
    fn digits_map_to_zero_based_label_indices() {
        assert_eq!(label_hotkey_index("1"), Some(0));
        assert_eq!(label_hotkey_index("9"), Some(8));
        assert_eq!(label_hotkey_index("0"), None);
        assert_eq!(label_hotkey_index("12"), None);
        assert_eq!(label_hotkey_index("e"), None);
    }
}
