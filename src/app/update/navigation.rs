use super::Effect;
use super::super::state::App;
use crate::viewer::SliceType;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_step_element(&mut self, delta: i64, effects: &mut Vec<Effect>) {
        if !self.session.try_step(delta) {
            return;
        }
        self.rebuild_for_element();
        info!(
            element = self.session.element_index + 1,
            of = self.session.element_count(),
            "Switched element"
        );
        effects.push(Effect::SaveResume(self.session.element_index));
        effects.extend(self.slice_refresh_effects());
    }

    pub(super) fn handle_step_slice(&mut self, amount: i64, effects: &mut Vec<Effect>) {
        let Some(nav) = self.nav.as_mut() else {
            return;
        };
        nav.step_active(amount);
        debug!(
            slice = nav.active_index() + 1,
            axis = %nav.active(),
            "Stepped slice"
        );
        effects.extend(self.slice_refresh_effects());
    }

    pub(super) fn handle_cycle_slice_type(&mut self, delta: i64, effects: &mut Vec<Effect>) {
        let Some(nav) = self.nav.as_mut() else {
            return;
        };
        nav.cycle_active(delta);
        effects.extend(self.slice_refresh_effects());
    }

    pub(super) fn handle_select_slice_type(
        &mut self,
        slice_type: SliceType,
        effects: &mut Vec<Effect>,
    ) {
        let Some(nav) = self.nav.as_mut() else {
            return;
        };
        nav.set_active(slice_type);
        effects.extend(self.slice_refresh_effects());
    }
}
