use crate::manifest::{SessionElement, SessionManifest};

/// Position within the session's element list.
pub struct SessionState {
    pub(in crate::app) manifest: SessionManifest,
    pub(in crate::app) element_index: usize,
}

impl SessionState {
    pub(in crate::app) fn new(manifest: SessionManifest, resume_element: Option<usize>) -> Self {
        let last = manifest.elements.len().saturating_sub(1);
        SessionState {
            element_index: resume_element.unwrap_or(0).min(last),
            manifest,
        }
    }

    pub(in crate::app) fn element_count(&self) -> usize {
        self.manifest.elements.len()
    }

    pub(in crate::app) fn current(&self) -> &SessionElement {
        &self.manifest.elements[self.element_index]
    }

    /// Move by `delta` elements, clamped to the list. Returns whether the
    /// position actually changed.
    pub(in crate::app) fn try_step(&mut self, delta: i64) -> bool {
        let last = self.element_count() as i64 - 1;
        let target = (self.element_index as i64 + delta).clamp(0, last) as usize;
        if target == self.element_index {
            false
        } else {
            self.element_index = target;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ElementImage, SessionType};

    fn manifest(element_count: usize) -> SessionManifest {
        SessionManifest {
            label_session_id: 1,
            dataset: "d".into(),
            session_name: "s".into(),
            session_type: SessionType::CategoricalVolume,
            prompt: "p".into(),
            label_values: vec!["Good".into(), "Bad".into()],
            elements: (0..element_count)
                .map(|i| SessionElement {
                    element_id: i as i64,
                    current_label: None,
                    images: vec![ElementImage {
                        image_name: format!("img-{i}"),
                        slice_counts: [10, 10, 10],
                        image_max: 100.0,
                        slice_type: None,
                        slice_index: None,
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn resume_point_is_clamped_to_the_list() {
        let session = SessionState::new(manifest(3), Some(99));
        assert_eq!(session.element_index, 2);
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut session = SessionState::new(manifest(3), None);
        assert!(!session.try_step(-1));
        assert_eq!(session.element_index, 0);
        assert!(session.try_step(1));
        assert!(session.try_step(5));
        assert_eq!(session.element_index, 2);
        assert!(!session.try_step(1));
    }
}
