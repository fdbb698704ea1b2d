use crate::viewer::{SliceType, step_index};

/// Scrollable position within a volume: the active axis plus one slice
/// index per axis. Indices always stay inside their per-axis counts.
pub struct VolumeNav {
    active: SliceType,
    indices: [usize; 3],
    counts: [usize; 3],
}

impl VolumeNav {
    pub(in crate::app) fn new(counts: [usize; 3]) -> Self {
        VolumeNav {
            active: SliceType::Sagittal,
            // Start in the middle of each axis rather than at an edge slice.
            indices: [counts[0] / 2, counts[1] / 2, counts[2] / 2],
            counts,
        }
    }

    pub(in crate::app) fn active(&self) -> SliceType {
        self.active
    }

    pub(in crate::app) fn index_for(&self, slice_type: SliceType) -> usize {
        self.indices[slice_type.index()]
    }

    pub(in crate::app) fn count_for(&self, slice_type: SliceType) -> usize {
        self.counts[slice_type.index()]
    }

    pub(in crate::app) fn active_index(&self) -> usize {
        self.index_for(self.active)
    }

    pub(in crate::app) fn active_count(&self) -> usize {
        self.count_for(self.active)
    }

    pub(in crate::app) fn step_active(&mut self, amount: i64) {
        let slot = self.active.index();
        self.indices[slot] = step_index(self.indices[slot], amount, self.counts[slot]);
    }

    /// Move the active axis along the fixed sagittal/coronal/axial order,
    /// clamped at the ends (no wraparound).
    pub(in crate::app) fn cycle_active(&mut self, delta: i64) {
        let target = (self.active.index() as i64 + delta).clamp(0, 2) as usize;
        if let Some(slice_type) = SliceType::from_index(target) {
            self.active = slice_type;
        }
    }

    pub(in crate::app) fn set_active(&mut self, slice_type: SliceType) {
        self.active = slice_type;
    }
}

/// Committed intensity window for one image pane, plus the raw text the
/// annotator is editing. Inputs only take effect on submit; the committed
/// values are what thumbnail URLs are built from.
pub struct IntensityWindow {
    pub(in crate::app) min: f64,
    pub(in crate::app) max: f64,
    pub(in crate::app) min_input: String,
    pub(in crate::app) max_input: String,
}

impl IntensityWindow {
    pub(in crate::app) fn new(min: f64, max: f64) -> Self {
        IntensityWindow {
            min,
            max,
            min_input: format_intensity(min),
            max_input: format_intensity(max),
        }
    }

    pub(in crate::app) fn scale_max(&mut self, factor: f64) {
        self.max *= factor;
        self.max_input = format_intensity(self.max);
    }

    pub(in crate::app) fn commit_min(&mut self, value: f64) {
        self.min = value;
        self.min_input = format_intensity(value);
    }

    pub(in crate::app) fn commit_max(&mut self, value: f64) {
        self.max = value;
        self.max_input = format_intensity(value);
    }
}

/// Render an intensity value the way a number input would show it: no
/// trailing `.0` on whole values.
pub(in crate::app) fn format_intensity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
