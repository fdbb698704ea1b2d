//! Viewer geometry.
//!
//! Pure helpers behind the three-pane volume viewer: slice axes, clamped
//! index stepping, and the placement of the cross-hair guides drawn over
//! the inactive panes. Nothing here touches the widget tree, so the whole
//! module is testable headlessly.

use serde::{Deserialize, Serialize};

/// Anatomical axis a slice is cut along. Wire names match the server's
/// `slice_type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SliceType {
    Sagittal,
    Coronal,
    Axial,
}

impl SliceType {
    pub const ALL: [SliceType; 3] = [SliceType::Sagittal, SliceType::Coronal, SliceType::Axial];

    /// Name used in thumbnail URLs.
    pub fn wire_name(self) -> &'static str {
        match self {
            SliceType::Sagittal => "SAGITTAL",
            SliceType::Coronal => "CORONAL",
            SliceType::Axial => "AXIAL",
        }
    }

    /// Position of this axis in per-axis arrays (sagittal, coronal, axial).
    pub fn index(self) -> usize {
        match self {
            SliceType::Sagittal => 0,
            SliceType::Coronal => 1,
            SliceType::Axial => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<SliceType> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for SliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SliceType::Sagittal => "Sagittal",
            SliceType::Coronal => "Coronal",
            SliceType::Axial => "Axial",
        };
        write!(f, "{}", label)
    }
}

/// Direction of the cross-hair bar drawn over an inactive pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOrientation {
    Horizontal,
    Vertical,
}

/// Where to draw the guide in a pane: `offset_percent` is measured from the
/// top edge for horizontal bars and from the left edge for vertical ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidePlacement {
    pub orientation: GuideOrientation,
    pub offset_percent: f32,
}

/// Orientation of the guide shown in `pane` while `active` is the axis being
/// scrolled. The active pane itself carries no guide.
pub fn guide_orientation(active: SliceType, pane: SliceType) -> Option<GuideOrientation> {
    use GuideOrientation::{Horizontal, Vertical};
    if active == pane {
        return None;
    }
    let table = match active {
        SliceType::Sagittal => [None, Some(Vertical), Some(Vertical)],
        SliceType::Coronal => [Some(Vertical), None, Some(Horizontal)],
        SliceType::Axial => [Some(Horizontal), Some(Horizontal), None],
    };
    table[pane.index()]
}

/// Fractional position of the active slice within its count, as a percentage.
pub fn position_percent(slice_index: usize, slice_count: usize) -> f32 {
    if slice_count == 0 {
        return 0.0;
    }
    (slice_index as f32 / slice_count as f32) * 100.0
}

/// Full guide placement for `pane` given the active axis and its position.
/// Horizontal bars are anchored from the bottom of the volume, so their
/// offset from the top is the complement of the position.
pub fn guide_placement(
    active: SliceType,
    pane: SliceType,
    active_index: usize,
    active_count: usize,
) -> Option<GuidePlacement> {
    let orientation = guide_orientation(active, pane)?;
    let percent = position_percent(active_index, active_count);
    let offset_percent = match orientation {
        GuideOrientation::Horizontal => 100.0 - percent,
        GuideOrientation::Vertical => percent,
    };
    Some(GuidePlacement {
        orientation,
        offset_percent,
    })
}

/// One-based "index / count" readout shown under the main pane.
pub fn indicator_text(slice_index: usize, slice_count: usize) -> String {
    format!("{} / {}", slice_index + 1, slice_count)
}

/// Step an index by a signed amount, clamped to `[0, count - 1]`.
pub fn step_index(index: usize, amount: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let stepped = index as i64 + amount;
    stepped.clamp(0, count as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_orientation_matches_axis_table() {
        use GuideOrientation::{Horizontal, Vertical};
        assert_eq!(guide_orientation(SliceType::Sagittal, SliceType::Sagittal), None);
        assert_eq!(
            guide_orientation(SliceType::Sagittal, SliceType::Coronal),
            Some(Vertical)
        );
        assert_eq!(
            guide_orientation(SliceType::Sagittal, SliceType::Axial),
            Some(Vertical)
        );
        assert_eq!(
            guide_orientation(SliceType::Coronal, SliceType::Sagittal),
            Some(Vertical)
        );
        assert_eq!(
            guide_orientation(SliceType::Coronal, SliceType::Axial),
            Some(Horizontal)
        );
        assert_eq!(
            guide_orientation(SliceType::Axial, SliceType::Sagittal),
            Some(Horizontal)
        );
        assert_eq!(
            guide_orientation(SliceType::Axial, SliceType::Coronal),
            Some(Horizontal)
        );
    }

    #[test]
    fn horizontal_guides_measure_from_the_bottom() {
        let placement =
            guide_placement(SliceType::Axial, SliceType::Sagittal, 30, 100).expect("placement");
        assert_eq!(placement.orientation, GuideOrientation::Horizontal);
        assert!((placement.offset_percent - 70.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_guides_measure_from_the_left() {
        let placement =
            guide_placement(SliceType::Sagittal, SliceType::Coronal, 25, 100).expect("placement");
        assert_eq!(placement.orientation, GuideOrientation::Vertical);
        assert!((placement.offset_percent - 25.0).abs() < 1e-4);
    }

    #[test]
    fn active_pane_has_no_guide() {
        assert_eq!(guide_placement(SliceType::Coronal, SliceType::Coronal, 5, 10), None);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        assert_eq!(step_index(0, -1, 40), 0);
        assert_eq!(step_index(0, -10, 40), 0);
        assert_eq!(step_index(39, 1, 40), 39);
        assert_eq!(step_index(35, 10, 40), 39);
        assert_eq!(step_index(5, -10, 40), 0);
        assert_eq!(step_index(20, 10, 40), 30);
    }

    #[test]
    fn indicator_is_one_based() {
        assert_eq!(indicator_text(0, 128), "1 / 128");
        assert_eq!(indicator_text(127, 128), "128 / 128");
    }
}
