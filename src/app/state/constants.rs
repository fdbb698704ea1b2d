/// Factor applied to the intensity maximum by one press of the scale-up key;
/// scale-down divides by the same factor.
pub(crate) const INTENSITY_SCALE_FACTOR: f64 = 2.0;

/// Thickness of the cross-hair guide bars, in pixels.
pub(crate) const GUIDE_THICKNESS_PX: u16 = 2;

/// Width reserved for the intensity min/max text inputs.
pub(crate) const INTENSITY_INPUT_WIDTH_PX: f32 = 90.0;

/// Height of the side panes in the volume viewer.
pub(crate) const SIDE_PANE_HEIGHT_PX: f32 = 220.0;

/// Height of the main pane (and of fixed-slice panes).
pub(crate) const MAIN_PANE_HEIGHT_PX: f32 = 420.0;
