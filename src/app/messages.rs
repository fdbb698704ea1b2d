use crate::viewer::SliceType;
use iced::keyboard::{Key, Modifiers};
use iced::widget::image;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextElement,
    PreviousElement,
    SelectSliceType(SliceType),
    /// Move the active axis by a signed number of slices.
    StepSlice(i64),
    /// Switch the active axis up or down the fixed axis order.
    CycleSliceType(i64),
    /// Double (`true`) or halve (`false`) the intensity window maximum.
    ScaleIntensity(bool),
    IntensityInputChanged {
        slot: usize,
        bound: IntensityBound,
        value: String,
    },
    IntensityInputSubmitted {
        slot: usize,
        bound: IntensityBound,
    },
    /// Press the Nth label control (0-based).
    LabelClicked(usize),
    LabelPosted {
        generation: u64,
        element_id: i64,
        label_value: String,
        error: Option<String>,
    },
    ThumbnailLoaded {
        url: String,
        handle: Option<image::Handle>,
        error: Option<String>,
    },
    ToggleTheme,
    /// A raw pointer press anywhere in the window; feeds the interaction
    /// timer the way a document-level click listener would.
    PointerActivity,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityBound {
    Min,
    Max,
}
