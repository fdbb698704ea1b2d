mod core;
mod intensity;
mod labels;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SaveMultiplier(f64),
    SaveResume(usize),
    SubmitLabel {
        generation: u64,
        element_id: i64,
        label_value: String,
        elapsed_ms: u64,
    },
    FetchThumbnails(Vec<String>),
}
