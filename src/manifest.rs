//! Session manifest loading.
//!
//! A labeling session's fixed inputs (dataset, prompt, label values, the
//! element list with per-image slice counts and intensity ceilings) are
//! produced by the label server's tooling and handed to this client as a
//! JSON file on the command line. This module knows how to read and sanity
//! check that file; it never writes it.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::viewer::SliceType;

/// Label choices offered by pairwise comparison sessions. Fixed server-side;
/// the manifest's own `label_values` are ignored for this session type.
pub const COMPARISON_LABEL_VALUES: [&str; 4] = ["First", "Second", "Neither", "Not Sure"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    CategoricalVolume,
    CategoricalSlice,
    ComparisonSlice,
}

impl SessionType {
    pub fn is_comparison(self) -> bool {
        matches!(self, SessionType::ComparisonSlice)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionManifest {
    pub label_session_id: i64,
    pub dataset: String,
    pub session_name: String,
    pub session_type: SessionType,
    pub prompt: String,
    #[serde(default)]
    pub label_values: Vec<String>,
    pub elements: Vec<SessionElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionElement {
    pub element_id: i64,
    /// Label already stored for this element, if the annotator has been here
    /// before in an earlier run.
    #[serde(default)]
    pub current_label: Option<String>,
    /// One image for categorical sessions, two for comparisons.
    pub images: Vec<ElementImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementImage {
    pub image_name: String,
    /// Slice counts along (sagittal, coronal, axial).
    pub slice_counts: [usize; 3],
    /// Largest pixel value in the volume; seeds the intensity window maximum.
    pub image_max: f64,
    /// Fixed slice shown by slice and comparison sessions. Volume sessions
    /// leave both unset and let the viewer scroll freely.
    #[serde(default)]
    pub slice_type: Option<SliceType>,
    #[serde(default)]
    pub slice_index: Option<usize>,
}

impl SessionManifest {
    /// Label values to offer as controls, in display order.
    pub fn display_label_values(&self) -> Vec<String> {
        if self.session_type.is_comparison() {
            COMPARISON_LABEL_VALUES.iter().map(|v| v.to_string()).collect()
        } else {
            self.label_values.clone()
        }
    }
}

/// Read and validate a session manifest.
pub fn load_manifest(path: &Path) -> Result<SessionManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session manifest at {}", path.display()))?;
    let manifest: SessionManifest = serde_json::from_str(&data)
        .with_context(|| format!("Malformed session manifest at {}", path.display()))?;
    validate(&manifest)?;
    info!(
        session = %manifest.session_name,
        session_id = manifest.label_session_id,
        dataset = %manifest.dataset,
        elements = manifest.elements.len(),
        "Loaded session manifest"
    );
    Ok(manifest)
}

fn validate(manifest: &SessionManifest) -> Result<()> {
    if manifest.elements.is_empty() {
        bail!("Session manifest contains no elements");
    }
    if !manifest.session_type.is_comparison() && manifest.label_values.is_empty() {
        bail!("Categorical session manifest lists no label values");
    }

    let expected_images = if manifest.session_type.is_comparison() { 2 } else { 1 };
    let fixed_slice = manifest.session_type != SessionType::CategoricalVolume;

    for element in &manifest.elements {
        if element.images.len() != expected_images {
            bail!(
                "Element {} has {} image(s), expected {}",
                element.element_id,
                element.images.len(),
                expected_images
            );
        }
        for image in &element.images {
            if image.slice_counts.iter().any(|&count| count == 0) {
                bail!("Image {} reports an empty slice axis", image.image_name);
            }
            if fixed_slice && (image.slice_type.is_none() || image.slice_index.is_none()) {
                bail!(
                    "Image {} is missing its fixed slice for a slice-level session",
                    image.image_name
                );
            }
        }
    }
    Ok(())
}
