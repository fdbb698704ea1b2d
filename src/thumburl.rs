//! Thumbnail URL construction.
//!
//! The server renders slice thumbnails at
//! `/thumb/{dataset}/{image}?slice_index=..&slice_type=..&min=..&max=..`.
//! Intensity bounds are floored to integers because the rendering endpoint
//! only accepts whole values. Dataset and image names are inserted verbatim;
//! they come from the session manifest and are plain file stems in practice
//! (see DESIGN.md for the escaping question).

use crate::viewer::SliceType;

/// Build a server-relative thumbnail URL. Pure: identical inputs always
/// yield the identical string.
pub fn thumbnail_url(
    dataset: &str,
    image: &str,
    slice_type: SliceType,
    slice_index: usize,
    intensity_min: f64,
    intensity_max: f64,
) -> String {
    format!(
        "/thumb/{}/{}?slice_index={}&slice_type={}&min={}&max={}",
        dataset,
        image,
        slice_index,
        slice_type.wire_name(),
        intensity_min.floor() as i64,
        intensity_max.floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_bounds_are_floored() {
        let url = thumbnail_url("d", "img", SliceType::Axial, 5, 12.9, 240.4);
        assert_eq!(url, "/thumb/d/img?slice_index=5&slice_type=AXIAL&min=12&max=240");
    }

    #[test]
    fn integral_bounds_pass_through() {
        let url = thumbnail_url("brains", "subject-07", SliceType::Coronal, 0, 0.0, 1024.0);
        assert_eq!(
            url,
            "/thumb/brains/subject-07?slice_index=0&slice_type=CORONAL&min=0&max=1024"
        );
    }

    #[test]
    fn output_is_deterministic() {
        let a = thumbnail_url("d", "i", SliceType::Sagittal, 17, 3.3, 9.9);
        let b = thumbnail_url("d", "i", SliceType::Sagittal, 17, 3.3, 9.9);
        assert_eq!(a, b);
    }

    #[test]
    fn negative_min_floors_toward_negative_infinity() {
        let url = thumbnail_url("d", "i", SliceType::Axial, 1, -0.5, 10.0);
        assert_eq!(url, "/thumb/d/i?slice_index=1&slice_type=AXIAL&min=-1&max=10");
    }
}
