//! Rotation bounding box and crop rectangle math.
//!
//! The crop rectangle is a scale-back heuristic rather than the exact
//! largest inscribed rectangle: each dimension is shrunk by the same ratio
//! the rotation grew it, applied as `W * (W / newW)`. Outputs depend on this
//! exact shape, so the formula must not be "corrected".

use serde::Serialize;

/// Fixed rotation applied to every image, in degrees (clockwise)
pub const ROTATION_DEGREES: f64 = 4.0;

/// Bounding box of a `W x H` rectangle rotated about its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotatedBounds {
    pub width: f64,
    pub height: f64,
}

impl RotatedBounds {
    /// Integer canvas that holds the rotated image.
    ///
    /// Never smaller than the source so the source can be placed on it
    /// unclipped before rotating.
    pub fn canvas_size(&self, src_width: u32, src_height: u32) -> (u32, u32) {
        (
            (self.width.ceil() as u32).max(src_width),
            (self.height.ceil() as u32).max(src_height),
        )
    }
}

/// Region extracted from the rotated canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRect {
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the rectangle lies entirely inside a `canvas_w x canvas_h` canvas
    pub fn fits_within(&self, canvas_w: u32, canvas_h: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.left + self.width as i64 <= canvas_w as i64
            && self.top + self.height as i64 <= canvas_h as i64
    }
}

/// Compute the axis-aligned bounding box of the rotated image.
///
/// `newW = |W cos r| + |H sin r|`, `newH = |W sin r| + |H cos r|`
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> RotatedBounds {
    let radians = angle_degrees.to_radians();
    let w = width as f64;
    let h = height as f64;

    RotatedBounds {
        width: (w * radians.cos()).abs() + (h * radians.sin()).abs(),
        height: (w * radians.sin()).abs() + (h * radians.cos()).abs(),
    }
}

/// Compute the centered crop rectangle for a source of `width x height`
/// rotated into `bounds`.
pub fn crop_rect(width: u32, height: u32, bounds: RotatedBounds) -> CropRect {
    let w = width as f64;
    let h = height as f64;

    let crop_width = (w * (w / bounds.width)).floor();
    let crop_height = (h * (h / bounds.height)).floor();

    CropRect {
        left: ((bounds.width - crop_width) / 2.0).floor() as i64,
        top: ((bounds.height - crop_height) / 2.0).floor() as i64,
        width: crop_width as u32,
        height: crop_height as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotated_bounds_800x600() {
        let bounds = rotated_bounds(800, 600, ROTATION_DEGREES);
        assert!((bounds.width - 839.905).abs() < 0.01, "width: {}", bounds.width);
        assert!((bounds.height - 654.344).abs() < 0.01, "height: {}", bounds.height);
    }

    #[test]
    fn test_zero_angle_keeps_dimensions() {
        let bounds = rotated_bounds(320, 200, 0.0);
        assert_eq!(bounds.width, 320.0);
        assert_eq!(bounds.height, 200.0);
    }

    #[test]
    fn test_crop_rect_800x600() {
        let bounds = rotated_bounds(800, 600, ROTATION_DEGREES);
        let crop = crop_rect(800, 600, bounds);
        assert_eq!(
            crop,
            CropRect {
                left: 39,
                top: 52,
                width: 761,
                height: 550,
            }
        );
        assert_eq!(bounds.canvas_size(800, 600), (840, 655));
        assert!(crop.fits_within(840, 655));
    }

    #[test]
    fn test_crop_rect_square() {
        let bounds = rotated_bounds(100, 100, ROTATION_DEGREES);
        let crop = crop_rect(100, 100, bounds);
        assert_eq!((crop.left, crop.top, crop.width, crop.height), (6, 6, 93, 93));
    }

    #[test]
    fn test_tiny_image_yields_empty_crop() {
        let bounds = rotated_bounds(1, 1, ROTATION_DEGREES);
        assert!(crop_rect(1, 1, bounds).is_empty());
    }

    #[test]
    fn test_extreme_aspect_ratio_escapes_canvas() {
        // A 1px wide strip: the heuristic overshoots the height
        let bounds = rotated_bounds(1, 1000, ROTATION_DEGREES);
        let crop = crop_rect(1, 1000, bounds);
        let (canvas_w, canvas_h) = bounds.canvas_size(1, 1000);
        assert!(crop.is_empty() || !crop.fits_within(canvas_w, canvas_h));
    }

    /// Dimensions with an aspect ratio of at most 1:20
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (20u32..=4000).prop_flat_map(|w| {
            let min_h = (w / 20).max(20);
            let max_h = (w * 20).min(8000);
            (Just(w), min_h..=max_h)
        })
    }

    proptest! {
        /// Property: the rotation bounding box never shrinks either dimension.
        #[test]
        fn prop_bounds_never_shrink((w, h) in dimensions_strategy()) {
            let bounds = rotated_bounds(w, h, ROTATION_DEGREES);
            prop_assert!(bounds.width >= w as f64);
            prop_assert!(bounds.height >= h as f64);
        }

        /// Property: the crop is positive and no larger than the source.
        #[test]
        fn prop_crop_bounded_by_source((w, h) in dimensions_strategy()) {
            let crop = crop_rect(w, h, rotated_bounds(w, h, ROTATION_DEGREES));
            prop_assert!(crop.width > 0 && crop.height > 0);
            prop_assert!(crop.width <= w);
            prop_assert!(crop.height <= h);
        }

        /// Property: the crop lies inside the rotated canvas.
        #[test]
        fn prop_crop_inside_canvas((w, h) in dimensions_strategy()) {
            let bounds = rotated_bounds(w, h, ROTATION_DEGREES);
            let crop = crop_rect(w, h, bounds);
            prop_assert!(crop.left >= 0);
            prop_assert!(crop.top >= 0);
            prop_assert!((crop.left + crop.width as i64) as f64 <= bounds.width + 1.0);
            prop_assert!((crop.top + crop.height as i64) as f64 <= bounds.height + 1.0);

            let (canvas_w, canvas_h) = bounds.canvas_size(w, h);
            prop_assert!(crop.fits_within(canvas_w, canvas_h));
        }
    }
}
