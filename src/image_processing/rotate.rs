use image::{imageops, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use super::geometry::{CropRect, RotatedBounds};
use crate::error::JobError;

/// Fill for the corners uncovered by the rotation, opaque black
pub const FILL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Rotate `img` clockwise by `angle_degrees` on a canvas expanded to `bounds`.
///
/// The source is centered on a black canvas first so no corner is clipped.
pub fn rotate_expanded(img: &RgbaImage, angle_degrees: f64, bounds: RotatedBounds) -> RgbaImage {
    let (src_width, src_height) = img.dimensions();
    let (canvas_width, canvas_height) = bounds.canvas_size(src_width, src_height);

    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, FILL_COLOR);
    let offset_x = (canvas_width - src_width) / 2;
    let offset_y = (canvas_height - src_height) / 2;
    imageops::replace(&mut canvas, img, offset_x as i64, offset_y as i64);

    rotate_about_center(
        &canvas,
        (angle_degrees as f32).to_radians(),
        Interpolation::Bilinear,
        FILL_COLOR,
    )
}

/// Extract `crop` from the rotated canvas
pub fn extract(canvas: &RgbaImage, crop: &CropRect) -> Result<RgbaImage, JobError> {
    if crop.is_empty() {
        return Err(JobError::Transform(format!(
            "degenerate crop rectangle {}x{}",
            crop.width, crop.height
        )));
    }

    let (canvas_width, canvas_height) = canvas.dimensions();
    if !crop.fits_within(canvas_width, canvas_height) {
        return Err(JobError::Transform(format!(
            "crop rectangle {}x{} at ({}, {}) exceeds rotated canvas {}x{}",
            crop.width, crop.height, crop.left, crop.top, canvas_width, canvas_height
        )));
    }

    Ok(imageops::crop_imm(
        canvas,
        crop.left as u32,
        crop.top as u32,
        crop.width,
        crop.height,
    )
    .to_image())
}
