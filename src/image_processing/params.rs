use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

use super::geometry::{crop_rect, rotated_bounds, CropRect, RotatedBounds, ROTATION_DEGREES};
use super::metadata::SourceMetadata;

/// Brightness multiplier range
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.7..=1.3;
/// Saturation multiplier range
pub const SATURATION_RANGE: RangeInclusive<f32> = 0.7..=1.3;
/// Hue shift range in degrees, drawn continuous then rounded
pub const HUE_RANGE: RangeInclusive<f32> = -30.0..=30.0;

/// Joint brightness / saturation / hue adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorModulation {
    pub brightness: f32,
    pub saturation: f32,
    /// Whole degrees
    pub hue: i32,
}

impl ColorModulation {
    pub const IDENTITY: ColorModulation = ColorModulation {
        brightness: 1.0,
        saturation: 1.0,
        hue: 0,
    };
}

/// Everything needed to transform one image. Never reused across jobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformParameters {
    pub angle_degrees: f64,
    pub bounds: RotatedBounds,
    pub crop: CropRect,
    pub color: ColorModulation,
}

/// Draw fresh color parameters from `rng`
pub fn draw_color<R: Rng>(rng: &mut R) -> ColorModulation {
    let brightness = rng.random_range(BRIGHTNESS_RANGE);
    let saturation = rng.random_range(SATURATION_RANGE);
    let hue = rng.random_range(HUE_RANGE).round() as i32;

    ColorModulation {
        brightness,
        saturation,
        hue,
    }
}

/// Derive the geometry from `metadata` and draw the color parameters from `rng`
pub fn draw_parameters<R: Rng>(
    metadata: &SourceMetadata,
    rng: &mut R,
) -> TransformParameters {
    let bounds = rotated_bounds(metadata.width, metadata.height, ROTATION_DEGREES);
    let crop = crop_rect(metadata.width, metadata.height, bounds);

    TransformParameters {
        angle_degrees: ROTATION_DEGREES,
        bounds,
        crop,
        color: draw_color(rng),
    }
}
