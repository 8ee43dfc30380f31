use image::{Rgba, RgbaImage};

use super::params::ColorModulation;

/// Apply brightness, saturation and hue modulation in one pass.
///
/// Works in HSV: value is scaled by `brightness`, saturation by
/// `saturation`, and the hue is rotated by `hue` degrees. Alpha is kept.
pub fn modulate(img: &RgbaImage, modulation: &ColorModulation) -> RgbaImage {
    if *modulation == ColorModulation::IDENTITY {
        return img.clone();
    }

    let (width, height) = img.dimensions();
    let mut output = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, modulate_pixel(pixel, modulation));
    }

    output
}

fn modulate_pixel(pixel: &Rgba<u8>, modulation: &ColorModulation) -> Rgba<u8> {
    let (h, s, v) = rgb_to_hsv(pixel[0] as f32, pixel[1] as f32, pixel[2] as f32);

    let new_h = (h + modulation.hue as f32).rem_euclid(360.0);
    let new_s = (s * modulation.saturation).clamp(0.0, 1.0);
    let new_v = (v * modulation.brightness).clamp(0.0, 1.0);

    let (r, g, b) = hsv_to_rgb(new_h, new_s, new_v);

    Rgba([
        r.round().clamp(0.0, 255.0) as u8,
        g.round().clamp(0.0, 255.0) as u8,
        b.round().clamp(0.0, 255.0) as u8,
        pixel[3],
    ])
}

/// Convert RGB to HSV color space. Hue is in `[0, 360)`.
fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let v = max;

    (h, s, v)
}

/// Convert HSV to RGB color space
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r_prime, g_prime, b_prime) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        (r_prime + m) * 255.0,
        (g_prime + m) * 255.0,
        (b_prime + m) * 255.0,
    )
}
