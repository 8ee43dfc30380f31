use exif::{Exif, In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strum_macros::Display;

/// Value of the EXIF orientation tag (0x0112), named after the transform a
/// viewer applies to display the stored pixels upright.
///
/// Only reported: pixels are always processed as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ExifOrientation {
    #[strum(to_string = "upright")]
    Upright,
    #[strum(to_string = "mirrored")]
    Mirrored,
    #[strum(to_string = "upside down")]
    UpsideDown,
    #[strum(to_string = "upside down, mirrored")]
    UpsideDownMirrored,
    #[strum(to_string = "quarter turn left, mirrored")]
    QuarterLeftMirrored,
    /// Tag value 6, what most phones write for a portrait shot
    #[strum(to_string = "quarter turn right")]
    QuarterRight,
    #[strum(to_string = "quarter turn right, mirrored")]
    QuarterRightMirrored,
    #[strum(to_string = "quarter turn left")]
    QuarterLeft,
}

impl ExifOrientation {
    /// Map a raw tag value; anything outside 1..=8 is not an orientation
    pub fn from_tag_value(value: u32) -> Option<Self> {
        let orientation = match value {
            1 => Self::Upright,
            2 => Self::Mirrored,
            3 => Self::UpsideDown,
            4 => Self::UpsideDownMirrored,
            5 => Self::QuarterLeftMirrored,
            6 => Self::QuarterRight,
            7 => Self::QuarterRightMirrored,
            8 => Self::QuarterLeft,
            _ => return None,
        };
        Some(orientation)
    }
}

fn read_exif(image_path: &Path) -> Option<Exif> {
    let file = File::open(image_path).ok()?;
    Reader::new()
        .read_from_container(&mut BufReader::new(file))
        .ok()
}

/// Orientation recorded in the file, if it carries a valid tag
pub fn read_exif_orientation(image_path: &Path) -> Option<ExifOrientation> {
    let exif = read_exif(image_path)?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    ExifOrientation::from_tag_value(field.value.get_uint(0)?)
}

/// True when the file carries an orientation tag, whatever its value
pub fn has_orientation_tag(image_path: &Path) -> bool {
    read_exif(image_path)
        .map(|exif| exif.get_field(Tag::Orientation, In::PRIMARY).is_some())
        .unwrap_or(false)
}
