//! JSON output for wrapper scripts
//!
//! When --json-progress is enabled, every event is emitted as one JSON line
//! on stdout and all other output is suppressed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BatchError, JobError};
use crate::image_processing::JobReport;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonMessage {
    /// Batch is about to start
    Started {
        total: usize,
        input_dir: String,
        output_dir: String,
    },
    /// One image written (or simulated in dry-run mode)
    FileCompleted {
        input_path: String,
        output_path: String,
        brightness: f32,
        saturation: f32,
        hue: i32,
        crop: [i64; 4],
        written: bool,
        processing_time_ms: u128,
    },
    /// One image failed; the batch continues
    FileFailed {
        input_path: String,
        kind: String,
        error: String,
    },
    /// Input or output directory unusable; the batch did not run
    DirectoryFailed { error: String },
    /// Processing summary
    Summary {
        total_files: usize,
        processed: usize,
        failed: usize,
        duration_secs: f64,
    },
}

impl JsonMessage {
    /// Emit JSON message to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn started(total: usize, input_dir: &Path, output_dir: &Path) -> Self {
        Self::Started {
            total,
            input_dir: input_dir.display().to_string(),
            output_dir: output_dir.display().to_string(),
        }
    }

    pub fn file_completed(input_path: &Path, report: &JobReport) -> Self {
        let crop = report.parameters.crop;
        let color = report.parameters.color;
        Self::FileCompleted {
            input_path: input_path.display().to_string(),
            output_path: report.output_path.display().to_string(),
            brightness: color.brightness,
            saturation: color.saturation,
            hue: color.hue,
            crop: [crop.left, crop.top, crop.width as i64, crop.height as i64],
            written: report.written,
            processing_time_ms: report.elapsed.as_millis(),
        }
    }

    pub fn file_failed(input_path: &Path, error: &JobError) -> Self {
        Self::FileFailed {
            input_path: input_path.display().to_string(),
            kind: error.kind().to_string(),
            error: error.to_string(),
        }
    }

    pub fn directory_failed(error: &BatchError) -> Self {
        Self::DirectoryFailed {
            error: error.to_string(),
        }
    }

    pub fn summary(total_files: usize, processed: usize, failed: usize, duration_secs: f64) -> Self {
        Self::Summary {
            total_files,
            processed,
            failed,
            duration_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tagged_serialization() {
        let msg = JsonMessage::summary(3, 2, 1, 0.5);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.starts_with(r#"{"type":"summary""#), "{}", json);

        let back: JsonMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_file_failed_carries_kind() {
        let err = JobError::Transform("degenerate crop rectangle 0x3".to_string());
        let msg = JsonMessage::file_failed(&PathBuf::from("in/strip.png"), &err);
        let value: serde_json::Value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["type"], "filefailed");
        assert_eq!(value["kind"], "transform");
        assert_eq!(value["input_path"], "in/strip.png");
    }
}
