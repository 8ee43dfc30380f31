use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single image job. Never fatal for the batch.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("cannot decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("cannot transform image: {0}")]
    Transform(String),

    #[error("cannot encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("cannot write image: {0}")]
    Write(#[source] std::io::Error),
}

impl JobError {
    /// Split an encoder failure into the I/O part and the codec part
    pub fn from_save(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => JobError::Write(io),
            other => JobError::Encode(other),
        }
    }

    /// Short machine-friendly kind, used by the JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            JobError::Decode(_) => "decode",
            JobError::Transform(_) => "transform",
            JobError::Encode(_) => "encode",
            JobError::Write(_) => "write",
        }
    }
}

/// Directory-level failure that aborts the whole batch
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Error reading input folder: {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating output folder: {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_save_error_split() {
        let io_err = image::ImageError::IoError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(matches!(JobError::from_save(io_err), JobError::Write(_)));

        let unsupported = image::ImageError::Unsupported(
            image::error::UnsupportedError::from_format_and_kind(
                image::error::ImageFormatHint::Unknown,
                image::error::UnsupportedErrorKind::Format(image::error::ImageFormatHint::Unknown),
            ),
        );
        let err = JobError::from_save(unsupported);
        assert_eq!(err.kind(), "encode");
    }

    #[test]
    fn test_batch_error_messages() {
        let err = BatchError::ReadInput {
            path: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Error reading input folder: missing: not found");

        let err = BatchError::CreateOutput {
            path: PathBuf::from("/root/out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Error creating output folder:"));
    }
}
