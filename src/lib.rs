// Library exports for the binary and the integration tests
pub mod cli;
pub mod config_file;
pub mod error;
pub mod image_processing;
pub mod json_output;
pub mod utils;

// Re-export commonly used types
pub use cli::Args;
pub use error::{BatchError, JobError};
pub use image_processing::{
    batch::BatchSummary, ImageJob, JobOutcome, JobReport, ProcessingConfig, ProcessingEngine,
    COMPLETION_NOTICE,
};
pub use json_output::JsonMessage;
