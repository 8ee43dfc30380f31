use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

use crate::cli::Args;

/// Image extensions picked up from the input directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Tiff,
    Bmp,
    Gif,
}

impl ImageExtension {
    /// Match the text after the last dot of the file name, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let (_, ext) = name.rsplit_once('.')?;
        ext.parse().ok()
    }
}

/// Check if a file has one of the recognized image extensions
pub fn has_valid_extension(path: &Path) -> bool {
    ImageExtension::from_path(path).is_some()
}

/// Create a styled progress bar
pub fn create_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.blue} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg} ({eta})",
        )?
        .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Validate command line arguments
pub fn validate_inputs(args: &Args) -> Result<()> {
    if let Some(jobs) = args.jobs {
        if jobs > 32 {
            return Err(anyhow::anyhow!(
                "Job count too high (max 32), got: {}",
                jobs
            ));
        }
    }

    if let (Some(input), Some(output)) = (&args.input_dir, &args.output_dir) {
        if input == output {
            return Err(anyhow::anyhow!(
                "Input and output directories must differ: {}",
                input.display()
            ));
        }
    }

    Ok(())
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}
