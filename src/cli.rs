use clap::Parser;
use std::path::PathBuf;

/// Default input directory name, next to the executable
pub const DEFAULT_INPUT_DIR: &str = "input";
/// Default output directory name, next to the executable
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Parser, Debug)]
#[command(
    name = "photo-remixer",
    version,
    about = "Rotate, crop and recolor every image in a folder with randomized parameters",
    long_about = "
Photo Remixer - Batch Image Variation

Reads every image in the input folder, rotates it by 4 degrees, crops away the
rotation border, applies a random brightness, saturation and hue shift, strips
the orientation metadata and writes the result under the same filename in the
output folder.

Recognized extensions (case-insensitive): jpg, jpeg, png, tiff, bmp, gif.
Every run draws fresh parameters, so repeated runs produce different outputs.

Example Usage:
  # Use the input/ and output/ folders next to the executable
  photo-remixer

  # Explicit folders, verbose per-image parameters
  photo-remixer -i ~/Photos/raw -o ~/Photos/remixed --verbose

  # Four images at a time
  photo-remixer -i ~/Photos/raw -o ~/Photos/remixed -j 4

  # Machine-readable progress for a wrapper script
  photo-remixer -i ~/Photos/raw -o ~/Photos/remixed --json-progress

  # Show what would be written without touching the output folder
  photo-remixer -i ~/Photos/raw -o ~/Photos/remixed --dry-run"
)]
pub struct Args {
    /// Input directory [default: ./input next to the executable]
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output directory, created if missing [default: ./output next to the executable]
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of images processed at once (1 = sequential, 0 = one per CPU core)
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose output with per-image parameters
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Emit progress and results as JSON lines instead of text
    #[arg(long = "json-progress")]
    pub json_progress: bool,

    /// Compute parameters for every image without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}

impl Args {
    /// Input directory, falling back to `input` next to the executable
    pub fn input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| program_dir().join(DEFAULT_INPUT_DIR))
    }

    /// Output directory, falling back to `output` next to the executable
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| program_dir().join(DEFAULT_OUTPUT_DIR))
    }

    /// Worker count, with 0 meaning one per CPU core
    pub fn parallel_jobs(&self) -> usize {
        match self.jobs.unwrap_or(1) {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

/// Directory holding the running executable, or the working directory
/// when it cannot be determined
fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}


// Default implementation for tests
#[cfg(test)]
impl Default for Args {
    fn default() -> Self {
        Self {
            input_dir: None,
            output_dir: None,
            jobs: None,
            verbose: false,
            json_progress: false,
            dry_run: false,
            config_file: None,
        }
    }
}
