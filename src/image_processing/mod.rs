pub mod batch;
pub mod color_correction;
pub mod geometry;
pub mod metadata;
pub mod orientation;
pub mod params;
pub mod rotate;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use rand::Rng;
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::error::{BatchError, JobError};
use crate::utils::{has_valid_extension, verbose_println};
use batch::{BatchProcessor, BatchSummary};
use metadata::{read_source_metadata, SourceMetadata};
use params::{draw_parameters, TransformParameters};

/// Printed once every job has been attempted
pub const COMPLETION_NOTICE: &str = "All images have been processed.";

#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub parallel_jobs: usize,
    pub verbose: bool,
    pub dry_run: bool,
}

/// One unit of work: a source image and where its remix goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// What a successful job did
#[derive(Debug, Clone)]
pub struct JobReport {
    pub output_path: PathBuf,
    pub metadata: SourceMetadata,
    pub parameters: TransformParameters,
    /// False in dry-run mode
    pub written: bool,
    pub elapsed: Duration,
}

/// Result of one job, handed to the batch callback as soon as it finishes
#[derive(Debug)]
pub struct JobOutcome<'a> {
    pub job: &'a ImageJob,
    pub result: Result<JobReport, JobError>,
    /// Jobs finished so far, this one included
    pub completed: usize,
    pub total: usize,
}

impl JobOutcome<'_> {
    /// One-line console notice for this job
    pub fn notice(&self) -> String {
        match &self.result {
            Ok(report) if report.written => {
                format!("Processed: {}", report.output_path.display())
            }
            Ok(report) => format!("Would process: {}", report.output_path.display()),
            Err(e) => format!("Error processing {}: {}", self.job.input_path.display(), e),
        }
    }
}

pub struct ProcessingEngine {
    config: ProcessingConfig,
    pool: Option<rayon::ThreadPool>,
}

impl ProcessingEngine {
    pub fn new(config: ProcessingConfig) -> Result<Self> {
        // Sequential runs stay on the calling thread
        let pool = if config.parallel_jobs > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.parallel_jobs)
                    .build()
                    .context("Failed to initialize thread pool")?,
            )
        } else {
            None
        };

        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// List the recognized images directly inside the input directory
    pub fn discover_images(&self) -> Result<Vec<ImageJob>, BatchError> {
        let input_dir = &self.config.input_dir;
        let read_error = |source: io::Error| BatchError::ReadInput {
            path: input_dir.clone(),
            source,
        };

        let dir_metadata = std::fs::metadata(input_dir).map_err(read_error)?;
        if !dir_metadata.is_dir() {
            return Err(read_error(io::Error::other("not a directory")));
        }

        verbose_println(
            self.config.verbose,
            &format!("Scanning directory: {}", input_dir.display()),
        );

        let walker = WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut jobs = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| read_error(io::Error::from(e)))?;
            let path = entry.path();

            if entry.file_type().is_file() && has_valid_extension(path) {
                jobs.push(ImageJob {
                    input_path: path.to_path_buf(),
                    output_path: self.config.output_dir.join(entry.file_name()),
                });
            }
        }

        verbose_println(
            self.config.verbose,
            &format!("Found {} image files", jobs.len()),
        );
        Ok(jobs)
    }

    /// Create the output directory tree. Skipped in dry-run mode.
    pub fn prepare_output_dir(&self) -> Result<(), BatchError> {
        if self.config.dry_run {
            verbose_println(
                self.config.verbose,
                "Dry run mode: Skipping output directory creation",
            );
            return Ok(());
        }

        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| {
            BatchError::CreateOutput {
                path: self.config.output_dir.clone(),
                source,
            }
        })
    }

    /// Run every job, reporting each outcome through `on_outcome` as it
    /// finishes. A failing job never stops the others.
    pub fn process_batch<F>(&self, jobs: &[ImageJob], on_outcome: F) -> BatchSummary
    where
        F: Fn(&JobOutcome<'_>) + Send + Sync,
    {
        let processor = BatchProcessor::new(jobs.len());

        let run_job = |job: &ImageJob| {
            let result = self.process_job(job);
            let completed = processor.record(result.is_ok());
            on_outcome(&JobOutcome {
                job,
                result,
                completed,
                total: jobs.len(),
            });
        };

        match &self.pool {
            Some(pool) => pool.install(|| jobs.par_iter().for_each(run_job)),
            None => jobs.iter().for_each(run_job),
        }

        processor.summary()
    }

    /// Transform a single image with a fresh, unseeded random source
    pub fn process_job(&self, job: &ImageJob) -> Result<JobReport, JobError> {
        self.process_job_with_rng(job, &mut rand::rng())
    }

    /// Transform a single image, drawing the color parameters from `rng`
    pub fn process_job_with_rng<R: Rng>(
        &self,
        job: &ImageJob,
        rng: &mut R,
    ) -> Result<JobReport, JobError> {
        let start = Instant::now();

        let metadata = read_source_metadata(&job.input_path)?;
        let parameters = draw_parameters(&metadata, rng);

        if !self.config.dry_run {
            transform_and_save(&job.input_path, &job.output_path, &parameters)?;
        }

        Ok(JobReport {
            output_path: job.output_path.clone(),
            metadata,
            parameters,
            written: !self.config.dry_run,
            elapsed: start.elapsed(),
        })
    }
}

/// Decode, rotate, crop, modulate and encode one image.
///
/// The pipeline runs on RGBA. Alpha is written back when the source had it
/// and the output container can store it; JPEG gets plain RGB. The encoder
/// only receives the pixel buffer, so no EXIF block (and hence no
/// orientation tag) reaches the output file.
pub fn transform_and_save(
    input_path: &Path,
    output_path: &Path,
    parameters: &TransformParameters,
) -> Result<(), JobError> {
    let decoded = ImageReader::open(input_path)
        .map_err(|e| JobError::Decode(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| JobError::Decode(image::ImageError::IoError(e)))?
        .decode()
        .map_err(JobError::Decode)?;
    let keep_alpha = decoded.color().has_alpha() && supports_alpha(output_path);

    let rotated =
        rotate::rotate_expanded(&decoded.to_rgba8(), parameters.angle_degrees, parameters.bounds);
    let cropped = rotate::extract(&rotated, &parameters.crop)?;
    let remixed = DynamicImage::ImageRgba8(color_correction::modulate(&cropped, &parameters.color));

    let result = if keep_alpha {
        remixed.save(output_path)
    } else {
        DynamicImage::ImageRgb8(remixed.to_rgb8()).save(output_path)
    };
    result.map_err(JobError::from_save)
}

/// Whether the encoder picked from the output extension can store alpha
fn supports_alpha(output_path: &Path) -> bool {
    !matches!(ImageFormat::from_path(output_path), Ok(ImageFormat::Jpeg) | Err(_))
}
