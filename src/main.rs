use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use std::process::ExitCode;
use std::time::Instant;
use strum::IntoEnumIterator;

use photo_remixer::utils::{
    create_progress_bar, format_duration, validate_inputs, ImageExtension,
};
use photo_remixer::{
    Args, BatchError, BatchSummary, JobOutcome, JsonMessage, ProcessingConfig, ProcessingEngine,
    COMPLETION_NOTICE,
};

fn main() -> Result<ExitCode> {
    let start_time = Instant::now();
    let mut args = Args::parse();
    args.load_and_merge_config()?;
    validate_inputs(&args)?;

    let json_mode = args.json_progress;
    let config = ProcessingConfig {
        input_dir: args.input_dir(),
        output_dir: args.output_dir(),
        parallel_jobs: args.parallel_jobs(),
        // Verbose text would corrupt the JSON stream
        verbose: args.verbose && !json_mode,
        dry_run: args.dry_run,
    };

    if !json_mode {
        println!("{}", style("Photo Remixer - Batch Image Variation").bold().blue());
        println!();
    }

    if config.verbose {
        print_configuration(&config);
    }

    let engine = ProcessingEngine::new(config)?;

    let jobs = match engine.discover_images() {
        Ok(jobs) => jobs,
        Err(e) => return Ok(report_directory_error(&e, json_mode)),
    };

    if let Err(e) = engine.prepare_output_dir() {
        return Ok(report_directory_error(&e, json_mode));
    }

    let config = engine.config();
    let verbose = config.verbose;
    let dry_run = config.dry_run;

    let progress = if json_mode {
        JsonMessage::started(jobs.len(), &config.input_dir, &config.output_dir).emit();
        ProgressBar::hidden()
    } else {
        if jobs.is_empty() {
            println!(
                "{}",
                style("No images found with recognized extensions").yellow()
            );
        }
        let pb = create_progress_bar(jobs.len() as u64)?;
        pb.set_message("Remixing images");
        pb
    };

    let summary = engine.process_batch(&jobs, |outcome| {
        progress.inc(1);
        if json_mode {
            emit_outcome_json(outcome);
        } else {
            progress.suspend(|| print_outcome(outcome, verbose));
        }
    });

    progress.finish_and_clear();

    if json_mode {
        JsonMessage::summary(
            summary.total_files,
            summary.processed,
            summary.failed,
            start_time.elapsed().as_secs_f64(),
        )
        .emit();
    } else {
        println!("{}", COMPLETION_NOTICE);
        print_summary(&summary, start_time, dry_run);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_configuration(config: &ProcessingConfig) {
    let extensions: Vec<String> = ImageExtension::iter().map(|e| e.to_string()).collect();

    println!("{}", style("Configuration:").bold());
    println!("  Input folder: {}", config.input_dir.display());
    println!("  Output folder: {}", config.output_dir.display());
    println!("  Parallel jobs: {}", config.parallel_jobs);
    println!("  Extensions: {}", extensions.join(", "));
    if config.dry_run {
        println!("  Dry run mode: enabled (simulation only - no files will be created)");
    }
    println!();
}

/// Report a directory-level failure and pick the exit code
fn report_directory_error(error: &BatchError, json_mode: bool) -> ExitCode {
    if json_mode {
        JsonMessage::directory_failed(error).emit();
    } else {
        eprintln!("{}", style(error).red());
    }
    ExitCode::FAILURE
}

fn emit_outcome_json(outcome: &JobOutcome<'_>) {
    match &outcome.result {
        Ok(report) => JsonMessage::file_completed(&outcome.job.input_path, report).emit(),
        Err(e) => JsonMessage::file_failed(&outcome.job.input_path, e).emit(),
    }
}

fn print_outcome(outcome: &JobOutcome<'_>, verbose: bool) {
    match &outcome.result {
        Ok(report) => {
            println!("{}", style(outcome.notice()).green());
            if verbose {
                let meta = &report.metadata;
                let params = &report.parameters;
                let crop = params.crop;
                println!(
                    "    {}x{} source, crop {}x{} at ({}, {}), brightness {:.2}, saturation {:.2}, hue {:+}° [{}/{}]",
                    meta.width,
                    meta.height,
                    crop.width,
                    crop.height,
                    crop.left,
                    crop.top,
                    params.color.brightness,
                    params.color.saturation,
                    params.color.hue,
                    outcome.completed,
                    outcome.total,
                );
                if let Some(orientation) = meta.orientation {
                    println!(
                        "    {} orientation tag dropped ({})",
                        style("EXIF").dim(),
                        orientation
                    );
                }
            }
        }
        Err(_) => eprintln!("{}", style(outcome.notice()).red()),
    }
}

fn print_summary(summary: &BatchSummary, start_time: Instant, dry_run: bool) {
    println!();
    let header = if dry_run {
        style("Dry Run Results Summary:").bold().cyan()
    } else {
        style("Results Summary:").bold().green()
    };
    println!("{}", header);

    let label = if dry_run {
        "Would be remixed"
    } else {
        "Successfully remixed"
    };
    println!("  {}: {}", label, style(summary.processed).bold().green());
    if summary.failed > 0 {
        println!("  Failed: {}", style(summary.failed).bold().red());
        println!("  Success rate: {:.1}%", summary.success_rate());
    }
    println!(
        "  Total time: {}",
        style(format_duration(start_time.elapsed())).bold()
    );
    if summary.total_files > 0 {
        println!(
            "  Average time per image: {}",
            style(format_duration(summary.average_duration())).dim()
        );
    }
}
