use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration file. Every key is optional.
///
/// ```json
/// { "inputPath": "/photos/raw", "outputPath": "/photos/remixed", "jobs": 4 }
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub jobs: Option<usize>,
    pub verbose: Option<bool>,
    pub dry_run: Option<bool>,
}

impl ConfigFile {
    pub fn from_path(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }
}

impl Args {
    /// Load configuration from a JSON file and merge with command-line arguments
    /// Command-line arguments take precedence over config file values
    pub fn load_and_merge_config(&mut self) -> Result<()> {
        if let Some(config_path) = self.config_file.clone() {
            let config = ConfigFile::from_path(&config_path)?;
            self.merge_from_config(config);

            if self.verbose && !self.json_progress {
                eprintln!("Loaded configuration from: {:?}", config_path);
            }
        }
        Ok(())
    }

    fn merge_from_config(&mut self, config: ConfigFile) {
        if self.input_dir.is_none() {
            self.input_dir = config.input_path.map(PathBuf::from);
        }

        if self.output_dir.is_none() {
            self.output_dir = config.output_path.map(PathBuf::from);
        }

        if self.jobs.is_none() {
            self.jobs = config.jobs;
        }

        // Boolean flags can only be switched on from the file
        self.verbose |= config.verbose.unwrap_or(false);
        self.dry_run |= config.dry_run.unwrap_or(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_keys() {
        let config: ConfigFile = serde_json::from_str(
            r#"{"inputPath": "/raw", "outputPath": "/out", "jobs": 3, "dryRun": true}"#,
        )
        .unwrap();

        assert_eq!(config.input_path.as_deref(), Some("/raw"));
        assert_eq!(config.output_path.as_deref(), Some("/out"));
        assert_eq!(config.jobs, Some(3));
        assert_eq!(config.dry_run, Some(true));
        assert_eq!(config.verbose, None);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut args = Args {
            input_dir: Some(PathBuf::from("cli-in")),
            ..Default::default()
        };
        args.merge_from_config(ConfigFile {
            input_path: Some("file-in".to_string()),
            output_path: Some("file-out".to_string()),
            jobs: Some(2),
            verbose: Some(true),
            dry_run: None,
        });

        assert_eq!(args.input_dir, Some(PathBuf::from("cli-in")));
        assert_eq!(args.output_dir, Some(PathBuf::from("file-out")));
        assert_eq!(args.jobs, Some(2));
        assert!(args.verbose);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remix.json");
        fs::write(&path, r#"{"outputPath": "elsewhere"}"#).unwrap();

        let mut args = Args {
            config_file: Some(path),
            ..Default::default()
        };
        args.load_and_merge_config().unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("elsewhere")));
        assert_eq!(args.input_dir, None);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigFile::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
