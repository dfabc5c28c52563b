//! Configuration management for the cycle-time estimator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project (`.gcode-times.toml`) and user config files
//! - Precedence: command line > project file > user file > defaults

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::report::OutputFormat;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".gcode-times.toml";

/// Most programs compared in one run
pub const MAX_PROGRAMS: usize = 3;

/// Program file extensions the estimator is meant for
pub const PROGRAM_EXTENSIONS: [&str; 3] = ["txt", "mpf", "spf"];

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments for the estimator
#[derive(Debug, Parser)]
#[command(name = "gcode-times")]
#[command(about = "Estimate cut time, distance, feeds and speeds per group of CNC programs")]
#[command(version)]
pub struct Args {
    /// Programs to analyze and compare
    #[arg(required = true, num_args = 1..=MAX_PROGRAMS, help = "Up to three program files (.txt, .mpf, .spf)")]
    pub files: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Tool and group name overrides
    #[arg(long, help = "TOML file with tool/group edits keyed by row id")]
    pub edits: Option<PathBuf>,

    /// Where to write the report
    #[arg(short, long, help = "Write the report to a file instead of stdout")]
    pub output: Option<PathBuf>,

    /// Explicit config file
    #[arg(long, help = "Config file to use instead of ./.gcode-times.toml")]
    pub config: Option<PathBuf>,

    /// Log level for the estimator
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings that can come from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub edits: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file, `None` if it does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load a config file; a relative `edits` path is taken from the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        if let (Some(edits), Some(dir)) = (&config.edits, path.parent()) {
            if edits.is_relative() {
                config.edits = Some(dir.join(edits));
            }
        }
        Ok(config)
    }

    /// Fill unset fields from a lower-priority config
    fn or(self, fallback: FileConfig) -> FileConfig {
        FileConfig {
            format: self.format.or(fallback.format),
            log_level: self.log_level.or(fallback.log_level),
            edits: self.edits.or(fallback.edits),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub edits: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let project = match &args.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => FileConfig::load_optional(Path::new(PROJECT_CONFIG_FILE))?,
        };

        let user = match user_config_path() {
            Some(path) => FileConfig::load_optional(&path)?,
            None => None,
        };

        Self::merge(args, project.unwrap_or_default(), user.unwrap_or_default())
    }

    /// Merge arguments over project over user settings
    pub fn merge(args: Args, project: FileConfig, user: FileConfig) -> Result<Self> {
        if args.files.is_empty() || args.files.len() > MAX_PROGRAMS {
            bail!(
                "expected between 1 and {} program files, got {}",
                MAX_PROGRAMS,
                args.files.len()
            );
        }

        let files_config = project.or(user);

        Ok(Config {
            files: args.files,
            format: args.format.or(files_config.format).unwrap_or_default(),
            edits: args.edits.or(files_config.edits),
            output: args.output,
            log_level: args
                .log_level
                .or(files_config.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// `<config dir>/gcode-times/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gcode-times").join("config.toml"))
}

/// Whether a path has one of the program extensions (case-insensitive)
pub fn is_program_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PROGRAM_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
