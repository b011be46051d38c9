//! Conversion settings, loadable from a TOML file
//!
//! Every key is optional:
//!
//! ```toml
//! [svg]
//! padding = 2.0
//! stroke_margin = 1.0
//! unit = "mm"
//!
//! [output]
//! directory = "out"
//! file_prefix = "canvas_"
//! main_canvas = 1
//! main_file = "out/project.svg"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where and under which names rendered canvases are written
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// Per-canvas files are named `{file_prefix}{index}.svg`
    pub file_prefix: String,
    /// Canvas additionally written as the main output, if any
    pub main_canvas: Option<usize>,
    /// Main output path; defaults to `<input stem>.svg` in `directory`
    pub main_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_prefix: "canvas_".to_string(),
            main_canvas: Some(1),
            main_file: None,
        }
    }
}

impl OutputConfig {
    /// Path for the per-canvas file of canvas `index`
    pub fn canvas_path(&self, index: usize) -> PathBuf {
        self.directory
            .join(format!("{}{}.svg", self.file_prefix, index))
    }

    /// Path for the main output when converting `input`
    pub fn main_path(&self, input: &Path) -> PathBuf {
        if let Some(path) = &self.main_file {
            return path.clone();
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.directory.join(format!("{}.svg", stem))
    }
}

/// Complete configuration for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub svg: SvgConfig,
    pub output: OutputConfig,
}

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the SVG rendering configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }

    /// Select the main canvas, or `None` to skip the main output
    pub fn with_main_canvas(mut self, index: Option<usize>) -> Self {
        self.output.main_canvas = index;
        self
    }

    /// Set an explicit main output path
    pub fn with_main_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.main_file = Some(path.into());
        self
    }
}
