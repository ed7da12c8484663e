//! Benchmark options.
//!
//! The configuration surface of a benchmark session: which joint group and
//! predefined poses drive query generation, plus the executor-side knobs
//! (runs, timeout, pipelines, output location) that this crate loads and
//! passes through untouched.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::OptionsError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_runs() -> u32 {
    10
}
const fn default_timeout_secs() -> f64 {
    10.0
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("benchmark_results")
}

// ---------------------------------------------------------------------------
// BenchmarkOptions
// ---------------------------------------------------------------------------

/// Benchmark session configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkOptions {
    /// Human-readable benchmark name.
    #[serde(default)]
    pub benchmark_name: String,

    /// Planning scene the benchmark runs against.
    #[serde(default)]
    pub scene_name: String,

    /// Default planning group.
    #[serde(default)]
    pub group_name: String,

    /// Joint group the predefined poses belong to. When empty, query
    /// generation falls back to `group_name`.
    #[serde(default)]
    pub predefined_poses_group: String,

    /// Ordered pose identifiers to combine into start/goal pairings.
    /// May be empty, repeat entries, or name unknown poses.
    #[serde(default)]
    pub predefined_poses: Vec<String>,

    /// Planning pipelines the executor should evaluate.
    #[serde(default)]
    pub planning_pipelines: Vec<String>,

    /// Planner runs per query (default: 10).
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Per-run planner timeout in seconds (default: 10.0).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Directory the executor writes result logs to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            benchmark_name: String::new(),
            scene_name: String::new(),
            group_name: String::new(),
            predefined_poses_group: String::new(),
            predefined_poses: Vec::new(),
            planning_pipelines: Vec::new(),
            runs: default_runs(),
            timeout_secs: default_timeout_secs(),
            output_dir: default_output_dir(),
        }
    }
}

impl BenchmarkOptions {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.runs == 0 {
            return Err(OptionsError::InvalidRuns(self.runs));
        }
        if self.timeout_secs <= 0.0 {
            return Err(OptionsError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }

    /// Parse options from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
