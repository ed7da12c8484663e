//! Error types for benchmark query generation.

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// QueryError
// ---------------------------------------------------------------------------

/// Hard failures of query generation.
///
/// These abort a [`load_query_data`](crate::loader::QueryDataLoader::load_query_data)
/// call outright. Per-pose resolution failures are not represented here:
/// they are recovered locally (logged and skipped) and only surface as
/// [`QueryError::NoValidPoses`] when every pose failed.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No usable robot model is attached to the scene.
    #[error("no robot model available")]
    ModelUnavailable,

    /// Neither the requested nor the fallback joint group resolves.
    #[error("robot model has no joint group named '{0}'")]
    UnknownJointGroup(String),

    /// Zero poses resolved after the full pass over the input list.
    #[error("failed to initialize start and goal states from predefined poses")]
    NoValidPoses,
}

// ---------------------------------------------------------------------------
// OptionsError
// ---------------------------------------------------------------------------

/// Benchmark options loading and validation errors.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Failed to read the options file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("options parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid run count: at least one run is required.
    #[error("invalid runs: {0} (must be >= 1)")]
    InvalidRuns(u32),

    /// Invalid planner timeout.
    #[error("invalid timeout: {0} (must be > 0)")]
    InvalidTimeout(f64),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
