//! Error types for robot description parsing and model assembly.

use std::path::PathBuf;

/// Errors that can occur while building or querying a robot model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Failed to read a description file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse URDF XML content.
    #[error("URDF parse error: {0}")]
    Parse(String),

    /// Failed to parse the semantic description.
    #[error("semantic description error: {0}")]
    Semantic(#[from] toml::de::Error),

    /// A referenced joint was not found in the model.
    #[error("unknown joint: {0}")]
    UnknownJoint(String),

    /// A referenced joint group was not found in the model.
    #[error("unknown joint group: {0}")]
    UnknownGroup(String),

    /// A named default state was not found for a joint group.
    #[error("joint group '{group}' has no default state named '{state}'")]
    UnknownGroupState { group: String, state: String },

    /// A joint group with this name was already registered.
    #[error("duplicate joint group: {0}")]
    DuplicateGroup(String),

    /// A value list did not match the expected variable count.
    #[error("variable count mismatch for '{name}': expected {expected}, got {got}")]
    VariableCountMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Invalid or unsupported joint type.
    #[error("unsupported joint type: {0}")]
    UnsupportedJointType(String),

    /// The URDF has no root link (no link that is never a child).
    #[error("no root link found")]
    NoRootLink,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
