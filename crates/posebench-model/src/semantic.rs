//! Semantic robot description: joint groups and named default states.
//!
//! The URDF describes the kinematic tree; the semantic description layers
//! planning semantics on top of it — which joints form a planning group,
//! and the predefined poses each group ships with. It is a TOML document:
//!
//! ```toml
//! [[groups]]
//! name = "arm"
//! joints = ["shoulder", "elbow", "wrist"]
//!
//! [[group_states]]
//! name = "ready"
//! group = "arm"
//!
//! [group_states.positions]
//! shoulder = 0.0
//! elbow = -1.57
//! wrist = 0.0
//! ```
//!
//! Multi-variable joints (planar, floating) take a value array instead of
//! a scalar.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;
use crate::model::RobotModel;

// ---------------------------------------------------------------------------
// Description types
// ---------------------------------------------------------------------------

/// One joint group definition.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupSpec {
    /// Group name.
    pub name: String,
    /// Member joint names, in group order.
    pub joints: Vec<String>,
}

/// Scalar or per-variable position values for one joint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PositionSpec {
    /// Single-variable joint value.
    Scalar(f64),
    /// Multi-variable joint values, in the joint's variable order.
    Vector(Vec<f64>),
}

impl PositionSpec {
    fn to_values(&self) -> Vec<f64> {
        match self {
            Self::Scalar(v) => vec![*v],
            Self::Vector(vs) => vs.clone(),
        }
    }
}

/// One named default state ("predefined pose") of a group.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupStateSpec {
    /// State name.
    pub name: String,
    /// Group the state belongs to.
    pub group: String,
    /// Per-joint position values.
    #[serde(default)]
    pub positions: HashMap<String, PositionSpec>,
}

/// Complete semantic description of a robot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SemanticDescription {
    /// Joint group definitions.
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
    /// Named default states.
    #[serde(default)]
    pub group_states: Vec<GroupStateSpec>,
}

impl SemanticDescription {
    /// Parse a semantic description from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a semantic description from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&content)
    }

    /// Register the description's groups and default states on a model.
    ///
    /// Groups are registered first, in declaration order, then states.
    /// Fails on the first unknown joint, unknown group, duplicate group,
    /// or variable-count mismatch.
    pub fn apply(&self, model: &mut RobotModel) -> Result<(), ModelError> {
        for group in &self.groups {
            model.add_group(group.name.clone(), group.joints.clone())?;
        }
        for state in &self.group_states {
            let joint_positions: HashMap<String, Vec<f64>> = state
                .positions
                .iter()
                .map(|(joint, spec)| (joint.clone(), spec.to_values()))
                .collect();
            model.add_group_state(&state.group, state.name.clone(), &joint_positions)?;
        }
        Ok(())
    }
}

/// Parse a URDF string and a semantic TOML string into a ready model.
///
/// Convenience for the common load path: kinematic structure first, then
/// groups and predefined poses.
pub fn load_model(urdf: &str, semantic: &str) -> Result<RobotModel, ModelError> {
    let mut model = crate::parser::parse_string(urdf)?;
    SemanticDescription::from_str(semantic)?.apply(&mut model)?;
    Ok(model)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
