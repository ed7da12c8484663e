//! Robot model and joint groups.
//!
//! A [`RobotModel`] is the immutable kinematic description query generation
//! runs against: the ordered joint list, the flattened planning-variable
//! layout derived from it, and named [`JointModelGroup`]s, each carrying a
//! registry of named default states (the "predefined poses").
//!
//! Variable layout order is joint declaration order in the source URDF,
//! which keeps the layout deterministic across loads of the same file.

use std::collections::HashMap;

use crate::error::ModelError;
use crate::types::JointData;

// ---------------------------------------------------------------------------
// JointModelGroup
// ---------------------------------------------------------------------------

/// A named subset of the robot's joints treated as one planning unit.
///
/// Holds the group's slice of the model-wide variable layout (names and
/// global indices, in group declaration order) and the named default states
/// registered for the group.
#[derive(Debug, Clone)]
pub struct JointModelGroup {
    name: String,
    joint_names: Vec<String>,
    variable_names: Vec<String>,
    variable_indices: Vec<usize>,
    default_states: HashMap<String, Vec<f64>>,
}

impl JointModelGroup {
    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member joint names, in declaration order.
    #[must_use]
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    /// Names of the group's planning variables, in layout order.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Global variable indices of the group's variables, in layout order.
    #[must_use]
    pub fn variable_indices(&self) -> &[usize] {
        &self.variable_indices
    }

    /// Number of planning variables in the group.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variable_indices.len()
    }

    /// Look up a named default state. Values are in group variable order.
    #[must_use]
    pub fn default_state(&self, name: &str) -> Option<&[f64]> {
        self.default_states.get(name).map(Vec::as_slice)
    }

    /// Whether a named default state exists for this group.
    #[must_use]
    pub fn has_default_state(&self, name: &str) -> bool {
        self.default_states.contains_key(name)
    }

    /// Names of all registered default states, sorted alphabetically.
    #[must_use]
    pub fn default_state_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.default_states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ---------------------------------------------------------------------------
// RobotModel
// ---------------------------------------------------------------------------

/// Complete immutable description of a robot's kinematic structure.
///
/// Constructed from a parsed URDF joint list, then enriched with joint
/// groups and their named default states from the semantic description.
/// Once handed to query generation it is only ever read.
#[derive(Debug, Clone)]
pub struct RobotModel {
    name: String,
    joints: Vec<JointData>,
    variable_names: Vec<String>,
    variable_index: HashMap<String, usize>,
    groups: HashMap<String, JointModelGroup>,
}

impl RobotModel {
    /// Build a model from an ordered joint list.
    ///
    /// The flattened variable layout follows the joint order given here.
    #[must_use]
    pub fn new(name: impl Into<String>, joints: Vec<JointData>) -> Self {
        let mut variable_names = Vec::new();
        for joint in &joints {
            variable_names.extend(joint.variable_names());
        }
        let variable_index = variable_names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();

        Self {
            name: name.into(),
            joints,
            variable_names,
            variable_index,
            groups: HashMap::new(),
        }
    }

    /// Robot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All joints, in declaration order.
    #[must_use]
    pub fn joints(&self) -> &[JointData] {
        &self.joints
    }

    /// Get a joint by name.
    pub fn joint(&self, name: &str) -> Result<&JointData, ModelError> {
        self.joints
            .iter()
            .find(|j| j.name == name)
            .ok_or_else(|| ModelError::UnknownJoint(name.into()))
    }

    /// Total number of planning variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variable_names.len()
    }

    /// All variable names, in layout order.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Global index of a variable by name.
    #[must_use]
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variable_index.get(name).copied()
    }

    /// Default positions for every variable, in layout order.
    #[must_use]
    pub fn default_variable_positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.variable_count());
        for joint in &self.joints {
            positions.extend(joint.default_variable_positions());
        }
        positions
    }

    /// Get a joint group by name.
    pub fn joint_group(&self, name: &str) -> Result<&JointModelGroup, ModelError> {
        self.groups
            .get(name)
            .ok_or_else(|| ModelError::UnknownGroup(name.into()))
    }

    /// Whether a joint group with this name exists.
    #[must_use]
    pub fn has_joint_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Names of all joint groups, sorted alphabetically.
    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Register a joint group.
    ///
    /// Every listed joint must exist in the model. Fixed joints are
    /// permitted (they contribute no variables).
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        joint_names: Vec<String>,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.groups.contains_key(&name) {
            return Err(ModelError::DuplicateGroup(name));
        }

        let mut variable_names = Vec::new();
        let mut variable_indices = Vec::new();
        for joint_name in &joint_names {
            let joint = self.joint(joint_name)?;
            for var in joint.variable_names() {
                let index = self.variable_index[&var];
                variable_names.push(var);
                variable_indices.push(index);
            }
        }

        self.groups.insert(
            name.clone(),
            JointModelGroup {
                name,
                joint_names,
                variable_names,
                variable_indices,
                default_states: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Register a named default state ("predefined pose") for a group.
    ///
    /// `joint_positions` maps member joint names to their variable values.
    /// Every listed joint must belong to the group and carry exactly its
    /// variable count of values; joints of the group not listed keep their
    /// model defaults.
    pub fn add_group_state(
        &mut self,
        group_name: &str,
        state_name: impl Into<String>,
        joint_positions: &HashMap<String, Vec<f64>>,
    ) -> Result<(), ModelError> {
        // Flatten to group variable order before taking the mutable borrow.
        let flattened = {
            let group = self.joint_group(group_name)?;
            let mut values = Vec::with_capacity(group.variable_count());
            for joint_name in &group.joint_names {
                let joint = self.joint(joint_name)?;
                let expected = joint.joint_type.variable_count();
                match joint_positions.get(joint_name) {
                    Some(given) => {
                        if given.len() != expected {
                            return Err(ModelError::VariableCountMismatch {
                                name: joint_name.clone(),
                                expected,
                                got: given.len(),
                            });
                        }
                        values.extend_from_slice(given);
                    }
                    None => values.extend(joint.default_variable_positions()),
                }
            }
            for joint_name in joint_positions.keys() {
                if !group.joint_names.contains(joint_name) {
                    return Err(ModelError::UnknownJoint(joint_name.clone()));
                }
            }
            values
        };

        let group = self
            .groups
            .get_mut(group_name)
            .ok_or_else(|| ModelError::UnknownGroup(group_name.into()))?;
        group.default_states.insert(state_name.into(), flattened);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
