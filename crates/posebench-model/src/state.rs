//! Mutable working robot state.
//!
//! A [`RobotState`] is the transient snapshot query generation mutates in
//! place: the full variable position vector of one robot, backed by a
//! shared [`RobotModel`]. Snapshots are cheap to write repeatedly and are
//! serialized out through [`RobotStateRecord`] when a pose needs to be
//! captured.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::{JointModelGroup, RobotModel};

// ---------------------------------------------------------------------------
// RobotStateRecord
// ---------------------------------------------------------------------------

/// Serialized snapshot of a full robot state.
///
/// The wire form of a [`RobotState`]: variable names and positions in the
/// model's layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotStateRecord {
    /// Variable names, in layout order.
    pub variable_names: Vec<String>,
    /// Variable positions, parallel to `variable_names`.
    pub positions: Vec<f64>,
}

// ---------------------------------------------------------------------------
// RobotState
// ---------------------------------------------------------------------------

/// Mutable working state: joint variable positions for the whole robot.
///
/// Group-level operations take a [`JointModelGroup`] borrowed from the same
/// model this state was created with; the group's precomputed global
/// variable indices are trusted to address this state's position vector.
#[derive(Debug, Clone)]
pub struct RobotState {
    model: Arc<RobotModel>,
    positions: Vec<f64>,
}

impl RobotState {
    /// Create a state with every variable at its model default.
    #[must_use]
    pub fn new(model: Arc<RobotModel>) -> Self {
        let positions = model.default_variable_positions();
        Self { model, positions }
    }

    /// The model this state belongs to.
    #[must_use]
    pub fn model(&self) -> &Arc<RobotModel> {
        &self.model
    }

    /// All variable positions, in layout order.
    #[must_use]
    pub fn variable_positions(&self) -> &[f64] {
        &self.positions
    }

    /// Set the full variable position vector.
    pub fn set_variable_positions(&mut self, positions: &[f64]) -> Result<(), ModelError> {
        if positions.len() != self.positions.len() {
            return Err(ModelError::VariableCountMismatch {
                name: self.model.name().into(),
                expected: self.positions.len(),
                got: positions.len(),
            });
        }
        self.positions.copy_from_slice(positions);
        Ok(())
    }

    /// Set the positions of one group's variables, in group variable order.
    pub fn set_joint_group_positions(
        &mut self,
        group: &JointModelGroup,
        values: &[f64],
    ) -> Result<(), ModelError> {
        if values.len() != group.variable_count() {
            return Err(ModelError::VariableCountMismatch {
                name: group.name().into(),
                expected: group.variable_count(),
                got: values.len(),
            });
        }
        for (&index, &value) in group.variable_indices().iter().zip(values) {
            self.positions[index] = value;
        }
        Ok(())
    }

    /// Read one group's variable positions, in group variable order.
    #[must_use]
    pub fn joint_group_positions(&self, group: &JointModelGroup) -> Vec<f64> {
        group
            .variable_indices()
            .iter()
            .map(|&index| self.positions[index])
            .collect()
    }

    /// Set the group's variables to one of its named default states.
    ///
    /// Fails with [`ModelError::UnknownGroupState`] if the group has no
    /// default state with this name; the rest of the state is untouched in
    /// that case.
    pub fn set_to_default_values(
        &mut self,
        group: &JointModelGroup,
        state_name: &str,
    ) -> Result<(), ModelError> {
        let values = group
            .default_state(state_name)
            .ok_or_else(|| ModelError::UnknownGroupState {
                group: group.name().into(),
                state: state_name.into(),
            })?;
        for (&index, &value) in group.variable_indices().iter().zip(values) {
            self.positions[index] = value;
        }
        Ok(())
    }

    /// Serialize the snapshot to its wire record.
    #[must_use]
    pub fn to_record(&self) -> RobotStateRecord {
        RobotStateRecord {
            variable_names: self.model.variable_names().to_vec(),
            positions: self.positions.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
