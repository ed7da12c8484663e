//! Goal constraint construction.
//!
//! Builds a joint-space [`ConstraintSet`] equivalent to "match this exact
//! configuration" from a robot state snapshot and a joint group.

use posebench_model::{JointModelGroup, RobotState};

use crate::records::{ConstraintSet, JointConstraint};

/// Default tolerance band around a goal position, in rad or m.
pub const DEFAULT_JOINT_TOLERANCE: f64 = 1e-3;

/// Default constraint weight.
pub const DEFAULT_CONSTRAINT_WEIGHT: f64 = 1.0;

/// Derive a joint-space goal constraint set from a state snapshot.
///
/// One [`JointConstraint`] per group variable, pinned to the snapshot's
/// current position with the default tolerance band. The group must come
/// from the state's own model.
#[must_use]
pub fn goal_constraints_from_state(
    state: &RobotState,
    group: &JointModelGroup,
) -> ConstraintSet {
    goal_constraints_with_tolerance(state, group, DEFAULT_JOINT_TOLERANCE)
}

/// Like [`goal_constraints_from_state`] with an explicit tolerance.
#[must_use]
pub fn goal_constraints_with_tolerance(
    state: &RobotState,
    group: &JointModelGroup,
    tolerance: f64,
) -> ConstraintSet {
    let positions = state.joint_group_positions(group);
    let joint_constraints = group
        .variable_names()
        .iter()
        .zip(positions)
        .map(|(name, position)| JointConstraint {
            joint_name: name.clone(),
            position,
            tolerance_above: tolerance,
            tolerance_below: tolerance,
            weight: DEFAULT_CONSTRAINT_WEIGHT,
        })
        .collect();

    ConstraintSet {
        name: String::new(),
        joint_constraints,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
