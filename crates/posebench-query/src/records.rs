//! Benchmark query records.
//!
//! The wire-format building blocks of a benchmark query set: named start
//! states, named goal constraints, and the placeholder record types the
//! external executor consumes alongside them. All records serialize with
//! serde so a query set can be handed across a process boundary as JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use posebench_model::RobotStateRecord;

// ---------------------------------------------------------------------------
// StartStateRecord
// ---------------------------------------------------------------------------

/// A named full-robot start state for a planning query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartStateRecord {
    /// Pose identifier this state was derived from.
    pub name: String,
    /// Serialized robot state.
    pub state: RobotStateRecord,
}

// ---------------------------------------------------------------------------
// JointConstraint
// ---------------------------------------------------------------------------

/// A joint-space goal condition: one variable pinned to a position within
/// a tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointConstraint {
    /// Constrained variable name.
    pub joint_name: String,
    /// Target position (rad or m).
    pub position: f64,
    /// Allowed deviation above the target.
    pub tolerance_above: f64,
    /// Allowed deviation below the target.
    pub tolerance_below: f64,
    /// Relative importance among the constraints of a set.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// ConstraintSet
// ---------------------------------------------------------------------------

/// One kinematic constraint set: all member constraints must hold at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Optional set name.
    #[serde(default)]
    pub name: String,
    /// Joint-space constraints.
    #[serde(default)]
    pub joint_constraints: Vec<JointConstraint>,
}

// ---------------------------------------------------------------------------
// GoalConstraintRecord
// ---------------------------------------------------------------------------

/// A named goal for a planning query, as an ordered sequence of constraint
/// sets (any one of which satisfies the goal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConstraintRecord {
    /// Pose identifier this goal was derived from.
    pub name: String,
    /// Constraint sets. The predefined-pose builder emits exactly one.
    pub constraints: Vec<ConstraintSet>,
}

// ---------------------------------------------------------------------------
// Placeholder records
// ---------------------------------------------------------------------------

/// Named path constraints applied along an entire trajectory.
///
/// The predefined-pose builder never produces these; the type exists so a
/// query set always carries an explicitly empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConstraintsRecord {
    pub name: String,
    pub constraints: Vec<ConstraintSet>,
}

/// Named per-waypoint trajectory constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConstraintsRecord {
    pub name: String,
    pub constraints: Vec<ConstraintSet>,
}

/// A fully custom, pre-assembled planning query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRequestRecord {
    pub name: String,
    /// Planning group the request targets.
    pub group_name: String,
    /// Start state of the request.
    pub start_state: RobotStateRecord,
    /// Goal constraint sets of the request.
    pub goal_constraints: Vec<ConstraintSet>,
}

// ---------------------------------------------------------------------------
// BenchmarkQuerySet
// ---------------------------------------------------------------------------

/// Everything a benchmark executor needs to enumerate planning queries.
///
/// `start_states` and `goal_constraints` are parallel collections: the
/// i-th entries originate from the same pose snapshot and carry the same
/// name. The remaining collections are pass-through slots this repo's
/// builder always leaves empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkQuerySet {
    /// Candidate start states, one per valid pose, in input order.
    pub start_states: Vec<StartStateRecord>,
    /// Candidate goals, in lockstep with `start_states`.
    pub goal_constraints: Vec<GoalConstraintRecord>,
    /// Path constraints (always empty here).
    pub path_constraints: Vec<PathConstraintsRecord>,
    /// Trajectory constraints (always empty here).
    pub trajectory_constraints: Vec<TrajectoryConstraintsRecord>,
    /// Custom pre-assembled queries (always empty here).
    pub queries: Vec<BenchmarkRequestRecord>,
}

impl BenchmarkQuerySet {
    /// Number of start/goal pairings the executor will enumerate.
    #[must_use]
    pub fn pairing_count(&self) -> usize {
        self.start_states.len() * self.goal_constraints.len()
    }

    /// Names of the start states, in order.
    #[must_use]
    pub fn start_state_names(&self) -> Vec<&str> {
        self.start_states.iter().map(|s| s.name.as_str()).collect()
    }

    /// Names of the goal constraints, in order.
    #[must_use]
    pub fn goal_constraint_names(&self) -> Vec<&str> {
        self.goal_constraints
            .iter()
            .map(|g| g.name.as_str())
            .collect()
    }

    /// Per-name record counts over the start states.
    ///
    /// Duplicated pose identifiers are deliberately preserved by the
    /// builder; this is the executor-facing way to observe multiplicity.
    #[must_use]
    pub fn start_state_multiplicity(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for record in &self.start_states {
            *counts.entry(record.name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
