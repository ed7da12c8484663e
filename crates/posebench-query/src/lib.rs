//! Benchmark query generation from predefined poses.
//!
//! Converts the named poses of a robot's joint group into a combinatorial
//! set of motion-planning benchmark queries: each pose becomes both a
//! candidate start state and a candidate goal constraint, and an external
//! benchmark executor evaluates planners against the start/goal pairings.
//!
//! # Architecture
//!
//! ```text
//! RobotModel + BenchmarkOptions ──► PredefinedPosesLoader ──► BenchmarkQuerySet
//! ```
//!
//! The executor holds any [`QueryDataLoader`] by trait object and invokes
//! it once per session setup; planning, scoring, and result persistence
//! happen entirely on the executor's side.

pub mod constraints;
pub mod error;
pub mod loader;
pub mod options;
pub mod records;
pub mod scene;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use constraints::{
    DEFAULT_CONSTRAINT_WEIGHT, DEFAULT_JOINT_TOLERANCE, goal_constraints_from_state,
    goal_constraints_with_tolerance,
};
pub use error::{OptionsError, QueryError};
pub use loader::{PredefinedPosesLoader, QueryDataLoader};
pub use options::BenchmarkOptions;
pub use records::{
    BenchmarkQuerySet, BenchmarkRequestRecord, ConstraintSet, GoalConstraintRecord,
    JointConstraint, PathConstraintsRecord, StartStateRecord, TrajectoryConstraintsRecord,
};
pub use scene::PlanningSceneHandle;
