//! Benchmark query data loading.
//!
//! [`QueryDataLoader`] is the seam between the external benchmark executor
//! and whatever strategy produces its queries. [`PredefinedPosesLoader`]
//! is the strategy this crate ships: every named pose of one joint group
//! becomes both a candidate start state and a candidate goal constraint,
//! and the executor enumerates the start/goal pairings.

use std::sync::Arc;

use log::{error, warn};

use posebench_model::RobotState;

use crate::constraints::goal_constraints_from_state;
use crate::error::QueryError;
use crate::options::BenchmarkOptions;
use crate::records::{BenchmarkQuerySet, GoalConstraintRecord, StartStateRecord};
use crate::scene::PlanningSceneHandle;

// ---------------------------------------------------------------------------
// QueryDataLoader
// ---------------------------------------------------------------------------

/// Produces the query data a benchmark session runs on.
///
/// The executor holds a loader by trait object and invokes it once during
/// session setup, before any planning happens. A returned error aborts the
/// whole benchmark run; no partial query set is ever handed over.
pub trait QueryDataLoader {
    /// Build the full query set for one benchmark session.
    fn load_query_data(
        &self,
        scene: &PlanningSceneHandle,
        options: &BenchmarkOptions,
    ) -> Result<BenchmarkQuerySet, QueryError>;
}

// ---------------------------------------------------------------------------
// PredefinedPosesLoader
// ---------------------------------------------------------------------------

/// Builds start states and goal constraints from the predefined poses of
/// one joint group.
///
/// Poses are processed in input order against a single reusable working
/// state. An identifier that names no predefined pose of the group is
/// logged and skipped; it leaves no gap in the outputs. Duplicated
/// identifiers produce duplicated records. The two output collections are
/// always the same length, with the i-th entries of both derived from the
/// identical snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredefinedPosesLoader;

impl QueryDataLoader for PredefinedPosesLoader {
    fn load_query_data(
        &self,
        scene: &PlanningSceneHandle,
        options: &BenchmarkOptions,
    ) -> Result<BenchmarkQuerySet, QueryError> {
        let Some(model) = scene.robot_model() else {
            error!("failed to load robot model");
            return Err(QueryError::ModelUnavailable);
        };

        // Select the joint group holding the predefined poses.
        let group_name = if options.predefined_poses_group.is_empty() {
            warn!("predefined_poses_group is not set, using default planning group instead");
            &options.group_name
        } else {
            &options.predefined_poses_group
        };
        let Ok(group) = model.joint_group(group_name) else {
            error!("robot model has no joint group named '{group_name}'");
            return Err(QueryError::UnknownJointGroup(group_name.clone()));
        };

        // Iterate over all predefined poses and use each as start and goal.
        let mut robot_state = RobotState::new(Arc::clone(model));
        let mut start_states = Vec::new();
        let mut goal_constraints = Vec::new();
        for pose_id in &options.predefined_poses {
            if robot_state.set_to_default_values(group, pose_id).is_err() {
                warn!("failed to set robot state to named target '{pose_id}'");
                continue;
            }
            start_states.push(StartStateRecord {
                name: pose_id.clone(),
                state: robot_state.to_record(),
            });
            goal_constraints.push(GoalConstraintRecord {
                name: pose_id.clone(),
                constraints: vec![goal_constraints_from_state(&robot_state, group)],
            });
        }
        if start_states.is_empty() || goal_constraints.is_empty() {
            error!("failed to init start and goal states from predefined_poses");
            return Err(QueryError::NoValidPoses);
        }

        // Path/trajectory constraints and custom queries are never produced
        // here; a fresh set keeps the executor's slots explicitly empty.
        Ok(BenchmarkQuerySet {
            start_states,
            goal_constraints,
            path_constraints: Vec::new(),
            trajectory_constraints: Vec::new(),
            queries: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use posebench_model::load_model;

    const ARM_URDF: &str = r#"
        <robot name="bench_arm">
            <link name="base"/>
            <link name="upper_arm"/>
            <link name="forearm"/>
            <link name="hand"/>
            <link name="finger"/>
            <joint name="shoulder" type="revolute">
                <parent link="base"/><child link="upper_arm"/>
                <axis xyz="0 0 1"/>
                <limit lower="-3.0" upper="3.0" effort="50" velocity="3"/>
            </joint>
            <joint name="elbow" type="revolute">
                <parent link="upper_arm"/><child link="forearm"/>
                <axis xyz="0 0 1"/>
                <limit lower="-2.5" upper="2.5" effort="30" velocity="5"/>
            </joint>
            <joint name="wrist" type="revolute">
                <parent link="forearm"/><child link="hand"/>
                <axis xyz="0 1 0"/>
                <limit lower="-1.9" upper="1.9" effort="10" velocity="5"/>
            </joint>
            <joint name="gripper" type="prismatic">
                <parent link="hand"/><child link="finger"/>
                <axis xyz="1 0 0"/>
                <limit lower="0.0" upper="0.04" effort="5" velocity="0.1"/>
            </joint>
        </robot>
    "#;

    const ARM_SEMANTIC: &str = r#"
        [[groups]]
        name = "arm"
        joints = ["shoulder", "elbow", "wrist"]

        [[groups]]
        name = "hand"
        joints = ["gripper"]

        [[group_states]]
        name = "ready"
        group = "arm"
        [group_states.positions]
        shoulder = 0.0
        elbow = -1.2
        wrist = 0.6

        [[group_states]]
        name = "home"
        group = "arm"
        [group_states.positions]
        shoulder = 1.5
        elbow = 0.0
        wrist = 0.0

        [[group_states]]
        name = "open"
        group = "hand"
        [group_states.positions]
        gripper = 0.04
    "#;

    fn arm_scene() -> PlanningSceneHandle {
        let model = load_model(ARM_URDF, ARM_SEMANTIC).unwrap();
        PlanningSceneHandle::new("bench").with_robot_model(Arc::new(model))
    }

    fn arm_options(poses: &[&str]) -> BenchmarkOptions {
        BenchmarkOptions {
            group_name: "arm".into(),
            predefined_poses_group: "arm".into(),
            predefined_poses: poses.iter().map(|&p| p.into()).collect(),
            ..BenchmarkOptions::default()
        }
    }

    // ---- happy path ----

    #[test]
    fn valid_poses_yield_parallel_collections() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready", "home"]))
            .unwrap();

        assert_eq!(set.start_states.len(), 2);
        assert_eq!(set.goal_constraints.len(), 2);
        assert_eq!(set.start_state_names(), vec!["ready", "home"]);
        assert_eq!(set.goal_constraint_names(), vec!["ready", "home"]);
    }

    #[test]
    fn start_and_goal_derive_from_same_snapshot() {
        let scene = arm_scene();
        let set = PredefinedPosesLoader
            .load_query_data(&scene, &arm_options(&["ready"]))
            .unwrap();

        let start = &set.start_states[0];
        let goal = &set.goal_constraints[0];
        assert_eq!(goal.constraints.len(), 1);

        // Each goal constraint pins the exact position the start state holds.
        let model = scene.robot_model().unwrap();
        for constraint in &goal.constraints[0].joint_constraints {
            let index = model.variable_index(&constraint.joint_name).unwrap();
            assert!((constraint.position - start.state.positions[index]).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn goal_covers_group_variables_only() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready"]))
            .unwrap();

        let names: Vec<&str> = set.goal_constraints[0].constraints[0]
            .joint_constraints
            .iter()
            .map(|c| c.joint_name.as_str())
            .collect();
        assert_eq!(names, vec!["shoulder", "elbow", "wrist"]);
    }

    #[test]
    fn start_state_spans_whole_robot() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready"]))
            .unwrap();

        let state = &set.start_states[0].state;
        assert_eq!(
            state.variable_names,
            vec!["shoulder", "elbow", "wrist", "gripper"]
        );
        assert_eq!(state.positions, vec![0.0, -1.2, 0.6, 0.0]);
    }

    #[test]
    fn placeholder_collections_are_empty() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready"]))
            .unwrap();
        assert!(set.path_constraints.is_empty());
        assert!(set.trajectory_constraints.is_empty());
        assert!(set.queries.is_empty());
    }

    // ---- soft failures ----

    #[test]
    fn unknown_pose_is_skipped_without_gap() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready", "bogus", "home"]))
            .unwrap();

        assert_eq!(set.start_state_names(), vec!["ready", "home"]);
        assert_eq!(set.goal_constraint_names(), vec!["ready", "home"]);
    }

    #[test]
    fn duplicate_pose_yields_duplicate_records() {
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready", "ready"]))
            .unwrap();

        assert_eq!(set.start_states.len(), 2);
        assert_eq!(set.goal_constraints.len(), 2);
        assert_eq!(set.start_state_names(), vec!["ready", "ready"]);
        assert_eq!(set.start_states[0], set.start_states[1]);
        assert_eq!(set.goal_constraints[0], set.goal_constraints[1]);
    }

    #[test]
    fn pose_of_another_group_is_skipped() {
        // "open" belongs to the hand group, not the arm group.
        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["open", "ready"]))
            .unwrap();
        assert_eq!(set.start_state_names(), vec!["ready"]);
    }

    // ---- hard failures ----

    #[test]
    fn missing_model_fails_before_group_resolution() {
        let scene = PlanningSceneHandle::new("empty");
        // Group name is bogus too; the model check must win.
        let mut options = arm_options(&["ready"]);
        options.predefined_poses_group = "no_such_group".into();

        let err = PredefinedPosesLoader
            .load_query_data(&scene, &options)
            .unwrap_err();
        assert!(matches!(err, QueryError::ModelUnavailable));
    }

    #[test]
    fn unknown_group_fails_before_pose_resolution() {
        let mut options = arm_options(&["ready"]);
        options.predefined_poses_group = "torso".into();

        let err = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &options)
            .unwrap_err();
        assert!(matches!(err, QueryError::UnknownJointGroup(name) if name == "torso"));
    }

    #[test]
    fn empty_fallback_group_fails() {
        let mut options = arm_options(&["ready"]);
        options.predefined_poses_group = String::new();
        options.group_name = String::new();

        let err = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &options)
            .unwrap_err();
        assert!(matches!(err, QueryError::UnknownJointGroup(_)));
    }

    #[test]
    fn empty_pose_list_fails_with_no_valid_poses() {
        let err = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&[]))
            .unwrap_err();
        assert!(matches!(err, QueryError::NoValidPoses));
    }

    #[test]
    fn all_unknown_poses_fail_with_no_valid_poses() {
        let err = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["bogus", "nonsense"]))
            .unwrap_err();
        assert!(matches!(err, QueryError::NoValidPoses));
    }

    // ---- fallback group ----

    #[test]
    fn empty_poses_group_falls_back_to_default_group() {
        let mut options = arm_options(&["ready", "home"]);
        options.predefined_poses_group = String::new();
        options.group_name = "arm".into();

        let set = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &options)
            .unwrap();
        assert_eq!(set.start_states.len(), 2);
    }

    // ---- idempotence ----

    #[test]
    fn repeated_calls_produce_identical_output() {
        let scene = arm_scene();
        let options = arm_options(&["ready", "home", "ready"]);

        let first = PredefinedPosesLoader
            .load_query_data(&scene, &options)
            .unwrap();
        let second = PredefinedPosesLoader
            .load_query_data(&scene, &options)
            .unwrap();
        assert_eq!(first, second);
    }

    // ---- trait object seam ----

    #[test]
    fn loader_works_as_trait_object() {
        let loader: &dyn QueryDataLoader = &PredefinedPosesLoader;
        let set = loader
            .load_query_data(&arm_scene(), &arm_options(&["home"]))
            .unwrap();
        assert_eq!(set.start_state_names(), vec!["home"]);
    }

    #[test]
    fn executor_can_swap_strategies() {
        struct FixedLoader(BenchmarkQuerySet);

        impl QueryDataLoader for FixedLoader {
            fn load_query_data(
                &self,
                _scene: &PlanningSceneHandle,
                _options: &BenchmarkOptions,
            ) -> Result<BenchmarkQuerySet, QueryError> {
                Ok(self.0.clone())
            }
        }

        let canned = PredefinedPosesLoader
            .load_query_data(&arm_scene(), &arm_options(&["ready"]))
            .unwrap();
        let loader: Box<dyn QueryDataLoader> = Box::new(FixedLoader(canned.clone()));
        let set = loader
            .load_query_data(&PlanningSceneHandle::new("unused"), &BenchmarkOptions::default())
            .unwrap();
        assert_eq!(set, canned);
    }
}
