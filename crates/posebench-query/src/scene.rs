//! Planning scene handle.
//!
//! Query generation runs against a scene owned by the external executor.
//! This crate only needs the robot model attached to it; the handle keeps
//! that boundary explicit and makes "no model loaded" a representable
//! state instead of a precondition.

use std::sync::Arc;

use posebench_model::RobotModel;

/// Handle to the planning scene a benchmark session runs against.
#[derive(Debug, Clone, Default)]
pub struct PlanningSceneHandle {
    name: String,
    robot_model: Option<Arc<RobotModel>>,
}

impl PlanningSceneHandle {
    /// Create a handle with no robot model attached.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            robot_model: None,
        }
    }

    /// Attach a robot model. Returns `self` for chaining.
    #[must_use]
    pub fn with_robot_model(mut self, model: Arc<RobotModel>) -> Self {
        self.robot_model = Some(model);
        self
    }

    /// Replace the attached robot model.
    pub fn set_robot_model(&mut self, model: Arc<RobotModel>) {
        self.robot_model = Some(model);
    }

    /// Scene name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached robot model, if one was loaded.
    #[must_use]
    pub fn robot_model(&self) -> Option<&Arc<RobotModel>> {
        self.robot_model.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
