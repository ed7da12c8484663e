//! Core data types for the in-memory robot description.
//!
//! These types are the crate's canonical representation of a robot's
//! kinematic structure, independent of the XML parsing layer. They map
//! closely to URDF concepts but use Rust-native types and carry only what
//! query generation needs: joints, their limits, and their planning
//! variables.

// ---------------------------------------------------------------------------
// JointType
// ---------------------------------------------------------------------------

/// URDF joint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointType {
    /// Rotation about a single axis, with position limits.
    Revolute,
    /// Unlimited rotation about a single axis.
    Continuous,
    /// Translation along an axis, with position limits.
    Prismatic,
    /// No relative motion between parent and child.
    Fixed,
    /// Unconstrained 6-DOF joint (base of a free-flying robot).
    Floating,
    /// Planar motion: two translations and one rotation.
    Planar,
}

impl JointType {
    /// Whether this joint type has actuatable degrees of freedom.
    #[must_use]
    pub const fn is_actuated(self) -> bool {
        !matches!(self, Self::Fixed)
    }

    /// Number of planning variables this joint type contributes.
    ///
    /// Floating joints use a position + quaternion parameterization
    /// (seven variables); planar joints use x, y, theta.
    #[must_use]
    pub const fn variable_count(self) -> usize {
        match self {
            Self::Fixed => 0,
            Self::Revolute | Self::Continuous | Self::Prismatic => 1,
            Self::Planar => 3,
            Self::Floating => 7,
        }
    }
}

// ---------------------------------------------------------------------------
// JointLimits
// ---------------------------------------------------------------------------

/// Position bounds on a joint's motion. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointLimits {
    /// Lower position limit (rad or m).
    pub lower: Option<f64>,
    /// Upper position limit (rad or m).
    pub upper: Option<f64>,
}

impl JointLimits {
    /// Bounded limits.
    #[must_use]
    pub const fn bounded(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Whether both bounds are present.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }
}

// ---------------------------------------------------------------------------
// JointData
// ---------------------------------------------------------------------------

/// In-memory representation of one joint of the kinematic tree.
#[derive(Debug, Clone)]
pub struct JointData {
    /// Joint name.
    pub name: String,
    /// Joint type.
    pub joint_type: JointType,
    /// Parent link name.
    pub parent: String,
    /// Child link name.
    pub child: String,
    /// Motion limits. Meaningful only for single-variable joints.
    pub limits: JointLimits,
}

impl JointData {
    /// Names of the planning variables this joint contributes, in layout
    /// order.
    ///
    /// Single-variable joints use the joint name itself. Planar joints
    /// expose `<name>/x`, `<name>/y`, `<name>/theta`; floating joints
    /// expose translation and quaternion components.
    #[must_use]
    pub fn variable_names(&self) -> Vec<String> {
        match self.joint_type {
            JointType::Fixed => Vec::new(),
            JointType::Revolute | JointType::Continuous | JointType::Prismatic => {
                vec![self.name.clone()]
            }
            JointType::Planar => ["x", "y", "theta"]
                .iter()
                .map(|suffix| format!("{}/{suffix}", self.name))
                .collect(),
            JointType::Floating => {
                ["trans_x", "trans_y", "trans_z", "rot_x", "rot_y", "rot_z", "rot_w"]
                    .iter()
                    .map(|suffix| format!("{}/{suffix}", self.name))
                    .collect()
            }
        }
    }

    /// Default positions for this joint's variables, in layout order.
    ///
    /// Zero when the bounds contain zero (or the joint is unbounded),
    /// otherwise the midpoint of the bounds. The quaternion `w` component
    /// of a floating joint defaults to one (identity rotation).
    #[must_use]
    pub fn default_variable_positions(&self) -> Vec<f64> {
        match self.joint_type {
            JointType::Fixed => Vec::new(),
            JointType::Revolute | JointType::Prismatic => {
                vec![self.default_single_variable()]
            }
            JointType::Continuous => vec![0.0],
            JointType::Planar => vec![0.0; 3],
            JointType::Floating => vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    fn default_single_variable(&self) -> f64 {
        match (self.limits.lower, self.limits.upper) {
            (Some(lower), Some(upper)) if lower > 0.0 || upper < 0.0 => (lower + upper) / 2.0,
            _ => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
