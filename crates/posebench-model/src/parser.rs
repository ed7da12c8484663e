//! URDF XML parsing using `urdf-rs`.
//!
//! Converts `urdf_rs` types into the crate's [`RobotModel`] representation.
//! Only the kinematic structure survives the conversion: joint names,
//! types, tree topology, and position limits. Joint declaration order is
//! preserved because it defines the model's variable layout.

use std::collections::HashSet;
use std::path::Path;

use crate::error::ModelError;
use crate::model::RobotModel;
use crate::types::{JointData, JointLimits, JointType};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a URDF file from disk into a [`RobotModel`].
///
/// The returned model carries no joint groups yet; apply a semantic
/// description to register groups and predefined poses.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RobotModel, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_string(&content)
}

/// Parse a URDF XML string into a [`RobotModel`].
pub fn parse_string(xml: &str) -> Result<RobotModel, ModelError> {
    let robot = urdf_rs::read_from_string(xml).map_err(|e| ModelError::Parse(e.to_string()))?;
    convert_robot(&robot)
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn convert_robot(robot: &urdf_rs::Robot) -> Result<RobotModel, ModelError> {
    let joints: Vec<JointData> = robot
        .joints
        .iter()
        .map(convert_joint)
        .collect::<Result<_, _>>()?;

    // Sanity-check the tree: some link must never appear as a child.
    let child_links: HashSet<&str> = joints.iter().map(|j| j.child.as_str()).collect();
    robot
        .links
        .iter()
        .find(|l| !child_links.contains(l.name.as_str()))
        .ok_or(ModelError::NoRootLink)?;

    Ok(RobotModel::new(robot.name.clone(), joints))
}

fn convert_joint(joint: &urdf_rs::Joint) -> Result<JointData, ModelError> {
    let joint_type = convert_joint_type(&joint.joint_type)?;
    Ok(JointData {
        name: joint.name.clone(),
        joint_type,
        parent: joint.parent.link.clone(),
        child: joint.child.link.clone(),
        limits: convert_limits(&joint.limit, joint_type),
    })
}

fn convert_joint_type(jt: &urdf_rs::JointType) -> Result<JointType, ModelError> {
    match jt {
        urdf_rs::JointType::Revolute => Ok(JointType::Revolute),
        urdf_rs::JointType::Continuous => Ok(JointType::Continuous),
        urdf_rs::JointType::Prismatic => Ok(JointType::Prismatic),
        urdf_rs::JointType::Fixed => Ok(JointType::Fixed),
        urdf_rs::JointType::Floating => Ok(JointType::Floating),
        urdf_rs::JointType::Planar => Ok(JointType::Planar),
        urdf_rs::JointType::Spherical => Err(ModelError::UnsupportedJointType("Spherical".into())),
    }
}

fn convert_limits(limit: &urdf_rs::JointLimit, joint_type: JointType) -> JointLimits {
    // Continuous joints and multi-variable joints have no position bounds.
    // urdf-rs defaults lower/upper to 0.0 for joints without limits; both
    // zero is treated as "unbounded".
    if !matches!(joint_type, JointType::Revolute | JointType::Prismatic) {
        return JointLimits::default();
    }
    if (limit.lower - limit.upper).abs() < f64::EPSILON {
        return JointLimits::default();
    }
    JointLimits::bounded(limit.lower, limit.upper)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LINK_ARM: &str = r#"
        <robot name="two_link_arm">
            <link name="base"/>
            <link name="upper_arm"/>
            <link name="forearm"/>
            <link name="tool"/>
            <joint name="shoulder" type="revolute">
                <parent link="base"/><child link="upper_arm"/>
                <axis xyz="0 0 1"/>
                <limit lower="-2.617" upper="2.617" effort="50" velocity="3"/>
            </joint>
            <joint name="elbow" type="revolute">
                <parent link="upper_arm"/><child link="forearm"/>
                <axis xyz="0 0 1"/>
                <limit lower="-2.094" upper="2.094" effort="30" velocity="5"/>
            </joint>
            <joint name="tool_mount" type="fixed">
                <parent link="forearm"/><child link="tool"/>
            </joint>
        </robot>
    "#;

    #[test]
    fn parse_two_link_arm() {
        let model = parse_string(TWO_LINK_ARM).unwrap();
        assert_eq!(model.name(), "two_link_arm");
        assert_eq!(model.joints().len(), 3);
        assert_eq!(model.variable_count(), 2);
        assert_eq!(model.variable_names(), &["shoulder", "elbow"]);
    }

    #[test]
    fn parse_preserves_declaration_order() {
        let model = parse_string(TWO_LINK_ARM).unwrap();
        let names: Vec<&str> = model.joints().iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["shoulder", "elbow", "tool_mount"]);
    }

    #[test]
    fn parse_converts_limits() {
        let model = parse_string(TWO_LINK_ARM).unwrap();
        let shoulder = model.joint("shoulder").unwrap();
        assert_eq!(shoulder.limits, JointLimits::bounded(-2.617, 2.617));
        let mount = model.joint("tool_mount").unwrap();
        assert_eq!(mount.limits, JointLimits::default());
    }

    #[test]
    fn parse_continuous_joint_is_unbounded() {
        let xml = r#"
            <robot name="spinner">
                <link name="base"/>
                <link name="wheel"/>
                <joint name="axle" type="continuous">
                    <parent link="base"/><child link="wheel"/>
                    <axis xyz="0 1 0"/>
                </joint>
            </robot>
        "#;
        let model = parse_string(xml).unwrap();
        let axle = model.joint("axle").unwrap();
        assert_eq!(axle.joint_type, JointType::Continuous);
        assert!(!axle.limits.is_bounded());
    }

    #[test]
    fn parse_invalid_xml_fails() {
        assert!(matches!(
            parse_string("<robot name='broken'>"),
            Err(ModelError::Parse(_))
        ));
    }

    #[test]
    fn parse_cyclic_tree_fails() {
        let xml = r#"
            <robot name="cycle">
                <link name="a"/>
                <link name="b"/>
                <joint name="ab" type="fixed">
                    <parent link="a"/><child link="b"/>
                </joint>
                <joint name="ba" type="fixed">
                    <parent link="b"/><child link="a"/>
                </joint>
            </robot>
        "#;
        assert!(matches!(parse_string(xml), Err(ModelError::NoRootLink)));
    }

    #[test]
    fn parse_file_missing_path_fails() {
        let err = parse_file("/nonexistent/robot.urdf").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
