// Camera-related components for the third-person rig.

use bevy::prelude::*;

use crate::features::rig::{CameraRig, TransformSink};

/// Camera entity driven by a third-person rig that follows another entity.
#[derive(Component)]
pub struct ThirdPersonCamera {
    pub rig: CameraRig,
    /// Entity whose translation the rig orbits.
    pub follow: Entity,
}

impl ThirdPersonCamera {
    pub fn new(rig: CameraRig, follow: Entity) -> Self {
        Self { rig, follow }
    }
}

/// Camera pose as the rig last wrote it, before the shake offset.
///
/// The entity's `Transform` is always this pose shifted by `view_offset`
/// along the camera's local right/up axes.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RigPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub view_offset: Vec2,
}

impl Default for RigPose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            view_offset: Vec2::ZERO,
        }
    }
}

impl RigPose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
            view_offset: Vec2::ZERO,
        }
    }

    /// Rendered transform: the pose plus the view offset in camera space.
    pub fn composed(&self) -> Transform {
        let offset = self.rotation * Vec3::new(self.view_offset.x, self.view_offset.y, 0.0);
        Transform {
            translation: self.translation + offset,
            rotation: self.rotation,
            ..default()
        }
    }
}

/// `TransformSink` over a camera entity's pose and transform.
pub struct EntityTransformSink<'a> {
    pose: &'a mut RigPose,
    transform: &'a mut Transform,
}

impl<'a> EntityTransformSink<'a> {
    pub fn new(pose: &'a mut RigPose, transform: &'a mut Transform) -> Self {
        Self { pose, transform }
    }

    fn sync(&mut self) {
        let composed = self.pose.composed();
        self.transform.translation = composed.translation;
        self.transform.rotation = composed.rotation;
    }
}

impl TransformSink for EntityTransformSink<'_> {
    fn position(&self) -> Vec3 {
        self.pose.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.pose.translation = position;
        self.sync();
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
        self.sync();
    }

    fn set_view_offset(&mut self, offset: Vec2) {
        self.pose.view_offset = offset;
        self.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_offset_is_camera_relative() {
        let mut pose = RigPose::default();
        let mut transform = Transform::default();
        let mut sink = EntityTransformSink::new(&mut pose, &mut transform);

        sink.set_position(Vec3::new(1.0, 2.0, 3.0));
        sink.set_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        sink.set_view_offset(Vec2::new(0.5, 0.25));

        // Yawed 90°, camera right points to -Z.
        assert!(transform
            .translation
            .abs_diff_eq(Vec3::new(1.0, 2.25, 2.5), 1e-5));
        assert_eq!(pose.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_position_reads_unshaken_pose() {
        let mut pose = RigPose::default();
        let mut transform = Transform::default();
        let mut sink = EntityTransformSink::new(&mut pose, &mut transform);
        sink.set_view_offset(Vec2::new(3.0, 0.0));
        assert_eq!(sink.position(), Vec3::ZERO);
    }
}
