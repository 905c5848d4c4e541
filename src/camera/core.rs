use glam::{Mat4, Vec3};

/// Where a camera sits, what it looks at, and which way is up.
///
/// This is what the orbit controller hands back to the host each frame;
/// the host copies it onto its own camera object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Unit up direction.
    pub up: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit direction from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }
}
