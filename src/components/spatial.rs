use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Spatial state of a craft in the Z-up world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space
    pub position: Vector3<f64>,

    /// Linear velocity in world space [units/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
        }
    }

    /// Create a new spatial component at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Body axes (forward, right, up) expressed in the world frame.
    pub fn local_axes(&self) -> LocalAxes {
        LocalAxes::from_attitude(&self.attitude)
    }

    /// Re-project the attitude onto the unit sphere.
    pub fn renormalize(&mut self) {
        self.attitude = UnitQuaternion::new_normalize(self.attitude.into_inner());
    }
}

/// Forward/right/up unit vectors of the body frame, rotated into the world.
///
/// Body forward is +X, right is +Y and up is +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAxes {
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl Default for LocalAxes {
    fn default() -> Self {
        Self::from_attitude(&UnitQuaternion::identity())
    }
}

impl LocalAxes {
    pub fn from_attitude(attitude: &UnitQuaternion<f64>) -> Self {
        Self {
            forward: attitude * Vector3::x(),
            right: attitude * Vector3::y(),
            up: attitude * Vector3::z(),
        }
    }
}
