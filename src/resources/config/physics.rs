use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// World-level physics parameters shared by every tuning profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Largest step the integrators accept in one tick [s]
    pub max_dt: f64,
    /// Gravitational acceleration before the profile multiplier [units/s^2]
    pub gravity: f64,
    /// Position magnitude past which the state is considered divergent
    pub runaway_limit: f64,
    /// Where the craft spawns and where runaway recovery puts it back
    pub spawn_position: Vector3<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_dt: 1.0 / 30.0,
            gravity: 9.81,
            runaway_limit: 5_000_000.0,
            spawn_position: Vector3::new(0.0, 0.0, 400.0),
        }
    }
}

impl PhysicsConfig {
    /// Clamp a host frame time into the range the integrators can handle.
    ///
    /// Negative and NaN frame times collapse to zero.
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }
}
