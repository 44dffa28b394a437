use nalgebra::Vector3;

use crate::components::{
    quadrotor::{ControlChannels, TuningConfig},
    LocalAxes,
};

/// Forces acting on the craft for one tick, unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub thrust: Vector3<f64>,
    pub gravity: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub net: Vector3<f64>,
}

impl ForceBreakdown {
    /// Component of thrust along the body up axis.
    pub fn up_lift(&self, axes: &LocalAxes) -> f64 {
        self.thrust.dot(&axes.up)
    }

    /// Component of thrust along the body right axis.
    pub fn right_lift(&self, axes: &LocalAxes) -> f64 {
        self.thrust.dot(&axes.right)
    }
}

/// Direction of rotor thrust: body up, tilted by pitch and roll commands.
///
/// Positive pitch tilts thrust backwards, positive roll tilts it right.
pub fn thrust_direction(axes: &LocalAxes, actuators: &ControlChannels, tilt_gain: f64) -> Vector3<f64> {
    let direction = axes.up - axes.forward * (actuators.pitch * tilt_gain)
        + axes.right * (actuators.roll * tilt_gain);
    direction.try_normalize(f64::EPSILON).unwrap_or(axes.up)
}

/// Quadratic drag opposing `velocity`; zero at rest.
pub fn drag_force(velocity: &Vector3<f64>, drag_coefficient: f64) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed > 0.0 {
        velocity.normalize() * (-drag_coefficient * speed * speed)
    } else {
        Vector3::zeros()
    }
}

/// Sum thrust, gravity and drag for the current actuators and velocity.
pub fn compute_forces(
    axes: &LocalAxes,
    actuators: &ControlChannels,
    velocity: &Vector3<f64>,
    tuning: &TuningConfig,
    gravity: f64,
) -> ForceBreakdown {
    let thrust_magnitude = actuators.engine.max(0.0) * tuning.rotor_thrust;
    let thrust = thrust_direction(axes, actuators, tuning.tilt_gain) * thrust_magnitude;
    let gravity = Vector3::new(0.0, 0.0, -tuning.effective_gravity(gravity));
    let drag = drag_force(velocity, tuning.drag_coefficient);

    ForceBreakdown {
        thrust,
        gravity,
        drag,
        net: thrust + gravity + drag,
    }
}

/// Semi-implicit Euler, unit mass: velocity first, then position with the new velocity.
pub fn integrate_translation(
    position: &mut Vector3<f64>,
    velocity: &mut Vector3<f64>,
    net_force: &Vector3<f64>,
    dt: f64,
) {
    *velocity += net_force * dt;
    *position += *velocity * dt;
}
