use std::f64::consts::TAU;

use crate::components::quadrotor::{QuadrotorState, TuningConfig};

/// Move `current` toward `desired` without overshooting.
///
/// The step grows with the remaining distance, so large corrections happen
/// quickly and the value settles smoothly near the target.
pub fn approach(current: f64, desired: f64, speed: f64, dt: f64) -> f64 {
    let adaptive_speed = speed * (1.0 + (desired - current).abs() * 2.0);
    let step = adaptive_speed * dt;

    if desired > current {
        desired.min(current + step)
    } else {
        desired.max(current - step)
    }
}

/// Shape every actuator channel and the visual rotor speed toward their
/// targets, then advance the rotor spin phase.
pub fn shape_inputs(state: &mut QuadrotorState, tuning: &TuningConfig, dt: f64) {
    let desired = state.desired;
    let actuators = &mut state.actuators;

    actuators.engine = approach(actuators.engine, desired.engine, tuning.engine_speed(), dt);
    actuators.roll = approach(actuators.roll, desired.roll, tuning.roll_pitch_speed(), dt);
    actuators.pitch = approach(actuators.pitch, desired.pitch, tuning.roll_pitch_speed(), dt);
    actuators.yaw = approach(actuators.yaw, desired.yaw, tuning.yaw_speed(), dt);

    state.rotor_speed = approach(
        state.rotor_speed,
        state.actuators.engine * tuning.max_rotor_speed,
        tuning.rotor_speed_speed(),
        dt,
    );
    state.rotor_phase = (state.rotor_phase + state.rotor_speed * tuning.rotor_spin_rate * dt)
        .rem_euclid(TAU);
}
