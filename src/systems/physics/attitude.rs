use nalgebra::{Quaternion, UnitQuaternion};

use crate::components::quadrotor::{QuadrotorState, TuningConfig};

/// Evolve the angular rates from the shaped roll/pitch/yaw actuators and
/// rotate the attitude by one small-angle step.
///
/// Roll and pitch carry more torque authority and stronger damping than yaw,
/// so they settle faster.
pub fn integrate_attitude(state: &mut QuadrotorState, tuning: &TuningConfig, dt: f64) {
    if dt <= 0.0 {
        return;
    }

    let inputs = state.actuators;
    let rates = &mut state.angular_rates;

    let roll_pitch_gain = dt * tuning.rotor_torque * tuning.roll_pitch_torque_multiplier;
    rates.roll += inputs.roll * roll_pitch_gain;
    rates.pitch += inputs.pitch * roll_pitch_gain;
    rates.yaw += inputs.yaw * dt * tuning.rotor_torque * tuning.yaw_torque_multiplier;

    let roll_pitch_decay = tuning.roll_pitch_damping.factor(dt);
    rates.roll *= roll_pitch_decay;
    rates.pitch *= roll_pitch_decay;
    rates.yaw *= tuning.yaw_damping.factor(dt);

    // Rates go straight into the vector part with w = 1; not an axis-angle step
    let increment = UnitQuaternion::new_normalize(Quaternion::new(
        1.0,
        rates.roll * dt,
        rates.pitch * dt,
        rates.yaw * dt,
    ));

    let spatial = &mut state.spatial;
    spatial.attitude = spatial.attitude * increment;
    spatial.renormalize();
}
