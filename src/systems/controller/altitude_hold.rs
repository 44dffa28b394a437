use bevy::prelude::*;

use crate::components::{AltitudeHold, Quadrotor};
use crate::resources::SimulationPaused;

/// Engine command that holds the target altitude, or `None` when the
/// autopilot is off or there is no time step to differentiate over.
pub fn altitude_hold_command(
    hold: &mut AltitudeHold,
    altitude: f64,
    hover_threshold: f64,
    dt: f64,
) -> Option<f64> {
    if !hold.enabled || !(dt > 0.0) {
        return None;
    }
    Some(hover_threshold + hold.pid.update(altitude, dt))
}

/// Overrides the pilot's throttle on crafts carrying an enabled [`AltitudeHold`].
pub fn altitude_hold_system(
    time: Res<Time>,
    paused: Res<SimulationPaused>,
    mut query: Query<(&mut AltitudeHold, &mut Quadrotor)>,
) {
    if paused.0 {
        return;
    }

    let dt = time.delta_secs_f64();
    for (mut hold, mut craft) in query.iter_mut() {
        let dt = craft.config().physics.clamp_dt(dt);
        let hover = craft.config().hover_threshold();
        if let Some(command) = altitude_hold_command(&mut hold, craft.position().z, hover, dt) {
            craft.set_engine_input(command);
        }
    }
}
