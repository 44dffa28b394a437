use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Quadrotor;
use crate::systems::controller::{PidController, PidGains};

/// Device-agnostic pilot intent, every axis in [-1, 1].
///
/// Whatever reads the keyboard, gamepad or network writes here; the craft
/// only ever sees the result through its setters.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub throttle: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl ControlIntent {
    pub fn new(throttle: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            throttle,
            roll,
            pitch,
            yaw,
        }
    }

    /// Engine command for this intent: centred stick maps to half throttle.
    pub fn engine_command(&self) -> f64 {
        self.throttle * 0.5 + 0.5
    }

    pub fn apply(&self, craft: &mut Quadrotor) {
        craft.set_engine_input(self.engine_command());
        craft.set_roll_input(self.roll);
        craft.set_pitch_input(self.pitch);
        craft.set_yaw_input(self.yaw);
    }
}

/// Closed-loop altitude autopilot driving the engine command.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AltitudeHold {
    pub pid: PidController,
    pub enabled: bool,
}

impl AltitudeHold {
    pub fn new(target_altitude: f64, gains: PidGains) -> Self {
        Self {
            pid: PidController::with_setpoint(gains, target_altitude),
            enabled: true,
        }
    }

    pub fn target_altitude(&self) -> f64 {
        self.pid.setpoint()
    }

    pub fn set_target_altitude(&mut self, altitude: f64) {
        self.pid.set_target(altitude);
    }

    pub fn engage(&mut self) {
        self.enabled = true;
    }

    /// Stop commanding the engine and forget accumulated error.
    pub fn disengage(&mut self) {
        self.enabled = false;
        self.pid.reset();
    }
}

impl Default for AltitudeHold {
    fn default() -> Self {
        Self::new(400.0, PidGains::new(0.05, 0.02, 0.08))
    }
}
