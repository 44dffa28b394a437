use serde::Deserialize;
use thiserror::Error;

use super::tuning::{DampingConfig, TuningConfig, TuningProfile};
use crate::resources::PhysicsConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid quadrotor configuration: {0}")]
    ValidationError(String),
}

/// Quadrotor configuration as written on disk.
///
/// A document picks a `profile` preset (agile when omitted) and may override
/// any individual constant in `tuning`. Missing `physics` fields take their
/// defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawQuadrotorConfig {
    pub name: Option<String>,
    pub profile: Option<TuningProfile>,
    #[serde(default)]
    pub tuning: TuningOverrides,
    pub physics: Option<PhysicsConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuningOverrides {
    pub drag_coefficient: Option<f64>,
    pub rotor_thrust: Option<f64>,
    pub rotor_torque: Option<f64>,
    pub rotor_response: Option<f64>,
    pub tilt_gain: Option<f64>,
    pub gravity_multiplier: Option<f64>,
    pub engine_response: Option<f64>,
    pub roll_pitch_response: Option<f64>,
    pub yaw_response: Option<f64>,
    pub roll_pitch_torque_multiplier: Option<f64>,
    pub yaw_torque_multiplier: Option<f64>,
    pub roll_pitch_damping: Option<DampingConfig>,
    pub yaw_damping: Option<DampingConfig>,
    pub max_rotor_speed: Option<f64>,
    pub rotor_acceleration: Option<f64>,
    pub rotor_spin_response: Option<f64>,
    pub rotor_spin_rate: Option<f64>,
}

impl TuningOverrides {
    /// Layer these overrides on top of a preset.
    pub fn apply(self, base: TuningConfig) -> TuningConfig {
        TuningConfig {
            drag_coefficient: self.drag_coefficient.unwrap_or(base.drag_coefficient),
            rotor_thrust: self.rotor_thrust.unwrap_or(base.rotor_thrust),
            rotor_torque: self.rotor_torque.unwrap_or(base.rotor_torque),
            rotor_response: self.rotor_response.unwrap_or(base.rotor_response),
            tilt_gain: self.tilt_gain.unwrap_or(base.tilt_gain),
            gravity_multiplier: self.gravity_multiplier.unwrap_or(base.gravity_multiplier),
            engine_response: self.engine_response.unwrap_or(base.engine_response),
            roll_pitch_response: self.roll_pitch_response.unwrap_or(base.roll_pitch_response),
            yaw_response: self.yaw_response.unwrap_or(base.yaw_response),
            roll_pitch_torque_multiplier: self
                .roll_pitch_torque_multiplier
                .unwrap_or(base.roll_pitch_torque_multiplier),
            yaw_torque_multiplier: self
                .yaw_torque_multiplier
                .unwrap_or(base.yaw_torque_multiplier),
            roll_pitch_damping: self.roll_pitch_damping.unwrap_or(base.roll_pitch_damping),
            yaw_damping: self.yaw_damping.unwrap_or(base.yaw_damping),
            max_rotor_speed: self.max_rotor_speed.unwrap_or(base.max_rotor_speed),
            rotor_acceleration: self.rotor_acceleration.unwrap_or(base.rotor_acceleration),
            rotor_spin_response: self.rotor_spin_response.unwrap_or(base.rotor_spin_response),
            rotor_spin_rate: self.rotor_spin_rate.unwrap_or(base.rotor_spin_rate),
        }
    }
}
