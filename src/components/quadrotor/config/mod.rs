mod loader;
mod tuning;

pub use loader::{ConfigError, RawQuadrotorConfig, TuningOverrides};
pub use tuning::{DampingConfig, TuningConfig, TuningProfile};

use bevy::log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::PhysicsConfig;

/// Complete configuration for one quadrotor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrotorConfig {
    pub name: String,
    pub tuning: TuningConfig,
    pub physics: PhysicsConfig,
}

impl Default for QuadrotorConfig {
    fn default() -> Self {
        Self::from_profile(TuningProfile::Agile)
    }
}

impl QuadrotorConfig {
    pub fn from_profile(profile: TuningProfile) -> Self {
        Self {
            name: "quadrotor".to_string(),
            tuning: TuningConfig::from_profile(profile),
            physics: PhysicsConfig::default(),
        }
    }

    pub fn from_raw(raw: RawQuadrotorConfig) -> Result<Self, ConfigError> {
        let profile = raw.profile.unwrap_or_default();
        let config = Self {
            name: raw.name.unwrap_or_else(|| "quadrotor".to_string()),
            tuning: raw.tuning.apply(TuningConfig::from_profile(profile)),
            physics: raw.physics.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawQuadrotorConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded quadrotor config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Check the constants table for values the integrators cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        let positive = [
            ("drag_coefficient", t.drag_coefficient),
            ("rotor_thrust", t.rotor_thrust),
            ("rotor_torque", t.rotor_torque),
            ("rotor_response", t.rotor_response),
            ("gravity_multiplier", t.gravity_multiplier),
            ("engine_response", t.engine_response),
            ("roll_pitch_response", t.roll_pitch_response),
            ("yaw_response", t.yaw_response),
            ("rotor_acceleration", t.rotor_acceleration),
            ("rotor_spin_response", t.rotor_spin_response),
            ("max_dt", self.physics.max_dt),
            ("gravity", self.physics.gravity),
            ("runaway_limit", self.physics.runaway_limit),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("tilt_gain", t.tilt_gain),
            ("roll_pitch_torque_multiplier", t.roll_pitch_torque_multiplier),
            ("yaw_torque_multiplier", t.yaw_torque_multiplier),
            ("max_rotor_speed", t.max_rotor_speed),
            ("rotor_spin_rate", t.rotor_spin_rate),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        for (name, damping) in [
            ("roll_pitch_damping", t.roll_pitch_damping),
            ("yaw_damping", t.yaw_damping),
        ] {
            if !(damping.base > 0.0 && damping.base < 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name}.base must lie in (0, 1), got {}",
                    damping.base
                )));
            }
            if !(damping.rate.is_finite() && damping.rate >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name}.rate must be finite and non-negative, got {}",
                    damping.rate
                )));
            }
        }

        if !(t.engine_response >= t.roll_pitch_response && t.roll_pitch_response >= t.yaw_response)
        {
            return Err(ConfigError::ValidationError(format!(
                "response multipliers must satisfy engine >= roll/pitch >= yaw, got {} / {} / {}",
                t.engine_response, t.roll_pitch_response, t.yaw_response
            )));
        }

        if self.physics.spawn_position.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::ValidationError(
                "spawn_position must be finite".to_string(),
            ));
        }
        if self.physics.spawn_position.norm() > self.physics.runaway_limit {
            return Err(ConfigError::ValidationError(
                "spawn_position lies outside the runaway limit".to_string(),
            ));
        }

        Ok(())
    }

    pub fn hover_threshold(&self) -> f64 {
        self.tuning.hover_threshold(self.physics.gravity)
    }

    pub fn terminal_velocity(&self) -> f64 {
        self.tuning.terminal_velocity(self.physics.gravity)
    }
}
