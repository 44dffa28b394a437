use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::components::SpatialComponent;

/// Allowed engine command range.
pub const ENGINE_RANGE: RangeInclusive<f64> = 0.0..=1.2;
/// Allowed roll, pitch and yaw command range.
pub const AXIS_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// One value per control channel.
///
/// Used both for what the pilot asks for and for what the actuators
/// currently deliver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlChannels {
    pub engine: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Default for ControlChannels {
    fn default() -> Self {
        Self {
            engine: 0.5,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl ControlChannels {
    /// All channels idle, engine included.
    pub fn zero() -> Self {
        Self {
            engine: 0.0,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn within_bounds(&self) -> bool {
        ENGINE_RANGE.contains(&self.engine)
            && AXIS_RANGE.contains(&self.roll)
            && AXIS_RANGE.contains(&self.pitch)
            && AXIS_RANGE.contains(&self.yaw)
    }
}

/// Body rotation rates, accumulated from torque and decayed by damping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularRates {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Everything that evolves from tick to tick for one craft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrotorState {
    pub spatial: SpatialComponent,
    pub angular_rates: AngularRates,
    /// Shaped values currently driving the model
    pub actuators: ControlChannels,
    /// Targets set through the clamped setters
    pub desired: ControlChannels,
    /// Shaped visual rotor speed
    pub rotor_speed: f64,
    /// Accumulated spin angle shared by all rotors, in [0, 2π)
    pub rotor_phase: f64,
}

impl QuadrotorState {
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            spatial: SpatialComponent::at_position(position),
            angular_rates: AngularRates::default(),
            actuators: ControlChannels::default(),
            desired: ControlChannels::default(),
            rotor_speed: 0.0,
            rotor_phase: 0.0,
        }
    }
}

/// Clamp an incoming command into `range`.
///
/// Returns `None` for NaN, which carries no usable intent.
pub(crate) fn clamp_command(value: f64, range: &RangeInclusive<f64>) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(*range.start(), *range.end()))
}
