use serde::{Deserialize, Serialize};

/// Named tuning presets.
///
/// Every preset drives the same force model; only the constants differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuningProfile {
    /// Light drag and heavy gravity. Neutral throttle climbs, zero throttle drops fast.
    #[default]
    Agile,
    /// Heavier drag and lighter gravity, trimmed so neutral throttle (0.5) hovers.
    Cruise,
}

/// Exponential damping `rate *= base^(dt * rate)` for one rotational axis group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampingConfig {
    /// Fraction of rate retained after `1 / rate` seconds, in (0, 1)
    pub base: f64,
    pub rate: f64,
}

impl DampingConfig {
    pub fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    /// Multiplicative decay factor for a step of `dt` seconds.
    pub fn factor(&self, dt: f64) -> f64 {
        self.base.powf(dt * self.rate)
    }
}

/// The constants table for the quadrotor force, attitude and shaping models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Quadratic drag coefficient
    pub drag_coefficient: f64,
    /// Thrust at engine input 1.0 (unit mass)
    pub rotor_thrust: f64,
    /// Angular acceleration per unit of roll/pitch/yaw input
    pub rotor_torque: f64,
    /// Base speed of the input shaper
    pub rotor_response: f64,
    /// How far roll/pitch inputs tilt the thrust vector off body-up
    pub tilt_gain: f64,
    /// Game-feel scale on gravity
    pub gravity_multiplier: f64,

    /// Shaper speed multipliers. Must satisfy engine >= roll/pitch >= yaw.
    pub engine_response: f64,
    pub roll_pitch_response: f64,
    pub yaw_response: f64,

    pub roll_pitch_torque_multiplier: f64,
    pub yaw_torque_multiplier: f64,
    pub roll_pitch_damping: DampingConfig,
    pub yaw_damping: DampingConfig,

    /// Visual rotor speed at engine input 1.0
    pub max_rotor_speed: f64,
    /// Base shaper speed for the visual rotor speed
    pub rotor_acceleration: f64,
    pub rotor_spin_response: f64,
    /// Spin angle per second per unit of visual rotor speed [rad]
    pub rotor_spin_rate: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self::agile()
    }
}

impl TuningConfig {
    pub fn from_profile(profile: TuningProfile) -> Self {
        match profile {
            TuningProfile::Agile => Self::agile(),
            TuningProfile::Cruise => Self::cruise(),
        }
    }

    pub fn agile() -> Self {
        Self {
            drag_coefficient: 0.02,
            rotor_thrust: 150.0,
            rotor_torque: 1.2,
            rotor_response: 25.0,
            tilt_gain: 0.6,
            gravity_multiplier: 5.0,
            engine_response: 1.5,
            roll_pitch_response: 1.2,
            yaw_response: 0.9,
            roll_pitch_torque_multiplier: 1.5,
            yaw_torque_multiplier: 1.0,
            roll_pitch_damping: DampingConfig::new(0.1, 2.5),
            yaw_damping: DampingConfig::new(0.2, 2.0),
            max_rotor_speed: 5.0,
            rotor_acceleration: 5.0,
            rotor_spin_response: 1.5,
            // 0.2 rad per frame at 60 Hz
            rotor_spin_rate: 12.0,
        }
    }

    pub fn cruise() -> Self {
        let gravity_multiplier = 2.0;
        Self {
            drag_coefficient: 0.05,
            // Hover at exactly half throttle under standard gravity
            rotor_thrust: 9.81 * gravity_multiplier / 0.5,
            rotor_torque: 1.0,
            rotor_response: 15.0,
            tilt_gain: 0.4,
            gravity_multiplier,
            engine_response: 1.2,
            roll_pitch_response: 1.0,
            yaw_response: 0.8,
            roll_pitch_damping: DampingConfig::new(0.05, 3.0),
            yaw_damping: DampingConfig::new(0.1, 2.5),
            ..Self::agile()
        }
    }

    /// Shaper speeds for engine, roll/pitch and yaw.
    pub fn engine_speed(&self) -> f64 {
        self.rotor_response * self.engine_response
    }

    pub fn roll_pitch_speed(&self) -> f64 {
        self.rotor_response * self.roll_pitch_response
    }

    pub fn yaw_speed(&self) -> f64 {
        self.rotor_response * self.yaw_response
    }

    pub fn rotor_speed_speed(&self) -> f64 {
        self.rotor_acceleration * self.rotor_spin_response
    }

    /// Downward acceleration applied every tick.
    pub fn effective_gravity(&self, gravity: f64) -> f64 {
        gravity * self.gravity_multiplier
    }

    /// Engine input at which thrust cancels gravity on a level craft.
    pub fn hover_threshold(&self, gravity: f64) -> f64 {
        self.effective_gravity(gravity) / self.rotor_thrust
    }

    /// Zero-thrust descent speed where quadratic drag balances gravity.
    pub fn terminal_velocity(&self, gravity: f64) -> f64 {
        (self.effective_gravity(gravity) / self.drag_coefficient).sqrt()
    }
}
