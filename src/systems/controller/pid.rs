use serde::{Deserialize, Serialize};

/// Bound on the accumulated error integral before it is scaled by `ki`.
pub const INTEGRAL_LIMIT: f64 = 1.0;

/// Proportional, integral and derivative gains.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl PidGains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

/// A single-axis PID controller with a clamped integral.
///
/// Knows nothing about what it drives; callers feed a measurement and a
/// time step and apply the returned signal however they like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    pub gains: PidGains,
    setpoint: f64,
    integral: f64,
    last_error: f64,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self::with_setpoint(gains, 0.0)
    }

    pub fn with_setpoint(gains: PidGains, setpoint: f64) -> Self {
        Self {
            gains,
            setpoint,
            integral: 0.0,
            last_error: 0.0,
        }
    }

    /// Advance the controller by `dt` seconds and return the control signal.
    ///
    /// # Panics
    /// If `dt` is not strictly positive. A zero or negative step is a caller
    /// bug, not a runtime condition.
    pub fn update(&mut self, measured: f64, dt: f64) -> f64 {
        assert!(dt > 0.0, "PID time step must be positive, got {dt}");

        let error = self.setpoint - measured;

        self.integral = (self.integral + error * dt).clamp(-INTEGRAL_LIMIT, INTEGRAL_LIMIT);
        let derivative = (error - self.last_error) / dt;
        self.last_error = error;

        self.gains.kp * error + self.gains.ki * self.integral + self.gains.kd * derivative
    }

    /// Move the setpoint, keeping the accumulated integral and last error.
    pub fn set_target(&mut self, setpoint: f64) {
        self.setpoint = setpoint;
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_error = 0.0;
    }

    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn last_error(&self) -> f64 {
        self.last_error
    }
}
