use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::{
    config::QuadrotorConfig,
    state::{clamp_command, AngularRates, ControlChannels, QuadrotorState, AXIS_RANGE, ENGINE_RANGE},
    views::{rotor_views, DebugView, RotorView, ROTOR_COUNT},
};
use crate::components::LocalAxes;
use crate::systems::{
    controller::shape_inputs,
    physics::{
        check_runaway, compute_forces, integrate_attitude, integrate_translation, RunawayRecovery,
    },
};

/// Whether the simulation advances on `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    Active,
    /// Integration is frozen; the safety pass still runs
    Paused,
}

/// A single quadrotor: owns its state and advances it once per frame.
///
/// The four `set_*_input` setters and the pause flag are the only way
/// control intent enters. Everything else is read-only apart from the
/// host correction methods used for ground contact.
#[derive(Component, Debug, Clone)]
pub struct Quadrotor {
    config: QuadrotorConfig,
    state: QuadrotorState,
    mode: FlightMode,
}

impl Default for Quadrotor {
    fn default() -> Self {
        Self::new(QuadrotorConfig::default())
    }
}

impl Quadrotor {
    /// Spawn a craft at the configured spawn point, level and at rest.
    pub fn new(config: QuadrotorConfig) -> Self {
        let state = QuadrotorState::at_position(config.physics.spawn_position);
        Self {
            config,
            state,
            mode: FlightMode::Active,
        }
    }

    /// Advance the craft by `dt` seconds of host time.
    ///
    /// While active, `dt` is clamped to `max_dt` and the pipeline runs in a
    /// fixed order: input shaping, attitude, forces, position, safety. While
    /// paused only the safety pass runs.
    pub fn update(&mut self, dt: f64) -> Option<RunawayRecovery> {
        if self.mode == FlightMode::Paused {
            return self.apply_pose();
        }

        let dt = self.config.physics.clamp_dt(dt);
        let tuning = &self.config.tuning;

        shape_inputs(&mut self.state, tuning, dt);

        // Forces use the axes from the start of the tick
        let axes = self.state.spatial.local_axes();
        integrate_attitude(&mut self.state, tuning, dt);

        let forces = compute_forces(
            &axes,
            &self.state.actuators,
            &self.state.spatial.velocity,
            tuning,
            self.config.physics.gravity,
        );
        let spatial = &mut self.state.spatial;
        integrate_translation(&mut spatial.position, &mut spatial.velocity, &forces.net, dt);

        debug!(
            "Quadrotor '{}' dt={:.4} position={:?} velocity={:?}",
            self.config.name, dt, spatial.position, spatial.velocity
        );

        self.apply_pose()
    }

    fn apply_pose(&mut self) -> Option<RunawayRecovery> {
        check_runaway(&mut self.state.spatial, &self.config.physics)
    }

    pub fn set_engine_input(&mut self, value: f64) {
        if let Some(value) = self.checked_command("engine", value, &ENGINE_RANGE) {
            self.state.desired.engine = value;
        }
    }

    pub fn set_roll_input(&mut self, value: f64) {
        if let Some(value) = self.checked_command("roll", value, &AXIS_RANGE) {
            self.state.desired.roll = value;
        }
    }

    pub fn set_pitch_input(&mut self, value: f64) {
        if let Some(value) = self.checked_command("pitch", value, &AXIS_RANGE) {
            self.state.desired.pitch = value;
        }
    }

    pub fn set_yaw_input(&mut self, value: f64) {
        if let Some(value) = self.checked_command("yaw", value, &AXIS_RANGE) {
            self.state.desired.yaw = value;
        }
    }

    fn checked_command(
        &self,
        channel: &str,
        value: f64,
        range: &std::ops::RangeInclusive<f64>,
    ) -> Option<f64> {
        let clamped = clamp_command(value, range);
        if clamped.is_none() {
            warn!(
                "Ignoring NaN {} input for quadrotor '{}'",
                channel, self.config.name
            );
        }
        clamped
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.mode = if paused {
            FlightMode::Paused
        } else {
            FlightMode::Active
        };
    }

    pub fn is_paused(&self) -> bool {
        self.mode == FlightMode::Paused
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    /// World position.
    pub fn position(&self) -> Vector3<f64> {
        self.state.spatial.position
    }

    /// Unit attitude quaternion, body to world.
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.state.spatial.attitude
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.state.spatial.velocity
    }

    pub fn angular_rates(&self) -> AngularRates {
        self.state.angular_rates
    }

    pub fn actuators(&self) -> ControlChannels {
        self.state.actuators
    }

    pub fn desired(&self) -> ControlChannels {
        self.state.desired
    }

    pub fn axes(&self) -> LocalAxes {
        self.state.spatial.local_axes()
    }

    pub fn state(&self) -> &QuadrotorState {
        &self.state
    }

    pub fn config(&self) -> &QuadrotorConfig {
        &self.config
    }

    pub fn rotors(&self) -> [RotorView; ROTOR_COUNT] {
        rotor_views(
            self.state.rotor_phase,
            self.state.rotor_speed,
            self.config.tuning.rotor_spin_rate,
        )
    }

    pub fn debug_view(&self) -> DebugView {
        let spatial = &self.state.spatial;
        let axes = spatial.local_axes();
        let forces = compute_forces(
            &axes,
            &self.state.actuators,
            &spatial.velocity,
            &self.config.tuning,
            self.config.physics.gravity,
        );
        let speed = spatial.velocity.norm();

        DebugView {
            position: spatial.position,
            velocity_direction: spatial
                .velocity
                .try_normalize(0.0)
                .unwrap_or_else(Vector3::zeros),
            speed,
            axes,
            up_lift: forces.up_lift(&axes),
            right_lift: forces.right_lift(&axes),
        }
    }

    /// Host-side correction of position, e.g. after ground contact.
    pub fn position_mut(&mut self) -> &mut Vector3<f64> {
        &mut self.state.spatial.position
    }

    pub fn velocity_mut(&mut self) -> &mut Vector3<f64> {
        &mut self.state.spatial.velocity
    }

    pub fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.state.spatial.attitude = orientation;
        self.state.spatial.renormalize();
    }

    /// Place the craft at `position`, level and at rest. Controls are kept.
    pub fn respawn(&mut self, position: Vector3<f64>) {
        let spatial = &mut self.state.spatial;
        spatial.position = position;
        spatial.velocity = Vector3::zeros();
        spatial.attitude = UnitQuaternion::identity();
        self.state.angular_rates = AngularRates::default();
    }
}
