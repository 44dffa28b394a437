use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::components::LocalAxes;

pub const ROTOR_COUNT: usize = 4;

/// Hub offsets in the body frame: front-right, front-left, back-right, back-left.
const ROTOR_HUBS: [[f64; 3]; ROTOR_COUNT] = [
    [15.0, 15.0, 1.5],
    [15.0, -15.0, 1.5],
    [-15.0, 15.0, 1.5],
    [-15.0, -15.0, 1.5],
];

/// Read-only description of one rotor for whatever draws it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorView {
    pub index: usize,
    /// Hub position relative to the craft origin, body frame
    pub hub_offset: Vector3<f64>,
    /// +1 for counter-clockwise, -1 for clockwise
    pub direction: f64,
    /// Spin angle in [0, 2π)
    pub phase: f64,
    /// Signed spin rate [rad/s]
    pub angular_speed: f64,
}

/// Build the rotor list from the shared spin phase and visual speed.
///
/// Adjacent rotors counter-rotate.
pub fn rotor_views(rotor_phase: f64, rotor_speed: f64, spin_rate: f64) -> [RotorView; ROTOR_COUNT] {
    std::array::from_fn(|index| {
        let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
        let [x, y, z] = ROTOR_HUBS[index];
        RotorView {
            index,
            hub_offset: Vector3::new(x, y, z),
            direction,
            phase: (direction * rotor_phase).rem_euclid(TAU),
            angular_speed: direction * rotor_speed * spin_rate,
        }
    })
}

/// Diagnostic quantities a debug overlay may draw as arrows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugView {
    pub position: Vector3<f64>,
    /// Unit direction of travel, zero at rest
    pub velocity_direction: Vector3<f64>,
    pub speed: f64,
    pub axes: LocalAxes,
    /// Thrust along body up
    pub up_lift: f64,
    /// Thrust along body right
    pub right_lift: f64,
}
