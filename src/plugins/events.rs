use bevy::prelude::*;
use nalgebra::Vector3;

/// A craft diverged and was put back at its spawn point.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct RunawayRecovered {
    pub entity: Entity,
    pub diverged_position: Vector3<f64>,
}

/// A craft hit the ground and was respawned above it.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub entity: Entity,
    pub impact_position: Vector3<f64>,
    pub impact_velocity: Vector3<f64>,
    pub ground_height: f64,
}
