use bevy::log::warn;
use nalgebra::Vector3;

use crate::components::SpatialComponent;
use crate::resources::PhysicsConfig;

/// What the safety monitor found and undid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunawayRecovery {
    /// Position at the moment divergence was detected
    pub diverged_position: Vector3<f64>,
    pub diverged_velocity: Vector3<f64>,
}

/// True when the state has left the playable volume or stopped being a number.
pub fn is_runaway(spatial: &SpatialComponent, runaway_limit: f64) -> bool {
    let non_finite = spatial.position.iter().any(|c| !c.is_finite())
        || spatial.velocity.iter().any(|c| !c.is_finite());
    non_finite || spatial.position.norm() > runaway_limit
}

/// Put a divergent craft back at spawn, at rest. Attitude is left alone.
pub fn check_runaway(
    spatial: &mut SpatialComponent,
    physics: &PhysicsConfig,
) -> Option<RunawayRecovery> {
    if !is_runaway(spatial, physics.runaway_limit) {
        return None;
    }

    let recovery = RunawayRecovery {
        diverged_position: spatial.position,
        diverged_velocity: spatial.velocity,
    };
    warn!(
        "Runaway state detected at {:?} (velocity {:?}), resetting to spawn {:?}",
        recovery.diverged_position, recovery.diverged_velocity, physics.spawn_position
    );

    spatial.position = physics.spawn_position;
    spatial.velocity = Vector3::zeros();
    Some(recovery)
}
