use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::Quadrotor;
use crate::plugins::{GroundContact, RunawayRecovered};
use crate::resources::{GroundConfig, GroundHeight, SimulationPaused};

/// Advance every craft by the frame time, honouring the pause flag.
pub fn quadrotor_update_system(
    time: Res<Time>,
    paused: Res<SimulationPaused>,
    mut query: Query<(Entity, &mut Quadrotor)>,
    mut runaway_events: EventWriter<RunawayRecovered>,
) {
    let dt = time.delta_secs_f64();

    for (entity, mut craft) in query.iter_mut() {
        craft.set_paused(paused.0);
        if let Some(recovery) = craft.update(dt) {
            runaway_events.send(RunawayRecovered {
                entity,
                diverged_position: recovery.diverged_position,
            });
        }
    }
}

/// Respawn any craft that has sunk below the terrain or below sea level.
pub fn ground_collision_system(
    ground: Res<GroundHeight>,
    config: Res<GroundConfig>,
    mut query: Query<(Entity, &mut Quadrotor)>,
    mut contact_events: EventWriter<GroundContact>,
) {
    for (entity, mut craft) in query.iter_mut() {
        let position = craft.position();
        let ground_height = ground.height_at(position.x, position.y);
        if position.z >= ground_height && position.z >= 0.0 {
            continue;
        }

        let respawn_height = ground_height.max(0.0) + config.respawn_clearance;
        info!(
            "Ground contact at {:?}, respawning at altitude {}",
            position, respawn_height
        );
        contact_events.send(GroundContact {
            entity,
            impact_position: position,
            impact_velocity: craft.velocity(),
            ground_height,
        });
        craft.respawn(Vector3::new(0.0, 0.0, respawn_height));
    }
}

/// Mirror the physics pose into the render transform.
pub fn pose_sync_system(mut query: Query<(&Quadrotor, &mut Transform)>) {
    for (craft, mut transform) in query.iter_mut() {
        *transform = pose_to_transform(craft);
    }
}

pub fn pose_to_transform(craft: &Quadrotor) -> Transform {
    let position = craft.position();
    let orientation = craft.orientation();
    Transform::from_xyz(position.x as f32, position.y as f32, position.z as f32).with_rotation(
        Quat::from_xyzw(
            orientation.i as f32,
            orientation.j as f32,
            orientation.k as f32,
            orientation.w as f32,
        ),
    )
}
