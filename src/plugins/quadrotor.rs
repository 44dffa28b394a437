use bevy::prelude::*;

use crate::components::{ControlIntent, Quadrotor, QuadrotorConfig};
use crate::plugins::{GroundContact, RunawayRecovered};
use crate::resources::{GroundConfig, GroundHeight, SimulationPaused};
use crate::systems::{
    altitude_hold_system, control_intent_system, ground_collision_system, pose_sync_system,
    pose_to_transform, quadrotor_update_system,
};

/// Per-frame stages, run in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum QuadrotorSet {
    Input,
    Simulate,
    Ground,
    Pose,
}

pub struct QuadrotorPlugin {
    config: QuadrotorConfig,
}

impl QuadrotorPlugin {
    pub fn new(config: QuadrotorConfig) -> Self {
        QuadrotorPlugin { config }
    }

    fn setup_quadrotor(mut commands: Commands, config: QuadrotorConfig) {
        info!(
            "Spawning quadrotor '{}' at {:?}",
            config.name, config.physics.spawn_position
        );
        let name = Name::new(config.name.clone());
        let craft = Quadrotor::new(config);
        commands.spawn((
            pose_to_transform(&craft),
            craft,
            ControlIntent::default(),
            name,
        ));
    }
}

impl Default for QuadrotorPlugin {
    fn default() -> Self {
        Self::new(QuadrotorConfig::default())
    }
}

impl Plugin for QuadrotorPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.init_resource::<SimulationPaused>()
            .init_resource::<GroundHeight>()
            .init_resource::<GroundConfig>()
            .add_event::<RunawayRecovered>()
            .add_event::<GroundContact>()
            .configure_sets(
                Update,
                (
                    QuadrotorSet::Input,
                    QuadrotorSet::Simulate,
                    QuadrotorSet::Ground,
                    QuadrotorSet::Pose,
                )
                    .chain(),
            )
            .add_systems(Startup, move |commands: Commands| {
                Self::setup_quadrotor(commands, config.clone())
            })
            .add_systems(
                Update,
                (
                    (control_intent_system, altitude_hold_system)
                        .chain()
                        .in_set(QuadrotorSet::Input),
                    quadrotor_update_system.in_set(QuadrotorSet::Simulate),
                    ground_collision_system.in_set(QuadrotorSet::Ground),
                    pose_sync_system.in_set(QuadrotorSet::Pose),
                ),
            );
    }
}
