pub mod controller;
pub mod physics;
mod quadrotor;

pub use controller::{altitude_hold_system, control_intent_system};
pub use quadrotor::{
    ground_collision_system, pose_sync_system, pose_to_transform, quadrotor_update_system,
};
