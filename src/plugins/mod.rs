mod events;
mod quadrotor;

pub use events::{GroundContact, RunawayRecovered};
pub use quadrotor::{QuadrotorPlugin, QuadrotorSet};
