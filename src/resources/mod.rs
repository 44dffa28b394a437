pub mod config;
mod ground;
mod simulation;

pub use config::physics::PhysicsConfig;
pub use ground::{FlatGround, GroundConfig, GroundHeight, HeightSampler};
pub use simulation::SimulationPaused;
