//! Real-time flight dynamics for a single quadrotor.
//!
//! [`components::Quadrotor`] owns the craft state and advances it once per
//! frame. [`plugins::QuadrotorPlugin`] wires it into a Bevy app.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
