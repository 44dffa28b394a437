mod attitude;
mod forces;
mod safety;

pub use attitude::integrate_attitude;
pub use forces::{
    compute_forces, drag_force, integrate_translation, thrust_direction, ForceBreakdown,
};
pub use safety::{check_runaway, is_runaway, RunawayRecovery};
