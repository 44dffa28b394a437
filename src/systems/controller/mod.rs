mod altitude_hold;
mod intent;
mod pid;
mod shaper;

pub use altitude_hold::{altitude_hold_command, altitude_hold_system};
pub use intent::control_intent_system;
pub use pid::{PidController, PidGains, INTEGRAL_LIMIT};
pub use shaper::{approach, shape_inputs};
