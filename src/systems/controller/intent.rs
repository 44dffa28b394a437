use bevy::prelude::*;

use crate::components::{ControlIntent, Quadrotor};

/// Push each craft's pilot intent through its clamped setters.
pub fn control_intent_system(mut query: Query<(&ControlIntent, &mut Quadrotor)>) {
    for (intent, mut craft) in query.iter_mut() {
        intent.apply(&mut craft);
    }
}
