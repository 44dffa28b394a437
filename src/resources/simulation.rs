use bevy::prelude::*;

/// Host-wide pause flag, read by every craft each frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationPaused(pub bool);

impl SimulationPaused {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}
