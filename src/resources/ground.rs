use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Terrain height lookup supplied by the host.
pub trait HeightSampler {
    fn height_at(&self, x: f64, y: f64) -> f64;
}

/// Level ground at a fixed height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatGround(pub f64);

impl HeightSampler for FlatGround {
    fn height_at(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

impl<F> HeightSampler for F
where
    F: Fn(f64, f64) -> f64,
{
    fn height_at(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// The terrain the ground-contact system checks against.
#[derive(Resource)]
pub struct GroundHeight {
    sampler: Box<dyn HeightSampler + Send + Sync>,
}

impl Default for GroundHeight {
    fn default() -> Self {
        Self::flat(0.0)
    }
}

impl GroundHeight {
    pub fn new(sampler: impl HeightSampler + Send + Sync + 'static) -> Self {
        Self {
            sampler: Box::new(sampler),
        }
    }

    pub fn flat(height: f64) -> Self {
        Self::new(FlatGround(height))
    }

    pub fn height_at(&self, x: f64, y: f64) -> f64 {
        self.sampler.height_at(x, y)
    }
}

/// How the host reacts to ground contact.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Height above the ground at which a crashed craft reappears
    pub respawn_clearance: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            respawn_clearance: 100.0,
        }
    }
}
