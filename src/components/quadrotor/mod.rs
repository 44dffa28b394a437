pub mod config;
mod craft;
mod state;
mod views;

pub use config::{
    ConfigError, DampingConfig, QuadrotorConfig, RawQuadrotorConfig, TuningConfig,
    TuningOverrides, TuningProfile,
};
pub use craft::{FlightMode, Quadrotor};
pub use state::{
    AngularRates, ControlChannels, QuadrotorState, AXIS_RANGE, ENGINE_RANGE,
};
pub use views::{rotor_views, DebugView, RotorView, ROTOR_COUNT};
