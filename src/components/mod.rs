pub mod controller;
pub mod quadrotor;
pub mod spatial;

pub use controller::{AltitudeHold, ControlIntent};
pub use quadrotor::{
    AngularRates, ConfigError, ControlChannels, DebugView, FlightMode, Quadrotor,
    QuadrotorConfig, QuadrotorState, RotorView, TuningConfig, TuningProfile,
};
pub use spatial::{LocalAxes, SpatialComponent};
