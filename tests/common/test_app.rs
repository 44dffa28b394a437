use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use quadflyer::{
    components::QuadrotorConfig,
    plugins::QuadrotorPlugin,
    resources::{GroundHeight, HeightSampler, SimulationPaused},
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: QuadrotorConfig,
    ground: Option<GroundHeight>,
    frame_time: f64,
    paused: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: QuadrotorConfig::default(),
            ground: None,
            frame_time: 1.0 / 60.0,
            paused: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: QuadrotorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_ground(mut self, sampler: impl HeightSampler + Send + Sync + 'static) -> Self {
        self.ground = Some(GroundHeight::new(sampler));
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn paused(mut self) -> Self {
        self.paused = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(QuadrotorPlugin::new(self.config))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.frame_time,
            )))
            .insert_resource(SimulationPaused(self.paused));

        if let Some(ground) = self.ground {
            app.insert_resource(ground);
        }

        // Run an initial update to spawn the craft
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.app.world_mut().resource_mut::<SimulationPaused>().0 = paused;
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    /// Drain and return every event of type `E` sent so far
    pub fn drain_events<E: Event + Clone>(&mut self) -> Vec<E> {
        let mut events = self.app.world_mut().resource_mut::<Events<E>>();
        let drained: Vec<E> = events.drain().collect();
        drained
    }
}
