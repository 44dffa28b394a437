use crate::common::{assert_craft_valid, assert_position_eq, TestAppBuilder};
use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use quadflyer::{
    components::{AltitudeHold, ControlIntent, Quadrotor},
    plugins::{GroundContact, RunawayRecovered},
    resources::SimulationPaused,
    systems::controller::PidGains,
};

fn craft_entity(app: &mut App) -> Entity {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Quadrotor>>();
    query.single(world)
}

#[test]
fn test_plugin_spawns_single_craft() {
    let mut app = TestAppBuilder::new().build();

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_eq!(craft.config().name, "quadrotor");
    assert_craft_valid(craft);

    assert!(app.query_single::<ControlIntent>().is_some());
    assert!(app.query_single::<Name>().is_some());
    assert!(app.get_state::<SimulationPaused>().is_some());
}

#[test]
fn test_transform_follows_physics_pose() {
    let mut app = TestAppBuilder::new().build();
    app.query_single_mut::<ControlIntent>().unwrap().roll = 0.5;
    app.run_steps(30);

    let craft = app.query_single::<Quadrotor>().unwrap().clone();
    let transform = *app.query_single::<Transform>().unwrap();

    let position = craft.position();
    assert_relative_eq!(transform.translation.x, position.x as f32, epsilon = 1e-3);
    assert_relative_eq!(transform.translation.y, position.y as f32, epsilon = 1e-3);
    assert_relative_eq!(transform.translation.z, position.z as f32, epsilon = 1e-3);

    let orientation = craft.orientation();
    assert_relative_eq!(transform.rotation.w, orientation.w as f32, epsilon = 1e-6);
    assert_relative_eq!(transform.rotation.x, orientation.i as f32, epsilon = 1e-6);
}

#[test]
fn test_control_intent_reaches_craft() {
    let mut app = TestAppBuilder::new().build();
    *app.query_single_mut::<ControlIntent>().unwrap() = ControlIntent::new(1.0, -0.5, 2.0, 0.25);
    app.run_frame();

    let desired = app.query_single::<Quadrotor>().unwrap().desired();
    assert_eq!(desired.engine, 1.0);
    assert_eq!(desired.roll, -0.5);
    assert_eq!(desired.pitch, 1.0);
    assert_eq!(desired.yaw, 0.25);
}

#[test]
fn test_paused_simulation_holds_state() {
    let mut app = TestAppBuilder::new().paused().build();
    *app.query_single_mut::<ControlIntent>().unwrap() = ControlIntent::new(-1.0, 1.0, 1.0, 1.0);
    let before = app.query_single::<Quadrotor>().unwrap().state().clone();

    app.run_steps(20);

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert!(craft.is_paused());
    assert_eq!(craft.position(), before.spatial.position);
    assert_eq!(craft.velocity(), before.spatial.velocity);
    assert_eq!(craft.actuators(), before.actuators);

    app.set_paused(false);
    app.run_steps(5);
    let craft = app.query_single::<Quadrotor>().unwrap();
    assert!(!craft.is_paused());
    assert!(craft.position().z < before.spatial.position.z);
}

#[test]
fn test_runaway_sends_event() {
    let mut app = TestAppBuilder::new().build();
    let entity = craft_entity(&mut app.app);
    app.drain_events::<RunawayRecovered>();

    *app.query_single_mut::<Quadrotor>().unwrap().position_mut() =
        Vector3::new(0.0, 0.0, 6_000_000.0);
    app.run_frame();

    let events = app.drain_events::<RunawayRecovered>();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].entity, entity);
    assert!(events[0].diverged_position.z > 5_000_000.0);

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_eq!(craft.position(), craft.config().physics.spawn_position);
    assert_eq!(craft.velocity(), Vector3::zeros());
}

#[test]
fn test_ground_contact_respawns_above_sea_level() {
    let mut app = TestAppBuilder::new().build();
    app.drain_events::<GroundContact>();

    {
        let mut craft = app.query_single_mut::<Quadrotor>().unwrap();
        *craft.position_mut() = Vector3::new(40.0, -20.0, -3.0);
        *craft.velocity_mut() = Vector3::new(0.0, 0.0, -30.0);
    }
    app.run_frame();

    let events = app.drain_events::<GroundContact>();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].ground_height, 0.0);
    assert!(events[0].impact_velocity.z < 0.0);

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_position_eq(&craft.position(), &Vector3::new(0.0, 0.0, 100.0), 1e-12);
    assert_eq!(craft.velocity(), Vector3::zeros());
    assert_eq!(craft.angular_rates(), Default::default());
}

#[test]
fn test_ground_contact_uses_terrain_height() {
    let mut app = TestAppBuilder::new()
        .with_ground(|x: f64, _y: f64| if x > 0.0 { 600.0 } else { 0.0 })
        .build();

    // Spawn point sits on the low side of the ridge
    let events = app.drain_events::<GroundContact>();
    assert!(events.is_empty());

    *app.query_single_mut::<Quadrotor>().unwrap().position_mut() = Vector3::new(10.0, 0.0, 550.0);
    app.run_frame();

    let events = app.drain_events::<GroundContact>();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].ground_height, 600.0);
    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_position_eq(&craft.position(), &Vector3::new(0.0, 0.0, 700.0), 1e-12);
}

#[test]
fn test_altitude_hold_overrides_throttle() {
    let mut app = TestAppBuilder::new().build();
    let entity = craft_entity(&mut app.app);
    app.app
        .world_mut()
        .entity_mut(entity)
        .insert(AltitudeHold::new(450.0, PidGains::new(0.05, 0.02, 0.08)));

    // Full down stick is ignored while the autopilot flies
    app.query_single_mut::<ControlIntent>().unwrap().throttle = -1.0;
    app.run_steps(20 * 60);

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_relative_eq!(craft.position().z, 450.0, epsilon = 1.0);
    assert!(craft.velocity().z.abs() < 0.5);

    app.query_single_mut::<AltitudeHold>().unwrap().disengage();
    app.run_steps(60);
    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_eq!(craft.desired().engine, 0.0);
    assert!(craft.position().z < 450.0);
}

#[test]
fn test_long_frames_are_clamped() {
    let mut app = TestAppBuilder::new().with_frame_time(0.5).build();
    let mut reference = app.query_single::<Quadrotor>().unwrap().clone();

    app.run_frame();
    reference.update(1.0 / 30.0);

    let craft = app.query_single::<Quadrotor>().unwrap();
    assert_eq!(craft.state(), reference.state());
}
