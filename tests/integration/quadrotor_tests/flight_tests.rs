use crate::common::{
    assert_attitude_eq, assert_craft_valid, create_flying_craft, create_test_config, FRAME_DT,
};
use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use quadflyer::components::{Quadrotor, QuadrotorConfig, TuningProfile};

const CRUISE_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cruise.yaml");

#[test]
fn test_free_fall_reaches_terminal_velocity() {
    let config = create_test_config();
    let terminal = config.terminal_velocity();
    let mut craft = Quadrotor::new(config);
    craft.set_engine_input(0.0);

    for _ in 0..(30 * 60) {
        craft.update(FRAME_DT);
    }

    assert_relative_eq!(-craft.velocity().z, terminal, max_relative = 1e-3);
    assert_relative_eq!(terminal, 49.5227, epsilon = 1e-3);
    assert_eq!(craft.velocity().x, 0.0);
    assert_eq!(craft.velocity().y, 0.0);
    assert_attitude_eq(&craft.orientation(), &UnitQuaternion::identity(), 1e-12);
}

#[test]
fn test_full_throttle_climbs() {
    let mut craft = Quadrotor::new(create_test_config());
    craft.set_engine_input(1.2);

    let mut last_altitude = craft.position().z;
    for _ in 0..60 {
        craft.update(FRAME_DT);
        assert!(craft.position().z > last_altitude);
        last_altitude = craft.position().z;
    }
    assert_relative_eq!(craft.actuators().engine, 1.2);
}

#[test]
fn test_yaw_turns_heading_and_stays_level() {
    let mut craft = Quadrotor::new(create_test_config());
    craft.set_yaw_input(1.0);

    for _ in 0..60 {
        craft.update(FRAME_DT);
    }

    let axes = craft.axes();
    assert_relative_eq!(axes.up, Vector3::z(), epsilon = 1e-9);
    assert!(axes.forward.y > 0.0);
    assert!(craft.angular_rates().yaw > 0.0);
    assert_eq!(craft.angular_rates().roll, 0.0);
    assert_eq!(craft.angular_rates().pitch, 0.0);
}

#[test]
fn test_released_sticks_settle() {
    let mut craft = create_flying_craft(120);
    assert!(craft.angular_rates().roll.abs() > 0.0);

    craft.set_roll_input(0.0);
    craft.set_yaw_input(0.0);
    for _ in 0..(10 * 60) {
        craft.update(FRAME_DT);
    }

    let rates = craft.angular_rates();
    assert!(rates.roll.abs() < 1e-6);
    assert!(rates.pitch.abs() < 1e-6);
    assert!(rates.yaw.abs() < 1e-3);
    assert_craft_valid(&craft);
}

#[test]
fn test_cruise_fixture_hovers_at_half_throttle() {
    let config = QuadrotorConfig::load(CRUISE_FIXTURE).unwrap();
    assert_eq!(config.name, "cruiser");
    assert_eq!(config.tuning.tilt_gain, 0.4);
    assert_relative_eq!(config.hover_threshold(), 0.5, epsilon = 1e-12);

    let mut craft = Quadrotor::new(config);
    assert_eq!(craft.position(), Vector3::new(0.0, 0.0, 250.0));

    for _ in 0..(5 * 60) {
        craft.update(FRAME_DT);
    }

    assert_relative_eq!(craft.position().z, 250.0, epsilon = 1e-6);
    assert!(craft.velocity().norm() < 1e-6);
}

#[test]
fn test_profiles_differ_in_feel() {
    let mut agile = Quadrotor::new(QuadrotorConfig::from_profile(TuningProfile::Agile));
    let mut cruise = Quadrotor::new(QuadrotorConfig::from_profile(TuningProfile::Cruise));
    for craft in [&mut agile, &mut cruise] {
        craft.set_roll_input(1.0);
        craft.update(FRAME_DT);
    }

    assert!(agile.actuators().roll > cruise.actuators().roll);
}

#[test]
fn test_save_and_reload_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agile.yaml");
    let config = create_test_config();

    config.save(&path).unwrap();
    let reloaded = QuadrotorConfig::load(&path).unwrap();

    assert_eq!(reloaded.name, config.name);
    assert_eq!(reloaded.tuning, config.tuning);
    assert_eq!(reloaded.physics, config.physics);
}
