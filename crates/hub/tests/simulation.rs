//! End-to-end tests for the full hub stack.
//!
//! Each test wires a real hub (registry, user directory, notification
//! service) with real devices, decorators, observers, and strategies,
//! then drives everything through the hub's command routing — no mocks.

use std::sync::Arc;

use chrono::NaiveTime;

use domohub_core::decorators::{HumiditySensor, MotionSensor, TemperatureSensor};
use domohub_core::devices::{AirConditioner, Camera, CameraMode, Fan, Light};
use domohub_core::observers::{LoggingObserver, SecurityObserver};
use domohub_core::strategies::{ScheduledControl, TemperatureBasedControl, ThresholdMode};
use domohub_core::Device;
use domohub_hub::{HomeHub, User};

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

/// Hub with Alice and Bob registered, mirroring the demo's initial
/// user roster.
fn hub_with_users() -> HomeHub {
    let hub = HomeHub::new();
    hub.register_user(User::new("Alice", "alice@home.com"));
    hub.register_user(User::new("Bob", "bob@home.com"));
    hub
}

// ---------------------------------------------------------------------------
// Command routing and observer fan-out
// ---------------------------------------------------------------------------

#[test]
fn should_log_state_changes_routed_through_the_hub() {
    let mut hub = hub_with_users();
    let log = Arc::new(LoggingObserver::new());

    let mut light = Light::new("Living Room Light", hub.notification_sink());
    light.add_observer(log.clone());
    hub.register_device(Box::new(light), "Living Room");

    hub.send_command("Living Room Light", "MANUAL", &args(&["ON"]));
    hub.send_command("Living Room Light", "MANUAL", &args(&["ON"]));
    hub.send_command("Living Room Light", "DIM", &args(&["30"]));

    let entries = log.entries();
    // idempotent power-on logged once, then the brightness change
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("STATE_CHANGED"));
    assert!(entries[1].contains("BRIGHTNESS_CHANGED"));
    assert!(entries[1].contains("Brightness set to 30%"));
}

#[test]
fn should_share_one_logging_observer_across_devices() {
    let mut hub = hub_with_users();
    let log = Arc::new(LoggingObserver::new());

    let mut light = Light::new("Hall Light", hub.notification_sink());
    light.add_observer(log.clone());
    let mut fan = Fan::new("Kitchen Fan", hub.notification_sink());
    fan.add_observer(log.clone());
    hub.register_device(Box::new(light), "Hallway");
    hub.register_device(Box::new(fan), "Kitchen");

    hub.send_command("Hall Light", "MANUAL", &args(&["ON"]));
    hub.send_command("Kitchen Fan", "SET_SPEED", &args(&["3"]));

    let entries = log.entries();
    assert!(entries.iter().any(|line| line.contains("Hall Light")));
    assert!(entries.iter().any(|line| line.contains("Kitchen Fan")));
}

// ---------------------------------------------------------------------------
// Decorator chains through the registry
// ---------------------------------------------------------------------------

#[test]
fn should_expose_overlaid_status_through_the_registry() {
    let mut hub = hub_with_users();
    let ac = AirConditioner::new("Living Room AC", hub.notification_sink());
    let chain = TemperatureSensor::new(Box::new(ac));
    hub.register_device(Box::new(chain), "Living Room");

    let status = hub
        .registry()
        .find_by_name("Living Room AC")
        .unwrap()
        .status();
    assert_eq!(status.attribute("temperature"), Some("24"));
    assert_eq!(status.attribute("temperatureSensor"), Some("22.0"));
}

#[test]
fn should_route_unrecognized_action_through_the_chain_to_the_device() {
    let mut hub = hub_with_users();
    let fan = Fan::new("Kitchen Fan", hub.notification_sink());
    let chain = HumiditySensor::new(Box::new(fan));
    hub.register_device(Box::new(chain), "Kitchen");

    // SET_SPEED is not a humidity action; it must reach the fan intact
    hub.send_command("Kitchen Fan", "SET_SPEED", &args(&["4"]));

    let device = hub.registry().find_by_name("Kitchen Fan").unwrap();
    assert!(device.is_on());
    assert_eq!(device.status().attribute("speed"), Some("4"));
}

#[test]
fn should_emit_motion_events_only_on_transitions_via_routing() {
    let mut hub = hub_with_users();
    let log = Arc::new(LoggingObserver::new());

    let mut camera = Camera::new("Entry Camera", hub.notification_sink());
    camera.add_observer(log.clone());
    let chain = MotionSensor::new(Box::new(camera));
    hub.register_device(Box::new(chain), "Entry Hall");

    hub.send_command("Entry Camera", "SIMULATE_MOTION", &args(&["true"]));
    hub.send_command("Entry Camera", "SIMULATE_MOTION", &args(&["true"]));
    hub.send_command("Entry Camera", "SIMULATE_MOTION", &args(&["false"]));

    let entries = log.entries();
    let detected = entries
        .iter()
        .filter(|line| line.contains("MOTION_DETECTED"))
        .count();
    let stopped = entries
        .iter()
        .filter(|line| line.contains("MOTION_STOPPED"))
        .count();
    assert_eq!(detected, 1);
    assert_eq!(stopped, 1);
}

// ---------------------------------------------------------------------------
// Camera escalation and security monitoring
// ---------------------------------------------------------------------------

#[test]
fn should_escalate_away_mode_motion_to_security_log() {
    let mut hub = hub_with_users();
    let security = Arc::new(SecurityObserver::new(hub.notification_sink()));

    let mut camera = Camera::new("Entry Camera", hub.notification_sink());
    camera.add_observer(security.clone());
    let chain = MotionSensor::new(Box::new(camera));
    hub.register_device(Box::new(chain), "Entry Hall");

    // reach the camera through the chain without knowing concrete types
    let device = hub.registry_mut().find_by_name_mut("Entry Camera").unwrap();
    let controls = device.camera_controls().expect("camera in chain");
    controls.set_mode(CameraMode::Away);
    controls.signal_motion(true);

    let events = security.security_events();
    assert!(events.iter().any(|line| line.contains("SECURITY_ALERT")));
    assert_eq!(
        hub.registry()
            .find_by_name("Entry Camera")
            .unwrap()
            .status()
            .attribute("recordingActive"),
        Some("true")
    );
}

// ---------------------------------------------------------------------------
// Strategies driven through routing
// ---------------------------------------------------------------------------

#[test]
fn should_drive_temperature_strategy_through_routing() {
    let mut hub = hub_with_users();
    let mut ac = AirConditioner::new("Living Room AC", hub.notification_sink());
    ac.set_control_strategy(Box::new(TemperatureBasedControl::new(
        26.0,
        ThresholdMode::Above,
    )));
    hub.register_device(Box::new(ac), "Living Room");

    hub.send_command("Living Room AC", "CHECK", &args(&["CHECK", "27.5"]));
    assert!(hub.registry().find_by_name("Living Room AC").unwrap().is_on());

    hub.send_command("Living Room AC", "CHECK", &args(&["CHECK", "20.0"]));
    assert!(!hub.registry().find_by_name("Living Room AC").unwrap().is_on());
}

#[test]
fn should_reconfigure_schedule_through_routing() {
    let mut hub = hub_with_users();
    let mut light = Light::new("Porch Light", hub.notification_sink());
    light.set_control_strategy(Box::new(ScheduledControl::new(
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    )));
    hub.register_device(Box::new(light), "Porch");

    // malformed times are rejected without breaking the device
    hub.send_command(
        "Porch Light",
        "SET_ON_TIME",
        &args(&["SET_ON_TIME", "25:99"]),
    );
    // manual override still works through the strategy fallback
    hub.send_command("Porch Light", "MANUAL", &args(&["ON"]));
    assert!(hub.registry().find_by_name("Porch Light").unwrap().is_on());
}

// ---------------------------------------------------------------------------
// Status report
// ---------------------------------------------------------------------------

#[test]
fn should_render_full_status_report() {
    let mut hub = hub_with_users();
    let light = Light::new("Living Room Light", hub.notification_sink());
    hub.register_device(Box::new(light), "Living Room");
    let fan = Fan::new("Kitchen Fan", hub.notification_sink());
    let chain = HumiditySensor::new(Box::new(fan));
    hub.register_device(Box::new(chain), "Kitchen");

    let report = hub.status_report();
    assert!(report.contains("Room: Living Room"));
    assert!(report.contains("Room: Kitchen"));
    assert!(report.contains("Device: Kitchen Fan"));
    assert!(report.contains("humiditySensor: 50.0"));
}
