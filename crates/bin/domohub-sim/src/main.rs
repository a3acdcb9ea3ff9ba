//! # domohub-sim — scripted smart-home simulation
//!
//! Composition root that wires everything together and runs a scripted
//! walkthrough of the device network.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the tracing subscriber
//! - Assemble the hub, register users and devices with their observers,
//!   decorators, and control strategies
//! - Drive a scripted sequence of commands through the hub and print the
//!   resulting report and event logs
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no device logic belongs here.

mod config;

use std::sync::Arc;

use chrono::NaiveTime;
use tracing_subscriber::EnvFilter;

use domohub_core::Device;
use domohub_core::decorators::{HumiditySensor, MotionSensor, TemperatureSensor};
use domohub_core::devices::{AirConditioner, Camera, CameraMode, Fan, Light};
use domohub_core::observers::{LoggingObserver, SecurityObserver};
use domohub_core::strategies::{ScheduledControl, TemperatureBasedControl, ThresholdMode};
use domohub_core::SensorRng;
use domohub_hub::{HomeHub, User};

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!("initializing smart home simulation");

    let mut hub = HomeHub::new();
    hub.register_user(User::new("Alice", "alice@home.com"));
    hub.register_user(User::new("Bob", "bob@home.com"));

    let event_log = match &config.simulation.event_log {
        Some(path) => Arc::new(LoggingObserver::with_file(path)),
        None => Arc::new(LoggingObserver::new()),
    };
    let security = Arc::new(SecurityObserver::new(hub.notification_sink()));

    let rng = |offset: u64| match config.simulation.seed {
        Some(seed) => SensorRng::seeded(seed.wrapping_add(offset)),
        None => SensorRng::new(),
    };

    // Living room: a scheduled light and a temperature-sensing AC.
    let mut light = Light::new("Living Room Light", hub.notification_sink());
    light.add_observer(event_log.clone());
    light.add_observer(security.clone());
    light.set_control_strategy(Box::new(ScheduledControl::new(
        NaiveTime::from_hms_opt(19, 0, 0).expect("valid time"),
        NaiveTime::from_hms_opt(23, 0, 0).expect("valid time"),
    )));
    hub.register_device(Box::new(light), "Living Room");

    let mut ac = AirConditioner::new("Living Room AC", hub.notification_sink());
    ac.add_observer(event_log.clone());
    ac.set_control_strategy(Box::new(TemperatureBasedControl::new(
        26.0,
        ThresholdMode::Above,
    )));
    hub.register_device(
        Box::new(TemperatureSensor::with_rng(Box::new(ac), rng(0))),
        "Living Room",
    );

    // Kitchen: a humidity-sensing fan.
    let mut fan = Fan::new("Kitchen Fan", hub.notification_sink());
    fan.add_observer(event_log.clone());
    hub.register_device(
        Box::new(HumiditySensor::with_rng(Box::new(fan), rng(1))),
        "Kitchen",
    );

    // Entry hall: a motion-sensing camera.
    let mut camera = Camera::new("Entry Camera", hub.notification_sink());
    camera.add_observer(event_log.clone());
    camera.add_observer(security.clone());
    hub.register_device(
        Box::new(MotionSensor::with_rng(Box::new(camera), rng(2))),
        "Entry Hall",
    );

    tracing::info!("smart home initialized, running scripted walkthrough");
    run_walkthrough(&mut hub);

    println!("{}", hub.status_report());

    println!("===== DEVICE EVENT LOG =====");
    for entry in event_log.entries() {
        println!("{entry}");
    }
    println!("============================");

    println!("===== SECURITY EVENT LOG =====");
    for entry in security.security_events() {
        println!("{entry}");
    }
    println!("==============================");

    Ok(())
}

/// The scripted command sequence: manual control, sensor readings,
/// strategy checks, and a security scenario.
fn run_walkthrough(hub: &mut HomeHub) {
    // Manual light control and dimming.
    send(hub, "Living Room Light", "MANUAL", &["ON"]);
    send(hub, "Living Room Light", "DIM", &["60"]);
    send(hub, "Living Room Light", "COLOR", &["Warm White"]);

    // The AC keeps its thermostat policy: force a hot reading, check,
    // then a cool one.
    send(hub, "Living Room AC", "SET_TEMP", &["22"]);
    send(hub, "Living Room AC", "READ_TEMPERATURE", &[]);
    send(hub, "Living Room AC", "CHECK", &["CHECK", "27.5"]);
    send(hub, "Living Room AC", "CHECK", &["CHECK", "21.0"]);

    // Kitchen humidity: a few drifting readings, then a forced breach.
    send(hub, "Kitchen Fan", "SET_SPEED", &["3"]);
    send(hub, "Kitchen Fan", "READ_HUMIDITY", &[]);
    send(hub, "Kitchen Fan", "SET_HUMIDITY", &["75"]);

    // Entry camera: arm away mode through the capability query, then a
    // motion pass on both the sensor and the camera.
    if let Some(device) = hub.registry_mut().find_by_name_mut("Entry Camera") {
        if let Some(controls) = device.camera_controls() {
            controls.set_mode(CameraMode::Away);
            controls.signal_motion(true);
            controls.signal_motion(false);
        }
    }
    send(hub, "Entry Camera", "SIMULATE_MOTION", &["true"]);
    send(hub, "Entry Camera", "SIMULATE_MOTION", &["false"]);
    send(hub, "Entry Camera", "GET_MOTION_EVENTS", &[]);
}

fn send(hub: &mut HomeHub, target: &str, action: &str, params: &[&str]) {
    let params: Vec<String> = params.iter().map(ToString::to_string).collect();
    hub.send_command(target, action, &params);
}
