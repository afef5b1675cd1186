//! bhitti-nav - Wall-following controller daemon.
//!
//! Runs the reactive controller against the built-in room simulator.
//! Embedders integrating a real robot wire their transport to
//! [`bhitti_nav::io`] instead: push [`SensorEvent`]s into the sensor
//! channel and drain commands from a [`CommandSink`] implementation.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//!
//! # With custom config file
//! cargo run --release -- --config bhitti-nav.toml
//! ```
//!
//! [`SensorEvent`]: bhitti_nav::io::SensorEvent
//! [`CommandSink`]: bhitti_nav::io::CommandSink

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use bhitti_nav::config::FollowerConfig;
use bhitti_nav::io::{create_command_channel, create_sensor_channel, SensorEvent};
use bhitti_nav::sim::{RobotSim, SimConfig};
use bhitti_nav::threads::ControlThread;

/// Telemetry rates for the simulated feeds.
const ODOM_PERIOD: Duration = Duration::from_millis(50);
const SCAN_EVERY_NTH_STEP: u32 = 4;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    follower: FollowerConfig,
    sim: SimConfig,
}

#[derive(Debug)]
struct Args {
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args { config_path: None };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("bhitti-nav - wall-following controller for differential-drive robots");
    println!();
    println!("USAGE:");
    println!("    bhitti-nav [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     Configuration file (default: bhitti-nav.toml)");
    println!("    -h, --help              Print help information");
    println!();
    println!("CONFIGURATION:");
    println!("    All thresholds, speeds and simulation settings are configured");
    println!("    via the TOML config file; missing sections fall back to the");
    println!("    reference tuning.");
}

fn load_config(args: &Args) -> Config {
    match &args.config_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => match basic_toml::from_str(&contents) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path);
                    cfg
                }
                Err(e) => {
                    log::warn!("Failed to parse config {}: {}", path, e);
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path, e);
                Config::default()
            }
        },
        None => {
            for path in &["bhitti-nav.toml", "/etc/bhitti-nav.toml"] {
                if Path::new(path).exists() {
                    if let Ok(contents) = fs::read_to_string(path) {
                        if let Ok(cfg) = basic_toml::from_str(&contents) {
                            log::info!("Loaded config from {}", path);
                            return cfg;
                        }
                    }
                }
            }
            Config::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let config = load_config(&args);

    log::info!("bhitti-nav starting");
    log::info!("  Tick period: {} ms", config.follower.tick.period_ms);
    log::info!(
        "  Room: {:.1} x {:.1} m, lidar range {:.1} m",
        config.sim.room_width,
        config.sim.room_height,
        config.sim.range_max
    );

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");

    run_sim(&config, running);

    log::info!("bhitti-nav shutdown complete");
}

/// Drive the controller from the built-in simulator until shutdown.
fn run_sim(config: &Config, running: Arc<AtomicBool>) {
    let (sensor_tx, sensor_rx) = create_sensor_channel();
    let (sink, command_rx) = create_command_channel();

    let control = ControlThread::spawn(
        config.follower.clone(),
        sensor_rx,
        Box::new(sink),
        running.clone(),
    );

    let mut sim = RobotSim::new(&config.sim);
    let mut velocity = bhitti_nav::Twist2D::zero();
    let dt = ODOM_PERIOD.as_secs_f32();
    let mut step: u32 = 0;

    while running.load(Ordering::Relaxed) {
        std::thread::sleep(ODOM_PERIOD);

        // Latest command wins; earlier ones are superseded.
        while let Ok(cmd) = command_rx.try_recv() {
            velocity = cmd;
        }

        sim.step(velocity, dt);

        if sensor_tx.send(SensorEvent::Odometry(sim.odometry())).is_err() {
            break;
        }
        if step % SCAN_EVERY_NTH_STEP == 0 && sensor_tx.send(SensorEvent::Scan(sim.scan())).is_err()
        {
            break;
        }

        if step % 100 == 0 {
            let (x, y) = sim.position();
            log::info!(
                "Robot at ({:.2}, {:.2}), heading {:.2} rad",
                x,
                y,
                sim.heading()
            );
        }
        step = step.wrapping_add(1);
    }

    running.store(false, Ordering::Relaxed);
    drop(sensor_tx);
    if control.join().is_err() {
        log::error!("Control thread panicked");
    }
}
