//! Control thread - the periodic decision loop.
//!
//! This thread:
//! - Drains scan/odometry events from the sensor channel as they arrive
//! - Fires a fixed-period ticker (default 100 ms)
//! - On each tick resolves staleness, evaluates the rule table and pushes
//!   the scaled command to the sink
//!
//! Pending sensor events are always drained before a tick is processed, so
//! every command is computed against a consistent snapshot. The thread
//! never blocks outside its `select!`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::select;

use crate::config::FollowerConfig;
use crate::control::WallFollower;
use crate::io::{CommandSink, SensorEvent, SensorReceiver};

/// Control thread handle.
pub struct ControlThread {
    handle: JoinHandle<()>,
}

impl ControlThread {
    /// Spawn the control thread.
    pub fn spawn(
        config: FollowerConfig,
        sensors: SensorReceiver,
        sink: Box<dyn CommandSink>,
        running: Arc<AtomicBool>,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("control".into())
            .spawn(move || run_loop(config, sensors, sink, running))
            .expect("Failed to spawn control thread");

        Self { handle }
    }

    /// Wait for the thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn run_loop(
    config: FollowerConfig,
    sensors: SensorReceiver,
    mut sink: Box<dyn CommandSink>,
    running: Arc<AtomicBool>,
) {
    let mut follower = WallFollower::new(&config);
    let ticker = crossbeam_channel::tick(Duration::from_millis(config.tick.period_ms));

    log::info!(
        "Control thread starting ({} ms tick)",
        config.tick.period_ms
    );

    while running.load(Ordering::Relaxed) {
        select! {
            recv(sensors) -> event => match event {
                Ok(event) => handle_sensor(&mut follower, event),
                Err(_) => {
                    log::info!("Sensor channel closed, stopping");
                    running.store(false, Ordering::Relaxed);
                }
            },
            recv(ticker) -> _ => {
                // Anything already queued belongs to this cycle's snapshot.
                while let Ok(event) = sensors.try_recv() {
                    handle_sensor(&mut follower, event);
                }

                if let Some(cmd) = follower.on_tick() {
                    log::debug!(
                        "{}: linear={:.2} angular={:.2} (scale {:.3})",
                        cmd.rule,
                        cmd.velocity.linear,
                        cmd.velocity.angular,
                        cmd.scale
                    );
                    if let Err(e) = sink.send_velocity(cmd.velocity) {
                        log::warn!("Failed to send velocity command: {}", e);
                    }
                }
            }
        }
    }

    log::info!("Control thread stopped");
}

fn handle_sensor(follower: &mut WallFollower, event: SensorEvent) {
    match event {
        SensorEvent::Scan(scan) => {
            if let Err(e) = follower.on_scan(&scan) {
                log::warn!("Dropping scan: {}", e);
            }
        }
        SensorEvent::Odometry(sample) => follower.on_odometry(&sample),
    }
}
