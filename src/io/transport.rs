//! Channel-based transport boundary.

use crossbeam_channel::{Receiver, Sender};

use crate::core::types::{LaserScan, OdometrySample, Twist2D};
use crate::error::{FollowerError, Result};

/// One inbound telemetry delivery.
#[derive(Debug, Clone)]
pub enum SensorEvent {
    /// Full-circle laser scan.
    Scan(LaserScan),
    /// Odometry update.
    Odometry(OdometrySample),
}

/// Sender end of the sensor feed (held by the transport).
pub type SensorSender = Sender<SensorEvent>;

/// Receiver end of the sensor feed (held by the control thread).
pub type SensorReceiver = Receiver<SensorEvent>;

/// Create the sensor feed channel pair.
pub fn create_sensor_channel() -> (SensorSender, SensorReceiver) {
    crossbeam_channel::unbounded()
}

/// Receiver end of the command stream (held by the transport).
pub type CommandReceiver = Receiver<Twist2D>;

/// Outbound velocity command sink.
///
/// Delivery is fire-and-forget: there is no acknowledgment and the next
/// cycle's command always supersedes the previous one.
pub trait CommandSink: Send {
    /// Hand one velocity command to the transport.
    fn send_velocity(&mut self, velocity: Twist2D) -> Result<()>;
}

/// Command sink backed by a crossbeam channel.
pub struct ChannelSink {
    tx: Sender<Twist2D>,
}

impl ChannelSink {
    /// Wrap a channel sender.
    pub fn new(tx: Sender<Twist2D>) -> Self {
        Self { tx }
    }
}

impl CommandSink for ChannelSink {
    fn send_velocity(&mut self, velocity: Twist2D) -> Result<()> {
        self.tx
            .send(velocity)
            .map_err(|_| FollowerError::Transport("command channel closed".into()))
    }
}

/// Create a channel-backed sink plus the receiver end for the transport.
pub fn create_command_channel() -> (ChannelSink, CommandReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ChannelSink::new(tx), rx)
}

/// Sink that only logs commands, for running without an attached drive.
pub struct LoggingSink;

impl CommandSink for LoggingSink {
    fn send_velocity(&mut self, velocity: Twist2D) -> Result<()> {
        log::info!(
            "cmd_vel: linear={:.3} m/s, angular={:.3} rad/s",
            velocity.linear,
            velocity.angular
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_delivers() {
        let (mut sink, rx) = create_command_channel();
        sink.send_velocity(Twist2D::new(0.3, 0.0)).unwrap();
        let cmd = rx.try_recv().unwrap();
        assert_eq!(cmd, Twist2D::new(0.3, 0.0));
    }

    #[test]
    fn test_channel_sink_errors_when_closed() {
        let (mut sink, rx) = create_command_channel();
        drop(rx);
        assert!(sink.send_velocity(Twist2D::zero()).is_err());
    }
}
