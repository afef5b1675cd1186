//! Transport boundary: sensor events in, velocity commands out.
//!
//! The host middleware (or the built-in simulator) delivers telemetry as
//! [`SensorEvent`]s over a channel and consumes commands through a
//! [`CommandSink`]. The controller never talks to a wire protocol directly.

mod transport;

pub use transport::{
    create_command_channel, create_sensor_channel, ChannelSink, CommandReceiver, CommandSink,
    LoggingSink, SensorEvent, SensorReceiver, SensorSender,
};
