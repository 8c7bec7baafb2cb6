//! Animation Driver
//!
//! Consumers of a run's event sequence. The driver owns all timing: it
//! decides how long to wait between events and whether to keep going, and
//! forwards each event to an [`EventSink`] such as a renderer or the textual
//! [`EventLog`].
//!
//! The driver is async so that pacing never blocks a thread. It needs a
//! `tokio` runtime with the time driver enabled whenever the configured delay
//! is non-zero.

mod config;
mod player;
mod sink;

pub use config::{DriverConfig, DEFAULT_DELAY_MS};
pub use player::{AnimationDriver, CancelHandle, Playback, RunReport};
pub use sink::{EventLog, EventSink, Recorder, TracingSink};
