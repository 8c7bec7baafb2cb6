//! Event Sinks
//!
//! A sink is whatever the driver hands events to: a renderer, a textual log,
//! a test recorder. Sinks only observe; they cannot influence the run.

use tracing::info;

use crate::graph::NodeId;
use crate::search::{AlgorithmEvent, Distance};

/// A consumer of algorithm events.
pub trait EventSink {
    /// Receive the next event of a run.
    fn on_event(&mut self, event: &AlgorithmEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: &AlgorithmEvent) {
        (**self).on_event(event);
    }
}

/// Textual log of a run, one line per event.
///
/// A `NoUpdate` line also shows the distances of the comparison, taken from
/// the `EdgeExamined` event just before it.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    lines: Vec<String>,
    last_examined: Option<(NodeId, Distance, Distance)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole log, newline separated.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.last_examined = None;
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &AlgorithmEvent) {
        let line = match (*event, self.last_examined.take()) {
            (AlgorithmEvent::NoUpdate { id }, Some((to, current, candidate))) if id == to => {
                format!("{event} (Current: {current}, New: {candidate})")
            }
            _ => event.to_string(),
        };
        if let AlgorithmEvent::EdgeExamined {
            to,
            current_distance,
            candidate_distance,
            ..
        } = *event
        {
            self.last_examined = Some((to, current_distance, candidate_distance));
        }
        self.lines.push(line);
    }
}

/// Keeps every event it receives.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Vec<AlgorithmEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AlgorithmEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<AlgorithmEvent> {
        self.events
    }
}

impl EventSink for Recorder {
    fn on_event(&mut self, event: &AlgorithmEvent) {
        self.events.push(*event);
    }
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&mut self, event: &AlgorithmEvent) {
        match event.node() {
            Some(node) => info!(%node, "{event}"),
            None => info!("{event}"),
        }
    }
}
