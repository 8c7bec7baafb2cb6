//! Animation Playback
//!
//! The driver pulls events from a run one at a time, hands each to a sink
//! and waits the configured delay before delivering the next. It is the only
//! place where time passes; the stepper itself stays synchronous.
//!
//! # Cancellation
//!
//! A [`CancelHandle`] stops playback at the next event boundary, waking a
//! pending delay immediately. Nothing is rolled back: the graph was never
//! mutated and the abandoned run's state table is simply dropped. Starting a
//! new run clears the flag and always goes through Init.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::search::{run_shortest_path, AlgorithmEvent, RunState, ShortestPath};

use super::config::DriverConfig;
use super::sink::EventSink;

#[derive(Debug, Default)]
struct CancelSignal {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared flag that asks a playback to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    signal: Arc<CancelSignal>,
}

impl CancelHandle {
    /// Request that playback stop before the next event.
    ///
    /// A playback waiting out its delay wakes up right away.
    pub fn cancel(&self) {
        self.signal.cancelled.store(true, Ordering::SeqCst);
        self.signal.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.signal.notify.notified();
            tokio::pin!(notified);
            // Register before checking the flag so a concurrent cancel is not missed.
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    fn reset(&self) {
        self.signal.cancelled.store(false, Ordering::SeqCst);
    }
}

/// How a playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Every event was delivered.
    Completed { delivered: usize },
    /// Playback was cancelled after `delivered` events.
    Cancelled { delivered: usize },
}

impl Playback {
    /// Number of events handed to the sink.
    pub fn delivered(&self) -> usize {
        match self {
            Playback::Completed { delivered } | Playback::Cancelled { delivered } => *delivered,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Playback::Completed { .. })
    }
}

/// Outcome of [`AnimationDriver::animate`].
#[derive(Debug, Clone)]
pub struct RunReport {
    pub playback: Playback,

    /// Per-node state at the point playback stopped.
    pub state: RunState,

    /// Shortest path to the target, when playback completed and the target
    /// is reachable.
    pub path: Option<Vec<NodeId>>,
}

/// Paces algorithm events for presentation.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    config: DriverConfig,
    cancel: CancelHandle,
}

impl AnimationDriver {
    /// Create a new driver with the given pacing.
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            cancel: CancelHandle::default(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Handle that cancels this driver's current playback.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Start a fresh run for playback.
    ///
    /// Clears any earlier cancellation, so a cancel issued after this call
    /// applies to the returned run.
    pub fn start<'g>(&self, graph: &'g Graph, source: NodeId, target: NodeId) -> Result<ShortestPath<'g>> {
        let run = run_shortest_path(graph, source, target)?;
        self.cancel.reset();
        Ok(run)
    }

    /// Deliver `events` to `sink` in order, waiting the configured delay
    /// between successive events.
    ///
    /// Events are never skipped or reordered; cancellation only ends the
    /// playback early. A cancel that arrives after the last event was
    /// delivered does not turn a completed playback into a cancelled one.
    /// The flag is left as is; [`start`](Self::start) clears it.
    ///
    /// The next event is pulled before the delay, so a run cancelled during
    /// a delay has computed one event the sink never saw.
    pub async fn play<I, S>(&self, events: I, sink: &mut S) -> Playback
    where
        I: IntoIterator<Item = AlgorithmEvent>,
        S: EventSink + ?Sized,
    {
        let delay = self.config.delay();
        let mut delivered = 0;

        info!(delay_ms = self.config.delay_ms, "starting playback");

        for event in events {
            if delivered > 0 && !delay.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = self.cancel.cancelled() => {}
                }
            }
            if self.cancel.is_cancelled() {
                warn!(delivered, "playback cancelled");
                return Playback::Cancelled { delivered };
            }

            sink.on_event(&event);
            delivered += 1;
        }

        info!(delivered, "playback complete");
        Playback::Completed { delivered }
    }

    /// Run a shortest-path search from `source` and play it to `sink`.
    ///
    /// The run is created and the cancel flag cleared when this is called,
    /// not when the returned future is first polled. Endpoint errors are
    /// returned before anything is delivered. An unreachable target is not an
    /// error: the report's `path` is `None`.
    pub fn animate<'a, S>(
        &'a self,
        graph: &'a Graph,
        source: NodeId,
        target: NodeId,
        sink: &'a mut S,
    ) -> impl Future<Output = Result<RunReport>> + 'a
    where
        S: EventSink + ?Sized,
    {
        let started = self.start(graph, source, target);
        async move {
            let mut run = started?;
            let playback = self.play(run.by_ref(), sink).await;
            let state = run.into_state();

            let path = if playback.is_completed() {
                match state.path_to(target) {
                    Ok(path) => Some(path),
                    Err(err) if err.is_unreachable() => None,
                    Err(err) => return Err(err),
                }
            } else {
                None
            };

            Ok(RunReport {
                playback,
                state,
                path,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::sink::{EventLog, Recorder};
    use crate::graph::Point;
    use crate::search::Distance;
    use std::time::Duration;
    use tokio::time::Instant;

    fn id(index: usize) -> NodeId {
        NodeId::from(index)
    }

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        for i in 0..3 {
            graph.add_node(Point::new(i as f64 * 10.0, 0.0));
        }
        graph.add_edge(id(0), id(1), 4).unwrap();
        graph.add_edge(id(0), id(2), 1).unwrap();
        graph.add_edge(id(2), id(1), 1).unwrap();
        graph
    }

    /// Cancels its driver once it has seen `limit` events.
    struct CancelAfter {
        limit: usize,
        seen: usize,
        handle: CancelHandle,
    }

    impl EventSink for CancelAfter {
        fn on_event(&mut self, _event: &AlgorithmEvent) {
            self.seen += 1;
            if self.seen == self.limit {
                self.handle.cancel();
            }
        }
    }

    #[tokio::test]
    async fn delivers_every_event_in_order() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });

        let mut recorder = Recorder::new();
        let run = run_shortest_path(&graph, id(0), id(1)).unwrap();
        let playback = driver.play(run, &mut recorder).await;

        let expected: Vec<_> = run_shortest_path(&graph, id(0), id(1)).unwrap().collect();
        assert_eq!(playback, Playback::Completed { delivered: expected.len() });
        assert_eq!(recorder.events(), expected.as_slice());
    }

    #[tokio::test]
    async fn paced_playback_still_completes() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 1 });

        let mut log = EventLog::new();
        let report = driver.animate(&graph, id(0), id(1), &mut log).await.unwrap();

        assert!(report.playback.is_completed());
        assert_eq!(report.path, Some(vec![id(0), id(2), id(1)]));
        assert_eq!(log.lines().first().map(String::as_str), Some("Visiting Node 0 (Distance: 0)"));
    }

    #[tokio::test]
    async fn cancellation_stops_at_event_boundary() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });
        let mut sink = CancelAfter {
            limit: 3,
            seen: 0,
            handle: driver.cancel_handle(),
        };

        let report = driver.animate(&graph, id(0), id(1), &mut sink).await.unwrap();

        assert_eq!(report.playback, Playback::Cancelled { delivered: 3 });
        assert!(report.path.is_none());
        assert_eq!(sink.seen, 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[tokio::test]
    async fn cancel_after_done_keeps_completed_run() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });
        let total = run_shortest_path(&graph, id(0), id(1)).unwrap().count();
        let mut sink = CancelAfter {
            limit: total,
            seen: 0,
            handle: driver.cancel_handle(),
        };

        let report = driver.animate(&graph, id(0), id(1), &mut sink).await.unwrap();

        assert_eq!(report.playback, Playback::Completed { delivered: total });
        assert_eq!(report.path, Some(vec![id(0), id(2), id(1)]));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_only_separates_events() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 100 });
        let total = run_shortest_path(&graph, id(0), id(1)).unwrap().count();

        let started = Instant::now();
        let mut recorder = Recorder::new();
        let report = driver.animate(&graph, id(0), id(1), &mut recorder).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(report.playback, Playback::Completed { delivered: total });
        let gaps = Duration::from_millis(100) * (total as u32 - 1);
        assert!(elapsed >= gaps, "elapsed {elapsed:?}");
        assert!(elapsed < gaps + Duration::from_millis(100), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_interrupts_pending_delay() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 3_000 });
        let handle = driver.cancel_handle();

        let started = Instant::now();
        let mut recorder = Recorder::new();
        let run = driver.start(&graph, id(0), id(1)).unwrap();
        let (playback, ()) = tokio::join!(driver.play(run, &mut recorder), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.cancel();
        });

        assert_eq!(playback, Playback::Cancelled { delivered: 1 });
        assert!(started.elapsed() < Duration::from_millis(3_000));
        assert_eq!(recorder.events().len(), 1);
    }

    #[tokio::test]
    async fn cancel_before_first_poll_is_kept() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });
        let handle = driver.cancel_handle();

        let mut recorder = Recorder::new();
        let pending = driver.animate(&graph, id(0), id(1), &mut recorder);
        handle.cancel();
        let report = pending.await.unwrap();

        assert_eq!(report.playback, Playback::Cancelled { delivered: 0 });
        assert!(report.path.is_none());
    }

    #[tokio::test]
    async fn cancelled_future_resolves_once_cancelled() {
        let handle = CancelHandle::default();
        let waiter = handle.clone();

        let (_, ()) = tokio::join!(waiter.cancelled(), async {
            tokio::task::yield_now().await;
            handle.cancel();
        });
        assert!(waiter.is_cancelled());

        // Already cancelled: resolves without waiting.
        waiter.cancelled().await;
    }

    #[tokio::test]
    async fn replay_after_cancel_starts_fresh() {
        let graph = triangle();
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });
        let mut sink = CancelAfter {
            limit: 2,
            seen: 0,
            handle: driver.cancel_handle(),
        };
        driver.animate(&graph, id(0), id(1), &mut sink).await.unwrap();

        let mut recorder = Recorder::new();
        let report = driver.animate(&graph, id(0), id(1), &mut recorder).await.unwrap();

        assert!(report.playback.is_completed());
        assert_eq!(report.state.distance(id(1)), Distance::Finite(2));
        assert_eq!(recorder.events().last(), Some(&AlgorithmEvent::Done));
    }

    #[tokio::test]
    async fn unreachable_target_has_no_path() {
        let mut graph = triangle();
        let isolated = graph.add_node(Point::new(50.0, 50.0));
        let driver = AnimationDriver::new(DriverConfig { delay_ms: 0 });

        let mut recorder = Recorder::new();
        let report = driver.animate(&graph, id(0), isolated, &mut recorder).await.unwrap();

        assert!(report.playback.is_completed());
        assert!(report.path.is_none());
        assert_eq!(report.state.distance(isolated), Distance::Infinite);
    }

    #[tokio::test]
    async fn bad_endpoints_fail_before_playback() {
        let graph = triangle();
        let driver = AnimationDriver::default();

        let mut recorder = Recorder::new();
        let result = driver.animate(&graph, id(9), id(1), &mut recorder).await;

        assert!(result.is_err());
        assert!(recorder.events().is_empty());
    }
}
