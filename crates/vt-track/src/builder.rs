//! Fluent builder for constructing a [`RouteTracker`].

use vt_core::TrackerConfig;
use vt_dispatch::{Dispatcher, PushObserver, PushTransport, TrackObserver};
use vt_notify::{KvStore, MemoryStore, NotificationEngine};
use vt_proximity::LegEstimates;

use crate::tracker::RouteTracker;

/// Fluent builder for [`RouteTracker<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                       |
/// |------------------|-----------------------------------------------|
/// | `.config(c)`     | [`TrackerConfig::default`] (500 m / 50 m)     |
/// | `.store(s)`      | [`MemoryStore`] (process-lifetime only)       |
/// | `.estimates(e)`  | none — delay events disabled                  |
/// | `.push(p)`       | no push channel                               |
///
/// # Example
///
/// ```rust,ignore
/// let mut tracker = TrackerBuilder::new()
///     .config(config)
///     .store(SqliteStore::open(path)?)
///     .estimates(estimates)
///     .push(platform_push)
///     .build();
/// tracker.start_route(driver, "Pat", Direction::ToSchool, stops, now);
/// ```
pub struct TrackerBuilder<S: KvStore = MemoryStore> {
    config:    TrackerConfig,
    store:     S,
    estimates: LegEstimates,
    push:      Option<Box<dyn TrackObserver>>,
}

impl TrackerBuilder<MemoryStore> {
    /// Start from defaults: baseline config, in-memory store, no estimates,
    /// no push channel.
    pub fn new() -> Self {
        Self {
            config:    TrackerConfig::default(),
            store:     MemoryStore::new(),
            estimates: LegEstimates::new(),
            push:      None,
        }
    }
}

impl Default for TrackerBuilder<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KvStore> TrackerBuilder<S> {
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the persistence backend (e.g. for `SqliteStore`).
    pub fn store<S2: KvStore>(self, store: S2) -> TrackerBuilder<S2> {
        TrackerBuilder {
            config:    self.config,
            store,
            estimates: self.estimates,
            push:      self.push,
        }
    }

    /// Supply expected-duration budgets for delay detection.  Without them
    /// no delay event ever fires (the evaluator only compares).
    pub fn estimates(mut self, estimates: LegEstimates) -> Self {
        self.estimates = estimates;
        self
    }

    /// Wire a best-effort push channel.  Delivery failures are logged and
    /// never reach the tracker.
    pub fn push<P: PushTransport + 'static>(mut self, transport: P) -> Self {
        self.push = Some(Box::new(PushObserver::new(transport)));
        self
    }

    /// Assemble the tracker: restore persisted notifications, subscribe the
    /// push channel (if any).
    pub fn build(self) -> RouteTracker<S> {
        let notifications = NotificationEngine::new(self.store, self.config.dedup_bucket_ms);

        let mut dispatcher = Dispatcher::new();
        if let Some(push) = self.push {
            dispatcher.subscribe(push);
        }

        RouteTracker::from_parts(self.config, self.estimates, notifications, dispatcher)
    }
}
