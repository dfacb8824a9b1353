//! Observable value with non-blocking fan-out to subscriber endpoints.

use crate::error::{ObservableError, Result};
use crate::types::{ObservableConfig, ObservableStats, SubscriberId};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use super::subscriber::Subscriber;

/// Observable boolean, the common case.
pub type ObservableBool = Observable<bool>;

/// Sending half of one registered subscription.
struct Endpoint<T> {
    id: SubscriberId,
    sender: Sender<T>,
}

/// Everything behind the guard.
struct State<T> {
    current: T,
    /// Registered endpoints, in subscription order.
    subscribers: Vec<Endpoint<T>>,
    next_id: u64,
    closed: bool,
    stats: ObservableStats,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    config: ObservableConfig,
}

/// A value many parties can watch change.
///
/// Cloning produces another handle to the same value. Every `set` that changes
/// the value is pushed to each subscriber with a non-blocking send: a
/// subscriber whose endpoint is still full misses that change. Setting the
/// current value again notifies nobody.
///
/// Dropping the last handle releases every endpoint, the same as [`close`].
///
/// [`close`]: Observable::close
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + PartialEq> Observable<T> {
    /// Create an observable with the default config (one pending value per
    /// subscriber).
    pub fn new(initial: T) -> Self {
        Self::build(initial, ObservableConfig::default())
    }

    /// Create an observable with a custom config.
    pub fn with_config(initial: T, config: ObservableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(initial, config))
    }

    fn build(initial: T, config: ObservableConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    current: initial,
                    subscribers: Vec::new(),
                    next_id: 1,
                    closed: false,
                    stats: ObservableStats::default(),
                }),
                config,
            }),
        }
    }

    /// Register a new subscriber.
    ///
    /// The endpoint only sees changes accepted after this call; the current
    /// value is not replayed. Use [`get`](Observable::get) for a snapshot.
    pub fn subscribe(&self) -> Result<Subscriber<T>> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(ObservableError::AlreadyClosed);
        }

        let id = SubscriberId(state.next_id);
        state.next_id += 1;

        let (sender, receiver) = bounded(self.shared.config.buffer_size);
        state.subscribers.push(Endpoint { id, sender });

        debug!(
            subscriber = %id,
            subscribers = state.subscribers.len(),
            "Subscriber registered"
        );

        Ok(Subscriber::new(id, receiver))
    }

    /// Set the value, notifying subscribers if it changed.
    ///
    /// Returns whether the value changed. A no-op on a closed observable.
    pub fn set(&self, value: T) -> bool {
        match self.try_set(value) {
            Ok(changed) => changed,
            Err(_) => {
                trace!("Ignoring set on closed observable");
                false
            }
        }
    }

    /// Like [`set`](Observable::set), but fails with `AlreadyClosed` after
    /// [`close`](Observable::close).
    pub fn try_set(&self, value: T) -> Result<bool> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(ObservableError::AlreadyClosed);
        }

        if state.current == value {
            state.stats.suppressed += 1;
            trace!("Value unchanged, suppressing notification");
            return Ok(false);
        }

        state.current = value;
        state.stats.transitions += 1;

        let reap = self.shared.config.reap_disconnected;
        let State {
            current,
            subscribers,
            stats,
            ..
        } = &mut *state;

        // Fan out in subscription order. Never blocks on a subscriber.
        subscribers.retain(|endpoint| match endpoint.sender.try_send(current.clone()) {
            Ok(()) => {
                stats.delivered += 1;
                true
            }
            Err(TrySendError::Full(_)) => {
                stats.dropped += 1;
                trace!(subscriber = %endpoint.id, "Endpoint full, notification dropped");
                true
            }
            Err(TrySendError::Disconnected(_)) => {
                if reap {
                    stats.reaped += 1;
                    debug!(subscriber = %endpoint.id, "Receiver gone, endpoint reaped");
                }
                !reap
            }
        });

        Ok(true)
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.shared.state.lock().current.clone()
    }
}

impl<T> Observable<T> {
    /// Remove a subscription. Its subscriber sees `Closed` once drained.
    ///
    /// Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut state = self.shared.state.lock();
        match state.subscribers.iter().position(|endpoint| endpoint.id == id) {
            Some(index) => {
                state.subscribers.remove(index);
                debug!(
                    subscriber = %id,
                    subscribers = state.subscribers.len(),
                    "Subscriber removed"
                );
                true
            }
            None => false,
        }
    }

    /// Release every endpoint and refuse further subscriptions and changes.
    ///
    /// Idempotent. The value stays readable.
    pub fn close(&self) {
        let released = {
            let mut state = self.shared.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            std::mem::take(&mut state.subscribers)
        };

        debug!(released = released.len(), "Observable closed");
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Number of registered endpoints, including ones not yet reaped.
    pub fn subscriber_count(&self) -> usize {
        self.shared.state.lock().subscribers.len()
    }

    pub fn stats(&self) -> ObservableStats {
        let state = self.shared.state.lock();
        ObservableStats {
            subscribers: state.subscribers.len(),
            closed: state.closed,
            ..state.stats
        }
    }

    pub fn config(&self) -> &ObservableConfig {
        &self.shared.config
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Observable")
            .field("current", &state.current)
            .field("subscribers", &state.subscribers.len())
            .field("closed", &state.closed)
            .finish()
    }
}
