//! Receive side of a subscription.

use crate::error::{ObservableError, Result};
use crate::types::SubscriberId;
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::fmt;
use std::time::Duration;

/// Handle owned by one consumer, receiving the values an observable fans out.
///
/// Values arrive in the order they were set. Notifications that found the
/// endpoint full were dropped at the producer and never show up here.
pub struct Subscriber<T> {
    id: SubscriberId,
    receiver: Receiver<T>,
}

impl<T> Subscriber<T> {
    pub(crate) fn new(id: SubscriberId, receiver: Receiver<T>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Receive the next value (blocking).
    ///
    /// Returns `Closed` once the observable released this endpoint and every
    /// pending value has been drained.
    pub fn recv(&self) -> Result<T> {
        self.receiver.recv().map_err(|_| ObservableError::Closed)
    }

    /// Try to receive a value (non-blocking). `None` when nothing is pending.
    pub fn try_recv(&self) -> Result<Option<T>> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ObservableError::Closed),
        }
    }

    /// Receive with timeout. `None` when the timeout elapsed first.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<T>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(value) => Ok(Some(value)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(ObservableError::Closed),
        }
    }

    /// Number of values waiting to be received.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Blocking iterator that ends when the endpoint is closed.
    pub fn iter(&self) -> crossbeam_channel::Iter<'_, T> {
        self.receiver.iter()
    }
}

impl<T> Iterator for Subscriber<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

impl<'a, T> IntoIterator for &'a Subscriber<T> {
    type Item = T;
    type IntoIter = crossbeam_channel::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("pending", &self.pending())
            .finish()
    }
}
