//! Core types shared by observables and their subscribers.

use crate::error::{ObservableError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a subscription on one observable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriberId(pub u64);

impl fmt::Debug for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({})", self.0)
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for an observable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservableConfig {
    /// Pending values each subscriber endpoint can hold before new
    /// notifications to it are dropped.
    /// Default: 1
    pub buffer_size: usize,

    /// Remove endpoints whose receiver has been dropped when the next
    /// change is fanned out.
    /// Default: true
    pub reap_disconnected: bool,
}

impl Default for ObservableConfig {
    fn default() -> Self {
        Self {
            buffer_size: 1,
            reap_disconnected: true,
        }
    }
}

impl ObservableConfig {
    /// Config with a custom per-endpoint buffer.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(ObservableError::InvalidConfig(
                "buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Point-in-time counters for an observable value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservableStats {
    /// Endpoints currently registered.
    pub subscribers: usize,
    /// Accepted sets that changed the value.
    pub transitions: u64,
    /// Sets ignored because the value was unchanged.
    pub suppressed: u64,
    /// Notifications placed into an endpoint.
    pub delivered: u64,
    /// Notifications discarded because the endpoint was full.
    pub dropped: u64,
    /// Endpoints removed because their receiver went away.
    pub reaped: u64,
    pub closed: bool,
}
