//! # Watchflag
//!
//! A shared observable value that independent consumers can watch without
//! polling.
//!
//! ## Core Concepts
//!
//! - **Observable**: Holds the current value and the registered endpoints
//! - **Subscriber**: A consumer's private, bounded receive endpoint
//! - **Fan-out**: Each change is offered to every endpoint with a non-blocking send
//! - **Drop-if-full**: A consumer that has not drained misses the change
//!
//! ## Example
//!
//! ```
//! use watchflag::ObservableBool;
//!
//! let is_node_active = ObservableBool::new(false);
//! let scheduler = is_node_active.subscribe().unwrap();
//!
//! assert!(is_node_active.set(true));
//! assert!(!is_node_active.set(true)); // unchanged, nobody notified
//!
//! assert_eq!(scheduler.try_recv().unwrap(), Some(true));
//! assert_eq!(scheduler.try_recv().unwrap(), None);
//! ```

pub mod error;
pub mod observable;
pub mod types;

// Re-exports
pub use error::{ObservableError, Result};
pub use observable::{Observable, ObservableBool, Subscriber};
pub use types::{ObservableConfig, ObservableStats, SubscriberId};
