//! Observable values and their subscriber endpoints.
//!
//! An [`Observable`] holds one value behind a single lock. Each call to
//! `subscribe` registers a bounded endpoint; each `set` that changes the
//! value pushes it to every endpoint without blocking:
//! - Unchanged values are not re-sent
//! - A full endpoint misses the change (default capacity is one value)
//! - Endpoints whose receiver was dropped are reaped on the next change
//!
//! # Example
//!
//! ```ignore
//! let is_node_active = ObservableBool::new(false);
//! let sub = is_node_active.subscribe()?;
//!
//! std::thread::spawn(move || {
//!     for active in sub {
//!         println!("node active: {}", active);
//!     }
//! });
//!
//! is_node_active.set(true);
//! is_node_active.close();
//! ```

mod subscriber;
mod value;

pub use subscriber::Subscriber;
pub use value::{Observable, ObservableBool};
