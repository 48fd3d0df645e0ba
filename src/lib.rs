//! # Listener Registry
//!
//! A thread-safe registry of listeners for publishing events.
//!
//! Listeners are shared handles (`Arc<L>`, typically `Arc<dyn MyListener>`)
//! that any number of threads may add, remove and notify concurrently.
//! Notification copies the current listeners under a lock and delivers to
//! that snapshot with the lock released, so a listener may add or remove
//! listeners (itself included) while it is being notified.
//!
//! ## Quick Start
//!
//! ```rust
//! use listener_registry::Listeners;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! trait Temperature: Send + Sync {
//!     fn changed(&self, celsius: u32);
//! }
//!
//! struct Display(AtomicU32);
//! impl Temperature for Display {
//!     fn changed(&self, celsius: u32) {
//!         self.0.store(celsius, Ordering::SeqCst);
//!     }
//! }
//!
//! let listeners: Listeners<dyn Temperature> = Listeners::new();
//! let display = Arc::new(Display(AtomicU32::new(0)));
//! listeners.add(display.clone());
//!
//! listeners.notify(|l| l.changed(21));
//! assert_eq!(display.0.load(Ordering::SeqCst), 21);
//!
//! listeners.remove(&*display);
//! assert_eq!(listeners.size(), 0);
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: All operations take `&self` and may run concurrently
//! - **Reentrant**: Listeners may call `add`/`remove` while being notified
//! - **Fail fast**: A failing notifier stops the dispatch and reaches the caller
//! - **Tracing support**: Optional per-registry callback plus `tracing` records
//!
//! ## Main Types
//!
//! - [`Listeners`] - The registry
//! - [`Notifier`] - Named, stateful alternative to a notification closure
//! - [`NotifyError`] - Failure of [`Listeners::try_notify`]
//! - [`ListenerEvent`] - Events passed to the trace callback
//! - [`define_listeners!`] - Named global registries

mod listener_event;
mod listeners;
mod macros;
mod notifier;
mod notify_error;

// Re-export the main public API
pub use listener_event::ListenerEvent;
pub use listeners::{Listeners, TraceCallback, DEFAULT_CAPACITY};
pub use notifier::Notifier;
pub use notify_error::NotifyError;
