//! A thread-safe registry of listeners with snapshot dispatch.
//!
//! Every mutation takes a single lock for as long as one `Vec` operation
//! lasts. Dispatch copies the registered `Arc`s under that lock, releases it,
//! and only then runs the notifier, so listener code may freely call back
//! into [`Listeners::add`] and [`Listeners::remove`] on the same registry.
//!
//! # Examples
//!
//! ```
//! use listener_registry::Listeners;
//! use std::sync::{Arc, Mutex};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self, name: &str);
//! }
//!
//! struct Recorder(Mutex<Vec<String>>);
//! impl Greeter for Recorder {
//!     fn greet(&self, name: &str) {
//!         self.0.lock().unwrap().push(format!("hello {name}"));
//!     }
//! }
//!
//! let greeters: Listeners<dyn Greeter> = Listeners::new();
//! let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
//! greeters.add(recorder.clone());
//!
//! greeters.notify(|g| g.greet("world"));
//! assert_eq!(*recorder.0.lock().unwrap(), vec!["hello world"]);
//! ```

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{ListenerEvent, Notifier, NotifyError};

/// Capacity reserved by the first insertion into a registry built with
/// [`Listeners::new`]. Most registries carry one or two listeners.
pub const DEFAULT_CAPACITY: usize = 2;

/// Callback receiving every [`ListenerEvent`] of one registry.
pub type TraceCallback = Arc<dyn Fn(&ListenerEvent) + Send + Sync>;

/// A thread-safe, ordered collection of listener handles.
///
/// `L` is the listener type, usually a trait object such as
/// `dyn MyListener`. Listeners are held as `Arc<L>`; the registry keeps one
/// strong reference per registration and never manages a listener's
/// lifecycle beyond that.
///
/// Equality is reference identity: [`remove`](Self::remove) drops the first
/// entry pointing at the same allocation as its argument. This lets a
/// listener unregister itself from inside a callback with only `&self`.
/// An equal value in a different allocation does not match; listener types
/// implementing `PartialEq` can use [`remove_eq`](Self::remove_eq) instead.
///
/// Registering the same listener twice is allowed and it is then notified
/// twice per dispatch.
pub struct Listeners<L: ?Sized> {
    entries: Mutex<Vec<Arc<L>>>,
    trace: Mutex<Option<TraceCallback>>,
}

impl<L: ?Sized> Listeners<L> {
    /// Creates an empty registry.
    ///
    /// This is a `const fn`, so a registry can be placed in a `static`.
    /// Nothing is allocated until the first listener is added.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            trace: Mutex::new(None),
        }
    }

    /// Creates an empty registry with room for `capacity` listeners.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
            trace: Mutex::new(None),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback for this registry's operations.
    ///
    /// The callback runs after the operation committed and outside every
    /// registry lock, so it may call back into the registry.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method automatically recovers by
    /// extracting the inner value.
    pub fn set_trace_callback(&self, callback: impl Fn(&ListenerEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Registered listeners are not affected.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Forward `event` to the trace callback, if one is set.
    ///
    /// The callback `Arc` is cloned out of the trace lock before it is
    /// invoked. A panicking callback propagates to the caller.
    fn emit_event(&self, event: ListenerEvent) {
        let callback = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        if let Some(callback) = callback {
            callback(&event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// The listener lock. The vector is structurally valid even after a
    /// panic elsewhere, so poisoning is ignored.
    fn entries(&self) -> MutexGuard<'_, Vec<Arc<L>>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Appends `listener` to the registry.
    pub fn add(&self, listener: Arc<L>) {
        let listeners = {
            let mut entries = self.entries();
            if entries.capacity() == 0 {
                entries.reserve_exact(DEFAULT_CAPACITY);
            }
            entries.push(listener);
            entries.len()
        };

        tracing::trace!(listeners, "listener added");
        self.emit_event(ListenerEvent::Add { listeners });
    }

    /// Appends `listener` if there is one; `None` is a silent no-op.
    pub fn add_opt(&self, listener: Option<Arc<L>>) {
        match listener {
            Some(listener) => self.add(listener),
            None => {
                tracing::trace!("add ignored, no listener given");
                self.emit_event(ListenerEvent::AddIgnored);
            }
        }
    }

    /// Removes the first registration of `listener`.
    ///
    /// Only one entry is dropped per call, so a listener added twice stays
    /// registered once. Returns `false` if `listener` was not registered.
    pub fn remove(&self, listener: &L) -> bool {
        self.remove_first(|entry| std::ptr::addr_eq(Arc::as_ptr(entry), listener))
    }

    fn remove_first(&self, matches: impl FnMut(&Arc<L>) -> bool) -> bool {
        let (found, listeners) = {
            let mut entries = self.entries();
            let position = entries.iter().position(matches);
            if let Some(index) = position {
                entries.remove(index);
            }
            (position.is_some(), entries.len())
        };

        tracing::trace!(found, listeners, "listener removal");
        self.emit_event(ListenerEvent::Remove { found, listeners });
        found
    }

    /// Removes the first registration of `listener` if there is one; `None`
    /// is a silent no-op returning `false`.
    pub fn remove_opt(&self, listener: Option<&L>) -> bool {
        match listener {
            Some(listener) => self.remove(listener),
            None => {
                tracing::trace!("remove ignored, no listener given");
                self.emit_event(ListenerEvent::RemoveIgnored);
                false
            }
        }
    }

    /// Number of registered listeners.
    ///
    /// A dispatch running concurrently works on its own snapshot and may
    /// visit a different number of listeners.
    pub fn size(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns whether `listener` is registered at least once.
    pub fn contains(&self, listener: &L) -> bool {
        self.entries()
            .iter()
            .any(|entry| std::ptr::addr_eq(Arc::as_ptr(entry), listener))
    }

    /// Copies the registered listeners, in registration order.
    ///
    /// Later mutations of the registry do not affect the returned vector.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.entries().clone()
    }

    /// Delivers an event to every listener registered when the call starts.
    ///
    /// The listeners are copied under the lock and `notifier` then runs once
    /// per entry, in registration order, with the lock released. Listeners
    /// added or removed by the notifier (or by other threads) meanwhile only
    /// affect later dispatches.
    ///
    /// # Panics
    ///
    /// A panic in `notifier` is not caught: it unwinds to the caller and the
    /// rest of the snapshot is not notified. The registry stays usable. No
    /// trace event is emitted for the aborted dispatch.
    pub fn notify<F>(&self, mut notifier: F)
    where
        F: FnMut(&L),
    {
        let snapshot = self.snapshot();

        for listener in &snapshot {
            notifier(&**listener);
        }

        tracing::trace!(delivered = snapshot.len(), "listeners notified");
        self.emit_event(ListenerEvent::Notify {
            delivered: snapshot.len(),
            snapshot: snapshot.len(),
        });
    }

    /// Like [`notify`](Self::notify), but `None` is a silent no-op: no
    /// snapshot is taken and nothing is delivered.
    pub fn notify_opt<F>(&self, notifier: Option<F>)
    where
        F: FnMut(&L),
    {
        if let Some(notifier) = notifier {
            self.notify(notifier);
        }
    }

    /// Delivers an event through a named [`Notifier`].
    ///
    /// The notifier is borrowed so that its state can be read afterwards.
    pub fn notify_with<N>(&self, notifier: &mut N)
    where
        N: Notifier<L> + ?Sized,
    {
        self.notify(|listener| notifier.notify(listener));
    }

    /// Delivers an event with a fallible notifier.
    ///
    /// Follows the same snapshot algorithm as [`notify`](Self::notify). The
    /// first error stops the dispatch: listeners after the failing one are
    /// not notified.
    ///
    /// Returns the number of listeners notified.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifyError`] wrapping the notifier's error, with the
    /// number of listeners notified before it.
    pub fn try_notify<F, E>(&self, mut notifier: F) -> Result<usize, NotifyError<E>>
    where
        F: FnMut(&L) -> Result<(), E>,
    {
        let snapshot = self.snapshot();

        for (delivered, listener) in snapshot.iter().enumerate() {
            if let Err(source) = notifier(&**listener) {
                tracing::debug!(
                    delivered,
                    snapshot = snapshot.len(),
                    "notifier failed, dispatch aborted"
                );
                self.emit_event(ListenerEvent::NotifyFailed {
                    delivered,
                    snapshot: snapshot.len(),
                });
                return Err(NotifyError {
                    source,
                    delivered,
                    snapshot: snapshot.len(),
                });
            }
        }

        tracing::trace!(delivered = snapshot.len(), "listeners notified");
        self.emit_event(ListenerEvent::Notify {
            delivered: snapshot.len(),
            snapshot: snapshot.len(),
        });
        Ok(snapshot.len())
    }

    /// Unregisters every listener.
    ///
    /// The trace callback is kept; use
    /// [`clear_trace_callback`](Self::clear_trace_callback) for that.
    pub fn clear(&self) {
        let removed = {
            let mut entries = self.entries();
            let removed = entries.len();
            entries.clear();
            removed
        };

        tracing::trace!(removed, "listeners cleared");
        self.emit_event(ListenerEvent::Clear { removed });
    }
}

impl<L: ?Sized + PartialEq> Listeners<L> {
    /// Removes the first registration whose value equals `listener`.
    ///
    /// For value types such as `Listeners<str>`, where a separately allocated
    /// but equal handle should match. `PartialEq` runs under the registry
    /// lock and must not call back into this registry.
    pub fn remove_eq(&self, listener: &L) -> bool {
        self.remove_first(|entry| **entry == *listener)
    }
}

impl<L: ?Sized> Default for Listeners<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for Listeners<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traced = self
            .trace
            .lock()
            .map(|t| t.is_some())
            .unwrap_or_else(|p| p.into_inner().is_some());
        f.debug_struct("Listeners")
            .field("size", &self.size())
            .field("traced", &traced)
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
