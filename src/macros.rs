//! Macros for creating named, global listener registries.

/// Creates a named global listener registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - A `static` [`Listeners`](crate::Listeners) for the given listener type (hidden)
/// - Free functions delegating to it
/// - `registry()`, returning the `&'static Listeners` for APIs taking a reference
///
/// The module glob-imports its parent, so the listener type may be named
/// exactly as it is written at the invocation site.
///
/// # Examples
///
/// ```rust
/// use listener_registry::define_listeners;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// pub trait Shutdown: Send + Sync {
///     fn on_shutdown(&self);
/// }
///
/// struct Flag(AtomicUsize);
/// impl Shutdown for Flag {
///     fn on_shutdown(&self) {
///         self.0.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// define_listeners!(shutdown_hooks, dyn Shutdown);
///
/// fn main() {
///     let flag = Arc::new(Flag(AtomicUsize::new(0)));
///     shutdown_hooks::add(flag.clone());
///     shutdown_hooks::notify(|hook| hook.on_shutdown());
///
///     assert_eq!(flag.0.load(Ordering::SeqCst), 1);
///     assert_eq!(shutdown_hooks::size(), 1);
/// }
/// ```
///
/// # Multiple Registries
///
/// Every invocation owns its own storage:
///
/// ```rust
/// use listener_registry::define_listeners;
/// use std::sync::Arc;
///
/// define_listeners!(audit, str);
/// define_listeners!(metrics, str);
///
/// audit::add(Arc::from("audit-log"));
///
/// assert_eq!(audit::size(), 1);
/// assert!(metrics::is_empty());
/// ```
#[macro_export]
macro_rules! define_listeners {
    ($name:ident, $listener:ty) => {
        #[allow(dead_code)]
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            /// The listener type. As an alias, a trait object here keeps its
            /// `'static` default even behind a reference.
            pub type RegisteredListener = $listener;

            // Storage for registered listeners (module-private)
            static LISTENERS: $crate::Listeners<RegisteredListener> = $crate::Listeners::new();

            /// The registry behind this module's functions.
            pub fn registry() -> &'static $crate::Listeners<RegisteredListener> {
                &LISTENERS
            }

            /// Append a listener.
            pub fn add(listener: ::std::sync::Arc<RegisteredListener>) {
                LISTENERS.add(listener)
            }

            /// Append a listener if there is one.
            pub fn add_opt(listener: ::std::option::Option<::std::sync::Arc<RegisteredListener>>) {
                LISTENERS.add_opt(listener)
            }

            /// Remove the first registration of a listener.
            pub fn remove(listener: &RegisteredListener) -> bool {
                LISTENERS.remove(listener)
            }

            /// Remove the first registration of a listener if there is one.
            pub fn remove_opt(listener: ::std::option::Option<&RegisteredListener>) -> bool {
                LISTENERS.remove_opt(listener)
            }

            /// Number of registered listeners.
            pub fn size() -> usize {
                LISTENERS.size()
            }

            /// Whether no listener is registered.
            pub fn is_empty() -> bool {
                LISTENERS.is_empty()
            }

            /// Deliver an event to a snapshot of the registered listeners.
            pub fn notify<F>(notifier: F)
            where
                F: FnMut(&RegisteredListener),
            {
                LISTENERS.notify(notifier)
            }

            /// Deliver an event with a fallible notifier, stopping at the first error.
            pub fn try_notify<F, E>(notifier: F) -> ::std::result::Result<usize, $crate::NotifyError<E>>
            where
                F: FnMut(&RegisteredListener) -> ::std::result::Result<(), E>,
            {
                LISTENERS.try_notify(notifier)
            }

            /// Unregister every listener.
            pub fn clear() {
                LISTENERS.clear()
            }

            /// Set a tracing callback for this registry.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::ListenerEvent) + Send + Sync + 'static,
            ) {
                LISTENERS.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                LISTENERS.clear_trace_callback()
            }
        }
    };
}
