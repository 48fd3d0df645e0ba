//! The single-method delivery contract used by
//! [`Listeners::notify_with`](crate::Listeners::notify_with).

/// Delivers one specific event to one listener.
///
/// The registry treats a notifier as an opaque callback: it is handed each
/// listener of a snapshot in turn and decides what to call on it. Notifiers
/// may carry their own state (payloads, counters, timestamps), which is why
/// `notify` takes `&mut self`.
///
/// Every `FnMut(&L)` closure is a notifier. Closures are normally passed
/// straight to [`Listeners::notify`](crate::Listeners::notify); implement the
/// trait on a named type when the event needs its own state and hand it to
/// [`Listeners::notify_with`](crate::Listeners::notify_with).
///
/// # Examples
///
/// ```rust
/// use listener_registry::{Listeners, Notifier};
/// use std::sync::Arc;
///
/// trait Progress: Send + Sync {
///     fn advanced(&self, percent: u8);
/// }
///
/// struct Printer;
/// impl Progress for Printer {
///     fn advanced(&self, percent: u8) {
///         println!("{percent}%");
///     }
/// }
///
/// /// Sends the same percentage to every listener and counts deliveries.
/// struct Advance {
///     percent: u8,
///     sent: usize,
/// }
///
/// impl Notifier<dyn Progress> for Advance {
///     fn notify(&mut self, listener: &dyn Progress) {
///         listener.advanced(self.percent);
///         self.sent += 1;
///     }
/// }
///
/// let progress: Listeners<dyn Progress> = Listeners::new();
/// progress.add(Arc::new(Printer));
///
/// let mut advance = Advance { percent: 50, sent: 0 };
/// progress.notify_with(&mut advance);
/// assert_eq!(advance.sent, 1);
/// ```
pub trait Notifier<L: ?Sized> {
    /// Deliver the event to `listener`.
    ///
    /// A panic here unwinds out of `notify` and the remaining listeners of
    /// the snapshot are not visited.
    fn notify(&mut self, listener: &L);
}

impl<L: ?Sized, F> Notifier<L> for F
where
    F: FnMut(&L),
{
    fn notify(&mut self, listener: &L) {
        self(listener)
    }
}
