use std::fmt;

/// Returned by [`Listeners::try_notify`](crate::Listeners::try_notify) when a
/// notifier fails for one listener.
///
/// Dispatch stops at the first failure: the `delivered` listeners before it
/// were notified, the rest of the snapshot was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError<E> {
    /// The error returned by the notifier
    pub source: E,
    /// Listeners successfully notified before the failing one
    pub delivered: usize,
    /// Number of listeners captured in the snapshot
    pub snapshot: usize,
}

impl<E> NotifyError<E> {
    /// Number of snapshot entries that were never visited, the failing one excluded.
    pub fn skipped(&self) -> usize {
        self.snapshot.saturating_sub(self.delivered + 1)
    }

    /// Discards the dispatch counters and returns the notifier's error.
    pub fn into_source(self) -> E {
        self.source
    }
}

impl<E: fmt::Display> fmt::Display for NotifyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notifier failed on listener {} of {}: {}",
            self.delivered + 1,
            self.snapshot,
            self.source
        )
    }
}

impl<E> std::error::Error for NotifyError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
