/// Events emitted by a listener registry during operations.
///
/// These events are passed to the tracing callback set via
/// [`Listeners::set_trace_callback`](crate::Listeners::set_trace_callback).
/// Counts are taken at the moment the operation committed, so a callback
/// can follow the registry size without calling back into it.
///
/// # Examples
///
/// ```rust
/// use listener_registry::ListenerEvent;
///
/// let event = ListenerEvent::Add { listeners: 1 };
/// assert_eq!(event.to_string(), "add { listeners: 1 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerEvent {
    /// A listener was appended.
    Add {
        /// Registry size after the insertion
        listeners: usize,
    },

    /// `add` was called without a listener.
    AddIgnored,

    /// A removal was attempted.
    Remove {
        /// Whether a matching listener was found and removed
        found: bool,
        /// Registry size after the attempt
        listeners: usize,
    },

    /// `remove` was called without a listener.
    RemoveIgnored,

    /// A dispatch ran to completion over its snapshot.
    Notify {
        /// Number of notifier invocations
        delivered: usize,
        /// Number of listeners captured in the snapshot
        snapshot: usize,
    },

    /// A [`try_notify`](crate::Listeners::try_notify) dispatch stopped at
    /// a notifier error. A panicking notifier unwinds past the registry and
    /// emits no event.
    NotifyFailed {
        /// Listeners notified before the failure
        delivered: usize,
        /// Number of listeners captured in the snapshot
        snapshot: usize,
    },

    /// The registry was cleared.
    Clear {
        /// Number of listeners dropped from the registry
        removed: usize,
    },
}

impl std::fmt::Display for ListenerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerEvent::Add { listeners } => write!(f, "add {{ listeners: {} }}", listeners),
            ListenerEvent::AddIgnored => write!(f, "add ignored (no listener)"),
            ListenerEvent::Remove { found, listeners } => write!(
                f,
                "remove {{ found: {}, listeners: {} }}",
                found, listeners
            ),
            ListenerEvent::RemoveIgnored => write!(f, "remove ignored (no listener)"),
            ListenerEvent::Notify {
                delivered,
                snapshot,
            } => write!(
                f,
                "notify {{ delivered: {}, snapshot: {} }}",
                delivered, snapshot
            ),
            ListenerEvent::NotifyFailed {
                delivered,
                snapshot,
            } => write!(
                f,
                "notify failed {{ delivered: {}, snapshot: {} }}",
                delivered, snapshot
            ),
            ListenerEvent::Clear { removed } => write!(f, "clear {{ removed: {} }}", removed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_event_display() {
        let event = ListenerEvent::Add { listeners: 2 };
        assert_eq!(event.to_string(), "add { listeners: 2 }");

        let event = ListenerEvent::Remove {
            found: true,
            listeners: 1,
        };
        assert_eq!(event.to_string(), "remove { found: true, listeners: 1 }");

        let event = ListenerEvent::Notify {
            delivered: 3,
            snapshot: 3,
        };
        assert_eq!(event.to_string(), "notify { delivered: 3, snapshot: 3 }");

        let event = ListenerEvent::NotifyFailed {
            delivered: 1,
            snapshot: 4,
        };
        assert_eq!(
            event.to_string(),
            "notify failed { delivered: 1, snapshot: 4 }"
        );
    }

    #[test]
    fn test_ignored_and_clear_display() {
        assert_eq!(
            ListenerEvent::AddIgnored.to_string(),
            "add ignored (no listener)"
        );
        assert_eq!(
            ListenerEvent::RemoveIgnored.to_string(),
            "remove ignored (no listener)"
        );
        assert_eq!(
            ListenerEvent::Clear { removed: 5 }.to_string(),
            "clear { removed: 5 }"
        );
    }

    #[test]
    fn test_listener_event_clone() {
        let event = ListenerEvent::Clear { removed: 0 };
        let cloned = event.clone();
        assert_eq!(event, cloned);
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
