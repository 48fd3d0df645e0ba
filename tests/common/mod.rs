//! Listener and notifier fixtures shared by the integration tests.

#![allow(dead_code)]

use listener_registry::{Listeners, Notifier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};

pub type Registry = Listeners<dyn TestListener>;

/// A listener with two distinct event methods.
pub trait TestListener: Send + Sync {
    fn event_a(&self, number: usize);
    fn event_b(&self, message: &str);
}

/// Records every event it receives and unregisters itself from its registry
/// when a `B` message starts with `"remove"`.
pub struct TestListenerImpl {
    pub history_a: Mutex<Vec<usize>>,
    pub history_b: Mutex<Vec<String>>,
    self_removals: AtomicUsize,
    registry: Weak<Registry>,
}

impl TestListenerImpl {
    pub fn new(registry: &Arc<Registry>) -> Arc<Self> {
        Arc::new(Self {
            history_a: Mutex::new(Vec::new()),
            history_b: Mutex::new(Vec::new()),
            self_removals: AtomicUsize::new(0),
            registry: Arc::downgrade(registry),
        })
    }

    pub fn history_a(&self) -> Vec<usize> {
        self.history_a.lock().unwrap().clone()
    }

    pub fn history_b(&self) -> Vec<String> {
        self.history_b.lock().unwrap().clone()
    }

    /// Self-removals that actually found an entry.
    pub fn self_removals(&self) -> usize {
        self.self_removals.load(Ordering::SeqCst)
    }
}

impl TestListener for TestListenerImpl {
    fn event_a(&self, number: usize) {
        self.history_a.lock().unwrap().push(number);
    }

    fn event_b(&self, message: &str) {
        self.history_b.lock().unwrap().push(message.to_string());
        if message.starts_with("remove") {
            if let Some(registry) = self.registry.upgrade() {
                if registry.remove(self) {
                    self.self_removals.fetch_add(1, Ordering::SeqCst);
                }
            }
        }
    }
}

/// Which listener method a [`TestNotifier`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Only count deliveries
    Nothing,
    /// `event_a` with the running delivery count
    A,
    /// `event_b` with the notifier's message
    B,
}

pub struct TestNotifier {
    event: Event,
    pub count: usize,
    pub message: String,
}

impl TestNotifier {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            count: 0,
            message: "Default message".to_string(),
        }
    }

    pub fn with_message(event: Event, message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::new(event)
        }
    }
}

impl Notifier<dyn TestListener> for TestNotifier {
    fn notify(&mut self, listener: &dyn TestListener) {
        self.count += 1;
        match self.event {
            Event::Nothing => {}
            Event::A => listener.event_a(self.count),
            Event::B => listener.event_b(&self.message),
        }
    }
}
