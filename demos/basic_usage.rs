//! Basic usage example for listener-registry.
//!
//! Demonstrates:
//! - Registering trait-object listeners
//! - Notifying them with closures and with a named `Notifier`
//! - A listener that unregisters itself while being notified
//! - Watching registry operations through the trace callback
//!
//! Run with: `cargo run --example basic_usage`

use listener_registry::{Listeners, Notifier};
use std::sync::{Arc, Weak};

trait Download: Send + Sync {
    fn progress(&self, percent: u8);
    fn finished(&self, file: &str);
}

/// Prints every event it receives.
struct ConsoleView {
    name: &'static str,
}

impl Download for ConsoleView {
    fn progress(&self, percent: u8) {
        println!("   [{}] {}%", self.name, percent);
    }

    fn finished(&self, file: &str) {
        println!("   [{}] finished {}", self.name, file);
    }
}

/// Waits for the first finished download, then unregisters itself.
struct FirstFinish {
    downloads: Weak<Listeners<dyn Download>>,
}

impl Download for FirstFinish {
    fn progress(&self, _percent: u8) {}

    fn finished(&self, file: &str) {
        println!("   [first-finish] {} was first, leaving", file);
        if let Some(downloads) = self.downloads.upgrade() {
            downloads.remove(self);
        }
    }
}

/// Sends a percentage and remembers how many listeners saw it.
struct Progress {
    percent: u8,
    reached: usize,
}

impl Notifier<dyn Download> for Progress {
    fn notify(&mut self, listener: &dyn Download) {
        listener.progress(self.percent);
        self.reached += 1;
    }
}

fn main() {
    println!("=== listener-registry: Basic Usage ===\n");

    let downloads: Arc<Listeners<dyn Download>> = Arc::new(Listeners::new());

    downloads.set_trace_callback(|event| println!("   trace: {}", event));

    // -------------------------------------------------------------------------
    // 1. Register listeners
    // -------------------------------------------------------------------------
    println!("1. Registering listeners...");

    downloads.add(Arc::new(ConsoleView { name: "main" }));
    downloads.add(Arc::new(FirstFinish {
        downloads: Arc::downgrade(&downloads),
    }));

    println!("   Registered: {}", downloads.size());

    // -------------------------------------------------------------------------
    // 2. Notify with a named notifier
    // -------------------------------------------------------------------------
    println!("\n2. Reporting progress...");

    for percent in [25, 50, 100] {
        let mut progress = Progress { percent, reached: 0 };
        downloads.notify_with(&mut progress);
        println!("   {}% reached {} listeners", percent, progress.reached);
    }

    // -------------------------------------------------------------------------
    // 3. Notify with a closure; one listener removes itself
    // -------------------------------------------------------------------------
    println!("\n3. Finishing downloads...");

    downloads.notify(|listener| listener.finished("a.iso"));
    println!("   Listeners left: {}", downloads.size());

    downloads.notify(|listener| listener.finished("b.iso"));
    println!("   Listeners left: {}", downloads.size());

    // -------------------------------------------------------------------------
    // 4. Fallible dispatch
    // -------------------------------------------------------------------------
    println!("\n4. Dispatch that fails...");

    match downloads.try_notify(|_| Err("disk full")) {
        Ok(delivered) => println!("   delivered to {}", delivered),
        Err(err) => println!("   {}", err),
    }

    println!("\n=== Done ===");
}
