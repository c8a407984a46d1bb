//! Lifetime guard for fire-and-forget async tasks.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Ties a spawned task to the lifetime of the component that spawned it.
///
/// Clone the guard into the task, cancel the original in `on_cleanup`, and
/// have the task check [`MountGuard::is_live`] before writing results back.
/// A fetch that settles after unmount is then discarded instead of racing a
/// disposed scope. `Arc<AtomicBool>` keeps the guard `Send + Sync`, which
/// `on_cleanup` requires.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl MountGuard {
    /// A live guard for a freshly mounted component.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Invalidate the guard. All clones observe the cancellation; it cannot
    /// be undone.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Relaxed);
    }

    /// True until any clone of this guard is cancelled.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
