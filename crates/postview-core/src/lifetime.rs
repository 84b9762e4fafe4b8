//! Mount-scoped cancellation for asynchronous completions.
//!
//! A [`MountGuard`] is owned by one view instance. It is alive from creation
//! until teardown. The rendering surface never holds the view itself, only a
//! [`LoadTicket`] sharing the guard's flag, so a completion that arrives after
//! teardown can be recognised and dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness flag owned by a single mounted instance.
#[derive(Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Creates a guard in the mounted state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the owning instance is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Marks the owner as torn down. Irreversible.
    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Issues a ticket bound to this mount.
    #[must_use]
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Whether `ticket` was issued by this guard and the mount is still alive.
    #[must_use]
    pub fn accepts(&self, ticket: &LoadTicket) -> bool {
        Arc::ptr_eq(&self.alive, &ticket.alive) && self.is_mounted()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Handle given to the rendering surface for reporting load completion.
///
/// Cheap to clone; carries no access to view state.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    alive: Arc<AtomicBool>,
}

impl LoadTicket {
    /// Whether the mount this ticket belongs to is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}
