//! Mount liveness.
//!
//! A view owns a [`Liveness`] for as long as it is mounted and hands
//! [`LivenessToken`]s to the fetches it starts. Dropping the `Liveness`
//! flips every token to dead, so a continuation that resolves later can
//! tell its view is gone before touching any state. The request itself is
//! not aborted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// True if `token` was issued by this mount.
    pub fn owns(&self, token: &LivenessToken) -> bool {
        Arc::ptr_eq(&self.alive, &token.alive)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

/// Cheap handle checked at the continuation boundary.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}
