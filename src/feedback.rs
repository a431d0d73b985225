//! Self-expiring "copied" markers, stored as expiry timestamps.
//!
//! Nothing here schedules work: the app asks whether a marker is still
//! active at a given instant and sweeps expired ones on every tick.
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::types::SlotIndex;

/// How long a single slot shows its "Copied" badge.
pub const COPY_ONE_WINDOW: Duration = Duration::from_millis(1200);

/// How long the copy-all button shows its check mark.
pub const COPY_ALL_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, Default)]
pub struct CopyFeedback {
    expires_at: HashMap<SlotIndex, Instant>,
}

impl CopyFeedback {
    pub fn is_active(&self, index: SlotIndex, now: Instant) -> bool {
        self.expires_at
            .get(&index)
            .is_some_and(|expires_at| now < *expires_at)
    }

    /// Start the window for `index` unless one is already running.
    /// Returns whether a new window was started.
    pub fn mark(&mut self, index: SlotIndex, now: Instant) -> bool {
        if self.is_active(index, now) {
            return false;
        }
        self.expires_at.insert(index, now + COPY_ONE_WINDOW);
        true
    }

    /// Drop every marker whose window has passed.
    pub fn expire(&mut self, now: Instant) {
        self.expires_at.retain(|_, expires_at| now < *expires_at);
    }

    pub fn len(&self) -> usize {
        self.expires_at.len()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CopyAllFeedback {
    expires_at: Option<Instant>,
}

impl CopyAllFeedback {
    pub fn is_active(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now < expires_at)
    }

    /// Start the window, or push it out again if it is already running.
    pub fn restart(&mut self, now: Instant) {
        self.expires_at = Some(now + COPY_ALL_WINDOW);
    }

    pub fn expire(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.expires_at = None;
        }
    }
}
