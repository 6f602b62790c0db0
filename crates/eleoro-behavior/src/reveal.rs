//! One-shot reveal bookkeeping.
//!
//! Elements flagged for reveal get the active marker the first time the
//! observer reports them intersecting. After that they are dropped from
//! observation and never hidden again.
//!
//! The visibility threshold belongs to the observer itself. Notifications are
//! taken at face value here: an element taller than the viewport may never
//! reach the threshold ratio, yet it still intersects and must still reveal.

use std::collections::HashSet;
use std::hash::Hash;

/// Visible fraction at which the observer fires.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// What to do with an intersection notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element active and stop observing it.
    Activate,
    Ignore,
}

/// Tracks which observed elements are still waiting to be revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    pending: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Start watching an element. Already revealed elements stay revealed.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Handle a visibility change for `key`.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        if self.pending.remove(key) {
            self.revealed.insert(key.clone());
            RevealAction::Activate
        } else {
            RevealAction::Ignore
        }
    }

    /// Elements observed but not yet revealed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

impl<K: Eq + Hash + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
