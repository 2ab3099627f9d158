//! Held-key bookkeeping for terminals with and without key-release events.
//!
//! Each key maps to the frame of its last press or repeat.  A key counts as
//! held while that frame is within `HOLD_WINDOW`.  Terminals without
//! keyboard enhancement report OS auto-repeat as fresh presses, so a press
//! that arrives while the key is still held is treated as a repeat.

use std::collections::HashMap;
use std::hash::Hash;

/// Frames a key stays held after its last press/repeat.  At 60 Hz this is
/// ≈133 ms, shorter than any OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Debug)]
pub struct KeyTracker<K> {
    last_seen: HashMap<K, u64>,
}

impl<K: Eq + Hash> Default for KeyTracker<K> {
    fn default() -> Self {
        KeyTracker {
            last_seen: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> KeyTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press.  Returns true only for a fresh press, i.e. one that
    /// is not an auto-repeat of a key already held.
    pub fn press(&mut self, key: K, frame: u64) -> bool {
        let fresh = !self.is_held(&key, frame);
        self.last_seen.insert(key, frame);
        fresh
    }

    pub fn repeat(&mut self, key: K, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: &K) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &K, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn any_held(&self, keys: &[K], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }
}
