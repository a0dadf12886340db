//! One-hot channel selector
//!
//! Holds the selection vector and serializes every mutation. At most one
//! channel is ever on; the vector is all-off only between startup and the
//! first toggle.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::types::ChannelId;

/// Rejected selector operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// The requested channel id is outside `[0, count)`
    #[error("invalid channel id {id}: this switch has {count} channels")]
    InvalidChannel {
        /// The raw id as received from the caller
        id: i64,
        /// Number of channels on this switch
        count: usize,
    },
}

/// Result of a successful toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The channel left active by the toggle
    pub active: ChannelId,
    /// Snapshot of the full selection vector
    pub states: Vec<bool>,
}

/// The selection vector behind its lock
///
/// Shared by reference across request workers; all access goes through
/// one mutex, so readers only ever observe fully-formed vectors.
pub struct ChannelSelector {
    count: usize,
    states: Mutex<Vec<bool>>,
}

impl ChannelSelector {
    /// Create a selector with all channels off
    ///
    /// All-off is the pre-operational state: the relay bus idles low and
    /// no channel reads as selected until the first toggle.
    #[must_use]
    pub fn new(channel_count: usize) -> Self {
        Self {
            count: channel_count,
            states: Mutex::new(vec![false; channel_count]),
        }
    }

    /// Number of channels on this switch
    #[must_use]
    pub const fn channel_count(&self) -> usize {
        self.count
    }

    /// Snapshot copy of the selection vector
    #[must_use]
    pub fn states(&self) -> Vec<bool> {
        self.lock().clone()
    }

    /// Toggle a channel, enforcing mutual exclusion
    ///
    /// Selecting an off channel turns it on and every other channel off.
    /// Re-toggling the sole active channel is observably a no-op: the
    /// clear pass skips the target while it is still off, and the
    /// unconditional flip afterwards restores an active target that the
    /// clear pass just turned off. The vector therefore never lands
    /// all-off after a completed toggle.
    pub fn toggle(&self, id: i64) -> Result<Selection, SwitchError> {
        let active = ChannelId::new(id, self.count).ok_or(SwitchError::InvalidChannel {
            id,
            count: self.count,
        })?;
        let target = active.index();

        let mut states = self.lock();
        for i in 0..states.len() {
            if i == target && !states[i] {
                continue;
            }
            states[i] = false;
        }
        states[target] = !states[target];

        Ok(Selection {
            active,
            states: states.clone(),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<bool>> {
        // A panic mid-critical-section cannot leave the vector malformed
        // (every write is a plain bool store), so poisoning is recovered.
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
