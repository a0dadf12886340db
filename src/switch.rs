//! Relay Switching Logic
//!
//! The functional core of the antenna switch: the one-hot channel
//! selector and the select-bus encoder, plus the service object that ties
//! the two together for the request handlers.

pub mod encoder;
pub mod selector;

use std::sync::{Mutex, PoisonError};

pub use encoder::ChannelEncoder;
pub use selector::{ChannelSelector, Selection, SwitchError};

use crate::config::{CHANNEL_COUNT, SELECT_LINE_COUNT};
use crate::hal::gpio::OutputLine;

/// Selector and encoder behind one shared handle
///
/// One instance is created at startup and shared by reference across all
/// request workers. The selector serializes selection updates; the
/// encoder sits behind its own lock, taken only after the selector lock
/// is released, so relay latency never blocks state reads. Under
/// concurrent toggles the reported vector and the physical bus can
/// disagree for the duration of one hardware write; the bank is operated
/// by a single person, so the last writer settling wins is acceptable.
pub struct SwitchService<L: OutputLine> {
    selector: ChannelSelector,
    encoder: Mutex<ChannelEncoder<L>>,
}

impl<L: OutputLine> SwitchService<L> {
    /// Create a service over a claimed encoder with the full channel count
    #[must_use]
    pub fn new(encoder: ChannelEncoder<L>) -> Self {
        Self {
            selector: ChannelSelector::new(CHANNEL_COUNT),
            encoder: Mutex::new(encoder),
        }
    }

    /// Snapshot of the current selection vector
    #[must_use]
    pub fn states(&self) -> Vec<bool> {
        self.selector.states()
    }

    /// Toggle a channel and drive the new selection onto the bus
    ///
    /// Returns the new selection vector. An out-of-range id leaves both
    /// the vector and the bus untouched.
    pub fn toggle(&self, id: i64) -> Result<Vec<bool>, SwitchError> {
        let selection = self.selector.toggle(id)?;

        // Hardware write happens after the selector lock is released.
        let mut encoder = self
            .encoder
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        encoder.apply(selection.active);
        drop(encoder);

        tracing::info!(channel = %selection.active, "channel toggled");
        Ok(selection.states)
    }

    /// Read back the levels the select lines are currently driven to
    #[must_use]
    pub fn line_levels(&self) -> [bool; SELECT_LINE_COUNT] {
        self.encoder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_back()
    }
}
