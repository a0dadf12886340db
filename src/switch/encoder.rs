//! Select-bus encoder
//!
//! Maps a validated channel to its 3-line select code and drives the code
//! onto the bus. The encoder owns the lines exclusively; no other
//! component writes them.

use crate::config::{CHANNEL_COUNT, SELECT_LINE_COUNT};
use crate::hal::gpio::OutputLine;
use crate::types::{ChannelId, SelectCode};

/// Display names of the select lines, in bus order
pub const SELECT_LINE_NAMES: [&str; SELECT_LINE_COUNT] = ["A", "B", "C"];

/// Channel-to-code table for the relay bank
///
/// This table is the wiring contract with the external decoder: line A
/// carries bit 0 of the channel number, line C bit 2. Every 3-bit pattern
/// is used exactly once. Spelled out entry by entry rather than computed;
/// the table, not the arithmetic, is the contract.
pub const SELECT_CODES: [SelectCode; CHANNEL_COUNT] = [
    SelectCode { a: false, b: false, c: false }, // RF1
    SelectCode { a: true,  b: false, c: false }, // RF2
    SelectCode { a: false, b: true,  c: false }, // RF3
    SelectCode { a: true,  b: true,  c: false }, // RF4
    SelectCode { a: false, b: false, c: true  }, // RF5
    SelectCode { a: true,  b: false, c: true  }, // RF6
    SelectCode { a: false, b: true,  c: true  }, // RF7
    SelectCode { a: true,  b: true,  c: true  }, // RF8
];

/// Drives the relay select bus
///
/// Owns the three select lines for the life of the process. Lines are
/// claimed before the server starts, so applying a code cannot fail.
pub struct ChannelEncoder<L: OutputLine> {
    lines: [L; SELECT_LINE_COUNT],
}

impl<L: OutputLine> ChannelEncoder<L> {
    /// Take ownership of the select lines and idle the bus low
    #[must_use]
    pub fn new(lines: [L; SELECT_LINE_COUNT]) -> Self {
        let mut encoder = Self { lines };
        for line in &mut encoder.lines {
            line.set_low();
        }
        encoder
    }

    /// Look up the select code for a channel
    #[must_use]
    pub const fn code_for(channel: ChannelId) -> SelectCode {
        SELECT_CODES[channel.index()]
    }

    /// Drive a channel's select code onto the bus
    ///
    /// All lines are driven low first, then the code's lines are asserted,
    /// so the bus never carries a mix of the old and new code. Afterwards
    /// each line's level is read back and logged; a mismatch is reported
    /// but not corrected.
    pub fn apply(&mut self, channel: ChannelId) {
        let wanted = Self::code_for(channel).lines();

        for line in &mut self.lines {
            line.set_low();
        }
        for (line, want) in self.lines.iter_mut().zip(wanted) {
            if want {
                line.set_high();
            }
        }

        for ((line, want), name) in self.lines.iter().zip(wanted).zip(SELECT_LINE_NAMES) {
            let level = line.read();
            tracing::debug!(line = name, level, "select line read-back");
            if level != want {
                tracing::warn!(
                    line = name,
                    want,
                    got = level,
                    "select line read-back mismatch"
                );
            }
        }
    }

    /// Read back the level each line is currently driven to, in bus order
    #[must_use]
    pub fn read_back(&self) -> [bool; SELECT_LINE_COUNT] {
        [
            self.lines[0].read(),
            self.lines[1].read(),
            self.lines[2].read(),
        ]
    }
}
