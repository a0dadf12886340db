//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the antenna switch.
//! Channel count, select-bus width, pin mappings, and server defaults are
//! centralized here.

/// Number of selectable RF channels
pub const CHANNEL_COUNT: usize = 8;

/// Number of digital lines on the relay select bus
pub const SELECT_LINE_COUNT: usize = 3;

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default path of the HTML control page served at `/`
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/index.html";

/// Upper bound on accepted request body size in bytes
pub const MAX_REQUEST_BODY_BYTES: u64 = 4096;

/// Pin assignments for GPIO
pub mod pins {
    //! BCM pin numbers for the relay select bus.
    //!
    //! The relay bank decodes the three lines as a binary channel number,
    //! bit 0 on line A. Rewiring the bank means updating these three
    //! constants and nothing else.

    /// Select bus bit 0 (line A)
    pub const SELECT_A: u8 = 17;

    /// Select bus bit 1 (line B)
    pub const SELECT_B: u8 = 27;

    /// Select bus bit 2 (line C)
    pub const SELECT_C: u8 = 22;
}
