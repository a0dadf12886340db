//! Antenna Switch Daemon Library
//!
//! This library provides the core functionality for a web-controlled
//! 8-channel RF antenna relay switch running on a Raspberry Pi. A small
//! HTTP server lets a single operator pick exactly one transmitter
//! channel; the selection is encoded onto a 3-line digital select bus
//! that drives an external multiplexed relay bank.
//!
//! # Architecture
//!
//! The daemon is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP BOUNDARY                            │
//! │  Routing  │  JSON API  │  Control Page                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    SWITCHING CORE                            │
//! │  Channel Selector (one-hot)  │  Channel Encoder (3-bit bus)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      HAL LAYER                               │
//! │  OutputLine  │  Raspberry Pi GPIO  │  Simulated Lines        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **One-hot invariant**: at most one channel is ever selected; the
//!   selector serializes every mutation behind a single lock
//! - **Type-driven design**: a validated [`types::ChannelId`] makes the
//!   encoder's table lookup total
//! - **Injected hardware**: relay lines are driven through the
//!   [`hal::gpio::OutputLine`] trait, so tests and off-target builds run
//!   against simulated lines
//! - **No I/O under the selector lock**: hardware writes happen after the
//!   new selection is computed, so relay latency never blocks state reads
//! - **Explicit error handling**: all fallible operations return `Result`

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// JSON API Handlers
///
/// Pure request/response logic for the HTTP endpoints.
pub mod api;

/// System configuration and constants
pub mod config;

/// Hardware Abstraction Layer
///
/// The select-line interface and its real and simulated backings.
pub mod hal;

/// HTTP Server
///
/// Socket handling and routing around the JSON API.
pub mod server;

/// Relay Switching Logic
///
/// The one-hot channel selector and the select-bus encoder.
pub mod switch;

/// Shared types used across modules
pub mod types;
