//! Tests for the select-bus encoder
//!
//! Checks the channel-to-code table contract and the
//! clean-slate-then-assert drive sequence on simulated lines.

use std::collections::HashSet;

use antenna_switch::config::CHANNEL_COUNT;
use antenna_switch::hal::gpio::SimulatedLine;
use antenna_switch::switch::encoder::{ChannelEncoder, SELECT_CODES};
use antenna_switch::types::ChannelId;

fn simulated_bus() -> [SimulatedLine; 3] {
    [
        SimulatedLine::new("A"),
        SimulatedLine::new("B"),
        SimulatedLine::new("C"),
    ]
}

fn channel(id: usize) -> ChannelId {
    ChannelId::new(id as i64, CHANNEL_COUNT).unwrap()
}

// ============================================================================
// Table contract
// ============================================================================

#[test]
fn table_has_one_code_per_channel() {
    assert_eq!(SELECT_CODES.len(), CHANNEL_COUNT);
}

#[test]
fn table_codes_are_pairwise_distinct() {
    let distinct: HashSet<[bool; 3]> = SELECT_CODES.iter().map(|code| code.lines()).collect();
    assert_eq!(distinct.len(), CHANNEL_COUNT);
}

#[test]
fn table_covers_every_three_bit_pattern() {
    let codes: HashSet<[bool; 3]> = SELECT_CODES.iter().map(|code| code.lines()).collect();

    for pattern in 0..8u8 {
        let lines = [
            pattern & 0x01 != 0,
            pattern & 0x02 != 0,
            pattern & 0x04 != 0,
        ];
        assert!(codes.contains(&lines), "pattern {pattern:03b} missing");
    }
}

#[test]
fn table_encodes_channel_number_in_binary() {
    for (id, code) in SELECT_CODES.iter().enumerate() {
        assert_eq!(code.a, id & 0x01 != 0, "channel {id} line A");
        assert_eq!(code.b, id & 0x02 != 0, "channel {id} line B");
        assert_eq!(code.c, id & 0x04 != 0, "channel {id} line C");
    }
}

#[test]
fn code_for_matches_the_table() {
    for id in 0..CHANNEL_COUNT {
        assert_eq!(
            ChannelEncoder::<SimulatedLine>::code_for(channel(id)),
            SELECT_CODES[id]
        );
    }
}

// ============================================================================
// Drive sequence
// ============================================================================

#[test]
fn new_encoder_idles_the_bus_low() {
    let encoder = ChannelEncoder::new(simulated_bus());
    assert_eq!(encoder.read_back(), [false, false, false]);
}

#[test]
fn apply_asserts_exactly_the_tabled_lines() {
    let mut encoder = ChannelEncoder::new(simulated_bus());

    for id in 0..CHANNEL_COUNT {
        encoder.apply(channel(id));
        assert_eq!(encoder.read_back(), SELECT_CODES[id].lines(), "channel {id}");
    }
}

#[test]
fn apply_clears_the_previous_code() {
    let mut encoder = ChannelEncoder::new(simulated_bus());

    // RF8 asserts every line; RF1 must drop them all again.
    encoder.apply(channel(7));
    assert_eq!(encoder.read_back(), [true, true, true]);

    encoder.apply(channel(0));
    assert_eq!(encoder.read_back(), [false, false, false]);
}
