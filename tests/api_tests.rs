//! Tests for the JSON API handlers
//!
//! Drives the handlers directly against a service with simulated select
//! lines; no listener is involved.

use antenna_switch::api;
use antenna_switch::hal::gpio::SimulatedLine;
use antenna_switch::switch::encoder::SELECT_CODES;
use antenna_switch::switch::{ChannelEncoder, SwitchService};

fn service() -> SwitchService<SimulatedLine> {
    SwitchService::new(ChannelEncoder::new([
        SimulatedLine::new("A"),
        SimulatedLine::new("B"),
        SimulatedLine::new("C"),
    ]))
}

// ============================================================================
// GET /api/state
// ============================================================================

#[test]
fn state_reports_all_off_before_first_toggle() {
    let service = service();
    let reply = api::state(&service);

    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "application/json");
    assert_eq!(
        reply.body,
        "[false,false,false,false,false,false,false,false]"
    );
}

#[test]
fn state_reflects_the_active_channel() {
    let service = service();
    service.toggle(4).unwrap();

    let states: Vec<bool> = serde_json::from_str(&api::state(&service).body).unwrap();
    assert!(states[4]);
    assert_eq!(states.iter().filter(|&&s| s).count(), 1);
}

// ============================================================================
// POST /api/toggle
// ============================================================================

#[test]
fn toggle_answers_with_the_new_vector() {
    let service = service();
    let reply = api::toggle(&service, r#"{"id": 2}"#);

    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "application/json");

    let states: Vec<bool> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(states.len(), 8);
    assert!(states[2]);
    assert_eq!(states.iter().filter(|&&s| s).count(), 1);
}

#[test]
fn toggle_drives_the_select_bus() {
    let service = service();

    api::toggle(&service, r#"{"id": 5}"#);
    assert_eq!(service.line_levels(), SELECT_CODES[5].lines());
}

#[test]
fn toggle_rejects_a_non_json_body() {
    let service = service();
    let reply = api::toggle(&service, "not json");

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, "Invalid request");
}

#[test]
fn toggle_rejects_a_body_without_id() {
    let service = service();
    let reply = api::toggle(&service, r#"{"channel": 2}"#);

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, "Invalid request");
}

#[test]
fn toggle_rejects_an_out_of_range_id() {
    let service = service();
    let reply = api::toggle(&service, r#"{"id": 9}"#);

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, "invalid channel id 9: this switch has 8 channels");
    // The bus and the vector are untouched.
    assert_eq!(service.states(), vec![false; 8]);
    assert_eq!(service.line_levels(), [false, false, false]);
}

#[test]
fn toggle_rejects_a_negative_id() {
    let service = service();
    let reply = api::toggle(&service, r#"{"id": -1}"#);

    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.body,
        "invalid channel id -1: this switch has 8 channels"
    );
}

// ============================================================================
// Routing constants
// ============================================================================

#[test]
fn method_not_allowed_is_a_405() {
    let reply = api::method_not_allowed();
    assert_eq!(reply.status, 405);
    assert_eq!(reply.body, "Method not allowed");
}

#[test]
fn invalid_request_is_a_400() {
    let reply = api::invalid_request();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, "Invalid request");
}

#[test]
fn not_found_is_a_404() {
    let reply = api::not_found();
    assert_eq!(reply.status, 404);
}

#[test]
fn index_serves_the_page_as_html() {
    let reply = api::index("<html></html>");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "text/html; charset=utf-8");
    assert_eq!(reply.body, "<html></html>");
}
