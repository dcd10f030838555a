//! Message Tests
//!
//! Tests for request building, serialization and body sizing.

use std::collections::HashSet;

use nodeinfo::protocol::{parse_response, Header, Message, MessageType, HEADER_SIZE};
use nodeinfo::InfoError;

// =============================================================================
// Build Tests
// =============================================================================

#[test]
fn test_build_single_command() {
    let message = Message::build(&["statistics"]);

    assert_eq!(message.body(), b"statistics\n");
    assert_eq!(message.header().length, 11);
    assert_eq!(message.header().message_type, MessageType::Info);
}

#[test]
fn test_build_multiple_commands() {
    let message = Message::build(&["build", "node", "service"]);
    assert_eq!(message.body(), b"build\nnode\nservice\n");
}

#[test]
fn test_build_no_commands_gives_empty_body() {
    let message = Message::build::<&str>(&[]);

    assert!(message.body().is_empty());
    assert_eq!(*message.header(), Header::info(0));
}

#[test]
fn test_build_blank_commands_gives_empty_body() {
    let message = Message::build(&["", "", "  "]);
    assert!(message.body().is_empty());
}

#[test]
fn test_build_trims_surrounding_whitespace() {
    let message = Message::build(&["  namespaces  "]);
    assert_eq!(message.body(), b"namespaces\n");
}

#[test]
fn test_build_keeps_inner_empty_names() {
    let message = Message::build(&["a", "", "b"]);
    assert_eq!(message.body(), b"a\n\nb\n");
}

#[test]
fn test_build_accepts_owned_strings() {
    let names = vec!["node".to_string(), "build".to_string()];
    let message = Message::build(&names);
    assert_eq!(message.body(), b"node\nbuild\n");
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_serialize_header_then_body() {
    let message = Message::build(&["node"]);
    let bytes = message.serialize();

    assert_eq!(bytes.len(), HEADER_SIZE + 5);
    assert_eq!(&bytes[..HEADER_SIZE], &[0x02, 0x01, 0, 0, 0, 0, 0, 5]);
    assert_eq!(&bytes[HEADER_SIZE..], b"node\n");
}

#[test]
fn test_serialize_empty_request() {
    let bytes = Message::build::<&str>(&[]).serialize();
    assert_eq!(&bytes[..], &[0x02, 0x01, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_request_body_parses_back_to_names() {
    let names = ["statistics", "build", "node", "namespace/test"];
    let message = Message::build(&names);

    let parsed = parse_response(message.body());
    let keys: HashSet<&str> = parsed.keys().map(String::as_str).collect();
    let expected: HashSet<&str> = names.iter().copied().collect();

    assert_eq!(keys, expected);
    assert!(parsed.values().all(String::is_empty));
}

// =============================================================================
// Header Read / Resize Tests
// =============================================================================

#[test]
fn test_read_header_replaces_header() {
    let mut message = Message::build(&["node"]);
    let header = message.read_header(&Header::info(42).encode()).unwrap();

    assert_eq!(header.length, 42);
    assert_eq!(message.header().length, 42);
}

#[test]
fn test_read_header_rejects_wrong_size() {
    let mut message = Message::build(&["node"]);
    let result = message.read_header(&[0x02, 0x01]);

    assert!(matches!(result, Err(InfoError::MalformedHeader(_))));
    assert_eq!(message.header().length, 5);
}

#[test]
fn test_resize_body_discards_contents() {
    let mut message = Message::build(&["statistics"]);
    message.resize_body(4, 1024).unwrap();

    assert_eq!(message.body(), &[0, 0, 0, 0]);
}

#[test]
fn test_resize_body_grows() {
    let mut message = Message::build(&["a"]);
    message.resize_body(4096, 4096).unwrap();

    assert_eq!(message.body().len(), 4096);
}

#[test]
fn test_resize_body_to_zero() {
    let mut message = Message::build(&["node"]);
    message.resize_body(0, 1024).unwrap();

    assert!(message.body().is_empty());
}

#[test]
fn test_resize_body_over_limit() {
    let mut message = Message::build(&["node"]);
    let err = message.resize_body(1025, 1024).unwrap_err();

    match err {
        InfoError::ResourceExhausted { requested, limit } => {
            assert_eq!(requested, 1025);
            assert_eq!(limit, 1024);
        }
        other => panic!("Expected ResourceExhausted, got {:?}", other),
    }
    assert_eq!(message.body(), b"node\n");
}

#[test]
fn test_resize_body_unallocatable() {
    let mut message = Message::build(&["node"]);
    let result = message.resize_body(usize::MAX, usize::MAX);

    assert!(matches!(result, Err(InfoError::ResourceExhausted { .. })));
}
