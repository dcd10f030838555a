//! Response body parser
//!
//! Turns a `name[\tvalue]\n` record stream into a map in one left-to-right
//! pass. Malformed input never fails: stray delimiters and missing
//! terminators are resolved leniently.

use std::collections::HashMap;

/// Parsed info response: command name to returned value
pub type InfoMap = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Collecting a name starting at `begin`
    Name,
    /// Collecting the value for the name ending at `name_end`
    Value { name_start: usize, name_end: usize },
}

/// Parse a response body
///
/// - `a\tb\n` records `a -> b`
/// - `a\n`, `a\t\n` and a trailing unterminated `a` record `a -> ""`
/// - empty segments (`\n\n`) are skipped
/// - a later duplicate name overwrites an earlier one
///
/// Tabs inside a value are kept as part of the value.
pub fn parse_response(data: &[u8]) -> InfoMap {
    let mut responses = InfoMap::new();
    let mut state = State::Name;
    let mut begin = 0;

    for (offset, &byte) in data.iter().enumerate() {
        match (state, byte) {
            (State::Name, b'\t') => {
                state = State::Value {
                    name_start: begin,
                    name_end: offset,
                };
                begin = offset + 1;
            }
            (State::Name, b'\n') => {
                if offset > begin {
                    responses.insert(text(&data[begin..offset]), String::new());
                }
                begin = offset + 1;
            }
            (State::Value { name_start, name_end }, b'\n') => {
                responses.insert(
                    text(&data[name_start..name_end]),
                    text(&data[begin..offset]),
                );
                begin = offset + 1;
                state = State::Name;
            }
            _ => {}
        }
    }

    // Unterminated trailing record
    match state {
        State::Name if data.len() > begin => {
            responses.insert(text(&data[begin..]), String::new());
        }
        State::Value { name_start, name_end } => {
            responses.insert(text(&data[name_start..name_end]), text(&data[begin..]));
        }
        State::Name => {}
    }

    responses
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

