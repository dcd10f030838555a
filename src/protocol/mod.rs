//! Protocol Module
//!
//! Framing and parsing for the node info protocol.
//!
//! ## Message Format
//! ```text
//! ┌──────────┬──────────┬────────────────────────────┬───────────────┐
//! │ Ver (1)  │ Type (1) │       Length (6, BE)       │     Body      │
//! └──────────┴──────────┴────────────────────────────┴───────────────┘
//! ```
//!
//! ### Request Body
//! Command names joined by `\n`, with one trailing `\n`. An empty body asks
//! the node for every value it exposes.
//!
//! ### Response Body
//! A sequence of `name[\tvalue]\n` records.

mod header;
mod message;
mod parser;

pub use header::{Header, MessageType, HEADER_SIZE, MAX_PROTO_LENGTH, PROTO_VERSION};
pub use message::{decode_header, Message};
pub use parser::{parse_response, InfoMap};
