//! Info Exchange
//!
//! Drives one synchronous request/response cycle over an open connection.
//!
//! ## Sequence
//! 1. Build the request message from the command names
//! 2. Write header + body
//! 3. Read the fixed-size header
//! 4. Size the body buffer to the declared length
//! 5. Read the body and parse it
//!
//! The connection is borrowed, never closed here. Timeouts belong to the
//! connection; a transport error means the caller should discard it.

use std::collections::HashMap;
use std::io::{Read, Write};

use crate::config::DEFAULT_MAX_BODY_SIZE;
use crate::error::{InfoError, Result};
use crate::protocol::{parse_response, InfoMap, Message, HEADER_SIZE};

/// Name of the node statistics command
pub const STATISTICS: &str = "statistics";

/// Request info values by name on an open connection
///
/// An empty `names` slice requests every value the node exposes.
pub fn request_info<C, S>(conn: &mut C, names: &[S]) -> Result<InfoMap>
where
    C: Read + Write,
    S: AsRef<str>,
{
    request_info_with_limit(conn, names, DEFAULT_MAX_BODY_SIZE)
}

/// Same as `request_info`, rejecting responses whose body exceeds `max_body_size`
pub fn request_info_with_limit<C, S>(
    conn: &mut C,
    names: &[S],
    max_body_size: usize,
) -> Result<InfoMap>
where
    C: Read + Write,
    S: AsRef<str>,
{
    let mut message = Message::build(names);
    send_command(conn, &mut message, max_body_size)?;

    tracing::trace!("Info response of {} bytes", message.body().len());
    Ok(parse_response(message.body()))
}

/// Write the request and read the response into `message`
fn send_command<C: Read + Write>(
    conn: &mut C,
    message: &mut Message,
    max_body_size: usize,
) -> Result<()> {
    // Write
    let request = message.serialize();
    if let Err(e) = conn.write_all(&request).and_then(|_| conn.flush()) {
        tracing::debug!("Failed to send info command: {}", e);
        return Err(e.into());
    }

    // Read header
    let mut raw = [0u8; HEADER_SIZE];
    conn.read_exact(&mut raw)?;

    let header = message.read_header(&raw).map_err(|e| {
        tracing::debug!("Failed to read info response: {}", e);
        e
    })?;

    // Read body
    let body_len = usize::try_from(header.length).map_err(|_| InfoError::ResourceExhausted {
        requested: usize::MAX,
        limit: max_body_size,
    })?;
    message.resize_body(body_len, max_body_size)?;

    if body_len > 0 {
        conn.read_exact(message.body_mut())?;
    }

    Ok(())
}

/// Flatten a `statistics` value into key/value pairs
///
/// The value is a `;`-separated list of `key=value` items. Items without `=`
/// are dropped; anything after a second `=` is ignored.
pub fn parse_statistics(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|item| {
            let mut kv = item.split('=');
            let key = kv.next()?;
            let value = kv.next()?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Pull the flattened statistics out of an info response
///
/// A response without a `statistics` entry gives an empty map.
pub fn statistics_from(info: &InfoMap) -> HashMap<String, String> {
    info.get(STATISTICS)
        .map(|raw| parse_statistics(raw))
        .unwrap_or_default()
}
