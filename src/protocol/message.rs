//! Info message framing
//!
//! Builds request messages and holds the header/body state of a response
//! while it is being read off the wire.

use bytes::{BufMut, Bytes, BytesMut};
use crate::error::{InfoError, Result};
use super::header::{Header, HEADER_SIZE};

/// One info message: proto header plus body bytes
///
/// Used for both directions of a single exchange. After a header read and
/// `resize_body`, the body length matches `header.length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Header,
    body: Vec<u8>,
}

impl Message {
    /// Build a request for the given command names
    ///
    /// Names are joined by `\n` and trimmed; a non-empty result gets one
    /// trailing `\n`. No names (or only blank ones) gives an empty body,
    /// which asks the node for everything.
    pub fn build<S: AsRef<str>>(commands: &[S]) -> Self {
        let joined = commands
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("\n");

        let mut text = joined.trim().to_string();
        if !text.is_empty() {
            text.push('\n');
        }

        let body = text.into_bytes();
        Self {
            header: Header::info(body.len() as u64),
            body,
        }
    }

    /// Header as last built or decoded
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut [u8] {
        &mut self.body
    }

    /// Serialize to wire form: header then body
    pub fn serialize(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.body.len());
        self.header.encode_into(&mut buf);
        buf.put_slice(&self.body);
        buf.freeze()
    }

    /// Decode an inbound header and make it this message's header
    pub fn read_header(&mut self, raw: &[u8]) -> Result<Header> {
        let header = decode_header(raw)?;
        self.header = header;
        Ok(header)
    }

    /// Replace the body with `new_len` zeroed bytes
    ///
    /// Fails with `ResourceExhausted` if `new_len` exceeds `limit` or the
    /// allocation cannot be made.
    pub fn resize_body(&mut self, new_len: usize, limit: usize) -> Result<()> {
        let exhausted = || InfoError::ResourceExhausted {
            requested: new_len,
            limit,
        };

        if new_len > limit {
            return Err(exhausted());
        }

        let mut body = Vec::new();
        body.try_reserve_exact(new_len).map_err(|_| exhausted())?;
        body.resize(new_len, 0);
        self.body = body;

        Ok(())
    }
}

/// Decode a fixed-size proto header
///
/// Fails with `MalformedHeader` unless `raw` is exactly `HEADER_SIZE` bytes
/// holding an info header at the supported version.
pub fn decode_header(raw: &[u8]) -> Result<Header> {
    Header::decode(raw)
}
