//! Proto header
//!
//! Every message starts with one big-endian `u64`:
//! the top byte is the protocol version, the next byte the message type,
//! and the low 48 bits the body length.

use bytes::{Buf, BufMut};
use crate::error::{InfoError, Result};

/// Header size in bytes (fixed, exactly 8)
pub const HEADER_SIZE: usize = 8;

/// Protocol version carried in every header
pub const PROTO_VERSION: u8 = 2;

/// Largest body length representable in the 48-bit length field
pub const MAX_PROTO_LENGTH: u64 = (1 << 48) - 1;

/// Message types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    /// Info (administrative) protocol
    Info = 0x01,
    /// Main data-access protocol
    Message = 0x03,
}

impl MessageType {
    fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(MessageType::Info),
            0x03 => Some(MessageType::Message),
            _ => None,
        }
    }
}

/// Decoded proto header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub message_type: MessageType,
    /// Body length in bytes (48 bits on the wire)
    pub length: u64,
}

impl Header {
    /// Create an info header for a body of `length` bytes
    pub fn info(length: u64) -> Self {
        Self {
            version: PROTO_VERSION,
            message_type: MessageType::Info,
            length,
        }
    }

    /// Encode into the packed big-endian form
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        let proto = (u64::from(self.version) << 56)
            | (u64::from(self.message_type as u8) << 48)
            | (self.length & MAX_PROTO_LENGTH);
        buf.put_u64(proto);
    }

    /// Encode to a fixed array
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut slice = &mut out[..];
        self.encode_into(&mut slice);
        out
    }

    /// Decode a header, requiring exactly `HEADER_SIZE` bytes
    ///
    /// Only info headers at `PROTO_VERSION` are accepted.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HEADER_SIZE {
            return Err(InfoError::MalformedHeader(format!(
                "expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut buf = bytes;
        let proto = buf.get_u64();

        let version = (proto >> 56) as u8;
        let type_byte = (proto >> 48) as u8;
        let length = proto & MAX_PROTO_LENGTH;

        if version != PROTO_VERSION {
            return Err(InfoError::MalformedHeader(format!(
                "unsupported protocol version {} (expected {})",
                version, PROTO_VERSION
            )));
        }

        let message_type = match MessageType::from_u8(type_byte) {
            Some(MessageType::Info) => MessageType::Info,
            Some(other) => {
                return Err(InfoError::MalformedHeader(format!(
                    "unexpected message type {:?}",
                    other
                )))
            }
            None => {
                return Err(InfoError::MalformedHeader(format!(
                    "unknown message type 0x{:02x}",
                    type_byte
                )))
            }
        };

        Ok(Self {
            version,
            message_type,
            length,
        })
    }
}
