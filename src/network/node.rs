//! Node
//!
//! A remote database node addressed by `host:port`.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::Result;
use crate::info::{request_info_with_limit, statistics_from, STATISTICS};
use crate::protocol::InfoMap;
use super::Connection;

/// Info access to one node
///
/// Each request opens its own connection and drops it afterwards, so a
/// `Node` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Node {
    addr: String,
    config: Config,
}

impl Node {
    pub fn new(addr: impl Into<String>, config: Config) -> Self {
        Self {
            addr: addr.into(),
            config,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Request info values by name
    ///
    /// On error the connection is discarded and the error returned as-is.
    pub fn info<S: AsRef<str>>(&self, names: &[S]) -> Result<InfoMap> {
        let mut conn = Connection::connect(&self.addr, self.config.timeout)?;

        match request_info_with_limit(&mut conn, names, self.config.max_body_size) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::debug!("Info request to {} failed: {}", conn.peer_addr(), e);
                Err(e)
            }
        }
    }

    /// Request and flatten the node's statistics
    pub fn statistics(&self) -> Result<HashMap<String, String>> {
        let info = self.info(&[STATISTICS])?;
        Ok(statistics_from(&info))
    }
}
