//! # nodeinfo
//!
//! Client for the database node info protocol: the lightweight text
//! protocol used for status and metadata queries, separate from the main
//! data-access protocol.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Node (connect per request)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Read + Write
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Info Exchange                              │
//! │        (one write, header read, body read)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Message   │          │   Parser    │
//!   │  (framing)  │          │ (name\tval) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use nodeinfo::{Config, Node};
//!
//! let node = Node::new("127.0.0.1:3000", Config::default());
//! let info = node.info(&["build", "node"])?;
//! println!("{:?}", info.get("build"));
//! # Ok::<(), nodeinfo::InfoError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod info;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InfoError, Result};
pub use config::Config;
pub use info::{parse_statistics, request_info, request_info_with_limit};
pub use network::{Connection, Node};
pub use protocol::InfoMap;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of nodeinfo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
