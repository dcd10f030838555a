//! Network Module
//!
//! TCP connections to database nodes.
//!
//! ## Model
//! - One blocking `Connection` per exchange
//! - Timeouts set on the socket before the exchange starts
//! - No pooling: a `Node` opens, uses and drops a connection per request

mod connection;
mod node;

pub use connection::Connection;
pub use node::Node;
