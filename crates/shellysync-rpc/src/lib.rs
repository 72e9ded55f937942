//! HTTP JSON-RPC channel for Shelly Gen2+ devices.
//!
//! Gen2+ devices expose their RPC interface as HTTP POST to
//! `http://<address>/rpc`, one JSON frame per request. This crate owns the
//! channel mechanics only: endpoint construction, the request/response
//! envelope, timeout enforcement, and error classification.
//! `shellysync-core` maps these errors into user-facing diagnostics.
//!
//! A session is ephemeral by design — one logical device operation opens a
//! channel, makes its call, and tears the channel down. There is no pooling
//! and no cross-call state.

pub mod channel;
pub mod error;
pub mod transport;

pub use channel::{DEFAULT_RPC_TIMEOUT, HttpConnector, HttpSession, RpcConnector, RpcSession};
pub use error::Error;
pub use transport::TransportConfig;
